//! `agv-grid` — the floor graph and what it costs to drive across it.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                     |
//! |-----------|--------------------------------------------------------------|
//! | [`graph`] | `GridGraph` (CSR adjacency + R-tree), `GridGraphBuilder`     |
//! | [`cost`]  | `heuristic`, `CostModel`, `turn_angle`                       |
//! | [`error`] | `GridError`, `GeometryError`, `GridResult<T>`                |
//!
//! Edge costs are never stored.  They depend on the node the vehicle came
//! from (for the turn term), so [`CostModel::travel_cost`] computes them on
//! demand from three positions.

pub mod cost;
pub mod error;
pub mod graph;


pub use cost::{heuristic, turn_angle, CostModel};
pub use error::{GeometryError, GridError, GridResult};
pub use graph::{GridGraph, GridGraphBuilder};
