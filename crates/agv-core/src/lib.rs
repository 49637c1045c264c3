//! `agv-core` — shared vocabulary for the `rust_agv` fleet planner.
//!
//! Every other `agv-*` crate depends on this one.  It has no `agv-*`
//! dependencies and only `thiserror` (plus optional `serde`) from outside.
//!
//! # What lives here
//!
//! | Module     | Contents                                               |
//! |------------|--------------------------------------------------------|
//! | [`ids`]    | `AgvId`, `NodeId`, `PathRef`                           |
//! | [`geo`]    | `Position`, `Direction`, Manhattan / Euclidean helpers |
//! | [`path`]   | `Path`, `PathStep`                                     |
//! | [`config`] | `GridSpec`, `PlannerConfig`, `TurnGuard`               |
//! | [`error`]  | `CoreError`, `CoreResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                              |
//! |---------|---------------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids, geometry, paths, and config. |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod path;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{GridSpec, PlannerConfig, TurnGuard};
pub use error::{CoreError, CoreResult};
pub use geo::{Direction, Position};
pub use ids::{AgvId, NodeId, PathRef};
pub use path::{Path, PathStep};
