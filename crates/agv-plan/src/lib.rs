//! `agv-plan` — cooperative route planning for a fleet of AGVs.
//!
//! # Planning loop
//!
//! ```text
//! for agv in fleet (caller order):
//!   ① Search:  run the search engine from agv.current to agv.goal with a
//!             CollisionAwareExpansion bound to agv's start time and the
//!             shared ReservationTable (read-only during the search).
//!   ② Commit:  on success reserve every (node, step, path) of the result
//!             so every later vehicle sees it.
//!   ③ Report:  record Planned / Failed for this vehicle and move on.
//! ```
//!
//! A vehicle that finds no path does not stop the run.  A reservation that
//! would overflow a node's capacity does: it means the fleet or table was
//! configured inconsistently.
//!
//! # Crate layout
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`fleet`]     | `AgvState`                                            |
//! | [`expansion`] | `CollisionAwareExpansion` (the search callback)       |
//! | [`planner`]   | `FleetPlanner`                                        |
//! | [`report`]    | `FleetReport`, `FleetSummary`, `AgvOutcome`, `PlanFailure` |
//! | [`observer`]  | `PlanObserver`, `NoopObserver`                        |
//! | [`loader`]    | `load_fleet_csv`, `load_fleet_reader`                 |
//! | [`error`]     | `PlanError`, `PlanResult<T>`                          |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use agv_core::{GridSpec, PlannerConfig};
//! use agv_grid::GridGraph;
//! use agv_plan::{AgvState, FleetPlanner};
//!
//! let graph = GridGraph::build(&GridSpec::default())?;
//! let planner = FleetPlanner::new(PlannerConfig::default())?;
//! let mut table = planner.new_table(&graph);
//! let report = planner.plan_fleet(&mut fleet, &graph, &mut table)?;
//! ```

pub mod error;
pub mod expansion;
pub mod fleet;
pub mod loader;
pub mod observer;
pub mod planner;
pub mod report;


pub use error::{PlanError, PlanResult};
pub use expansion::CollisionAwareExpansion;
pub use fleet::AgvState;
pub use loader::{load_fleet_csv, load_fleet_reader};
pub use observer::{NoopObserver, PlanObserver};
pub use planner::FleetPlanner;
pub use report::{AgvOutcome, FleetReport, FleetSummary, PlanFailure};
