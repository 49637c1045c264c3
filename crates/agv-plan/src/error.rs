use agv_core::CoreError;
use agv_grid::GridError;
use agv_reserve::ReserveError;
use thiserror::Error;

/// Errors that abort a planning run.
///
/// Per-vehicle search failures are not errors; they are reported as
/// [`PlanFailure`](crate::PlanFailure) entries in the fleet report.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("planner configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("graph error: {0}")]
    Grid(#[from] GridError),

    /// A commit would exceed a node's reservation capacity.
    #[error("reservation error: {0}")]
    Reserve(#[from] ReserveError),

    #[error("reservation table covers {table} nodes but the graph has {graph}")]
    TableMismatch { table: usize, graph: usize },

    /// A fleet that repeats an AGV id or carries an unusable start time,
    /// or a fleet file row naming a node outside the graph.
    #[error("invalid fleet: {0}")]
    InvalidFleet(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PlanResult<T> = Result<T, PlanError>;
