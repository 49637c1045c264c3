//! Reservation error type.

use thiserror::Error;

use agv_core::{NodeId, PathRef};

/// Errors produced by the [`ReservationTable`](crate::ReservationTable).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReserveError {
    /// More visits to one node than the fleet has vehicles.  Indicates a
    /// planning bug (for example a vehicle committed twice without release).
    #[error("node {node} already holds {capacity} reservations")]
    CapacityExceeded { node: NodeId, capacity: usize },

    #[error("node {0} not found in reservation table")]
    NodeNotFound(NodeId),

    #[error("{0} does not name a committed path")]
    UnknownPath(PathRef),
}

pub type ReserveResult<T> = Result<T, ReserveError>;
