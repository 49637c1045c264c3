//! Graph-construction and geometry error types.

use thiserror::Error;

use agv_core::{CoreError, NodeId};

/// Errors produced while building or querying a [`GridGraph`](crate::GridGraph).
#[derive(Debug, Error)]
pub enum GridError {
    #[error("invalid grid spec: {0}")]
    InvalidSpec(#[from] CoreError),

    #[error("node {0} not found in graph")]
    NodeNotFound(NodeId),
}

pub type GridResult<T> = Result<T, GridError>;

/// Raised by [`turn_angle`](crate::turn_angle) when a heading has no length.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("zero-length direction vector")]
    Degenerate,
}
