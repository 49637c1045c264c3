//! Shared error type.
//!
//! Downstream crates keep their own enums and wrap `CoreError` where a
//! configuration problem can surface through them.

use thiserror::Error;

use crate::NodeId;

/// Errors raised by `agv-core` validation and by loaders built on it.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("node {0} not found")]
    NodeNotFound(NodeId),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `agv-core`.
pub type CoreResult<T> = Result<T, CoreError>;
