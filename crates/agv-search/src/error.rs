//! Search failure type.

use thiserror::Error;

use agv_core::NodeId;

/// Why a search returned no path.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("no path from {from} to {to} ({expanded} nodes expanded)")]
    NoPath { from: NodeId, to: NodeId, expanded: usize },

    #[error("gave up on {from} -> {to} after {expanded} expansions")]
    ExpansionLimit { from: NodeId, to: NodeId, expanded: usize },
}

impl SearchError {
    /// Nodes popped before the search stopped.
    pub fn expanded(&self) -> usize {
        match *self {
            SearchError::NoPath { expanded, .. } | SearchError::ExpansionLimit { expanded, .. } => {
                expanded
            }
        }
    }
}

pub type SearchResult<T> = Result<T, SearchError>;
