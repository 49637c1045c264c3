//! `agv-search` — the search engine the fleet planner drives.
//!
//! The engine knows nothing about positions, vehicles, or reservations.  It
//! sees a start node, a goal node, and a [`SearchContext`] that supplies the
//! heuristic and, for every node it pops, the list of `(neighbour, step
//! cost)` pairs it may push.  Whatever the context leaves out of that list
//! simply does not exist for this search.
//!
//! # Crate layout
//!
//! | Module     | Contents                                          |
//! |------------|---------------------------------------------------|
//! | [`engine`] | `SearchContext`, `SearchEngine`, `AStarEngine`    |
//! | [`error`]  | `SearchError`, `SearchResult<T>`                  |

pub mod engine;
pub mod error;

#[cfg(test)]
mod tests;

pub use engine::{AStarEngine, SearchContext, SearchEngine};
pub use error::{SearchError, SearchResult};
