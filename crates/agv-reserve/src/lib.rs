//! `agv-reserve` — who passes through which node, and when.
//!
//! Every committed path is stored once in the table's path arena and
//! addressed by [`PathRef`](agv_core::PathRef).  Each node then holds one
//! [`ReservationSlot`] per visit: the vehicle, the step index into its path,
//! and the `PathRef`.  A slot's absolute time is derived on demand as
//! `path start time + cumulative cost at that step`, so slots never go stale
//! relative to the path they index.
//!
//! # Crate layout
//!
//! | Module    | Contents                                               |
//! |-----------|--------------------------------------------------------|
//! | [`table`] | `ReservationTable`, `ReservationSlot`, `PlannedPath`   |
//! | [`error`] | `ReserveError`, `ReserveResult<T>`                     |
//!
//! # Lifetime of reservations
//!
//! Slots persist until the caller removes them: [`ReservationTable::release`]
//! expires one vehicle's reservations, [`ReservationTable::clear`] starts a
//! fresh planning run.

pub mod error;
pub mod table;

#[cfg(test)]
mod tests;

pub use error::{ReserveError, ReserveResult};
pub use table::{PlannedPath, ReservationSlot, ReservationTable};
