//! Heuristic and directional travel cost.
//!
//! # Travel cost
//!
//! ```text
//! cost(prev, src, dst) = |dst - src| / speed_factor + turn(prev, src, dst) / turn_weight
//! ```
//!
//! `turn` maps the angle θ between the incoming heading `src - prev` and the
//! outgoing heading `dst - src` onto `[0, π]`:
//!
//! ```text
//! turn = π · (1 - cos θ) / 2        0 for straight on, π for a reversal
//! ```
//!
//! The turn term is skipped for the first move of a path (no `prev`) and
//! whenever either heading fails the configured [`TurnGuard`].
//!
//! # Heuristic
//!
//! [`heuristic`] is the plain Manhattan distance.  It never exceeds the
//! Euclidean length of an axis-aligned route, but it is only a lower bound
//! on *time* when `speed_factor <= 1`.  [`CostModel::search_heuristic`]
//! divides by the speed factor so the A* estimate stays in time units.

use std::f32::consts::PI;

use agv_core::{Direction, PlannerConfig, Position, TurnGuard};

use crate::GeometryError;

/// Manhattan distance between two positions.
#[inline]
pub fn heuristic(a: Position, b: Position) -> f32 {
    a.manhattan(b)
}

/// Turn penalty in `[0, π]` for changing heading from `incoming` to
/// `outgoing`, before scaling by the turn weight.
///
/// Returns [`GeometryError::Degenerate`] if either vector has zero length.
pub fn turn_angle(incoming: Direction, outgoing: Direction) -> Result<f32, GeometryError> {
    let norm = incoming.length() * outgoing.length();
    if norm == 0.0 || !norm.is_finite() {
        return Err(GeometryError::Degenerate);
    }
    // Clamp: rounding can push the ratio a hair outside [-1, 1].
    let cos = (incoming.dot(outgoing) / norm).clamp(-1.0, 1.0);
    Ok(PI * (1.0 - cos) / 2.0)
}

/// Kinematic constants for pricing one move.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CostModel {
    pub speed_factor: f32,
    pub turn_weight:  f32,
    pub turn_guard:   TurnGuard,
}

impl CostModel {
    pub fn new(speed_factor: f32, turn_weight: f32) -> Self {
        Self { speed_factor, turn_weight, turn_guard: TurnGuard::default() }
    }

    pub fn with_turn_guard(mut self, turn_guard: TurnGuard) -> Self {
        self.turn_guard = turn_guard;
        self
    }

    pub fn from_config(config: &PlannerConfig) -> Self {
        Self {
            speed_factor: config.speed_factor,
            turn_weight:  config.turn_weight,
            turn_guard:   config.turn_guard,
        }
    }

    /// Cost of moving `src → dst` having arrived at `src` from `prev`.
    ///
    /// Zero when `src` and `dst` share a position.
    pub fn travel_cost(&self, prev: Option<Position>, src: Position, dst: Position) -> f32 {
        if src == dst {
            return 0.0;
        }
        src.euclidean(dst) / self.speed_factor + self.turn_penalty(prev, src, dst)
    }

    /// Turn term of [`travel_cost`](Self::travel_cost), already divided by
    /// the turn weight.  Degenerate headings cost nothing.
    pub fn turn_penalty(&self, prev: Option<Position>, src: Position, dst: Position) -> f32 {
        let Some(prev) = prev else {
            return 0.0;
        };
        let incoming = src - prev;
        let outgoing = dst - src;
        if !self.turn_guard.admits(incoming) || !self.turn_guard.admits(outgoing) {
            return 0.0;
        }
        match turn_angle(incoming, outgoing) {
            Ok(angle) => angle / self.turn_weight,
            Err(GeometryError::Degenerate) => 0.0,
        }
    }

    /// A* estimate from `a` to `b` in time units.
    #[inline]
    pub fn search_heuristic(&self, a: Position, b: Position) -> f32 {
        heuristic(a, b) / self.speed_factor
    }
}

impl Default for CostModel {
    fn default() -> Self {
        Self::from_config(&PlannerConfig::default())
    }
}
