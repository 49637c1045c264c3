//! Planar positions and direction vectors.
//!
//! Positions are in real-world floor units (metres on the demo lattice) and
//! stored as `f32`, which is plenty for warehouse-scale layouts.

use std::ops::Sub;

/// A point on the floor plan.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// `|dx| + |dy|`.  Symmetric in its arguments.
    #[inline]
    pub fn manhattan(self, other: Position) -> f32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Straight-line distance.
    #[inline]
    pub fn euclidean(self, other: Position) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Sub for Position {
    type Output = Direction;

    /// Vector pointing from `rhs` to `self`.
    #[inline]
    fn sub(self, rhs: Position) -> Direction {
        Direction { dx: self.x - rhs.x, dy: self.y - rhs.y }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// A travel direction (difference of two positions).  Not normalised.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Direction {
    pub dx: f32,
    pub dy: f32,
}

impl Direction {
    #[inline]
    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    #[inline]
    pub fn dot(self, other: Direction) -> f32 {
        self.dx * other.dx + self.dy * other.dy
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// `true` if both components are exactly zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}
