//! Planner and lattice configuration.
//!
//! Both structs are plain data supplied by the harness.  The defaults
//! reproduce the reference 32×32 demo: unit spacing, axis-adjacent links,
//! speed factor 2, turn weight 1, and a 3-unit collision tolerance for a
//! 10-vehicle fleet.

use crate::geo::Direction;
use crate::{CoreError, CoreResult};

// ── GridSpec ──────────────────────────────────────────────────────────────────

/// Generation rule for a rectangular lattice.
///
/// Node `i` sits at column `i % width`, row `i / width`, at
/// `(column * spacing, row * spacing)`.  Node A lists node B as a neighbour
/// iff `manhattan(A, B) < hop_limit`, scanning B in ascending index order
/// and keeping at most `max_neighbors` entries.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSpec {
    /// Nodes per row.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
    /// Distance between adjacent lattice points.
    pub spacing: f32,
    /// Exclusive upper bound on the Manhattan distance of a link.
    pub hop_limit: f32,
    /// Out-degree cap.  Candidates past the cap are dropped.
    pub max_neighbors: usize,
    /// Whether a node may list itself (distance 0 always passes the hop test).
    pub self_loops: bool,
}

impl GridSpec {
    pub fn new(width: u32, height: u32, spacing: f32, hop_limit: f32) -> Self {
        Self { width, height, spacing, hop_limit, ..Self::default() }
    }

    pub fn with_max_neighbors(mut self, max_neighbors: usize) -> Self {
        self.max_neighbors = max_neighbors;
        self
    }

    pub fn with_self_loops(mut self, self_loops: bool) -> Self {
        self.self_loops = self_loops;
        self
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn validate(&self) -> CoreResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CoreError::Config(format!(
                "grid must have at least one row and column, got {}x{}",
                self.width, self.height
            )));
        }
        if u32::try_from(self.node_count()).is_err() {
            return Err(CoreError::Config(format!(
                "grid {}x{} exceeds the node id range",
                self.width, self.height
            )));
        }
        if !(self.spacing.is_finite() && self.spacing > 0.0) {
            return Err(CoreError::Config(format!("spacing must be positive, got {}", self.spacing)));
        }
        if !(self.hop_limit.is_finite() && self.hop_limit > 0.0) {
            return Err(CoreError::Config(format!("hop_limit must be positive, got {}", self.hop_limit)));
        }
        if self.max_neighbors == 0 {
            return Err(CoreError::Config("max_neighbors must be at least 1".into()));
        }
        Ok(())
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            width:         32,
            height:        32,
            spacing:       1.0,
            hop_limit:     2.0,
            max_neighbors: 6,
            self_loops:    true,
        }
    }
}

// ── TurnGuard ─────────────────────────────────────────────────────────────────

/// Test deciding whether a direction vector is long enough to take part in
/// the turn-angle term.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnGuard {
    /// `dx != 0 || dy != 0`.
    #[default]
    NonZero,
    /// `dx + dy != 0`.  Misclassifies vectors whose components cancel, such
    /// as `(1, -1)`; kept for parity with legacy fleet logs.
    ComponentSum,
}

impl TurnGuard {
    /// `true` if `dir` should be treated as a real heading.
    #[inline]
    pub fn admits(self, dir: Direction) -> bool {
        match self {
            TurnGuard::NonZero      => !dir.is_zero(),
            TurnGuard::ComponentSum => dir.dx + dir.dy != 0.0,
        }
    }
}

// ── PlannerConfig ─────────────────────────────────────────────────────────────

/// Fleet-wide planning constants.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannerConfig {
    /// Divides Euclidean edge length to give travel time.  Must be > 0.
    pub speed_factor: f32,
    /// Divides the turn-angle penalty.  Must be > 0; larger means smoother
    /// turns are cheaper.
    pub turn_weight: f32,
    /// Minimum time separation between two AGVs at the same node.
    pub collision_tolerance: f32,
    /// Number of vehicles; also the reservation capacity of every node.
    pub fleet_size: usize,
    pub turn_guard: TurnGuard,
    /// Search gives up after this many node expansions.
    pub max_expansions: usize,
}

impl PlannerConfig {
    pub fn validate(&self) -> CoreResult<()> {
        if !(self.speed_factor.is_finite() && self.speed_factor > 0.0) {
            return Err(CoreError::Config(format!(
                "speed_factor must be positive, got {}",
                self.speed_factor
            )));
        }
        if !(self.turn_weight.is_finite() && self.turn_weight > 0.0) {
            return Err(CoreError::Config(format!(
                "turn_weight must be positive, got {}",
                self.turn_weight
            )));
        }
        if !(self.collision_tolerance.is_finite() && self.collision_tolerance >= 0.0) {
            return Err(CoreError::Config(format!(
                "collision_tolerance must be non-negative, got {}",
                self.collision_tolerance
            )));
        }
        if self.fleet_size == 0 {
            return Err(CoreError::Config("fleet_size must be at least 1".into()));
        }
        if self.max_expansions == 0 {
            return Err(CoreError::Config("max_expansions must be at least 1".into()));
        }
        Ok(())
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            speed_factor:        2.0,
            turn_weight:         1.0,
            collision_tolerance: 3.0,
            fleet_size:          10,
            turn_guard:          TurnGuard::NonZero,
            max_expansions:      100_000,
        }
    }
}
