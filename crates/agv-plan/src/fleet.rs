//! Per-vehicle planning state.

use agv_core::{AgvId, NodeId, PathRef};

/// What the planner knows about one vehicle.
///
/// The committed path itself lives in the `ReservationTable`; `plan` is the
/// handle to it once the vehicle has been planned.
#[derive(Clone, Debug, PartialEq)]
pub struct AgvState {
    pub id: AgvId,
    /// Node the vehicle departs from.
    pub current: NodeId,
    pub goal: NodeId,
    /// Absolute time the vehicle sets off on its plan.
    pub start_time: f32,
    /// Committed path, if planning succeeded.
    pub plan: Option<PathRef>,
}

impl AgvState {
    pub fn new(id: AgvId, current: NodeId, goal: NodeId, start_time: f32) -> Self {
        Self { id, current, goal, start_time, plan: None }
    }

    #[inline]
    pub fn is_planned(&self) -> bool {
        self.plan.is_some()
    }
}
