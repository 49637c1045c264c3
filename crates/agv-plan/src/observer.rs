//! Hooks for watching a planning run.
//!
//! Every method has an empty default, so an observer only overrides what it
//! cares about.

use agv_core::{AgvId, Path, PathRef};

use crate::{FleetReport, PlanFailure};

pub trait PlanObserver {
    /// About to search for `agv`.
    fn on_agv_start(&mut self, _agv: AgvId) {}

    /// `agv`'s path has been committed under `path_ref`.
    fn on_agv_planned(&mut self, _agv: AgvId, _path_ref: PathRef, _path: &Path) {}

    fn on_agv_failed(&mut self, _agv: AgvId, _failure: &PlanFailure) {}

    /// Every vehicle has been attempted.
    fn on_fleet_end(&mut self, _report: &FleetReport) {}
}

/// Observer that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl PlanObserver for NoopObserver {}
