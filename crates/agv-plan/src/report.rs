//! Per-vehicle outcomes of a planning run.
//!
//! # CSV export
//!
//! [`FleetReport::write_csv`] emits one row per step of every planned path:
//!
//! ```csv
//! agv_id,step,node,cost,arrival_time
//! 0,0,0,0,0
//! 0,1,1,0.5,0.5
//! ```
//!
//! Failed vehicles contribute no rows; use [`FleetReport::summary`] for the
//! per-run totals.

use std::fmt;
use std::io::Write;

use agv_core::{AgvId, Path, PathRef};
use agv_search::SearchError;

use crate::PlanResult;

// ── PlanFailure ───────────────────────────────────────────────────────────────

/// Why one vehicle got no path.  Not fatal to the run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlanFailure {
    /// Every route to the goal is blocked by the graph or by reservations.
    NoPathFound { expanded: usize },
    /// The search gave up before deciding.
    ExpansionLimit { expanded: usize },
}

impl From<SearchError> for PlanFailure {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::NoPath { expanded, .. } => PlanFailure::NoPathFound { expanded },
            SearchError::ExpansionLimit { expanded, .. } => PlanFailure::ExpansionLimit { expanded },
        }
    }
}

impl fmt::Display for PlanFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanFailure::NoPathFound { expanded } => {
                write!(f, "no path found ({expanded} nodes expanded)")
            }
            PlanFailure::ExpansionLimit { expanded } => {
                write!(f, "expansion limit reached ({expanded} nodes expanded)")
            }
        }
    }
}

// ── AgvOutcome ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub enum AgvOutcome {
    Planned {
        agv:        AgvId,
        start_time: f32,
        path_ref:   PathRef,
        path:       Path,
    },
    Failed {
        agv:     AgvId,
        failure: PlanFailure,
    },
}

impl AgvOutcome {
    pub fn agv(&self) -> AgvId {
        match self {
            AgvOutcome::Planned { agv, .. } | AgvOutcome::Failed { agv, .. } => *agv,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            AgvOutcome::Planned { path, .. } => Some(path),
            AgvOutcome::Failed { .. } => None,
        }
    }

    pub fn failure(&self) -> Option<PlanFailure> {
        match self {
            AgvOutcome::Planned { .. } => None,
            AgvOutcome::Failed { failure, .. } => Some(*failure),
        }
    }

    pub fn is_planned(&self) -> bool {
        matches!(self, AgvOutcome::Planned { .. })
    }
}

// ── FleetReport ───────────────────────────────────────────────────────────────

/// Outcomes in planning order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FleetReport {
    pub outcomes: Vec<AgvOutcome>,
}

impl FleetReport {
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn planned(&self) -> impl Iterator<Item = &AgvOutcome> + '_ {
        self.outcomes.iter().filter(|o| o.is_planned())
    }

    pub fn failed(&self) -> impl Iterator<Item = &AgvOutcome> + '_ {
        self.outcomes.iter().filter(|o| !o.is_planned())
    }

    pub fn planned_count(&self) -> usize {
        self.planned().count()
    }

    pub fn failed_count(&self) -> usize {
        self.failed().count()
    }

    /// `true` if every vehicle got a path.
    pub fn is_complete(&self) -> bool {
        self.outcomes.iter().all(AgvOutcome::is_planned)
    }

    /// Outcome for `agv`, if it was part of the run.
    pub fn outcome(&self, agv: AgvId) -> Option<&AgvOutcome> {
        self.outcomes.iter().find(|o| o.agv() == agv)
    }

    pub fn summary(&self) -> FleetSummary {
        let mut summary = FleetSummary { agvs: self.len(), ..FleetSummary::default() };
        for outcome in &self.outcomes {
            match outcome {
                AgvOutcome::Planned { start_time, path, .. } => {
                    summary.planned += 1;
                    summary.total_cost += path.total_cost();
                    summary.makespan = summary.makespan.max(start_time + path.total_cost());
                }
                AgvOutcome::Failed { .. } => summary.failed += 1,
            }
        }
        summary
    }

    /// Write `agv_id,step,node,cost,arrival_time` rows for every planned
    /// vehicle.
    pub fn write_csv<W: Write>(&self, writer: W) -> PlanResult<()> {
        let mut out = csv::Writer::from_writer(writer);
        out.write_record(["agv_id", "step", "node", "cost", "arrival_time"])?;
        for outcome in &self.outcomes {
            let AgvOutcome::Planned { agv, start_time, path, .. } = outcome else {
                continue;
            };
            for (step, s) in path.steps().iter().enumerate() {
                out.write_record(&[
                    agv.0.to_string(),
                    step.to_string(),
                    s.node.0.to_string(),
                    s.cost.to_string(),
                    (start_time + s.cost).to_string(),
                ])?;
            }
        }
        out.flush()?;
        Ok(())
    }

    /// [`write_csv`](Self::write_csv) into a newly created file.
    pub fn write_csv_path(&self, path: &std::path::Path) -> PlanResult<()> {
        let file = std::fs::File::create(path)?;
        self.write_csv(file)
    }
}

// ── FleetSummary ──────────────────────────────────────────────────────────────

/// Run totals.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FleetSummary {
    pub agvs:       usize,
    pub planned:    usize,
    pub failed:     usize,
    /// Sum of path costs over planned vehicles.
    pub total_cost: f32,
    /// Latest arrival time of any planned vehicle.
    pub makespan:   f32,
}

impl fmt::Display for FleetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} planned, {} failed, total cost {:.2}, makespan {:.2}",
            self.planned, self.agvs, self.failed, self.total_cost, self.makespan
        )
    }
}
