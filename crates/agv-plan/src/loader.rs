//! CSV fleet loader.
//!
//! # CSV format
//!
//! One row per vehicle, planned in file order.  `start_timestamp` may be
//! left empty and defaults to 0.
//!
//! ```csv
//! agv_id,start_node,goal_node,start_timestamp
//! 0,0,100,0
//! 1,1,101,
//! 2,2,102,4.5
//! ```
//!
//! Rows naming a node `>= node_count` or repeating an `agv_id` are rejected.

use std::io::Read;
use std::path::Path;

use rustc_hash::FxHashSet;
use serde::Deserialize;

use agv_core::{AgvId, NodeId};

use crate::{AgvState, PlanError, PlanResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct FleetRecord {
    agv_id:          u32,
    start_node:      u32,
    goal_node:       u32,
    #[serde(default)]
    start_timestamp: Option<f32>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a fleet from a CSV file, checking nodes against a graph of
/// `node_count` nodes.
pub fn load_fleet_csv(path: &Path, node_count: usize) -> PlanResult<Vec<AgvState>> {
    let file = std::fs::File::open(path)?;
    load_fleet_reader(file, node_count)
}

/// Like [`load_fleet_csv`] but accepts any `Read` source.
pub fn load_fleet_reader<R: Read>(reader: R, node_count: usize) -> PlanResult<Vec<AgvState>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut fleet = Vec::new();
    let mut seen: FxHashSet<u32> = FxHashSet::default();

    for result in csv_reader.deserialize::<FleetRecord>() {
        let rec = result?;

        for (field, node) in [("start_node", rec.start_node), ("goal_node", rec.goal_node)] {
            if node as usize >= node_count {
                return Err(PlanError::InvalidFleet(format!(
                    "agv {}: {field} {node} outside graph of {node_count} nodes",
                    rec.agv_id
                )));
            }
        }
        if !seen.insert(rec.agv_id) {
            return Err(PlanError::InvalidFleet(format!("duplicate agv_id {}", rec.agv_id)));
        }
        let start_time = rec.start_timestamp.unwrap_or(0.0);
        if !start_time.is_finite() {
            return Err(PlanError::InvalidFleet(format!(
                "agv {}: start_timestamp {start_time} is not finite",
                rec.agv_id
            )));
        }

        fleet.push(AgvState::new(
            AgvId(rec.agv_id),
            NodeId(rec.start_node),
            NodeId(rec.goal_node),
            start_time,
        ));
    }

    Ok(fleet)
}
