//! Collision-aware neighbour expansion.
//!
//! [`CollisionAwareExpansion`] is the [`SearchContext`] the fleet planner
//! hands to the search engine.  It prices each move with the directional
//! [`CostModel`] and withholds any neighbour whose arrival time falls within
//! the collision tolerance of a slot another vehicle has already committed
//! there.
//!
//! # Conflict test
//!
//! ```text
//! arrival  = start_time + (g(node) + travel_cost(prev, node, neighbour))
//! conflict = ∃ slot at neighbour, slot.agv ≠ agv : |slot_time - arrival| < tolerance
//! ```
//!
//! The comparison is strict: a separation of exactly `tolerance` is allowed.
//! Moves that do not change position (self-loops) cost nothing and are never
//! withheld.

use tracing::trace;

use agv_core::{AgvId, NodeId, PlannerConfig};
use agv_grid::{CostModel, GridGraph};
use agv_reserve::ReservationTable;
use agv_search::SearchContext;

/// Search context for one vehicle against a frozen reservation table.
pub struct CollisionAwareExpansion<'a> {
    graph:      &'a GridGraph,
    table:      &'a ReservationTable,
    cost:       CostModel,
    tolerance:  f32,
    agv:        AgvId,
    start_time: f32,
}

impl<'a> CollisionAwareExpansion<'a> {
    pub fn new(
        graph: &'a GridGraph,
        table: &'a ReservationTable,
        config: &PlannerConfig,
        agv: AgvId,
        start_time: f32,
    ) -> Self {
        Self {
            graph,
            table,
            cost: CostModel::from_config(config),
            tolerance: config.collision_tolerance,
            agv,
            start_time,
        }
    }

    pub fn agv(&self) -> AgvId {
        self.agv
    }

    pub fn cost_model(&self) -> &CostModel {
        &self.cost
    }

    /// First vehicle other than ours holding `node` within the tolerance of
    /// absolute time `arrival`.
    pub fn conflict(&self, node: NodeId, arrival: f32) -> Option<AgvId> {
        self.table
            .occupancy(node)
            .find(|&(other, t)| other != self.agv && (t - arrival).abs() < self.tolerance)
            .map(|(other, _)| other)
    }
}

impl SearchContext for CollisionAwareExpansion<'_> {
    fn heuristic(&self, from: NodeId, to: NodeId) -> f32 {
        self.cost
            .search_heuristic(self.graph.position(from), self.graph.position(to))
    }

    fn expand(&self, node: NodeId, cost: f32, prev: Option<NodeId>, out: &mut Vec<(NodeId, f32)>) {
        let src = self.graph.position(node);
        let prev_pos = prev.map(|p| self.graph.position(p));

        for &next in self.graph.neighbors(node) {
            let dst = self.graph.position(next);
            let step = self.cost.travel_cost(prev_pos, src, dst);
            if src == dst {
                out.push((next, step));
                continue;
            }

            // Matches `ReservationTable::slot_time`.
            let arrival = self.start_time + (cost + step);
            if let Some(other) = self.conflict(next, arrival) {
                trace!(agv = %self.agv, %node, %next, arrival, blocker = %other, "neighbour withheld");
                continue;
            }
            out.push((next, step));
        }
    }
}
