//! Search contract and the default A* engine.
//!
//! # Pluggability
//!
//! The fleet planner calls search through the [`SearchEngine`] trait, so a
//! harness can swap in a bounded-suboptimal or anytime engine without
//! touching reservation logic.  The default [`AStarEngine`] is exact under a
//! consistent heuristic.
//!
//! # Expansion state
//!
//! Nodes are the only search state: each node is closed once, and the
//! `prev` handed to [`SearchContext::expand`] is the predecessor that gave
//! the node its final cost.  Cumulative costs in the returned [`Path`] are
//! therefore exactly the `cost` values the context saw when it priced each
//! step.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, trace};

use agv_core::{NodeId, Path, PathStep};

use crate::{SearchError, SearchResult};

// ── SearchContext ─────────────────────────────────────────────────────────────

/// Caller-side half of a search: heuristic plus neighbour generation.
///
/// Implementors carry whatever state they need (graph, cost constants,
/// reservations); the engine threads the same `&self` through every call.
pub trait SearchContext {
    /// Estimated remaining cost from `from` to `to`.
    fn heuristic(&self, from: NodeId, to: NodeId) -> f32;

    /// Append the successors of `node` to `out` as `(neighbour, step cost)`.
    ///
    /// `cost` is the accumulated cost of reaching `node`; `prev` is the node
    /// it was reached from (`None` for the start node).  Step costs must be
    /// non-negative.
    fn expand(&self, node: NodeId, cost: f32, prev: Option<NodeId>, out: &mut Vec<(NodeId, f32)>);
}

// ── SearchEngine ──────────────────────────────────────────────────────────────

/// A single-agent path search.
pub trait SearchEngine {
    /// Find the cheapest path from `start` to `goal` using only the
    /// successors `ctx` offers.
    ///
    /// `start == goal` yields a single-step path of cost 0.
    fn search<C: SearchContext + ?Sized>(
        &self,
        ctx: &C,
        start: NodeId,
        goal: NodeId,
    ) -> SearchResult<Path>;
}

// ── AStarEngine ───────────────────────────────────────────────────────────────

/// Best-first search ordered by `f = g + h`.
///
/// Ties on `f` go to the lower `NodeId`, so repeated searches over the same
/// context return the same path.
#[derive(Clone, Debug)]
pub struct AStarEngine {
    /// Upper bound on popped nodes before reporting
    /// [`SearchError::ExpansionLimit`].
    pub max_expansions: usize,
}

impl AStarEngine {
    pub fn new(max_expansions: usize) -> Self {
        Self { max_expansions }
    }
}

impl Default for AStarEngine {
    fn default() -> Self {
        Self::new(100_000)
    }
}

/// Open-list entry.  Ordered so `BinaryHeap` pops the smallest `f` first.
#[derive(Copy, Clone, Debug)]
struct Frontier {
    f:    f32,
    g:    f32,
    node: NodeId,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl SearchEngine for AStarEngine {
    fn search<C: SearchContext + ?Sized>(
        &self,
        ctx: &C,
        start: NodeId,
        goal: NodeId,
    ) -> SearchResult<Path> {
        trace!(%start, %goal, "search start");

        if start == goal {
            return Ok(Path::from_steps(vec![PathStep { node: start, cost: 0.0 }]));
        }

        let mut open: BinaryHeap<Frontier> = BinaryHeap::new();
        let mut closed: FxHashSet<NodeId> = FxHashSet::default();
        let mut best_g: FxHashMap<NodeId, f32> = FxHashMap::default();
        let mut came_from: FxHashMap<NodeId, NodeId> = FxHashMap::default();
        let mut successors: Vec<(NodeId, f32)> = Vec::new();

        best_g.insert(start, 0.0);
        open.push(Frontier { f: ctx.heuristic(start, goal), g: 0.0, node: start });

        let mut expanded = 0usize;

        while let Some(Frontier { g, node, .. }) = open.pop() {
            if closed.contains(&node) {
                continue;
            }
            // Skip stale heap entries.
            if best_g.get(&node).is_some_and(|&best| g > best) {
                continue;
            }

            expanded += 1;
            if expanded > self.max_expansions {
                debug!(%start, %goal, expanded, "search hit expansion limit");
                return Err(SearchError::ExpansionLimit { from: start, to: goal, expanded });
            }

            if node == goal {
                return Ok(reconstruct(&came_from, &best_g, goal));
            }
            closed.insert(node);

            successors.clear();
            ctx.expand(node, g, came_from.get(&node).copied(), &mut successors);

            for &(next, step) in &successors {
                if closed.contains(&next) {
                    continue;
                }
                let next_g = g + step;
                if best_g.get(&next).is_none_or(|&known| next_g < known) {
                    best_g.insert(next, next_g);
                    came_from.insert(next, node);
                    open.push(Frontier { f: next_g + ctx.heuristic(next, goal), g: next_g, node: next });
                }
            }
        }

        debug!(%start, %goal, expanded, "search exhausted frontier");
        Err(SearchError::NoPath { from: start, to: goal, expanded })
    }
}

fn reconstruct(
    came_from: &FxHashMap<NodeId, NodeId>,
    best_g: &FxHashMap<NodeId, f32>,
    goal: NodeId,
) -> Path {
    let mut steps = Vec::new();
    let mut cur = goal;
    loop {
        steps.push(PathStep { node: cur, cost: best_g.get(&cur).copied().unwrap_or(0.0) });
        match came_from.get(&cur) {
            Some(&prev) => cur = prev,
            None => break,
        }
    }
    steps.reverse();
    Path::from_steps(steps)
}
