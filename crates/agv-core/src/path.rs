//! The output of one search invocation.

use crate::NodeId;

/// One step of a [`Path`]: the node reached and the cumulative cost (elapsed
/// time units) from the path's first node.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathStep {
    pub node: NodeId,
    pub cost: f32,
}

/// An ordered sequence of `(node, cost-so-far)` pairs from start to goal.
///
/// Invariant: `steps[0].cost == 0.0` and costs never decrease along the
/// sequence.  A path from a node to itself is a single step.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    steps: Vec<PathStep>,
}

impl Path {
    /// Wrap `steps` produced by a search engine.
    pub fn from_steps(steps: Vec<PathStep>) -> Self {
        debug_assert!(
            steps.windows(2).all(|w| w[0].cost <= w[1].cost),
            "path costs must be non-decreasing"
        );
        Self { steps }
    }

    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Iterator over the visited nodes in order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.steps.iter().map(|s| s.node)
    }

    /// Cumulative cost at `step`, or `None` past the end.
    #[inline]
    pub fn cost_at(&self, step: usize) -> Option<f32> {
        self.steps.get(step).map(|s| s.cost)
    }

    /// Cost of the whole path (0 for an empty or single-step path).
    pub fn total_cost(&self) -> f32 {
        self.steps.last().map_or(0.0, |s| s.cost)
    }

    /// Number of edges traversed.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    pub fn first_node(&self) -> Option<NodeId> {
        self.steps.first().map(|s| s.node)
    }

    pub fn last_node(&self) -> Option<NodeId> {
        self.steps.last().map(|s| s.node)
    }

    /// First step index at which the path visits `node`.
    pub fn step_of(&self, node: NodeId) -> Option<usize> {
        self.steps.iter().position(|s| s.node == node)
    }
}
