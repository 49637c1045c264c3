//! Unit tests for agv-search.
//!
//! The contexts here are hand-built adjacency lists with integer x
//! coordinates, so expected costs are exact.

#[cfg(test)]
mod helpers {
    use std::cell::RefCell;

    use agv_core::NodeId;
    use crate::SearchContext;

    /// Weighted digraph with a 1-D coordinate per node for the heuristic.
    pub struct ListContext {
        pub x:      Vec<f32>,
        pub edges:  Vec<Vec<(NodeId, f32)>>,
        /// Nodes that `expand` refuses to offer.
        pub banned: Vec<NodeId>,
        /// `(node, cost, prev)` for every expand call, in order.
        pub calls:  RefCell<Vec<(NodeId, f32, Option<NodeId>)>>,
    }

    impl ListContext {
        pub fn new(x: Vec<f32>) -> Self {
            let n = x.len();
            Self { x, edges: vec![Vec::new(); n], banned: Vec::new(), calls: RefCell::new(Vec::new()) }
        }

        pub fn edge(&mut self, a: u32, b: u32, cost: f32) {
            self.edges[a as usize].push((NodeId(b), cost));
        }
    }

    impl SearchContext for ListContext {
        fn heuristic(&self, from: NodeId, to: NodeId) -> f32 {
            (self.x[from.index()] - self.x[to.index()]).abs()
        }

        fn expand(&self, node: NodeId, cost: f32, prev: Option<NodeId>, out: &mut Vec<(NodeId, f32)>) {
            self.calls.borrow_mut().push((node, cost, prev));
            out.extend(
                self.edges[node.index()]
                    .iter()
                    .filter(|(n, _)| !self.banned.contains(n))
                    .copied(),
            );
        }
    }

    /// Diamond: 0 → 1 → 3 (cost 1 + 1) and 0 → 2 → 3 (cost 1 + 3).
    pub fn diamond() -> ListContext {
        let mut ctx = ListContext::new(vec![0.0, 1.0, 1.0, 2.0]);
        ctx.edge(0, 1, 1.0);
        ctx.edge(0, 2, 1.0);
        ctx.edge(1, 3, 1.0);
        ctx.edge(2, 3, 3.0);
        ctx
    }
}

#[cfg(test)]
mod astar {
    use agv_core::NodeId;
    use crate::{AStarEngine, SearchEngine, SearchError};

    #[test]
    fn trivial_same_node() {
        let ctx = super::helpers::diamond();
        let path = AStarEngine::default().search(&ctx, NodeId(2), NodeId(2)).unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path.total_cost(), 0.0);
        assert!(ctx.calls.borrow().is_empty());
    }

    #[test]
    fn finds_cheapest_path_with_cumulative_costs() {
        let ctx = super::helpers::diamond();
        let path = AStarEngine::default().search(&ctx, NodeId(0), NodeId(3)).unwrap();
        assert_eq!(path.nodes().collect::<Vec<_>>(), vec![NodeId(0), NodeId(1), NodeId(3)]);
        let costs: Vec<f32> = path.steps().iter().map(|s| s.cost).collect();
        assert_eq!(costs, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn withheld_neighbour_forces_detour() {
        let mut ctx = super::helpers::diamond();
        ctx.banned.push(NodeId(1));
        let path = AStarEngine::default().search(&ctx, NodeId(0), NodeId(3)).unwrap();
        assert_eq!(path.nodes().collect::<Vec<_>>(), vec![NodeId(0), NodeId(2), NodeId(3)]);
        assert_eq!(path.total_cost(), 4.0);
    }

    #[test]
    fn no_path_when_everything_withheld() {
        let mut ctx = super::helpers::diamond();
        ctx.banned.extend([NodeId(1), NodeId(2)]);
        let err = AStarEngine::default().search(&ctx, NodeId(0), NodeId(3)).unwrap_err();
        assert!(matches!(err, SearchError::NoPath { from: NodeId(0), to: NodeId(3), expanded: 1 }));
    }

    #[test]
    fn expansion_limit_reported() {
        let ctx = super::helpers::diamond();
        let err = AStarEngine::new(1).search(&ctx, NodeId(0), NodeId(3)).unwrap_err();
        assert!(matches!(err, SearchError::ExpansionLimit { .. }));
        assert_eq!(err.expanded(), 2);
    }

    #[test]
    fn expand_receives_cost_and_predecessor() {
        let ctx = super::helpers::diamond();
        AStarEngine::default().search(&ctx, NodeId(0), NodeId(3)).unwrap();
        let calls = ctx.calls.borrow();
        assert_eq!(calls[0], (NodeId(0), 0.0, None));
        assert!(calls.contains(&(NodeId(1), 1.0, Some(NodeId(0)))));
    }

    #[test]
    fn ties_break_towards_lower_node_id() {
        // Two equal routes 0 → 1 → 3 and 0 → 2 → 3.
        let mut ctx = super::helpers::ListContext::new(vec![0.0, 1.0, 1.0, 2.0]);
        ctx.edge(0, 2, 1.0);
        ctx.edge(0, 1, 1.0);
        ctx.edge(2, 3, 1.0);
        ctx.edge(1, 3, 1.0);
        let engine = AStarEngine::default();
        let first = engine.search(&ctx, NodeId(0), NodeId(3)).unwrap();
        let second = engine.search(&ctx, NodeId(0), NodeId(3)).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.nodes().nth(1), Some(NodeId(1)));
    }

    #[test]
    fn self_loop_is_harmless() {
        let mut ctx = super::helpers::diamond();
        ctx.edge(0, 0, 0.0);
        ctx.edge(1, 1, 0.0);
        let path = AStarEngine::default().search(&ctx, NodeId(0), NodeId(3)).unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path.total_cost(), 2.0);
    }
}
