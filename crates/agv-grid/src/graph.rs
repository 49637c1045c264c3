//! Floor graph representation and builders.
//!
//! # Data layout
//!
//! Nodes live in an arena addressed by [`NodeId`].  Outgoing links use
//! **Compressed Sparse Row (CSR)** format: the neighbours of node `n` are
//!
//! ```text
//! link_to[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! in the order they were accepted.  Links are directed; a lattice built
//! from [`GridSpec`] is symmetric only when no node hits the degree cap.
//!
//! # Degree cap
//!
//! Every node holds at most `max_neighbors` links.  Candidates arriving once
//! a node is full are dropped, so which links survive depends only on
//! insertion order.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps a floor position to the nearest node.  The
//! lattice generator also uses it to find link candidates without an
//! all-pairs scan.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use agv_core::{GridSpec, NodeId, Position};

use crate::{GridError, GridResult};

// ── R-tree node entry ─────────────────────────────────────────────────────────

#[derive(Clone)]
struct NodeEntry {
    point: [f32; 2], // [x, y]
    id: NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── GridGraph ─────────────────────────────────────────────────────────────────

/// Directed floor graph in CSR format plus a spatial index.
///
/// Build with [`GridGraph::build`] for a lattice or [`GridGraphBuilder`] for
/// a hand-drawn layout.
pub struct GridGraph {
    /// Position of each node.  Indexed by `NodeId`.
    pub node_pos: Vec<Position>,

    /// CSR row pointer.  Length = `node_count + 1`.
    pub node_out_start: Vec<u32>,

    /// Destination of each link, grouped by source node.
    pub link_to: Vec<NodeId>,

    max_neighbors: usize,
    spatial_idx: RTree<NodeEntry>,
}

impl GridGraph {
    /// Lay out a `width × height` lattice and link every node to the nodes
    /// strictly closer than `hop_limit` (Manhattan), up to the degree cap.
    ///
    /// Candidates are scanned in ascending `NodeId` order, which makes the
    /// surviving link set deterministic when the cap truncates it.
    pub fn build(spec: &GridSpec) -> GridResult<GridGraph> {
        spec.validate()?;

        let mut b = GridGraphBuilder::with_capacity(spec.node_count(), spec.max_neighbors);
        for i in 0..spec.node_count() as u32 {
            let col = (i % spec.width) as f32;
            let row = (i / spec.width) as f32;
            b.add_node(Position::new(col * spec.spacing, row * spec.spacing));
        }

        // Index the positions up front; the builder only needs read access.
        let index = build_index(&b.nodes);
        let radius_2 = spec.hop_limit * spec.hop_limit;
        let mut candidates: Vec<NodeId> = Vec::new();

        for i in 0..b.nodes.len() {
            let from = NodeId(i as u32);
            let pos = b.nodes[i];

            // Manhattan < hop_limit implies Euclidean < hop_limit, so the
            // circle query returns a superset of the real candidates.
            candidates.clear();
            candidates.extend(
                index
                    .locate_within_distance([pos.x, pos.y], radius_2)
                    .filter(|e| pos.manhattan(b.nodes[e.id.index()]) < spec.hop_limit)
                    .filter(|e| spec.self_loops || e.id != from)
                    .map(|e| e.id),
            );
            candidates.sort_unstable();

            for &to in &candidates {
                if !b.add_directed_edge(from, to)? {
                    break;
                }
            }
        }

        Ok(b.build())
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    pub fn link_count(&self) -> usize {
        self.link_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_pos.is_empty()
    }

    /// The out-degree cap this graph was built with.
    pub fn max_neighbors(&self) -> usize {
        self.max_neighbors
    }

    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.node_pos.len()
    }

    /// Error unless `node` indexes an existing node.
    pub fn check(&self, node: NodeId) -> GridResult<()> {
        if self.contains(node) { Ok(()) } else { Err(GridError::NodeNotFound(node)) }
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Position of `node`.
    ///
    /// # Panics
    /// Panics if `node` is out of range; use [`check`](Self::check) first
    /// for untrusted ids.
    #[inline]
    pub fn position(&self, node: NodeId) -> Position {
        self.node_pos[node.index()]
    }

    /// Outgoing neighbours of `node`, in acceptance order.
    #[inline]
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        &self.link_to[start..end]
    }

    #[inline]
    pub fn out_degree(&self, node: NodeId) -> usize {
        self.neighbors(node).len()
    }

    /// `true` if `from` lists `to` as a neighbour.
    pub fn has_link(&self, from: NodeId, to: NodeId) -> bool {
        self.neighbors(from).contains(&to)
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// Node closest to `pos`.  `None` only for an empty graph.
    pub fn nearest_node(&self, pos: Position) -> Option<NodeId> {
        self.spatial_idx.nearest_neighbor(&[pos.x, pos.y]).map(|e| e.id)
    }

    /// Up to `k` nodes nearest to `pos`, closest first.
    pub fn k_nearest_nodes(&self, pos: Position, k: usize) -> Vec<NodeId> {
        self.spatial_idx
            .nearest_neighbor_iter(&[pos.x, pos.y])
            .take(k)
            .map(|e| e.id)
            .collect()
    }
}

fn build_index(nodes: &[Position]) -> RTree<NodeEntry> {
    let entries: Vec<NodeEntry> = nodes
        .iter()
        .enumerate()
        .map(|(i, p)| NodeEntry { point: [p.x, p.y], id: NodeId(i as u32) })
        .collect();
    RTree::bulk_load(entries)
}

// ── GridGraphBuilder ──────────────────────────────────────────────────────────

/// Assemble a [`GridGraph`] node by node and link by link.
///
/// # Example
///
/// ```
/// use agv_core::Position;
/// use agv_grid::GridGraphBuilder;
///
/// let mut b = GridGraphBuilder::new(4);
/// let a = b.add_node(Position::new(0.0, 0.0));
/// let c = b.add_node(Position::new(1.0, 0.0));
/// b.add_link(a, c).unwrap();
/// let g = b.build();
/// assert_eq!(g.link_count(), 2);
/// ```
pub struct GridGraphBuilder {
    nodes:         Vec<Position>,
    degree:        Vec<usize>,
    raw_links:     Vec<(NodeId, NodeId)>,
    max_neighbors: usize,
}

impl GridGraphBuilder {
    pub fn new(max_neighbors: usize) -> Self {
        Self::with_capacity(0, max_neighbors)
    }

    pub fn with_capacity(nodes: usize, max_neighbors: usize) -> Self {
        Self {
            nodes:     Vec::with_capacity(nodes),
            degree:    Vec::with_capacity(nodes),
            raw_links: Vec::with_capacity(nodes * max_neighbors),
            max_neighbors,
        }
    }

    /// Add a node and return its id (sequential from 0).
    pub fn add_node(&mut self, pos: Position) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(pos);
        self.degree.push(0);
        id
    }

    /// Add a one-way link.  Returns `Ok(false)` when `from` is already at the
    /// degree cap and the link was dropped.
    pub fn add_directed_edge(&mut self, from: NodeId, to: NodeId) -> GridResult<bool> {
        if from.index() >= self.nodes.len() {
            return Err(GridError::NodeNotFound(from));
        }
        if to.index() >= self.nodes.len() {
            return Err(GridError::NodeNotFound(to));
        }
        if self.degree[from.index()] >= self.max_neighbors {
            return Ok(false);
        }
        self.degree[from.index()] += 1;
        self.raw_links.push((from, to));
        Ok(true)
    }

    /// Add links in both directions.  Each direction is capped independently,
    /// so the result may still be one-way.
    pub fn add_link(&mut self, a: NodeId, b: NodeId) -> GridResult<()> {
        self.add_directed_edge(a, b)?;
        self.add_directed_edge(b, a)?;
        Ok(())
    }

    pub fn node_pos(&self, id: NodeId) -> Position {
        self.nodes[id.index()]
    }

    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn link_count(&self) -> usize { self.raw_links.len() }

    /// Consume the builder and produce a [`GridGraph`].
    pub fn build(self) -> GridGraph {
        let node_count = self.nodes.len();

        // Stable sort keeps per-node acceptance order.
        let mut raw = self.raw_links;
        raw.sort_by_key(|&(from, _)| from.0);

        let mut node_out_start = vec![0u32; node_count + 1];
        for &(from, _) in &raw {
            node_out_start[from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, raw.len());

        let link_to = raw.into_iter().map(|(_, to)| to).collect();
        let spatial_idx = build_index(&self.nodes);

        GridGraph {
            node_pos: self.nodes,
            node_out_start,
            link_to,
            max_neighbors: self.max_neighbors,
            spatial_idx,
        }
    }
}
