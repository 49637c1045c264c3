//! The reservation table.

use rustc_hash::FxHashMap;
use tracing::debug;

use agv_core::{AgvId, NodeId, Path, PathRef};

use crate::{ReserveError, ReserveResult};

// ── ReservationSlot ───────────────────────────────────────────────────────────

/// One vehicle's visit to one node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReservationSlot {
    pub agv:  AgvId,
    /// Index into the committed path's steps.
    pub step: u32,
    pub path: PathRef,
}

// ── PlannedPath ───────────────────────────────────────────────────────────────

/// A committed path together with the time its vehicle sets off.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannedPath {
    pub agv:        AgvId,
    pub start_time: f32,
    pub path:       Path,
}

impl PlannedPath {
    /// Absolute time the vehicle reaches `step`.
    #[inline]
    pub fn arrival_time(&self, step: usize) -> Option<f32> {
        self.path.cost_at(step).map(|c| self.start_time + c)
    }
}

// ── ReservationTable ──────────────────────────────────────────────────────────

/// Per-node reservation slots plus the arena of committed paths they index.
///
/// Each node holds at most `capacity` slots (the fleet size).  The table is
/// only mutated between searches, never during one.
#[derive(Clone, Debug)]
pub struct ReservationTable {
    /// `slots[node]` in commit order.
    slots:    Vec<Vec<ReservationSlot>>,
    /// Committed paths indexed by `PathRef`.  `None` once released.
    paths:    Vec<Option<PlannedPath>>,
    capacity: usize,
}

impl ReservationTable {
    /// Empty table for a graph of `node_count` nodes and a fleet of
    /// `capacity` vehicles.
    pub fn new(node_count: usize, capacity: usize) -> Self {
        Self {
            slots: vec![Vec::new(); node_count],
            paths: Vec::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn node_count(&self) -> usize {
        self.slots.len()
    }

    /// Total slots across all nodes.
    pub fn slot_count(&self) -> usize {
        self.slots.iter().map(Vec::len).sum()
    }

    /// Number of live (unreleased) committed paths.
    pub fn path_count(&self) -> usize {
        self.paths.iter().filter(|p| p.is_some()).count()
    }

    // ── Writes ────────────────────────────────────────────────────────────

    /// Store `path` in the arena without reserving any node.
    pub fn register_path(&mut self, agv: AgvId, start_time: f32, path: Path) -> PathRef {
        let id = PathRef(self.paths.len() as u32);
        self.paths.push(Some(PlannedPath { agv, start_time, path }));
        id
    }

    /// Append a slot at `node`.
    ///
    /// Fails with [`ReserveError::CapacityExceeded`] if `node` is full.
    pub fn reserve(&mut self, node: NodeId, agv: AgvId, step: u32, path: PathRef) -> ReserveResult<()> {
        if self.planned(path).is_none() {
            return Err(ReserveError::UnknownPath(path));
        }
        let capacity = self.capacity;
        let slots = self
            .slots
            .get_mut(node.index())
            .ok_or(ReserveError::NodeNotFound(node))?;
        if slots.len() >= capacity {
            debug!(%node, %agv, capacity, "reservation capacity exceeded");
            return Err(ReserveError::CapacityExceeded { node, capacity });
        }
        slots.push(ReservationSlot { agv, step, path });
        Ok(())
    }

    /// Register `path` and reserve every step of it.
    ///
    /// All nodes are checked before anything is written, so on error the
    /// table is unchanged.
    pub fn commit(&mut self, agv: AgvId, start_time: f32, path: Path) -> ReserveResult<PathRef> {
        let mut visits: FxHashMap<NodeId, usize> = FxHashMap::default();
        for node in path.nodes() {
            *visits.entry(node).or_default() += 1;
        }
        for (&node, &extra) in &visits {
            let held = self
                .slots
                .get(node.index())
                .ok_or(ReserveError::NodeNotFound(node))?
                .len();
            if held + extra > self.capacity {
                debug!(%node, %agv, capacity = self.capacity, "reservation capacity exceeded");
                return Err(ReserveError::CapacityExceeded { node, capacity: self.capacity });
            }
        }

        let nodes: Vec<NodeId> = path.nodes().collect();
        let path_ref = self.register_path(agv, start_time, path);
        for (step, node) in nodes.into_iter().enumerate() {
            self.slots[node.index()].push(ReservationSlot { agv, step: step as u32, path: path_ref });
        }
        Ok(path_ref)
    }

    /// Drop every slot and path belonging to `agv`.  Returns the number of
    /// slots removed.
    ///
    /// The released arena entries are left empty and never handed out again,
    /// so a stale `PathRef` resolves to `None` rather than to another
    /// vehicle's path.  The arena only shrinks on [`clear`](Self::clear).
    pub fn release(&mut self, agv: AgvId) -> usize {
        let mut removed = 0;
        for entry in self.paths.iter_mut() {
            let Some(planned) = entry else { continue };
            if planned.agv != agv {
                continue;
            }
            for node in planned.path.nodes() {
                let slots = &mut self.slots[node.index()];
                let before = slots.len();
                slots.retain(|s| s.agv != agv);
                removed += before - slots.len();
            }
            *entry = None;
        }
        debug!(%agv, removed, "released reservations");
        removed
    }

    /// Remove all slots and paths, keeping the node count and capacity.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(Vec::clear);
        self.paths.clear();
    }

    // ── Reads ─────────────────────────────────────────────────────────────

    /// Slots held at `node`, in commit order.  Empty for unknown nodes.
    pub fn slots_at(&self, node: NodeId) -> &[ReservationSlot] {
        self.slots.get(node.index()).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn planned(&self, path: PathRef) -> Option<&PlannedPath> {
        self.paths.get(path.index()).and_then(Option::as_ref)
    }

    /// Absolute time of a slot: its path's start time plus the cumulative
    /// cost at the slot's step.
    pub fn slot_time(&self, slot: &ReservationSlot) -> Option<f32> {
        self.planned(slot.path)?.arrival_time(slot.step as usize)
    }

    /// `(vehicle, absolute time)` for every visit to `node`.
    pub fn occupancy(&self, node: NodeId) -> impl Iterator<Item = (AgvId, f32)> + '_ {
        self.slots_at(node)
            .iter()
            .filter_map(|slot| self.slot_time(slot).map(|t| (slot.agv, t)))
    }

    /// Committed paths in commit order, skipping released ones.
    pub fn planned_paths(&self) -> impl Iterator<Item = (PathRef, &PlannedPath)> + '_ {
        self.paths
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.as_ref().map(|p| (PathRef(i as u32), p)))
    }
}
