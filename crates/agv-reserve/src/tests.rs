//! Unit tests for agv-reserve.

#[cfg(test)]
mod helpers {
    use agv_core::{NodeId, Path, PathStep};

    /// Path over `nodes` with one time unit per hop.
    pub fn unit_path(nodes: &[u32]) -> Path {
        Path::from_steps(
            nodes
                .iter()
                .enumerate()
                .map(|(i, &n)| PathStep { node: NodeId(n), cost: i as f32 })
                .collect(),
        )
    }
}

#[cfg(test)]
mod reserve {
    use agv_core::{AgvId, NodeId, PathRef};
    use crate::{ReservationSlot, ReservationTable, ReserveError};

    #[test]
    fn new_table_is_empty() {
        let t = ReservationTable::new(4, 2);
        assert_eq!(t.node_count(), 4);
        assert_eq!(t.capacity(), 2);
        assert_eq!(t.slot_count(), 0);
        assert!(t.slots_at(NodeId(3)).is_empty());
        assert!(t.slots_at(NodeId(99)).is_empty());
    }

    #[test]
    fn reserve_appends_in_order() {
        let mut t = ReservationTable::new(3, 2);
        let p0 = t.register_path(AgvId(0), 0.0, super::helpers::unit_path(&[0, 1]));
        let p1 = t.register_path(AgvId(1), 0.0, super::helpers::unit_path(&[2, 1]));
        t.reserve(NodeId(1), AgvId(0), 1, p0).unwrap();
        t.reserve(NodeId(1), AgvId(1), 1, p1).unwrap();
        assert_eq!(
            t.slots_at(NodeId(1)),
            &[
                ReservationSlot { agv: AgvId(0), step: 1, path: p0 },
                ReservationSlot { agv: AgvId(1), step: 1, path: p1 },
            ]
        );
    }

    #[test]
    fn capacity_exceeded_is_an_error() {
        let mut t = ReservationTable::new(2, 1);
        let p = t.register_path(AgvId(0), 0.0, super::helpers::unit_path(&[0]));
        t.reserve(NodeId(0), AgvId(0), 0, p).unwrap();
        let err = t.reserve(NodeId(0), AgvId(1), 0, p).unwrap_err();
        assert_eq!(err, ReserveError::CapacityExceeded { node: NodeId(0), capacity: 1 });
        assert_eq!(t.slots_at(NodeId(0)).len(), 1);
    }

    #[test]
    fn reserve_rejects_unknown_node_and_path() {
        let mut t = ReservationTable::new(2, 2);
        assert_eq!(
            t.reserve(NodeId(0), AgvId(0), 0, PathRef(5)),
            Err(ReserveError::UnknownPath(PathRef(5)))
        );
        let p = t.register_path(AgvId(0), 0.0, super::helpers::unit_path(&[0]));
        assert_eq!(
            t.reserve(NodeId(7), AgvId(0), 0, p),
            Err(ReserveError::NodeNotFound(NodeId(7)))
        );
    }
}

#[cfg(test)]
mod commit {
    use agv_core::{AgvId, NodeId};
    use crate::{ReservationTable, ReserveError};

    #[test]
    fn commit_reserves_every_step() {
        let mut t = ReservationTable::new(4, 2);
        let r = t.commit(AgvId(3), 10.0, super::helpers::unit_path(&[0, 1, 2])).unwrap();
        assert_eq!(t.slot_count(), 3);
        for (step, node) in [0u32, 1, 2].into_iter().enumerate() {
            let slots = t.slots_at(NodeId(node));
            assert_eq!(slots.len(), 1);
            assert_eq!(slots[0].agv, AgvId(3));
            assert_eq!(slots[0].step, step as u32);
            assert_eq!(slots[0].path, r);
        }
    }

    #[test]
    fn slot_time_is_start_plus_cumulative_cost() {
        let mut t = ReservationTable::new(4, 2);
        t.commit(AgvId(0), 10.0, super::helpers::unit_path(&[0, 1, 2])).unwrap();
        let slot = t.slots_at(NodeId(2))[0];
        assert_eq!(t.slot_time(&slot), Some(12.0));
        let occ: Vec<_> = t.occupancy(NodeId(1)).collect();
        assert_eq!(occ, vec![(AgvId(0), 11.0)]);
    }

    #[test]
    fn failed_commit_leaves_table_untouched() {
        let mut t = ReservationTable::new(4, 1);
        t.commit(AgvId(0), 0.0, super::helpers::unit_path(&[0, 1])).unwrap();
        let err = t.commit(AgvId(1), 0.0, super::helpers::unit_path(&[3, 2, 1])).unwrap_err();
        assert_eq!(err, ReserveError::CapacityExceeded { node: NodeId(1), capacity: 1 });
        assert_eq!(t.slot_count(), 2);
        assert!(t.slots_at(NodeId(3)).is_empty());
        assert_eq!(t.path_count(), 1);
    }

    #[test]
    fn commit_rejects_nodes_outside_table() {
        let mut t = ReservationTable::new(2, 1);
        let err = t.commit(AgvId(0), 0.0, super::helpers::unit_path(&[0, 5])).unwrap_err();
        assert_eq!(err, ReserveError::NodeNotFound(NodeId(5)));
        assert_eq!(t.slot_count(), 0);
    }

    #[test]
    fn recommitting_same_vehicle_exhausts_capacity() {
        let mut t = ReservationTable::new(2, 1);
        t.commit(AgvId(0), 0.0, super::helpers::unit_path(&[0, 1])).unwrap();
        assert!(matches!(
            t.commit(AgvId(0), 5.0, super::helpers::unit_path(&[0, 1])),
            Err(ReserveError::CapacityExceeded { .. })
        ));
    }
}

#[cfg(test)]
mod lifetime {
    use agv_core::{AgvId, NodeId};
    use crate::ReservationTable;

    #[test]
    fn release_removes_only_that_vehicle() {
        let mut t = ReservationTable::new(4, 2);
        t.commit(AgvId(0), 0.0, super::helpers::unit_path(&[0, 1, 2])).unwrap();
        let keep = t.commit(AgvId(1), 0.0, super::helpers::unit_path(&[3, 1])).unwrap();

        assert_eq!(t.release(AgvId(0)), 3);
        assert_eq!(t.slot_count(), 2);
        assert_eq!(t.slots_at(NodeId(1))[0].agv, AgvId(1));
        let live: Vec<_> = t.planned_paths().map(|(r, _)| r).collect();
        assert_eq!(live, vec![keep]);

        // Second release is a no-op.
        assert_eq!(t.release(AgvId(0)), 0);
    }

    #[test]
    fn released_path_refs_are_not_reused() {
        let mut t = ReservationTable::new(3, 2);
        let old = t.commit(AgvId(0), 0.0, super::helpers::unit_path(&[0, 1])).unwrap();
        t.release(AgvId(0));
        let new = t.commit(AgvId(1), 0.0, super::helpers::unit_path(&[2, 1])).unwrap();

        assert_ne!(old, new);
        assert!(t.planned(old).is_none());
        assert_eq!(t.planned(new).unwrap().agv, AgvId(1));
        assert_eq!(t.path_count(), 1);
    }

    #[test]
    fn clear_resets_everything() {
        let mut t = ReservationTable::new(3, 2);
        t.commit(AgvId(0), 0.0, super::helpers::unit_path(&[0, 1, 2])).unwrap();
        t.clear();
        assert_eq!(t.slot_count(), 0);
        assert_eq!(t.path_count(), 0);
        assert_eq!(t.node_count(), 3);
    }
}
