//! Unit tests for agv-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgvId, NodeId, PathRef};

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinels() {
        assert_eq!(AgvId::INVALID.0, u32::MAX);
        assert!(!PathRef::default().is_valid());
        assert!(NodeId(0).is_valid());
    }

    #[test]
    fn display() {
        assert_eq!(AgvId(3).to_string(), "AgvId(3)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{Direction, Position};

    #[test]
    fn manhattan_is_symmetric() {
        let a = Position::new(1.0, 5.0);
        let b = Position::new(4.0, 1.0);
        assert_eq!(a.manhattan(b), 7.0);
        assert_eq!(b.manhattan(a), 7.0);
    }

    #[test]
    fn euclidean_three_four_five() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert_eq!(a.euclidean(b), 5.0);
    }

    #[test]
    fn sub_points_from_rhs() {
        let d = Position::new(2.0, 3.0) - Position::new(1.0, 1.0);
        assert_eq!(d, Direction::new(1.0, 2.0));
        assert_eq!(d.dot(Direction::new(1.0, 0.0)), 1.0);
    }
}

#[cfg(test)]
mod path {
    use crate::{NodeId, Path, PathStep};

    fn three_steps() -> Path {
        Path::from_steps(vec![
            PathStep { node: NodeId(0), cost: 0.0 },
            PathStep { node: NodeId(1), cost: 0.5 },
            PathStep { node: NodeId(2), cost: 1.0 },
        ])
    }

    #[test]
    fn accessors() {
        let p = three_steps();
        assert_eq!(p.len(), 3);
        assert_eq!(p.hop_count(), 2);
        assert_eq!(p.total_cost(), 1.0);
        assert_eq!(p.cost_at(1), Some(0.5));
        assert_eq!(p.cost_at(3), None);
        assert_eq!(p.first_node(), Some(NodeId(0)));
        assert_eq!(p.last_node(), Some(NodeId(2)));
        assert_eq!(p.step_of(NodeId(2)), Some(2));
        assert_eq!(p.nodes().collect::<Vec<_>>(), vec![NodeId(0), NodeId(1), NodeId(2)]);
    }

    #[test]
    fn empty_path() {
        let p = Path::default();
        assert!(p.is_empty());
        assert_eq!(p.total_cost(), 0.0);
        assert_eq!(p.hop_count(), 0);
    }
}

#[cfg(test)]
mod config {
    use crate::{Direction, GridSpec, PlannerConfig, TurnGuard};

    #[test]
    fn defaults_validate() {
        assert!(GridSpec::default().validate().is_ok());
        assert!(PlannerConfig::default().validate().is_ok());
        assert_eq!(GridSpec::default().node_count(), 1024);
    }

    #[test]
    fn rejects_zero_speed() {
        let cfg = PlannerConfig { speed_factor: 0.0, ..PlannerConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_zero_turn_weight() {
        let cfg = PlannerConfig { turn_weight: 0.0, ..PlannerConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_negative_tolerance_and_empty_fleet() {
        let cfg = PlannerConfig { collision_tolerance: -1.0, ..PlannerConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = PlannerConfig { fleet_size: 0, ..PlannerConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_degenerate_grid() {
        assert!(GridSpec::new(0, 3, 1.0, 2.0).validate().is_err());
        assert!(GridSpec::new(3, 3, 0.0, 2.0).validate().is_err());
        assert!(GridSpec::new(3, 3, 1.0, 2.0).with_max_neighbors(0).validate().is_err());
    }

    #[test]
    fn component_sum_guard_misses_cancelling_vector() {
        let diag = Direction::new(1.0, -1.0);
        assert!(TurnGuard::NonZero.admits(diag));
        assert!(!TurnGuard::ComponentSum.admits(diag));
        assert!(!TurnGuard::NonZero.admits(Direction::new(0.0, 0.0)));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_derives {
    use serde::Serialize;
    use serde::de::DeserializeOwned;

    use crate::{AgvId, Direction, GridSpec, NodeId, Path, PathRef, PathStep, PlannerConfig, Position, TurnGuard};

    fn derives<T: Serialize + DeserializeOwned>() {}

    #[test]
    fn plain_data_types_are_serde() {
        derives::<AgvId>();
        derives::<NodeId>();
        derives::<PathRef>();
        derives::<Position>();
        derives::<Direction>();
        derives::<PathStep>();
        derives::<Path>();
        derives::<GridSpec>();
        derives::<PlannerConfig>();
        derives::<TurnGuard>();
    }
}
