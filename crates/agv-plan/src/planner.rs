//! Sequential, priority-ordered fleet planning.

use rustc_hash::FxHashSet;
use tracing::{debug, info};

use agv_core::{AgvId, Path, PlannerConfig};
use agv_grid::GridGraph;
use agv_reserve::ReservationTable;
use agv_search::{AStarEngine, SearchEngine, SearchResult};

use crate::{
    AgvOutcome, AgvState, CollisionAwareExpansion, FleetReport, NoopObserver, PlanError,
    PlanFailure, PlanObserver, PlanResult,
};

/// Plans vehicles one at a time in slice order, committing each success to
/// the shared reservation table before the next search starts.
///
/// Earlier vehicles have priority: a later vehicle must route around every
/// earlier commitment, and an earlier one never yields.
#[derive(Clone, Debug)]
pub struct FleetPlanner<E = AStarEngine> {
    config: PlannerConfig,
    engine: E,
}

impl FleetPlanner<AStarEngine> {
    /// Planner with the default A* engine bounded by
    /// `config.max_expansions`.
    pub fn new(config: PlannerConfig) -> PlanResult<Self> {
        let engine = AStarEngine::new(config.max_expansions);
        Self::with_engine(config, engine)
    }
}

impl<E: SearchEngine> FleetPlanner<E> {
    pub fn with_engine(config: PlannerConfig, engine: E) -> PlanResult<Self> {
        config.validate()?;
        Ok(Self { config, engine })
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Empty reservation table sized for `graph` and this fleet.
    pub fn new_table(&self, graph: &GridGraph) -> ReservationTable {
        ReservationTable::new(graph.node_count(), self.config.fleet_size)
    }

    /// Search for `agv` against the current reservations without committing.
    pub fn plan_one(
        &self,
        agv: &AgvState,
        graph: &GridGraph,
        table: &ReservationTable,
    ) -> SearchResult<Path> {
        let ctx = CollisionAwareExpansion::new(graph, table, &self.config, agv.id, agv.start_time);
        self.engine.search(&ctx, agv.current, agv.goal)
    }

    pub fn plan_fleet(
        &self,
        fleet: &mut [AgvState],
        graph: &GridGraph,
        table: &mut ReservationTable,
    ) -> PlanResult<FleetReport> {
        self.plan_fleet_observed(fleet, graph, table, &mut NoopObserver)
    }

    /// Plan every vehicle in `fleet`, in order.
    ///
    /// On success each planned vehicle's `plan` holds its committed path.
    /// Vehicles without a route are reported as failed and leave no
    /// reservations.  Returns `Err` before any search if a vehicle names a
    /// node outside `graph` or two vehicles share an id, and mid-run if a
    /// commit would overflow a node's capacity; commits made before that
    /// point stay in `table`.
    pub fn plan_fleet_observed<O: PlanObserver + ?Sized>(
        &self,
        fleet: &mut [AgvState],
        graph: &GridGraph,
        table: &mut ReservationTable,
        observer: &mut O,
    ) -> PlanResult<FleetReport> {
        if table.node_count() != graph.node_count() {
            return Err(PlanError::TableMismatch {
                table: table.node_count(),
                graph: graph.node_count(),
            });
        }
        // Conflict checks ignore a vehicle's own slots.
        let mut seen: FxHashSet<AgvId> = FxHashSet::default();
        for agv in fleet.iter() {
            if !seen.insert(agv.id) {
                return Err(PlanError::InvalidFleet(format!("duplicate agv id {}", agv.id)));
            }
            graph.check(agv.current)?;
            graph.check(agv.goal)?;
            if !agv.start_time.is_finite() {
                return Err(PlanError::InvalidFleet(format!(
                    "{} has non-finite start time {}",
                    agv.id, agv.start_time
                )));
            }
        }

        let mut report = FleetReport { outcomes: Vec::with_capacity(fleet.len()) };

        for agv in fleet.iter_mut() {
            observer.on_agv_start(agv.id);
            agv.plan = None;

            match self.plan_one(agv, graph, table) {
                Ok(path) => {
                    let path_ref = table.commit(agv.id, agv.start_time, path.clone())?;
                    agv.plan = Some(path_ref);
                    debug!(
                        agv = %agv.id,
                        hops = path.hop_count(),
                        cost = path.total_cost(),
                        "path committed"
                    );
                    observer.on_agv_planned(agv.id, path_ref, &path);
                    report.outcomes.push(AgvOutcome::Planned {
                        agv: agv.id,
                        start_time: agv.start_time,
                        path_ref,
                        path,
                    });
                }
                Err(err) => {
                    let failure = PlanFailure::from(err);
                    debug!(agv = %agv.id, %failure, "planning failed");
                    observer.on_agv_failed(agv.id, &failure);
                    report.outcomes.push(AgvOutcome::Failed { agv: agv.id, failure });
                }
            }
        }

        info!(
            agvs = report.len(),
            planned = report.planned_count(),
            failed = report.failed_count(),
            "fleet planned"
        );
        observer.on_fleet_end(&report);
        Ok(report)
    }
}
