//! grid32 — reference demo for the rust_agv fleet planner.
//!
//! Plans 10 AGVs across a 32×32 lattice (1024 nodes, unit spacing, axis
//! links plus self-loops).  AGV *i* starts on node *i* and heads for node
//! *i + 100*, all departing at t = 0.  Vehicles are planned in id order, so
//! later ones route around earlier ones.
//!
//! Pass a fleet CSV (`agv_id,start_node,goal_node,start_timestamp`) as the
//! first argument to plan a different fleet on the same grid.  Set
//! `RUST_LOG=agv_plan=debug` for per-vehicle detail.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use agv_core::{AgvId, GridSpec, NodeId, PlannerConfig};
use agv_grid::GridGraph;
use agv_plan::{AgvOutcome, AgvState, FleetPlanner, load_fleet_csv};

// ── Constants ─────────────────────────────────────────────────────────────────

const FLEET_SIZE:  u32 = 10;
const GOAL_OFFSET: u32 = 100;
const OUTPUT_DIR:  &str = "output/grid32";

fn default_fleet() -> Vec<AgvState> {
    (0..FLEET_SIZE)
        .map(|i| AgvState::new(AgvId(i), NodeId(i), NodeId(i + GOAL_OFFSET), 0.0))
        .collect()
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let spec = GridSpec::default();
    let graph = GridGraph::build(&spec)?;

    let mut fleet = match std::env::args().nth(1) {
        Some(path) => load_fleet_csv(Path::new(&path), graph.node_count())?,
        None => default_fleet(),
    };

    let config = PlannerConfig {
        fleet_size: fleet.len().max(1),
        ..PlannerConfig::default()
    };

    println!("=== grid32 — rust_agv fleet planner ===");
    println!(
        "Grid: {}×{} ({} nodes, {} links)  |  AGVs: {}",
        spec.width,
        spec.height,
        graph.node_count(),
        graph.link_count(),
        fleet.len()
    );
    println!(
        "Speed factor: {}  |  Turn weight: {}  |  Tolerance: {}",
        config.speed_factor, config.turn_weight, config.collision_tolerance
    );
    println!();

    let planner = FleetPlanner::new(config)?;
    let mut table = planner.new_table(&graph);

    let t0 = Instant::now();
    let report = planner.plan_fleet(&mut fleet, &graph, &mut table)?;
    let elapsed = t0.elapsed();

    println!("Planning complete in {:.3} ms", elapsed.as_secs_f64() * 1e3);
    println!("  {}", report.summary());
    println!("  reservations: {} slots", table.slot_count());
    println!();

    println!("{:<6} {:<7} {:<7} {:<6} {:<9} {}", "AGV", "Start", "Goal", "Hops", "Cost", "Status");
    println!("{}", "-".repeat(48));
    for (state, outcome) in fleet.iter().zip(&report.outcomes) {
        match outcome {
            AgvOutcome::Planned { path, .. } => println!(
                "{:<6} {:<7} {:<7} {:<6} {:<9.3} ok",
                state.id.0,
                state.current.0,
                state.goal.0,
                path.hop_count(),
                path.total_cost(),
            ),
            AgvOutcome::Failed { failure, .. } => println!(
                "{:<6} {:<7} {:<7} {:<6} {:<9} {failure}",
                state.id.0, state.current.0, state.goal.0, "-", "-",
            ),
        }
    }

    std::fs::create_dir_all(OUTPUT_DIR)?;
    let out = Path::new(OUTPUT_DIR).join("routes.csv");
    report.write_csv_path(&out)?;
    println!();
    println!("Routes written to {}", out.display());

    Ok(())
}
