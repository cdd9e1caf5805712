//! Property checks for the spread automaton over many seeded incidents
//!
//! These drive whole incidents through the public API and check the invariants
//! that must hold in every reachable state: one-way cell states, cell count
//! conservation, bounded containment and seeded determinism.

use chrono::{TimeDelta, Utc};
use ctor::ctor;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wildfire_sim_core::{
    FireState, IgnitionIntensity, PeriodController, SpreadEngine, StatisticsReporter,
    SuppressionEngine, TerrainGrid, ACRES_PER_CELL,
};

#[ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Rank of a state along `Empty -> Burning -> {Burned | Contained}`
fn rank(state: FireState) -> u8 {
    match state {
        FireState::Empty => 0,
        FireState::Burning => 1,
        FireState::Burned | FireState::Contained => 2,
    }
}

fn assert_legal_evolution(before: &TerrainGrid, after: &TerrainGrid) {
    for (old, new) in before.cells().iter().zip(after.cells()) {
        let (from, to) = (old.state(), new.state());
        assert!(
            from == to || from.can_transition_to(to),
            "illegal transition {from} -> {to} at {:?}",
            new.position()
        );
        assert!(rank(to) >= rank(from));
        // Terrain and fuel never change after construction
        assert_eq!(old.terrain(), new.terrain());
        assert_eq!(old.fuel_load(), new.fuel_load());
    }
}

#[test]
fn test_cell_states_only_move_forward() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut grid = TerrainGrid::new(10, &mut rng).unwrap();
        let t0 = grid.start_time();
        grid.ignite_at(IgnitionIntensity::Moderate, &mut rng, t0);

        for period in 0..8 {
            // Pretend several hours pass per period so burnout also happens
            let now = t0 + TimeDelta::hours(4 * period);

            let before = grid.clone();
            SuppressionEngine::apply_at(&mut grid, 43, &mut rng, now);
            assert_legal_evolution(&before, &grid);

            let before = grid.clone();
            PeriodController::advance_at(&mut grid, &mut rng, now);
            assert_legal_evolution(&before, &grid);
        }
    }
}

#[test]
fn test_conservation_and_containment_bounds() {
    for seed in 100..130 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut grid = TerrainGrid::new(9, &mut rng).unwrap();
        let t0 = grid.start_time();
        grid.ignite_at(IgnitionIntensity::High, &mut rng, t0);

        for period in 0..6 {
            let now = t0 + TimeDelta::hours(3 * period);
            SuppressionEngine::apply_at(&mut grid, 60, &mut rng, now);
            PeriodController::advance_at(&mut grid, &mut rng, now);

            let stats = StatisticsReporter::statistics_at(&grid, now);
            let affected = stats.active_cells + stats.burned_cells + stats.contained_cells;
            assert!(affected <= stats.total_cells);
            assert_eq!(stats.fire_size_acres, affected as u32 * ACRES_PER_CELL);
            assert!(stats.containment_percent <= 100);
            assert_eq!(stats.active_cells, grid.count(FireState::Burning));
            assert_eq!(stats.fire_danger, grid.weather().danger_rating());
        }
    }
}

#[test]
fn test_statistics_are_pure_queries() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut grid = TerrainGrid::new(8, &mut rng).unwrap();
    grid.ignite(IgnitionIntensity::High, &mut rng);
    PeriodController::advance(&mut grid, &mut rng);

    let snapshot = grid.clone();
    let now = Utc::now();
    let first = StatisticsReporter::statistics_at(&grid, now);
    let threat_first = StatisticsReporter::threat_assessment(&grid);
    let second = StatisticsReporter::statistics_at(&grid, now);
    let threat_second = StatisticsReporter::threat_assessment(&grid);

    assert_eq!(first, second);
    assert_eq!(threat_first, threat_second);
    assert_eq!(snapshot, grid);
}

#[test]
fn test_seeded_runs_are_identical() {
    let start = Utc::now();
    let run = |seed: u64| {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut grid = TerrainGrid::new_at(12, &mut rng, start).unwrap();
        grid.ignite_at(IgnitionIntensity::Moderate, &mut rng, start);
        for _ in 0..15 {
            SpreadEngine::step_at(&mut grid, &mut rng, start);
        }
        grid
    };

    let a = run(2024);
    let b = run(2024);
    assert_eq!(a, b);

    // A different seed should give a different incident
    let c = run(2025);
    assert_ne!(a, c);
}

#[test]
fn test_back_to_back_periods_do_not_burn_out() {
    // Burnout compares real elapsed time; periods advanced in quick succession
    // therefore never burn anything out.
    let mut rng = StdRng::seed_from_u64(55);
    let mut grid = TerrainGrid::new(10, &mut rng).unwrap();
    grid.ignite(IgnitionIntensity::High, &mut rng);
    for _ in 0..10 {
        PeriodController::advance(&mut grid, &mut rng);
    }
    assert_eq!(grid.count(FireState::Burned), 0);
}

#[test]
fn test_compounding_neighbours_spread_faster() {
    // A target flanked by many burning cells is tested once per source, so over
    // many trials it ignites more often than one with a single burning neighbour.
    let trials = 400;
    let mut single_hits = 0;
    let mut ring_hits = 0;

    for seed in 0..trials {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut single = TerrainGrid::new(5, &mut rng).unwrap();
        let now = single.start_time();
        let mut ring = single.clone();

        single.ignite_cell_at(1, 2, now);
        for (x, y) in [(1, 1), (2, 1), (3, 1), (1, 2), (3, 2), (1, 3), (2, 3), (3, 3)] {
            ring.ignite_cell_at(x, y, now);
        }

        let mut rng_single = StdRng::seed_from_u64(seed + 10_000);
        let mut rng_ring = StdRng::seed_from_u64(seed + 10_000);
        SpreadEngine::step_at(&mut single, &mut rng_single, now);
        SpreadEngine::step_at(&mut ring, &mut rng_ring, now);

        if single.cell(2, 2).unwrap().state() == FireState::Burning {
            single_hits += 1;
        }
        if ring.cell(2, 2).unwrap().state() == FireState::Burning {
            ring_hits += 1;
        }
    }

    assert!(
        ring_hits > single_hits,
        "ring {ring_hits} vs single {single_hits}"
    );
}
