use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::warn;
use wildfire_sim_core::{
    Difficulty, FireState, IgnitionIntensity, IncidentOutcome, PeriodController,
    ResourceDeployment, ResourceKind, ScenarioConfig, StatisticsReporter, Stats,
    SuppressionEngine, TerrainGrid, TerrainType, Threat,
};

/// Wildfire incident demo with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "wildfire-demo")]
#[command(about = "Grid-based wildfire incident simulation demo", long_about = None)]
struct Args {
    /// Difficulty preset (easy, moderate, hard)
    #[arg(short, long, default_value = "moderate")]
    difficulty: String,

    /// Override the preset's grid size
    #[arg(short, long)]
    grid_size: Option<usize>,

    /// Override the preset's ignition intensity (low, moderate, high)
    #[arg(short, long)]
    intensity: Option<String>,

    /// Fire size in acres at which the incident is lost
    #[arg(long, default_value_t = 200)]
    critical_acres: u32,

    /// Random seed (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Maximum operational periods to play
    #[arg(short, long, default_value_t = 12)]
    periods: u32,

    /// Additional units deployed at the start, e.g. `air_tankers=2` (repeatable)
    #[arg(short, long = "deploy")]
    deploy: Vec<String>,

    /// Extra engines committed every period
    #[arg(long, default_value_t = 0)]
    reinforce: u32,

    /// Print the grid map after each period
    #[arg(short, long)]
    map: bool,

    /// Emit one JSON object per period instead of text
    #[arg(long)]
    json: bool,
}

/// One period of output for `--json`
#[derive(Serialize)]
struct PeriodReport<'a> {
    period: u32,
    suppression_points: u32,
    stats: &'a Stats,
    threat: &'a Threat,
    outcome: IncidentOutcome,
}

fn parse_difficulty(name: &str) -> Difficulty {
    match name.to_lowercase().as_str() {
        "easy" => Difficulty::Easy,
        "hard" => Difficulty::Hard,
        "moderate" | "medium" => Difficulty::Moderate,
        other => {
            warn!("Unknown difficulty '{}', using moderate", other);
            Difficulty::Moderate
        }
    }
}

fn parse_intensity(name: &str) -> IgnitionIntensity {
    match name.to_lowercase().as_str() {
        "low" => IgnitionIntensity::Low,
        "high" => IgnitionIntensity::High,
        "moderate" | "medium" => IgnitionIntensity::Moderate,
        other => {
            warn!("Unknown intensity '{}', using moderate", other);
            IgnitionIntensity::Moderate
        }
    }
}

fn parse_deployment(entries: &[String]) -> ResourceDeployment {
    let mut deployment = ResourceDeployment::default();
    for entry in entries {
        let (name, count) = entry.split_once('=').unwrap_or((entry.as_str(), "1"));
        match (ResourceKind::from_name(name), count.parse::<u32>()) {
            (Some(kind), Ok(count)) => deployment.deploy(kind, count),
            _ => warn!("Ignoring invalid deployment '{}'", entry),
        }
    }
    deployment
}

/// One character per cell: terrain when unburned, fire state otherwise
fn render_map(grid: &TerrainGrid) -> String {
    let mut out = String::new();
    for row in grid.rows() {
        for cell in row {
            let glyph = match cell.state() {
                FireState::Burning => '*',
                FireState::Burned => '#',
                FireState::Contained => 'x',
                FireState::Empty => match cell.terrain() {
                    TerrainType::Forest => 'f',
                    TerrainType::Grass => 'g',
                    TerrainType::Urban => 'U',
                    TerrainType::Ridge => '^',
                    TerrainType::Valley => 'v',
                },
            };
            out.push(glyph);
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

fn print_status(label: &str, stats: &Stats, threat: &Threat) {
    println!("--- {label} ---");
    println!(
        "Size: {:>5} acres | Containment: {:>3}% | Burning: {} | Burned: {} | Contained: {}",
        stats.fire_size_acres,
        stats.containment_percent,
        stats.active_cells,
        stats.burned_cells,
        stats.contained_cells
    );
    println!(
        "Weather: wind {} {} mph, {}°F, {}% RH, forecast {} | Danger: {}",
        stats.weather.wind_direction(),
        stats.weather.wind_speed(),
        stats.weather.temperature(),
        stats.weather.humidity(),
        stats.weather.forecast_reliability(),
        stats.fire_danger
    );
    println!(
        "Threat: {} | Structures threatened: {}/{} | Evacuation: {}",
        threat.threat_level,
        threat.threatened_structures,
        threat.total_structures,
        if threat.evacuation_recommended { "RECOMMENDED" } else { "not required" }
    );
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let preset = parse_difficulty(&args.difficulty).scenario();
    let scenario = ScenarioConfig {
        grid_size: args.grid_size.unwrap_or(preset.grid_size),
        intensity: args
            .intensity
            .as_deref()
            .map_or(preset.intensity, parse_intensity),
        critical_failure_acres: args.critical_acres,
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut grid = match scenario.start_incident(&mut rng) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Invalid scenario: {e}");
            std::process::exit(2);
        }
    };

    let mut deployment = parse_deployment(&args.deploy);

    if !args.json {
        println!("=== Wildfire Incident Demo ===\n");
        println!(
            "Grid: {}x{} ({} acres) | Ignition: {:?} | Seed: {} | Failure at {} acres",
            grid.size(),
            grid.size(),
            grid.total_acres(),
            scenario.intensity,
            seed,
            scenario.critical_failure_acres
        );
        print_status(
            "Initial dispatch",
            &StatisticsReporter::statistics(&grid),
            &StatisticsReporter::threat_assessment(&grid),
        );
        if args.map {
            println!("{}", render_map(&grid));
        }
    }

    let mut outcome = IncidentOutcome::Active;
    for _ in 0..args.periods {
        if args.reinforce > 0 {
            deployment.deploy(ResourceKind::Engines, args.reinforce);
        }
        let points = deployment.suppression_points();
        SuppressionEngine::apply(&mut grid, points, &mut rng);
        PeriodController::advance(&mut grid, &mut rng);

        let stats = StatisticsReporter::statistics(&grid);
        let threat = StatisticsReporter::threat_assessment(&grid);
        outcome = IncidentOutcome::evaluate(&grid, scenario.critical_failure_acres);

        if args.json {
            let report = PeriodReport {
                period: stats.operational_period,
                suppression_points: points,
                stats: &stats,
                threat: &threat,
                outcome,
            };
            match serde_json::to_string(&report) {
                Ok(line) => println!("{line}"),
                Err(e) => warn!("Failed to serialize period report: {}", e),
            }
        } else {
            println!();
            print_status(
                &format!(
                    "Operational period {} ({} suppression points)",
                    stats.operational_period, points
                ),
                &stats,
                &threat,
            );
            if args.map {
                println!("{}", render_map(&grid));
            }
        }

        if outcome.is_final() {
            break;
        }
    }

    if !args.json {
        let stats = StatisticsReporter::statistics(&grid);
        println!("\n=== Incident {} ===", outcome.to_string().to_uppercase());
        println!(
            "Final size: {} acres | Containment: {}% | Periods: {} | Duration: {}",
            stats.fire_size_acres,
            stats.containment_percent,
            stats.operational_period,
            stats.incident_duration_display()
        );
    }
}
