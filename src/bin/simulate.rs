//! Runner tuning simulator CLI.
//!
//! Plays sessions with the autopilot to compare revisions.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                         # 200 runs, Fair revision
//!   cargo run --bin simulate -- -n 50 -r classic     # 50 runs of Classic
//!   cargo run --bin simulate -- --seed 42            # Reproducible run

use bhaisaur::core::config::Revision;
use bhaisaur::simulator::{run_simulation, SimConfig};
use std::env;
use std::path::Path;

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = match parse_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'simulate --help' for usage.");
            std::process::exit(1);
        }
    };

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              BHAISAUR RUN SIMULATOR                           ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Frame Cap:      {}", config.max_frames_per_run);
    println!(
        "  Speed:          {} -> {} (+{}/frame)",
        config.runner.initial_speed, config.runner.max_speed, config.runner.speed_increment
    );
    println!(
        "  Air Obstacles:  {}",
        if config.runner.air_obstacles {
            format!("{:.0}%", config.runner.air_probability * 100.0)
        } else {
            "off".to_string()
        }
    );
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    if args.iter().any(|a| a == "--json") {
        println!("{}", report.to_json());
    }
}

fn parse_args(args: &[String]) -> Result<SimConfig, String> {
    let mut config = SimConfig::default();
    let mut revision = Revision::default();
    let mut overrides: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(200);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-f" | "--frames" => {
                if i + 1 < args.len() {
                    config.max_frames_per_run = args[i + 1].parse().unwrap_or(18_000);
                    i += 1;
                }
            }
            "-r" | "--revision" => {
                if i + 1 < args.len() {
                    revision = Revision::from_name(&args[i + 1])
                        .ok_or_else(|| format!("Unknown revision: {}", args[i + 1]))?;
                    i += 1;
                }
            }
            "-c" | "--config" => {
                if i + 1 < args.len() {
                    overrides = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--lead" => {
                if i + 1 < args.len() {
                    config.autopilot_lead_frames = args[i + 1].parse().unwrap_or(7.0);
                    i += 1;
                }
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "--json" => {}
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    config.runner = revision
        .load_config(overrides.as_deref().map(Path::new))
        .map_err(|e| {
            format!(
                "Could not load config {}: {}",
                overrides.as_deref().unwrap_or_default(),
                e
            )
        })?;
    Ok(config)
}

fn print_help() {
    println!("Bhaisaur Run Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>        Number of sessions (default: 200)");
    println!("    -s, --seed <S>        Random seed for reproducibility");
    println!("    -f, --frames <F>      Frame cap per session (default: 18,000)");
    println!("    -r, --revision <R>    classic, aerial, or fair (default: fair)");
    println!("    -c, --config <FILE>   JSON tuning overrides applied on the revision");
    println!("    --lead <FRAMES>       Autopilot look-ahead (default: 7)");
    println!("    -v, --verbose         Print every session");
    println!("    --json                Also print the JSON report");
    println!("    -h, --help            Show this help");
}
