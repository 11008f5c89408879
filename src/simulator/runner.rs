//! Main simulation loop: play sessions with the autopilot and collect stats.

use super::autopilot::should_jump;
use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::runner::{jump, start, step, stop, RunnerEvent, RunnerGame};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);
    let mut game = RunnerGame::new(config.runner.clone());

    for run_idx in 0..config.num_runs {
        // Create RNG for this run
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => StdRng::from_entropy(),
        };

        let stats = simulate_single_run(&mut game, config, &mut rng);

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - Score {}, Frames {}, Spawns {} ({} paired, {} air), Jumps {}{}",
                run_idx + 1,
                config.num_runs,
                stats.score,
                stats.frames,
                stats.spawns,
                stats.paired_spawns,
                stats.air_spawns,
                stats.jumps,
                if stats.survived { ", survived" } else { "" }
            );
        }
        all_runs.push(stats);
    }

    SimReport::from_runs(all_runs, config.max_frames_per_run)
}

/// Play one session on `game` (high score carries over between calls).
pub fn simulate_single_run<R: Rng>(
    game: &mut RunnerGame,
    config: &SimConfig,
    rng: &mut R,
) -> RunStats {
    // Retry straight away; the cooldown only guards human input
    start(game);

    let mut stats = RunStats::default();
    while game.is_playing() && game.frame < config.max_frames_per_run {
        if should_jump(game, config.autopilot_lead_frames) && jump(game).is_some() {
            stats.jumps += 1;
        }

        for event in step(game, rng).events {
            if let RunnerEvent::Spawned { kind, paired, .. } = event {
                stats.spawns += 1;
                if paired {
                    stats.paired_spawns += 1;
                }
                if kind.is_air() {
                    stats.air_spawns += 1;
                }
            }
        }
    }

    stats.score = game.score;
    stats.frames = game.frame;
    stats.final_speed = game.speed;
    stats.survived = game.is_playing();
    // A capped run still has to end so the next call starts fresh
    stop(game);
    stats
}
