//! Simulation configuration.

use crate::core::config::{Revision, RunnerConfig};

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of sessions to play
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Frames per session before it counts as survived
    pub max_frames_per_run: u64,

    /// Game tuning used for every session
    pub runner: RunnerConfig,

    /// Frames of look-ahead the autopilot uses before jumping
    pub autopilot_lead_frames: f64,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 200,
            seed: None,
            max_frames_per_run: 60 * 60 * 5, // five minutes at 60 FPS
            runner: RunnerConfig::default(),
            autopilot_lead_frames: 7.0,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for comparing revisions
    pub fn for_revision(revision: Revision, num_runs: u32) -> Self {
        Self {
            num_runs,
            runner: revision.config(),
            ..Default::default()
        }
    }
}
