//! Simulation report generation.

use serde::Serialize;

/// Statistics for one simulated session.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunStats {
    pub score: u32,
    pub frames: u64,
    pub final_speed: f64,
    /// Spawner firings (a pair counts once)
    pub spawns: u32,
    pub paired_spawns: u32,
    pub air_spawns: u32,
    pub jumps: u32,
    /// Still alive when the frame cap was reached
    pub survived: bool,
}

/// Aggregated results from multiple simulated sessions.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_survived: u32,
    pub max_frames_per_run: u64,

    pub avg_score: f64,
    pub median_score: u32,
    pub best_score: u32,
    pub worst_score: u32,
    pub avg_frames: f64,
    pub pair_rate: f64,
    pub air_rate: f64,

    pub runs: Vec<RunStats>,
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>, max_frames_per_run: u64) -> Self {
        let num_runs = runs.len() as u32;
        let runs_survived = runs.iter().filter(|r| r.survived).count() as u32;
        let divisor = num_runs.max(1) as f64;

        let avg_score = runs.iter().map(|r| r.score as f64).sum::<f64>() / divisor;
        let avg_frames = runs.iter().map(|r| r.frames as f64).sum::<f64>() / divisor;

        let mut sorted: Vec<u32> = runs.iter().map(|r| r.score).collect();
        sorted.sort_unstable();
        let median_score = sorted.get(sorted.len() / 2).copied().unwrap_or(0);
        let worst_score = sorted.first().copied().unwrap_or(0);
        let best_score = sorted.last().copied().unwrap_or(0);

        let spawns: u32 = runs.iter().map(|r| r.spawns).sum();
        let rate = |n: u32| {
            if spawns > 0 {
                n as f64 / spawns as f64
            } else {
                0.0
            }
        };
        let pair_rate = rate(runs.iter().map(|r| r.paired_spawns).sum());
        let air_rate = rate(runs.iter().map(|r| r.air_spawns).sum());

        Self {
            num_runs,
            runs_survived,
            max_frames_per_run,
            avg_score,
            median_score,
            best_score,
            worst_score,
            avg_frames,
            pair_rate,
            air_rate,
            runs,
        }
    }

    /// Human-readable summary.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("── SCORES ───────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Runs:          {}\n", self.num_runs));
        report.push_str(&format!("  Average Score: {:.1}\n", self.avg_score));
        report.push_str(&format!("  Median Score:  {}\n", self.median_score));
        report.push_str(&format!("  Best Score:    {}\n", self.best_score));
        report.push_str(&format!("  Worst Score:   {}\n\n", self.worst_score));

        report.push_str("── PACING ───────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Run Length: {:.0} frames ({:.1}s)\n",
            self.avg_frames,
            self.avg_frames / 60.0
        ));
        report.push_str(&format!(
            "  Survived Cap:   {}/{} ({} frames)\n",
            self.runs_survived, self.num_runs, self.max_frames_per_run
        ));
        report.push_str(&format!("  Paired Spawns:  {:.1}%\n", self.pair_rate * 100.0));
        report.push_str(&format!("  Air Spawns:     {:.1}%\n\n", self.air_rate * 100.0));

        report.push_str("── ASSESSMENT ───────────────────────────────────────────────────\n");
        let rating = if self.num_runs > 0 && self.runs_survived == self.num_runs {
            "TOO EASY - Autopilot never dies"
        } else if self.avg_frames < 600.0 {
            "TOO HARD - Most runs end inside ten seconds"
        } else {
            "OK - Runs end, but not instantly"
        };
        report.push_str(&format!("  {}\n", rating));

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
