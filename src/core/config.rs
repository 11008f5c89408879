//! Tuning configuration.
//!
//! Every gameplay constant is a field here rather than a literal in the
//! logic. Three built-in revisions provide presets; a JSON file can
//! override any subset of fields on top of a preset.

use crate::core::constants::{OBSTACLE_HEIGHT, OBSTACLE_WIDTH, PLAYER_HEIGHT, PLAYER_WIDTH};
use crate::runner::collision::Insets;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// Built-in tuning presets, one per release of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Revision {
    /// Ground obstacles only.
    Classic,
    /// Adds airborne obstacles.
    Aerial,
    /// Faster, more airborne obstacles, pairs always matched.
    Fair,
}

impl Revision {
    pub const ALL: [Revision; 3] = [Revision::Classic, Revision::Aerial, Revision::Fair];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Aerial => "Aerial",
            Self::Fair => "Fair",
        }
    }

    /// Parse a command-line name, case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|r| r.name().eq_ignore_ascii_case(name))
    }

    /// Velocity change per frame (positive = downward).
    pub fn gravity(&self) -> f64 {
        match self {
            Self::Classic => 0.8,
            Self::Aerial => 0.7,
            Self::Fair => 0.6,
        }
    }

    /// Velocity set by a jump (negative = upward).
    pub fn jump_velocity(&self) -> f64 {
        match self {
            Self::Classic => -15.0,
            Self::Aerial => -15.5,
            Self::Fair => -16.0,
        }
    }

    /// Scroll speed at the start of a run (units/frame).
    pub fn initial_speed(&self) -> f64 {
        match self {
            Self::Classic => 6.0,
            Self::Aerial => 5.0,
            Self::Fair => 5.0,
        }
    }

    pub fn speed_increment(&self) -> f64 {
        match self {
            Self::Classic => 0.003,
            Self::Aerial => 0.004,
            Self::Fair => 0.005,
        }
    }

    pub fn max_speed(&self) -> f64 {
        match self {
            Self::Classic => 14.0,
            Self::Aerial => 18.0,
            Self::Fair => 20.0,
        }
    }

    pub fn air_obstacles(&self) -> bool {
        !matches!(self, Self::Classic)
    }

    /// Speed above which air obstacles may appear.
    pub fn air_speed_threshold(&self) -> f64 {
        match self {
            Self::Classic => 4.0,
            Self::Aerial => 7.0,
            Self::Fair => 4.0,
        }
    }

    pub fn air_probability(&self) -> f64 {
        match self {
            Self::Classic => 0.0,
            Self::Aerial => 0.25,
            Self::Fair => 0.5,
        }
    }

    pub fn pair_probability(&self) -> f64 {
        match self {
            Self::Classic => 0.2,
            Self::Aerial => 0.2,
            Self::Fair => 0.25,
        }
    }

    /// Delay after death before a retry is accepted.
    pub fn retry_cooldown_ms(&self) -> u64 {
        match self {
            Self::Classic => 1500,
            Self::Aerial => 1500,
            Self::Fair => 1200,
        }
    }

    /// This preset with an optional JSON override file applied on top.
    /// Both binaries load their tuning through here.
    pub fn load_config(&self, overrides: Option<&Path>) -> io::Result<RunnerConfig> {
        let base = self.config();
        match overrides {
            Some(path) => {
                let json = fs::read_to_string(path)?;
                base.merged_with_json(&json)
            }
            None => Ok(base),
        }
    }

    /// Full configuration for this revision.
    pub fn config(&self) -> RunnerConfig {
        RunnerConfig {
            gravity: self.gravity(),
            jump_velocity: self.jump_velocity(),
            initial_speed: self.initial_speed(),
            speed_increment: self.speed_increment(),
            max_speed: self.max_speed(),
            air_obstacles: self.air_obstacles(),
            air_speed_threshold: self.air_speed_threshold(),
            air_probability: self.air_probability(),
            pair_probability: self.pair_probability(),
            retry_cooldown_ms: self.retry_cooldown_ms(),
            ..RunnerConfig::base()
        }
    }
}

impl Default for Revision {
    fn default() -> Self {
        Self::Fair
    }
}

/// All gameplay tuning knobs. Distances are logical units, times are frames
/// unless the name says otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    // -- Kinematics --
    pub gravity: f64,
    pub jump_velocity: f64,

    // -- Difficulty ramp --
    pub initial_speed: f64,
    pub speed_increment: f64,
    pub max_speed: f64,

    // -- Obstacle variety --
    pub air_obstacles: bool,
    pub air_speed_threshold: f64,
    pub air_probability: f64,
    /// Height of an air obstacle's bottom edge above the ground line.
    pub air_offset: f64,

    // -- Spawning --
    pub spawn_x: f64,
    /// Obstacles at or left of this line are dropped.
    pub despawn_x: f64,
    pub first_obstacle_frames: u32,
    pub pair_probability: f64,
    pub pair_gap: f64,
    pub pair_cooldown_min: f64,
    pub pair_cooldown_jitter: f64,
    pub min_gap_base: f64,
    pub min_gap_speed_factor: f64,
    pub min_gap_floor: f64,
    pub gap_jitter: f64,

    // -- Scoring / session --
    pub score_interval_frames: u64,
    pub retry_cooldown_ms: u64,

    // -- Hitboxes --
    pub player_insets: Insets,
    pub obstacle_insets: Insets,
}

impl RunnerConfig {
    /// Values shared by every revision.
    fn base() -> Self {
        Self {
            gravity: 0.6,
            jump_velocity: -16.0,
            initial_speed: 5.0,
            speed_increment: 0.005,
            max_speed: 20.0,
            air_obstacles: true,
            air_speed_threshold: 4.0,
            air_probability: 0.5,
            air_offset: 145.0,
            spawn_x: 900.0,
            despawn_x: -200.0,
            first_obstacle_frames: 80,
            pair_probability: 0.25,
            pair_gap: 120.0,
            pair_cooldown_min: 90.0,
            pair_cooldown_jitter: 40.0,
            min_gap_base: 95.0,
            min_gap_speed_factor: 2.0,
            min_gap_floor: 35.0,
            gap_jitter: 50.0,
            score_interval_frames: 6,
            retry_cooldown_ms: 1200,
            player_insets: Insets {
                left: 22.0,
                right: 22.0,
                top: 22.0,
                bottom: 13.0,
            },
            obstacle_insets: Insets::uniform(18.0),
        }
    }

    pub fn from_json(json: &str) -> io::Result<Self> {
        let config: RunnerConfig = serde_json::from_str(json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply the overrides in `json` on top of this configuration.
    pub fn merged_with_json(&self, json: &str) -> io::Result<Self> {
        let mut base = serde_json::to_value(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let overrides: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        match (&mut base, overrides) {
            (serde_json::Value::Object(fields), serde_json::Value::Object(changes)) => {
                for (key, value) in changes {
                    fields.insert(key, value);
                }
            }
            _ => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    "config overrides must be a JSON object",
                ))
            }
        }

        let config: RunnerConfig = serde_json::from_value(base)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> io::Result<()> {
        let invalid = |msg: String| Err(io::Error::new(io::ErrorKind::InvalidData, msg));

        if self.gravity <= 0.0 {
            return invalid(format!("gravity must be positive, got {}", self.gravity));
        }
        if self.jump_velocity >= 0.0 {
            return invalid(format!(
                "jump_velocity must be negative, got {}",
                self.jump_velocity
            ));
        }
        if self.initial_speed <= 0.0 {
            return invalid(format!(
                "initial_speed must be positive, got {}",
                self.initial_speed
            ));
        }
        if self.speed_increment < 0.0 {
            return invalid(format!(
                "speed_increment must not be negative, got {}",
                self.speed_increment
            ));
        }
        if self.max_speed < self.initial_speed {
            return invalid(format!(
                "max_speed ({}) is below initial_speed ({})",
                self.max_speed, self.initial_speed
            ));
        }
        if self.score_interval_frames == 0 {
            return invalid("score_interval_frames must be at least 1".to_string());
        }
        for (name, p) in [
            ("air_probability", self.air_probability),
            ("pair_probability", self.pair_probability),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return invalid(format!("{} must be within [0, 1], got {}", name, p));
            }
        }
        if self.despawn_x >= self.spawn_x {
            return invalid(format!(
                "despawn_x ({}) must be left of spawn_x ({})",
                self.despawn_x, self.spawn_x
            ));
        }
        let fits = |insets: &Insets, width: f64, height: f64| {
            insets.horizontal() < width && insets.vertical() < height
        };
        if !fits(&self.player_insets, PLAYER_WIDTH, PLAYER_HEIGHT) {
            return invalid("player_insets leave no hitbox".to_string());
        }
        if !fits(&self.obstacle_insets, OBSTACLE_WIDTH, OBSTACLE_HEIGHT) {
            return invalid("obstacle_insets leave no hitbox".to_string());
        }
        Ok(())
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Revision::default().config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_fair_revision() {
        assert_eq!(RunnerConfig::default(), Revision::Fair.config());
    }

    #[test]
    fn test_fair_constants() {
        let c = Revision::Fair.config();
        assert!((c.gravity - 0.6).abs() < f64::EPSILON);
        assert!((c.jump_velocity - (-16.0)).abs() < f64::EPSILON);
        assert!((c.initial_speed - 5.0).abs() < f64::EPSILON);
        assert!((c.speed_increment - 0.005).abs() < f64::EPSILON);
        assert!((c.max_speed - 20.0).abs() < f64::EPSILON);
        assert!(c.air_obstacles);
        assert!((c.air_probability - 0.5).abs() < f64::EPSILON);
        assert!((c.pair_probability - 0.25).abs() < f64::EPSILON);
        assert_eq!(c.score_interval_frames, 6);
        assert_eq!(c.retry_cooldown_ms, 1200);
    }

    #[test]
    fn test_all_revisions_validate() {
        for revision in Revision::ALL {
            assert!(revision.config().validate().is_ok(), "{}", revision.name());
        }
    }

    #[test]
    fn test_classic_is_ground_only() {
        let c = Revision::Classic.config();
        assert!(!c.air_obstacles);
        assert_eq!(c.air_probability, 0.0);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Revision::from_name("classic"), Some(Revision::Classic));
        assert_eq!(Revision::from_name("AERIAL"), Some(Revision::Aerial));
        assert_eq!(Revision::from_name("Fair"), Some(Revision::Fair));
        assert_eq!(Revision::from_name("hard"), None);
    }

    #[test]
    fn test_from_json_partial_overrides() {
        let config = RunnerConfig::from_json(r#"{ "gravity": 0.9, "max_speed": 12.0 }"#).unwrap();
        assert!((config.gravity - 0.9).abs() < f64::EPSILON);
        assert!((config.max_speed - 12.0).abs() < f64::EPSILON);
        // Untouched fields keep their defaults
        assert_eq!(config.score_interval_frames, 6);
    }

    #[test]
    fn test_merged_with_json_keeps_revision_base() {
        let classic = Revision::Classic.config();
        let merged = classic.merged_with_json(r#"{ "retry_cooldown_ms": 500 }"#).unwrap();
        assert_eq!(merged.retry_cooldown_ms, 500);
        assert!(!merged.air_obstacles);
        assert!((merged.gravity - classic.gravity).abs() < f64::EPSILON);
    }

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("bhaisaur-{}-{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_config_applies_file_over_preset() {
        let path = write_temp("aerial.json", r#"{ "score_interval_frames": 3 }"#);
        let config = Revision::Aerial.load_config(Some(&path)).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.score_interval_frames, 3);
        assert!((config.gravity - Revision::Aerial.gravity()).abs() < f64::EPSILON);
        assert!(config.air_obstacles);
    }

    #[test]
    fn test_load_config_without_file_is_the_preset() {
        for revision in Revision::ALL {
            assert_eq!(revision.load_config(None).unwrap(), revision.config());
        }
    }

    #[test]
    fn test_load_config_reports_missing_and_invalid_files() {
        let missing = std::env::temp_dir().join("bhaisaur-no-such-config.json");
        let err = Revision::Fair.load_config(Some(&missing)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);

        let path = write_temp("invalid.json", r#"{ "score_interval_frames": 0 }"#);
        let err = Revision::Fair.load_config(Some(&path)).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_merged_with_json_rejects_non_object() {
        let err = RunnerConfig::default().merged_with_json("[1, 2]").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        let err = RunnerConfig::from_json("{ gravity: ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad = [
            RunnerConfig {
                gravity: 0.0,
                ..RunnerConfig::default()
            },
            RunnerConfig {
                jump_velocity: 3.0,
                ..RunnerConfig::default()
            },
            RunnerConfig {
                max_speed: 1.0,
                ..RunnerConfig::default()
            },
            RunnerConfig {
                score_interval_frames: 0,
                ..RunnerConfig::default()
            },
            RunnerConfig {
                pair_probability: 1.5,
                ..RunnerConfig::default()
            },
            RunnerConfig {
                despawn_x: 1000.0,
                ..RunnerConfig::default()
            },
            RunnerConfig {
                obstacle_insets: Insets::uniform(60.0),
                ..RunnerConfig::default()
            },
        ];
        for config in bad {
            assert!(config.validate().is_err(), "{:?}", config);
        }
    }

    #[test]
    fn test_json_round_trip_of_insets() {
        let json = RunnerConfig::default().to_json();
        let parsed = RunnerConfig::from_json(&json).unwrap();
        assert_eq!(parsed.player_insets, RunnerConfig::default().player_insets);
    }
}
