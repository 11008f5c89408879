//! Runner data structures.
//!
//! A Chrome dinosaur-style endless runner: the player jumps incoming
//! obstacles while the score ticks up with time. All state for one player
//! lives in [`RunnerGame`]; there is no process-wide state.

use crate::core::config::RunnerConfig;

/// Session phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Waiting for the first action. Never re-entered after leaving.
    Idle,
    Playing,
    /// Frozen after a collision until the player retries.
    Dead,
}

/// Obstacle variety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    /// Sits on the ground; jump over it.
    Ground,
    /// Hangs at head height above a grounded player; stay low.
    Air,
}

impl ObstacleKind {
    pub fn is_air(&self) -> bool {
        matches!(self, Self::Air)
    }
}

/// The runner's vertical state. Horizontal position is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Player {
    /// Height of the player's feet above the ground line. Never negative.
    pub vertical_offset: f64,
    /// Units per frame, negative = moving up.
    pub vertical_velocity: f64,
    pub is_jumping: bool,
}

impl Player {
    pub fn is_grounded(&self) -> bool {
        self.vertical_offset <= 0.0
    }
}

/// A single obstacle in the world.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Unique, increasing in spawn order.
    pub id: u64,
    /// Left edge in logical units.
    pub x: f64,
    /// Height of the obstacle's bottom edge above the ground line.
    pub vertical_offset: f64,
    pub kind: ObstacleKind,
}

/// One player's game session, including the high score across retries.
#[derive(Debug, Clone)]
pub struct RunnerGame {
    pub config: RunnerConfig,
    pub state: RunState,

    // -- Runner --
    pub player: Player,

    // -- Obstacles (spawn order) --
    pub obstacles: Vec<Obstacle>,
    /// Frames left before the spawner fires.
    pub frames_until_next_obstacle: u32,
    /// Id handed to the next spawned obstacle. Not reset between sessions.
    pub next_obstacle_id: u64,

    // -- Scoring --
    pub score: u32,
    pub high_score: u32,
    /// Sessions started so far, including the current one.
    pub attempts: u32,
    /// Scroll speed in units/frame.
    pub speed: f64,

    // -- Timing --
    /// Frames stepped since the current session started.
    pub frame: u64,
    /// Sub-frame wall time accumulator (milliseconds).
    pub accumulated_time_ms: u64,
    /// Time left before a retry is accepted. Only meaningful while `Dead`.
    pub retry_cooldown_remaining_ms: u64,
    /// Set once the cooldown has been reported as elapsed.
    pub retry_announced: bool,
}

impl RunnerGame {
    /// Fresh idle session. `config` must pass `RunnerConfig::validate`;
    /// stepping with, say, a zero score interval would divide by zero.
    pub fn new(config: RunnerConfig) -> Self {
        debug_assert!(
            config.validate().is_ok(),
            "RunnerGame needs a validated config: {:?}",
            config.validate()
        );
        let speed = config.initial_speed;
        let first_obstacle = config.first_obstacle_frames;
        Self {
            config,
            state: RunState::Idle,

            player: Player::default(),

            obstacles: Vec::new(),
            frames_until_next_obstacle: first_obstacle,
            next_obstacle_id: 0,

            score: 0,
            high_score: 0,
            attempts: 0,
            speed,

            frame: 0,
            accumulated_time_ms: 0,
            retry_cooldown_remaining_ms: 0,
            retry_announced: false,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.state == RunState::Playing
    }

    /// Retry is accepted only once the post-death cooldown has fully elapsed.
    pub fn can_retry(&self) -> bool {
        self.state == RunState::Dead && self.retry_cooldown_remaining_ms == 0
    }

    /// Reset per-session state. High score and the obstacle id counter survive.
    pub(crate) fn reset_session(&mut self) {
        self.player = Player::default();
        self.obstacles.clear();
        self.frames_until_next_obstacle = self.config.first_obstacle_frames;
        self.score = 0;
        self.speed = self.config.initial_speed;
        self.frame = 0;
        self.accumulated_time_ms = 0;
        self.retry_cooldown_remaining_ms = 0;
        self.retry_announced = false;
    }

    pub(crate) fn allocate_obstacle_id(&mut self) -> u64 {
        let id = self.next_obstacle_id;
        self.next_obstacle_id += 1;
        id
    }
}

impl Default for RunnerGame {
    fn default() -> Self {
        Self::new(RunnerConfig::default())
    }
}
