// Frame timing
pub const FRAME_INTERVAL_MS: u64 = 16; // ~60 FPS
pub const MAX_FRAME_DELTA_MS: u64 = 100; // clamp after pause/lag
pub const INPUT_POLL_MS: u64 = 8;

// Logical playfield (units, y measured upward from the ground line)
pub const GAME_WIDTH: f64 = 800.0;
pub const GAME_HEIGHT: f64 = 500.0;
pub const GROUND_HEIGHT: f64 = 60.0;

// Sprites
pub const PLAYER_X: f64 = 80.0;
pub const PLAYER_WIDTH: f64 = 80.0;
pub const PLAYER_HEIGHT: f64 = 80.0;
pub const OBSTACLE_WIDTH: f64 = 100.0;
pub const OBSTACLE_HEIGHT: f64 = 100.0;

// Event log
pub const EVENT_LOG_CAPACITY: usize = 10;

// Display padding for high score and score counters ("HI 00042")
pub const SCORE_DIGITS: usize = 5;
