//! Terminal rendering of the runner snapshot.
//!
//! The core never renders; these functions only read `RunnerGame`.

pub mod game_common;
pub mod runner_scene;
pub mod viewport;

use crate::core::event_log::EventLog;
use crate::runner::RunnerGame;
use ratatui::Frame;

/// Main UI drawing function.
pub fn draw_ui(frame: &mut Frame, game: &RunnerGame, log: &EventLog) {
    let size = frame.size();
    runner_scene::render_runner_scene(frame, size, game, log);
}
