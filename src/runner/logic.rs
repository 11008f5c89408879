//! Runner game logic: state machine, per-frame step, input processing.

use super::collision::first_collision;
use super::kinematics::{apply_gravity, try_jump};
use super::spawner::tick_spawner;
use super::types::*;
use crate::core::constants::{FRAME_INTERVAL_MS, MAX_FRAME_DELTA_MS};
use rand::Rng;

/// UI-agnostic input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerInput {
    /// Space / Up / tap: start, jump, or retry depending on state.
    Action,
    /// Any other key.
    Other,
}

/// Something that happened during a step or in response to input.
///
/// The presentation layer maps these to log lines, sounds, and overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerEvent {
    Started {
        attempt: u32,
    },
    /// Fire-and-forget cue for the jump sound.
    Jumped,
    Spawned {
        first_id: u64,
        kind: ObstacleKind,
        paired: bool,
    },
    /// The run ended (collision or stop). Cue for the reaction clip.
    Died {
        score: u32,
        high_score: u32,
        new_high_score: bool,
    },
    /// The post-death cooldown elapsed; retry is now accepted.
    RetryReady,
}

/// Result of advancing the simulation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    /// Frames simulated.
    pub frames: u32,
    pub events: Vec<RunnerEvent>,
}

impl StepReport {
    pub fn died(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, RunnerEvent::Died { .. }))
    }

    fn absorb(&mut self, other: StepReport) {
        self.frames += other.frames;
        self.events.extend(other.events);
    }
}

/// Begin a new run from `Idle` or `Dead`. No-op while already playing.
///
/// Callers gate retries on [`RunnerGame::can_retry`]; this function does not.
pub fn start(game: &mut RunnerGame) -> Option<RunnerEvent> {
    if game.is_playing() {
        return None;
    }
    game.reset_session();
    game.attempts += 1;
    game.state = RunState::Playing;
    Some(RunnerEvent::Started {
        attempt: game.attempts,
    })
}

/// Jump if playing and grounded. Repeated calls mid-air change nothing.
pub fn jump(game: &mut RunnerGame) -> Option<RunnerEvent> {
    if !game.is_playing() {
        return None;
    }
    if try_jump(&mut game.player, game.config.jump_velocity) {
        Some(RunnerEvent::Jumped)
    } else {
        None
    }
}

/// Process player input.
pub fn process_input(game: &mut RunnerGame, input: RunnerInput) -> Option<RunnerEvent> {
    if input != RunnerInput::Action {
        return None;
    }
    match game.state {
        RunState::Idle => start(game),
        RunState::Playing => jump(game),
        RunState::Dead if game.can_retry() => start(game),
        // Still cooling down: swallow the press so a held key can't retry instantly
        RunState::Dead => None,
    }
}

/// Advance exactly one frame. Does nothing unless playing.
///
/// Frame order: clock, kinematics, speed ramp, scroll and despawn, spawn,
/// score, collision.
pub fn step<R: Rng>(game: &mut RunnerGame, rng: &mut R) -> StepReport {
    let mut report = StepReport::default();
    if !game.is_playing() {
        return report;
    }
    report.frames = 1;

    // 1. Clock
    game.frame += 1;

    // 2. Player
    apply_gravity(&mut game.player, game.config.gravity);

    // 3. Speed ramp
    if game.speed < game.config.max_speed {
        game.speed = (game.speed + game.config.speed_increment).min(game.config.max_speed);
    }

    // 4. Scroll obstacles and drop the ones past the left edge
    let speed = game.speed;
    for obstacle in &mut game.obstacles {
        obstacle.x -= speed;
    }
    let despawn_x = game.config.despawn_x;
    game.obstacles.retain(|o| o.x > despawn_x);

    // 5. Spawn
    if let Some(record) = tick_spawner(game, rng) {
        report.events.push(RunnerEvent::Spawned {
            first_id: record.first_id,
            kind: record.kind,
            paired: record.paired,
        });
    }

    // 6. Score
    if game.frame % game.config.score_interval_frames == 0 {
        game.score += 1;
    }

    // 7. Collision
    let hit = first_collision(
        &game.player,
        &game.obstacles,
        &game.config.player_insets,
        &game.config.obstacle_insets,
    )
    .is_some();
    if hit {
        report.events.extend(die(game));
    }

    report
}

/// End the current run on an external request (quit, frame cap).
///
/// Behaves like a collision: the score counts toward the high score and the
/// retry cooldown is armed. No-op unless playing.
pub fn stop(game: &mut RunnerGame) -> Vec<RunnerEvent> {
    if !game.is_playing() {
        return Vec::new();
    }
    die(game)
}

/// Freeze the run, record the high score, and arm the retry cooldown.
fn die(game: &mut RunnerGame) -> Vec<RunnerEvent> {
    game.state = RunState::Dead;
    game.accumulated_time_ms = 0;

    let new_high_score = game.score > game.high_score;
    game.high_score = game.high_score.max(game.score);
    game.retry_cooldown_remaining_ms = game.config.retry_cooldown_ms;
    game.retry_announced = false;

    let mut events = vec![RunnerEvent::Died {
        score: game.score,
        high_score: game.high_score,
        new_high_score,
    }];
    if game.retry_cooldown_remaining_ms == 0 {
        game.retry_announced = true;
        events.push(RunnerEvent::RetryReady);
    }
    events
}

/// Let `dt_ms` of wall time pass on the retry cooldown.
///
/// Reports [`RunnerEvent::RetryReady`] once, on the call where it elapses.
pub fn advance_cooldown(game: &mut RunnerGame, dt_ms: u64) -> Option<RunnerEvent> {
    if game.state != RunState::Dead || game.retry_announced {
        return None;
    }
    game.retry_cooldown_remaining_ms = game.retry_cooldown_remaining_ms.saturating_sub(dt_ms);
    if game.retry_cooldown_remaining_ms == 0 {
        game.retry_announced = true;
        Some(RunnerEvent::RetryReady)
    } else {
        None
    }
}

/// Advance the game by wall-clock time. Called from the host loop.
///
/// `dt_ms` is milliseconds since the last call. Playing sessions step in
/// fixed 16ms frames; a dead session only runs its retry cooldown.
pub fn tick_runner<R: Rng>(game: &mut RunnerGame, dt_ms: u64, rng: &mut R) -> StepReport {
    let mut report = StepReport::default();

    // Clamp dt to prevent a burst of frames after pause/lag
    let dt_ms = dt_ms.min(MAX_FRAME_DELTA_MS);

    match game.state {
        RunState::Idle => {}
        RunState::Dead => {
            if let Some(event) = advance_cooldown(game, dt_ms) {
                report.events.push(event);
            }
        }
        RunState::Playing => {
            game.accumulated_time_ms += dt_ms;
            while game.accumulated_time_ms >= FRAME_INTERVAL_MS {
                game.accumulated_time_ms -= FRAME_INTERVAL_MS;
                report.absorb(step(game, rng));

                if !game.is_playing() {
                    break;
                }
            }
        }
    }

    report
}
