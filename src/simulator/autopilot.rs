//! A naive player: jump when a ground obstacle is about to reach the runner.

use crate::runner::collision::{obstacle_hitbox, player_hitbox};
use crate::runner::RunnerGame;

/// True if the autopilot wants to jump this frame.
///
/// Air obstacles are ignored (staying grounded clears them). A jump is
/// requested once the next ground obstacle is within `lead_frames` of
/// scrolling from the player's hitbox.
pub fn should_jump(game: &RunnerGame, lead_frames: f64) -> bool {
    if !game.is_playing() || !game.player.is_grounded() {
        return false;
    }

    let player_box = player_hitbox(&game.player, &game.config.player_insets);
    let reach = game.speed * lead_frames;

    game.obstacles
        .iter()
        .filter(|o| !o.kind.is_air())
        .any(|o| {
            let gap = obstacle_hitbox(o, &game.config.obstacle_insets).left - player_box.right();
            (0.0..=reach).contains(&gap)
        })
}
