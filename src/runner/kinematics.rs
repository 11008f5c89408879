//! Vertical motion of the runner: gravity, jump impulse, ground clamp.

use super::types::Player;

/// Apply one frame of gravity and move the player.
///
/// Offset grows upward while velocity is negative. Landing (or already
/// standing) snaps the player to exactly zero and clears the jump.
pub fn apply_gravity(player: &mut Player, gravity: f64) {
    player.vertical_velocity += gravity;
    player.vertical_offset -= player.vertical_velocity;

    if player.vertical_offset <= 0.0 {
        player.vertical_offset = 0.0;
        player.vertical_velocity = 0.0;
        player.is_jumping = false;
    }
}

/// Launch the player. Returns false (and changes nothing) unless grounded
/// and not already mid-jump.
pub fn try_jump(player: &mut Player, jump_velocity: f64) -> bool {
    if player.is_jumping || !player.is_grounded() {
        return false;
    }
    player.is_jumping = true;
    player.vertical_velocity = jump_velocity;
    true
}
