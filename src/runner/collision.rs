//! Axis-aligned hitbox tests between the player and obstacles.
//!
//! Boxes live in logical units with y measured upward from the ground line.
//! Each sprite's visual bounds are shrunk by per-side insets so grazing a
//! corner does not end the run.

use super::types::{Obstacle, Player};
use crate::core::constants::{
    OBSTACLE_HEIGHT, OBSTACLE_WIDTH, PLAYER_HEIGHT, PLAYER_WIDTH, PLAYER_X,
};
use serde::{Deserialize, Serialize};

/// Per-side shrink applied to a sprite's visual bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Insets {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Insets {
    /// Same inset on all four sides.
    pub const fn uniform(amount: f64) -> Self {
        Self {
            left: amount,
            right: amount,
            top: amount,
            bottom: amount,
        }
    }

    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

/// Rectangle anchored at its bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub left: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

impl Hitbox {
    pub fn new(left: f64, bottom: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            bottom,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn top(&self) -> f64 {
        self.bottom + self.height
    }

    /// Shrink the box inward. Widths never go negative.
    pub fn inset(&self, insets: &Insets) -> Self {
        Self {
            left: self.left + insets.left,
            bottom: self.bottom + insets.bottom,
            width: (self.width - insets.horizontal()).max(0.0),
            height: (self.height - insets.vertical()).max(0.0),
        }
    }

    /// Strict overlap on both axes. Shared edges do not count.
    pub fn overlaps(&self, other: &Hitbox) -> bool {
        self.left < other.right()
            && self.right() > other.left
            && self.bottom < other.top()
            && self.top() > other.bottom
    }
}

/// Forgiving hitbox for the player at its current height.
pub fn player_hitbox(player: &Player, insets: &Insets) -> Hitbox {
    Hitbox::new(
        PLAYER_X,
        player.vertical_offset,
        PLAYER_WIDTH,
        PLAYER_HEIGHT,
    )
    .inset(insets)
}

/// Forgiving hitbox for an obstacle at its current position.
pub fn obstacle_hitbox(obstacle: &Obstacle, insets: &Insets) -> Hitbox {
    Hitbox::new(
        obstacle.x,
        obstacle.vertical_offset,
        OBSTACLE_WIDTH,
        OBSTACLE_HEIGHT,
    )
    .inset(insets)
}

/// Returns the first obstacle whose hitbox overlaps the player's, if any.
pub fn first_collision<'a>(
    player: &Player,
    obstacles: &'a [Obstacle],
    player_insets: &Insets,
    obstacle_insets: &Insets,
) -> Option<&'a Obstacle> {
    let player_box = player_hitbox(player, player_insets);
    obstacles
        .iter()
        .find(|obstacle| player_box.overlaps(&obstacle_hitbox(obstacle, obstacle_insets)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::types::ObstacleKind;

    fn player_insets() -> Insets {
        Insets {
            left: 22.0,
            right: 22.0,
            top: 22.0,
            bottom: 13.0,
        }
    }

    fn obstacle_at(x: f64, kind: ObstacleKind, vertical_offset: f64) -> Obstacle {
        Obstacle {
            id: 1,
            x,
            vertical_offset,
            kind,
        }
    }

    #[test]
    fn test_inset_shrinks_each_side() {
        let inner = Hitbox::new(80.0, 0.0, 80.0, 80.0).inset(&player_insets());
        assert!((inner.left - 102.0).abs() < 1e-9);
        assert!((inner.right() - 138.0).abs() < 1e-9);
        assert!((inner.bottom - 13.0).abs() < 1e-9);
        assert!((inner.top() - 58.0).abs() < 1e-9);
    }

    #[test]
    fn test_inset_never_negative() {
        let inner = Hitbox::new(0.0, 0.0, 10.0, 10.0).inset(&Insets::uniform(20.0));
        assert_eq!(inner.width, 0.0);
        assert_eq!(inner.height, 0.0);
    }

    #[test]
    fn test_overlap_cases() {
        let a = Hitbox::new(0.0, 0.0, 10.0, 10.0);

        // Overlapping
        assert!(a.overlaps(&Hitbox::new(5.0, 5.0, 10.0, 10.0)));
        // Touching on the right edge
        assert!(!a.overlaps(&Hitbox::new(10.0, 0.0, 10.0, 10.0)));
        // Touching on the top edge
        assert!(!a.overlaps(&Hitbox::new(0.0, 10.0, 10.0, 10.0)));
        // Disjoint horizontally
        assert!(!a.overlaps(&Hitbox::new(20.0, 0.0, 5.0, 5.0)));
        // Overlap on x only
        assert!(!a.overlaps(&Hitbox::new(5.0, 30.0, 10.0, 10.0)));
        // Overlap on y only
        assert!(!a.overlaps(&Hitbox::new(30.0, 5.0, 10.0, 10.0)));
        // Containment
        assert!(a.overlaps(&Hitbox::new(2.0, 2.0, 1.0, 1.0)));
    }

    #[test]
    fn test_ground_obstacle_touching_player_inset_does_not_collide() {
        // Player inset spans x 102..138; obstacle inset starts at x + 18.
        let player = Player::default();
        let touching = obstacle_at(120.0, ObstacleKind::Ground, 0.0);
        let obstacles = [touching];
        assert!(first_collision(
            &player,
            &obstacles,
            &player_insets(),
            &Insets::uniform(18.0)
        )
        .is_none());

        let overlapping = [obstacle_at(119.5, ObstacleKind::Ground, 0.0)];
        assert!(first_collision(
            &player,
            &overlapping,
            &player_insets(),
            &Insets::uniform(18.0)
        )
        .is_some());
    }

    #[test]
    fn test_air_obstacle_misses_grounded_player() {
        let player = Player::default();
        let obstacles = [obstacle_at(80.0, ObstacleKind::Air, 145.0)];
        assert!(first_collision(
            &player,
            &obstacles,
            &player_insets(),
            &Insets::uniform(18.0)
        )
        .is_none());
    }

    #[test]
    fn test_air_obstacle_hits_jumping_player() {
        let player = Player {
            vertical_offset: 150.0,
            vertical_velocity: -2.0,
            is_jumping: true,
        };
        let obstacles = [obstacle_at(80.0, ObstacleKind::Air, 145.0)];
        assert!(first_collision(
            &player,
            &obstacles,
            &player_insets(),
            &Insets::uniform(18.0)
        )
        .is_some());
    }

    #[test]
    fn test_first_collision_returns_earliest_spawned() {
        let player = Player::default();
        let mut first = obstacle_at(80.0, ObstacleKind::Ground, 0.0);
        first.id = 7;
        let mut second = obstacle_at(90.0, ObstacleKind::Ground, 0.0);
        second.id = 8;
        let obstacles = [first, second];

        let hit = first_collision(&player, &obstacles, &player_insets(), &Insets::uniform(18.0));
        assert_eq!(hit.map(|o| o.id), Some(7));
    }
}
