//! Obstacle spawning: a frame countdown that drops obstacles at the right
//! edge, sometimes in same-kind pairs, with spacing that tightens as the
//! scroll speed climbs.

use super::types::{Obstacle, ObstacleKind, RunnerGame};
use rand::Rng;

/// What the spawner produced on a frame where it fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnRecord {
    pub first_id: u64,
    pub kind: ObstacleKind,
    pub paired: bool,
}

/// Count down one frame and spawn if the timer runs out.
pub fn tick_spawner<R: Rng>(game: &mut RunnerGame, rng: &mut R) -> Option<SpawnRecord> {
    game.frames_until_next_obstacle = game.frames_until_next_obstacle.saturating_sub(1);
    if game.frames_until_next_obstacle > 0 {
        return None;
    }
    Some(spawn_obstacles(game, rng))
}

/// Spawn one obstacle (or a pair) and reseed the countdown.
pub fn spawn_obstacles<R: Rng>(game: &mut RunnerGame, rng: &mut R) -> SpawnRecord {
    let kind = choose_kind(game, rng);
    let vertical_offset = match kind {
        ObstacleKind::Ground => 0.0,
        ObstacleKind::Air => game.config.air_offset,
    };
    let spawn_x = game.config.spawn_x;

    let first_id = game.allocate_obstacle_id();
    game.obstacles.push(Obstacle {
        id: first_id,
        x: spawn_x,
        vertical_offset,
        kind,
    });

    // The partner always copies the first obstacle's kind so a pair can be
    // cleared with one jump (or by staying low).
    let paired = rng.gen::<f64>() > 1.0 - game.config.pair_probability;
    let next = if paired {
        let id = game.allocate_obstacle_id();
        game.obstacles.push(Obstacle {
            id,
            x: spawn_x + game.config.pair_gap,
            vertical_offset,
            kind,
        });
        rng.gen::<f64>() * game.config.pair_cooldown_jitter + game.config.pair_cooldown_min
    } else {
        rng.gen::<f64>() * game.config.gap_jitter + min_gap(game)
    };
    game.frames_until_next_obstacle = (next.floor() as u32).max(1);

    SpawnRecord {
        first_id,
        kind,
        paired,
    }
}

/// Shortest spacing (frames) for a single spawn at the current speed.
pub fn min_gap(game: &RunnerGame) -> f64 {
    let config = &game.config;
    (config.min_gap_base - game.speed * config.min_gap_speed_factor).max(config.min_gap_floor)
}

fn choose_kind<R: Rng>(game: &RunnerGame, rng: &mut R) -> ObstacleKind {
    let config = &game.config;
    if config.air_obstacles
        && game.speed > config.air_speed_threshold
        && rng.gen::<f64>() > 1.0 - config.air_probability
    {
        ObstacleKind::Air
    } else {
        ObstacleKind::Ground
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{Revision, RunnerConfig};
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// Every draw returns 0.0: ground, unpaired, shortest gap.
    fn low_rng() -> StepRng {
        StepRng::new(0, 0)
    }

    /// Every draw returns just under 1.0: air when allowed, paired, longest gap.
    fn high_rng() -> StepRng {
        StepRng::new(u64::MAX, 0)
    }

    #[test]
    fn test_countdown_fires_at_zero() {
        let mut game = RunnerGame::default();
        game.frames_until_next_obstacle = 3;
        let mut rng = low_rng();

        assert!(tick_spawner(&mut game, &mut rng).is_none());
        assert!(tick_spawner(&mut game, &mut rng).is_none());
        assert!(tick_spawner(&mut game, &mut rng).is_some());
        assert_eq!(game.obstacles.len(), 1);
    }

    #[test]
    fn test_single_ground_spawn_uses_min_gap() {
        let mut game = RunnerGame::default();
        let mut rng = low_rng();

        let record = spawn_obstacles(&mut game, &mut rng);

        assert_eq!(record.kind, ObstacleKind::Ground);
        assert!(!record.paired);
        assert_eq!(game.obstacles.len(), 1);
        let obstacle = &game.obstacles[0];
        assert!((obstacle.x - game.config.spawn_x).abs() < f64::EPSILON);
        assert_eq!(obstacle.vertical_offset, 0.0);
        // speed 5: max(35, 95 - 10) = 85
        assert_eq!(game.frames_until_next_obstacle, 85);
    }

    #[test]
    fn test_paired_air_spawn() {
        let mut game = RunnerGame::default();
        let mut rng = high_rng();

        let record = spawn_obstacles(&mut game, &mut rng);

        assert_eq!(record.kind, ObstacleKind::Air);
        assert!(record.paired);
        assert_eq!(game.obstacles.len(), 2);
        let (a, b) = (&game.obstacles[0], &game.obstacles[1]);
        assert_eq!(a.kind, b.kind);
        assert!((b.x - a.x - game.config.pair_gap).abs() < f64::EPSILON);
        assert!((a.vertical_offset - game.config.air_offset).abs() < f64::EPSILON);
        assert!(a.id < b.id);
        // (1 - 2^-53) * 40 + 90 rounds to exactly 130.0 in f64
        assert_eq!(game.frames_until_next_obstacle, 130);
    }

    #[test]
    fn test_ground_only_revision_never_spawns_air() {
        let mut game = RunnerGame::new(Revision::Classic.config());
        game.speed = game.config.max_speed;
        let mut rng = high_rng();

        for _ in 0..20 {
            spawn_obstacles(&mut game, &mut rng);
        }
        assert!(game.obstacles.iter().all(|o| o.kind == ObstacleKind::Ground));
    }

    #[test]
    fn test_air_locked_below_speed_threshold() {
        let config = RunnerConfig {
            air_speed_threshold: 10.0,
            ..RunnerConfig::default()
        };
        let mut game = RunnerGame::new(config);
        let mut rng = high_rng();

        let record = spawn_obstacles(&mut game, &mut rng);
        assert_eq!(record.kind, ObstacleKind::Ground);

        game.speed = 10.5;
        let record = spawn_obstacles(&mut game, &mut rng);
        assert_eq!(record.kind, ObstacleKind::Air);
    }

    #[test]
    fn test_min_gap_shrinks_with_speed_and_is_floored() {
        let mut game = RunnerGame::default();
        game.speed = 5.0;
        assert!((min_gap(&game) - 85.0).abs() < 1e-9);
        game.speed = 20.0;
        assert!((min_gap(&game) - 55.0).abs() < 1e-9);

        game.config.min_gap_speed_factor = 10.0;
        assert!((min_gap(&game) - game.config.min_gap_floor).abs() < 1e-9);
    }

    #[test]
    fn test_pairs_always_share_kind_seeded() {
        let mut game = RunnerGame::default();
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..500 {
            let before = game.obstacles.len();
            let record = spawn_obstacles(&mut game, &mut rng);
            let spawned = &game.obstacles[before..];
            assert_eq!(spawned.len(), if record.paired { 2 } else { 1 });
            assert!(spawned.iter().all(|o| o.kind == record.kind));
            assert!(game.frames_until_next_obstacle >= 1);
        }
    }

    #[test]
    fn test_reseed_within_bounds_seeded() {
        let mut game = RunnerGame::default();
        let mut rng = ChaCha8Rng::seed_from_u64(99);

        for _ in 0..200 {
            let record = spawn_obstacles(&mut game, &mut rng);
            let next = game.frames_until_next_obstacle;
            if record.paired {
                assert!((90..=130).contains(&next), "pair gap {}", next);
            } else {
                assert!((85..=135).contains(&next), "single gap {}", next);
            }
        }
    }
}
