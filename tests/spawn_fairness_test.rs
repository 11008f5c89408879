//! Integration test: obstacle spawning fairness
//!
//! Pairs must always be clearable with a single action, air obstacles only
//! appear where the revision allows them, and spacing respects the minimum
//! gap at every speed.

use bhaisaur::core::config::Revision;
use bhaisaur::runner::spawner::{min_gap, spawn_obstacles};
use bhaisaur::runner::{start, ObstacleKind, RunnerGame};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn playing(revision: Revision, speed: f64) -> RunnerGame {
    let mut game = RunnerGame::new(revision.config());
    start(&mut game);
    game.speed = speed;
    game
}

#[test]
fn test_pairs_always_share_a_kind() {
    let mut game = playing(Revision::Fair, 15.0);
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let mut pairs = 0;

    for _ in 0..2_000 {
        game.obstacles.clear();
        let record = spawn_obstacles(&mut game, &mut rng);

        if record.paired {
            pairs += 1;
            assert_eq!(game.obstacles.len(), 2);
            let (a, b) = (&game.obstacles[0], &game.obstacles[1]);
            assert_eq!(a.kind, b.kind);
            assert_eq!(a.vertical_offset, b.vertical_offset);
            assert_eq!(b.id, a.id + 1);
            assert!((b.x - a.x - game.config.pair_gap).abs() < 1e-9);
        } else {
            assert_eq!(game.obstacles.len(), 1);
        }
        assert_eq!(record.kind, game.obstacles[0].kind);
    }

    // 25% pair chance
    assert!((400..600).contains(&pairs), "pairs = {}", pairs);
}

#[test]
fn test_classic_never_spawns_air() {
    let mut game = playing(Revision::Classic, 14.0);
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    for _ in 0..2_000 {
        game.obstacles.clear();
        let record = spawn_obstacles(&mut game, &mut rng);
        assert_eq!(record.kind, ObstacleKind::Ground);
        assert!(game.obstacles.iter().all(|o| o.vertical_offset == 0.0));
    }
}

#[test]
fn test_no_air_at_or_below_speed_threshold() {
    let config = Revision::Aerial.config();
    let mut game = playing(Revision::Aerial, config.air_speed_threshold);
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    for _ in 0..2_000 {
        game.obstacles.clear();
        assert_eq!(spawn_obstacles(&mut game, &mut rng).kind, ObstacleKind::Ground);
    }
}

#[test]
fn test_fast_fair_runs_mix_both_kinds() {
    let mut game = playing(Revision::Fair, 12.0);
    let mut rng = ChaCha8Rng::seed_from_u64(77);
    let mut air = 0;

    for _ in 0..1_000 {
        game.obstacles.clear();
        if spawn_obstacles(&mut game, &mut rng).kind == ObstacleKind::Air {
            air += 1;
            assert!(
                (game.obstacles[0].vertical_offset - game.config.air_offset).abs() < 1e-9
            );
        }
    }

    assert!((400..600).contains(&air), "air = {}", air);
}

#[test]
fn test_countdown_respects_gap_bounds() {
    let mut rng = ChaCha8Rng::seed_from_u64(31);

    for speed in [5.0, 10.0, 20.0] {
        let mut game = playing(Revision::Fair, speed);
        let config = game.config.clone();

        for _ in 0..500 {
            game.obstacles.clear();
            let record = spawn_obstacles(&mut game, &mut rng);
            let next = game.frames_until_next_obstacle as f64;

            if record.paired {
                assert!(next >= config.pair_cooldown_min);
                assert!(next <= config.pair_cooldown_min + config.pair_cooldown_jitter);
            } else {
                let floor = min_gap(&game).floor();
                assert!(next >= floor, "speed {}: {} < {}", speed, next, floor);
                assert!(next <= min_gap(&game) + config.gap_jitter);
            }
        }
    }
}

#[test]
fn test_min_gap_shrinks_with_speed_down_to_floor() {
    let slow = playing(Revision::Fair, 5.0);
    let fast = playing(Revision::Fair, 20.0);
    let very_fast = playing(Revision::Fair, 100.0);

    assert!((min_gap(&slow) - 85.0).abs() < 1e-9);
    assert!((min_gap(&fast) - 55.0).abs() < 1e-9);
    assert!((min_gap(&very_fast) - very_fast.config.min_gap_floor).abs() < 1e-9);
}
