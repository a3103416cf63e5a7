//! Tests for core vocabulary types: serde round-trips, geometry
//! helpers, and input priority.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec2;

use crate::commands::{InputState, PlayerCommand};
use crate::constants::*;
use crate::entities::{BaseState, Player, PowerUp};
use crate::enums::*;
use crate::events::AudioEvent;
use crate::state::GameStateSnapshot;
use crate::types::{ease_angle, tile_center, tile_of, SimTime};

#[test]
fn test_tile_serde_roundtrip() {
    let variants = [
        Tile::Empty,
        Tile::Steel,
        Tile::Brick,
        Tile::Water,
        Tile::Grass,
        Tile::Base,
    ];
    for v in variants {
        let json = serde_json::to_string(&v).unwrap();
        let back: Tile = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}

#[test]
fn test_blocking_set() {
    assert!(Tile::Steel.blocks());
    assert!(Tile::Brick.blocks());
    assert!(Tile::Water.blocks());
    assert!(Tile::Base.blocks());
    assert!(!Tile::Empty.blocks());
    assert!(!Tile::Grass.blocks());
}

#[test]
fn test_direction_angles() {
    assert!((Direction::Up.angle() - (-FRAC_PI_2)).abs() < 1e-6);
    assert!((Direction::Right.angle() - 0.0).abs() < 1e-6);
    assert!((Direction::Down.angle() - FRAC_PI_2).abs() < 1e-6);
    assert!((Direction::Left.angle() - PI).abs() < 1e-6);
}

#[test]
fn test_direction_units_match_angles() {
    for dir in Direction::ALL {
        let unit = dir.unit();
        let from_angle = Vec2::new(dir.angle().cos(), dir.angle().sin());
        assert!(
            (unit - from_angle).length() < 1e-6,
            "{dir:?} unit vector diverges from its angle"
        );
    }
}

#[test]
fn test_direction_from_index_wraps() {
    assert_eq!(Direction::from_index(0), Direction::Up);
    assert_eq!(Direction::from_index(3), Direction::Left);
    assert_eq!(Direction::from_index(5), Direction::Right);
}

#[test]
fn test_input_priority_order() {
    let all = InputState {
        up: true,
        down: true,
        left: true,
        right: true,
        fire: false,
    };
    assert_eq!(all.held_direction(), Some(Direction::Up));

    let no_up = InputState {
        up: false,
        ..all
    };
    assert_eq!(no_up.held_direction(), Some(Direction::Down));

    let lr = InputState {
        up: false,
        down: false,
        ..all
    };
    assert_eq!(lr.held_direction(), Some(Direction::Left));

    assert_eq!(InputState::default().held_direction(), None);
}

#[test]
fn test_ease_angle_converges_without_snapping() {
    let target = Direction::Right.angle();
    let mut angle = Direction::Up.angle();
    let first = ease_angle(angle, target, TURRET_TURN_RATE);
    // One step covers only part of the gap.
    assert!((first - target).abs() > 1e-3);
    for _ in 0..50 {
        angle = ease_angle(angle, target, TURRET_TURN_RATE);
    }
    assert!((angle - target).abs() < 1e-3);
}

#[test]
fn test_ease_angle_takes_shortest_arc() {
    // From Left (PI) toward Up (-PI/2) the short way is +PI/2, not -3PI/2.
    let step = ease_angle(PI, -FRAC_PI_2, 0.5);
    assert!(step > PI, "should rotate forward through PI, got {step}");
}

#[test]
fn test_tile_center_and_tile_of_are_inverse() {
    let center = tile_center((3, 7));
    assert_eq!(tile_of(center), (3, 7));
    assert_eq!(tile_of(Vec2::new(-1.0, 5.0)), (-1, 0));
}

#[test]
fn test_sim_time_advance() {
    let mut time = SimTime::default();
    for _ in 0..TICK_RATE {
        time.advance();
    }
    assert_eq!(time.tick, TICK_RATE as u64);
    assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
}

#[test]
fn test_player_at_spawn_defaults() {
    let player = Player::at_spawn(PLAYER_SPAWN_TILE);
    assert_eq!(player.lives, PLAYER_LIVES);
    assert_eq!(player.level, 1);
    assert!((player.fuel - MAX_FUEL).abs() < f32::EPSILON);
    assert!(player.alive);
    assert_eq!(player.pos, player.spawn_pos());
}

#[test]
fn test_powerup_lifetimes_by_kind() {
    let star = PowerUp::new(PowerUpKind::Star, Vec2::ZERO);
    let shield = PowerUp::new(PowerUpKind::Shield, Vec2::ZERO);
    assert_eq!(star.timer, STAR_LIFETIME);
    assert_eq!(shield.timer, SHIELD_LIFETIME);
}

#[test]
fn test_shield_rearm_resets_timer() {
    let mut base = BaseState::default();
    base.arm_shield();
    base.timer = 5;
    base.arm_shield();
    assert!(base.shielded);
    assert_eq!(base.timer, SHIELD_DURATION, "re-arming must reset, not stack");
}

#[test]
fn test_player_command_serde() {
    let commands = [
        PlayerCommand::NewGame,
        PlayerCommand::Pause,
        PlayerCommand::Resume,
    ];
    for cmd in &commands {
        let json = serde_json::to_string(cmd).unwrap();
        let back: PlayerCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(json, serde_json::to_string(&back).unwrap());
    }
}

#[test]
fn test_audio_event_serde() {
    let events = [
        AudioEvent::ShotFired {
            owner: ProjectileOwner::Player,
        },
        AudioEvent::BrickDestroyed,
        AudioEvent::PowerUpCollected {
            kind: PowerUpKind::Shield,
        },
        AudioEvent::LevelAdvanced { level: 3 },
    ];
    for event in &events {
        let json = serde_json::to_string(event).unwrap();
        let _back: AudioEvent = serde_json::from_str(&json).unwrap();
    }
}

#[test]
fn test_game_phase_serde() {
    let phases = [
        GamePhase::Menu,
        GamePhase::Active,
        GamePhase::Paused,
        GamePhase::GameOver(GameOverReason::BaseDestroyed),
        GamePhase::GameOver(GameOverReason::FuelExhausted),
    ];
    for phase in phases {
        let json = serde_json::to_string(&phase).unwrap();
        let back: GamePhase = serde_json::from_str(&json).unwrap();
        assert_eq!(phase, back);
    }
}

#[test]
fn test_snapshot_serde() {
    let snapshot = GameStateSnapshot::default();
    let json = serde_json::to_string(&snapshot).unwrap();
    let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(snapshot.time.tick, back.time.tick);
    assert_eq!(snapshot.phase, back.phase);
    assert!(
        json.len() < 1024,
        "empty snapshot should be <1KB, was {} bytes",
        json.len()
    );
}
