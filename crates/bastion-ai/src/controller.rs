//! Random-walk steering and fire decisions.
//!
//! Each opponent is stateless between frames beyond two countdowns: a
//! movement-direction timer and a fire-reload timer. The functions here
//! tick those countdowns and roll the dice when they expire.

use rand::Rng;

use bastion_core::constants::*;
use bastion_core::enums::Direction;

/// One frame of steering for an opponent.
#[derive(Debug, Clone, Copy)]
pub struct SteerDecision {
    pub dir: Direction,
    pub move_timer: i32,
    /// Whether a new direction was just selected.
    pub redirected: bool,
}

/// One frame of the fire-reload countdown.
#[derive(Debug, Clone, Copy)]
pub struct FireDecision {
    /// Fire this frame. The reload re-arms whether or not this is set.
    pub fire: bool,
    pub reload: i32,
}

/// Tick the movement countdown; on expiry, reselect a uniformly random
/// direction and a fresh countdown.
pub fn tick_steering<R: Rng>(dir: Direction, move_timer: i32, rng: &mut R) -> SteerDecision {
    let move_timer = move_timer - 1;
    if move_timer <= 0 {
        SteerDecision {
            dir: random_direction(rng),
            move_timer: rng.gen_range(OPPONENT_STEER_MIN..=OPPONENT_STEER_MAX),
            redirected: true,
        }
    } else {
        SteerDecision {
            dir,
            move_timer,
            redirected: false,
        }
    }
}

/// Immediate redirect after a fully blocked move, short-circuiting the
/// running countdown.
pub fn blocked_redirect<R: Rng>(rng: &mut R) -> SteerDecision {
    SteerDecision {
        dir: random_direction(rng),
        move_timer: rng.gen_range(OPPONENT_BLOCKED_STEER_MIN..=OPPONENT_BLOCKED_STEER_MAX),
        redirected: true,
    }
}

/// Tick the fire countdown; on expiry, roll the fire chance and re-arm
/// to a new randomized duration regardless of the roll.
pub fn tick_fire<R: Rng>(reload: i32, rng: &mut R) -> FireDecision {
    let reload = reload - 1;
    if reload <= 0 {
        FireDecision {
            fire: rng.gen_bool(ENEMY_FIRE_CHANCE),
            reload: rng.gen_range(OPPONENT_RELOAD_MIN..=OPPONENT_RELOAD_MAX),
        }
    } else {
        FireDecision {
            fire: false,
            reload,
        }
    }
}

/// Uniformly random cardinal direction.
pub fn random_direction<R: Rng>(rng: &mut R) -> Direction {
    Direction::from_index(rng.gen_range(0..Direction::ALL.len()))
}

/// Initial movement countdown for a freshly spawned opponent.
pub fn spawn_move_timer<R: Rng>(rng: &mut R) -> i32 {
    rng.gen_range(OPPONENT_SPAWN_STEER_MIN..=OPPONENT_SPAWN_STEER_MAX)
}

/// Initial fire-reload countdown for a freshly spawned opponent.
pub fn spawn_reload<R: Rng>(rng: &mut R) -> i32 {
    rng.gen_range(OPPONENT_RELOAD_MIN..=OPPONENT_RELOAD_MAX)
}
