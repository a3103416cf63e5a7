//! Opponent update: random-walk movement, turret easing, probabilistic
//! fire.
//!
//! Opponents block against terrain, the player, every other living
//! opponent, and live player projectiles — the last check is how they
//! dodge incoming fire. Player movement deliberately has no projectile
//! check.

use glam::Vec2;
use rand_chacha::ChaCha8Rng;

use bastion_core::constants::*;
use bastion_core::enums::ProjectileOwner;
use bastion_core::events::AudioEvent;
use bastion_core::types::ease_angle;
use bastion_terrain::collision;

use crate::world::{self, SimulationState};

pub fn run(state: &mut SimulationState, rng: &mut ChaCha8Rng, audio: &mut Vec<AudioEvent>) {
    for i in 0..state.opponents.len() {
        let mut o = state.opponents[i];
        if !o.alive {
            continue;
        }

        let steer = bastion_ai::tick_steering(o.dir, o.move_timer, rng);
        o.dir = steer.dir;
        o.move_timer = steer.move_timer;

        let delta = o.dir.unit() * o.speed;
        let next = {
            let grid = &state.grid;
            let player = state.player;
            let opponents = &state.opponents;
            let projectiles = &state.projectiles;
            let blocked = |pos: Vec2| {
                if collision::box_blocked(grid, pos, o.size) {
                    return true;
                }
                if player.alive
                    && collision::boxes_overlap(player.pos, player.size, pos, o.size)
                {
                    return true;
                }
                if opponents.iter().enumerate().any(|(j, other)| {
                    j != i
                        && other.alive
                        && collision::boxes_overlap(other.pos, other.size, pos, o.size)
                }) {
                    return true;
                }
                projectiles.iter().any(|b| {
                    b.alive
                        && b.owner == ProjectileOwner::Player
                        && collision::boxes_overlap(b.pos, b.size, pos, o.size)
                })
            };
            collision::resolve_move(o.pos, delta, blocked)
        };

        match next {
            Some(pos) => {
                o.pos = pos;
                o.track_phase = (o.track_phase + 1) % TRACK_PHASE_STEPS;
            }
            None => {
                // Boxed in: pick a new heading right away.
                let steer = bastion_ai::blocked_redirect(rng);
                o.dir = steer.dir;
                o.move_timer = steer.move_timer;
            }
        }

        o.turret_angle = ease_angle(o.turret_angle, o.dir.angle(), TURRET_TURN_RATE);

        let fire = bastion_ai::tick_fire(o.reload, rng);
        o.reload = fire.reload;
        state.opponents[i] = o;

        if fire.fire {
            let angle = o.dir.angle();
            world::spawn_projectile(
                state,
                audio,
                o.pos,
                angle,
                ProjectileOwner::Enemy,
                ENEMY_SHOT_SPEED,
                1,
            );
        }
    }
}
