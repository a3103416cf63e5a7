//! Projectile update: flight, tile interaction, vehicle interaction,
//! power-up drops.
//!
//! Tile checks run before entity checks; a projectile consumed by
//! terrain never reaches a vehicle behind it.

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use bastion_core::constants::*;
use bastion_core::entities::{Effect, PowerUp};
use bastion_core::enums::{PowerUpKind, ProjectileOwner, Tile};
use bastion_core::events::AudioEvent;
use bastion_core::types::{tile_center, tile_of};

use crate::systems::player;
use crate::world::SimulationState;

pub fn run(state: &mut SimulationState, rng: &mut ChaCha8Rng, audio: &mut Vec<AudioEvent>) {
    for i in 0..state.projectiles.len() {
        let mut b = state.projectiles[i];
        if !b.alive {
            continue;
        }

        b.pos += Vec2::new(b.angle.cos(), b.angle.sin()) * b.speed;
        b.range -= b.speed;
        if b.range <= 0.0 {
            b.alive = false;
            state.projectiles[i] = b;
            continue;
        }

        let (tx, ty) = tile_of(b.pos);
        let tile = match state.grid.tile_at(tx, ty) {
            Some(tile) => tile,
            None => {
                // Left the arena.
                b.alive = false;
                state.projectiles[i] = b;
                continue;
            }
        };

        match tile {
            Tile::Steel => {
                b.alive = false;
            }
            Tile::Brick => {
                let cell = (tx as usize, ty as usize);
                if state.grid.destroy_brick(cell.0, cell.1) {
                    state
                        .effects
                        .push(Effect::explosion(tile_center(cell), EXPLOSION_BRICK_FRAMES));
                    audio.push(AudioEvent::BrickDestroyed);
                }
                b.alive = false;
            }
            Tile::Base => {
                if state.base.shielded {
                    state.effects.push(Effect::explosion(
                        tile_center(state.base_tile),
                        EXPLOSION_DEFLECT_FRAMES,
                    ));
                    audio.push(AudioEvent::ShieldDeflection);
                } else {
                    // Terminal; the end-of-step check ends the match.
                    state.base.destroyed = true;
                }
                b.alive = false;
            }
            Tile::Empty | Tile::Water | Tile::Grass => {}
        }
        if !b.alive {
            state.projectiles[i] = b;
            continue;
        }

        match b.owner {
            ProjectileOwner::Player => {
                for j in 0..state.opponents.len() {
                    let o = state.opponents[j];
                    if o.alive && b.pos.distance(o.pos) < o.size {
                        state.opponents[j].alive = false;
                        b.alive = false;
                        state
                            .effects
                            .push(Effect::explosion(o.pos, EXPLOSION_VEHICLE_FRAMES));
                        audio.push(AudioEvent::OpponentDestroyed);
                        if rng.gen_bool(STAR_DROP_CHANCE) {
                            state.powerups.push(PowerUp::new(PowerUpKind::Star, o.pos));
                        }
                        if rng.gen_bool(SHIELD_DROP_CHANCE) {
                            state.powerups.push(PowerUp::new(PowerUpKind::Shield, o.pos));
                        }
                        break;
                    }
                }
            }
            ProjectileOwner::Enemy => {
                let p = state.player;
                // An invulnerable or downed player is not a target; the
                // round flies on.
                if p.alive && p.invuln == 0 && b.pos.distance(p.pos) < p.size {
                    player::apply_hit(&mut state.player, &mut state.effects, audio);
                    b.alive = false;
                }
            }
        }

        state.projectiles[i] = b;
    }
}
