//! Player update: movement, fuel, turret easing, firing, respawn.

use glam::Vec2;

use bastion_core::commands::InputState;
use bastion_core::constants::*;
use bastion_core::entities::{Effect, Player};
use bastion_core::enums::ProjectileOwner;
use bastion_core::events::AudioEvent;
use bastion_core::types::ease_angle;
use bastion_terrain::collision;

use crate::world::{self, SimulationState};

/// Advance the player by one frame.
///
/// `fire_edge` is the engine-derived rising edge of the fire button;
/// holding it does not auto-repeat.
pub fn run(
    state: &mut SimulationState,
    input: &InputState,
    fire_edge: bool,
    audio: &mut Vec<AudioEvent>,
) {
    let mut p = state.player;

    if !p.alive {
        // Only the respawn countdown runs while the wreck sits there.
        if p.respawn_timer > 0 {
            p.respawn_timer -= 1;
            if p.respawn_timer == 0 {
                p.pos = p.spawn_pos();
                p.alive = true;
                p.invuln = PLAYER_RESPAWN_INVULN;
            }
        }
        state.player = p;
        return;
    }

    // One direction per frame; an empty tank ignores movement input
    // entirely (facing included) but firing stays available.
    if let Some(dir) = input.held_direction() {
        if p.fuel > 0.0 {
            p.dir = dir;
            // Fuel reflects attempted travel, not realized travel.
            p.fuel = (p.fuel - FUEL_PER_MOVE).max(0.0);
            let delta = dir.unit() * p.speed;
            let grid = &state.grid;
            let blocked = |pos: Vec2| collision::box_blocked(grid, pos, p.size);
            if let Some(next) = collision::resolve_move(p.pos, delta, blocked) {
                p.pos = next;
                p.track_phase = (p.track_phase + 1) % TRACK_PHASE_STEPS;
            }
        }
    }

    p.turret_angle = ease_angle(p.turret_angle, p.dir.angle(), TURRET_TURN_RATE);

    if p.reload > 0 {
        p.reload -= 1;
    }
    if p.invuln > 0 {
        p.invuln -= 1;
    }

    state.player = p;

    if fire_edge && state.player.reload == 0 {
        let level = state.player.level;
        let speed = PLAYER_SHOT_BASE_SPEED + PLAYER_SHOT_SPEED_STEP * (level - 1) as f32;
        let angle = state.player.dir.angle();
        let pos = state.player.pos;
        world::spawn_projectile(state, audio, pos, angle, ProjectileOwner::Player, speed, level);
        state.player.reload = PLAYER_RELOAD_BASE
            .saturating_sub(PLAYER_RELOAD_STEP * (level - 1) as u32)
            .max(PLAYER_RELOAD_MIN);
    }
}

/// Apply an enemy hit to the player: absorb it by dropping an upgrade
/// level, or lose a life and start the respawn countdown.
pub fn apply_hit(player: &mut Player, effects: &mut Vec<Effect>, audio: &mut Vec<AudioEvent>) {
    if player.invuln > 0 {
        return;
    }
    if player.level > 1 {
        player.level -= 1;
        player.speed = (player.speed - PLAYER_SPEED_STEP).max(PLAYER_MIN_SPEED);
        effects.push(Effect::flash(player.pos, FLASH_HIT_FRAMES));
        audio.push(AudioEvent::PlayerHit);
    } else {
        player.lives = player.lives.saturating_sub(1);
        player.level = 1;
        player.speed = PLAYER_BASE_SPEED;
        player.alive = false;
        player.respawn_timer = PLAYER_RESPAWN_DELAY;
        effects.push(Effect::explosion(player.pos, EXPLOSION_PLAYER_FRAMES));
        audio.push(AudioEvent::PlayerDestroyed);
    }
}
