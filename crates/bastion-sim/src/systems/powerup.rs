//! Power-up lifetimes and pickups.
//!
//! Both variants share the countdown and the circular pickup test; the
//! effect dispatches on the variant. A Star at the level cap grants a
//! life instead, so stars never have zero effect.

use bastion_core::constants::*;
use bastion_core::entities::Effect;
use bastion_core::enums::PowerUpKind;
use bastion_core::events::AudioEvent;
use bastion_core::types::tile_center;

use crate::world::SimulationState;

pub fn run(state: &mut SimulationState, audio: &mut Vec<AudioEvent>) {
    for i in 0..state.powerups.len() {
        let mut pu = state.powerups[i];
        if !pu.alive {
            continue;
        }
        pu.timer -= 1;

        let p = state.player;
        if p.alive && pu.pos.distance(p.pos) < PICKUP_RADIUS {
            match pu.kind {
                PowerUpKind::Star => {
                    if state.player.level < PLAYER_MAX_LEVEL {
                        state.player.level += 1;
                        state.player.speed += PLAYER_SPEED_STEP;
                    } else {
                        state.player.lives += 1;
                    }
                    state
                        .effects
                        .push(Effect::flash(p.pos, FLASH_PICKUP_FRAMES));
                }
                PowerUpKind::Shield => {
                    state.base.arm_shield();
                    state.effects.push(Effect::explosion(
                        tile_center(state.base_tile),
                        EXPLOSION_SHIELD_FRAMES,
                    ));
                }
            }
            audio.push(AudioEvent::PowerUpCollected { kind: pu.kind });
            pu.alive = false;
        }

        state.powerups[i] = pu;
    }
}
