//! Snapshot assembly for the presentation layer.

use bastion_core::constants::MAX_FUEL;
use bastion_core::enums::GamePhase;
use bastion_core::events::AudioEvent;
use bastion_core::state::*;
use bastion_core::types::SimTime;

use crate::world::SimulationState;

/// Build the read-only view of one completed tick. `audio_events` is
/// the engine's drained buffer for this tick.
pub fn build(
    state: &SimulationState,
    time: SimTime,
    phase: GamePhase,
    audio_events: Vec<AudioEvent>,
) -> GameStateSnapshot {
    let player = &state.player;
    GameStateSnapshot {
        time,
        phase,
        wave: state.progression.wave,
        level: state.progression.level,
        score: player.score,
        grid: GridView {
            width: state.grid.width(),
            height: state.grid.height(),
            cells: state.grid.cells().to_vec(),
        },
        base: BaseView {
            tile: state.base_tile,
            shielded: state.base.shielded,
            shield_timer: state.base.timer,
        },
        player: PlayerView {
            pos: player.pos,
            dir: player.dir,
            turret_angle: player.turret_angle,
            level: player.level,
            lives: player.lives,
            fuel: player.fuel,
            max_fuel: MAX_FUEL,
            alive: player.alive,
            invulnerable: player.invuln > 0,
            track_phase: player.track_phase,
        },
        opponents: state
            .opponents
            .iter()
            .map(|o| OpponentView {
                pos: o.pos,
                dir: o.dir,
                turret_angle: o.turret_angle,
                track_phase: o.track_phase,
            })
            .collect(),
        projectiles: state
            .projectiles
            .iter()
            .map(|b| ProjectileView {
                pos: b.pos,
                owner: b.owner,
                size: b.size,
                level: b.level,
            })
            .collect(),
        powerups: state
            .powerups
            .iter()
            .map(|pu| PowerUpView {
                kind: pu.kind,
                pos: pu.pos,
                timer: pu.timer,
            })
            .collect(),
        fuel_cans: state
            .fuel_cans
            .iter()
            .map(|can| FuelCanView { pos: can.pos })
            .collect(),
        effects: state
            .effects
            .iter()
            .map(|e| EffectView {
                kind: e.kind,
                pos: e.pos,
                timer: e.timer,
            })
            .collect(),
        audio_events,
    }
}
