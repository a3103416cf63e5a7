//! The world aggregate and its spawn/reset factories.
//!
//! `SimulationState` owns every mutable collection for the current
//! level. Systems receive it by mutable reference from the engine;
//! nothing else holds onto entities between frames.

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use bastion_campaign::Progression;
use bastion_core::constants::*;
use bastion_core::entities::*;
use bastion_core::enums::ProjectileOwner;
use bastion_core::events::AudioEvent;
use bastion_core::types::tile_center;
use bastion_terrain::TileGrid;
use glam::Vec2;

/// Everything the simulation mutates frame to frame.
#[derive(Debug, Clone)]
pub struct SimulationState {
    pub grid: TileGrid,
    /// Cached location of the base cell in `grid`.
    pub base_tile: (usize, usize),
    pub base: BaseState,
    pub player: Player,
    pub opponents: Vec<Opponent>,
    pub projectiles: Vec<Projectile>,
    pub powerups: Vec<PowerUp>,
    pub fuel_cans: Vec<FuelCan>,
    pub effects: Vec<Effect>,
    pub progression: Progression,
}

impl SimulationState {
    /// Fresh run: level-1 map, fuel cans, full-fuel player at the spawn
    /// tile, and the opening wave.
    pub fn new_game(rng: &mut ChaCha8Rng) -> Self {
        let grid = bastion_procgen::generate(GRID_WIDTH, GRID_HEIGHT, rng);
        let base_tile = grid
            .find_base()
            .unwrap_or((GRID_WIDTH / 2, GRID_HEIGHT - 2));
        let fuel_cans = bastion_procgen::generate_fuel_cans(&grid, rng);
        let mut state = Self {
            grid,
            base_tile,
            base: BaseState::default(),
            player: Player::at_spawn(PLAYER_SPAWN_TILE),
            opponents: Vec::new(),
            projectiles: Vec::new(),
            powerups: Vec::new(),
            fuel_cans,
            effects: Vec::new(),
            progression: Progression::default(),
        };
        spawn_wave(&mut state, rng, INITIAL_WAVE_SIZE);
        state
    }
}

/// Level transition: brand-new map and fuel-can layout, all transient
/// collections dropped, player back at the spawn tile with a full tank.
pub fn begin_level(state: &mut SimulationState, rng: &mut ChaCha8Rng) {
    state.grid = bastion_procgen::generate(GRID_WIDTH, GRID_HEIGHT, rng);
    state.base_tile = state
        .grid
        .find_base()
        .unwrap_or((GRID_WIDTH / 2, GRID_HEIGHT - 2));
    state.fuel_cans = bastion_procgen::generate_fuel_cans(&state.grid, rng);
    state.opponents.clear();
    state.projectiles.clear();
    state.powerups.clear();
    state.effects.clear();
    state.player.spawn_tile = PLAYER_SPAWN_TILE;
    state.player.pos = tile_center(PLAYER_SPAWN_TILE);
    state.player.fuel = MAX_FUEL;
}

/// Spawn `count` opponents across the shuffled top-row spawn columns,
/// cycling when the count exceeds the available columns.
pub fn spawn_wave(state: &mut SimulationState, rng: &mut ChaCha8Rng, count: u32) {
    let mut columns = spawn_columns(state.grid.width());
    columns.shuffle(rng);
    let speed = state.progression.opponent_speed();
    for i in 0..count as usize {
        let column = columns[i % columns.len()];
        let opponent = spawn_opponent(column, SPAWN_ROW, speed, rng);
        state.opponents.push(opponent);
    }
}

/// A single opponent at a tile center with randomized controller state.
pub fn spawn_opponent(cx: usize, cy: usize, speed: f32, rng: &mut ChaCha8Rng) -> Opponent {
    let dir = bastion_ai::random_direction(rng);
    Opponent {
        pos: tile_center((cx, cy)),
        dir,
        turret_angle: dir.angle(),
        speed,
        size: OPPONENT_SIZE,
        move_timer: bastion_ai::spawn_move_timer(rng),
        reload: bastion_ai::spawn_reload(rng),
        alive: true,
        track_phase: 0,
    }
}

/// Push a projectile into flight and raise the shot event.
pub fn spawn_projectile(
    state: &mut SimulationState,
    audio: &mut Vec<AudioEvent>,
    pos: Vec2,
    angle: f32,
    owner: ProjectileOwner,
    speed: f32,
    level: u8,
) {
    state.projectiles.push(Projectile {
        pos,
        angle,
        speed,
        range: PROJECTILE_RANGE,
        owner,
        level,
        size: PROJECTILE_SIZE,
        alive: true,
    });
    audio.push(AudioEvent::ShotFired { owner });
}
