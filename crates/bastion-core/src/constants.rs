//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz). All countdowns below are in ticks.
pub const TICK_RATE: u32 = 60;

// --- Arena ---

/// Edge length of one terrain tile in world units.
pub const TILE_SIZE: f32 = 40.0;

/// Default arena width in tiles.
pub const GRID_WIDTH: usize = 32;

/// Default arena height in tiles.
pub const GRID_HEIGHT: usize = 18;

/// Row the opponent spawn points sit on (just inside the top border).
pub const SPAWN_ROW: usize = 1;

/// Top-row opponent spawn columns for a grid of the given width.
pub fn spawn_columns(width: usize) -> [usize; 3] {
    [2, width / 2, width - 3]
}

// --- Player ---

/// Tile the player spawns and respawns on.
pub const PLAYER_SPAWN_TILE: (usize, usize) = (9, GRID_HEIGHT - 2);

/// Player speed at upgrade level 1 (world units per tick).
pub const PLAYER_BASE_SPEED: f32 = 3.2;

/// Speed never drops below this when hits strip upgrade levels.
pub const PLAYER_MIN_SPEED: f32 = 2.0;

/// Speed gained per upgrade level and lost per absorbed hit.
pub const PLAYER_SPEED_STEP: f32 = 0.4;

/// Player collision box edge; doubles as the projectile hit radius.
pub const PLAYER_SIZE: f32 = 11.0;

/// Starting lives.
pub const PLAYER_LIVES: u32 = 3;

/// Maximum upgrade level; a Star at this level grants a life instead.
pub const PLAYER_MAX_LEVEL: u8 = 3;

/// Ticks between death and respawn at the spawn tile.
pub const PLAYER_RESPAWN_DELAY: u32 = 90;

/// Invulnerability window granted on respawn (ticks).
pub const PLAYER_RESPAWN_INVULN: u32 = 60;

// --- Fuel ---

/// Fuel capacity.
pub const MAX_FUEL: f32 = 100.0;

/// Fuel debited per tick of attempted movement.
pub const FUEL_PER_MOVE: f32 = 0.02;

/// A fuel can restores MAX_FUEL divided by this.
pub const FUEL_RESTORE_DIV: f32 = 3.0;

// --- Turret ---

/// Fraction of the shortest angular difference applied per tick.
pub const TURRET_TURN_RATE: f32 = 0.4;

// --- Projectiles ---

/// Total travel budget of a projectile (world units).
pub const PROJECTILE_RANGE: f32 = 600.0;

/// Projectile radius used for opponent dodge checks and rendering.
pub const PROJECTILE_SIZE: f32 = 6.0;

/// Player shot speed at level 1 (world units per tick).
pub const PLAYER_SHOT_BASE_SPEED: f32 = 9.0;

/// Additional shot speed per upgrade level.
pub const PLAYER_SHOT_SPEED_STEP: f32 = 2.0;

/// Player reload at level 1 (ticks).
pub const PLAYER_RELOAD_BASE: u32 = 26;

/// Reload reduction per upgrade level (ticks).
pub const PLAYER_RELOAD_STEP: u32 = 6;

/// Reload floor (ticks).
pub const PLAYER_RELOAD_MIN: u32 = 8;

/// Opponent shot speed (world units per tick).
pub const ENEMY_SHOT_SPEED: f32 = 5.0;

// --- Opponents ---

/// Opponent collision box edge; doubles as the projectile hit radius.
pub const OPPONENT_SIZE: f32 = 10.0;

/// Movement countdown assigned at spawn (ticks, inclusive).
pub const OPPONENT_SPAWN_STEER_MIN: i32 = 20;
pub const OPPONENT_SPAWN_STEER_MAX: i32 = 80;

/// Movement countdown assigned when the previous one expires.
pub const OPPONENT_STEER_MIN: i32 = 30;
pub const OPPONENT_STEER_MAX: i32 = 90;

/// Movement countdown assigned after a fully blocked move.
pub const OPPONENT_BLOCKED_STEER_MIN: i32 = 20;
pub const OPPONENT_BLOCKED_STEER_MAX: i32 = 60;

/// Fire-reload countdown range (ticks, inclusive).
pub const OPPONENT_RELOAD_MIN: i32 = 40;
pub const OPPONENT_RELOAD_MAX: i32 = 120;

/// Probability an opponent actually fires when its reload expires.
pub const ENEMY_FIRE_CHANCE: f64 = 0.5;

// --- Power-ups and pickups ---

/// Circular pickup radius shared by power-ups and fuel cans.
pub const PICKUP_RADIUS: f32 = 28.0;

/// Star lifetime before it expires unpicked (ticks).
pub const STAR_LIFETIME: i32 = 500;

/// Shield power-up lifetime (ticks).
pub const SHIELD_LIFETIME: i32 = 200;

/// Chance a destroyed opponent drops a Star.
pub const STAR_DROP_CHANCE: f64 = 0.28;

/// Chance a destroyed opponent drops a Shield (rolled independently).
pub const SHIELD_DROP_CHANCE: f64 = 0.12;

/// Base shield duration when armed (ticks). Re-arming resets to this.
pub const SHIELD_DURATION: u32 = 15 * TICK_RATE;

// --- Fuel cans ---

/// Cans placed per level (inclusive range).
pub const FUEL_CAN_MIN_COUNT: usize = 2;
pub const FUEL_CAN_MAX_COUNT: usize = 5;

/// Placement attempt budget; shortfall is acceptable.
pub const FUEL_CAN_MAX_ATTEMPTS: usize = 100;

/// Minimum per-axis tile distance between two cans.
pub const FUEL_CAN_MIN_SPACING: usize = 3;

// --- Waves ---

/// Waves per level before the map regenerates.
pub const WAVES_PER_LEVEL: u32 = 4;

/// Opponent base speed at level 1.
pub const OPPONENT_BASE_SPEED: f32 = 1.2;

/// Base speed gained per level transition.
pub const LEVEL_SPEED_INCREMENT: f32 = 0.02;

/// Spawn speed bonus per level beyond the first.
pub const SPEED_PER_LEVEL: f32 = 0.05;

/// Spawn speed bonus per two waves beyond the first.
pub const SPEED_PER_WAVE_PAIR: f32 = 0.08;

/// Cap on opponents spawned per wave.
pub const MAX_WAVE_SPAWN: u32 = 8;

/// Opponents in the very first wave of a game.
pub const INITIAL_WAVE_SIZE: u32 = 3;

// --- Scoring ---

/// Points per destroyed opponent.
pub const KILL_SCORE: u32 = 100;

// --- Effects (presentation countdowns, ticks) ---

pub const EXPLOSION_BRICK_FRAMES: i32 = 12;
pub const EXPLOSION_VEHICLE_FRAMES: i32 = 18;
pub const EXPLOSION_PLAYER_FRAMES: i32 = 22;
pub const EXPLOSION_DEFLECT_FRAMES: i32 = 8;
pub const EXPLOSION_SHIELD_FRAMES: i32 = 10;
pub const FLASH_PICKUP_FRAMES: i32 = 20;
pub const FLASH_HIT_FRAMES: i32 = 12;

/// Tread animation period for vehicles (committed moves per cycle).
pub const TRACK_PHASE_STEPS: u8 = 12;
