//! Random map generation.
//!
//! Deterministic shape, randomized content: a cleared pocket around the
//! base near the bottom row, then scattered steel, bricks, water
//! clusters, and grass clusters, with the three top-row spawn columns
//! re-cleared last so opponents never spawn into a blocked cell.

use rand::Rng;

use bastion_core::constants::{spawn_columns, SPAWN_ROW};
use bastion_core::enums::Tile;
use bastion_terrain::TileGrid;

/// Steel blocks scattered per level (half-open range).
const STEEL_COUNT: (usize, usize) = (12, 24);
/// Brick blocks scattered per level.
const BRICK_COUNT: (usize, usize) = (40, 76);
/// Water cluster seeds per level.
const WATER_SEEDS: (usize, usize) = (8, 20);
/// Grass cluster seeds per level.
const GRASS_SEEDS: (usize, usize) = (12, 28);
/// Spread probability per neighbor for water clusters.
const WATER_SPREAD: f64 = 0.4;
/// Spread probability per neighbor for grass clusters.
const GRASS_SPREAD: f64 = 0.35;

/// Generate a level map. The outer ring is steel, exactly one base cell
/// sits at the bottom center, and the spawn columns end up empty.
pub fn generate<R: Rng>(width: usize, height: usize, rng: &mut R) -> TileGrid {
    let mut grid = TileGrid::bordered(width, height);
    let base_x = width / 2;
    let base_y = height - 2;

    // 3x3 clearing around the base, interior cells only.
    for by in base_y.saturating_sub(1)..=base_y + 1 {
        for bx in base_x.saturating_sub(1)..=base_x + 1 {
            if bx >= 1 && bx < width - 1 && by >= 1 && by < height - 1 {
                grid.set(bx, by, Tile::Empty);
            }
        }
    }
    grid.set(base_x, base_y, Tile::Base);

    // Steel, skipping the safety zone directly above the base so fresh
    // levels never wall the base in.
    for _ in 0..rng.gen_range(STEEL_COUNT.0..STEEL_COUNT.1) {
        let (x, y) = interior_cell(width, height, rng);
        let in_safety_zone = y + 2 >= base_y && x.abs_diff(base_x) <= 2;
        if grid.get(x, y) == Tile::Empty && !in_safety_zone {
            grid.set(x, y, Tile::Steel);
        }
    }

    for _ in 0..rng.gen_range(BRICK_COUNT.0..BRICK_COUNT.1) {
        let (x, y) = interior_cell(width, height, rng);
        if grid.get(x, y) == Tile::Empty {
            grid.set(x, y, Tile::Brick);
        }
    }

    for _ in 0..rng.gen_range(WATER_SEEDS.0..WATER_SEEDS.1) {
        let (x, y) = interior_cell(width, height, rng);
        if grid.get(x, y) == Tile::Empty {
            grid.set(x, y, Tile::Water);
            spread_cluster(&mut grid, x, y, Tile::Water, WATER_SPREAD, rng);
        }
    }

    for _ in 0..rng.gen_range(GRASS_SEEDS.0..GRASS_SEEDS.1) {
        let (x, y) = interior_cell(width, height, rng);
        if grid.get(x, y) == Tile::Empty {
            grid.set(x, y, Tile::Grass);
            spread_cluster(&mut grid, x, y, Tile::Grass, GRASS_SPREAD, rng);
        }
    }

    for x in spawn_columns(width) {
        grid.set(x, SPAWN_ROW, Tile::Empty);
    }

    grid
}

/// Random interior cell: inside the border, above the bottom two rows.
fn interior_cell<R: Rng>(width: usize, height: usize, rng: &mut R) -> (usize, usize) {
    (rng.gen_range(1..width - 1), rng.gen_range(1..height - 2))
}

/// Probabilistic 8-neighbor spread from a seed cell onto empty cells.
fn spread_cluster<R: Rng>(grid: &mut TileGrid, x: usize, y: usize, tile: Tile, chance: f64, rng: &mut R) {
    for dx in -1i32..=1 {
        for dy in -1i32..=1 {
            if !rng.gen_bool(chance) {
                continue;
            }
            let nx = x as i32 + dx;
            let ny = y as i32 + dy;
            let inside = nx > 0
                && (nx as usize) < grid.width() - 1
                && ny > 0
                && (ny as usize) < grid.height() - 2;
            if inside && grid.get(nx as usize, ny as usize) == Tile::Empty {
                grid.set(nx as usize, ny as usize, tile);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const W: usize = 32;
    const H: usize = 18;

    #[test]
    fn test_border_ring_is_steel_for_all_seeds() {
        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let grid = generate(W, H, &mut rng);
            for x in 0..W {
                assert_eq!(grid.get(x, 0), Tile::Steel, "seed {seed} top border");
                assert_eq!(grid.get(x, H - 1), Tile::Steel, "seed {seed} bottom border");
            }
            for y in 0..H {
                assert_eq!(grid.get(0, y), Tile::Steel, "seed {seed} left border");
                assert_eq!(grid.get(W - 1, y), Tile::Steel, "seed {seed} right border");
            }
        }
    }

    #[test]
    fn test_exactly_one_base() {
        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let grid = generate(W, H, &mut rng);
            let bases = grid.cells().iter().filter(|&&t| t == Tile::Base).count();
            assert_eq!(bases, 1, "seed {seed}");
            assert_eq!(grid.find_base(), Some((W / 2, H - 2)), "seed {seed}");
        }
    }

    #[test]
    fn test_spawn_columns_are_clear() {
        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let grid = generate(W, H, &mut rng);
            for x in spawn_columns(W) {
                assert_eq!(grid.get(x, SPAWN_ROW), Tile::Empty, "seed {seed} column {x}");
            }
        }
    }

    #[test]
    fn test_no_steel_in_base_safety_zone() {
        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let grid = generate(W, H, &mut rng);
            let (base_x, base_y) = (W / 2, H - 2);
            for y in base_y - 2..H - 1 {
                for x in base_x - 2..=base_x + 2 {
                    assert_ne!(
                        grid.get(x, y),
                        Tile::Steel,
                        "seed {seed}: steel at ({x},{y}) walls in the base"
                    );
                }
            }
        }
    }

    #[test]
    fn test_same_seed_same_map() {
        let mut a = ChaCha8Rng::seed_from_u64(99);
        let mut b = ChaCha8Rng::seed_from_u64(99);
        assert_eq!(generate(W, H, &mut a).cells(), generate(W, H, &mut b).cells());
    }
}
