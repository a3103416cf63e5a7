//! Fuel-can placement.

use rand::Rng;

use bastion_core::constants::*;
use bastion_core::entities::FuelCan;
use bastion_core::enums::Tile;
use bastion_core::types::tile_center;
use bastion_terrain::TileGrid;

/// Scatter fuel cans over the generated map. Candidates must land on an
/// empty or grass cell and keep a minimum per-axis tile distance from
/// every can already placed. The attempt budget bounds the search;
/// returning fewer cans than the sampled target is normal.
pub fn generate_fuel_cans<R: Rng>(grid: &TileGrid, rng: &mut R) -> Vec<FuelCan> {
    let target = rng.gen_range(FUEL_CAN_MIN_COUNT..=FUEL_CAN_MAX_COUNT);
    let mut cans = Vec::with_capacity(target);
    let mut placed_tiles: Vec<(usize, usize)> = Vec::with_capacity(target);

    let mut attempts = 0;
    while cans.len() < target && attempts < FUEL_CAN_MAX_ATTEMPTS {
        attempts += 1;
        let x = rng.gen_range(1..grid.width() - 1);
        let y = rng.gen_range(1..grid.height() - 2);

        if !matches!(grid.get(x, y), Tile::Empty | Tile::Grass) {
            continue;
        }
        let too_close = placed_tiles.iter().any(|&(cx, cy)| {
            cx.abs_diff(x) < FUEL_CAN_MIN_SPACING && cy.abs_diff(y) < FUEL_CAN_MIN_SPACING
        });
        if too_close {
            continue;
        }

        placed_tiles.push((x, y));
        cans.push(FuelCan {
            pos: tile_center((x, y)),
            alive: true,
        });
    }

    cans
}
