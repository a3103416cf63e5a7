//! Axis-aligned collision queries.
//!
//! Used identically for player and opponent movement; projectile-vs-tile
//! checks use the point query on [`TileGrid`] directly.

use glam::Vec2;

use bastion_core::constants::TILE_SIZE;

use crate::grid::TileGrid;

/// True when the `size`-wide box centered at `center` covers a blocking
/// tile. Any covered coordinate outside the grid counts as blocked.
pub fn box_blocked(grid: &TileGrid, center: Vec2, size: f32) -> bool {
    let half = size / 2.0;
    let left = ((center.x - half) / TILE_SIZE).floor() as i32;
    let right = ((center.x + half) / TILE_SIZE).floor() as i32;
    let top = ((center.y - half) / TILE_SIZE).floor() as i32;
    let bottom = ((center.y + half) / TILE_SIZE).floor() as i32;
    for ty in top..=bottom {
        for tx in left..=right {
            match grid.tile_at(tx, ty) {
                Some(tile) if !tile.blocks() => {}
                _ => return true,
            }
        }
    }
    false
}

/// Per-axis proximity test vehicles use against each other and against
/// projectiles: closer than the summed sizes on both axes.
pub fn boxes_overlap(a: Vec2, a_size: f32, b: Vec2, b_size: f32) -> bool {
    (a.x - b.x).abs() < a_size + b_size && (a.y - b.y).abs() < a_size + b_size
}

/// Attempt a move. The full delta is tried first; if blocked, each axis
/// is retried alone (X, then Y) and the first unblocked one is
/// committed. Returns the committed position, or `None` when the move
/// is fully rejected for this frame.
pub fn resolve_move(
    pos: Vec2,
    delta: Vec2,
    mut blocked: impl FnMut(Vec2) -> bool,
) -> Option<Vec2> {
    let full = pos + delta;
    if !blocked(full) {
        return Some(full);
    }
    if delta.x != 0.0 && delta.y != 0.0 {
        let x_only = pos + Vec2::new(delta.x, 0.0);
        if !blocked(x_only) {
            return Some(x_only);
        }
        let y_only = pos + Vec2::new(0.0, delta.y);
        if !blocked(y_only) {
            return Some(y_only);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use bastion_core::enums::Tile;
    use bastion_core::types::tile_center;

    fn open_grid() -> TileGrid {
        TileGrid::bordered(10, 10)
    }

    #[test]
    fn test_box_blocked_by_each_blocking_tile() {
        for tile in [Tile::Steel, Tile::Brick, Tile::Water, Tile::Base] {
            let mut grid = open_grid();
            grid.set(5, 5, tile);
            assert!(
                box_blocked(&grid, tile_center((5, 5)), 11.0),
                "{tile:?} should block"
            );
        }
        let mut grid = open_grid();
        grid.set(5, 5, Tile::Grass);
        assert!(!box_blocked(&grid, tile_center((5, 5)), 11.0));
    }

    #[test]
    fn test_box_blocked_out_of_bounds() {
        let grid = open_grid();
        assert!(box_blocked(&grid, Vec2::new(-50.0, 50.0), 11.0));
        assert!(box_blocked(&grid, Vec2::new(50.0, 10_000.0), 11.0));
    }

    #[test]
    fn test_box_spanning_two_tiles() {
        let mut grid = open_grid();
        grid.set(5, 5, Tile::Steel);
        // Center in tile (4,5) but the box edge reaches into (5,5).
        let near_edge = Vec2::new(5.0 * TILE_SIZE - 2.0, tile_center((5, 5)).y);
        assert!(box_blocked(&grid, near_edge, 11.0));
        // Pulled back far enough, the box stays inside (4,5).
        let clear = Vec2::new(5.0 * TILE_SIZE - 10.0, tile_center((5, 5)).y);
        assert!(!box_blocked(&grid, clear, 11.0));
    }

    #[test]
    fn test_boxes_overlap_per_axis() {
        let a = Vec2::new(0.0, 0.0);
        assert!(boxes_overlap(a, 10.0, Vec2::new(15.0, 5.0), 10.0));
        assert!(!boxes_overlap(a, 10.0, Vec2::new(25.0, 0.0), 10.0));
        // Near on X alone is not enough.
        assert!(!boxes_overlap(a, 10.0, Vec2::new(5.0, 40.0), 10.0));
    }

    #[test]
    fn test_resolve_move_commits_free_axis() {
        // Blocked above, free to the right: a diagonal intent slides on X.
        let blocked = |p: Vec2| p.y < 0.0;
        let next = resolve_move(Vec2::new(10.0, 1.0), Vec2::new(3.0, -3.0), blocked);
        assert_eq!(next, Some(Vec2::new(13.0, 1.0)));
    }

    #[test]
    fn test_resolve_move_fully_rejected() {
        let blocked = |_: Vec2| true;
        assert_eq!(
            resolve_move(Vec2::new(10.0, 10.0), Vec2::new(0.0, -3.0), blocked),
            None
        );
    }

    #[test]
    fn test_resolve_move_single_axis_has_no_retry() {
        // A single-axis move that is blocked must not "succeed" with a
        // zero-length slide.
        let blocked = |p: Vec2| p.x > 11.0;
        assert_eq!(
            resolve_move(Vec2::new(10.0, 0.0), Vec2::new(3.0, 0.0), blocked),
            None
        );
    }
}
