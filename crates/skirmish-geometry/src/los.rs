//! Grid line-of-sight via integer line rasterization.

use skirmish_core::types::Position;
use skirmish_core::world::WalkGrid;

/// Check whether the straight segment from `origin` to `dest` crosses only
/// walkable cells.
///
/// Rasterizes with integer Bresenham stepping, so every cell the segment
/// passes through is visited — shallow slopes do not skip columns. Fails the
/// moment a stepped cell (including `origin` and `dest` themselves) is
/// blocked.
pub fn line_of_sight(grid: &WalkGrid, origin: Position, dest: Position) -> bool {
    let dx = (dest.x - origin.x).abs();
    let dy = (dest.y - origin.y).abs();
    let sx = if origin.x > dest.x { -1 } else { 1 };
    let sy = if origin.y > dest.y { -1 } else { 1 };

    let mut err = dx - dy;
    let mut x = origin.x;
    let mut y = origin.y;

    loop {
        if !grid.is_walkable(Position::new(x, y)) {
            return false;
        }
        if x == dest.x && y == dest.y {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }

    true
}
