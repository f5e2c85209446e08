//! Isometric world→screen projection.
//!
//! Converts world-grid deltas into the game client's screen pixels. Every
//! click the engine issues goes through this transform, so it must agree
//! bit-for-bit with the client's own projection — including truncation
//! instead of rounding.

use skirmish_core::constants::{HUD_SAFE_DIVISOR, ISO_SCALE_X, ISO_SCALE_Y};
use skirmish_core::types::{Path, Position};
use skirmish_core::world::FrameSize;

/// Project `target` onto the screen as seen from `origin` at the frame
/// center.
///
/// Applies the isometric basis change `sx = (dx - dy) * kx`,
/// `sy = (dx + dy) * ky` and truncates the f32 result toward zero.
pub fn world_to_screen(
    origin_x: i32,
    origin_y: i32,
    target_x: i32,
    target_y: i32,
    half_width: i32,
    half_height: i32,
) -> (i32, i32) {
    let dx = target_x - origin_x;
    let dy = target_y - origin_y;

    let screen_x = ((dx - dy) as f32 * ISO_SCALE_X + half_width as f32) as i32;
    let screen_y = ((dx + dy) as f32 * ISO_SCALE_Y + half_height as f32) as i32;

    (screen_x, screen_y)
}

/// Projection anchored to a concrete game frame.
///
/// Caches the frame dimensions and the HUD boundary so path-walking code can
/// ask "which node still lands on a clickable pixel".
#[derive(Debug, Clone, Copy)]
pub struct IsoProjection {
    frame: FrameSize,
    hud_limit: i32,
}

impl IsoProjection {
    pub fn new(frame: FrameSize) -> Self {
        Self {
            frame,
            hud_limit: (frame.height as f32 / HUD_SAFE_DIVISOR) as i32,
        }
    }

    /// Screen position of `target` as seen from `origin`.
    pub fn to_screen(&self, origin: Position, target: Position) -> (i32, i32) {
        world_to_screen(
            origin.x,
            origin.y,
            target.x,
            target.y,
            self.frame.width / 2,
            self.frame.height / 2,
        )
    }

    /// Whether a projected point lies inside the frame.
    pub fn on_screen(&self, screen_x: i32, screen_y: i32) -> bool {
        screen_x >= 0
            && screen_y >= 0
            && screen_x <= self.frame.width
            && screen_y <= self.frame.height
    }

    /// Whether a projected point would land on the HUD band and must not be
    /// clicked.
    pub fn overlaps_hud(&self, screen_y: i32) -> bool {
        screen_y > self.hud_limit
    }

    /// Index of the furthest path node that projects onto a clickable pixel,
    /// scanning from the destination backwards. Falls back to the first node
    /// when nothing further fits.
    pub fn last_on_screen_index(&self, origin: Position, path: &Path) -> usize {
        let nodes = path.nodes();
        for i in (0..nodes.len()).rev() {
            let (sx, sy) = self.to_screen(origin, nodes[i]);
            if self.overlaps_hud(sy) {
                continue;
            }
            if self.on_screen(sx, sy) {
                return i;
            }
        }

        0
    }
}
