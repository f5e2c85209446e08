//! Segment/point proximity and ray extension.
//!
//! Operates on plain positions; the blocking tests used by both the rush
//! validator and the retargeting heuristic live here.

use glam::DVec2;

use skirmish_core::types::{Path, Position};

/// Whether `point` lies within `padding` of the straight segment
/// `origin → target`.
///
/// Projects the point onto the segment via dot-product parametrization; a
/// parameter outside `[0, 1]` means the point is not between the endpoints
/// and never blocks. When `origin == target` the segment degenerates and a
/// plain point-distance test applies.
pub fn segment_near_point(
    origin: Position,
    target: Position,
    point: Position,
    padding: i32,
) -> bool {
    let padding_sq = (padding * padding) as f64;
    let segment = target.as_dvec2() - origin.as_dvec2();
    let offset = point.as_dvec2() - origin.as_dvec2();

    let denom = segment.length_squared();
    if denom == 0.0 {
        return offset.length_squared() <= padding_sq;
    }

    let t = offset.dot(segment) / denom;
    if !(0.0..=1.0).contains(&t) {
        return false;
    }

    let closest = origin.as_dvec2() + segment * t;
    (point.as_dvec2() - closest).length_squared() <= padding_sq
}

/// The position `distance` units beyond `target` along the `start → target`
/// ray.
///
/// When `start == target` there is no ray; an arbitrary +x direction is used
/// so callers never divide by zero.
pub fn point_beyond(start: Position, target: Position, distance: i32) -> Position {
    let delta = target.as_dvec2() - start.as_dvec2();
    let direction = if delta.length_squared() == 0.0 {
        DVec2::X
    } else {
        delta.normalize()
    };

    Position::new(
        target.x + (direction.x * distance as f64) as i32,
        target.y + (direction.y * distance as f64) as i32,
    )
}

/// Whether any node of `path` lies within `padding` of `point`.
pub fn path_intersects(path: &Path, point: Position, padding: i32) -> bool {
    let padding_sq = padding * padding;
    path.nodes().iter().any(|node| {
        let dx = point.x - node.x;
        let dy = point.y - node.y;
        dx * dx + dy * dy <= padding_sq
    })
}
