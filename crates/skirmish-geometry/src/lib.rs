//! Geometry kernel for the skirmish combat engine.
//!
//! Pure functions over the core value types: grid line-of-sight, isometric
//! world→screen projection, and segment/point proximity. No I/O, no game
//! state — every decision component builds on these primitives.

pub use skirmish_core as core;

pub mod los;
pub mod projection;
pub mod proximity;

// Re-export the primitives most callers want.
pub use los::line_of_sight;
pub use projection::{world_to_screen, IsoProjection};
pub use proximity::{path_intersects, point_beyond, segment_near_point};
