//! Fundamental value types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Integer position in world-grid coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// The zero position, used as a "no target" sentinel by movement helpers.
    pub const ZERO: Position = Position { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position, floor-truncated to an integer.
    ///
    /// This is the canonical scalar distance metric: symmetric, and zero only
    /// when both positions are equal.
    pub fn distance_to(&self, other: Position) -> i32 {
        let dx = (other.x - self.x) as f64;
        let dy = (other.y - self.y) as f64;
        (dx * dx + dy * dy).sqrt() as i32
    }

    /// This position as a float vector for projection math.
    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x as f64, self.y as f64)
    }
}

/// Stable identity of an observed hostile unit.
///
/// Identities survive across snapshots while the unit stays observable; the
/// engine uses them to recognize "same target as last tick".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitId(pub u32);

/// Stable identity of an observed static obstacle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObstacleId(pub u32);

/// A traversable route produced by the pathfinding oracle.
///
/// Nodes are world-grid positions ordered from the step after the start
/// toward the destination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    nodes: Vec<Position>,
}

impl Path {
    pub fn new(nodes: Vec<Position>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[Position] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// First node of the route.
    pub fn start(&self) -> Option<Position> {
        self.nodes.first().copied()
    }

    /// Final node of the route (the destination-adjacent tile).
    pub fn end(&self) -> Option<Position> {
        self.nodes.last().copied()
    }
}
