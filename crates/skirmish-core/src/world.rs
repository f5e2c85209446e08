//! Observed world state.
//!
//! These are transient views over a single snapshot: the engine never owns a
//! hostile or the grid, it reads whatever the refresh collaborator produced
//! for the current tick. All structs are plain data.

use serde::{Deserialize, Serialize};

use crate::enums::{DisplayMode, Element, HostileTier, SkillId};
use crate::types::{ObstacleId, Position, UnitId};

/// An equipped weapon in the active slot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Weapon {
    pub min_damage: i32,
    pub max_damage: i32,
    /// Flagged broken by the game; unusable until repaired.
    pub broken: bool,
    /// Indestructible weapons ignore durability entirely.
    pub indestructible: bool,
    /// Remaining durability, if the weapon tracks it.
    pub durability: Option<i32>,
}

impl Weapon {
    /// Whether the item has measurable offensive stats at all.
    pub fn is_offensive(&self) -> bool {
        self.min_damage > 0 || self.max_damage > 0
    }
}

/// The controlled agent as observed this tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentState {
    pub position: Position,
    pub life: i32,
    pub mana: i32,
    /// Skill bound to the left pointer button.
    pub left_skill: SkillId,
    /// Skill bound to the right pointer button.
    pub right_skill: SkillId,
    /// Whether the teleport skill is available to this agent at all.
    pub has_teleport: bool,
    /// Weapon equipped in the active slot, if any.
    pub active_weapon: Option<Weapon>,
    /// Safe-zone flag; combat and movement skills are pointless here.
    pub in_town: bool,
    /// Some areas forbid movement skills even outside town.
    pub movement_restricted: bool,
    pub display: DisplayMode,
}

/// A hostile unit observed in the snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Hostile {
    pub id: UnitId,
    pub position: Position,
    pub tier: HostileTier,
    /// Whether this unit raises corpses; raisers are prioritized so packs
    /// stay dead.
    pub raiser: bool,
    pub life: i32,
    pub immunities: Vec<Element>,
}

impl Hostile {
    pub fn is_alive(&self) -> bool {
        self.life > 0
    }

    pub fn is_immune(&self, element: Element) -> bool {
        self.immunities.contains(&element)
    }
}

/// A static object observed in the snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: ObstacleId,
    pub position: Position,
    /// Whether the object physically collides.
    pub has_collision: bool,
    /// Whether the object can be clicked (doors, chests, levers).
    pub selectable: bool,
    pub door: bool,
}

impl Obstacle {
    /// Whether this object can block a straight movement line. Doors block
    /// like any other collidable object.
    pub fn blocks_path(&self) -> bool {
        self.has_collision || self.selectable
    }
}

/// Pixel dimensions of the observed game frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSize {
    pub width: i32,
    pub height: i32,
}

/// Per-area walkability surface with an origin offset.
///
/// `true` cells are blocked. Row-major, indexed relative to `origin`.
/// Positions outside the surface are never walkable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WalkGrid {
    origin: Position,
    width: u32,
    height: u32,
    blocked: Vec<bool>,
}

impl WalkGrid {
    pub fn new(origin: Position, width: u32, height: u32, blocked: Vec<bool>) -> Self {
        debug_assert_eq!(blocked.len(), (width * height) as usize);
        Self {
            origin,
            width,
            height,
            blocked,
        }
    }

    /// A fully walkable grid, handy for tests and open areas.
    pub fn open(origin: Position, width: u32, height: u32) -> Self {
        Self::new(origin, width, height, vec![false; (width * height) as usize])
    }

    pub fn origin(&self) -> Position {
        self.origin
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn index_of(&self, pos: Position) -> Option<usize> {
        let col = pos.x - self.origin.x;
        let row = pos.y - self.origin.y;
        if col < 0 || row < 0 || col >= self.width as i32 || row >= self.height as i32 {
            return None;
        }
        Some(row as usize * self.width as usize + col as usize)
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.index_of(pos).is_some()
    }

    pub fn is_walkable(&self, pos: Position) -> bool {
        match self.index_of(pos) {
            Some(idx) => !self.blocked[idx],
            None => false,
        }
    }

    pub fn set_blocked(&mut self, pos: Position, blocked: bool) {
        if let Some(idx) = self.index_of(pos) {
            self.blocked[idx] = blocked;
        }
    }
}

/// One consistent observation of the world.
///
/// Produced by the refresh collaborator between ticks; read-only inside the
/// engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub agent: AgentState,
    pub hostiles: Vec<Hostile>,
    pub obstacles: Vec<Obstacle>,
    pub grid: WalkGrid,
    pub frame: FrameSize,
}

impl WorldSnapshot {
    /// Resolve a hostile by identity, alive or not.
    pub fn hostile_by_id(&self, id: UnitId) -> Option<&Hostile> {
        self.hostiles.iter().find(|h| h.id == id)
    }

    /// All hostiles with life remaining.
    pub fn living_hostiles(&self) -> impl Iterator<Item = &Hostile> {
        self.hostiles.iter().filter(|h| h.is_alive())
    }
}
