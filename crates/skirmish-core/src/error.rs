//! Typed failure reasons.
//!
//! Nothing here aborts the process; every failure path is a value the caller
//! can match on.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::enums::Element;
use crate::types::{ObstacleId, UnitId};

/// Movement failures surfaced by path-walking helpers.
///
/// `HostilesInPath` is a deliberate sentinel: callers may clear the blockers
/// and retry, while the other variants propagate unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MovementError {
    #[error("no path to destination")]
    NoPath,
    #[error("hostiles detected in movement path")]
    HostilesInPath,
}

/// Why the rush validator refused to fire, in gate order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RushRejection {
    #[error("rush is not the active left skill")]
    SkillNotActive,
    #[error("rush is not usable in this area")]
    ForbiddenArea,
    #[error("no target position supplied")]
    MissingTarget,
    #[error("mana too low ({have} < {need})")]
    ManaTooLow { have: i32, need: i32 },
    #[error("equipped weapon is broken")]
    WeaponBroken,
    #[error("equipped weapon has no durability left")]
    WeaponWorn,
    #[error("target too close ({distance} < {min})")]
    DistanceTooShort { distance: i32, min: i32 },
    #[error("no line of sight to target")]
    NoLineOfSight,
    #[error("hostile in rush path")]
    HostileInPath { id: UnitId },
    #[error("obstacle in rush path")]
    ObstacleInPath { id: ObstacleId, door: bool },
}

/// Why the engagement loop refused a selected target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GateReason {
    #[error("target is dead")]
    TargetDead,
    #[error("target stands on a non-walkable tile")]
    OffGridTile,
    #[error("no path reaches the target")]
    NoPath,
    #[error("a closed door blocks the way")]
    DoorInTheWay,
    #[error("target is immune to {0:?}")]
    Immune(Element),
}
