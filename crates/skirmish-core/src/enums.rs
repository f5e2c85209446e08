//! Enumeration types used throughout the engine.

use serde::{Deserialize, Serialize};

/// Hostile classification tier, highest priority first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HostileTier {
    /// Named area boss.
    SuperUnique,
    /// Randomly rolled boss.
    Unique,
    /// Escort of a boss pack.
    Minion,
    /// Champion-grade variant.
    Champion,
    /// Regular unit.
    Generic,
    /// Classification missing from the snapshot.
    #[default]
    Unknown,
}

impl HostileTier {
    /// Priority rank: lower is engaged first.
    pub fn rank(&self) -> u8 {
        match self {
            HostileTier::SuperUnique => 0,
            HostileTier::Unique => 1,
            HostileTier::Minion => 2,
            HostileTier::Champion => 3,
            HostileTier::Generic => 4,
            HostileTier::Unknown => 5,
        }
    }
}

/// Damage element a hostile can be immune to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Physical,
    Fire,
    Cold,
    Lightning,
    Poison,
    Magic,
}

/// Skill identities the engine needs to reason about.
///
/// Only skills that influence targeting or movement decisions are named here;
/// full per-build rotations live outside the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillId {
    /// Basic weapon attack.
    #[default]
    Attack,
    /// Unconstrained point-to-point relocation.
    Teleport,
    /// Charge-style gap closer along a straight ground path.
    Rush,
    /// Ranged single-target projectile, the stationary rotation's main skill.
    Bolt,
    /// Melee swing, the approach rotation's main skill.
    Strike,
}

/// Abstract key binding dispatched through the input sink.
///
/// The sink owns the mapping to concrete keys; the engine only names intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Binding {
    /// Move toward the pointer without attacking.
    ForceMove,
    /// Hold position while casting (held down, not tapped).
    StandStill,
    /// Make the given skill the active left skill.
    SelectSkill(SkillId),
}

/// Pointer button for synthetic clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
}

/// Display mode of the observed game client.
///
/// Legacy graphics render a narrower view, which shrinks the usable
/// targeting radius.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayMode {
    Legacy,
    #[default]
    Modern,
}

/// Built-in rotation strategy selected by configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RotationKind {
    /// Stationary ranged casting; retargets around blockers.
    #[default]
    Bolt,
    /// Melee engagement; closes distance and clears blockers itself.
    Strike,
}
