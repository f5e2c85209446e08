//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::enums::{Element, RotationKind};

/// Configuration for a combat session.
///
/// All fields have defaults so partial JSON documents load cleanly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// Which built-in rotation strategy drives engagements.
    pub rotation: RotationKind,
    /// Allow teleport movement when the agent knows the skill.
    pub use_teleport: bool,
    /// Allow the rush gap-closer as a movement option.
    pub use_rush_movement: bool,
    /// Immunities that disqualify a target outright.
    pub skip_on_immunities: Vec<Element>,
    /// RNG seed for the pointer-nudge movement. Same seed = same nudges.
    pub seed: u64,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            rotation: RotationKind::default(),
            use_teleport: false,
            use_rush_movement: false,
            skip_on_immunities: Vec::new(),
            seed: 42,
        }
    }
}

impl CombatConfig {
    /// Parse a configuration document, filling unspecified fields with
    /// defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
