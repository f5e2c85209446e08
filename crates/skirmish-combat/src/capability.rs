//! Per-tick capability derivation.
//!
//! A `Capability` is computed once per tick from the snapshot and the
//! configuration, then read by the prioritizer, the retargeting heuristic
//! and the engagement gates. It is never stored across ticks.

use skirmish_core::config::CombatConfig;
use skirmish_core::constants::{LEGACY_SCREEN_RANGE, MELEE_RANGE, MODERN_SCREEN_RANGE};
use skirmish_core::enums::DisplayMode;
use skirmish_core::world::WorldSnapshot;

/// Observation/targeting radius for the given display mode.
pub fn resolve_screen_range(display: DisplayMode) -> i32 {
    match display {
        DisplayMode::Legacy => LEGACY_SCREEN_RANGE,
        DisplayMode::Modern => MODERN_SCREEN_RANGE,
    }
}

/// What the agent can do this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capability {
    /// Unconstrained point-to-point movement is available right now.
    pub can_teleport: bool,
    /// Effective range of the rotation's main attack.
    pub main_skill_range: i32,
    /// Melee contact range.
    pub melee_range: i32,
    /// Screen observation/targeting radius.
    pub screen_range: i32,
}

impl Capability {
    pub fn derive(snapshot: &WorldSnapshot, config: &CombatConfig, main_skill_range: i32) -> Self {
        let agent = &snapshot.agent;
        Self {
            can_teleport: config.use_teleport && agent.has_teleport && !agent.in_town,
            main_skill_range,
            melee_range: MELEE_RANGE,
            screen_range: resolve_screen_range(agent.display),
        }
    }
}
