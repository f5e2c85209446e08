//! Engine constants and tuning parameters.
//!
//! Distances are in world-grid tiles unless noted otherwise.

use std::time::Duration;

// --- Ranges ---

/// Targeting radius under legacy display mode.
pub const LEGACY_SCREEN_RANGE: i32 = 13;

/// Targeting radius under modern display mode.
pub const MODERN_SCREEN_RANGE: i32 = 18;

/// Distance at which a hostile counts as being in melee contact.
pub const MELEE_RANGE: i32 = 3;

/// Main-skill range assumed when a rotation does not declare one.
pub const DEFAULT_MAIN_SKILL_RANGE: i32 = 12;

/// Targets farther than this skip the walkability/path reachability gates,
/// so long-range selection is not disturbed by stale far-field data.
pub const NEARBY_REACHABILITY_RANGE: i32 = 60;

// --- Engagement loop ---

/// Longest a single target identity may stay selected before the loop gives
/// up on it.
pub const TARGET_TIMEOUT: Duration = Duration::from_secs(10);

/// Melee range used by the approach-style loop (wider than contact range to
/// account for target drift between snapshots).
pub const APPROACH_MELEE_RANGE: i32 = 5;

/// Hostiles at or inside this range are swung at before any repositioning.
pub const IMMEDIATE_THREAT_RANGE: i32 = APPROACH_MELEE_RANGE + 1;

/// Radius scanned for blockers after a failed approach step.
pub const BLOCKER_CLEAR_RANGE: i32 = APPROACH_MELEE_RANGE + 3;

/// Consecutive non-progress approach attempts before the loop self-terminates.
pub const MAX_STALL_ATTEMPTS: u32 = 20;

// --- Movement ---

/// Minimum gap before the rush skill is worth using.
pub const RUSH_MIN_DISTANCE: i32 = 7;

/// Mana floor below which rush is refused.
pub const RUSH_MIN_MANA: i32 = 9;

/// Padding around the straight rush/engage line inside which a hostile or
/// obstacle counts as blocking.
pub const PATH_BLOCKER_PADDING: i32 = 3;

/// Padding the pathfinding oracle applies when testing whether a door sits
/// on a computed path.
pub const DOOR_PATH_PADDING: i32 = 4;

/// Arrival slack for ordinary movement steps.
pub const DEFAULT_ARRIVAL_DISTANCE: i32 = 4;

/// Arrival slack while walking a long path segment by segment; wider so legs
/// ending at large objects still count as finished.
pub const PATHING_ARRIVAL_DISTANCE: i32 = 7;

// --- Projection ---

/// Isometric projection scale, world delta to screen pixels (horizontal).
pub const ISO_SCALE_X: f32 = 19.8;

/// Isometric projection scale, world delta to screen pixels (vertical).
pub const ISO_SCALE_Y: f32 = 9.9;

/// Screen rows below `height / HUD_SAFE_DIVISOR` overlap the HUD and are not
/// safe click targets.
pub const HUD_SAFE_DIVISOR: f32 = 1.19;

// --- Input pacing ---

/// Delay between the phases of a held-key input bracket.
pub const KEY_BRACKET_DELAY: Duration = Duration::from_millis(25);

/// Settle delay after issuing a movement input.
pub const INPUT_SETTLE: Duration = Duration::from_millis(50);
