//! Gap-closer (rush) validation and execution.
//!
//! Rush relocates the agent along a straight ground line, which makes it
//! both a movement option and an attack: it costs mana, it swings the
//! equipped weapon, and it stops dead on the first thing it hits. The gates
//! below run in order and short-circuit on the first failure.

use std::thread;
use tracing::debug;

use skirmish_core::constants::{
    INPUT_SETTLE, KEY_BRACKET_DELAY, PATH_BLOCKER_PADDING, RUSH_MIN_DISTANCE, RUSH_MIN_MANA,
};
use skirmish_core::enums::{Binding, MouseButton, SkillId};
use skirmish_core::error::RushRejection;
use skirmish_core::types::Position;
use skirmish_core::world::WorldSnapshot;
use skirmish_geometry::{line_of_sight, segment_near_point};

use crate::io::InputSink;

/// Decide whether rush may be executed toward `target` right now.
pub fn validate_rush(snapshot: &WorldSnapshot, target: Position) -> Result<(), RushRejection> {
    let agent = &snapshot.agent;

    if agent.left_skill != SkillId::Rush {
        return Err(RushRejection::SkillNotActive);
    }
    if agent.in_town || agent.movement_restricted {
        return Err(RushRejection::ForbiddenArea);
    }
    if target == Position::ZERO {
        return Err(RushRejection::MissingTarget);
    }
    if agent.mana < RUSH_MIN_MANA {
        return Err(RushRejection::ManaTooLow {
            have: agent.mana,
            need: RUSH_MIN_MANA,
        });
    }

    // Rush swings the weapon, so an unusable weapon means no rush. Items
    // without offensive stats (orbs, shields-only setups) don't care.
    if let Some(weapon) = &agent.active_weapon {
        if weapon.is_offensive() && !weapon.indestructible {
            if weapon.broken {
                return Err(RushRejection::WeaponBroken);
            }
            if matches!(weapon.durability, Some(d) if d <= 0) {
                return Err(RushRejection::WeaponWorn);
            }
        }
    }

    let distance = agent.position.distance_to(target);
    if distance < RUSH_MIN_DISTANCE {
        return Err(RushRejection::DistanceTooShort {
            distance,
            min: RUSH_MIN_DISTANCE,
        });
    }

    if !line_of_sight(&snapshot.grid, agent.position, target) {
        return Err(RushRejection::NoLineOfSight);
    }

    for hostile in &snapshot.hostiles {
        if segment_near_point(
            agent.position,
            target,
            hostile.position,
            PATH_BLOCKER_PADDING,
        ) {
            return Err(RushRejection::HostileInPath { id: hostile.id });
        }
    }

    for obstacle in &snapshot.obstacles {
        if !obstacle.blocks_path() {
            continue;
        }
        if segment_near_point(
            agent.position,
            target,
            obstacle.position,
            PATH_BLOCKER_PADDING,
        ) {
            return Err(RushRejection::ObstacleInPath {
                id: obstacle.id,
                door: obstacle.door,
            });
        }
    }

    Ok(())
}

/// Issue the rush input bracket at the projected screen position: hold
/// stand-still, click once, release. The held key keeps the cast anchored
/// until the click lands.
pub fn execute_rush(input: &mut dyn InputSink, screen_x: i32, screen_y: i32) {
    input.key_down(Binding::StandStill);
    thread::sleep(KEY_BRACKET_DELAY);
    input.click(MouseButton::Left, screen_x, screen_y);
    thread::sleep(KEY_BRACKET_DELAY);
    input.key_up(Binding::StandStill);
    thread::sleep(INPUT_SETTLE);
}

/// Validate and, on success, execute a rush toward `target`. Returns whether
/// the rush was issued.
pub fn try_rush_move(
    snapshot: &WorldSnapshot,
    input: &mut dyn InputSink,
    screen_x: i32,
    screen_y: i32,
    target: Position,
) -> bool {
    match validate_rush(snapshot, target) {
        Ok(()) => {
            execute_rush(input, screen_x, screen_y);
            true
        }
        Err(rejection) => {
            debug!(
                target_x = target.x,
                target_y = target.y,
                reason = %rejection,
                "rush movement skipped"
            );
            false
        }
    }
}
