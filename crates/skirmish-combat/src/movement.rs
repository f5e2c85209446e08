//! Movement dispatch and path walking.
//!
//! One movement step per call: the engagement loop re-evaluates the world
//! between steps, so helpers here never walk a whole path on their own.

use std::thread;

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use skirmish_core::config::CombatConfig;
use skirmish_core::constants::{INPUT_SETTLE, PATH_BLOCKER_PADDING};
use skirmish_core::enums::{Binding, MouseButton, SkillId};
use skirmish_core::error::MovementError;
use skirmish_core::types::Position;
use skirmish_core::world::{FrameSize, WorldSnapshot};
use skirmish_geometry::{path_intersects, IsoProjection};

use crate::capability::Capability;
use crate::io::{InputSink, PathOracle};
use crate::rush::try_rush_move;

/// Move the agent toward the given screen position.
///
/// Preference order: teleport (right-click), validated rush toward
/// `world_pos`, plain pointer + force-move. `world_pos` is the world-space
/// destination when the caller knows it; rush cannot be validated without
/// one.
pub fn move_character(
    input: &mut dyn InputSink,
    snapshot: &WorldSnapshot,
    capability: &Capability,
    config: &CombatConfig,
    screen_x: i32,
    screen_y: i32,
    world_pos: Option<Position>,
) {
    if capability.can_teleport {
        // Make sure teleport is the active right skill before the click.
        if snapshot.agent.right_skill != SkillId::Teleport {
            input.press_binding(Binding::SelectSkill(SkillId::Teleport));
        }
        input.click(MouseButton::Right, screen_x, screen_y);
        thread::sleep(INPUT_SETTLE);
        return;
    }

    if config.use_rush_movement {
        if let Some(target) = world_pos {
            if try_rush_move(snapshot, input, screen_x, screen_y, target) {
                return;
            }
        }
    }

    input.move_pointer(screen_x, screen_y);
    input.press_binding(Binding::ForceMove);
    thread::sleep(INPUT_SETTLE);
}

/// Take one movement step along the path toward `dest`.
///
/// Computes the route, optionally refuses when living hostiles sit within
/// padding of it (`check_blockers`), then clicks the furthest node that
/// still projects onto a clickable pixel. Already being within
/// `arrival_distance` of `dest` is success without input.
pub fn approach(
    input: &mut dyn InputSink,
    pathing: &dyn PathOracle,
    snapshot: &WorldSnapshot,
    capability: &Capability,
    config: &CombatConfig,
    dest: Position,
    arrival_distance: i32,
    check_blockers: bool,
) -> Result<(), MovementError> {
    let agent = snapshot.agent.position;
    if agent.distance_to(dest) <= arrival_distance {
        return Ok(());
    }

    let path = pathing
        .path_to(snapshot, dest)
        .ok_or(MovementError::NoPath)?;
    if path.is_empty() {
        return Err(MovementError::NoPath);
    }

    if check_blockers {
        let blocked = snapshot
            .living_hostiles()
            .any(|h| path_intersects(&path, h.position, PATH_BLOCKER_PADDING));
        if blocked {
            return Err(MovementError::HostilesInPath);
        }
    }

    let projection = IsoProjection::new(snapshot.frame);
    let index = projection.last_on_screen_index(agent, &path);
    let node = path.nodes()[index];
    let (screen_x, screen_y) = projection.to_screen(agent, node);

    debug!(
        node_x = node.x,
        node_y = node.y,
        index,
        of = path.len(),
        "stepping along path"
    );
    move_character(
        input,
        snapshot,
        capability,
        config,
        screen_x,
        screen_y,
        Some(node),
    );

    Ok(())
}

/// Nudge the pointer to a random mid-screen position and force-move there.
///
/// Unsticks rotations whose casts keep landing on the same spot; the RNG is
/// seeded, so nudge sequences are reproducible.
pub fn random_shuffle(input: &mut dyn InputSink, rng: &mut ChaCha8Rng, frame: FrameSize) {
    let mid_x = (frame.width / 2).max(1);
    let mid_y = (frame.height / 2).max(1);
    let x = mid_x + rng.gen_range(0..mid_x) - mid_x / 2;
    let y = mid_y + rng.gen_range(0..mid_y) - mid_y / 2;

    input.move_pointer(x, y);
    input.press_binding(Binding::ForceMove);
    thread::sleep(INPUT_SETTLE);
}
