//! Retargeting around blockers.
//!
//! When the chosen target sits beyond the main skill's reach and another
//! hostile physically blocks the way, it is usually faster to kill the
//! blocker first. This heuristic detects that situation and proposes the
//! substitute.

use skirmish_core::constants::PATH_BLOCKER_PADDING;
use skirmish_core::world::{Hostile, WorldSnapshot};
use skirmish_geometry::{line_of_sight, path_intersects, segment_near_point};

use crate::capability::Capability;
use crate::io::PathOracle;

/// Substitute a closer visible hostile when `target` is out of range and
/// blocked. Returns `None` when the target should be kept.
///
/// Short-circuits to "no change" when the agent can teleport (blocking is
/// irrelevant without ground-path constraints), when `retarget_range` is
/// non-positive, or when the target is already within range.
///
/// "Blocked" holds when either independent test fires:
/// 1. another living hostile strictly closer than the target lies within
///    padding of the straight agent→target line, or
/// 2. another living hostile lies within padding of the traversable path to
///    the target (skipped when no path exists).
pub fn retarget_if_blocked(
    snapshot: &WorldSnapshot,
    pathing: &dyn PathOracle,
    capability: &Capability,
    target: &Hostile,
    retarget_range: i32,
) -> Option<Hostile> {
    if capability.can_teleport || retarget_range <= 0 {
        return None;
    }

    let agent = snapshot.agent.position;
    let target_distance = agent.distance_to(target.position);
    if target_distance < retarget_range {
        return None;
    }

    let mut blocked = snapshot.hostiles.iter().any(|candidate| {
        candidate.id != target.id
            && candidate.is_alive()
            && agent.distance_to(candidate.position) < target_distance
            && segment_near_point(
                agent,
                target.position,
                candidate.position,
                PATH_BLOCKER_PADDING,
            )
    });

    if !blocked {
        if let Some(path) = pathing.path_to(snapshot, target.position) {
            blocked = snapshot.hostiles.iter().any(|candidate| {
                candidate.id != target.id
                    && candidate.is_alive()
                    && path_intersects(&path, candidate.position, PATH_BLOCKER_PADDING)
            });
        }
    }

    if !blocked {
        return None;
    }

    // Pick the closest other living hostile the agent can actually see. If
    // nothing qualifies, stick with the unreachable target rather than
    // attacking nothing.
    let mut closest: Option<(&Hostile, i32)> = None;
    for candidate in &snapshot.hostiles {
        if candidate.id == target.id || !candidate.is_alive() {
            continue;
        }
        if !line_of_sight(&snapshot.grid, agent, candidate.position) {
            continue;
        }
        let distance = agent.distance_to(candidate.position);
        match closest {
            Some((_, best)) if distance >= best => {}
            _ => closest = Some((candidate, distance)),
        }
    }

    closest.map(|(hostile, _)| hostile.clone())
}
