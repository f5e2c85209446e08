//! Hostile prioritization.
//!
//! Reorders a candidate list in place by a capability-dependent multi-key
//! comparator. Performance invariant: distance and line-of-sight are
//! evaluated once per candidate in a single up-front pass, and comparators
//! only read the side tables. Melee tallying for strategy selection happens
//! in that same pass.

use std::cmp::Ordering;
use std::collections::HashMap;

use skirmish_core::types::{Position, UnitId};
use skirmish_core::world::{Hostile, WalkGrid, WorldSnapshot};
use skirmish_geometry::line_of_sight;

use crate::capability::Capability;

/// Sort hostiles into engagement order, stably and in place.
///
/// Three comparator strategies, selected once per call:
/// - teleport-capable: tier rank, then raisers first, then distance;
/// - melee-dominant (main skill range within melee range, or at least two
///   candidates already in melee range): line-of-sight first, then distance,
///   ignoring tier — a surrounded melee agent clears the closest threat
///   regardless of what it is;
/// - default: line-of-sight first, then tier rank, raisers, distance.
pub fn sort_by_priority(
    hostiles: &mut [Hostile],
    agent: Position,
    grid: &WalkGrid,
    capability: &Capability,
) {
    if hostiles.len() < 2 {
        return;
    }

    let mut distance_by_id: HashMap<UnitId, i32> = HashMap::with_capacity(hostiles.len());
    let mut rank_by_id: HashMap<UnitId, u8> = HashMap::with_capacity(hostiles.len());
    let mut raiser_by_id: HashMap<UnitId, u8> = HashMap::with_capacity(hostiles.len());
    let mut los_by_id: HashMap<UnitId, bool> = HashMap::new();
    let mut melee_count = 0usize;

    for hostile in hostiles.iter() {
        let distance = agent.distance_to(hostile.position);
        distance_by_id.insert(hostile.id, distance);
        rank_by_id.insert(hostile.id, hostile.tier.rank());
        raiser_by_id.insert(hostile.id, if hostile.raiser { 0 } else { 1 });
        if !capability.can_teleport {
            los_by_id.insert(hostile.id, line_of_sight(grid, agent, hostile.position));
            if distance <= capability.melee_range {
                melee_count += 1;
            }
        }
    }

    fn by_distance(a: &Hostile, b: &Hostile, distances: &HashMap<UnitId, i32>) -> Ordering {
        distances[&a.id].cmp(&distances[&b.id])
    }

    fn by_tier_then_distance(
        a: &Hostile,
        b: &Hostile,
        ranks: &HashMap<UnitId, u8>,
        raisers: &HashMap<UnitId, u8>,
        distances: &HashMap<UnitId, i32>,
    ) -> Ordering {
        ranks[&a.id]
            .cmp(&ranks[&b.id])
            .then_with(|| raisers[&a.id].cmp(&raisers[&b.id]))
            .then_with(|| by_distance(a, b, distances))
    }

    fn by_line_of_sight(a: &Hostile, b: &Hostile, los: &HashMap<UnitId, bool>) -> Ordering {
        // In-sight candidates come first.
        los[&b.id].cmp(&los[&a.id])
    }

    // Teleport: closest of the highest tier, sight irrelevant.
    if capability.can_teleport {
        hostiles.sort_by(|a, b| {
            by_tier_then_distance(a, b, &rank_by_id, &raiser_by_id, &distance_by_id)
        });
        return;
    }

    // Melee or surrounded: closest in sight, whatever it is.
    if capability.main_skill_range <= capability.melee_range || melee_count >= 2 {
        hostiles.sort_by(|a, b| {
            by_line_of_sight(a, b, &los_by_id).then_with(|| by_distance(a, b, &distance_by_id))
        });
        return;
    }

    // Default: closest of the highest tier in sight.
    hostiles.sort_by(|a, b| {
        by_line_of_sight(a, b, &los_by_id)
            .then_with(|| by_tier_then_distance(a, b, &rank_by_id, &raiser_by_id, &distance_by_id))
    });
}

/// Whether any living corpse-raiser stands within `max_range` of the agent.
pub fn has_raiser_nearby(snapshot: &WorldSnapshot, max_range: i32) -> bool {
    snapshot
        .living_hostiles()
        .filter(|h| h.raiser)
        .any(|h| snapshot.agent.position.distance_to(h.position) <= max_range)
}
