//! Area-clear drivers built on the engagement loop.
//!
//! These provide the canonical selector (prioritize, then take the first
//! valid candidate inside the radius) and the clear-while-advancing routine
//! used to fight through a path.

use tracing::{debug, warn};

use skirmish_core::config::CombatConfig;
use skirmish_core::constants::PATHING_ARRIVAL_DISTANCE;
use skirmish_core::error::MovementError;
use skirmish_core::types::{Position, UnitId};
use skirmish_core::world::{Hostile, WorldSnapshot};

use crate::capability::Capability;
use crate::io::{CombatContext, InputSink, PathOracle};
use crate::movement::approach;
use crate::priority::sort_by_priority;
use crate::rotation::RotationStrategy;
use crate::sequence::{run_engagement_loop, EngageOutcome, SessionState};

/// Selector that keeps returning one identity while that hostile is alive.
pub fn single_target_selector(id: UnitId) -> impl FnMut(&WorldSnapshot) -> Option<UnitId> {
    move |snapshot| {
        snapshot
            .hostile_by_id(id)
            .filter(|h| h.is_alive())
            .map(|h| h.id)
    }
}

/// Whether a candidate is worth engaging at all: it must stand on a walkable
/// tile, and a ground-bound agent needs a resolvable path with no closed
/// door interposed. Prevents chasing "ghost" hostiles that exist in the data
/// but can never be reached.
fn is_valid_target(
    snapshot: &WorldSnapshot,
    pathing: &dyn PathOracle,
    capability: &Capability,
    hostile: &Hostile,
) -> bool {
    if !snapshot.grid.is_walkable(hostile.position) {
        return false;
    }

    if !capability.can_teleport {
        if pathing.path_to(snapshot, hostile.position).is_none() {
            return false;
        }
        if pathing
            .door_between(snapshot, snapshot.agent.position, hostile.position)
            .is_some()
        {
            return false;
        }
    }

    true
}

/// Kill everything matching `filter` within `radius` of `center`, highest
/// priority first.
pub fn clear_area(
    ctx: &mut CombatContext<'_>,
    config: &CombatConfig,
    strategy: &mut RotationStrategy,
    center: Position,
    radius: i32,
    filter: &dyn Fn(&Hostile) -> bool,
) -> EngageOutcome {
    let pathing = ctx.pathing;
    let policy = strategy.policy();
    let selector_config = config.clone();
    let skip_on_immunities = config.skip_on_immunities.clone();

    let mut selector = |snapshot: &WorldSnapshot| -> Option<UnitId> {
        let mut candidates: Vec<Hostile> = snapshot
            .living_hostiles()
            .filter(|h| filter(h))
            .cloned()
            .collect();

        let capability =
            Capability::derive(snapshot, &selector_config, policy.main_skill_range);
        sort_by_priority(
            &mut candidates,
            snapshot.agent.position,
            &snapshot.grid,
            &capability,
        );

        candidates
            .iter()
            .filter(|h| center.distance_to(h.position) <= radius)
            .find(|h| is_valid_target(snapshot, pathing, &capability, h))
            .map(|h| h.id)
    };

    let mut rotation = |input: &mut dyn InputSink, snapshot: &WorldSnapshot, target: &Hostile| {
        strategy.cast(input, snapshot, target)
    };

    let (_, outcome) = run_engagement_loop(
        ctx,
        config,
        &policy,
        &mut selector,
        &skip_on_immunities,
        &mut rotation,
        SessionState::new(),
    );
    outcome
}

/// `clear_area` centered on the agent's current position.
pub fn clear_around_agent(
    ctx: &mut CombatContext<'_>,
    config: &CombatConfig,
    strategy: &mut RotationStrategy,
    radius: i32,
    filter: &dyn Fn(&Hostile) -> bool,
) -> EngageOutcome {
    let center = ctx.world.current().agent.position;
    clear_area(ctx, config, strategy, center, radius, filter)
}

/// Fight toward `dest`: clear around the agent, take one path step, repeat.
///
/// Hostiles blocking the movement line are handled by widening the clear
/// radius and retrying; every other movement error propagates to the
/// caller.
pub fn clear_through_path(
    ctx: &mut CombatContext<'_>,
    config: &CombatConfig,
    strategy: &mut RotationStrategy,
    dest: Position,
    radius: i32,
    filter: &dyn Fn(&Hostile) -> bool,
) -> Result<(), MovementError> {
    loop {
        ctx.supervisor.pause_if_not_priority();

        let center = ctx.world.refresh().agent.position;
        clear_area(ctx, config, strategy, center, radius, filter);

        let snapshot = ctx.world.current().clone();
        if snapshot.agent.position.distance_to(dest) <= PATHING_ARRIVAL_DISTANCE {
            return Ok(());
        }

        let path = ctx
            .pathing
            .path_to(&snapshot, dest)
            .ok_or(MovementError::NoPath)?;
        if path.is_empty() {
            return Ok(());
        }

        // Advance one clear-radius worth of path per iteration; the next
        // iteration re-plans from wherever we actually ended up.
        let leg = (radius.max(1) as usize).min(path.len());
        let leg_dest = path.nodes()[leg - 1];

        let capability =
            Capability::derive(&snapshot, config, strategy.policy().main_skill_range);
        match approach(
            ctx.input,
            ctx.pathing,
            &snapshot,
            &capability,
            config,
            leg_dest,
            PATHING_ARRIVAL_DISTANCE,
            true,
        ) {
            Ok(()) => {}
            Err(MovementError::HostilesInPath) => {
                debug!("movement blocked by hostiles, clearing before retrying");
                let center = ctx.world.refresh().agent.position;
                let outcome = clear_area(ctx, config, strategy, center, radius + 5, filter);
                if !outcome.is_cleared() {
                    warn!(?outcome, "blocker clearing ended early");
                }
            }
            Err(error) => return Err(error),
        }
    }
}
