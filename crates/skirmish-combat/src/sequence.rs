//! The engagement loop.
//!
//! `SELECTING → VALIDATING → ENGAGING`, repeated until the selector reports
//! nothing left to kill or a gate ends the engagement. The loop consumes one
//! snapshot per iteration and yields to the supervisor before doing any
//! work, so higher-priority behaviors can preempt it between ticks.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use skirmish_core::config::CombatConfig;
use skirmish_core::constants::{
    APPROACH_MELEE_RANGE, BLOCKER_CLEAR_RANGE, DEFAULT_ARRIVAL_DISTANCE,
    DEFAULT_MAIN_SKILL_RANGE, IMMEDIATE_THREAT_RANGE, MAX_STALL_ATTEMPTS,
    NEARBY_REACHABILITY_RANGE, TARGET_TIMEOUT,
};
use skirmish_core::enums::Element;
use skirmish_core::error::{GateReason, MovementError};
use skirmish_core::types::UnitId;
use skirmish_core::world::{Hostile, WorldSnapshot};

use crate::capability::Capability;
use crate::io::{CombatContext, InputSink, PathOracle};
use crate::movement::approach;
use crate::retarget::retarget_if_blocked;

/// A rotation callback: perform this tick's attack, report whether an action
/// was issued. The return value never terminates the loop by itself.
pub type RotationFn<'a> = dyn FnMut(&mut dyn InputSink, &WorldSnapshot, &Hostile) -> bool + 'a;

/// A selector callback: pick the next target from the snapshot, or `None`
/// when nothing is left to kill.
pub type SelectorFn<'a> = dyn FnMut(&WorldSnapshot) -> Option<UnitId> + 'a;

/// Tuning for the approach-style (melee) loop shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApproachPolicy {
    /// Close enough to swing; wider than contact range to absorb target
    /// drift between snapshots.
    pub melee_range: i32,
    /// Hostiles at or inside this range are engaged before repositioning.
    pub immediate_threat_range: i32,
    /// Radius scanned for blockers after a failed movement step.
    pub blocker_clear_range: i32,
    /// Consecutive non-progress attempts before the loop gives up.
    pub max_stall_attempts: u32,
}

impl Default for ApproachPolicy {
    fn default() -> Self {
        Self {
            melee_range: APPROACH_MELEE_RANGE,
            immediate_threat_range: IMMEDIATE_THREAT_RANGE,
            blocker_clear_range: BLOCKER_CLEAR_RANGE,
            max_stall_attempts: MAX_STALL_ATTEMPTS,
        }
    }
}

/// How an engagement loop run behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagePolicy {
    /// Main-attack range used for capability derivation and prioritization.
    pub main_skill_range: i32,
    /// Range fed to the retargeting heuristic; zero disables retargeting.
    pub retarget_range: i32,
    /// Longest one target identity may stay selected.
    pub target_timeout: Duration,
    /// Present for builds that must close distance themselves.
    pub approach: Option<ApproachPolicy>,
}

impl EngagePolicy {
    /// Stationary ranged shape: retargets around blockers, never approaches.
    pub fn ranged() -> Self {
        Self {
            main_skill_range: DEFAULT_MAIN_SKILL_RANGE,
            retarget_range: DEFAULT_MAIN_SKILL_RANGE,
            target_timeout: TARGET_TIMEOUT,
            approach: None,
        }
    }

    /// Melee shape: closes distance and clears blockers itself, so the
    /// retargeting heuristic is disabled.
    pub fn melee() -> Self {
        Self {
            main_skill_range: 1,
            retarget_range: 0,
            target_timeout: TARGET_TIMEOUT,
            approach: Some(ApproachPolicy::default()),
        }
    }
}

/// Per-run engagement bookkeeping, passed into and returned from the loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionState {
    /// Identity selected on the previous tick.
    pub last_target: Option<UnitId>,
    /// When that identity was first selected.
    pub target_first_seen: Option<Instant>,
    /// Consecutive approach attempts without progress.
    pub stall_attempts: u32,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record this tick's target, resetting the clock and the stall counter
    /// when the identity changed.
    pub fn note_target(&mut self, id: UnitId, now: Instant) {
        if self.last_target != Some(id) {
            self.last_target = Some(id);
            self.target_first_seen = Some(now);
            self.stall_attempts = 0;
        }
    }

    /// Whether the current identity has been selected for longer than
    /// `timeout`.
    pub fn timed_out(&self, now: Instant, timeout: Duration) -> bool {
        match self.target_first_seen {
            Some(first_seen) => now.duration_since(first_seen) > timeout,
            None => false,
        }
    }
}

/// How an engagement loop run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngageOutcome {
    /// The selector reported no target: nothing left to kill.
    Cleared,
    /// A validation gate rejected the target; stale targets are not retried.
    GateFailed { target: UnitId, reason: GateReason },
    /// The same identity stayed selected past the timeout bound.
    TargetTimeout { target: UnitId },
    /// The approach retry ceiling was hit without progress.
    Stalled { target: UnitId },
}

impl EngageOutcome {
    pub fn is_cleared(&self) -> bool {
        matches!(self, EngageOutcome::Cleared)
    }
}

/// Pre-engagement validation gates.
///
/// Reachability (walkable tile, resolvable path, no closed door) applies to
/// nearby targets only, so long-range selection is not disturbed by stale
/// far-field data. Teleport-capable agents skip the path and door gates.
pub fn pre_engage_gates(
    snapshot: &WorldSnapshot,
    pathing: &dyn PathOracle,
    capability: &Capability,
    target: &Hostile,
    skip_on_immunities: &[Element],
) -> Result<(), GateReason> {
    if !target.is_alive() {
        return Err(GateReason::TargetDead);
    }

    let agent = snapshot.agent.position;
    if agent.distance_to(target.position) <= NEARBY_REACHABILITY_RANGE {
        if !snapshot.grid.is_walkable(target.position) {
            return Err(GateReason::OffGridTile);
        }
        if !capability.can_teleport {
            if pathing.path_to(snapshot, target.position).is_none() {
                return Err(GateReason::NoPath);
            }
            if pathing
                .door_between(snapshot, agent, target.position)
                .is_some()
            {
                return Err(GateReason::DoorInTheWay);
            }
        }
    }

    for element in skip_on_immunities {
        if target.is_immune(*element) {
            return Err(GateReason::Immune(*element));
        }
    }

    Ok(())
}

/// Run the engagement loop until the selector is exhausted or a gate ends
/// it.
///
/// The session is taken and returned by value so callers can inspect (and
/// tests can fabricate) the per-target bookkeeping without reaching into the
/// loop.
pub fn run_engagement_loop(
    ctx: &mut CombatContext<'_>,
    config: &CombatConfig,
    policy: &EngagePolicy,
    selector: &mut SelectorFn<'_>,
    skip_on_immunities: &[Element],
    rotation: &mut RotationFn<'_>,
    mut session: SessionState,
) -> (SessionState, EngageOutcome) {
    loop {
        ctx.supervisor.pause_if_not_priority();

        let snapshot = ctx.world.refresh().clone();

        let Some(target_id) = selector(&snapshot) else {
            return (session, EngageOutcome::Cleared);
        };

        let Some(mut target) = snapshot.hostile_by_id(target_id).cloned() else {
            // Transient miss: the identity vanished between selection and
            // resolution. Retry next tick without touching the clock.
            debug!(target = target_id.0, "selected hostile missing from snapshot");
            continue;
        };

        let capability = Capability::derive(&snapshot, config, policy.main_skill_range);

        if let Some(substitute) = retarget_if_blocked(
            &snapshot,
            ctx.pathing,
            &capability,
            &target,
            policy.retarget_range,
        ) {
            debug!(
                from = target.id.0,
                to = substitute.id.0,
                "retargeted to blocking hostile"
            );
            target = substitute;
        }

        let now = Instant::now();
        session.note_target(target.id, now);

        if let Err(reason) = pre_engage_gates(
            &snapshot,
            ctx.pathing,
            &capability,
            &target,
            skip_on_immunities,
        ) {
            warn!(target = target.id.0, %reason, "engagement ended: gate failed");
            return (
                session,
                EngageOutcome::GateFailed {
                    target: target.id,
                    reason,
                },
            );
        }

        if session.timed_out(now, policy.target_timeout) {
            warn!(target = target.id.0, "engagement ended: target timeout");
            return (session, EngageOutcome::TargetTimeout { target: target.id });
        }

        if let Some(approach_policy) = &policy.approach {
            let distance = snapshot.agent.position.distance_to(target.position);
            if distance > approach_policy.melee_range {
                // Something already close enough to be dangerous gets hit
                // first; no point walking away from it.
                if engage_nearby(
                    ctx.input,
                    ctx.pathing,
                    &snapshot,
                    &capability,
                    skip_on_immunities,
                    rotation,
                    approach_policy.immediate_threat_range,
                ) {
                    session.stall_attempts = 0;
                    continue;
                }

                // Blockers are our own problem here (engage_nearby above and
                // below), so the movement-level blocker check stays off.
                match approach(
                    ctx.input,
                    ctx.pathing,
                    &snapshot,
                    &capability,
                    config,
                    target.position,
                    DEFAULT_ARRIVAL_DISTANCE,
                    false,
                ) {
                    Ok(()) => {
                        session.stall_attempts = 0;
                    }
                    Err(error) => {
                        if error != MovementError::HostilesInPath {
                            debug!(%error, "approach step failed");
                        }
                        // Clear whatever is in the way, slightly wider than
                        // the immediate-threat radius.
                        if engage_nearby(
                            ctx.input,
                            ctx.pathing,
                            &snapshot,
                            &capability,
                            skip_on_immunities,
                            rotation,
                            approach_policy.blocker_clear_range,
                        ) {
                            session.stall_attempts = 0;
                        } else {
                            session.stall_attempts += 1;
                        }
                    }
                }

                if session.stall_attempts >= approach_policy.max_stall_attempts {
                    warn!(
                        target = target.id.0,
                        attempts = session.stall_attempts,
                        "engagement ended: no approach progress"
                    );
                    return (session, EngageOutcome::Stalled { target: target.id });
                }
                continue;
            }

            let _ = rotation(ctx.input, &snapshot, &target);
            session.stall_attempts = 0;
            continue;
        }

        let _ = rotation(ctx.input, &snapshot, &target);
    }
}

/// Engage the closest living hostile within `max_distance`, if it passes the
/// gates. Returns whether an attack was issued.
fn engage_nearby(
    input: &mut dyn InputSink,
    pathing: &dyn PathOracle,
    snapshot: &WorldSnapshot,
    capability: &Capability,
    skip_on_immunities: &[Element],
    rotation: &mut RotationFn<'_>,
    max_distance: i32,
) -> bool {
    let agent = snapshot.agent.position;
    let mut closest: Option<(&Hostile, i32)> = None;
    for hostile in snapshot.living_hostiles() {
        let distance = agent.distance_to(hostile.position);
        if distance > max_distance {
            continue;
        }
        match closest {
            Some((_, best)) if distance >= best => {}
            _ => closest = Some((hostile, distance)),
        }
    }

    let Some((hostile, _)) = closest else {
        return false;
    };

    if pre_engage_gates(snapshot, pathing, capability, hostile, skip_on_immunities).is_err() {
        return false;
    }

    rotation(input, snapshot, hostile)
}
