//! Built-in rotation strategies.
//!
//! The engine treats per-build rotations as external collaborators; these
//! two are the closed set shipped with it, selected by configuration. Both
//! conform to the single `cast(target) -> bool` contract the engagement loop
//! expects, where the return value reports whether this tick's action was
//! issued.

use std::thread;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skirmish_core::constants::KEY_BRACKET_DELAY;
use skirmish_core::enums::{Binding, MouseButton, RotationKind, SkillId};
use skirmish_core::types::UnitId;
use skirmish_core::world::{Hostile, WorldSnapshot};
use skirmish_geometry::IsoProjection;

use crate::capability::resolve_screen_range;
use crate::io::InputSink;
use crate::movement::random_shuffle;
use crate::sequence::EngagePolicy;

/// Casts the same spot often enough to warrant a pointer nudge.
const CONSECUTIVE_CAST_LIMIT: u32 = 2;

/// A tagged rotation strategy with its per-target cast bookkeeping.
pub struct RotationStrategy {
    kind: RotationKind,
    rng: ChaCha8Rng,
    last_target: Option<UnitId>,
    consecutive_casts: u32,
}

impl RotationStrategy {
    pub fn new(kind: RotationKind, seed: u64) -> Self {
        Self {
            kind,
            rng: ChaCha8Rng::seed_from_u64(seed),
            last_target: None,
            consecutive_casts: 0,
        }
    }

    pub fn kind(&self) -> RotationKind {
        self.kind
    }

    /// The engagement policy matching this strategy's reach and behavior.
    pub fn policy(&self) -> EngagePolicy {
        match self.kind {
            RotationKind::Bolt => EngagePolicy::ranged(),
            RotationKind::Strike => EngagePolicy::melee(),
        }
    }

    /// Perform this tick's attack against `target`. Returns whether an
    /// attack input was issued.
    pub fn cast(
        &mut self,
        input: &mut dyn InputSink,
        snapshot: &WorldSnapshot,
        target: &Hostile,
    ) -> bool {
        if self.last_target != Some(target.id) {
            self.last_target = Some(target.id);
            self.consecutive_casts = 0;
        }

        // Repeated casts at a stationary point tend to mean the clicks are
        // landing on nothing; shuffle and re-approach.
        if self.consecutive_casts >= CONSECUTIVE_CAST_LIMIT {
            random_shuffle(input, &mut self.rng, snapshot.frame);
            self.consecutive_casts = 0;
            return false;
        }

        // Ranged casts only reach targets inside the screen radius.
        if self.kind == RotationKind::Bolt {
            let distance = snapshot.agent.position.distance_to(target.position);
            if distance > resolve_screen_range(snapshot.agent.display) {
                return false;
            }
        }

        let projection = IsoProjection::new(snapshot.frame);
        let (screen_x, screen_y) =
            projection.to_screen(snapshot.agent.position, target.position);
        if !projection.on_screen(screen_x, screen_y) || projection.overlaps_hud(screen_y) {
            return false;
        }

        match self.kind {
            RotationKind::Bolt => {
                input.press_binding(Binding::SelectSkill(SkillId::Bolt));
                input.key_down(Binding::StandStill);
                thread::sleep(KEY_BRACKET_DELAY);
                input.click(MouseButton::Left, screen_x, screen_y);
                thread::sleep(KEY_BRACKET_DELAY);
                input.key_up(Binding::StandStill);
            }
            RotationKind::Strike => {
                input.click(MouseButton::Left, screen_x, screen_y);
                thread::sleep(KEY_BRACKET_DELAY);
            }
        }

        self.consecutive_casts += 1;
        true
    }
}
