//! Combat decision engine.
//!
//! Drives a controlled agent through target selection, validation and
//! engagement against the hostiles visible in externally-refreshed world
//! snapshots. The engine itself never touches the game process: everything
//! flows through the collaborator traits in [`io`].
//!
//! Execution is a single logical thread: one snapshot is consumed per tick,
//! with a cooperative preemption point at the top of every engagement-loop
//! iteration.

pub use skirmish_core as core;
pub use skirmish_geometry as geometry;

pub mod capability;
pub mod clear;
pub mod io;
pub mod movement;
pub mod priority;
pub mod retarget;
pub mod rotation;
pub mod rush;
pub mod sequence;

pub use capability::Capability;
pub use io::CombatContext;
pub use priority::sort_by_priority;
pub use retarget::retarget_if_blocked;
pub use rotation::RotationStrategy;
pub use sequence::{run_engagement_loop, EngageOutcome, EngagePolicy, SessionState};
