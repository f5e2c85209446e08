//! Trait seams for the external collaborators the engine drives.
//!
//! The engine consumes these as abstract capabilities and never implements
//! them itself: snapshot refresh, pathfinding, synthetic input, and the
//! cooperative preemption check all belong to the host process.

use skirmish_core::enums::{Binding, MouseButton};
use skirmish_core::types::{ObstacleId, Path, Position};
use skirmish_core::world::WorldSnapshot;

/// Source of consistent world observations.
pub trait WorldSource {
    /// The most recent snapshot, without forcing a refresh.
    fn current(&self) -> &WorldSnapshot;

    /// Block until a fresh, internally consistent snapshot is available and
    /// return it.
    fn refresh(&mut self) -> &WorldSnapshot;
}

/// Pathfinding oracle over the current walkability grid.
pub trait PathOracle {
    /// Route from the agent's position to `dest`, or `None` when no path
    /// exists.
    fn path_to(&self, snapshot: &WorldSnapshot, dest: Position) -> Option<Path>;

    /// Whether a closed door interposes between the two positions; returns
    /// the door's identity when one does.
    fn door_between(
        &self,
        snapshot: &WorldSnapshot,
        from: Position,
        to: Position,
    ) -> Option<ObstacleId>;
}

/// Synthetic pointer/keyboard dispatch.
pub trait InputSink {
    fn click(&mut self, button: MouseButton, x: i32, y: i32);
    fn move_pointer(&mut self, x: i32, y: i32);
    fn press_binding(&mut self, binding: Binding);
    fn key_down(&mut self, binding: Binding);
    fn key_up(&mut self, binding: Binding);
}

/// Cooperative preemption point.
pub trait Supervisor {
    /// Called at the top of every engagement-loop iteration. Blocks while a
    /// higher-priority behavior owns the agent and returns once this loop
    /// may proceed.
    fn pause_if_not_priority(&mut self);
}

/// The collaborator bundle threaded through engine entry points.
pub struct CombatContext<'a> {
    pub world: &'a mut dyn WorldSource,
    pub pathing: &'a dyn PathOracle,
    pub input: &'a mut dyn InputSink,
    pub supervisor: &'a mut dyn Supervisor,
}
