//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Behavior mode, recomputed each tick from the situation.
///
/// There are no persisted transitions; the explicit set makes the
/// per-tick decision inspectable and testable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FleeMode {
    /// Target is out of range and the agent has no active path.
    #[default]
    Idle,
    /// Target is within the trigger distance; the agent is running (or
    /// about to be issued a destination).
    Fleeing,
    /// Target has left the trigger distance but the agent still holds an
    /// active path it is finishing off.
    Settling,
}

/// One-shot startup resolution status for a behavior instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BindState {
    /// Not yet resolved (freshly spawned).
    #[default]
    Unbound,
    /// Target and handles resolved; per-tick logic runs.
    Bound,
    /// Resolution failed. Terminal: the instance is permanently inert
    /// and is never re-resolved.
    Failed,
}
