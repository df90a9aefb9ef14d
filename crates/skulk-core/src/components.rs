//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Behavior logic lives in systems, not components.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::FleeConfig;
use crate::enums::{BindState, FleeMode};
use crate::types::{Position, Velocity};

/// Scene-graph label used for lookup-by-tag resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag(pub String);

/// Marker for the tracked player entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Stable identifier assigned to an NPC at spawn (for snapshots and events).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NpcId(pub u32);

/// Flee behavior state attached to an NPC.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleeAi {
    pub config: FleeConfig,
    /// Mode decided on the most recent tick.
    pub mode: FleeMode,
    /// Startup resolution status. `Failed` disables the instance for good.
    pub bind_state: BindState,
    /// Seconds until the next peek while moving.
    pub peek_timer_secs: f64,
}

/// Built-in pathfinding agent state.
///
/// Stands in for the host engine's agent: accepts destinations, steers
/// toward them in a straight line, and exposes the flags the flee
/// behavior reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavAgentState {
    /// Current destination, if a path is held.
    pub destination: Option<Position>,
    /// Radius within which the agent counts as arrived (meters).
    pub stopping_distance: f64,
    /// Run speed (m/s).
    pub max_speed: f64,
    /// Current velocity, set by the steering system.
    pub velocity: Velocity,
    /// A destination was accepted this tick but steering has not yet
    /// processed it.
    pub path_pending: bool,
    /// An active path is held (not yet released at its endpoint).
    pub has_path: bool,
    /// Distance left to the destination (0.0 when no path is held).
    pub remaining_distance: f64,
}

/// Animation parameter sink.
///
/// Records the named float parameters and one-tick trigger pulses the
/// behavior writes; nothing here plays animations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnimatorState {
    /// Continuous parameters, e.g. "Speed".
    pub floats: HashMap<String, f64>,
    /// Triggers fired this tick; cleared at the start of the next.
    pub triggers: Vec<String>,
}
