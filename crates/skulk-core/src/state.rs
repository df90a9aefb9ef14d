//! Simulation snapshot — the complete visible state produced each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{BindState, FleeMode};
use crate::events::AnimationEvent;
use crate::types::{Position, SimTime};

/// Complete simulation state emitted after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    pub paused: bool,
    /// Position of the tracked player entity, if one exists.
    pub player: Option<Position>,
    pub npcs: Vec<NpcView>,
    /// Animation events fired during this tick.
    pub animation_events: Vec<AnimationEvent>,
}

/// One NPC as visible to the host.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NpcView {
    pub npc_id: u32,
    pub position: Position,
    /// Agent speed (m/s).
    pub speed: f64,
    /// Value of the animator's continuous "Speed" parameter.
    pub anim_speed: f64,
    pub mode: FleeMode,
    pub bind_state: BindState,
    /// Current agent destination, if a path is held.
    pub destination: Option<Position>,
    /// Distance left to the destination (0.0 when no path is held).
    pub remaining_distance: f64,
}
