//! Events emitted by the simulation for host-side feedback.

use serde::{Deserialize, Serialize};

/// Animation events surfaced alongside each snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AnimationEvent {
    /// An NPC fired its periodic peek trigger while running.
    PeekTriggered { npc_id: u32, tick: u64 },
}
