//! Commands sent from the host to the simulation.
//!
//! Commands are queued and applied at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// All possible host actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimCommand {
    /// Teleport the player entity (the tracked target).
    SetPlayerPosition { position: Position },
    /// Set time scale (1.0 = normal, 2.0 = double).
    SetTimeScale { scale: f64 },
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}
