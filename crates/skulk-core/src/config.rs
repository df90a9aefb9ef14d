//! Authoring-facing behavior configuration.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Tunable scalars for one flee behavior instance.
///
/// Values are trusted as authored: there is no validation, and
/// `min_peek_interval > max_peek_interval` is accepted (the interval
/// sampler swaps a reversed range rather than rejecting it).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FleeConfig {
    /// How close the target must be to trigger a flee (meters).
    pub flee_distance: f64,
    /// How far away the NPC tries to run (meters). Also the snap radius
    /// for the navigation surface query.
    pub flee_range: f64,
    /// Minimum seconds between peeks while running.
    pub min_peek_interval: f64,
    /// Maximum seconds between peeks while running.
    pub max_peek_interval: f64,
}

impl Default for FleeConfig {
    fn default() -> Self {
        Self {
            flee_distance: DEFAULT_FLEE_DISTANCE,
            flee_range: DEFAULT_FLEE_RANGE,
            min_peek_interval: DEFAULT_MIN_PEEK_INTERVAL,
            max_peek_interval: DEFAULT_MAX_PEEK_INTERVAL,
        }
    }
}
