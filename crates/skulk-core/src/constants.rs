//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Flee behavior ---

/// How close the tracked target must be to trigger a flee (meters).
pub const DEFAULT_FLEE_DISTANCE: f64 = 10.0;

/// How far away the NPC tries to run when fleeing (meters).
pub const DEFAULT_FLEE_RANGE: f64 = 20.0;

/// Minimum seconds between peek animations while running.
pub const DEFAULT_MIN_PEEK_INTERVAL: f64 = 5.0;

/// Maximum seconds between peek animations while running.
pub const DEFAULT_MAX_PEEK_INTERVAL: f64 = 10.0;

/// Speed above which the NPC counts as moving (m/s).
/// Below this the peek timer is held re-randomized.
pub const MOVING_SPEED_THRESHOLD: f64 = 0.1;

// --- Navigation agent ---

/// Default agent run speed (m/s).
pub const DEFAULT_AGENT_SPEED: f64 = 4.0;

/// Default radius within which the agent counts as arrived (meters).
pub const DEFAULT_STOPPING_DISTANCE: f64 = 0.5;

/// Remaining distance below which an active path is discarded entirely.
/// The agent stops moving inside the stopping distance but keeps its path;
/// only reaching the actual destination point releases it.
pub const ARRIVAL_EPSILON: f64 = 0.05;

// --- Scene ---

/// Tag used to locate the tracked target entity at startup.
pub const PLAYER_TAG: &str = "Player";
