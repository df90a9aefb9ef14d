//! Capability traits for the host-provided handles.
//!
//! The engine-owned agent and animator are injected contracts, so the
//! behavior runs against any host, or against mocks in tests.

use skulk_core::types::{Position, Velocity};

/// Name of the animator's continuous speed parameter.
pub const SPEED_PARAM: &str = "Speed";

/// Name of the animator's one-shot peek trigger.
pub const PEEK_TRIGGER: &str = "StartPeek";

/// A pathfinding agent that moves a character along computed paths.
pub trait PathAgent {
    /// A destination has been accepted but path computation has not
    /// finished yet.
    fn path_pending(&self) -> bool;

    /// An active path is held.
    fn has_path(&self) -> bool;

    /// Distance left to the current destination (0.0 without a path).
    fn remaining_distance(&self) -> f64;

    /// Radius within which the agent counts as arrived.
    fn stopping_distance(&self) -> f64;

    /// Current velocity.
    fn velocity(&self) -> Velocity;

    /// Route toward `destination`.
    fn set_destination(&mut self, destination: Position);
}

/// A navigable-surface query service.
pub trait NavSurface {
    /// Nearest valid point on the walkable surface within `radius` of
    /// `candidate`, or `None` if no such point exists.
    fn sample_position(&self, candidate: Position, radius: f64) -> Option<Position>;
}

/// An animation parameter sink.
pub trait AnimationSink {
    /// Write a named continuous float parameter.
    fn set_float(&mut self, name: &str, value: f64);

    /// Fire a named one-shot trigger.
    fn set_trigger(&mut self, name: &str);
}
