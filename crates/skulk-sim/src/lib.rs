//! Simulation host for SKULK.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate, and
//! produces SimSnapshots. Completely headless, enabling deterministic
//! testing of the flee behavior end to end.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use skulk_core as core;
