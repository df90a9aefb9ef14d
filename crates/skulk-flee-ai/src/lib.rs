//! Flee AI for SKULK.
//!
//! Implements the flee behavior: the per-tick decision function, the
//! periodic peek timer, and the orchestrator that applies decisions
//! through host capability traits. No ECS dependency — the host wires
//! these up to whatever owns the agent and animator.

pub mod behavior;
pub mod error;
pub mod fsm;
pub mod peek;
pub mod traits;

pub use skulk_core as core;

#[cfg(test)]
mod tests;
