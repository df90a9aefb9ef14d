//! Per-tick simulation systems, run in a fixed order by the engine:
//! bind, steering, flee, movement, then snapshot.

pub mod bind;
pub mod flee;
pub mod movement;
pub mod snapshot;
pub mod steering;
