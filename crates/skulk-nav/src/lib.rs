//! Navigation surface backend for SKULK.
//!
//! Provides the walkable-cell grid that answers the "nearest valid point
//! within a radius" query the flee behavior relies on.

pub mod grid;

pub use grid::WalkableGrid;
pub use skulk_core as core;
