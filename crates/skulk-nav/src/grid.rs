//! Walkable-cell grid over the XY plane.

use serde::{Deserialize, Serialize};

use skulk_core::types::Position;
use skulk_flee_ai::traits::NavSurface;

/// Axis-aligned grid of square cells at a fixed surface height.
///
/// Cells are individually walkable or blocked; everything outside the
/// grid is non-walkable. This is the simulation's stand-in for a baked
/// navigation mesh: good enough to answer the sampling query the flee
/// behavior needs, deliberately nothing more.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalkableGrid {
    width: i32,
    height: i32,
    cell_size: f64,
    /// World coordinates of the grid's minimum (south-west) corner.
    min_x: f64,
    min_y: f64,
    /// Height of the walkable surface.
    surface_z: f64,
    blocked: Vec<bool>,
}

impl WalkableGrid {
    /// Fully walkable grid of `width` x `height` cells centered on the
    /// origin, with the surface at z = 0.
    pub fn new(width: u32, height: u32, cell_size: f64) -> Self {
        assert!(width > 0 && height > 0, "grid must be non-empty");
        assert!(cell_size > 0.0, "cell_size must be > 0");
        let width = width as i32;
        let height = height as i32;
        Self {
            width,
            height,
            cell_size,
            min_x: -(width as f64 * cell_size) / 2.0,
            min_y: -(height as f64 * cell_size) / 2.0,
            surface_z: 0.0,
            blocked: vec![false; (width * height) as usize],
        }
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    pub fn set_blocked(&mut self, x: i32, y: i32, blocked: bool) {
        if let Some(idx) = self.idx(x, y) {
            self.blocked[idx] = blocked;
        }
    }

    /// Block every cell (useful for constructing unreachable scenarios).
    pub fn block_all(&mut self) {
        self.blocked.fill(true);
    }

    pub fn is_walkable_at(&self, p: &Position) -> bool {
        let (cx, cy) = self.world_to_cell(p);
        self.idx(cx, cy).is_some_and(|idx| !self.blocked[idx])
    }

    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some((y * self.width + x) as usize)
    }

    /// Cell coordinates containing `p`, unclamped (may be out of bounds).
    fn world_to_cell(&self, p: &Position) -> (i32, i32) {
        (
            ((p.x - self.min_x) / self.cell_size).floor() as i32,
            ((p.y - self.min_y) / self.cell_size).floor() as i32,
        )
    }

    fn cell_center(&self, x: i32, y: i32) -> Position {
        Position::new(
            self.min_x + (x as f64 + 0.5) * self.cell_size,
            self.min_y + (y as f64 + 0.5) * self.cell_size,
            self.surface_z,
        )
    }
}

impl NavSurface for WalkableGrid {
    /// Nearest walkable point within `radius` of `candidate`.
    ///
    /// A candidate inside a walkable cell is returned as-is, clamped to
    /// the surface height. Otherwise the cells intersecting the radius
    /// are scanned and the nearest walkable cell center wins, with ties
    /// broken by scan order (south to north, west to east) so results
    /// are deterministic.
    fn sample_position(&self, candidate: Position, radius: f64) -> Option<Position> {
        let (cx, cy) = self.world_to_cell(&candidate);
        if self.idx(cx, cy).is_some_and(|idx| !self.blocked[idx]) {
            return Some(Position::new(candidate.x, candidate.y, self.surface_z));
        }

        let reach = (radius / self.cell_size).ceil() as i32;
        let mut best: Option<(f64, Position)> = None;
        for y in (cy - reach)..=(cy + reach) {
            for x in (cx - reach)..=(cx + reach) {
                let Some(idx) = self.idx(x, y) else { continue };
                if self.blocked[idx] {
                    continue;
                }
                let center = self.cell_center(x, y);
                let dist = center.range_to(&candidate);
                if dist > radius {
                    continue;
                }
                if best.is_none_or(|(d, _)| dist < d) {
                    best = Some((dist, center));
                }
            }
        }
        best.map(|(_, p)| p)
    }
}
