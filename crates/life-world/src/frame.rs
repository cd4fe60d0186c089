//! Redraw bookkeeping for board consumers.

use crate::grid::Grid;
use life_core::Position;

/// Tracks which cells a renderer has to repaint.
///
/// The first observation covers the whole board; after that only cells
/// whose last commit flipped them are reported.
#[derive(Debug, Default)]
pub struct Frame {
    painted: bool,
    frames: u64,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames observed so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Positions to repaint for the current board
    pub fn observe(&mut self, grid: &Grid) -> Vec<Position> {
        let full = !self.painted;
        self.painted = true;
        self.frames += 1;

        grid.begin()
            .filter(|cell| full || cell.changed())
            .map(|cell| cell.position())
            .collect()
    }

    /// Force the next observation to repaint everything
    pub fn invalidate(&mut self) {
        self.painted = false;
    }
}
