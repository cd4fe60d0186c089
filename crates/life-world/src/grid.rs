//! 2D grid of cells with hard edges.

use crate::cell::Cell;
use life_core::{Error, GridConfig, Position, Result, Status, Transition};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;
use std::iter::FusedIterator;
use std::ops::Index;
use tracing::debug;

/// A seeded draw in `0..100` above this value starts the cell alive (~40%).
pub const ALIVE_DRAW_THRESHOLD: u32 = 60;

/// A fixed-size, non-wrapping grid. Cells are stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Allocate a `width x height` board and seed every cell from an owned
    /// RNG. The same arguments always produce the same board.
    ///
    /// # Panics
    /// If `width * height` overflows `usize`.
    pub fn initialize(width: usize, height: usize, seed: i64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed as u64);
        let grid = Self::build(width, height, |_| {
            if rng.gen_range(0..100u32) > ALIVE_DRAW_THRESHOLD {
                Status::Alive
            } else {
                Status::Dead
            }
        });

        debug!(
            width = grid.width,
            height = grid.height,
            seed,
            population = grid.population(),
            "Grid initialized"
        );
        grid
    }

    /// Create a grid from configuration
    pub fn from_config(config: &GridConfig) -> Self {
        Self::initialize(config.width, config.height, config.seed)
    }

    /// A board with every cell dead
    pub fn dead(width: usize, height: usize) -> Self {
        Self::build(width, height, |_| Status::Dead)
    }

    /// A dead board with the given positions alive
    pub fn from_alive<I>(width: usize, height: usize, alive: I) -> Result<Self>
    where
        I: IntoIterator<Item = Position>,
    {
        let mut grid = Self::dead(width, height);
        for pos in alive {
            grid.set_status(pos, Status::Alive)?;
        }
        Ok(grid)
    }

    /// Parse a board drawn with `#` (alive) and `.` (dead), row `y = 0` first.
    /// Blank lines are ignored; all rows must have the same length.
    pub fn parse(text: &str) -> Result<Self> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let width = rows.first().map_or(0, |row| row.chars().count());
        let mut alive = Vec::new();
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(Error::Parse(format!(
                    "row {y} has {} cells, expected {width}",
                    row.chars().count()
                )));
            }
            for (x, c) in row.chars().enumerate() {
                match c {
                    '#' => alive.push(Position::new(x, y)),
                    '.' => {}
                    other => {
                        return Err(Error::Parse(format!(
                            "unexpected {other:?} at {}",
                            Position::new(x, y)
                        )))
                    }
                }
            }
        }

        Self::from_alive(width, rows.len(), alive)
    }

    fn build<F>(width: usize, height: usize, mut status_at: F) -> Self
    where
        F: FnMut(Position) -> Status,
    {
        // An empty row set has no meaningful height.
        let height = if width == 0 { 0 } else { height };
        let len = width
            .checked_mul(height)
            .unwrap_or_else(|| panic!("grid of {width}x{height} cells overflows usize"));
        let mut cells = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                let pos = Position::new(x, y);
                cells.push(Cell::new(pos, status_at(pos)));
            }
        }

        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Zero whenever the width is zero
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    fn pos_to_index(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| pos.y * self.width + pos.x)
    }

    pub fn get(&self, pos: Position) -> Option<&Cell> {
        self.pos_to_index(pos).map(|i| &self.cells[i])
    }

    fn get_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        let index = self.pos_to_index(pos)?;
        Some(&mut self.cells[index])
    }

    fn out_of_bounds(&self, pos: Position) -> Error {
        Error::OutOfBounds {
            position: pos,
            width: self.width,
            height: self.height,
        }
    }

    /// Overwrite the committed status of one cell
    pub fn set_status(&mut self, pos: Position, status: Status) -> Result<()> {
        let err = self.out_of_bounds(pos);
        let cell = self.get_mut(pos).ok_or(err)?;
        cell.set_status(status);
        Ok(())
    }

    /// Number of live cells among the in-bounds Moore neighbors of `pos`
    pub fn alive_neighbors(&self, pos: Position) -> u8 {
        pos.neighbors(self.width, self.height)
            .filter(|&n| self[n].is_alive())
            .count() as u8
    }

    /// Evaluate one cell against the current board.
    ///
    /// # Panics
    /// If `pos` is outside the grid.
    pub fn evaluate(&mut self, pos: Position) -> Transition {
        let count = self.alive_neighbors(pos);
        self.cell_mut(pos).evaluate(count)
    }

    /// Commit one cell.
    ///
    /// # Panics
    /// If `pos` is outside the grid.
    pub fn commit(&mut self, pos: Position) {
        self.cell_mut(pos).commit();
    }

    fn cell_mut(&mut self, pos: Position) -> &mut Cell {
        let (width, height) = (self.width, self.height);
        match self.get_mut(pos) {
            Some(cell) => cell,
            None => panic!("position {pos} is outside a {width}x{height} grid"),
        }
    }

    /// Evaluate pass over every cell. Statuses are not touched, so every
    /// cell sees the board as it was at the start of the generation.
    pub fn evaluate_all(&mut self) {
        for index in 0..self.cells.len() {
            let count = self.alive_neighbors(self.cells[index].position());
            self.cells[index].evaluate(count);
        }
    }

    /// Commit pass over every cell. Returns `(births, deaths)`.
    pub fn commit_all(&mut self) -> (usize, usize) {
        let mut births = 0;
        let mut deaths = 0;
        for cell in self.begin_mut() {
            cell.commit();
            if cell.changed() {
                if cell.is_alive() {
                    births += 1;
                } else {
                    deaths += 1;
                }
            }
        }
        (births, deaths)
    }

    /// One full generation: the whole evaluate pass, then the whole commit pass
    pub fn step(&mut self) -> (usize, usize) {
        self.evaluate_all();
        self.commit_all()
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Cells flipped by the most recent commit
    pub fn changed_count(&self) -> usize {
        self.cells.iter().filter(|c| c.changed()).count()
    }

    /// Start a traversal over every cell, x fastest then y
    pub fn begin(&self) -> Cells<'_> {
        Cells {
            cells: &self.cells,
            next: 0,
        }
    }

    /// Mutable traversal in the same order as [`begin`](Self::begin)
    pub fn begin_mut(&mut self) -> CellsMut<'_> {
        CellsMut {
            inner: self.cells.iter_mut(),
        }
    }

    /// Positions of all live cells, in traversal order
    pub fn alive_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.begin().filter(|c| c.is_alive()).map(Cell::position)
    }
}

impl Index<Position> for Grid {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Cell {
        match self.get(pos) {
            Some(cell) => cell,
            None => panic!(
                "position {pos} is outside a {}x{} grid",
                self.width, self.height
            ),
        }
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Cell;
    type IntoIter = Cells<'a>;

    fn into_iter(self) -> Cells<'a> {
        self.begin()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width.max(1)) {
            for cell in row {
                f.write_str(if cell.is_alive() { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A single traversal over a grid. Each call to [`Grid::begin`] gives an
/// independent cursor; after the last cell it keeps returning `None`.
#[derive(Debug, Clone)]
pub struct Cells<'a> {
    cells: &'a [Cell],
    next: usize,
}

impl<'a> Iterator for Cells<'a> {
    type Item = &'a Cell;

    fn next(&mut self) -> Option<&'a Cell> {
        let cell = self.cells.get(self.next)?;
        self.next += 1;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cells.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Cells<'_> {}
impl FusedIterator for Cells<'_> {}

/// Mutable counterpart of [`Cells`]
#[derive(Debug)]
pub struct CellsMut<'a> {
    inner: std::slice::IterMut<'a, Cell>,
}

impl<'a> Iterator for CellsMut<'a> {
    type Item = &'a mut Cell;

    fn next(&mut self) -> Option<&'a mut Cell> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for CellsMut<'_> {}
impl FusedIterator for CellsMut<'_> {}
