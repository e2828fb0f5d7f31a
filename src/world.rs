use std::fmt;

use thiserror::Error;

use crate::cell::Cell;

/// Side length of the observable window, in cells. This matches the 8x8 LED matrix.
pub const WINDOW: usize = 8;

/// Side length of the world used unless told otherwise, leaving a border 2 cells wide around the
/// window.
pub const DEFAULT_SIZE: usize = 12;

/// Largest side length a world may have
pub const MAX_SIZE: usize = 4096;

/// A row-major `WINDOW x WINDOW` block of cells
pub type Seed = [Cell; WINDOW * WINDOW];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorldError {
    #[error("World size {size} must be even so the window can be centered")]
    OddSize { size: usize },

    #[error("World size {size} is smaller than the 8x8 window")]
    TooSmall { size: usize },

    #[error("World size {size} is larger than the maximum of 4096")]
    TooLarge { size: usize },
}

/// A square world of `size x size` cells, with an 8x8 window at its center.
///
/// Cells outside `[0, size)` do not exist: the edges are neither wrapped nor padded, so a cell on
/// the edge simply has fewer neighbours.
#[derive(Debug, Clone)]
pub struct World {
    /// Side length
    size: usize,

    /// The current generation. Only read during a step.
    cur: Vec<Cell>,

    /// Scratch space for the next generation. Swapped with `cur` after each step.
    next: Vec<Cell>,
}

impl Default for World {
    fn default() -> Self {
        Self::with_size(DEFAULT_SIZE)
    }
}

impl World {
    /// Create an all-dead world of `size x size` cells.
    pub fn new(size: usize) -> Result<Self, WorldError> {
        if size < WINDOW {
            return Err(WorldError::TooSmall { size });
        }

        if size % 2 != 0 {
            return Err(WorldError::OddSize { size });
        }

        if size > MAX_SIZE || size.checked_mul(size).is_none() {
            return Err(WorldError::TooLarge { size });
        }

        Ok(Self::with_size(size))
    }

    fn with_size(size: usize) -> Self {
        Self {
            size,
            cur: vec![Cell::Dead; size * size],
            next: vec![Cell::Dead; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Width of the ring between the window and the world edge
    pub fn border(&self) -> usize {
        (self.size - WINDOW) / 2
    }

    /// Kill every cell, then copy `seed` into the window.
    pub fn initialize(&mut self, seed: &Seed) {
        self.cur.fill(Cell::Dead);
        self.next.fill(Cell::Dead);

        let b = self.border();

        for y in 0..WINDOW {
            for x in 0..WINDOW {
                let i = self.index(x + b, y + b);
                self.cur[i] = seed[x + WINDOW * y];
            }
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cur[self.index(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        let i = self.index(x, y);
        self.cur[i] = cell;
    }

    /// Number of live cells among the 8 surrounding `(x, y)` in the current generation.
    pub fn neighbor_count(&self, x: usize, y: usize) -> u8 {
        let mut n = 0;

        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }

                let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy))
                else {
                    continue;
                };

                if nx >= self.size || ny >= self.size {
                    continue;
                }

                if self.get(nx, ny).is_alive() {
                    n += 1;
                }
            }
        }

        n
    }

    /// What `(x, y)` will be in the next generation.
    pub fn next_state(&self, x: usize, y: usize) -> Cell {
        self.get(x, y).next(self.neighbor_count(x, y))
    }

    /// Advance the whole world by one generation.
    ///
    /// Every cell of the next generation is computed from the current one before the buffers are
    /// swapped, so no cell sees a neighbour's new state.
    pub fn step(&mut self) {
        let mut next = std::mem::take(&mut self.next);

        for y in 0..self.size {
            for x in 0..self.size {
                next[x + self.size * y] = self.next_state(x, y);
            }
        }

        self.next = next;
        std::mem::swap(&mut self.cur, &mut self.next);
    }

    /// Copy out the centered 8x8 window
    pub fn window(&self) -> Window {
        let b = self.border();
        let mut cells = [Cell::Dead; WINDOW * WINDOW];

        for y in 0..WINDOW {
            for x in 0..WINDOW {
                cells[x + WINDOW * y] = self.get(x + b, y + b);
            }
        }

        Window { cells }
    }

    /// True if nothing is alive inside the window. The border is not looked at.
    pub fn is_window_extinct(&self) -> bool {
        self.window().is_extinct()
    }

    /// World coordinates of the live cells outside the window
    pub fn border_survivors(&self) -> Vec<(usize, usize)> {
        let b = self.border();
        let inner = b..b + WINDOW;

        self.live_cells()
            .filter(|(x, y)| !(inner.contains(x) && inner.contains(y)))
            .collect()
    }

    /// World coordinates of every live cell, row by row
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cur
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_alive())
            .map(|(i, _)| (i % self.size, i / self.size))
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(x < self.size, "x is out of bounds");
        assert!(y < self.size, "y is out of bounds");

        x + self.size * y
    }
}

/// A snapshot of the observable window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    cells: Seed,
}

impl Window {
    pub fn cells(&self) -> &Seed {
        &self.cells
    }

    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[x + WINDOW * y]
    }

    pub fn is_extinct(&self) -> bool {
        self.cells.iter().all(|c| !c.is_alive())
    }
}

impl From<Seed> for Window {
    fn from(cells: Seed) -> Self {
        Self { cells }
    }
}

/// One line per row, `#` for alive and `.` for dead.
impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.chunks(WINDOW).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }

            for c in row {
                let ch = if c.is_alive() { '#' } else { '.' };
                write!(f, "{ch}")?;
            }
        }

        Ok(())
    }
}
