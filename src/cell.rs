/// State of a single cell of the world.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Conway's rule (b3/s23) for a cell with `neighbors` live neighbours.
    ///
    /// ```notrust
    /// alive, < 2      -> dead (loneliness)
    /// alive, > 3      -> dead (overcrowding)
    /// alive, 2 or 3   -> alive
    /// dead,  3        -> alive (reproduction)
    /// dead,  other    -> dead
    /// ```
    pub const fn next(self, neighbors: u8) -> Cell {
        match (self, neighbors) {
            (Cell::Alive, 2 | 3) | (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

#[cfg(test)]
mod tests {
    use super::Cell;

    #[test]
    fn survival() {
        for n in 0..=8 {
            let expected = if n == 2 || n == 3 { Cell::Alive } else { Cell::Dead };
            assert_eq!(Cell::Alive.next(n), expected, "live cell with {n} neighbors");
        }
    }

    #[test]
    fn birth() {
        for n in 0..=8 {
            let expected = if n == 3 { Cell::Alive } else { Cell::Dead };
            assert_eq!(Cell::Dead.next(n), expected, "dead cell with {n} neighbors");
        }
    }
}
