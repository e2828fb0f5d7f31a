use tracing::warn;

use crate::cell::Cell;
use crate::world::Seed;
use crate::world::WINDOW;

/// An 8x8 starting map, written one row per string with `#` for a live cell and `.` for a dead
/// one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub rows: [&'static str; WINDOW],
}

impl Pattern {
    /// The all-dead map
    pub const fn empty() -> Self {
        Self {
            name: "empty",
            rows: ["........"; WINDOW],
        }
    }

    /// Expand the rows into a row-major seed.
    pub fn cells(&self) -> Seed {
        let mut seed = [Cell::Dead; WINDOW * WINDOW];

        for (y, row) in self.rows.iter().enumerate() {
            for (x, b) in row.bytes().take(WINDOW).enumerate() {
                seed[x + WINDOW * y] = Cell::from(b == b'#');
            }
        }

        seed
    }
}

/// The built-in catalog. Selection is 1-based.
pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "toad and 2 blinkers",
        rows: [
            "........", //
            ".###....",
            "###.....",
            "........",
            "........",
            ".#......",
            ".#...###",
            ".#......",
        ],
    },
    Pattern {
        name: "glider",
        rows: [
            ".#......", //
            "..#.....",
            "###.....",
            "........",
            "........",
            "........",
            "........",
            "........",
        ],
    },
    Pattern {
        name: "small spaceship",
        rows: [
            "........", //
            "........",
            "#..#....",
            "....#...",
            "#...#...",
            ".####...",
            "........",
            "........",
        ],
    },
    Pattern {
        name: "beacon and 2 blinkers (clash)",
        rows: [
            "##......", //
            "#....###",
            "...#....",
            "..##....",
            "........",
            "........",
            ".....###",
            "........",
        ],
    },
    Pattern {
        name: "beacon and 1 blinker (no clash)",
        rows: [
            "##......", //
            "#.......",
            "...#....",
            "..##....",
            "........",
            "........",
            ".....###",
            "........",
        ],
    },
];

/// Number of patterns in the catalog
pub fn count() -> usize {
    PATTERNS.len()
}

/// Look up a pattern by its 1-based index. Anything outside `1..=count()` yields the first
/// pattern.
pub fn get(index: usize) -> &'static Pattern {
    match index.checked_sub(1).and_then(|i| PATTERNS.get(i)) {
        Some(pattern) => pattern,
        None => &PATTERNS[0],
    }
}

/// Turn a user's selection into a valid 1-based index, falling back to `1`.
pub fn resolve_selection(input: &str) -> usize {
    match input.trim().parse::<usize>() {
        Ok(index) if (1..=count()).contains(&index) => index,
        _ => {
            warn!("Selection {input:?} is not in 1..={}. Using 1", count());
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_well_formed() {
        let empty = Pattern::empty();

        for pattern in PATTERNS.iter().chain(std::iter::once(&empty)) {
            for row in pattern.rows {
                assert_eq!(row.len(), WINDOW, "row width in {}", pattern.name);
                assert!(
                    row.bytes().all(|b| b == b'#' || b == b'.'),
                    "bad row {row:?} in {}",
                    pattern.name
                );
            }
        }
    }

    #[test]
    fn at_least_five_patterns() {
        assert!(count() >= 5);
    }

    #[test]
    fn out_of_range_falls_back_to_first() {
        assert_eq!(get(0), get(1));
        assert_eq!(get(count() + 1), get(1));
        assert_eq!(get(usize::MAX), get(1));
        assert_eq!(get(2).name, "glider");
    }

    #[test]
    fn resolve() {
        assert_eq!(resolve_selection("3"), 3);
        assert_eq!(resolve_selection(" 5\n"), 5);
        assert_eq!(resolve_selection("0"), 1);
        assert_eq!(resolve_selection("6"), 1);
        assert_eq!(resolve_selection("x"), 1);
        assert_eq!(resolve_selection(""), 1);
    }

    #[test]
    fn glider_cells() {
        let seed = get(2).cells();
        let live: Vec<_> = (0..seed.len()).filter(|&i| seed[i].is_alive()).collect();

        assert_eq!(live, vec![1, 10, 16, 17, 18]);
    }

    #[test]
    fn empty_is_dead() {
        assert!(Pattern::empty().cells().iter().all(|c| !c.is_alive()));
    }
}
