/// A fixed seed shape placed onto the grid relative to an origin
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    /// Declared footprint in rows; placement validates against it
    pub rows: usize,
    /// Declared footprint in columns
    pub cols: usize,
    /// (row, col) offsets of alive cells, all inside the footprint
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    /// Footprint (rows, cols) the pattern needs from its origin
    pub const fn bounds(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}

/// Footprint (rows, cols) a pattern needs from its origin
pub const fn pattern_bounds(pattern: &Pattern) -> (usize, usize) {
    pattern.bounds()
}

#[rustfmt::skip]
const GLIDER_CELLS: &[(usize, usize)] = &[
    (0, 1),
    (1, 2),
    (2, 0), (2, 1), (2, 2),
];

#[rustfmt::skip]
const GOSPER_GUN_CELLS: &[(usize, usize)] = &[
    // Left block
    (5, 1), (6, 1),
    (5, 2), (6, 2),

    // Left ship
    (5, 11), (6, 11), (7, 11),
    (4, 12), (8, 12),
    (3, 13), (9, 13),
    (3, 14), (9, 14),
    (6, 15),
    (4, 16), (8, 16),
    (5, 17), (6, 17), (7, 17),
    (6, 18),

    // Right ship
    (3, 21), (4, 21), (5, 21),
    (3, 22), (4, 22), (5, 22),
    (2, 23), (6, 23),
    (1, 25), (2, 25), (6, 25), (7, 25),

    // Right block
    (3, 35), (4, 35),
    (3, 36), (4, 36),
];

/// Stock patterns
pub mod presets {
    use super::*;

    /// Glider - 5 cells, travels one cell down and right every 4 generations
    pub const fn glider() -> Pattern {
        Pattern {
            name: "Glider",
            description: "Spaceship, moves diagonally (period 4)",
            rows: 3,
            cols: 3,
            cells: GLIDER_CELLS,
        }
    }

    /// Gosper Glider Gun - 36 cells, emits a glider every 30 generations
    pub const fn gosper_glider_gun() -> Pattern {
        Pattern {
            name: "Gosper Glider Gun",
            description: "Produces gliders (period 30)",
            rows: 11,
            cols: 38,
            cells: GOSPER_GUN_CELLS,
        }
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![glider(), gosper_glider_gun()]
    }
}
