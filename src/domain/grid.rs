use rand::Rng;

use super::{Cell, GridError, Pattern};

/// Grid owns the 2D cell array of the automaton.
///
/// Cells are stored row-major. A second buffer of the same size holds the
/// next generation while it is being computed, so a step never exposes a
/// half-updated grid and never reallocates.
#[derive(Clone, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    next: Vec<Cell>,
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.cells == other.cells
    }
}

impl Eq for Grid {}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
            next: vec![Cell::Dead; rows * cols],
        })
    }

    /// Grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub const fn width(&self) -> usize {
        self.cols
    }

    pub const fn height(&self) -> usize {
        self.rows
    }

    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Read the cell at (row, col). The caller guarantees the bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        debug_assert!(row < self.rows && col < self.cols);
        self.cells[self.index(row, col)].is_alive()
    }

    /// Write the cell at (row, col). The caller guarantees the bounds.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        debug_assert!(row < self.rows && col < self.cols);
        let idx = self.index(row, col);
        self.cells[idx] = Cell::from_alive(alive);
    }

    /// Overwrite every cell with an independent fair coin flip
    pub fn seed_random<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from_alive(rng.random_bool(0.5)));
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Mark the pattern's cells alive with its top-left corner at the origin.
    ///
    /// Placement is all-or-nothing: if the pattern's declared bounds do not
    /// fit from the origin, nothing is written.
    pub fn place_pattern(
        &mut self,
        pattern: &Pattern,
        origin_row: usize,
        origin_col: usize,
    ) -> Result<(), GridError> {
        let (pattern_rows, pattern_cols) = pattern.bounds();
        let fits = |origin: usize, extent: usize, limit: usize| {
            origin.checked_add(extent).is_some_and(|end| end <= limit)
        };
        if !fits(origin_row, pattern_rows, self.rows)
            || !fits(origin_col, pattern_cols, self.cols)
        {
            return Err(GridError::PatternOutOfBounds {
                pattern: pattern.name,
                pattern_rows,
                pattern_cols,
                origin_row,
                origin_col,
                rows: self.rows,
                cols: self.cols,
            });
        }

        for &(dr, dc) in pattern.cells {
            self.set(origin_row + dr, origin_col + dc, true);
        }
        Ok(())
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (idx / self.cols, idx % self.cols, cell))
    }

    /// Replace the whole generation at once.
    ///
    /// `next_state` sees only the current generation; its results land in
    /// the spare buffer, which is swapped in after every cell is computed.
    pub(crate) fn commit_generation<F>(&mut self, mut next_state: F)
    where
        F: FnMut(&Self, usize, usize) -> Cell,
    {
        let mut next = std::mem::take(&mut self.next);
        for (idx, slot) in next.iter_mut().enumerate() {
            *slot = next_state(self, idx / self.cols, idx % self.cols);
        }
        self.next = std::mem::replace(&mut self.cells, next);
    }
}
