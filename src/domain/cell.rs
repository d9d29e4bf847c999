/// Cell represents the fundamental unit of the Life grid.
/// Each cell is either Dead or Alive; there is no intermediate state.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    pub const fn from_alive(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }

    /// Compute the next state from the live neighbor count (B3/S23):
    /// 1. Any cell with exactly 3 neighbors is alive next generation
    /// 2. A live cell with exactly 2 neighbors survives
    /// 3. Everything else is dead
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (_, 3) => Cell::Alive,
            (Cell::Alive, 2) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}
