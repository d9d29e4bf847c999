use super::{Cell, Grid};

/// Relative (row, col) positions of the Moore neighborhood
#[rustfmt::skip]
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// How neighbor lookups treat the grid edges
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Topology {
    /// Lookups wrap around both axes
    #[default]
    Torus,
    /// Out-of-range neighbors do not count
    Plane,
}

impl Topology {
    pub const fn from_wrap(wrap: bool) -> Self {
        if wrap { Topology::Torus } else { Topology::Plane }
    }

    pub const fn wraps(self) -> bool {
        matches!(self, Topology::Torus)
    }

    pub const fn toggled(self) -> Self {
        match self {
            Topology::Torus => Topology::Plane,
            Topology::Plane => Topology::Torus,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Topology::Torus => "torus",
            Topology::Plane => "plane",
        }
    }

    /// Resolve one coordinate of a neighbor, or None if it falls off a plane
    fn resolve(self, pos: usize, delta: isize, len: usize) -> Option<usize> {
        let target = pos as isize + delta;
        match self {
            Topology::Torus => Some(target.rem_euclid(len as isize) as usize),
            Topology::Plane => (0..len as isize).contains(&target).then_some(target as usize),
        }
    }
}

/// Count live cells among the 8 neighbors of (row, col).
///
/// On a torus with a dimension of 1 or 2 an offset can land on the cell
/// itself or on a neighbor already counted; each landing counts.
pub fn live_neighbors(grid: &Grid, row: usize, col: usize, topology: Topology) -> u8 {
    let (rows, cols) = grid.dimensions();
    NEIGHBOR_OFFSETS
        .iter()
        .filter_map(|&(dr, dc)| {
            Some((
                topology.resolve(row, dr, rows)?,
                topology.resolve(col, dc, cols)?,
            ))
        })
        .filter(|&(r, c)| grid.get(r, c))
        .count() as u8
}

/// Advance the grid one generation in place.
///
/// Every next state is computed from the unmodified current generation
/// before any cell is committed.
pub fn step(grid: &mut Grid, topology: Topology) {
    grid.commit_generation(|current, row, col| {
        Cell::from_alive(current.get(row, col)).evolve(live_neighbors(current, row, col, topology))
    });
}
