mod cell;
mod error;
mod grid;
mod patterns;
pub mod rules;

pub use cell::Cell;
pub use error::GridError;
pub use grid::Grid;
pub use patterns::{Pattern, pattern_bounds, presets};
pub use rules::{NEIGHBOR_OFFSETS, Topology, live_neighbors, step};
