use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, warn};

use super::FrameDelay;
use crate::domain::{Grid, GridError, Pattern, Topology, presets, step};
use crate::input::Command;

/// Where the pattern commands drop their pattern
pub const PATTERN_ORIGIN: (usize, usize) = (0, 0);

/// Whether the loop keeps going after a command
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// GameState owns the grid and the simulation parameters.
/// This is the application layer that coordinates domain logic.
pub struct GameState {
    pub grid: Grid,
    pub topology: Topology,
    pub frame_delay: FrameDelay,
    pub generation: u64,
    rng: StdRng,
}

impl GameState {
    /// Create a state around an existing grid
    pub fn new(grid: Grid, rng: StdRng) -> Self {
        Self {
            grid,
            topology: Topology::default(),
            frame_delay: FrameDelay::default(),
            generation: 0,
            rng,
        }
    }

    /// Create a randomly seeded state of the given size
    pub fn seeded(rows: usize, cols: usize, seed: u64) -> Result<Self, GridError> {
        let mut state = Self::new(Grid::new(rows, cols)?, StdRng::seed_from_u64(seed));
        state.reseed();
        Ok(state)
    }

    /// Set the starting topology (builder pattern)
    pub fn with_topology(mut self, topology: Topology) -> Self {
        self.topology = topology;
        self
    }

    /// Set the starting frame delay (builder pattern)
    pub fn with_frame_delay(mut self, frame_delay: FrameDelay) -> Self {
        self.frame_delay = frame_delay;
        self
    }

    /// Advance one generation
    pub fn step(&mut self) {
        step(&mut self.grid, self.topology);
        self.generation += 1;
    }

    pub fn toggle_topology(&mut self) {
        self.topology = self.topology.toggled();
    }

    /// Randomize grid and reset generation counter
    pub fn reseed(&mut self) {
        self.grid.seed_random(&mut self.rng);
        self.generation = 0;
    }

    /// Clear grid and reset generation counter
    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
    }

    /// Place a pattern at [`PATTERN_ORIGIN`]
    pub fn place(&mut self, pattern: &Pattern) -> Result<(), GridError> {
        let (row, col) = PATTERN_ORIGIN;
        self.grid.place_pattern(pattern, row, col)
    }

    pub fn slow_down(&mut self) {
        self.frame_delay = self.frame_delay.slow_down();
    }

    pub fn speed_up(&mut self) {
        self.frame_delay = self.frame_delay.speed_up();
    }

    /// Apply one keyboard command.
    ///
    /// A pattern that does not fit is logged and skipped; the grid is left
    /// as it was and the loop carries on.
    pub fn apply(&mut self, command: Command) -> Flow {
        match command {
            Command::ToggleWrap => self.toggle_topology(),
            Command::Reseed => self.reseed(),
            Command::PlaceGlider => self.place_or_warn(&presets::glider()),
            Command::PlaceGliderGun => self.place_or_warn(&presets::gosper_glider_gun()),
            Command::Clear => self.clear(),
            Command::SlowDown => self.slow_down(),
            Command::SpeedUp => self.speed_up(),
            Command::Quit => return Flow::Quit,
        }
        debug!(
            ?command,
            topology = self.topology.name(),
            delay_us = self.frame_delay.as_micros(),
            population = self.grid.population(),
            "applied command"
        );
        Flow::Continue
    }

    fn place_or_warn(&mut self, pattern: &Pattern) {
        if let Err(err) = self.place(pattern) {
            warn!(%err, "pattern placement rejected");
        }
    }
}
