// Domain layer - Grid, rule engine, patterns
pub mod domain;

// Application layer - Simulation state and the animation loop
pub mod application;

// Infrastructure layer - Display, input, configuration
pub mod config;
pub mod input;
pub mod rendering;

// Re-exports for convenience
pub use application::{AnimationLoop, ExitReason, FrameDelay, GameState, ShutdownFlag};
pub use domain::{Cell, Grid, GridError, Pattern, Topology, pattern_bounds, presets, step};
pub use input::Command;
pub use rendering::{MemoryScreen, Screen, TerminalScreen};
