mod animation;
mod frame_delay;
mod game_state;
mod shutdown;

pub use animation::{AnimationLoop, ExitReason, POLL_SLICE};
pub use frame_delay::FrameDelay;
pub use game_state::{Flow, GameState, PATTERN_ORIGIN};
pub use shutdown::ShutdownFlag;
