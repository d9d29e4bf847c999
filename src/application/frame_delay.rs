use std::time::Duration;

/// Animation speed: the time between generations, in whole microseconds.
///
/// Always positive. Speeding up halves the delay and adds one microsecond,
/// so repeated speed-ups settle at [`FrameDelay::FLOOR`] instead of zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrameDelay(u64);

impl FrameDelay {
    pub const DEFAULT: Self = Self(500_000);
    /// Fixed point of repeated speed-ups from any delay above one microsecond
    pub const FLOOR: Self = Self(2);

    /// Build from microseconds; zero is bumped to one
    pub const fn from_micros(micros: u64) -> Self {
        Self(if micros == 0 { 1 } else { micros })
    }

    pub const fn from_millis(millis: u64) -> Self {
        Self::from_micros(millis.saturating_mul(1_000))
    }

    pub const fn as_micros(self) -> u64 {
        self.0
    }

    pub const fn as_duration(self) -> Duration {
        Duration::from_micros(self.0)
    }

    /// Double the delay
    pub const fn slow_down(self) -> Self {
        Self(self.0.saturating_mul(2))
    }

    /// Halve the delay, then add one microsecond
    pub const fn speed_up(self) -> Self {
        Self(self.0 / 2 + 1)
    }
}

impl Default for FrameDelay {
    fn default() -> Self {
        Self::DEFAULT
    }
}
