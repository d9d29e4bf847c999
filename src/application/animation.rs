use std::io;
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use super::{Flow, GameState, ShutdownFlag};
use crate::input::Command;
use crate::rendering::{Frame, Screen, draw_grid};

/// Longest single sleep while waiting out a frame delay
pub const POLL_SLICE: Duration = Duration::from_millis(10);

/// Why the loop stopped
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitReason {
    /// The quit key was pressed
    Quit,
    /// Shutdown was raised from outside the loop (interrupt, resize)
    Interrupted,
}

/// Render, step, poll input; repeat until shutdown.
pub struct AnimationLoop<S: Screen> {
    screen: S,
    state: GameState,
    shutdown: ShutdownFlag,
    quit_pressed: bool,
}

impl<S: Screen> AnimationLoop<S> {
    pub fn new(screen: S, state: GameState, shutdown: ShutdownFlag) -> Self {
        Self {
            screen,
            state,
            shutdown,
            quit_pressed: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    /// Hand back the screen and state, e.g. to release the display
    pub fn into_parts(self) -> (S, GameState) {
        (self.screen, self.state)
    }

    pub fn run(&mut self) -> io::Result<ExitReason> {
        info!(
            rows = self.state.grid.height(),
            cols = self.state.grid.width(),
            topology = self.state.topology.name(),
            delay_us = self.state.frame_delay.as_micros(),
            "animation started"
        );

        while !self.shutdown.is_requested() {
            let frame = draw_grid(&mut self.screen, &self.state.grid, &self.shutdown)?;
            if frame == Frame::Abandoned {
                debug!(generation = self.state.generation, "frame abandoned");
                break;
            }
            self.state.step();
            self.poll_input()?;
        }

        let reason = if self.quit_pressed {
            ExitReason::Quit
        } else {
            ExitReason::Interrupted
        };
        info!(?reason, generation = self.state.generation, "animation stopped");
        Ok(reason)
    }

    /// Wait out the frame delay in slices, dispatching keys as they arrive.
    ///
    /// Any keystroke ends the wait early so its effect shows on the next
    /// frame. Keys already pending in a slice are all dispatched in order.
    fn poll_input(&mut self) -> io::Result<()> {
        let deadline = Instant::now() + self.state.frame_delay.as_duration();
        loop {
            let mut key_read = false;
            while let Some(key) = self.screen.poll_key()? {
                key_read = true;
                self.dispatch(key);
                if self.shutdown.is_requested() {
                    return Ok(());
                }
            }
            if key_read || self.shutdown.is_requested() {
                return Ok(());
            }

            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Ok(());
            }
            thread::sleep(remaining.min(POLL_SLICE));
        }
    }

    fn dispatch(&mut self, key: char) {
        let Some(command) = Command::from_key(key) else {
            return;
        };
        if self.state.apply(command) == Flow::Quit {
            self.quit_pressed = true;
            self.shutdown.request();
        }
    }
}
