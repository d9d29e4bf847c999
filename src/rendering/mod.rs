//! Drawing the grid onto a character display.
//!
//! The display itself is consumed through [`Screen`]; the terminal backend
//! lives in [`terminal`], and [`MemoryScreen`] is an in-memory stand-in for
//! headless runs and tests.

mod memory;
mod terminal;

pub use memory::MemoryScreen;
pub use terminal::TerminalScreen;

use std::io;

use crate::application::ShutdownFlag;
use crate::domain::Grid;

pub const ALIVE_GLYPH: char = 'o';
pub const DEAD_GLYPH: char = ' ';

/// A character-grid display surface
pub trait Screen {
    /// Current size as (rows, cols)
    fn size(&self) -> io::Result<(usize, usize)>;

    /// Write one glyph at (row, col); shown on the next flush
    fn put(&mut self, row: usize, col: usize, glyph: char) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()>;

    /// Non-blocking read of one keystroke
    fn poll_key(&mut self) -> io::Result<Option<char>>;
}

/// Outcome of drawing one frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Frame {
    Drawn,
    /// Shutdown was requested part way through; nothing was flushed
    Abandoned,
}

/// Draw every cell and flush, checking for shutdown before each cell
pub fn draw_grid<S: Screen + ?Sized>(
    screen: &mut S,
    grid: &Grid,
    shutdown: &ShutdownFlag,
) -> io::Result<Frame> {
    for (row, col, cell) in grid.iter_cells() {
        if shutdown.is_requested() {
            return Ok(Frame::Abandoned);
        }
        let glyph = if cell.is_alive() { ALIVE_GLYPH } else { DEAD_GLYPH };
        screen.put(row, col, glyph)?;
    }
    screen.flush()?;
    Ok(Frame::Drawn)
}
