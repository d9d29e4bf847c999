use std::io::{self, BufWriter, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::Print,
    terminal::{
        self, Clear, ClearType, DisableLineWrap, EnableLineWrap, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use tracing::{error, info};

use super::Screen;
use crate::application::ShutdownFlag;

/// crossterm-backed terminal display.
///
/// Holds the terminal in raw mode on the alternate screen for its whole
/// lifetime; dropping it restores the terminal on every exit path.
pub struct TerminalScreen {
    out: BufWriter<Stdout>,
    shutdown: ShutdownFlag,
}

impl TerminalScreen {
    /// Take over the terminal.
    ///
    /// A resize event or Ctrl-C read from the terminal raises `shutdown`.
    pub fn open(shutdown: ShutdownFlag) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut screen = Self {
            out: BufWriter::new(io::stdout()),
            shutdown,
        };
        execute!(
            screen.out,
            EnterAlternateScreen,
            DisableLineWrap,
            cursor::Hide,
            Clear(ClearType::All)
        )?;
        Ok(screen)
    }
}

/// Translate a terminal event into a keystroke.
///
/// A resize, or Ctrl-C arriving as a key in raw mode, raises `shutdown`
/// instead of producing a key. Only key presses count.
fn translate(event: Event, shutdown: &ShutdownFlag) -> Option<char> {
    match event {
        Event::Key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) if modifiers.contains(KeyModifiers::CONTROL) => {
            info!("interrupt key received");
            shutdown.request();
            None
        }
        Event::Key(KeyEvent {
            code: KeyCode::Char(ch),
            kind: KeyEventKind::Press,
            ..
        }) => Some(ch),
        Event::Resize(cols, rows) => {
            // Resizing is not supported
            info!(rows, cols, "terminal resized, shutting down");
            shutdown.request();
            None
        }
        _ => None,
    }
}

impl Screen for TerminalScreen {
    fn size(&self) -> io::Result<(usize, usize)> {
        let (cols, rows) = terminal::size()?;
        Ok((rows as usize, cols as usize))
    }

    fn put(&mut self, row: usize, col: usize, glyph: char) -> io::Result<()> {
        let to_u16 = |v: usize| {
            u16::try_from(v)
                .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "coordinate out of range"))
        };
        queue!(self.out, cursor::MoveTo(to_u16(col)?, to_u16(row)?), Print(glyph))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    fn poll_key(&mut self) -> io::Result<Option<char>> {
        while event::poll(Duration::ZERO)? {
            if let Some(ch) = translate(event::read()?, &self.shutdown) {
                return Ok(Some(ch));
            }
            if self.shutdown.is_requested() {
                break;
            }
        }
        Ok(None)
    }
}

impl Drop for TerminalScreen {
    fn drop(&mut self) {
        if let Err(err) = execute!(self.out, cursor::Show, EnableLineWrap, LeaveAlternateScreen) {
            error!(?err, "failed to restore terminal screen");
        }
        if let Err(err) = terminal::disable_raw_mode() {
            error!(?err, "failed to disable raw mode");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn release(code: KeyCode, modifiers: KeyModifiers) -> Event {
        let mut event = KeyEvent::new(code, modifiers);
        event.kind = KeyEventKind::Release;
        Event::Key(event)
    }

    #[test]
    fn test_resize_raises_shutdown() {
        let shutdown = ShutdownFlag::new();
        assert_eq!(translate(Event::Resize(80, 24), &shutdown), None);
        assert!(shutdown.is_requested());
    }

    #[test]
    fn test_ctrl_c_raises_shutdown() {
        let shutdown = ShutdownFlag::new();
        let ctrl_c = press(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(translate(ctrl_c, &shutdown), None);
        assert!(shutdown.is_requested());
    }

    #[test]
    fn test_plain_key_passes_through() {
        let shutdown = ShutdownFlag::new();
        let c = press(KeyCode::Char('c'), KeyModifiers::NONE);
        assert_eq!(translate(c, &shutdown), Some('c'));
        let plus = press(KeyCode::Char('+'), KeyModifiers::SHIFT);
        assert_eq!(translate(plus, &shutdown), Some('+'));
        assert!(!shutdown.is_requested());
    }

    #[test]
    fn test_key_release_ignored() {
        let shutdown = ShutdownFlag::new();
        let q = release(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(translate(q, &shutdown), None);
        let ctrl_c = release(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(translate(ctrl_c, &shutdown), None);
        assert!(!shutdown.is_requested());
    }

    #[test]
    fn test_other_events_ignored() {
        let shutdown = ShutdownFlag::new();
        let enter = press(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(translate(enter, &shutdown), None);
        assert_eq!(translate(Event::FocusLost, &shutdown), None);
        assert!(!shutdown.is_requested());
    }
}
