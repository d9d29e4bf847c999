use std::collections::VecDeque;
use std::io;

use super::{DEAD_GLYPH, Screen};
use crate::application::ShutdownFlag;

/// In-memory screen: records flushed frames and replays scripted input.
///
/// Each scripted entry answers one `poll_key` call; `None` entries stand for
/// "no key this time". An exhausted script answers `None` forever.
#[derive(Debug, Clone)]
pub struct MemoryScreen {
    rows: usize,
    cols: usize,
    buffer: Vec<char>,
    frames: Vec<String>,
    keys: VecDeque<Option<char>>,
    puts: usize,
    raise_after: Option<(ShutdownFlag, usize)>,
}

impl MemoryScreen {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            buffer: vec![DEAD_GLYPH; rows * cols],
            frames: Vec::new(),
            keys: VecDeque::new(),
            puts: 0,
            raise_after: None,
        }
    }

    /// Queue keystrokes for later polls
    pub fn with_keys<I: IntoIterator<Item = Option<char>>>(mut self, keys: I) -> Self {
        self.keys.extend(keys);
        self
    }

    /// Raise `shutdown` once `puts` glyphs have been written
    pub fn raise_after_puts(mut self, shutdown: ShutdownFlag, puts: usize) -> Self {
        self.raise_after = Some((shutdown, puts));
        self
    }

    /// Every flushed frame, rows joined by newlines
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    pub fn puts(&self) -> usize {
        self.puts
    }

    pub fn pending_keys(&self) -> usize {
        self.keys.len()
    }
}

impl Screen for MemoryScreen {
    fn size(&self) -> io::Result<(usize, usize)> {
        Ok((self.rows, self.cols))
    }

    fn put(&mut self, row: usize, col: usize, glyph: char) -> io::Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("({row}, {col}) is outside a {}x{} screen", self.rows, self.cols),
            ));
        }
        self.buffer[row * self.cols + col] = glyph;
        self.puts += 1;
        if let Some((shutdown, limit)) = &self.raise_after {
            if self.puts >= *limit {
                shutdown.request();
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        let frame = self
            .buffer
            .chunks(self.cols.max(1))
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n");
        self.frames.push(frame);
        Ok(())
    }

    fn poll_key(&mut self) -> io::Result<Option<char>> {
        Ok(self.keys.pop_front().flatten())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_keys() {
        let mut screen = MemoryScreen::new(1, 1).with_keys([Some('a'), None, Some('b')]);
        assert_eq!(screen.poll_key().unwrap(), Some('a'));
        assert_eq!(screen.poll_key().unwrap(), None);
        assert_eq!(screen.poll_key().unwrap(), Some('b'));
        assert_eq!(screen.poll_key().unwrap(), None);
        assert_eq!(screen.pending_keys(), 0);
    }

    #[test]
    fn test_put_out_of_range_errors() {
        let mut screen = MemoryScreen::new(2, 2);
        assert!(screen.put(2, 0, 'o').is_err());
        assert_eq!(screen.puts(), 0);
    }
}
