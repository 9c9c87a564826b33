//! Virtual terminal emulator module.
//!
//! Consumes a raw byte stream one byte at a time, tracking escape
//! sequence state, and applies cursor movement, styling, scrolling and
//! erasure to a dynamically growing screen buffer. The finished page can
//! be rendered back into a byte stream at any point.
//!
//! The model is a batch transform, not a live display: feed the whole
//! stream (in one call or across arbitrary chunk boundaries, including
//! mid-escape), then render the final state.
//!
//! # Usage
//!
//! ```
//! use ansicat::Terminal;
//!
//! let mut term = Terminal::new();
//! term.feed(b"plain \x1b[1mbold\x1b[0m\n").unwrap();
//!
//! let mut out = Vec::new();
//! term.render_to(&mut out).unwrap();
//! ```

mod error;
pub(crate) mod grid;
mod handlers;
mod render;
pub(crate) mod sequence;

#[cfg(test)]
mod tests;

use tracing::trace;

pub use error::Error;
pub use grid::{Cell, Grid};
pub use sequence::Params;

/// Escape parsing state. The CSI parameter buffer lives inside its
/// variant so a buffer without a bracketed sequence cannot exist.
#[derive(Debug)]
enum ParserState {
    /// Plain text.
    Ground,
    /// ESC seen, next byte picks bracketed or bare command form.
    Escape,
    /// ESC [ seen; accumulating parameter bytes until the terminator.
    Csi(Vec<u8>),
}

/// Zero-based cursor with one save/restore slot.
///
/// There is no bounds ceiling: the cursor may point beyond the current
/// page extent, and a write there grows the page.
#[derive(Debug, Default)]
struct Cursor {
    x: usize,
    y: usize,
    saved_x: usize,
    saved_y: usize,
}

/// A virtual screen fed by an ANSI byte stream.
///
/// Fully self-contained: each instance owns its page and parser state
/// and needs no process-wide setup.
#[derive(Debug)]
pub struct Terminal {
    grid: Grid,
    cursor: Cursor,
    rendition: Params,
    state: ParserState,
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminal {
    /// An empty terminal: no page content, cursor at (0,0), no style.
    pub fn new() -> Self {
        Self {
            grid: Grid::default(),
            cursor: Cursor::default(),
            rendition: Params::default(),
            state: ParserState::Ground,
        }
    }

    /// Feed a chunk of the input stream.
    ///
    /// Equivalent to calling [`feed_byte`](Self::feed_byte) for every
    /// byte; stops at the first error, leaving the already-consumed
    /// prefix applied.
    pub fn feed(&mut self, bytes: &[u8]) -> Result<(), Error> {
        for &byte in bytes {
            self.feed_byte(byte)?;
        }
        Ok(())
    }

    /// Feed a single byte of the input stream.
    ///
    /// Parser state persists between calls, so a stream may be fed in
    /// chunks split anywhere, including in the middle of an escape
    /// sequence.
    ///
    /// # Errors
    ///
    /// [`Error::IllegalByte`] for a high byte inside an escape sequence
    /// (the stream is dead afterwards); [`Error::UnrecognizedCommand`]
    /// for an unsupported escape terminator (recoverable, parsing has
    /// returned to ground state).
    pub fn feed_byte(&mut self, byte: u8) -> Result<(), Error> {
        match &mut self.state {
            ParserState::Ground => match byte {
                0x0A => self.cursor.y += 1,
                0x0D => self.cursor.x = 0,
                0x1B => self.state = ParserState::Escape,
                _ => self.write_code(byte),
            },
            ParserState::Escape => {
                if byte > 127 {
                    return Err(Error::IllegalByte { byte });
                }
                if byte == b'[' {
                    self.state = ParserState::Csi(Vec::new());
                } else {
                    // Bare ESC command: the byte itself terminates, with
                    // no parameter buffer.
                    self.state = ParserState::Ground;
                    self.dispatch(byte, &[])?;
                }
            }
            ParserState::Csi(buffer) => {
                if byte > 127 {
                    return Err(Error::IllegalByte { byte });
                }
                if byte > 63 {
                    let raw = std::mem::take(buffer);
                    self.state = ParserState::Ground;
                    self.dispatch(byte, &raw)?;
                } else {
                    buffer.push(byte);
                }
            }
        }
        Ok(())
    }

    /// Current cursor position as (column, row).
    pub fn cursor(&self) -> (usize, usize) {
        (self.cursor.x, self.cursor.y)
    }

    /// The screen buffer in its current state.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Write a character at the cursor with the active rendition and
    /// advance the column. No automatic line wrapping: overflowing a
    /// conventional screen width just extends the row.
    fn write_code(&mut self, code: u8) {
        self.grid.put(
            self.cursor.x,
            self.cursor.y,
            Cell {
                rendition: self.rendition.clone(),
                code,
                occupied: true,
            },
        );
        self.cursor.x += 1;
    }

    /// Apply a completed escape sequence.
    fn dispatch(&mut self, command: u8, raw: &[u8]) -> Result<(), Error> {
        // An unparseable parameter list is not an error: every command
        // falls back to its documented default.
        let params = sequence::decode(raw).unwrap_or_default();
        trace!(command, ?params, "escape sequence");

        match command {
            b'A' => handlers::cursor::up(self, &params),
            b'B' => handlers::cursor::down(self, &params),
            b'C' => handlers::cursor::forward(self, &params),
            b'D' => handlers::cursor::back(self, &params),
            b'E' => handlers::cursor::next_line(self, &params),
            b'F' => handlers::cursor::previous_line(self, &params),
            b'G' => handlers::cursor::horizontal_absolute(self, &params),
            b'H' | b'f' => handlers::cursor::position(self, &params),
            b'J' => handlers::editing::erase_display(self, &params),
            b'K' => handlers::editing::erase_line(self, &params),
            b'S' => handlers::scroll::up(self, &params),
            b'T' => handlers::scroll::down(self, &params),
            b's' => handlers::cursor::save(self),
            b'u' => handlers::cursor::restore(self),
            b'm' => handlers::style::set_rendition(self, &params),
            _ => {
                return Err(Error::UnrecognizedCommand {
                    command: command as char,
                    params: String::from_utf8_lossy(raw).into_owned(),
                })
            }
        }
        Ok(())
    }
}

/// Byte-sink adapter so a reader can be copied straight into the
/// terminal with `std::io::copy`. Terminal errors surface as
/// `InvalidData`.
impl std::io::Write for Terminal {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.feed(buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
