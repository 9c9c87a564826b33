//! Page-to-bytes rendering.
//!
//! Walks the finished page and re-serializes it as characters plus the
//! minimal rendition-change escape sequences: an `ESC [ … m` is emitted
//! exactly when a cell's rendition differs from the one last written to
//! the sink. High CP437 bytes expand to their UTF-8 glyphs, unoccupied
//! cells render as spaces, and every row ends in a line feed.

use std::io::{self, Write};

use crate::codepage;
use crate::terminal::sequence::Params;
use crate::terminal::Terminal;

impl Terminal {
    /// Serialize the current page into `sink`.
    ///
    /// A pure, restartable walk over already-materialized content: it
    /// can run at any time, including mid-parse, and holds no state
    /// beyond the rendition tracker. Returns the total number of bytes
    /// written; a never-written terminal writes nothing at all. Sink
    /// errors propagate immediately and already-written output stands.
    pub fn render_to<W: Write>(&self, sink: &mut W) -> io::Result<u64> {
        let mut emitted = Params::default();
        let mut escape = Vec::new();
        let mut total = 0u64;

        for row in self.grid().rows() {
            for cell in row {
                // Any positional or length difference forces a style
                // change, even onto an unoccupied cell's empty rendition.
                if cell.rendition != emitted {
                    escape.clear();
                    write_rendition(&mut escape, &cell.rendition);
                    sink.write_all(&escape)?;
                    total += escape.len() as u64;
                    emitted = cell.rendition.clone();
                }

                if !cell.occupied {
                    sink.write_all(b" ")?;
                    total += 1;
                } else if cell.code < 128 {
                    sink.write_all(&[cell.code])?;
                    total += 1;
                } else {
                    let text = codepage::utf8(cell.code);
                    sink.write_all(text.as_bytes())?;
                    total += text.len() as u64;
                }
            }

            sink.write_all(b"\n")?;
            total += 1;
        }

        Ok(total)
    }
}

/// Append `ESC [ v1;v2;…;vn m` to `buf`. An empty list yields `ESC [ m`.
fn write_rendition(buf: &mut Vec<u8>, rendition: &Params) {
    buf.push(0x1B);
    buf.push(b'[');
    let mut subsequent = false;
    for value in rendition.values() {
        if subsequent {
            buf.push(b';');
        }
        subsequent = true;
        buf.extend_from_slice(value.to_string().as_bytes());
    }
    buf.push(b'm');
}
