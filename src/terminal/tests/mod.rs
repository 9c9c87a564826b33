//! Terminal emulator tests.
//!
//! Organized by handler category:
//! - cursor: Cursor movement, positioning, save/restore
//! - editing: Erase in display / erase in line
//! - scroll: Scroll up/down
//! - style: Graphic rendition handling
//! - stream: State machine, chunking, error behavior
//! - render: Page serialization and round trips


use crate::terminal::Terminal;

/// Feed `bytes` into a fresh terminal, panicking on stream errors.
fn term_with(bytes: &[u8]) -> Terminal {
    let mut term = Terminal::new();
    term.feed(bytes).expect("stream should feed cleanly");
    term
}

/// Render the page into an owned buffer.
fn rendered(term: &Terminal) -> Vec<u8> {
    let mut out = Vec::new();
    term.render_to(&mut out).expect("Vec sink cannot fail");
    out
}

/// Render the page as UTF-8 text.
fn rendered_str(term: &Terminal) -> String {
    String::from_utf8(rendered(term)).expect("rendered output is valid UTF-8")
}

#[test]
fn full_scene_replays_ansi_art() {
    // A 3x3 single-line box drawn out of order: bottom row first, then
    // the top via absolute positioning, lid colored, interior via CUP.
    let mut stream = Vec::new();
    stream.extend_from_slice(b"\x1b[3;1H");
    stream.extend_from_slice(&[0xC0, 0xC4, 0xD9]);
    stream.extend_from_slice(b"\x1b[1;1H\x1b[33m");
    stream.extend_from_slice(&[0xDA, 0xC4, 0xBF]);
    stream.extend_from_slice(b"\x1b[0m\x1b[2;1H");
    stream.extend_from_slice(&[0xB3, b'x', 0xB3]);

    let term = term_with(&stream);
    let text = rendered_str(&term);
    assert_eq!(text, "\x1b[33m┌─┐\n\x1b[0m│x│\n\x1b[m└─┘\n");
}

#[test]
fn scene_with_overdraw_keeps_last_write() {
    let term = term_with(b"aaaa\r\nbbbb\x1b[1;2HXY");
    let text = rendered_str(&term);
    assert_eq!(text, "aXYa\nbbbb\n");
}
