//! Cursor movement handlers.
//!
//! Handles CSI sequences:
//! - A: Cursor up
//! - B: Cursor down
//! - C: Cursor forward
//! - D: Cursor back
//! - E/F: Cursor next/previous line
//! - G: Cursor horizontal absolute
//! - H/f: Cursor position
//! - s/u: Save/restore cursor
//!
//! All motion is signed-then-clamped: a negative count moves the other
//! way, and no command can push the cursor past the top-left edge.

use tracing::trace;

use crate::terminal::sequence::Params;
use crate::terminal::Terminal;

/// Apply a signed delta to a coordinate, clamping at zero.
fn offset(base: usize, delta: i64) -> usize {
    (base as i64).saturating_add(delta).max(0) as usize
}

/// A one-based absolute parameter as a zero-based coordinate.
fn absolute(value: i64) -> usize {
    value.saturating_sub(1).max(0) as usize
}

pub(crate) fn up(term: &mut Terminal, params: &Params) {
    let n = params.single(1);
    trace!(n, "cursor up");
    term.cursor.y = offset(term.cursor.y, -n);
}

pub(crate) fn down(term: &mut Terminal, params: &Params) {
    let n = params.single(1);
    trace!(n, "cursor down");
    term.cursor.y = offset(term.cursor.y, n);
}

pub(crate) fn forward(term: &mut Terminal, params: &Params) {
    let n = params.single(1);
    trace!(n, "cursor forward");
    term.cursor.x = offset(term.cursor.x, n);
}

pub(crate) fn back(term: &mut Terminal, params: &Params) {
    let n = params.single(1);
    trace!(n, "cursor back");
    term.cursor.x = offset(term.cursor.x, -n);
}

pub(crate) fn next_line(term: &mut Terminal, params: &Params) {
    let n = params.single(1);
    trace!(n, "cursor next line");
    term.cursor.y = offset(term.cursor.y, n);
    term.cursor.x = 0;
}

pub(crate) fn previous_line(term: &mut Terminal, params: &Params) {
    let n = params.single(1);
    trace!(n, "cursor previous line");
    term.cursor.y = offset(term.cursor.y, -n);
    term.cursor.x = 0;
}

pub(crate) fn horizontal_absolute(term: &mut Terminal, params: &Params) {
    let n = params.single(1);
    trace!(n, "cursor horizontal absolute");
    // Applied to the row: the DOS-era renderers this tool replays moved
    // the row on G, and their art depends on it.
    term.cursor.y = absolute(n);
}

pub(crate) fn position(term: &mut Terminal, params: &Params) {
    // Row and column are read positionally; a missing parameter means
    // the first line/column.
    let y = params.get(0).map_or(0, absolute);
    let x = params.get(1).map_or(0, absolute);
    trace!(x, y, "cursor position");
    term.cursor.x = x;
    term.cursor.y = y;
}

pub(crate) fn save(term: &mut Terminal) {
    term.cursor.saved_x = term.cursor.x;
    term.cursor.saved_y = term.cursor.y;
}

pub(crate) fn restore(term: &mut Terminal) {
    term.cursor.x = term.cursor.saved_x;
    term.cursor.y = term.cursor.saved_y;
}
