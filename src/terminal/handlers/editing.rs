//! Erase handlers.
//!
//! Handles CSI sequences:
//! - J: Erase in display
//! - K: Erase in line
//!
//! Erasure comes in two shapes with different observable results: an
//! in-place clear resets cells to blank but keeps the row length, while
//! a truncation shrinks the row or the page. Which one applies per scope
//! is part of the emulated behavior, not an implementation choice.

use tracing::trace;

use crate::terminal::sequence::Params;
use crate::terminal::Terminal;

/// CSI J: erase in display.
///
/// - 0 (default): cursor to end of screen. The cursor row keeps its
///   cells before the cursor and is truncated there; every row below is
///   dropped. An empty remainder drops the cursor row too.
/// - 1: start of screen through cursor. Cells up to and including the
///   cursor are cleared in place, rows above are blanked in place; the
///   page height is untouched. A cursor below the page blanks every row.
/// - 2: whole screen. The page empties and the cursor homes to (0,0),
///   the way ANSI.SYS did.
pub(crate) fn erase_display(term: &mut Terminal, params: &Params) {
    let scope = params.single(0);
    trace!(scope, "erase in display");
    let (x, y) = (term.cursor.x, term.cursor.y);

    match scope {
        1 => {
            let height = term.grid.height();
            if y < height {
                let end = term.grid.row_len(y).min(x + 1);
                term.grid.clear_in_row(y, 0..end);
                for row in 0..y {
                    term.grid.blank_row(row);
                }
            } else {
                for row in 0..height {
                    term.grid.blank_row(row);
                }
            }
        }
        2 => {
            term.grid.clear();
            term.cursor.x = 0;
            term.cursor.y = 0;
        }
        _ => {
            if y < term.grid.height() {
                term.grid.truncate_row(y, x);
                let keep = if term.grid.row_len(y) == 0 { y } else { y + 1 };
                term.grid.truncate_height(keep);
            }
        }
    }
}

/// CSI K: erase in line.
///
/// - 0 (default): cursor to end of line, cleared in place (the row keeps
///   its length; the blanks render as spaces).
/// - 1: start of line through cursor, cleared in place.
/// - 2: whole line, blanked to length zero.
///
/// A cursor outside the page is a no-op in every scope.
pub(crate) fn erase_line(term: &mut Terminal, params: &Params) {
    let scope = params.single(0);
    trace!(scope, "erase in line");
    let (x, y) = (term.cursor.x, term.cursor.y);

    match scope {
        1 => {
            let end = term.grid.row_len(y).min(x + 1);
            term.grid.clear_in_row(y, 0..end);
        }
        2 => term.grid.blank_row(y),
        _ => {
            let end = term.grid.row_len(y);
            term.grid.clear_in_row(y, x..end);
        }
    }
}
