//! Scroll handlers.
//!
//! Handles CSI sequences:
//! - S: Scroll up
//! - T: Scroll down
//!
//! Scrolling moves the whole page: S discards rows off the top, T pushes
//! blank rows in above the content. A negative count scrolls the other
//! direction. A page that would shrink to nothing becomes empty.

use tracing::trace;

use crate::terminal::sequence::Params;
use crate::terminal::Terminal;

pub(crate) fn up(term: &mut Terminal, params: &Params) {
    let n = params.single(1);
    trace!(n, "scroll up");
    if n >= 0 {
        term.grid.remove_top(n as usize);
    } else {
        term.grid.insert_blank_top(n.unsigned_abs() as usize);
    }
}

pub(crate) fn down(term: &mut Terminal, params: &Params) {
    let n = params.single(1);
    trace!(n, "scroll down");
    if n >= 0 {
        term.grid.insert_blank_top(n as usize);
    } else {
        term.grid.remove_top(n.unsigned_abs() as usize);
    }
}
