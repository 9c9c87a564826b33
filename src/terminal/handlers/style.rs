//! SGR (Select Graphic Rendition) handler.
//!
//! Handles the CSI m sequence. The decoded parameter list becomes the
//! active rendition verbatim: a new m sequence fully replaces the
//! previous one, individual attributes are never merged. The list is
//! carried opaquely onto every cell written afterwards and re-emitted as
//! given when the page is rendered back to bytes.

use tracing::trace;

use crate::terminal::sequence::Params;
use crate::terminal::Terminal;

pub(crate) fn set_rendition(term: &mut Terminal, params: &Params) {
    trace!(?params, "set graphic rendition");
    term.rendition = params.clone();
}
