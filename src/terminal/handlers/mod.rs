//! Escape sequence command handlers.
//!
//! Organized by category:
//! - cursor: Cursor movement, positioning, save/restore
//! - editing: Erase in display and erase in line
//! - scroll: Scroll up/down
//! - style: SGR (Select Graphic Rendition) handling

pub(crate) mod cursor;
pub(crate) mod editing;
pub(crate) mod scroll;
pub(crate) mod style;
