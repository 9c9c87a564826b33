//! ansicat - render ANSI/ECMA-48 byte streams to their final screen state.
//!
//! The library decodes a byte stream of text interleaved with terminal
//! escape sequences (the kind produced by DOS-era ANSI art and console
//! programs), applies the effects to a virtual screen buffer, and
//! re-serializes that buffer as bytes. Everything is a batch transform:
//! feed bytes in, render the final state out.
//!
//! - [`terminal`]: the escape-sequence state machine, the growable
//!   screen buffer it mutates, and the renderer back to bytes.
//! - [`codepage`]: the fixed CP437 high-half glyph table used on output.
//!
//! The `ansicat` binary is a thin shim over [`Terminal`]: it copies
//! standard input (or a file) into the terminal and renders the result
//! to standard output (or a file).

pub mod codepage;
pub mod terminal;

pub use terminal::{Cell, Error, Grid, Params, Terminal};
