//! Terminal write errors.

/// Errors surfaced while feeding bytes to a [`Terminal`](super::Terminal).
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// A byte with the high bit set arrived inside an escape sequence.
    ///
    /// The parser is intentionally left mid-sequence, so the stream must
    /// be treated as dead; feeding further bytes is unsupported.
    #[error("illegal high byte 0x{byte:02x} in escape sequence")]
    IllegalByte { byte: u8 },

    /// An escape sequence terminated with a command this emulation does
    /// not implement. The parser is back at ground state, so the caller
    /// may choose to skip the sequence and continue.
    #[error("unrecognized escape command {command:?} (parameters {params:?})")]
    UnrecognizedCommand {
        command: char,
        /// Raw accumulated parameter bytes, lossily decoded for display.
        params: String,
    },
}
