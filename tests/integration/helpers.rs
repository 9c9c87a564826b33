//! Shared helpers for CLI integration tests.

use assert_cmd::Command;

/// A command for the compiled ansicat binary.
pub fn ansicat() -> Command {
    Command::cargo_bin("ansicat").expect("binary builds")
}
