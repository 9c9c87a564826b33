//! Integration tests for the ansicat CLI.

mod helpers;

mod cli_test;
mod render_test;
