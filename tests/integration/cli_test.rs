//! CLI surface tests: flags, files, error policy.

use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::ansicat;

#[test]
fn help_describes_the_tool() {
    ansicat()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Render"))
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("--lenient"));
}

#[test]
fn version_flag_succeeds() {
    ansicat()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ansicat"));
}

#[test]
fn reads_input_from_a_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("art.ans");
    fs::write(&input, "from a file").unwrap();

    ansicat()
        .arg(&input)
        .assert()
        .success()
        .stdout("from a file\n");
}

#[test]
fn writes_output_to_a_file() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("rendered.txt");

    ansicat()
        .arg("--output")
        .arg(&output)
        .write_stdin("hello")
        .assert()
        .success()
        .stdout("");

    assert_eq!(fs::read_to_string(&output).unwrap(), "hello\n");
}

#[test]
fn missing_input_file_fails_with_context() {
    ansicat()
        .arg("/no/such/file.ans")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn unrecognized_escape_aborts_by_default() {
    ansicat()
        .write_stdin(&b"before\x1b[qafter"[..])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized escape command"));
}

#[test]
fn lenient_mode_skips_unrecognized_escapes() {
    ansicat()
        .arg("--lenient")
        .write_stdin(&b"before\x1b[q!"[..])
        .assert()
        .success()
        .stdout("before!\n");
}

#[test]
fn illegal_byte_in_escape_fails_even_when_lenient() {
    ansicat()
        .arg("--lenient")
        .write_stdin(&b"x\x1b[\xFFm"[..])
        .assert()
        .failure()
        .stderr(predicate::str::contains("illegal high byte"));
}
