//! End-to-end rendering tests through the binary.

use predicates::prelude::*;

use crate::helpers::ansicat;

#[test]
fn plain_text_passes_through() {
    ansicat()
        .write_stdin("hello\r\nworld\r\n")
        .assert()
        .success()
        .stdout("hello\nworld\n");
}

#[test]
fn empty_input_produces_empty_output() {
    ansicat().write_stdin("").assert().success().stdout("");
}

#[test]
fn styled_text_keeps_its_escapes() {
    ansicat()
        .write_stdin(&b"A\x1b[1mB\x1b[0mC"[..])
        .assert()
        .success()
        .stdout(predicate::eq(&b"A\x1b[1mB\x1b[0mC\n"[..]));
}

#[test]
fn cp437_bytes_come_out_as_utf8() {
    ansicat()
        .write_stdin(&[0xC9, 0xCD, 0xBB][..])
        .assert()
        .success()
        .stdout("╔═╗\n");
}

#[test]
fn cursor_positioning_paints_out_of_order() {
    // The second line is drawn first; positioning fills in the first.
    ansicat()
        .write_stdin(&b"\x1b[2;1Hworld\x1b[1;1Hhello"[..])
        .assert()
        .success()
        .stdout("hello\nworld\n");
}

#[test]
fn clear_screen_discards_earlier_content() {
    ansicat()
        .write_stdin(&b"garbage\x1b[2Jclean"[..])
        .assert()
        .success()
        .stdout("clean\n");
}

#[test]
fn scroll_up_drops_top_lines() {
    ansicat()
        .write_stdin(&b"one\r\ntwo\r\nthree\r\n\x1b[2S"[..])
        .assert()
        .success()
        .stdout("three\n");
}
