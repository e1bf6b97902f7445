//! Integration tests for detecting proxy tags from the command line

#![allow(deprecated)]

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::proxytag_cmd;

#[test]
fn test_detect_sigils_argument() {
    let temp = TempDir::new().unwrap();

    proxytag_cmd()
        .current_dir(temp.path())
        .arg("[foo]")
        .assert()
        .success()
        .stdout("Sigils\t[\t]\tfoo\n");
}

#[test]
fn test_detect_half_sigils() {
    let temp = TempDir::new().unwrap();

    proxytag_cmd()
        .current_dir(temp.path())
        .arg("[foo")
        .arg("foo]")
        .assert()
        .success()
        .stdout("HalfSigilStart\t[\t\tfoo\nHalfSigilEnd\t\t]\tfoo\n");
}

#[test]
fn test_no_match_exit_code() {
    let temp = TempDir::new().unwrap();

    proxytag_cmd()
        .current_dir(temp.path())
        .arg("Hi.")
        .assert()
        .code(2)
        .stdout("no match\tHi.\n");
}

#[test]
fn test_partial_match_reports_every_message() {
    let temp = TempDir::new().unwrap();

    proxytag_cmd()
        .current_dir(temp.path())
        .arg("[a]")
        .arg("plain")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Sigils\t[\t]\ta"))
        .stdout(predicate::str::contains("no match\tplain"));
}

#[test]
fn test_mention_is_not_wrapped() {
    let temp = TempDir::new().unwrap();

    proxytag_cmd()
        .current_dir(temp.path())
        .arg("--method")
        .arg("sigils")
        .arg("x@72838115944828928>")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("no match"));
}

#[test]
fn test_reads_stdin_lines() {
    let temp = TempDir::new().unwrap();

    proxytag_cmd()
        .current_dir(temp.path())
        .write_stdin("「こんにちは」\n★ star\n")
        .assert()
        .success()
        .stdout("Sigils\t「\t」\tこんにちは\nHalfSigilStart\t★\t\t star\n");
}

#[test]
fn test_method_flag_sets_order() {
    let temp = TempDir::new().unwrap();

    proxytag_cmd()
        .current_dir(temp.path())
        .arg("-m")
        .arg("half_sigil_end")
        .arg("-m")
        .arg("sigils")
        .arg("[foo]")
        .assert()
        .success()
        .stdout("HalfSigilEnd\t\t]\t[foo\n");
}

#[test]
fn test_unknown_method_fails() {
    let temp = TempDir::new().unwrap();

    proxytag_cmd()
        .current_dir(temp.path())
        .arg("--method")
        .arg("wrapped")
        .arg("[foo]")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown match method: 'wrapped'"))
        .stderr(predicate::str::contains("half_sigil_start"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let temp = TempDir::new().unwrap();

    proxytag_cmd()
        .current_dir(temp.path())
        .arg("--verbose")
        .arg("[foo]")
        .assert()
        .success()
        .stdout("Sigils\t[\t]\tfoo\n")
        .stderr(predicate::str::contains("proxy tag matched"));
}

#[test]
fn test_invalid_utf8_stdin_line_reported() {
    let temp = TempDir::new().unwrap();

    proxytag_cmd()
        .current_dir(temp.path())
        .write_stdin(&b"[a]\n\xff\nb]\n"[..])
        .assert()
        .code(2)
        .stdout("Sigils\t[\t]\ta\nno match\t\u{FFFD}\nHalfSigilEnd\t\t]\tb\n");
}
