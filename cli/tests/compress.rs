//! # LzoTool Compress Mode Integration Tests
//!
//! File: cli/tests/compress.rs
//!
//! ## Overview
//!
//! Exercises the default (compress) mode of the binary end to end: input
//! from stdin or a named file, the frame header on the output, and error
//! reporting for unreadable inputs.
//!

mod common;
use common::{compress_via_cli, lzotool_cmd};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

/// Compressed output starts with the 0xF0 magic byte followed by the
/// big-endian uncompressed length.
#[test]
fn compress_emits_frame_header() {
    let data = b"hello world";
    let framed = compress_via_cli(data);
    assert!(framed.len() > 5);
    assert_eq!(framed[0], 0xF0);
    assert_eq!(framed[1..5], (data.len() as u32).to_be_bytes());
}

/// Omitting the file argument reads from standard input.
#[test]
fn compress_reads_stdin_when_no_file_named() {
    let framed = compress_via_cli(b"stdin input bytes");
    assert!(!framed.is_empty());
}

/// A named input file is read instead of stdin.
#[test]
fn compress_reads_named_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("input.txt");
    fs::write(&path, b"file input bytes").expect("write fixture");

    let output = lzotool_cmd().arg(&path).output().expect("run lzotool");
    assert!(output.status.success());
    assert_eq!(output.stdout[0], 0xF0);
    assert_eq!(output.stdout[1..5], 16u32.to_be_bytes());
}

/// The -c/--stdout flag is accepted and changes nothing: output already
/// goes to stdout.
#[test]
fn compress_accepts_stdout_flag() {
    let with_flag = lzotool_cmd()
        .arg("-c")
        .write_stdin("same bytes")
        .output()
        .expect("run lzotool");
    assert!(with_flag.status.success());
    assert_eq!(with_flag.stdout, compress_via_cli(b"same bytes"));
}

/// A missing input file exits 1 with a one-line error on stderr.
#[test]
fn compress_missing_file_fails() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("does-not-exist.txt");
    lzotool_cmd()
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stdout(predicate::str::is_empty());
}
