//! # LzoTool Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! This module provides shared utility functions used across the
//! integration test files (`compress.rs`, `decompress.rs`, `test_mode.rs`).
//! Each `.rs` file in `cli/tests/` (that isn't a module like this one) is
//! compiled as a separate test crate linked against the `lzotool` binary.
//!

// Allow potentially unused code in this common module, as different test
// files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;

/// Creates an `assert_cmd::Command` pointing at the compiled `lzotool`
/// binary target for the current test run.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn lzotool_cmd() -> Command {
    Command::cargo_bin("lzotool").expect("Failed to find lzotool binary for testing")
}

/// Runs the binary in compress mode over `data` fed via stdin and returns
/// the framed compressed bytes it wrote to stdout.
///
/// ## Panics
/// Panics if the compression invocation does not exit successfully.
pub fn compress_via_cli(data: &[u8]) -> Vec<u8> {
    let output = lzotool_cmd()
        .write_stdin(data.to_vec())
        .output()
        .expect("Failed to run lzotool for compression");
    assert!(
        output.status.success(),
        "compression invocation failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    output.stdout
}
