//! # LzoTool Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the three operating modes of the lzotool CLI and
//! makes them accessible to the main application entry point (`main.rs`).
//!
//! ## Modes
//!
//! - `compress`: The default mode; frames and compresses the input to stdout.
//! - `decompress`: Selected with `-d`; restores the original bytes to stdout.
//! - `test`: Selected with `-t`; verification-only decompression that reports
//!   byte counts on stderr and never writes to stdout.
//!
//! Each mode is a single `handle_*` function following the same linear shape:
//! read the whole input, delegate to the codec, write or report. There is no
//! state machine and no intermediate state beyond "reading", "delegating",
//! "done".
//!

/// Compression mode (the default when neither `-d` nor `-t` is given).
pub mod compress;
/// Decompression mode (`-d` / `--decompress`).
pub mod decompress;
/// Test mode (`-t` / `--test`): decompress, discard, report.
pub mod test;
