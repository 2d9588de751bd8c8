//! # LzoTool Test Command
//!
//! File: cli/src/commands/test.rs
//!
//! ## Overview
//!
//! Implements test mode (`-t`): verification-only decompression. The input
//! is decoded exactly as in decompress mode, but the output is discarded;
//! on success a one-line byte-count summary goes to the diagnostic stream
//! and the process exits 0. Standard output stays byte-free in this mode no
//! matter what happens, so the tool can verify archives inside pipelines
//! without contaminating them.
//!
use crate::common::{codec, fs::io};
use crate::core::error::Result;
use anyhow::Context;
use std::path::Path;
use tracing::info;

/// # Handle Test Command (`handle_test`)
///
/// Entry point for test mode. Reads all bytes from `file` (or stdin when
/// `None`) and attempts a full decompression. The decoded bytes are
/// dropped; only the verdict matters.
///
/// On success prints `OK: decompressed <in> -> <out> bytes` to stderr (the
/// same summary line the original tool printed). On failure the error
/// propagates to `main` for stderr reporting and a non-zero exit.
///
/// ## Arguments
///
/// * `file` - Optional input file path; `None` reads from standard input.
///
/// ## Returns
///
/// * `Result<()>` - `Ok(())` when the input decompresses cleanly.
pub fn handle_test(file: Option<&Path>) -> Result<()> {
    info!("Handling test mode, input: {:?}", file);

    let input = io::read_input(file)?;
    let restored = codec::decompress(&input).context("Error decompressing input")?;

    // Verdict goes to stderr; stdout is never written in test mode.
    eprintln!(
        "OK: decompressed {} -> {} bytes",
        input.len(),
        restored.len()
    );
    Ok(())
}
