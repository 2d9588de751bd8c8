//! # LzoTool Decompress Command
//!
//! File: cli/src/commands/decompress.rs
//!
//! ## Overview
//!
//! Implements decompression mode (`-d`): read the whole input, decode the
//! LZO frame, and write the restored bytes to standard output. Malformed
//! input fails before anything is written, so stdout never carries partial
//! output.
//!
use crate::common::{codec, fs::io};
use crate::core::error::Result;
use anyhow::Context;
use std::path::Path;
use tracing::info;

/// Entry point for decompression mode.
///
/// Reads all bytes from `file` (or stdin when `None`), decompresses them,
/// and writes the recovered data to stdout. A decode failure propagates to
/// `main`, which reports it on stderr and exits 1.
pub fn handle_decompress(file: Option<&Path>) -> Result<()> {
    info!("Handling decompress mode, input: {:?}", file);

    let input = io::read_input(file)?;
    let restored = codec::decompress(&input).context("Error decompressing input")?;
    io::write_stdout(&restored)?;

    info!(
        "Decompressed {} input bytes into {} output bytes",
        input.len(),
        restored.len()
    );
    Ok(())
}
