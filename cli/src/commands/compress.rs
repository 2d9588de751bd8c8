//! # LzoTool Compress Command
//!
//! File: cli/src/commands/compress.rs
//!
//! ## Overview
//!
//! Implements the default operating mode: read the whole input, delegate it
//! to the LZO capability, and emit the framed compressed bytes to standard
//! output unmodified.
//!
//! Note that the output carries the 5-byte frame header described in
//! `common::codec::lzo`; there is no flag to strip it. Consumers that want
//! a raw LZO1X stream have to skip the header themselves — an upstream
//! limitation this tool preserves rather than papers over.
//!
use crate::common::{codec, fs::io};
use crate::core::error::Result;
use std::path::Path;
use tracing::info;

/// # Handle Compress Command (`handle_compress`)
///
/// Entry point for compression mode. Reads all bytes from `file` (or stdin
/// when `None`), compresses them, and writes the framed result to stdout.
///
/// ## Arguments
///
/// * `file` - Optional input file path; `None` reads from standard input.
///
/// ## Returns
///
/// * `Result<()>` - `Ok(())` on success; any I/O or codec failure is
///   propagated to `main` for reporting and exit-code mapping.
pub fn handle_compress(file: Option<&Path>) -> Result<()> {
    info!("Handling compress mode, input: {:?}", file);

    let input = io::read_input(file)?;
    let framed = codec::compress(&input)?;
    io::write_stdout(&framed)?;

    info!(
        "Compressed {} input bytes into {} output bytes",
        input.len(),
        framed.len()
    );
    Ok(())
}
