//! # LzoTool Input/Output Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! This module centralizes the byte-stream input and output operations the
//! tool needs. Per invocation there is exactly one input source (a named
//! file, or standard input when no file is given) and one output sink
//! (standard output). The whole input is read into a single in-memory buffer
//! before any codec work starts; the tool never streams.
//!
//! ## Architecture
//!
//! The module offers three focused utility functions:
//! - **`read_input`**: Dispatches on `Option<&Path>` — reads the named file
//!   when a path is present, otherwise drains standard input.
//! - **`read_file_to_bytes`**: Reads an entire file into a `Vec<u8>`,
//!   rejecting paths that exist but are not regular files, and adding
//!   context to I/O errors with `anyhow::Context`.
//! - **`write_stdout`**: Writes a byte buffer to standard output unmodified
//!   and flushes it, so compressed/decompressed data is never interleaved
//!   with diagnostics (which all go to stderr).
//!
use crate::core::error::{LzoToolError, Result};
use anyhow::Context;
use std::fs;
use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;

/// Reads all bytes from the selected input source.
///
/// When `file` is `Some`, the named file is read in full; when it is `None`
/// the tool drains standard input instead, so the binary can sit in a pipe
/// like the classic compression filters do.
///
/// # Arguments
///
/// * `file` - Optional path to the input file; `None` selects stdin.
///
/// # Returns
///
/// * `Result<Vec<u8>>` - The complete input buffer.
///
/// # Errors
///
/// Returns an `Err` if the file cannot be opened or read, or if reading
/// from standard input fails.
pub fn read_input(file: Option<&Path>) -> Result<Vec<u8>> {
    match file {
        Some(path) => read_file_to_bytes(path),
        None => {
            debug!("No input file named, reading from stdin");
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read from standard input")?;
            debug!("Read {} bytes from stdin", buf.len());
            Ok(buf)
        }
    }
}

/// Reads the entire content of a file into a byte vector.
///
/// Rejects paths that exist but are directories before attempting the read,
/// so the user gets a precise message instead of a raw OS error.
///
/// # Arguments
///
/// * `path` - A `&Path` reference to the file to read.
///
/// # Returns
///
/// * `Result<Vec<u8>>` - The file content as raw bytes.
///
/// # Errors
///
/// Returns an `Err` if the path is a directory, or if the file cannot be
/// found, opened, or read, with context indicating which file failed.
pub fn read_file_to_bytes(path: &Path) -> Result<Vec<u8>> {
    if path.is_dir() {
        anyhow::bail!(LzoToolError::Io(format!(
            "input path is a directory, not a file: {:?}",
            path
        )));
    }
    let buf =
        fs::read(path).with_context(|| format!("Failed to read input file {:?}", path))?;
    debug!("Read {} bytes from {:?}", buf.len(), path);
    Ok(buf)
}

/// Writes a byte buffer to standard output unmodified, then flushes.
///
/// All diagnostic text in the application goes to stderr, so this is the
/// only writer that ever touches stdout; test mode never calls it.
///
/// # Errors
///
/// Returns an `Err` if writing to or flushing stdout fails (e.g. a closed
/// pipe).
pub fn write_stdout(data: &[u8]) -> Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    handle
        .write_all(data)
        .context("Failed to write output to standard output")?;
    handle.flush().context("Failed to flush standard output")?;
    debug!("Wrote {} bytes to stdout", data.len());
    Ok(())
}
