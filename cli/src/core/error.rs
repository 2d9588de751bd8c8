//! # LzoTool Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types and error handling mechanisms used
//! throughout the lzotool application. It provides a consistent approach to
//! error management with detailed error information and context.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `LzoToolError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error types cover the two failure domains the tool has:
//! - I/O errors (input file open/read failures)
//! - Codec errors (the LZO library rejecting data, or a malformed frame)
//!
//! All errors are propagated to `main`, which prints a one-line message to
//! stderr and exits with status 1. No retries, no partial-result recovery.
//!
use thiserror::Error;

/// Custom error type for the lzotool application.
#[derive(Error, Debug)]
pub enum LzoToolError {
    /// Reading the input source failed (file missing, unreadable, or not a regular file).
    #[error("I/O error: {0}")]
    Io(String),

    /// The LZO library itself reported a failure while compressing or decompressing.
    #[error("LZO codec error: {0}")]
    Codec(String),

    /// The input is not a valid LZO frame (bad magic byte, truncated header,
    /// or a length field that does not match the decoded payload).
    #[error("invalid LZO frame: {0}")]
    Format(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;
