//! # LzoTool Common Utilities
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the shared utilities used by the command handlers:
//!
//! - `codec`: The LZO delegation layer and frame header handling.
//! - `fs`: Whole-buffer input/output plumbing (file, stdin, stdout).
//!
//! Command handlers in `commands/` compose these pieces; nothing in `common`
//! knows about argument parsing or exit codes.
//!

/// Compression/decompression delegation to the external LZO capability.
pub mod codec;

/// Filesystem and stream I/O helpers.
pub mod fs;
