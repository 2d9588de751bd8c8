//! # LzoTool Filesystem Utilities
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Groups the filesystem and stream I/O helpers used by the command
//! handlers. Currently this is just the whole-buffer input/output plumbing
//! in `io`; the grouping mirrors the rest of `common` and leaves room for
//! future additions (e.g. writing to a named output file).
//!

/// Whole-buffer input reading (file or stdin) and raw stdout writing.
pub mod io;
