//! # LzoTool Codec Utilities (`common::codec`)
//!
//! File: cli/src/common/codec/mod.rs
//!
//! ## Overview
//!
//! This module provides the compression capability the command handlers
//! delegate to. The tool has no algorithmic content of its own: the `lzo`
//! submodule wraps the external LZO library and owns the frame header, and
//! its two functions are re-exported here so callers can simply write
//! `codec::compress(...)` / `codec::decompress(...)`.
//!

/// LZO1X delegation and frame header handling.
pub mod lzo;

pub use lzo::{compress, decompress};
