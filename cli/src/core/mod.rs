//! # LzoTool Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure pieces shared across the
//! application. For a tool this small that is just the error handling layer;
//! it lives under `core` so that a future configuration or library split has
//! an obvious home.
//!

/// Error types (`LzoToolError`) and the application-wide `Result` alias.
pub mod error;
