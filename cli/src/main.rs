//! # LzoTool Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the lzotool CLI, a thin
//! adapter around an external LZO compression capability. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the mode handler (compress, decompress, or test)
//! - Mapping any failure to a one-line stderr message and exit status 1
//!
//! ## Architecture
//!
//! The application follows a modular structure:
//! - Mode handlers live in `commands/` (one file per mode)
//! - Shared plumbing (codec delegation, I/O) lives in `common/`
//! - Error types live in `core/`
//! - All errors are propagated to this level for consistent handling
//!
//! ## Examples
//!
//! Basic lzotool usage:
//!
//! ```bash
//! # Compress a file to stdout
//! lzotool data.txt > data.lzo
//!
//! # Decompress from stdin
//! lzotool -d < data.lzo > data.txt
//!
//! # Verify an archive without producing output
//! lzotool -t data.lzo
//! ```
//!
//! Processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level (stderr only)
//! 3. Route to the selected mode handler
//! 4. Format and display any error, exiting 1
//!
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

// Declare the top-level modules of the CLI crate.
mod commands; // Mode handlers (compress, decompress, test).
mod common; // Shared utilities (codec, I/O).
mod core; // Core infrastructure (errors).

/// Defines the command-line arguments structure using Clap's derive macros.
///
/// The surface intentionally mirrors the classic compression filters: mode
/// flags plus an optional positional input file, with stdin as the fallback
/// input and stdout as the only data sink.
#[derive(Parser, Debug)]
#[command(
    name = "lzotool",
    about = "Raw LZO compression/decompression wrapper",
    long_about = "Compress, decompress, or verify a byte stream with LZO1X.\n\
                  Reads a named file or standard input; data is always written\n\
                  to standard output, diagnostics to standard error.",
    version
)]
struct Cli {
    /// Write output to stdout (already the default; accepted for compatibility).
    #[arg(short = 'c', long = "stdout")]
    stdout: bool,

    /// Decompress the input instead of compressing it.
    #[arg(short = 'd', long = "decompress")]
    decompress: bool,

    /// Test the integrity of compressed input; implies decompress, writes no output.
    #[arg(short = 't', long = "test")]
    test: bool,

    /// Input file (default: stdin).
    file: Option<PathBuf>,

    /// Increase diagnostic verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    // Logs must go to stderr: stdout is reserved for compressed/decompressed data.
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);
    if cli.stdout {
        // Output already goes to stdout unconditionally; the flag exists so
        // invocations written for the original tool keep working.
        tracing::debug!("--stdout given; output target is stdout regardless");
    }

    // Test mode implies decompression and wins over a bare `-d`.
    let command_result = if cli.test {
        commands::test::handle_test(cli.file.as_deref())
    } else if cli.decompress {
        commands::decompress::handle_decompress(cli.file.as_deref())
    } else {
        commands::compress::handle_compress(cli.file.as_deref())
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
