//! # LzoTool LZO Codec Delegation (`common::codec::lzo`)
//!
//! File: cli/src/common/codec/lzo.rs
//!
//! ## Overview
//!
//! This module is the single place that talks to the external LZO
//! capability (the `minilzo-rs` crate) and the single place that knows the
//! frame layout. Everything else in the application treats compression as an
//! opaque `compress(bytes) -> bytes` / `decompress(bytes) -> bytes` pair.
//!
//! ## Frame layout
//!
//! Compressed data carries the header the original python-lzo bindings
//! emitted, byte for byte:
//!
//! ```text
//! +-------+---------------------------+----------------------+
//! | 0xF0  | uncompressed length (u32, | raw LZO1X-1 stream   |
//! |       | big-endian)               |                      |
//! +-------+---------------------------+----------------------+
//! ```
//!
//! The magic byte is `0xF0` for the LZO1X-1 level this tool compresses
//! with; `0xF1` (the bindings' high-compression level) is accepted on
//! decompress. Removal of the header is not supported — that limitation is
//! inherited from the upstream tool, where stripping it was a known open
//! problem, and is deliberately left as-is for interoperability with data
//! produced there.
//!
//! The length field is what sizes the decompression buffer; without it raw
//! LZO1X gives no way to know the output size in advance.
//!
use crate::core::error::{LzoToolError, Result};
use minilzo_rs::LZO;
use tracing::debug;

/// Magic byte marking an LZO1X-1 frame (what this tool emits).
const MAGIC_LZO1X_1: u8 = 0xF0;

/// Magic byte marking an LZO1X-999 frame (accepted on decompress only).
const MAGIC_LZO1X_999: u8 = 0xF1;

/// Total header size: one magic byte plus the big-endian u32 length.
const HEADER_LEN: usize = 5;

/// Upper bound on the declared uncompressed length (1 GiB). The whole
/// output buffer is allocated up front from this field, so an absurd value
/// in a corrupt frame must be rejected rather than allocated.
const MAX_UNCOMPRESSED_LEN: usize = 1 << 30;

/// Compresses a buffer with LZO1X-1 and prepends the frame header.
///
/// The returned bytes are exactly what the original tool produced: magic
/// `0xF0`, the input length big-endian, then the raw LZO stream.
///
/// # Errors
///
/// Returns an `Err` if the input is too large to describe in the 32-bit
/// length field, or if the LZO library reports a failure.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    if data.len() > u32::MAX as usize {
        anyhow::bail!(LzoToolError::Format(format!(
            "input of {} bytes does not fit the 32-bit frame length field",
            data.len()
        )));
    }

    let mut lzo = init_lzo()?;
    let payload = lzo
        .compress(data)
        .map_err(|e| LzoToolError::Codec(format!("compression failed: {:?}", e)))?;

    let mut framed = Vec::with_capacity(HEADER_LEN + payload.len());
    framed.push(MAGIC_LZO1X_1);
    framed.extend_from_slice(&(data.len() as u32).to_be_bytes());
    framed.extend_from_slice(&payload);

    debug!(
        "Compressed {} bytes into a {}-byte frame",
        data.len(),
        framed.len()
    );
    Ok(framed)
}

/// Decompresses a framed LZO buffer back to the original bytes.
///
/// Validates the header (magic byte, length sanity), delegates the payload
/// to the LZO library sized by the declared length, and finally checks that
/// the decoded length matches the declaration.
///
/// # Errors
///
/// Returns an `Err` (`LzoToolError::Format` or `LzoToolError::Codec`) if
/// the input is shorter than the header, carries an unknown magic byte,
/// declares an oversized length, fails to decode, or decodes to a length
/// other than the declared one. No partial output is ever returned.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    if data.len() < HEADER_LEN {
        anyhow::bail!(LzoToolError::Format(format!(
            "input is {} bytes, shorter than the {}-byte frame header",
            data.len(),
            HEADER_LEN
        )));
    }

    match data[0] {
        MAGIC_LZO1X_1 | MAGIC_LZO1X_999 => {}
        other => {
            anyhow::bail!(LzoToolError::Format(format!(
                "bad magic byte 0x{:02x}, data is not in LZO format",
                other
            )));
        }
    }

    let declared = u32::from_be_bytes([data[1], data[2], data[3], data[4]]) as usize;
    if declared > MAX_UNCOMPRESSED_LEN {
        anyhow::bail!(LzoToolError::Format(format!(
            "declared uncompressed length {} exceeds the {} byte limit",
            declared, MAX_UNCOMPRESSED_LEN
        )));
    }

    let mut lzo = init_lzo()?;
    let out = lzo
        .decompress_safe(&data[HEADER_LEN..], declared)
        .map_err(|e| LzoToolError::Codec(format!("decompression failed: {:?}", e)))?;

    if out.len() != declared {
        anyhow::bail!(LzoToolError::Format(format!(
            "decompressed to {} bytes but the header declared {}",
            out.len(),
            declared
        )));
    }

    debug!("Decompressed {} bytes into {} bytes", data.len(), out.len());
    Ok(out)
}

/// Initializes the LZO library instance, mapping its error into ours.
fn init_lzo() -> Result<LZO> {
    LZO::init()
        .map_err(|e| LzoToolError::Codec(format!("LZO initialization failed: {:?}", e)).into())
}
