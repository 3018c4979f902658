//! BCC (Block Check Character) XOR checksum
//!
//! The checksum is computed over exactly the span passed in. Callers slice
//! the frame the same way the receiver does; nothing here locates frame
//! boundaries.

use tracing::debug;

use crate::error::{CodecError, Result};
use crate::radix::{bytes_to_hex, try_hex_to_bytes};

/// XOR-fold a byte span into a single check byte
///
/// The fold is seeded with the first byte, so a one-byte span checksums to
/// itself. An empty span is rejected.
pub fn xor_checksum(bytes: &[u8]) -> Result<u8> {
    let (first, rest) = bytes
        .split_first()
        .ok_or(CodecError::EmptyChecksumInput)?;
    Ok(rest.iter().fold(*first, |bcc, b| bcc ^ b))
}

/// BCC of hex text, as a two-digit hex byte
///
/// Empty or malformed input yields `""`.
pub fn xor_checksum_hex(text: &str) -> String {
    try_xor_checksum_hex(text).unwrap_or_else(|e| {
        debug!(error = %e, "BCC over hex text produced no result");
        String::new()
    })
}

pub fn try_xor_checksum_hex(text: &str) -> Result<String> {
    let bytes = try_hex_to_bytes(text)?;
    let bcc = xor_checksum(&bytes)?;
    Ok(bytes_to_hex(&[bcc]))
}

/// Check a received span against its transmitted BCC
pub fn verify_checksum(bytes: &[u8], expected: u8) -> Result<bool> {
    Ok(xor_checksum(bytes)? == expected)
}
