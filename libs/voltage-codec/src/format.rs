//! Byte formatting: 8-bit binary groups and byte-order reversal

use crate::error::Result;
use crate::radix::{bytes_to_hex, hex_to_bytes, try_hex_to_bytes};

/// Render one byte as exactly 8 binary digits
pub fn byte_to_binary_text(byte: u8) -> String {
    format!("{:08b}", byte)
}

/// Render bytes as 8-digit binary groups joined by `separator`
///
/// No separator is written after the last group.
///
/// Example: `[0x03, 0xFF]` with `Some(" ")` -> `"00000011 11111111"`
pub fn bytes_to_binary_groups(bytes: &[u8], separator: Option<&str>) -> String {
    let separator = separator.unwrap_or("");
    let mut out = String::with_capacity(bytes.len() * (8 + separator.len()));
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(&byte_to_binary_text(*byte));
    }
    out
}

/// Reverse byte order (endianness flip of a multi-byte field)
pub fn reverse_byte_order(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().rev().copied().collect()
}

/// Reverse the byte order of hex text
///
/// Malformed input follows the lenient decode of [`hex_to_bytes`]; the
/// result is always canonical uppercase.
pub fn reverse_hex_byte_order(text: &str) -> String {
    bytes_to_hex(&reverse_byte_order(&hex_to_bytes(text)))
}

pub fn try_reverse_hex_byte_order(text: &str) -> Result<String> {
    let bytes = try_hex_to_bytes(text)?;
    Ok(bytes_to_hex(&reverse_byte_order(&bytes)))
}

/// Reverse the character order of text
pub fn reverse_chars(text: &str) -> String {
    text.chars().rev().collect()
}
