//! Radix conversion between raw bytes, hex text, binary text and `u64`
//!
//! Hex output is always canonical uppercase. Decoders accept either case.
//!
//! Functions come in two flavours:
//! - lenient (`hex_to_bytes`, `hex_to_decimal`, ...) keep the behaviour frame
//!   builders have historically relied on: partial decode or a zero value
//! - strict (`try_*`) report [`CodecError::MalformedHex`] instead

use tracing::debug;

use crate::error::{CodecError, Result};

/// Encode bytes as uppercase hex
///
/// Example: `[0x55, 0xAA]` -> `"55AA"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

/// Decode hex text, stopping at the first malformed digit pair
///
/// Returns the bytes decoded before the bad pair. A trailing unpaired digit
/// is dropped.
pub fn hex_to_bytes(text: &str) -> Vec<u8> {
    let raw = text.as_bytes();
    let even = &raw[..raw.len() & !1];

    match hex::decode(even) {
        Ok(bytes) => {
            if even.len() != raw.len() {
                debug!(len = raw.len(), "Odd-length hex, dropping trailing digit");
            }
            bytes
        },
        Err(hex::FromHexError::InvalidHexCharacter { c, index }) => {
            let valid = &even[..index & !1];
            debug!(
                offset = index,
                character = ?c,
                decoded = valid.len() / 2,
                "Malformed hex, keeping decoded prefix"
            );
            hex::decode(valid).unwrap_or_default()
        },
        Err(e) => {
            debug!(error = %e, "Malformed hex");
            Vec::new()
        },
    }
}

/// Decode hex text, rejecting odd length and non-hex characters
pub fn try_hex_to_bytes(text: &str) -> Result<Vec<u8>> {
    if text.len() % 2 != 0 {
        return Err(CodecError::malformed_hex(
            text.len() - 1,
            "odd number of digits",
        ));
    }
    Ok(hex::decode(text)?)
}

/// Format a number as uppercase hex padded to whole bytes
///
/// One leading `0` is added only when the digit count is odd:
/// `10 -> "0A"`, `255 -> "FF"`, `256 -> "0100"`.
pub fn decimal_to_hex(n: u64) -> String {
    let digits = format!("{:X}", n);
    if digits.len() % 2 == 1 {
        format!("0{}", digits)
    } else {
        digits
    }
}

/// Parse hex text as a number, mapping any failure to `0`
pub fn hex_to_decimal(text: &str) -> u64 {
    try_hex_to_decimal(text).unwrap_or_else(|e| {
        debug!(error = %e, "Hex to decimal fell back to 0");
        0
    })
}

/// Parse hex text as a number
///
/// Empty text and any non-hex character (including a sign) are
/// `MalformedHex`; values wider than 64 bits are `NumericOverflow`.
pub fn try_hex_to_decimal(text: &str) -> Result<u64> {
    if text.is_empty() {
        return Err(CodecError::malformed_hex(0, "empty input"));
    }
    if let Some((offset, c)) = text.char_indices().find(|(_, c)| !c.is_ascii_hexdigit()) {
        return Err(CodecError::malformed_hex(
            offset,
            format!("invalid character {:?}", c),
        ));
    }
    u64::from_str_radix(text, 16).map_err(|_| CodecError::NumericOverflow {
        digits: text.trim_start_matches('0').len(),
    })
}

/// Binary digits of `n`, left-padded with `0` to a multiple of 8
///
/// `0 -> "00000000"`, `256 -> "0000000100000000"`
pub fn decimal_to_binary_text(n: u64) -> String {
    let digits = format!("{:b}", n);
    let width = digits.len().div_ceil(8) * 8;
    format!("{:0>width$}", digits, width = width)
}

/// Hex text to byte-aligned binary text; malformed input yields the text for `0`
pub fn hex_to_binary_text(text: &str) -> String {
    decimal_to_binary_text(hex_to_decimal(text))
}

pub fn try_hex_to_binary_text(text: &str) -> Result<String> {
    try_hex_to_decimal(text).map(decimal_to_binary_text)
}
