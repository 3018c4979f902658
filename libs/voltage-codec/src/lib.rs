//! voltage-codec - Byte-level encoding for fixed-width device frames
//!
//! Pure conversion helpers used when building or inspecting serial,
//! point-of-sale and industrial control frames.
//!
//! # Features
//!
//! - **Radix conversion**: bytes ⇄ uppercase hex ⇄ `u64` ⇄ byte-aligned binary text
//! - **Byte formatting**: 8-bit binary groups, byte-order reversal
//! - **BCC checksum**: XOR fold over an already-sliced frame span
//! - **Fixed-width fields**: zero/space/`F` fill, left or right aligned, with
//!   legacy charset (GBK, Latin-1, ASCII) text fields
//!
//! Lenient functions keep the historical fallbacks (partial decode, zero
//! value, empty result). Each has a strict `try_*` counterpart returning
//! [`CodecError`].
//!
//! # Example
//!
//! ```rust
//! use voltage_codec::{bytes_to_hex, pad_bytes_prefix, pad_legacy_suffix_space, xor_checksum, Gbk};
//!
//! let body = [0x02, 0x10, 0x20];
//! let bcc = xor_checksum(&body).unwrap();
//! assert_eq!(bytes_to_hex(&[bcc]), "32");
//!
//! assert_eq!(pad_bytes_prefix("01F4", 4), "000001F4");
//!
//! let name = pad_legacy_suffix_space(&Gbk, "中文", 6).unwrap();
//! assert_eq!(name, vec![0xD6, 0xD0, 0xCE, 0xC4, 0x20, 0x20]);
//! ```
//!
//! All functions are synchronous and free of shared state; they can be
//! called from any number of threads.

pub mod bcc;
pub mod error;
pub mod field;
pub mod format;
pub mod legacy;
pub mod radix;

// Re-exports for convenience
pub use error::{CodecError, Result};

pub use bcc::{try_xor_checksum_hex, verify_checksum, xor_checksum, xor_checksum_hex};
pub use field::{
    fit_bytes_prefix, pad_bytes_prefix, pad_bytes_suffix, pad_legacy, pad_legacy_suffix_space,
    pad_legacy_suffix_zero, pad_text_prefix_space, pad_text_prefix_zero, pad_text_suffix_f,
    pad_text_suffix_space, pad_text_suffix_zero, try_pad_bytes_prefix, try_pad_bytes_suffix,
    Align, FieldSpec, Fitted, Truncate, FILL_SPACE, FILL_ZERO,
};
pub use format::{
    byte_to_binary_text, bytes_to_binary_groups, reverse_byte_order, reverse_chars,
    reverse_hex_byte_order, try_reverse_hex_byte_order,
};
pub use legacy::{Ascii, Charset, Gbk, Latin1, LegacyEncoder};
pub use radix::{
    bytes_to_hex, decimal_to_binary_text, decimal_to_hex, hex_to_binary_text, hex_to_bytes,
    hex_to_decimal, try_hex_to_binary_text, try_hex_to_bytes, try_hex_to_decimal,
};
