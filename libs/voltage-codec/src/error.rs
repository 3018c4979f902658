//! Error types for voltage-codec

use thiserror::Error;

/// Codec errors
///
/// Every failure is a deterministic function of the input, so none of these
/// are retryable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// `offset` is a byte offset into the input text
    #[error("Malformed hex at offset {offset}: {reason}")]
    MalformedHex { offset: usize, reason: String },

    #[error("Hex value does not fit in 64 bits: {digits} significant digits")]
    NumericOverflow { digits: usize },

    #[error("Cannot compute checksum over an empty byte span")]
    EmptyChecksumInput,

    #[error("Character {ch:?} is not representable in {charset}")]
    UnsupportedCharacter { ch: char, charset: &'static str },

    #[error("Field overflow: {actual} units do not fit in width {width}")]
    WidthOverflow { actual: usize, width: usize },

    #[error("Encoding error: {0}")]
    Encoding(String),
}

impl CodecError {
    pub fn malformed_hex(offset: usize, reason: impl Into<String>) -> Self {
        Self::MalformedHex {
            offset,
            reason: reason.into(),
        }
    }

    pub fn unsupported_character(ch: char, charset: &'static str) -> Self {
        Self::UnsupportedCharacter { ch, charset }
    }

    pub fn width_overflow(actual: usize, width: usize) -> Self {
        Self::WidthOverflow { actual, width }
    }

    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }
}

impl From<hex::FromHexError> for CodecError {
    fn from(err: hex::FromHexError) -> Self {
        match err {
            // `c` is the offending byte widened to a char, not a decoded char
            hex::FromHexError::InvalidHexCharacter { c, index } if c.is_ascii() => {
                Self::malformed_hex(index, format!("invalid character {:?}", c))
            },
            hex::FromHexError::InvalidHexCharacter { c, index } => {
                Self::malformed_hex(index, format!("non-ASCII byte 0x{:02X}", u32::from(c)))
            },
            hex::FromHexError::OddLength => Self::malformed_hex(0, "odd number of digits"),
            hex::FromHexError::InvalidStringLength => {
                Self::malformed_hex(0, "invalid string length")
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, CodecError>;
