//! Legacy charset encoders for fixed-width text fields
//!
//! Older devices expect text fields in a pre-Unicode charset. Field padding
//! goes through [`LegacyEncoder`] so the embedding application can supply
//! its own charset; the built-in ones cover what deployed terminals use.
//!
//! Encoders never drop or substitute characters: anything outside the
//! repertoire is reported as [`CodecError::UnsupportedCharacter`].

use encoding_rs::EncoderResult;
use serde::{Deserialize, Serialize};

use crate::error::{CodecError, Result};

/// Transcoder from Rust text to a legacy byte representation
pub trait LegacyEncoder: Send + Sync {
    /// Charset name used in error reports
    fn charset(&self) -> &'static str;

    /// Encode `text`, failing on the first unrepresentable character
    fn encode(&self, text: &str) -> Result<Vec<u8>>;
}

/// GBK (simplified Chinese, 1 or 2 bytes per character)
#[derive(Debug, Clone, Copy, Default)]
pub struct Gbk;

impl LegacyEncoder for Gbk {
    fn charset(&self) -> &'static str {
        "GBK"
    }

    fn encode(&self, text: &str) -> Result<Vec<u8>> {
        let mut encoder = encoding_rs::GBK.new_encoder();
        let capacity = encoder
            .max_buffer_length_from_utf8_without_replacement(text.len())
            .ok_or_else(|| CodecError::encoding("GBK output length overflow"))?;
        let mut out = vec![0u8; capacity];

        let (result, _read, written) =
            encoder.encode_from_utf8_without_replacement(text, &mut out, true);
        match result {
            EncoderResult::InputEmpty => {
                out.truncate(written);
                Ok(out)
            },
            EncoderResult::Unmappable(ch) => {
                Err(CodecError::unsupported_character(ch, self.charset()))
            },
            EncoderResult::OutputFull => Err(CodecError::encoding("GBK output buffer full")),
        }
    }
}

/// ISO-8859-1: U+0000..=U+00FF, one byte per character
#[derive(Debug, Clone, Copy, Default)]
pub struct Latin1;

impl LegacyEncoder for Latin1 {
    fn charset(&self) -> &'static str {
        "ISO-8859-1"
    }

    fn encode(&self, text: &str) -> Result<Vec<u8>> {
        single_byte(text, 0xFF, self.charset())
    }
}

/// 7-bit ASCII
#[derive(Debug, Clone, Copy, Default)]
pub struct Ascii;

impl LegacyEncoder for Ascii {
    fn charset(&self) -> &'static str {
        "ASCII"
    }

    fn encode(&self, text: &str) -> Result<Vec<u8>> {
        single_byte(text, 0x7F, self.charset())
    }
}

fn single_byte(text: &str, max: u32, charset: &'static str) -> Result<Vec<u8>> {
    text.chars()
        .map(|ch| {
            u8::try_from(u32::from(ch))
                .ok()
                .filter(|b| u32::from(*b) <= max)
                .ok_or_else(|| CodecError::unsupported_character(ch, charset))
        })
        .collect()
}

/// Built-in charset selector, usable from configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Charset {
    #[default]
    Gbk,
    Latin1,
    Ascii,
}

impl Charset {
    pub fn encoder(self) -> &'static dyn LegacyEncoder {
        match self {
            Self::Gbk => &Gbk,
            Self::Latin1 => &Latin1,
            Self::Ascii => &Ascii,
        }
    }
}

impl std::str::FromStr for Charset {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gbk" => Ok(Self::Gbk),
            "latin1" | "iso-8859-1" => Ok(Self::Latin1),
            "ascii" => Ok(Self::Ascii),
            other => Err(format!("unknown charset '{}'", other)),
        }
    }
}
