//! Fixed-width field padding and truncation
//!
//! A [`FieldSpec`] describes one fixed-width slot of a frame: its width, the
//! fill value and which side the content sits on. Applying it always yields
//! exactly `width` units (bytes for byte fields, characters for text fields),
//! padding when the content is short and cutting when it is long. Cuts are
//! reported through [`Fitted::truncated`] so callers can tell a clean fit
//! from an overflow.
//!
//! The `pad_*` helpers are the presets frame builders use; the `try_*`
//! variants turn overflow into [`CodecError::WidthOverflow`].
//!
//! The `pad_text_*` helpers count characters. Non-ASCII text whose wire
//! width is counted in bytes should go through [`pad_legacy`] instead.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::error::{CodecError, Result};
use crate::legacy::LegacyEncoder;
use crate::radix::{bytes_to_hex, hex_to_bytes, try_hex_to_bytes};

/// Zero byte fill for binary fields
pub const FILL_ZERO: u8 = 0x00;
/// ASCII space fill
pub const FILL_SPACE: u8 = b' ';

/// Which side of the field the content occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Content first, fill after (suffix padding)
    Left,
    /// Fill first, content after (prefix padding)
    Right,
}

/// Which part of over-long content survives
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Truncate {
    #[default]
    KeepHead,
    KeepTail,
}

/// Layout of one fixed-width field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub width: usize,
    /// Fill byte
    ///
    /// Any byte is accepted so binary fields can fill with `0xFF`. Text fields
    /// render the fill as a character, so only ASCII fills keep the text
    /// width equal to its byte length; the CLI rejects non-ASCII text fills.
    #[serde(default, deserialize_with = "deserialize_fill")]
    pub fill: u8,
    pub align: Align,
    #[serde(default)]
    pub truncate: Truncate,
}

/// A field value together with whether content had to be cut to fit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fitted<T> {
    pub value: T,
    pub truncated: bool,
}

impl<T> Fitted<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Fitted<U> {
        Fitted {
            value: f(self.value),
            truncated: self.truncated,
        }
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl FieldSpec {
    pub const fn new(width: usize, fill: u8, align: Align) -> Self {
        Self {
            width,
            fill,
            align,
            truncate: Truncate::KeepHead,
        }
    }

    /// Left-aligned field (pad suffix)
    pub const fn left(width: usize, fill: u8) -> Self {
        Self::new(width, fill, Align::Left)
    }

    /// Right-aligned field (pad prefix)
    pub const fn right(width: usize, fill: u8) -> Self {
        Self::new(width, fill, Align::Right)
    }

    pub const fn with_truncate(mut self, truncate: Truncate) -> Self {
        self.truncate = truncate;
        self
    }

    /// Fit bytes into exactly `width` bytes
    pub fn fit_bytes(&self, bytes: &[u8]) -> Fitted<Vec<u8>> {
        let truncated = bytes.len() > self.width;
        let src = if truncated {
            match self.truncate {
                Truncate::KeepHead => &bytes[..self.width],
                Truncate::KeepTail => &bytes[bytes.len() - self.width..],
            }
        } else {
            bytes
        };

        let mut value = vec![self.fill; self.width];
        match self.align {
            Align::Left => value[..src.len()].copy_from_slice(src),
            Align::Right => value[self.width - src.len()..].copy_from_slice(src),
        }
        Fitted { value, truncated }
    }

    /// Fit text into exactly `width` characters
    ///
    /// A non-ASCII fill (`0x80..=0xFF`) is rendered as the Latin-1 character
    /// of that value, which takes two bytes in UTF-8.
    pub fn fit_text(&self, text: &str) -> Fitted<String> {
        let len = text.chars().count();
        if len >= self.width {
            let value = match self.truncate {
                Truncate::KeepHead => text.chars().take(self.width).collect(),
                Truncate::KeepTail => text.chars().skip(len - self.width).collect(),
            };
            return Fitted {
                value,
                truncated: len > self.width,
            };
        }

        let padding: String = std::iter::repeat(char::from(self.fill))
            .take(self.width - len)
            .collect();
        let value = match self.align {
            Align::Left => format!("{}{}", text, padding),
            Align::Right => format!("{}{}", padding, text),
        };
        Fitted {
            value,
            truncated: false,
        }
    }

    /// Like [`fit_bytes`](Self::fit_bytes) but overflow is an error
    pub fn try_fit_bytes(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        if bytes.len() > self.width {
            return Err(CodecError::width_overflow(bytes.len(), self.width));
        }
        Ok(self.fit_bytes(bytes).value)
    }

    /// Like [`fit_text`](Self::fit_text) but overflow is an error
    pub fn try_fit_text(&self, text: &str) -> Result<String> {
        let len = text.chars().count();
        if len > self.width {
            return Err(CodecError::width_overflow(len, self.width));
        }
        Ok(self.fit_text(text).value)
    }
}

/// Accept either a byte value (`48`) or a one-character string (`"0"`)
fn deserialize_fill<'de, D>(deserializer: D) -> std::result::Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum FillRepr {
        Byte(u8),
        Char(char),
    }

    match FillRepr::deserialize(deserializer)? {
        FillRepr::Byte(b) => Ok(b),
        FillRepr::Char(c) => u8::try_from(u32::from(c))
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| serde::de::Error::custom(format!("fill {:?} is not ASCII", c))),
    }
}

// ============================================================================
// Hex byte fields
// ============================================================================

/// Left-align hex bytes in a zero-filled field of `target_bytes`
///
/// `"AABB", 4` -> `"AABB0000"`. Longer input keeps its first bytes.
pub fn pad_bytes_suffix(text: &str, target_bytes: usize) -> String {
    let fitted = FieldSpec::left(target_bytes, FILL_ZERO).fit_bytes(&hex_to_bytes(text));
    if fitted.truncated {
        debug!(width = target_bytes, "Suffix byte field truncated");
    }
    bytes_to_hex(&fitted.value)
}

pub fn try_pad_bytes_suffix(text: &str, target_bytes: usize) -> Result<String> {
    let bytes = try_hex_to_bytes(text)?;
    let field = FieldSpec::left(target_bytes, FILL_ZERO).try_fit_bytes(&bytes)?;
    Ok(bytes_to_hex(&field))
}

/// Right-align hex bytes in a zero-filled field, flagging overflow
///
/// Over-long input keeps its last `target_bytes` bytes.
pub fn fit_bytes_prefix(text: &str, target_bytes: usize) -> Fitted<String> {
    let fitted = FieldSpec::right(target_bytes, FILL_ZERO)
        .with_truncate(Truncate::KeepTail)
        .fit_bytes(&hex_to_bytes(text));
    if fitted.truncated {
        debug!(width = target_bytes, "Prefix byte field truncated from the front");
    }
    fitted.map(|bytes| bytes_to_hex(&bytes))
}

/// Right-align hex bytes in a zero-filled field of `target_bytes`
///
/// `"AABB", 4` -> `"0000AABB"`
pub fn pad_bytes_prefix(text: &str, target_bytes: usize) -> String {
    fit_bytes_prefix(text, target_bytes).into_inner()
}

pub fn try_pad_bytes_prefix(text: &str, target_bytes: usize) -> Result<String> {
    let bytes = try_hex_to_bytes(text)?;
    let field = FieldSpec::right(target_bytes, FILL_ZERO).try_fit_bytes(&bytes)?;
    Ok(bytes_to_hex(&field))
}

// ============================================================================
// Text fields (width in characters, over-long text keeps its head)
// ============================================================================
//
// Non-ASCII text whose wire width is counted in bytes belongs in `pad_legacy`.

pub fn pad_text_suffix_zero(text: &str, target_len: usize) -> String {
    FieldSpec::left(target_len, b'0').fit_text(text).value
}

pub fn pad_text_suffix_space(text: &str, target_len: usize) -> String {
    FieldSpec::left(target_len, b' ').fit_text(text).value
}

pub fn pad_text_suffix_f(text: &str, target_len: usize) -> String {
    FieldSpec::left(target_len, b'F').fit_text(text).value
}

pub fn pad_text_prefix_zero(text: &str, target_len: usize) -> String {
    FieldSpec::right(target_len, b'0').fit_text(text).value
}

pub fn pad_text_prefix_space(text: &str, target_len: usize) -> String {
    FieldSpec::right(target_len, b' ').fit_text(text).value
}

// ============================================================================
// Legacy charset fields (width in encoded bytes)
// ============================================================================

/// Encode `text` with `encoder` and fit the bytes into `field`
///
/// The width is a byte budget: a truncated field may end in the middle of
/// a multi-byte character.
pub fn pad_legacy<E>(encoder: &E, text: &str, field: FieldSpec) -> Result<Vec<u8>>
where
    E: LegacyEncoder + ?Sized,
{
    let encoded = encoder.encode(text)?;
    let fitted = field.fit_bytes(&encoded);
    if fitted.truncated {
        debug!(
            charset = encoder.charset(),
            encoded = encoded.len(),
            width = field.width,
            "Legacy text field truncated"
        );
    }
    Ok(fitted.value)
}

/// Legacy-encode and zero-fill on the right to `target_bytes`
pub fn pad_legacy_suffix_zero<E>(encoder: &E, text: &str, target_bytes: usize) -> Result<Vec<u8>>
where
    E: LegacyEncoder + ?Sized,
{
    pad_legacy(encoder, text, FieldSpec::left(target_bytes, FILL_ZERO))
}

/// Legacy-encode and space-fill (`0x20`) on the right to `target_bytes`
pub fn pad_legacy_suffix_space<E>(encoder: &E, text: &str, target_bytes: usize) -> Result<Vec<u8>>
where
    E: LegacyEncoder + ?Sized,
{
    pad_legacy(encoder, text, FieldSpec::left(target_bytes, FILL_SPACE))
}
