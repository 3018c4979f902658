//! framectl subcommands
//!
//! Each command maps onto one codec operation. Lenient or strict variants
//! are chosen by [`Mode`]; the rendered result is returned as a string so
//! `main` only prints.

use anyhow::{bail, Context, Result};
use clap::{Subcommand, ValueEnum};
use tracing::{debug, warn};
use voltage_codec::{
    bytes_to_binary_groups, bytes_to_hex, decimal_to_hex, hex_to_binary_text, hex_to_bytes,
    hex_to_decimal, pad_legacy, reverse_hex_byte_order, try_hex_to_binary_text, try_hex_to_bytes,
    try_hex_to_decimal, try_reverse_hex_byte_order, try_xor_checksum_hex, xor_checksum_hex, Align,
    Charset, FieldSpec, Fitted, Truncate, FILL_SPACE, FILL_ZERO,
};

use crate::config::FramectlConfig;

/// Malformed-input policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Lenient,
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FillArg {
    /// `'0'` for text, `0x00` for bytes
    Zero,
    /// `' '` / `0x20`
    Space,
    /// `'F'` for text, `0xFF` for bytes
    F,
}

impl FillArg {
    fn text_fill(self) -> u8 {
        match self {
            Self::Zero => b'0',
            Self::Space => b' ',
            Self::F => b'F',
        }
    }

    fn byte_fill(self) -> u8 {
        match self {
            Self::Zero => FILL_ZERO,
            Self::Space => FILL_SPACE,
            Self::F => 0xFF,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlignArg {
    /// Pad on the right
    Left,
    /// Pad on the left
    Right,
}

impl From<AlignArg> for Align {
    fn from(arg: AlignArg) -> Self {
        match arg {
            AlignArg::Left => Align::Left,
            AlignArg::Right => Align::Right,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Encode the UTF-8 bytes of TEXT as uppercase hex
    Hex { text: String },

    /// Decode hex into a byte list
    Decode { hex: String },

    /// Decimal to byte-aligned hex (10 -> 0A)
    Dec2hex { value: u64 },

    /// Hex to decimal
    Hex2dec { hex: String },

    /// Hex bytes as 8-bit binary groups
    Bin {
        hex: String,
        /// Group separator (overrides config)
        #[arg(long)]
        sep: Option<String>,
    },

    /// Hex number as byte-aligned binary text
    Hex2bin { hex: String },

    /// Reverse the byte order of hex
    Reverse { hex: String },

    /// XOR block check character over hex bytes
    Bcc { hex: String },

    /// Pad or truncate VALUE to a fixed width
    Pad {
        value: String,
        /// Target width (characters, or bytes with --bytes)
        #[arg(short, long, required_unless_present = "field")]
        width: Option<usize>,
        #[arg(long, value_enum, default_value_t = FillArg::Zero)]
        fill: FillArg,
        #[arg(long, value_enum, default_value_t = AlignArg::Left)]
        align: AlignArg,
        /// Treat VALUE as hex bytes
        #[arg(long)]
        bytes: bool,
        /// Use a named field layout from the config file
        #[arg(long, conflicts_with_all = ["width", "fill", "align"])]
        field: Option<String>,
    },

    /// Encode TEXT in a legacy charset and fit it to WIDTH bytes (printed as hex)
    Legacy {
        text: String,
        #[arg(short, long)]
        width: usize,
        #[arg(long, value_enum, default_value_t = FillArg::Space)]
        fill: FillArg,
        /// gbk, latin1 or ascii (overrides config)
        #[arg(long)]
        charset: Option<Charset>,
    },
}

/// Execute a command and render its output
pub fn run(command: Commands, config: &FramectlConfig, mode: Mode) -> Result<String> {
    debug!(?command, ?mode, "Running command");
    let strict = mode == Mode::Strict;

    let output = match command {
        Commands::Hex { text } => bytes_to_hex(text.as_bytes()),
        Commands::Decode { hex } => format!("{:?}", decode(&hex, mode)?),
        Commands::Dec2hex { value } => decimal_to_hex(value),
        Commands::Hex2dec { hex } => {
            if strict {
                try_hex_to_decimal(&hex)?.to_string()
            } else {
                hex_to_decimal(&hex).to_string()
            }
        },
        Commands::Bin { hex, sep } => {
            let bytes = decode(&hex, mode)?;
            let separator = sep.or_else(|| config.binary_separator.clone());
            bytes_to_binary_groups(&bytes, separator.as_deref())
        },
        Commands::Hex2bin { hex } => {
            if strict {
                try_hex_to_binary_text(&hex)?
            } else {
                hex_to_binary_text(&hex)
            }
        },
        Commands::Reverse { hex } => {
            if strict {
                try_reverse_hex_byte_order(&hex)?
            } else {
                reverse_hex_byte_order(&hex)
            }
        },
        Commands::Bcc { hex } => {
            if strict {
                try_xor_checksum_hex(&hex)?
            } else {
                xor_checksum_hex(&hex)
            }
        },
        Commands::Pad {
            value,
            width,
            fill,
            align,
            bytes,
            field,
        } => {
            let spec = match field {
                Some(name) => *config
                    .fields
                    .get(&name)
                    .with_context(|| format!("Unknown field '{}' in config", name))?,
                None => {
                    let width = width.context("--width is required without --field")?;
                    let fill = if bytes {
                        fill.byte_fill()
                    } else {
                        fill.text_fill()
                    };
                    let spec = FieldSpec::new(width, fill, align.into());
                    // Right-aligned numeric fields keep their low-order bytes on overflow
                    if bytes && align == AlignArg::Right {
                        spec.with_truncate(Truncate::KeepTail)
                    } else {
                        spec
                    }
                },
            };
            if bytes {
                pad_hex(&value, spec, mode)?
            } else {
                pad_text(&value, spec, mode)?
            }
        },
        Commands::Legacy {
            text,
            width,
            fill,
            charset,
        } => {
            let fill = match fill {
                FillArg::Zero => FILL_ZERO,
                FillArg::Space => FILL_SPACE,
                FillArg::F => bail!("Legacy fields are filled with zero or space"),
            };
            let charset = charset.unwrap_or(config.charset);
            let field = FieldSpec::left(width, fill);
            if strict {
                // Overflow check against the encoded length, before fitting
                let encoded = charset.encoder().encode(&text)?;
                bytes_to_hex(&field.try_fit_bytes(&encoded)?)
            } else {
                bytes_to_hex(&pad_legacy(charset.encoder(), &text, field)?)
            }
        },
    };
    Ok(output)
}

fn decode(hex: &str, mode: Mode) -> Result<Vec<u8>> {
    match mode {
        Mode::Strict => Ok(try_hex_to_bytes(hex)?),
        Mode::Lenient => Ok(hex_to_bytes(hex)),
    }
}

fn pad_hex(hex: &str, spec: FieldSpec, mode: Mode) -> Result<String> {
    let bytes = decode(hex, mode)?;
    let field = match mode {
        Mode::Strict => spec.try_fit_bytes(&bytes)?,
        Mode::Lenient => report(spec.fit_bytes(&bytes), spec.width),
    };
    Ok(bytes_to_hex(&field))
}

fn pad_text(text: &str, spec: FieldSpec, mode: Mode) -> Result<String> {
    if !spec.fill.is_ascii() {
        bail!(
            "Fill byte 0x{:02X} is only valid for byte fields (use --bytes)",
            spec.fill
        );
    }
    Ok(match mode {
        Mode::Strict => spec.try_fit_text(text)?,
        Mode::Lenient => report(spec.fit_text(text), spec.width),
    })
}

fn report<T>(fitted: Fitted<T>, width: usize) -> T {
    if fitted.truncated {
        warn!(width, "Value truncated to fit field");
    }
    fitted.into_inner()
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    fn lenient(command: Commands) -> String {
        run(command, &FramectlConfig::default(), Mode::Lenient).unwrap()
    }

    fn strict(command: Commands) -> Result<String> {
        run(command, &FramectlConfig::default(), Mode::Strict)
    }

    fn pad(value: &str, width: usize, fill: FillArg, align: AlignArg, bytes: bool) -> Commands {
        Commands::Pad {
            value: value.to_string(),
            width: Some(width),
            fill,
            align,
            bytes,
            field: None,
        }
    }

    #[test]
    fn test_radix_commands() {
        assert_eq!(lenient(Commands::Hex { text: "U".to_string() }), "55");
        assert_eq!(lenient(Commands::Dec2hex { value: 256 }), "0100");
        assert_eq!(lenient(Commands::Hex2dec { hex: "0100".to_string() }), "256");
        assert_eq!(lenient(Commands::Decode { hex: "0aff".to_string() }), "[10, 255]");
        assert_eq!(lenient(Commands::Hex2bin { hex: "03".to_string() }), "00000011");
    }

    #[test]
    fn test_bin_uses_config_separator() {
        assert_eq!(
            lenient(Commands::Bin { hex: "03FF".to_string(), sep: None }),
            "00000011 11111111"
        );
        assert_eq!(
            lenient(Commands::Bin { hex: "03FF".to_string(), sep: Some("-".to_string()) }),
            "00000011-11111111"
        );
    }

    #[test]
    fn test_lenient_and_strict_policies() {
        assert_eq!(lenient(Commands::Hex2dec { hex: "zz".to_string() }), "0");
        assert!(strict(Commands::Hex2dec { hex: "zz".to_string() }).is_err());

        assert_eq!(lenient(Commands::Bcc { hex: String::new() }), "");
        assert!(strict(Commands::Bcc { hex: String::new() }).is_err());

        assert_eq!(lenient(Commands::Reverse { hex: "0102X".to_string() }), "0201");
        assert!(strict(Commands::Reverse { hex: "0102X".to_string() }).is_err());
    }

    #[test]
    fn test_bcc() {
        assert_eq!(lenient(Commands::Bcc { hex: "010203".to_string() }), "00");
        assert_eq!(strict(Commands::Bcc { hex: "0102".to_string() }).unwrap(), "03");
    }

    #[test]
    fn test_pad_text() {
        assert_eq!(lenient(pad("AB", 5, FillArg::Zero, AlignArg::Left, false)), "AB000");
        assert_eq!(lenient(pad("AB", 5, FillArg::Space, AlignArg::Right, false)), "   AB");
        assert_eq!(lenient(pad("ABCDEF", 3, FillArg::F, AlignArg::Left, false)), "ABC");
        assert!(strict(pad("ABCDEF", 3, FillArg::F, AlignArg::Left, false)).is_err());
    }

    #[test]
    fn test_pad_bytes() {
        assert_eq!(lenient(pad("AABB", 4, FillArg::Zero, AlignArg::Left, true)), "AABB0000");
        assert_eq!(lenient(pad("AABB", 4, FillArg::Zero, AlignArg::Right, true)), "0000AABB");
        assert_eq!(lenient(pad("AA", 2, FillArg::F, AlignArg::Left, true)), "AAFF");
        assert_eq!(lenient(pad("010203", 2, FillArg::Zero, AlignArg::Right, true)), "0203");
        assert!(strict(pad("010203", 2, FillArg::Zero, AlignArg::Right, true)).is_err());
    }

    #[test]
    fn test_pad_named_field() {
        let mut config = FramectlConfig::default();
        config
            .fields
            .insert("amount".to_string(), FieldSpec::right(6, b'0'));

        let command = Commands::Pad {
            value: "42".to_string(),
            width: None,
            fill: FillArg::Zero,
            align: AlignArg::Left,
            bytes: false,
            field: Some("amount".to_string()),
        };
        assert_eq!(run(command, &config, Mode::Lenient).unwrap(), "000042");

        let command = Commands::Pad {
            value: "42".to_string(),
            width: None,
            fill: FillArg::Zero,
            align: AlignArg::Left,
            bytes: false,
            field: Some("missing".to_string()),
        };
        assert!(run(command, &config, Mode::Lenient).is_err());
    }

    #[test]
    fn test_named_byte_field_keeps_configured_truncation() {
        let mut config = FramectlConfig::default();
        config.fields.insert(
            "head".to_string(),
            FieldSpec::right(2, FILL_ZERO).with_truncate(Truncate::KeepHead),
        );
        config.fields.insert(
            "tail".to_string(),
            FieldSpec::right(2, FILL_ZERO).with_truncate(Truncate::KeepTail),
        );

        let named = |name: &str| Commands::Pad {
            value: "010203".to_string(),
            width: None,
            fill: FillArg::Zero,
            align: AlignArg::Left,
            bytes: true,
            field: Some(name.to_string()),
        };
        assert_eq!(run(named("head"), &config, Mode::Lenient).unwrap(), "0102");
        assert_eq!(run(named("tail"), &config, Mode::Lenient).unwrap(), "0203");
    }

    #[test]
    fn test_non_ascii_fill_rejected_for_text() {
        let mut config = FramectlConfig::default();
        config
            .fields
            .insert("ff".to_string(), FieldSpec::left(3, 0xFF));

        let command = |bytes: bool| Commands::Pad {
            value: "41".to_string(),
            width: None,
            fill: FillArg::Zero,
            align: AlignArg::Left,
            bytes,
            field: Some("ff".to_string()),
        };
        assert!(run(command(false), &config, Mode::Lenient).is_err());
        assert_eq!(run(command(true), &config, Mode::Lenient).unwrap(), "41FFFF");
    }

    #[test]
    fn test_legacy() {
        let command = Commands::Legacy {
            text: "中文".to_string(),
            width: 6,
            fill: FillArg::Space,
            charset: None,
        };
        assert_eq!(lenient(command), "D6D0CEC42020");

        let command = Commands::Legacy {
            text: "é".to_string(),
            width: 2,
            fill: FillArg::Zero,
            charset: Some(Charset::Latin1),
        };
        assert_eq!(lenient(command), "E900");
    }

    #[test]
    fn test_legacy_errors() {
        let command = Commands::Legacy {
            text: "é".to_string(),
            width: 2,
            fill: FillArg::Zero,
            charset: Some(Charset::Ascii),
        };
        assert!(run(command, &FramectlConfig::default(), Mode::Lenient).is_err());

        let command = Commands::Legacy {
            text: "ABCD".to_string(),
            width: 2,
            fill: FillArg::Space,
            charset: Some(Charset::Ascii),
        };
        assert!(strict(command).is_err());

        let command = Commands::Legacy {
            text: "A".to_string(),
            width: 2,
            fill: FillArg::F,
            charset: None,
        };
        assert!(strict(command).is_err());
    }
}
