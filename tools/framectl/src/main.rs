//! framectl - Frame field toolbox for VoltageEMS device integrations
//!
//! Command-line access to voltage-codec: hex/decimal/binary conversion,
//! BCC checksums and fixed-width field padding, for inspecting captured
//! frames and hand-building test frames.

mod commands;
mod config;
mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing::debug;

use crate::commands::{Commands, Mode};

#[derive(Parser)]
#[command(name = "framectl")]
#[command(about = "Frame field toolbox: hex, BCC and fixed-width fields")]
#[command(long_about = "Frame field toolbox: hex, BCC and fixed-width fields

Examples:
  framectl dec2hex 500                       # 01F4
  framectl bcc 0230310003                    # XOR block check character
  framectl pad 01F4 --bytes -w 4 --align right
  framectl legacy 张三 -w 8 --charset gbk     # space-filled GBK field as hex
  framectl --strict decode 0A0               # fail instead of partial decode")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Configuration file (toml, yaml or json)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,

    /// Fail on malformed hex and field overflow instead of falling back
    #[arg(long, global = true)]
    strict: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    match execute(cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        },
    }
}

fn execute(cli: Cli) -> Result<String> {
    let config = config::load_config(cli.config.as_deref())?;

    let directive = logging::filter_directive(cli.verbose, &config.log_level);
    logging::init(&directive, logging::use_ansi(cli.no_color));

    let mode = if cli.strict || config.strict {
        Mode::Strict
    } else {
        Mode::Lenient
    };
    debug!(?mode, charset = ?config.charset, "Configuration loaded");

    commands::run(cli.command, &config, mode)
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::try_parse_from(["framectl", "bcc", "0102", "--strict", "-v"]).unwrap();
        assert!(cli.strict);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Bcc { .. }));
    }

    #[test]
    fn test_pad_requires_width_or_field() {
        assert!(Cli::try_parse_from(["framectl", "pad", "AB"]).is_err());
        assert!(Cli::try_parse_from(["framectl", "pad", "AB", "-w", "4"]).is_ok());
        assert!(Cli::try_parse_from(["framectl", "pad", "AB", "--field", "amount"]).is_ok());
    }

    #[test]
    fn test_legacy_charset_argument() {
        let cli =
            Cli::try_parse_from(["framectl", "legacy", "abc", "-w", "4", "--charset", "latin1"])
                .unwrap();
        match cli.command {
            Commands::Legacy { charset, .. } => {
                assert_eq!(charset, Some(voltage_codec::Charset::Latin1))
            },
            _ => panic!("expected legacy command"),
        }
    }
}
