//! Console logging for framectl
//!
//! Log lines go to stderr so stdout carries only command output.
//! Format: `14:03:27.118 INFO  message key=value`
//!
//! Colour is only emitted when stderr is a terminal, `--no-color` is not set
//! and `NO_COLOR` is unset, so redirected logs stay free of escape codes.

use std::io::IsTerminal;

use tracing::Level;
use tracing_subscriber::{
    fmt::{format::Writer, FmtContext, FormatEvent, FormatFields},
    registry::LookupSpan,
    EnvFilter,
};

/// Label and SGR colour code for a level
fn level_style(level: Level) -> (&'static str, &'static str) {
    match level {
        Level::ERROR => ("ERROR", "1;31"),
        Level::WARN => ("WARN", "33"),
        Level::INFO => ("INFO", "32"),
        Level::DEBUG => ("DEBUG", "36"),
        Level::TRACE => ("TRACE", "2"),
    }
}

/// Short local-time formatter; labels are padded so messages line up
struct StderrFormat;

impl<S, N> FormatEvent<S, N> for StderrFormat
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        write!(writer, "{} ", chrono::Local::now().format("%H:%M:%S%.3f"))?;

        let (label, sgr) = level_style(*event.metadata().level());
        if writer.has_ansi_escapes() {
            write!(writer, "\x1b[{}m{:<5}\x1b[0m ", sgr, label)?;
        } else {
            write!(writer, "{:<5} ", label)?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Pick the filter: `RUST_LOG` wins, then `--verbose`, then the configured level
pub fn filter_directive(verbose: bool, configured: &str) -> String {
    match std::env::var("RUST_LOG") {
        Ok(env) if !env.is_empty() => env,
        _ if verbose => "debug".to_string(),
        _ => configured.to_string(),
    }
}

/// Whether log lines on stderr should carry colour
pub fn use_ansi(no_color: bool) -> bool {
    !no_color && std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal()
}

/// Install the global subscriber
///
/// Safe to call more than once; later calls are ignored.
pub fn init(directive: &str, ansi: bool) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|e| {
        eprintln!("Invalid log filter '{}': {}, using 'info'", directive, e);
        EnvFilter::new("info")
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .event_format(StderrFormat)
        .try_init();
}
