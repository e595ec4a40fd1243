//! Logging setup for the `numeric-field` binary
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - commit/revert decisions for every edit
//! - `RUST_LOG=numeric_field::format=trace` - reconciliation details
//!
//! Logs are also written to `~/.config/numeric-field/logs/numeric-field.log`
//! with daily rotation.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize tracing subscriber with stderr and file logging
///
/// Stderr output respects RUST_LOG (default `warn`) so it doesn't interleave
/// with the transcript on stdout. The file layer always logs at debug level.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "numeric-field.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}
