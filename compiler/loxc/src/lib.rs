//! Lox command-line driver.
//!
//! Command logic lives in [`commands`] and writes to caller-supplied streams,
//! so the binary in `main.rs` only parses arguments and picks stdout/stderr.

use std::sync::Once;

pub mod commands;

pub use commands::SourceError;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=lox_lexer=debug` or `RUST_LOG=lox_lexer=trace`.
/// Logs go to stderr so they never mix with the token trace.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
