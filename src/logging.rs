//! Logging configuration for ozz-commands.
//!
//! Dispatch writes help to stdout, so diagnostics always go to stderr.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "warn";

/// Initializes logging to stderr.
///
/// `RUST_LOG` takes precedence over `verbosity`; otherwise `verbosity` selects
/// `warn`, `info`, `debug` or `trace`.
pub fn init_stderr_logging(verbosity: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(filter_for_verbosity(verbosity))),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Maps a `-v` count to a filter directive.
pub fn filter_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => DEFAULT_FILTER,
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
