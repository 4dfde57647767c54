//! Log subscriber setup.
//!
//! Only the binary installs a subscriber; the library crates just emit
//! `tracing` events.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::cli::CliError;

/// Returns the filter for a run: `RUST_LOG` if set, otherwise `info`, or
/// `debug` when `verbose`.
#[must_use]
pub fn filter(verbose: bool) -> EnvFilter {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy()
}

/// Installs a formatting subscriber writing to stderr.
///
/// # Errors
///
/// Returns [`CliError::Logging`] if a global subscriber is already set.
pub fn init(verbose: bool) -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| CliError::Logging(err.to_string()))
}
