//! Log subscriber setup
//!
//! Logs go to stderr so they never mix with results on stdout.
//! `RUST_LOG` takes precedence over the `-v`/`-q` derived level.

use tracing_subscriber::EnvFilter;

use crate::config::{CliConfig, Verbosity};
use crate::error::{CliError, CliResult};

/// Builds the filter: `RUST_LOG` if set and valid, else the verbosity level
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()))
}

/// Installs the global subscriber for this process
pub fn init(config: &CliConfig) -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config.verbosity))
        .with_writer(std::io::stderr)
        .with_ansi(config.color.should_color_stderr())
        .with_target(false)
        .try_init()
        .map_err(|e| CliError::config(format!("cannot install logger: {e}")))
}
