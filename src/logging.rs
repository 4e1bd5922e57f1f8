//! Structured logging setup for the `sift` binary.
//!
//! Library code only emits `tracing` events; installing a subscriber is left
//! to whoever embeds the provider. The binary writes to stderr so stdout stays
//! reserved for results.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Environment variable consulted before `RUST_LOG`.
pub const LOG_ENV: &str = "SIFT_LOG";

/// Build the filter used when no environment override is present.
fn default_directives(verbosity: u8) -> &'static str {
	match verbosity {
		0 => "sift=info,sift_backend_command=info",
		1 => "sift=debug,sift_backend_command=debug",
		_ => "sift=trace,sift_backend_command=trace",
	}
}

fn env_filter(verbosity: u8) -> EnvFilter {
	EnvFilter::try_from_env(LOG_ENV)
		.or_else(|_| EnvFilter::try_from_default_env())
		.unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)))
}

/// Install the global subscriber. `verbosity` counts `-v` flags.
pub fn initialize(verbosity: u8) -> Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(env_filter(verbosity))
		.with_writer(std::io::stderr)
		.with_target(true)
		.try_init()
		.map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}
