use sift::CoordinatorConfig;
use sift_backend_command::CommandBackendConfig;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub coordinator: CoordinatorConfig,
	/// Relevance prefixes; empty means every search is handled.
	pub prefixes: Vec<String>,
	pub backend: CommandBackendConfig,
	/// Program used to open activated results.
	pub launcher: String,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
