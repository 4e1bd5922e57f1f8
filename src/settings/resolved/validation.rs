use std::time::Duration;

use super::{ConfigError, ConfigSources, ResolvedConfig};

/// Longest debounce accepted; anything above it makes the provider look dead.
const MAX_DEBOUNCE: Duration = Duration::from_secs(60);

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.backend.program.is_empty() {
		return Err(ConfigError::invalid(
			"backend.program",
			"",
			sources.source_for_program(),
			"a backend program is required (set `backend.program` or pass --program)",
		));
	}

	let debounce = config.coordinator.debounce;
	if debounce > MAX_DEBOUNCE {
		return Err(ConfigError::invalid(
			"provider.debounce_ms",
			debounce.as_millis().to_string(),
			sources.source_for_debounce(),
			"must be at most 60000",
		));
	}

	let timeout = config.coordinator.query_timeout;
	if timeout.is_zero() {
		return Err(ConfigError::invalid(
			"provider.query_timeout_ms",
			timeout.as_millis().to_string(),
			sources.source_for_query_timeout(),
			"must be greater than zero",
		));
	}

	if config.coordinator.max_results == Some(0) {
		return Err(ConfigError::invalid(
			"provider.max_results",
			"0",
			sources.source_for_max_results(),
			"must be at least 1",
		));
	}

	Ok(())
}
