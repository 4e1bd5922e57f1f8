use anyhow::{Error, Result};
use serde::Deserialize;
use std::env;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod backend;
mod provider;

use backend::{BackendSection, LauncherSection};
use provider::ProviderSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	provider: ProviderSection,
	backend: BackendSection,
	launcher: LauncherSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.provider.apply_cli_overrides(cli);
		self.backend.apply_cli_overrides(cli);
		self.launcher.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			debounce: detect_source(
				cli.debounce_ms.is_some(),
				self.provider.debounce_ms.is_some(),
				"SIFT__PROVIDER__DEBOUNCE_MS",
				"--debounce-ms",
				"provider.debounce_ms",
			),
			query_timeout: detect_source(
				cli.timeout_ms.is_some(),
				self.provider.query_timeout_ms.is_some(),
				"SIFT__PROVIDER__QUERY_TIMEOUT_MS",
				"--timeout-ms",
				"provider.query_timeout_ms",
			),
			max_results: detect_source(
				cli.max_results.is_some(),
				self.provider.max_results.is_some(),
				"SIFT__PROVIDER__MAX_RESULTS",
				"--max-results",
				"provider.max_results",
			),
			missing_results: detect_source(
				cli.missing_results.is_some(),
				self.provider.missing_results.is_some(),
				"SIFT__PROVIDER__MISSING_RESULTS",
				"--missing-results",
				"provider.missing_results",
			),
			program: detect_source(
				cli.program.is_some(),
				self.backend.program.is_some(),
				"SIFT__BACKEND__PROGRAM",
				"--program",
				"backend.program",
			),
		};

		let (coordinator, prefixes) = self
			.provider
			.resolve(sources.source_for_missing_results())
			.map_err(Error::new)?;

		let config = ResolvedConfig {
			coordinator,
			prefixes,
			backend: self.backend.resolve(),
			launcher: self.launcher.resolve(),
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
