use std::time::Duration;

use serde::Deserialize;
use sift::{CoordinatorConfig, MissingMetaPolicy};

use crate::cli::CliArgs;

use super::super::resolved::{ConfigError, SettingSource};
use super::super::util::{non_blank, sanitize_prefixes};

/// Provider behaviour as it is read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ProviderSection {
	pub(super) app_name: Option<String>,
	pub(super) icon_name: Option<String>,
	pub(super) prefixes: Option<Vec<String>>,
	pub(super) debounce_ms: Option<u64>,
	pub(super) query_timeout_ms: Option<u64>,
	pub(super) max_results: Option<usize>,
	pub(super) missing_results: Option<String>,
}

impl ProviderSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(value) = cli.app_name.clone() {
			self.app_name = Some(value);
		}
		if let Some(value) = cli.icon_name.clone() {
			self.icon_name = Some(value);
		}
		if let Some(value) = &cli.prefixes {
			self.prefixes = Some(value.clone());
		}
		if let Some(value) = cli.debounce_ms {
			self.debounce_ms = Some(value);
		}
		if let Some(value) = cli.timeout_ms {
			self.query_timeout_ms = Some(value);
		}
		if let Some(value) = cli.max_results {
			self.max_results = Some(value);
		}
		if let Some(value) = cli.missing_results {
			self.missing_results = Some(value.as_str().to_string());
		}
	}

	pub(super) fn resolve(
		self,
		missing_source: SettingSource,
	) -> Result<(CoordinatorConfig, Vec<String>), ConfigError> {
		let defaults = CoordinatorConfig::default();
		let missing_results = match self.missing_results {
			Some(name) => MissingMetaPolicy::from_name(&name).ok_or_else(|| {
				ConfigError::invalid(
					"provider.missing_results",
					name,
					missing_source,
					"expected `omit` or `placeholder`",
				)
			})?,
			None => defaults.missing_results,
		};

		let coordinator = CoordinatorConfig {
			app_name: non_blank(self.app_name).unwrap_or(defaults.app_name),
			icon_name: non_blank(self.icon_name).unwrap_or(defaults.icon_name),
			debounce: self
				.debounce_ms
				.map(Duration::from_millis)
				.unwrap_or(defaults.debounce),
			query_timeout: self
				.query_timeout_ms
				.map(Duration::from_millis)
				.unwrap_or(defaults.query_timeout),
			max_results: self.max_results,
			missing_results,
		};
		let prefixes = sanitize_prefixes(self.prefixes.unwrap_or_default());

		Ok((coordinator, prefixes))
	}
}
