use std::fmt;

#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where each validated setting came from, for error messages.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) debounce: Option<SettingSource>,
	pub(crate) query_timeout: Option<SettingSource>,
	pub(crate) max_results: Option<SettingSource>,
	pub(crate) missing_results: Option<SettingSource>,
	pub(crate) program: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_debounce(&self) -> SettingSource {
		self.debounce
			.clone()
			.unwrap_or(SettingSource::ConfigKey("provider.debounce_ms"))
	}

	pub(crate) fn source_for_query_timeout(&self) -> SettingSource {
		self.query_timeout
			.clone()
			.unwrap_or(SettingSource::ConfigKey("provider.query_timeout_ms"))
	}

	pub(crate) fn source_for_max_results(&self) -> SettingSource {
		self.max_results
			.clone()
			.unwrap_or(SettingSource::ConfigKey("provider.max_results"))
	}

	pub(crate) fn source_for_missing_results(&self) -> SettingSource {
		self.missing_results
			.clone()
			.unwrap_or(SettingSource::ConfigKey("provider.missing_results"))
	}

	pub(crate) fn source_for_program(&self) -> SettingSource {
		self.program
			.clone()
			.unwrap_or(SettingSource::ConfigKey("backend.program"))
	}
}
