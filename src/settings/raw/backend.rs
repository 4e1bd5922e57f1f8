use std::path::PathBuf;

use serde::Deserialize;
use sift_backend_command::CommandBackendConfig;

use crate::cli::CliArgs;

use super::super::util::non_blank;

/// Backend program settings as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct BackendSection {
	pub(super) program: Option<String>,
	pub(super) args: Option<Vec<String>>,
	pub(super) id_prefix: Option<String>,
	pub(super) working_dir: Option<PathBuf>,
}

impl BackendSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(value) = cli.program.clone() {
			self.program = Some(value);
		}
		if let Some(value) = &cli.args {
			self.args = Some(value.clone());
		}
		if let Some(value) = cli.id_prefix.clone() {
			self.id_prefix = Some(value);
		}
		if let Some(value) = cli.working_dir.clone() {
			self.working_dir = Some(value);
		}
	}

	/// Build the backend configuration. An unset program resolves to an empty
	/// one, which validation rejects with its origin attached.
	pub(super) fn resolve(self) -> CommandBackendConfig {
		let mut config = CommandBackendConfig::new(self.program.unwrap_or_default().trim())
			.with_args(self.args.unwrap_or_default());
		if let Some(prefix) = non_blank(self.id_prefix) {
			config = config.with_id_prefix(prefix);
		}
		if let Some(dir) = self.working_dir {
			config = config.with_working_dir(dir);
		}
		config
	}
}

/// Opener settings as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LauncherSection {
	pub(super) program: Option<String>,
}

impl LauncherSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(value) = cli.launcher.clone() {
			self.program = Some(value);
		}
	}

	pub(super) fn resolve(self) -> String {
		non_blank(self.program).unwrap_or_else(|| sift::launcher::DEFAULT_OPENER.to_string())
	}
}
