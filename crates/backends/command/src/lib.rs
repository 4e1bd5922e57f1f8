//! A [`BackendClient`] that shells out to an external program.
//!
//! The program receives the query as a single argument, never through a shell,
//! and is expected to print one JSON object per line:
//!
//! ```text
//! {"name": "notes.md", "description": "~/docs", "url": "file:///home/me/docs/notes.md"}
//! ```
//!
//! `description` is optional. Identifiers are synthesized from the configured
//! prefix because command-line tools rarely report stable ones.

mod decode;

use std::path::PathBuf;
use std::process::Stdio;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use sift_provider_api::{BackendClient, BackendError, IdSequence, ResultItem};
use tokio::process::Command;
use tracing::debug;

/// Argument token replaced by the query text.
pub const QUERY_PLACEHOLDER: &str = "{query}";

/// How to launch the backend program.
#[derive(Debug, Clone)]
pub struct CommandBackendConfig {
	pub program: String,
	/// Arguments passed to `program`. Every occurrence of
	/// [`QUERY_PLACEHOLDER`] is replaced by the query; when no argument
	/// contains it the query is appended as the final argument.
	pub args: Vec<String>,
	pub id_prefix: String,
	pub working_dir: Option<PathBuf>,
}

impl CommandBackendConfig {
	pub fn new(program: impl Into<String>) -> Self {
		Self {
			program: program.into(),
			args: Vec::new(),
			id_prefix: "result".to_string(),
			working_dir: None,
		}
	}

	#[must_use]
	pub fn with_args<I, S>(mut self, args: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.args = args.into_iter().map(Into::into).collect();
		self
	}

	#[must_use]
	pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.id_prefix = prefix.into();
		self
	}

	#[must_use]
	pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
		self.working_dir = Some(dir.into());
		self
	}

	/// Expand the configured arguments for `query`.
	fn arguments_for(&self, query: &str) -> Vec<String> {
		let mut substituted = false;
		let mut args: Vec<String> = self
			.args
			.iter()
			.map(|arg| {
				if arg.contains(QUERY_PLACEHOLDER) {
					substituted = true;
					arg.replace(QUERY_PLACEHOLDER, query)
				} else {
					arg.clone()
				}
			})
			.collect();
		if !substituted {
			args.push(query.to_string());
		}
		args
	}
}

/// Backend that runs one process per query.
pub struct CommandBackend {
	config: CommandBackendConfig,
	ids: IdSequence,
	closed: AtomicBool,
}

impl CommandBackend {
	pub fn new(config: CommandBackendConfig) -> Self {
		let ids = IdSequence::new(config.id_prefix.clone());
		Self {
			config,
			ids,
			closed: AtomicBool::new(false),
		}
	}

	fn command(&self, query: &str) -> Command {
		let mut command = Command::new(&self.config.program);
		command
			.args(self.config.arguments_for(query))
			.stdin(Stdio::null())
			.stdout(Stdio::piped())
			.stderr(Stdio::piped())
			.kill_on_drop(true);
		if let Some(dir) = &self.config.working_dir {
			command.current_dir(dir);
		}
		command
	}
}

#[async_trait]
impl BackendClient for CommandBackend {
	async fn query(&self, text: &str) -> Result<Vec<ResultItem>, BackendError> {
		if self.closed.load(Ordering::Acquire) {
			return Err(BackendError::unavailable("backend has been shut down"));
		}

		let program = &self.config.program;
		debug!(%program, query = text, "spawning backend command");
		let output = self.command(text).output().await.map_err(|err| {
			BackendError::unavailable(format!("failed to run `{program}`: {err}"))
		})?;

		if !output.status.success() {
			let stderr = String::from_utf8_lossy(&output.stderr);
			return Err(BackendError::failed(format!(
				"`{program}` exited with {}: {}",
				output.status,
				stderr.trim()
			)));
		}

		let stdout = String::from_utf8(output.stdout)
			.map_err(|_| BackendError::malformed("output is not valid UTF-8"))?;
		decode::decode_lines(&stdout, &self.ids)
	}

	fn destroy(&self) {
		self.closed.store(true, Ordering::Release);
	}
}
