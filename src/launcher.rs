//! Opening activated results outside the provider.

use std::process::{Command, Stdio};
use std::thread;

use anyhow::{Context, Result};

/// Program used to open URIs when none is configured.
pub const DEFAULT_OPENER: &str = "xdg-open";

/// Side-effecting collaborator that opens a result's URI.
pub trait UriLauncher: Send + Sync {
	fn open(&self, uri: &str) -> Result<()>;
}

/// Opens URIs by spawning the desktop's opener program.
///
/// The URI is passed as a single argument, so it is never interpreted by a
/// shell.
#[derive(Debug, Clone)]
pub struct SystemLauncher {
	program: String,
}

impl SystemLauncher {
	pub fn new(program: impl Into<String>) -> Self {
		Self {
			program: program.into(),
		}
	}

	#[must_use]
	pub fn program(&self) -> &str {
		&self.program
	}
}

impl Default for SystemLauncher {
	fn default() -> Self {
		Self::new(DEFAULT_OPENER)
	}
}

impl UriLauncher for SystemLauncher {
	fn open(&self, uri: &str) -> Result<()> {
		let mut child = Command::new(&self.program)
			.arg(uri)
			.stdin(Stdio::null())
			.stdout(Stdio::null())
			.stderr(Stdio::null())
			.spawn()
			.with_context(|| format!("failed to launch `{}` for {uri}", self.program))?;
		// Reap the opener in the background so it does not linger as a zombie.
		thread::spawn(move || child.wait());
		Ok(())
	}
}
