use std::sync::Arc;

use anyhow::{Result, bail};
use sift::{ERROR_ID, LOADING_ID, PrefixFilter, SearchCoordinator, SystemLauncher};
use sift_backend_command::CommandBackend;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::debug;

use crate::cli::{OutputFormat, print_delivery, print_outcome};
use crate::settings::ResolvedConfig;

/// Drives one provider from the terminal, either for a single search or for a
/// stream of searches read from stdin.
pub(crate) struct SearchSession {
	coordinator: SearchCoordinator,
	format: OutputFormat,
}

impl SearchSession {
	/// Wire the command backend, filter and launcher described by `config`.
	///
	/// Must be called from inside a tokio runtime.
	pub(crate) fn from_config(config: ResolvedConfig, format: OutputFormat) -> Result<Self> {
		let ResolvedConfig {
			coordinator,
			prefixes,
			backend,
			launcher,
		} = config;

		let coordinator = SearchCoordinator::builder(Arc::new(CommandBackend::new(backend)))
			.config(coordinator)
			.filter(PrefixFilter::new(prefixes))
			.launcher(Arc::new(SystemLauncher::new(launcher)))
			.build()?;

		Ok(Self {
			coordinator,
			format,
		})
	}

	/// Run a single search, print its final answer and optionally open one of
	/// the results.
	pub(crate) async fn run_once(self, terms: &[String], open: Option<&str>) -> Result<()> {
		let (tx, mut rx) = mpsc::unbounded_channel::<Vec<String>>();
		self.coordinator.request_initial_results(terms, move |ids: Vec<String>| {
			let _ = tx.send(ids);
		});

		let mut ids = Vec::new();
		while let Some(delivery) = rx.recv().await {
			if delivery.iter().any(|id| id == LOADING_ID) {
				debug!("search is loading");
				continue;
			}
			ids = delivery;
			break;
		}

		let query = terms.join(" ");
		let metas = self.coordinator.result_metas(&ids);
		print_outcome(self.format, &query, &metas)?;

		let failed = ids.iter().any(|id| id == ERROR_ID);
		if let (false, Some(id)) = (failed, open) {
			self.coordinator.activate_result(id, terms, 0);
		}

		self.coordinator.destroy();

		if failed {
			bail!("search for '{query}' failed");
		}
		Ok(())
	}

	/// Treat every stdin line as the current contents of the search entry and
	/// print deliveries as they arrive. After end of input the session waits
	/// for the last search to settle.
	pub(crate) async fn run_interactive(self) -> Result<()> {
		let (tx, mut rx) = mpsc::unbounded_channel::<(String, Vec<String>)>();
		let mut lines = BufReader::new(tokio::io::stdin()).lines();
		let mut sender = Some(tx);

		loop {
			tokio::select! {
				line = lines.next_line(), if sender.is_some() => {
					let Some(line) = line? else {
						// Sinks still owned by pending searches keep the channel open.
						sender = None;
						continue;
					};
					let Some(tx) = sender.as_ref() else {
						continue;
					};
					let terms: Vec<String> = line.split_whitespace().map(str::to_string).collect();
					let query = terms.join(" ");
					let tx = tx.clone();
					self.coordinator.request_initial_results(&terms, move |ids: Vec<String>| {
						let _ = tx.send((query.clone(), ids));
					});
				}
				delivery = rx.recv() => {
					let Some((query, ids)) = delivery else {
						break;
					};
					let metas = self.coordinator.result_metas(&ids);
					print_delivery(self.format, &query, &metas)?;
				}
			}
		}

		self.coordinator.destroy();
		Ok(())
	}
}
