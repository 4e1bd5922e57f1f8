//! The search coordinator: debouncing, request sequencing and the
//! host-facing provider contract.
//!
//! A host drives one [`SearchCoordinator`] per provider. Each call to
//! [`SearchCoordinator::request_initial_results`] supersedes the previous
//! request: its debounce timer is cancelled and any backend response still in
//! flight for it is ignored when it lands. Superseded backend calls are left
//! to finish; only the query timeout drops one.

mod cache;
mod config;
mod error;
mod filter;
mod session;
mod tracker;

use std::sync::Arc;

use parking_lot::Mutex;
use sift_provider_api::{
	BackendClient, BackendError, LOADING_ID, ResultMeta, ResultSink, SyntheticMessages,
	is_synthetic_id,
};
use tokio::runtime::Handle;
use tracing::{debug, info, warn};

pub use config::{CoordinatorConfig, DEFAULT_DEBOUNCE, DEFAULT_QUERY_TIMEOUT, MissingMetaPolicy};
pub use error::CoordinatorError;
pub use filter::{PrefixFilter, RelevanceFilter};
pub use session::SessionPhase;
pub use tracker::RequestToken;

use crate::launcher::{SystemLauncher, UriLauncher};
use session::SessionState;

/// State shared between the coordinator and the tasks it spawns.
struct Shared {
	backend: Arc<dyn BackendClient>,
	config: CoordinatorConfig,
	session: Mutex<SessionState>,
}

impl Shared {
	async fn run_query(
		self: Arc<Self>,
		token: RequestToken,
		query: String,
		sink: Arc<dyn ResultSink>,
	) {
		if !self.session.lock().begin_query(token) {
			debug!(%token, "request superseded before its timer fired");
			return;
		}

		info!(%token, %query, "querying backend");
		let timeout = self.config.query_timeout;
		let outcome = match tokio::time::timeout(timeout, self.backend.query(&query)).await {
			Ok(outcome) => outcome,
			Err(_) => Err(BackendError::Timeout { after: timeout }),
		};
		if let Err(err) = &outcome {
			warn!(%token, %query, error = %err, "backend query failed");
		}

		let delivery = self
			.session
			.lock()
			.reconcile(token, outcome, self.config.max_results);
		match delivery {
			Some(delivery) => sink.deliver(delivery.into_ids()),
			None => debug!(%token, %query, "discarding superseded response"),
		}
	}
}

/// Provider that turns keystroke-driven term lists into cached backend results.
pub struct SearchCoordinator {
	shared: Arc<Shared>,
	filter: Box<dyn RelevanceFilter>,
	launcher: Arc<dyn UriLauncher>,
	messages: SyntheticMessages,
	runtime: Handle,
}

impl SearchCoordinator {
	/// Start configuring a coordinator around `backend`.
	pub fn builder(backend: Arc<dyn BackendClient>) -> CoordinatorBuilder {
		CoordinatorBuilder::new(backend)
	}

	#[must_use]
	pub fn config(&self) -> &CoordinatorConfig {
		&self.shared.config
	}

	#[must_use]
	pub fn phase(&self) -> SessionPhase {
		self.shared.session.lock().phase()
	}

	/// Number of results currently resolvable through [`Self::result_metas`].
	#[must_use]
	pub fn cached_results(&self) -> usize {
		self.shared.session.lock().cache.len()
	}

	/// Begin a search for `terms`, delivering identifier lists to `sink`.
	///
	/// Irrelevant term lists are answered synchronously with an empty list.
	/// Relevant ones get the loading message right away and, once the
	/// debounce delay passes without a newer request, the backend's answer:
	/// result ids, an empty list, or the error message.
	pub fn request_initial_results<S>(&self, terms: &[String], sink: S)
	where
		S: ResultSink + 'static,
	{
		let sink: Arc<dyn ResultSink> = Arc::new(sink);
		let query = terms.join(" ");
		if query.trim().is_empty() || !self.filter.is_relevant(terms) {
			self.shared.session.lock().supersede();
			sink.deliver(Vec::new());
			return;
		}

		// The previous request must be stale before the host sees anything
		// from this one.
		let token = self.shared.session.lock().schedule();
		sink.deliver(vec![LOADING_ID.to_string()]);

		debug!(%token, %query, "arming debounce timer");
		let shared = Arc::clone(&self.shared);
		let delay = self.shared.config.debounce;
		let timer = self.runtime.spawn(async move {
			tokio::time::sleep(delay).await;
			// Detached so that aborting the timer never interrupts a query.
			tokio::spawn(shared.run_query(token, query, sink));
		});

		let mut session = self.shared.session.lock();
		if session.tracker.is_current(token) {
			session.arm_debounce(timer);
		} else {
			debug!(%token, "request superseded while arming its timer");
			timer.abort();
		}
	}

	/// Refine a previous search. The backend owns ranking, so this runs a
	/// fresh search for the new terms.
	pub fn request_subsearch_results<S>(&self, previous: &[String], terms: &[String], sink: S)
	where
		S: ResultSink + 'static,
	{
		debug!(previous = previous.len(), "refining previous results");
		self.request_initial_results(terms, sink);
	}

	/// Resolve identifiers into display rows.
	///
	/// Status messages resolve regardless of cache state. Identifiers that
	/// were never cached follow the configured [`MissingMetaPolicy`].
	pub fn result_metas<S: AsRef<str>>(&self, ids: &[S]) -> Vec<ResultMeta> {
		let session = self.shared.session.lock();
		let icon = Some(self.shared.config.icon_name.as_str());
		ids.iter()
			.map(|id| id.as_ref())
			.filter_map(|id| {
				if let Some(message) = self.messages.get(id) {
					return Some(message.meta().clone());
				}
				match session.cache.get(id) {
					Some(item) => Some(item.to_meta(icon)),
					None => self.missing_meta(id),
				}
			})
			.collect()
	}

	/// Open the result behind `id`. Status messages and unknown ids are ignored.
	pub fn activate_result(&self, id: &str, terms: &[String], timestamp: u32) {
		if is_synthetic_id(id) {
			return;
		}
		let url = self
			.shared
			.session
			.lock()
			.cache
			.get(id)
			.map(|item| item.url.clone());
		let Some(url) = url else {
			debug!(id, "activated result is not cached");
			return;
		};

		debug!(id, %url, ?terms, timestamp, "activating result");
		if let Err(err) = self.launcher.open(&url) {
			warn!(id, %url, error = %err, "failed to open result");
		}
	}

	/// Tear the provider down and release the backend.
	///
	/// Pending timers are cancelled and responses still in flight are ignored.
	pub fn destroy(self) {
		{
			let mut session = self.shared.session.lock();
			session.supersede();
			session.cache.clear();
		}
		self.shared.backend.destroy();
		info!(provider = %self.shared.config.app_name, "search provider destroyed");
	}

	fn missing_meta(&self, id: &str) -> Option<ResultMeta> {
		match self.shared.config.missing_results {
			MissingMetaPolicy::Omit => {
				debug!(id, "omitting unknown result id");
				None
			}
			MissingMetaPolicy::Placeholder => Some(ResultMeta {
				id: id.to_string(),
				name: id.to_string(),
				description: Some("This result is no longer available.".to_string()),
				icon: Some(self.shared.config.icon_name.clone()),
			}),
		}
	}
}

impl Drop for SearchCoordinator {
	fn drop(&mut self) {
		self.shared.session.lock().supersede();
	}
}

/// Builder for [`SearchCoordinator`].
pub struct CoordinatorBuilder {
	backend: Arc<dyn BackendClient>,
	config: CoordinatorConfig,
	filter: Box<dyn RelevanceFilter>,
	launcher: Arc<dyn UriLauncher>,
	runtime: Option<Handle>,
}

impl CoordinatorBuilder {
	fn new(backend: Arc<dyn BackendClient>) -> Self {
		Self {
			backend,
			config: CoordinatorConfig::default(),
			filter: Box::new(PrefixFilter::default()),
			launcher: Arc::new(SystemLauncher::default()),
			runtime: None,
		}
	}

	#[must_use]
	pub fn config(mut self, config: CoordinatorConfig) -> Self {
		self.config = config;
		self
	}

	#[must_use]
	pub fn filter(mut self, filter: impl RelevanceFilter + 'static) -> Self {
		self.filter = Box::new(filter);
		self
	}

	#[must_use]
	pub fn launcher(mut self, launcher: Arc<dyn UriLauncher>) -> Self {
		self.launcher = launcher;
		self
	}

	/// Schedule timers on `runtime` instead of the ambient one.
	#[must_use]
	pub fn runtime(mut self, runtime: Handle) -> Self {
		self.runtime = Some(runtime);
		self
	}

	pub fn build(self) -> Result<SearchCoordinator, CoordinatorError> {
		let runtime = match self.runtime {
			Some(runtime) => runtime,
			None => Handle::try_current().map_err(|_| CoordinatorError::NoRuntime)?,
		};
		let messages = SyntheticMessages::new(&self.config.app_name, &self.config.icon_name);
		Ok(SearchCoordinator {
			shared: Arc::new(Shared {
				backend: self.backend,
				config: self.config,
				session: Mutex::new(SessionState::default()),
			}),
			filter: self.filter,
			launcher: self.launcher,
			messages,
			runtime,
		})
	}
}
