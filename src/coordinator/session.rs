//! Mutable per-session state guarded by the coordinator's lock.
//!
//! Everything that decides whether a backend response may touch the cache
//! lives here and is synchronous, so the staleness rules can be exercised
//! without timers or a backend.

use sift_provider_api::{BackendError, ERROR_ID, ResultItem};
use tokio::task::JoinHandle;

use super::cache::ResultsCache;
use super::tracker::{RequestToken, RequestTracker};

/// Where the current session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
	/// No request is pending.
	Idle,
	/// A debounce timer is armed for the current request.
	Debouncing,
	/// The current request is waiting on the backend.
	Querying,
}

/// Identifier list to hand to the host for a resolved request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Delivery {
	Results(Vec<String>),
	Empty,
	Failed,
}

impl Delivery {
	pub(crate) fn into_ids(self) -> Vec<String> {
		match self {
			Self::Results(ids) => ids,
			Self::Empty => Vec::new(),
			Self::Failed => vec![ERROR_ID.to_string()],
		}
	}
}

#[derive(Debug)]
pub(crate) struct SessionState {
	pub(crate) tracker: RequestTracker,
	pub(crate) cache: ResultsCache,
	phase: SessionPhase,
	debounce: Option<JoinHandle<()>>,
}

impl Default for SessionState {
	fn default() -> Self {
		Self {
			tracker: RequestTracker::default(),
			cache: ResultsCache::default(),
			phase: SessionPhase::Idle,
			debounce: None,
		}
	}
}

impl SessionState {
	pub(crate) fn phase(&self) -> SessionPhase {
		self.phase
	}

	/// Cancel the armed timer and mint the token for a new request.
	pub(crate) fn schedule(&mut self) -> RequestToken {
		self.cancel_debounce();
		self.phase = SessionPhase::Debouncing;
		self.tracker.issue()
	}

	pub(crate) fn arm_debounce(&mut self, timer: JoinHandle<()>) {
		self.debounce = Some(timer);
	}

	/// Record that the timer for `token` fired. Returns `false` when the
	/// request was superseded in the meantime.
	pub(crate) fn begin_query(&mut self, token: RequestToken) -> bool {
		if !self.tracker.is_current(token) {
			return false;
		}
		self.debounce = None;
		self.phase = SessionPhase::Querying;
		true
	}

	/// Drop every outstanding request without scheduling a new one.
	pub(crate) fn supersede(&mut self) {
		self.cancel_debounce();
		self.tracker.invalidate();
		self.phase = SessionPhase::Idle;
	}

	/// Apply a backend response for `token`.
	///
	/// Returns `None` for superseded responses, which must not reach the host.
	/// Token check and cache mutation happen under the same borrow, so callers
	/// holding the session lock get them as one step.
	pub(crate) fn reconcile(
		&mut self,
		token: RequestToken,
		outcome: Result<Vec<ResultItem>, BackendError>,
		max_results: Option<usize>,
	) -> Option<Delivery> {
		if !self.tracker.is_current(token) {
			return None;
		}
		self.phase = SessionPhase::Idle;

		let mut items = match outcome {
			Ok(items) => items,
			Err(_) => return Some(Delivery::Failed),
		};
		if items.is_empty() {
			return Some(Delivery::Empty);
		}
		if let Some(limit) = max_results {
			items.truncate(limit);
		}

		let ids = items
			.into_iter()
			.map(|item| {
				let id = item.id.clone();
				self.cache.insert(item);
				id
			})
			.collect();
		Some(Delivery::Results(ids))
	}

	fn cancel_debounce(&mut self) {
		if let Some(timer) = self.debounce.take() {
			timer.abort();
		}
	}
}
