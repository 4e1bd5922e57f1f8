use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;

use crate::error::BackendError;
use crate::types::ResultItem;

/// A pluggable search backend queried by the coordinator.
///
/// Implementations are stateless per call apart from whatever connection or
/// process resources they own. A query superseded by a newer one is left to
/// finish and its results are ignored. A query that outlives the
/// coordinator's timeout is dropped, so implementations should release what
/// they hold when their future is dropped.
#[async_trait]
pub trait BackendClient: Send + Sync {
	/// Run `text` against the backend and return the hits in display order.
	///
	/// `text` is never empty. The client is responsible for escaping it before
	/// handing it to the underlying mechanism. Every returned item must carry
	/// an identifier that is unique within the session.
	async fn query(&self, text: &str) -> Result<Vec<ResultItem>, BackendError>;

	/// Release any resources held by the client.
	fn destroy(&self) {}
}

/// Session-wide generator for synthesized result identifiers.
///
/// Backends rarely expose stable identifiers, so clients number their hits
/// as `{prefix}_{n}` with `n` increasing across every query of the session.
#[derive(Debug)]
pub struct IdSequence {
	prefix: String,
	next: AtomicU64,
}

impl IdSequence {
	pub fn new(prefix: impl Into<String>) -> Self {
		Self {
			prefix: prefix.into(),
			next: AtomicU64::new(0),
		}
	}

	/// Produce the next identifier in the sequence.
	pub fn next_id(&self) -> String {
		let n = self.next.fetch_add(1, Ordering::Relaxed);
		format!("{}_{n}", self.prefix)
	}
}
