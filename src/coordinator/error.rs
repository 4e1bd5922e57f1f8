use thiserror::Error;

/// Errors raised while constructing a [`SearchCoordinator`](super::SearchCoordinator).
#[derive(Debug, Error)]
pub enum CoordinatorError {
	/// The coordinator schedules its timers on tokio and was built outside a runtime.
	#[error("search coordinator must be created inside a tokio runtime")]
	NoRuntime,
}
