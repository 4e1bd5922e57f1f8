use std::time::Duration;

use thiserror::Error;

/// Failures a [`BackendClient`](crate::BackendClient) can report for a query.
///
/// The coordinator does not distinguish between variants; every error is
/// surfaced to the host as the same "query failed" message. The variants
/// exist so backends can log something useful.
#[derive(Debug, Error)]
pub enum BackendError {
	/// The backend could not be reached or has already been shut down.
	#[error("backend unavailable: {reason}")]
	Unavailable { reason: String },

	/// The backend answered with output that could not be decoded.
	#[error("malformed backend output: {reason}")]
	MalformedOutput { reason: String },

	/// The backend ran but reported a failure.
	#[error("backend failed: {reason}")]
	Failed { reason: String },

	/// The backend did not answer within the allotted time.
	#[error("backend timed out after {}ms", .after.as_millis())]
	Timeout { after: Duration },
}

impl BackendError {
	pub fn unavailable(reason: impl Into<String>) -> Self {
		Self::Unavailable {
			reason: reason.into(),
		}
	}

	pub fn malformed(reason: impl Into<String>) -> Self {
		Self::MalformedOutput {
			reason: reason.into(),
		}
	}

	pub fn failed(reason: impl Into<String>) -> Self {
		Self::Failed {
			reason: reason.into(),
		}
	}
}
