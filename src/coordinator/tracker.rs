use std::fmt;

/// Identity of a scheduled search request.
///
/// Tokens are compared for equality only; a response is applied when the
/// token it was issued with is still the tracker's current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

impl fmt::Display for RequestToken {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// Mints request tokens and answers whether a token is still current.
#[derive(Debug, Default)]
pub(crate) struct RequestTracker {
	latest: u64,
}

impl RequestTracker {
	/// Supersede every outstanding request and return the new current token.
	pub(crate) fn issue(&mut self) -> RequestToken {
		self.latest = self.latest.wrapping_add(1);
		RequestToken(self.latest)
	}

	/// Supersede every outstanding request without scheduling a new one.
	pub(crate) fn invalidate(&mut self) {
		self.latest = self.latest.wrapping_add(1);
	}

	pub(crate) fn is_current(&self, token: RequestToken) -> bool {
		token.0 == self.latest
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn newer_token_supersedes_older() {
		let mut tracker = RequestTracker::default();
		let first = tracker.issue();
		assert!(tracker.is_current(first));

		let second = tracker.issue();
		assert!(!tracker.is_current(first));
		assert!(tracker.is_current(second));
	}

	#[test]
	fn invalidate_leaves_no_current_token() {
		let mut tracker = RequestTracker::default();
		let token = tracker.issue();
		tracker.invalidate();
		assert!(!tracker.is_current(token));

		let next = tracker.issue();
		assert_ne!(token, next);
		assert!(tracker.is_current(next));
	}
}
