use std::time::Duration;

/// Delay between the last keystroke of a burst and the backend query.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(800);
/// Time a backend is given to answer before the query counts as failed.
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(10);

/// What metadata lookups do with identifiers that are not in the cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingMetaPolicy {
	/// Leave the identifier out of the answer.
	#[default]
	Omit,
	/// Answer with a row explaining that the result is gone.
	Placeholder,
}

impl MissingMetaPolicy {
	#[must_use]
	pub fn from_name(name: &str) -> Option<Self> {
		match name.trim().to_ascii_lowercase().as_str() {
			"omit" => Some(Self::Omit),
			"placeholder" => Some(Self::Placeholder),
			_ => None,
		}
	}

	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Omit => "omit",
			Self::Placeholder => "placeholder",
		}
	}
}

/// Tunables for a [`SearchCoordinator`](super::SearchCoordinator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoordinatorConfig {
	/// Display name used by the status messages.
	pub app_name: String,
	/// Themed icon name attached to every row.
	pub icon_name: String,
	pub debounce: Duration,
	pub query_timeout: Duration,
	/// Upper bound on the number of results delivered per query.
	pub max_results: Option<usize>,
	pub missing_results: MissingMetaPolicy,
}

impl Default for CoordinatorConfig {
	fn default() -> Self {
		Self {
			app_name: "Sift".to_string(),
			icon_name: "system-search".to_string(),
			debounce: DEFAULT_DEBOUNCE,
			query_timeout: DEFAULT_QUERY_TIMEOUT,
			max_results: None,
			missing_results: MissingMetaPolicy::default(),
		}
	}
}
