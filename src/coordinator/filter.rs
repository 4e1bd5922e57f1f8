/// Decides whether a term list belongs to this provider at all.
///
/// Irrelevant searches are answered immediately with an empty result set and
/// never reach the backend.
pub trait RelevanceFilter: Send + Sync {
	fn is_relevant(&self, terms: &[String]) -> bool;
}

impl<F> RelevanceFilter for F
where
	F: Fn(&[String]) -> bool + Send + Sync,
{
	fn is_relevant(&self, terms: &[String]) -> bool {
		self(terms)
	}
}

/// Accepts term lists whose first term starts with one of the configured
/// prefixes. With no prefixes configured every term list is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixFilter {
	prefixes: Vec<String>,
}

impl PrefixFilter {
	pub fn new<I, S>(prefixes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			prefixes: prefixes
				.into_iter()
				.map(Into::into)
				.filter(|prefix: &String| !prefix.is_empty())
				.collect(),
		}
	}

	#[must_use]
	pub fn prefixes(&self) -> &[String] {
		&self.prefixes
	}
}

impl RelevanceFilter for PrefixFilter {
	fn is_relevant(&self, terms: &[String]) -> bool {
		let Some(first) = terms.first() else {
			return false;
		};
		self.prefixes.is_empty()
			|| self
				.prefixes
				.iter()
				.any(|prefix| first.starts_with(prefix.as_str()))
	}
}
