use std::collections::HashMap;

use sift_provider_api::ResultItem;

/// Items delivered to the host during the current session, keyed by id.
///
/// Nothing is evicted: every id the host has been handed stays resolvable
/// until the provider is torn down.
#[derive(Debug, Default)]
pub(crate) struct ResultsCache {
	items: HashMap<String, ResultItem>,
}

impl ResultsCache {
	/// Store `item`, replacing any earlier item with the same id.
	pub(crate) fn insert(&mut self, item: ResultItem) -> Option<ResultItem> {
		self.items.insert(item.id.clone(), item)
	}

	pub(crate) fn get(&self, id: &str) -> Option<&ResultItem> {
		self.items.get(id)
	}

	pub(crate) fn len(&self) -> usize {
		self.items.len()
	}

	pub(crate) fn clear(&mut self) {
		self.items.clear();
	}
}
