use std::collections::HashSet;

/// Trim and deduplicate relevance prefixes, dropping empty entries.
pub(super) fn sanitize_prefixes(values: Vec<String>) -> Vec<String> {
	let mut seen = HashSet::new();
	let mut cleaned = Vec::new();
	for value in values {
		let normalized = value.trim().to_string();
		if normalized.is_empty() {
			continue;
		}
		if seen.insert(normalized.clone()) {
			cleaned.push(normalized);
		}
	}
	cleaned
}

/// Return `None` for blank strings and the trimmed value otherwise.
pub(super) fn non_blank(value: Option<String>) -> Option<String> {
	value
		.map(|value| value.trim().to_string())
		.filter(|value| !value.is_empty())
}
