use serde::Deserialize;
use sift_provider_api::{BackendError, IdSequence, ResultItem};

/// One line of backend output before an identifier is assigned.
#[derive(Debug, Deserialize)]
struct RawHit {
	name: String,
	#[serde(default)]
	description: Option<String>,
	url: String,
}

/// Decode JSON-lines output into result items, skipping blank lines.
pub(crate) fn decode_lines(
	stdout: &str,
	ids: &IdSequence,
) -> Result<Vec<ResultItem>, BackendError> {
	let hits = stdout
		.lines()
		.enumerate()
		.filter(|(_, line)| !line.trim().is_empty())
		.map(|(index, line)| {
			serde_json::from_str::<RawHit>(line)
				.map_err(|err| BackendError::malformed(format!("line {}: {err}", index + 1)))
		})
		.collect::<Result<Vec<_>, _>>()?;

	Ok(hits
		.into_iter()
		.map(|hit| ResultItem {
			id: ids.next_id(),
			name: hit.name,
			description: hit.description.unwrap_or_default(),
			url: hit.url,
		})
		.collect())
}
