use super::ResultMeta;

/// Identifier of the pseudo-result shown while a query is pending.
pub const LOADING_ID: &str = "__loading__";
/// Identifier of the pseudo-result shown when a query failed.
pub const ERROR_ID: &str = "__error__";

/// Returns `true` when `id` names one of the built-in status messages.
#[must_use]
pub fn is_synthetic_id(id: &str) -> bool {
	id == LOADING_ID || id == ERROR_ID
}

/// Status row that never goes through a backend or the result cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticMessage {
	meta: ResultMeta,
}

impl SyntheticMessage {
	fn new(id: &str, name: &str, description: String, icon: &str) -> Self {
		Self {
			meta: ResultMeta {
				id: id.to_string(),
				name: name.to_string(),
				description: Some(description),
				icon: Some(icon.to_string()),
			},
		}
	}

	#[must_use]
	pub fn id(&self) -> &str {
		&self.meta.id
	}

	#[must_use]
	pub fn meta(&self) -> &ResultMeta {
		&self.meta
	}
}

/// The fixed set of status messages a provider can show.
///
/// Built once per provider from its display name and icon and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticMessages {
	loading: SyntheticMessage,
	error: SyntheticMessage,
}

impl SyntheticMessages {
	#[must_use]
	pub fn new(app_name: &str, icon_name: &str) -> Self {
		Self {
			loading: SyntheticMessage::new(
				LOADING_ID,
				app_name,
				format!("Loading items from {app_name}, please wait..."),
				icon_name,
			),
			error: SyntheticMessage::new(
				ERROR_ID,
				app_name,
				"Oops, an error occurred while searching.".to_string(),
				icon_name,
			),
		}
	}

	/// Look up the message registered under `id`.
	#[must_use]
	pub fn get(&self, id: &str) -> Option<&SyntheticMessage> {
		match id {
			LOADING_ID => Some(&self.loading),
			ERROR_ID => Some(&self.error),
			_ => None,
		}
	}
}
