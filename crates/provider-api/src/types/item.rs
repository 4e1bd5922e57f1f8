use serde::{Deserialize, Serialize};

/// A single normalized search hit produced by a backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
	/// Identifier unique within a search session.
	pub id: String,
	pub name: String,
	#[serde(default)]
	pub description: String,
	/// Location handed to the URI launcher when the result is activated.
	pub url: String,
}

impl ResultItem {
	pub fn new(
		id: impl Into<String>,
		name: impl Into<String>,
		description: impl Into<String>,
		url: impl Into<String>,
	) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			description: description.into(),
			url: url.into(),
		}
	}

	/// Build the display row shown by the host for this item.
	#[must_use]
	pub fn to_meta(&self, icon: Option<&str>) -> ResultMeta {
		let description = if self.description.is_empty() {
			None
		} else {
			Some(self.description.clone())
		};
		ResultMeta {
			id: self.id.clone(),
			name: self.name.clone(),
			description,
			icon: icon.map(str::to_string),
		}
	}
}

/// Display payload resolved for an identifier the host asked about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultMeta {
	pub id: String,
	pub name: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	/// Themed icon name the host renders next to the row.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub icon: Option<String>,
}
