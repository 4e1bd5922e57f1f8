use anyhow::Result;
use serde_json::json;
use sift::ResultMeta;

use super::OutputFormat;

fn plain_row(meta: &ResultMeta) -> String {
	match &meta.description {
		Some(description) => format!("{}\t{}\t{}", meta.id, meta.name, description),
		None => format!("{}\t{}", meta.id, meta.name),
	}
}

/// Format one delivery from an interactive session.
pub(crate) fn format_delivery(
	format: OutputFormat,
	query: &str,
	metas: &[ResultMeta],
) -> Result<String> {
	match format {
		OutputFormat::Plain => {
			let mut lines = vec![format!("> {query}")];
			if metas.is_empty() {
				lines.push("  (no results)".to_string());
			}
			lines.extend(metas.iter().map(|meta| format!("  {}", plain_row(meta))));
			Ok(lines.join("\n"))
		}
		OutputFormat::Json => Ok(serde_json::to_string(&json!({
			"query": query,
			"results": metas,
		}))?),
	}
}

/// Print one delivery from an interactive session.
pub(crate) fn print_delivery(format: OutputFormat, query: &str, metas: &[ResultMeta]) -> Result<()> {
	println!("{}", format_delivery(format, query, metas)?);
	Ok(())
}

/// Format the final answer of a one-shot search.
pub(crate) fn format_outcome(
	format: OutputFormat,
	query: &str,
	metas: &[ResultMeta],
) -> Result<String> {
	match format {
		OutputFormat::Plain => {
			if metas.is_empty() {
				return Ok(format!("No results (query: '{query}')"));
			}
			Ok(metas.iter().map(plain_row).collect::<Vec<_>>().join("\n"))
		}
		OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
			"query": query,
			"results": metas,
		}))?),
	}
}

/// Print the final answer of a one-shot search.
pub(crate) fn print_outcome(format: OutputFormat, query: &str, metas: &[ResultMeta]) -> Result<()> {
	println!("{}", format_outcome(format, query, metas)?);
	Ok(())
}
