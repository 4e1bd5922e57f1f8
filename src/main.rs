mod cli;
mod settings;
mod workflow;

use anyhow::{Context, Result};
use cli::parse_cli;
use workflow::SearchSession;

fn main() -> Result<()> {
	let cli = parse_cli();
	sift::logging::initialize(cli.verbose)?;

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	let runtime = tokio::runtime::Builder::new_current_thread()
		.enable_all()
		.build()
		.context("failed to start the async runtime")?;

	runtime.block_on(async move {
		let session = SearchSession::from_config(resolved, cli.output)?;
		if cli.terms.is_empty() {
			session.run_interactive().await
		} else {
			session.run_once(&cli.terms, cli.open.as_deref()).await
		}
	})
}
