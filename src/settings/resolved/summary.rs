use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	println!("  Provider name: {}", config.coordinator.app_name);
	println!("  Icon: {}", config.coordinator.icon_name);
	if config.prefixes.is_empty() {
		println!("  Prefixes: (handle every search)");
	} else {
		println!("  Prefixes: {}", config.prefixes.join(", "));
	}
	println!(
		"  Debounce: {}ms",
		config.coordinator.debounce.as_millis()
	);
	println!(
		"  Query timeout: {}ms",
		config.coordinator.query_timeout.as_millis()
	);
	match config.coordinator.max_results {
		Some(max) => println!("  Max results: {max}"),
		None => println!("  Max results: unlimited"),
	}
	println!(
		"  Missing results: {}",
		config.coordinator.missing_results.as_str()
	);
	println!("  Backend program: {}", config.backend.program);
	if !config.backend.args.is_empty() {
		println!("  Backend args: {}", config.backend.args.join(" "));
	}
	println!("  Id prefix: {}", config.backend.id_prefix);
	if let Some(dir) = &config.backend.working_dir {
		println!("  Working directory: {}", dir.display());
	}
	println!("  Launcher: {}", config.launcher);
}
