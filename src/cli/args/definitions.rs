use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{MissingResultsArg, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `sift` binary.
#[derive(Parser, Debug)]
#[command(
	name = "sift",
	version,
	long_version = long_version(),
	about = "Debounced search provider session driven from the terminal",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "SIFT_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'p',
		long,
		value_name = "PROGRAM",
		help = "Backend program that answers queries with JSON lines"
	)]
	pub(crate) program: Option<String>,
	#[arg(
		short = 'a',
		long = "arg",
		value_name = "ARG",
		action = ArgAction::Append,
		allow_hyphen_values = true,
		help = "Argument for the backend program; `{query}` is replaced by the query (default: query appended)"
	)]
	pub(crate) args: Option<Vec<String>>,
	#[arg(
		long = "id-prefix",
		value_name = "PREFIX",
		help = "Prefix for synthesized result ids (default: result)"
	)]
	pub(crate) id_prefix: Option<String>,
	#[arg(
		long = "working-dir",
		value_name = "DIR",
		help = "Working directory for the backend program (default: inherited)"
	)]
	pub(crate) working_dir: Option<PathBuf>,
	#[arg(
		long = "app-name",
		value_name = "NAME",
		help = "Provider name shown in status messages (default: Sift)"
	)]
	pub(crate) app_name: Option<String>,
	#[arg(
		long = "icon-name",
		value_name = "ICON",
		help = "Themed icon attached to result rows (default: system-search)"
	)]
	pub(crate) icon_name: Option<String>,
	#[arg(
		long = "prefix",
		value_name = "PREFIX",
		action = ArgAction::Append,
		help = "Only handle searches whose first term starts with PREFIX (default: handle all)"
	)]
	pub(crate) prefixes: Option<Vec<String>>,
	#[arg(
		short = 'd',
		long = "debounce-ms",
		value_name = "MS",
		help = "Delay after the last keystroke before querying (default: 800)"
	)]
	pub(crate) debounce_ms: Option<u64>,
	#[arg(
		long = "timeout-ms",
		value_name = "MS",
		help = "Time the backend gets to answer a query (default: 10000)"
	)]
	pub(crate) timeout_ms: Option<u64>,
	#[arg(
		short = 'm',
		long = "max-results",
		value_name = "NUM",
		help = "Deliver at most NUM results per query (default: unlimited)"
	)]
	pub(crate) max_results: Option<usize>,
	#[arg(
		long = "missing-results",
		value_enum,
		help = "How metadata lookups treat unknown ids (default: omit)"
	)]
	pub(crate) missing_results: Option<MissingResultsArg>,
	#[arg(
		long,
		value_name = "PROGRAM",
		help = "Program used to open activated results (default: xdg-open)"
	)]
	pub(crate) launcher: Option<String>,
	#[arg(
		long,
		value_name = "ID",
		help = "Activate the result with this id once the search completes"
	)]
	pub(crate) open: Option<String>,
	#[arg(
		short = 'o',
		long,
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Output format for results"
	)]
	pub(crate) output: OutputFormat,
	#[arg(long = "print-config", help = "Print the effective configuration")]
	pub(crate) print_config: bool,
	#[arg(
		short,
		long,
		action = ArgAction::Count,
		help = "Increase log verbosity (repeat for more)"
	)]
	pub(crate) verbose: u8,
	#[arg(
		value_name = "TERMS",
		trailing_var_arg = true,
		help = "Search terms; without terms each stdin line is treated as a new search"
	)]
	pub(crate) terms: Vec<String>,
}
