use clap::{CommandFactory, FromArgMatches, Parser};

use super::options::MissingResultsArg;
use super::{CliArgs, OutputFormat};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let command = CliArgs::command();
	let mut matches = command.get_matches_from(vec!["sift"]);
	let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.terms.is_empty());
	assert!(parsed.prefixes.is_none());
}

#[test]
fn trailing_terms_and_repeated_flags_are_collected() {
	let parsed = CliArgs::parse_from([
		"sift",
		"--prefix",
		"d:",
		"--prefix",
		"s:",
		"--arg",
		"-t",
		"--missing-results",
		"placeholder",
		"s:rust",
		"async",
	]);
	assert_eq!(parsed.prefixes, Some(vec!["d:".to_string(), "s:".to_string()]));
	assert_eq!(parsed.args, Some(vec!["-t".to_string()]));
	assert_eq!(parsed.missing_results, Some(MissingResultsArg::Placeholder));
	assert_eq!(parsed.terms, vec!["s:rust".to_string(), "async".to_string()]);
}
