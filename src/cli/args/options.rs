use clap::ValueEnum;

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

/// Cache-miss policies selectable from the CLI.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum MissingResultsArg {
	Omit,
	Placeholder,
}

impl MissingResultsArg {
	/// Return the string representation consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			MissingResultsArg::Omit => "omit",
			MissingResultsArg::Placeholder => "placeholder",
		}
	}
}
