use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{LevelArg, OutputFormat, SelectArg};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `typeahead` binary.
#[derive(Parser, Debug)]
#[command(
	name = "typeahead",
	version,
	long_version = long_version(),
	about = "Autocomplete search box that filters a list of names as you type",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "TYPEAHEAD_CONFIG",
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
		short = 'q',
		long,
		value_name = "QUERY",
		help = "Start with a query already typed (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		short = 'p',
		long,
		value_name = "TEXT",
		help = "Text shown while the input is empty (default: \"Search something\")"
	)]
	pub(crate) placeholder: Option<String>,
	#[arg(
		short = 'l',
		long = "latency-ms",
		value_name = "MS",
		help = "Delay before filter results are shown (default: 400)"
	)]
	pub(crate) latency_ms: Option<u64>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: teal)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		long = "on-select",
		value_enum,
		help = "What choosing a result does (default: alert)"
	)]
	pub(crate) on_select: Option<SelectArg>,
	#[arg(
		long = "log-level",
		value_enum,
		help = "Lowest level shown in the log pane (default: info)"
	)]
	pub(crate) log_level: Option<LevelArg>,
	#[arg(
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
