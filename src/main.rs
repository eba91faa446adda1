mod cli;
mod settings;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use log::LevelFilter;
use settings::ResolvedConfig;
use typeahead::{Catalog, Typeahead, logging};

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in typeahead::ui::style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	// Must precede `settings::load`, which logs the resolved configuration.
	logging::initialize(LevelFilter::Info)?;
	let resolved = settings::load(&cli)?;
	logging::set_level(resolved.log_level);

	if cli.print_config {
		resolved.print_summary();
	}

	run_search(cli.output, resolved)
}

/// Run the search box and print the outcome in the chosen format.
fn run_search(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let outcome = Typeahead::new(Catalog::new(settings.candidates))
		.with_latency(settings.latency)
		.with_labels(settings.labels)
		.with_theme_name(&settings.theme)
		.with_select_action(settings.on_select)
		.with_width(settings.width)
		.with_initial_query(settings.initial_query)
		.run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
