use std::time::Duration;

use log::LevelFilter;
use typeahead::{SelectAction, UiLabels};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::SettingsError;
pub(crate) use sources::{ConfigSources, SettingSource};
pub(crate) use validation::{validate_candidates, validate_latency, validate_width};

/// Application-ready configuration derived from user input, config files and
/// built-in defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
	pub latency: Duration,
	pub candidates: Vec<String>,
	pub labels: UiLabels,
	pub width: u16,
	/// Canonical name of a built-in theme.
	pub theme: String,
	pub on_select: SelectAction,
	pub log_level: LevelFilter,
	pub initial_query: String,
}

impl ResolvedConfig {
	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		print!("{}", summary::format_summary(self));
	}
}
