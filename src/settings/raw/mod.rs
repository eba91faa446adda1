use std::env;

use anyhow::Result;
use log::LevelFilter;
use serde::Deserialize;
use typeahead::ui::style;
use typeahead::ui::{DEFAULT_LOADING_LABEL, DEFAULT_PLACEHOLDER, DEFAULT_WIDTH};
use typeahead::{DEFAULT_LATENCY_MS, DEFAULT_NAMES, SelectAction, UiLabels};

use super::resolved::{
	ConfigSources, ResolvedConfig, SettingSource, SettingsError, validate_candidates,
	validate_latency, validate_width,
};
use super::sources::ENV_PREFIX;
use crate::cli::CliArgs;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	search: SearchSection,
	ui: UiSection,
	behavior: BehaviorSection,
	logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SearchSection {
	latency_ms: Option<u64>,
	candidates: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	placeholder: Option<String>,
	loading_label: Option<String>,
	width: Option<u64>,
	theme: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct BehaviorSection {
	on_select: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LoggingSection {
	level: Option<String>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(latency) = cli.latency_ms {
			self.search.latency_ms = Some(latency);
		}
		if let Some(placeholder) = cli.placeholder.clone() {
			self.ui.placeholder = Some(placeholder);
		}
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
		if let Some(action) = cli.on_select {
			self.behavior.on_select = Some(action.as_str().to_string());
		}
		if let Some(level) = cli.log_level {
			self.logging.level = Some(level.as_str().to_string());
		}
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			latency_ms: detect_source(
				cli.latency_ms.is_some(),
				self.search.latency_ms.is_some(),
				"SEARCH__LATENCY_MS",
				"--latency-ms",
				"search.latency_ms",
			),
			candidates: detect_source(
				false,
				self.search.candidates.is_some(),
				"SEARCH__CANDIDATES",
				"",
				"search.candidates",
			),
			width: detect_source(
				false,
				self.ui.width.is_some(),
				"UI__WIDTH",
				"",
				"ui.width",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"UI__THEME",
				"--theme",
				"ui.theme",
			),
			on_select: detect_source(
				cli.on_select.is_some(),
				self.behavior.on_select.is_some(),
				"BEHAVIOR__ON_SELECT",
				"--on-select",
				"behavior.on_select",
			),
			log_level: detect_source(
				cli.log_level.is_some(),
				self.logging.level.is_some(),
				"LOGGING__LEVEL",
				"--log-level",
				"logging.level",
			),
		};

		let candidates = match self.search.candidates {
			Some(names) => sanitize_names(names),
			None => DEFAULT_NAMES.iter().map(|name| name.to_string()).collect(),
		};

		let theme = match self.ui.theme {
			Some(name) => style::canonical_name(&name)
				.ok_or_else(|| {
					SettingsError::invalid(
						"ui.theme",
						name.as_str(),
						sources.source_for_theme(),
						format!("expected one of {}", style::names().join(", ")),
					)
				})?
				.to_string(),
			None => style::default_theme_name().to_string(),
		};

		let on_select = match self.behavior.on_select {
			Some(value) => parse_select_action(&value).ok_or_else(|| {
				SettingsError::invalid(
					"behavior.on_select",
					value.as_str(),
					sources.source_for_on_select(),
					"expected `alert` or `exit`",
				)
			})?,
			None => SelectAction::default(),
		};

		let log_level = match self.logging.level {
			Some(value) => value.trim().parse::<LevelFilter>().map_err(|_| {
				SettingsError::invalid(
					"logging.level",
					value.as_str(),
					sources.source_for_log_level(),
					"expected off, error, warn, info, debug or trace",
				)
			})?,
			None => LevelFilter::Info,
		};

		let labels = UiLabels {
			placeholder: self
				.ui
				.placeholder
				.unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string()),
			loading_label: self
				.ui
				.loading_label
				.unwrap_or_else(|| DEFAULT_LOADING_LABEL.to_string()),
			..UiLabels::default()
		};

		let latency_ms = self.search.latency_ms.unwrap_or(DEFAULT_LATENCY_MS);
		let width = self.ui.width.unwrap_or(u64::from(DEFAULT_WIDTH));

		Ok(ResolvedConfig {
			latency: validate_latency(latency_ms, &sources)?,
			candidates: validate_candidates(candidates, &sources)?,
			labels,
			width: validate_width(width, &sources)?,
			theme,
			on_select,
			log_level,
			initial_query: cli.initial_query.clone().unwrap_or_default(),
		})
	}
}

/// Trim names and drop blank entries.
fn sanitize_names(names: Vec<String>) -> Vec<String> {
	names
		.into_iter()
		.map(|name| name.trim().to_string())
		.filter(|name| !name.is_empty())
		.collect()
}

fn parse_select_action(value: &str) -> Option<SelectAction> {
	match value.trim().to_ascii_lowercase().as_str() {
		"alert" => Some(SelectAction::Alert),
		"exit" => Some(SelectAction::Exit),
		_ => None,
	}
}

/// Work out where a value came from so validation errors can name it.
fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_suffix: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	let env_var = format!("{ENV_PREFIX}_{env_suffix}");
	if env::var_os(&env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
