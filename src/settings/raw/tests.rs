use std::time::Duration;

use clap::Parser;
use config::{Config, File, FileFormat, Map};
use log::LevelFilter;
use typeahead::SelectAction;

use super::RawConfig;
use crate::cli::CliArgs;
use crate::settings::loader::from_config;
use crate::settings::sources::environment;

fn cli(args: &[&str]) -> CliArgs {
	let mut argv = vec!["typeahead"];
	argv.extend_from_slice(args);
	CliArgs::try_parse_from(argv).expect("parses")
}

fn layered(files: &[&str]) -> Config {
	let mut builder = Config::builder();
	for contents in files {
		builder = builder.add_source(File::from_str(contents, FileFormat::Toml));
	}
	builder.build().expect("config builds")
}

#[test]
fn defaults_apply_without_any_source() {
	let resolved = from_config(layered(&[]), &cli(&[])).expect("resolves");
	assert_eq!(resolved.latency, Duration::from_millis(400));
	assert_eq!(resolved.candidates.len(), 10);
	assert_eq!(resolved.candidates[0], "Vlad Reid");
	assert_eq!(resolved.labels.placeholder, "Search something");
	assert_eq!(resolved.labels.loading_label, "loading");
	assert_eq!(resolved.width, 44);
	assert_eq!(resolved.theme, "teal");
	assert_eq!(resolved.on_select, SelectAction::Alert);
	assert_eq!(resolved.log_level, LevelFilter::Info);
	assert!(resolved.initial_query.is_empty());
}

#[test]
fn later_files_override_earlier_ones() {
	let config = layered(&[
		r#"
		[search]
		latency_ms = 50
		candidates = ["Ada", "Grace"]

		[ui]
		placeholder = "Find a person"
		width = 60
		"#,
		r#"
		[search]
		latency_ms = 0

		[ui]
		theme = "dark"
		"#,
	]);

	let resolved = from_config(config, &cli(&[])).expect("resolves");
	assert_eq!(resolved.latency, Duration::ZERO);
	assert_eq!(resolved.candidates, vec!["Ada", "Grace"]);
	assert_eq!(resolved.labels.placeholder, "Find a person");
	assert_eq!(resolved.width, 60);
	assert_eq!(resolved.theme, "slate");
}

#[test]
fn cli_overrides_take_precedence() {
	let config = layered(&[r#"
		[search]
		latency_ms = 50

		[ui]
		placeholder = "from file"
		theme = "mono"

		[behavior]
		on_select = "alert"

		[logging]
		level = "warn"
		"#]);
	let cli = cli(&[
		"--latency-ms",
		"5",
		"--placeholder",
		"from cli",
		"--theme",
		"teal",
		"--on-select",
		"exit",
		"--log-level",
		"trace",
		"-q",
		"Hu",
	]);

	let mut raw: RawConfig = config.try_deserialize().expect("deserializes");
	raw.apply_cli_overrides(&cli);
	assert_eq!(raw.search.latency_ms, Some(5));
	assert_eq!(raw.ui.placeholder.as_deref(), Some("from cli"));

	let resolved = raw.resolve(&cli).expect("resolves");
	assert_eq!(resolved.latency, Duration::from_millis(5));
	assert_eq!(resolved.labels.placeholder, "from cli");
	assert_eq!(resolved.theme, "teal");
	assert_eq!(resolved.on_select, SelectAction::Exit);
	assert_eq!(resolved.log_level, LevelFilter::Trace);
	assert_eq!(resolved.initial_query, "Hu");
}

#[test]
fn blank_candidates_are_dropped() {
	let config = layered(&[r#"
		[search]
		candidates = ["  Ada  ", "", "   "]
		"#]);
	let resolved = from_config(config, &cli(&[])).expect("resolves");
	assert_eq!(resolved.candidates, vec!["Ada"]);
}

#[test]
fn empty_candidate_list_is_rejected() {
	let config = layered(&[r#"
		[search]
		candidates = []
		"#]);
	let err = from_config(config, &cli(&[])).unwrap_err();
	assert!(err.to_string().contains("search.candidates"));
}

#[test]
fn unknown_theme_names_the_flag() {
	let err = from_config(layered(&[]), &cli(&["--theme", "neon"])).unwrap_err();
	let message = err.to_string();
	assert!(message.contains("ui.theme"));
	assert!(message.contains("CLI flag `--theme`"));
	assert!(message.contains("mono, slate, teal"));
}

#[test]
fn invalid_values_from_files_are_rejected() {
	let bad_action = layered(&["[behavior]\non_select = \"open\""]);
	let err = from_config(bad_action, &cli(&[])).unwrap_err();
	assert!(err.to_string().contains("behavior.on_select"));

	let bad_level = layered(&["[logging]\nlevel = \"loud\""]);
	let err = from_config(bad_level, &cli(&[])).unwrap_err();
	assert!(err.to_string().contains("logging.level"));

	let bad_width = layered(&["[ui]\nwidth = 8"]);
	let err = from_config(bad_width, &cli(&[])).unwrap_err();
	assert!(err.to_string().contains("configuration key `ui.width`"));

	let bad_latency = layered(&["[search]\nlatency_ms = 60000"]);
	assert!(from_config(bad_latency, &cli(&[])).is_err());
}

#[test]
fn environment_overrides_files_and_splits_only_candidates() {
	let vars: Map<String, String> = [
		("TYPEAHEAD_SEARCH__CANDIDATES", "Ada,Grace"),
		("TYPEAHEAD_UI__PLACEHOLDER", "Find, a person"),
		("TYPEAHEAD_SEARCH__LATENCY_MS", "0"),
	]
	.into_iter()
	.map(|(key, value)| (key.to_string(), value.to_string()))
	.collect();

	let config = Config::builder()
		.add_source(File::from_str(
			r#"
			[search]
			latency_ms = 250
			candidates = ["Vlad Reid"]

			[ui]
			placeholder = "from file"
			width = 60
			"#,
			FileFormat::Toml,
		))
		.add_source(environment().source(Some(vars)))
		.build()
		.expect("config builds");

	let resolved = from_config(config, &cli(&[])).expect("resolves");
	assert_eq!(resolved.latency, Duration::ZERO);
	assert_eq!(resolved.candidates, vec!["Ada", "Grace"]);
	assert_eq!(resolved.labels.placeholder, "Find, a person");
	assert_eq!(resolved.width, 60);
}
