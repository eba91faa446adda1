use std::fmt::Write;

use super::ResolvedConfig;

pub(super) fn format_summary(config: &ResolvedConfig) -> String {
	let mut out = String::from("Effective configuration:\n");
	let _ = writeln!(out, "  Latency: {} ms", config.latency.as_millis());
	let _ = writeln!(out, "  Candidates: {}", config.candidates.len());
	let _ = writeln!(out, "  Placeholder: {}", config.labels.placeholder);
	let _ = writeln!(out, "  Loading label: {}", config.labels.loading_label);
	let _ = writeln!(out, "  Width: {}", config.width);
	let _ = writeln!(out, "  Theme: {}", config.theme);
	let _ = writeln!(out, "  On select: {}", config.on_select);
	let _ = writeln!(
		out,
		"  Log level: {}",
		config.log_level.as_str().to_ascii_lowercase()
	);
	if !config.initial_query.is_empty() {
		let _ = writeln!(out, "  Initial query: {}", config.initial_query);
	}
	out
}
