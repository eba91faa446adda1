use std::ops::RangeInclusive;
use std::time::Duration;

use super::{ConfigSources, SettingsError};

/// Longest accepted simulated latency.
pub(crate) const MAX_LATENCY_MS: u64 = 10_000;
/// Accepted widths of the search box, in columns.
pub(crate) const WIDTH_RANGE: RangeInclusive<u64> = 20..=200;

pub(crate) fn validate_latency(
	latency_ms: u64,
	sources: &ConfigSources,
) -> Result<Duration, SettingsError> {
	if latency_ms > MAX_LATENCY_MS {
		return Err(SettingsError::invalid(
			"search.latency_ms",
			latency_ms.to_string(),
			sources.source_for_latency(),
			format!("must be at most {MAX_LATENCY_MS}"),
		));
	}
	Ok(Duration::from_millis(latency_ms))
}

pub(crate) fn validate_width(width: u64, sources: &ConfigSources) -> Result<u16, SettingsError> {
	if !WIDTH_RANGE.contains(&width) {
		return Err(SettingsError::invalid(
			"ui.width",
			width.to_string(),
			sources.source_for_width(),
			format!(
				"must be between {} and {}",
				WIDTH_RANGE.start(),
				WIDTH_RANGE.end()
			),
		));
	}
	u16::try_from(width).map_err(|_| {
		SettingsError::invalid(
			"ui.width",
			width.to_string(),
			sources.source_for_width(),
			"out of range",
		)
	})
}

pub(crate) fn validate_candidates(
	candidates: Vec<String>,
	sources: &ConfigSources,
) -> Result<Vec<String>, SettingsError> {
	if candidates.is_empty() {
		return Err(SettingsError::invalid(
			"search.candidates",
			"[]",
			sources.source_for_candidates(),
			"must name at least one candidate",
		));
	}
	Ok(candidates)
}
