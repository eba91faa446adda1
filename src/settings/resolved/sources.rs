use std::fmt;

/// Where a configuration value was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(String),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Origins of the values that validation may reject.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) latency_ms: Option<SettingSource>,
	pub(crate) candidates: Option<SettingSource>,
	pub(crate) width: Option<SettingSource>,
	pub(crate) theme: Option<SettingSource>,
	pub(crate) on_select: Option<SettingSource>,
	pub(crate) log_level: Option<SettingSource>,
}

fn or_key(source: &Option<SettingSource>, key: &'static str) -> SettingSource {
	source.clone().unwrap_or(SettingSource::ConfigKey(key))
}

impl ConfigSources {
	pub(crate) fn source_for_latency(&self) -> SettingSource {
		or_key(&self.latency_ms, "search.latency_ms")
	}

	pub(crate) fn source_for_candidates(&self) -> SettingSource {
		or_key(&self.candidates, "search.candidates")
	}

	pub(crate) fn source_for_width(&self) -> SettingSource {
		or_key(&self.width, "ui.width")
	}

	pub(crate) fn source_for_theme(&self) -> SettingSource {
		or_key(&self.theme, "ui.theme")
	}

	pub(crate) fn source_for_on_select(&self) -> SettingSource {
		or_key(&self.on_select, "behavior.on_select")
	}

	pub(crate) fn source_for_log_level(&self) -> SettingSource {
		or_key(&self.log_level, "logging.level")
	}
}
