use anyhow::{Context, Result};
use config::Config;

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let config = build_config(cli)?;
	from_config(config, cli)
}

/// Deserialize an already layered [`Config`], apply CLI overrides and validate.
pub(super) fn from_config(config: Config, cli: &CliArgs) -> Result<ResolvedConfig> {
	let mut raw: RawConfig = config
		.try_deserialize()
		.context("failed to deserialize configuration")?;
	raw.apply_cli_overrides(cli);
	let resolved = raw.resolve(cli)?;
	log::info!(
		"configuration resolved: {} candidate(s), {:?} latency, theme {}",
		resolved.candidates.len(),
		resolved.latency,
		resolved.theme
	);
	Ok(resolved)
}
