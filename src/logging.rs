//! In-memory log capture for the search box.
//!
//! Records emitted through the `log` facade are buffered by `tui-logger` and
//! shown in the UI's log pane. Nothing is written to the terminal directly.

use anyhow::{Result, anyhow};
use log::LevelFilter;

/// Install the `tui-logger` backend and set the level shown by default.
///
/// Fails if a logger is already installed for this process.
pub fn initialize(level: LevelFilter) -> Result<()> {
	tui_logger::init_logger(LevelFilter::Trace)
		.map_err(|err| anyhow!("failed to install the log backend: {err:?}"))?;
	tui_logger::set_default_level(level);
	log::info!("logging initialised at {level}");
	Ok(())
}

/// Change the level shown by default once the configured value is known.
pub fn set_level(level: LevelFilter) {
	tui_logger::set_default_level(level);
	log::debug!("log level set to {level}");
}

/// Move buffered events into the log pane's history. Called once per frame.
pub fn pump() {
	tui_logger::move_events();
}
