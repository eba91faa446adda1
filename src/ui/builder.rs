use std::time::Duration;

use anyhow::Result;

use super::App;
use super::config::{DEFAULT_WIDTH, SelectAction, UiLabels};
use super::style::{self, Theme};
use crate::catalog::Catalog;
use crate::search::{DEFAULT_LATENCY_MS, SearchOutcome};

/// A small builder for configuring the search box before running it.
#[derive(Debug, Clone)]
pub struct Typeahead {
	catalog: Catalog,
	latency: Duration,
	labels: UiLabels,
	theme: Option<Theme>,
	on_select: SelectAction,
	width: u16,
	initial_query: String,
}

impl Typeahead {
	/// Create a search box over the provided names.
	pub fn new(catalog: Catalog) -> Self {
		Self {
			catalog,
			latency: Duration::from_millis(DEFAULT_LATENCY_MS),
			labels: UiLabels::default(),
			theme: None,
			on_select: SelectAction::default(),
			width: DEFAULT_WIDTH,
			initial_query: String::new(),
		}
	}

	/// Delay before each filter result is shown.
	pub fn with_latency(mut self, latency: Duration) -> Self {
		self.latency = latency;
		self
	}

	pub fn with_labels(mut self, labels: UiLabels) -> Self {
		self.labels = labels;
		self
	}

	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.labels.placeholder = placeholder.into();
		self
	}

	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	/// Select a built-in theme by name or alias. Unknown names are ignored.
	pub fn with_theme_name(mut self, name: &str) -> Self {
		if let Some(theme) = style::by_name(name) {
			self.theme = Some(theme);
		}
		self
	}

	pub fn with_select_action(mut self, action: SelectAction) -> Self {
		self.on_select = action;
		self
	}

	pub fn with_width(mut self, width: u16) -> Self {
		self.width = width;
		self
	}

	/// Start with `query` already typed; its search is issued immediately.
	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = query.into();
		self
	}

	/// Build the [`App`] without entering the terminal.
	pub fn build<'a>(self) -> App<'a> {
		let mut app = App::new(self.catalog, self.latency);
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		app.set_labels(self.labels);
		app.set_select_action(self.on_select);
		app.set_width(self.width);
		app.set_query(self.initial_query);
		app
	}

	/// Run the interactive search box and return the outcome.
	pub fn run(self) -> Result<SearchOutcome> {
		let mut app = self.build();
		app.run()
	}
}

impl Default for Typeahead {
	fn default() -> Self {
		Self::new(Catalog::default())
	}
}
