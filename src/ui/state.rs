//! Core state container for the search box.
//!
//! The [`App`] struct bundles the catalog, the query editor, the current
//! results and focus, and the caches the renderer leaves behind for mouse
//! hit-testing.

use std::time::Duration;

use ratatui::layout::Rect;
use ratatui::widgets::TableState;
use throbber_widgets_tui::ThrobberState;

use super::config::{DEFAULT_WIDTH, SelectAction, UiLabels};
use super::focus::FocusTracker;
use super::input::QueryInput;
use super::search::SearchRuntime;
use super::style::Theme;
use crate::catalog::Catalog;
use crate::search::SearchOutcome;

impl<'a> Drop for App<'a> {
	fn drop(&mut self) {
		self.search.shutdown();
	}
}

/// Screen regions recorded during the last draw.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct HitAreas {
	/// The clickable clear affordance, present while the query is non-empty.
	pub(crate) clear: Option<Rect>,
	/// Rows of the dropdown, present while results are listed.
	pub(crate) rows: Option<Rect>,
}

/// Aggregate state of the search box.
pub struct App<'a> {
	/// Names being searched.
	pub catalog: Catalog,
	/// Text input holding the query.
	pub search_input: QueryInput<'a>,
	/// Active colour scheme.
	pub theme: Theme,
	pub(crate) ui: UiLabels,
	pub(crate) on_select: SelectAction,
	pub(crate) width: u16,
	pub(crate) search: SearchRuntime,
	/// Catalog indices matching the last applied query.
	pub(crate) results: Vec<usize>,
	pub(crate) focus: FocusTracker,
	pub(crate) table_state: TableState,
	pub(crate) throbber_state: ThrobberState,
	/// Name shown in the open selection dialog.
	pub(crate) alert: Option<String>,
	pub(crate) selections: Vec<String>,
	pub(crate) show_logs: bool,
	pub(crate) hit_areas: HitAreas,
}

impl<'a> App<'a> {
	/// Construct an [`App`] whose searches answer after `latency`.
	pub fn new(catalog: Catalog, latency: Duration) -> Self {
		let search = SearchRuntime::spawn(catalog.clone(), latency);
		let mut app = Self {
			catalog,
			search_input: QueryInput::default(),
			theme: Theme::default(),
			ui: UiLabels::default(),
			on_select: SelectAction::default(),
			width: DEFAULT_WIDTH,
			search,
			results: Vec::new(),
			focus: FocusTracker::default(),
			table_state: TableState::default(),
			throbber_state: ThrobberState::default(),
			alert: None,
			selections: Vec::new(),
			show_logs: false,
			hit_areas: HitAreas::default(),
		};
		app.apply_input_style();
		app
	}

	/// Apply a new theme.
	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
		self.apply_input_style();
	}

	pub fn set_labels(&mut self, labels: UiLabels) {
		self.ui = labels;
		self.apply_input_style();
	}

	pub fn set_select_action(&mut self, action: SelectAction) {
		self.on_select = action;
	}

	/// Width of the search box in columns. Narrow terminals still clip it.
	pub fn set_width(&mut self, width: u16) {
		self.width = width.max(1);
	}

	/// Replace the query as if the user had typed it.
	pub fn set_query(&mut self, query: impl Into<String>) {
		if self.search_input.set_text(query) {
			self.query_changed();
		}
	}

	/// Current query text.
	#[must_use]
	pub fn query(&self) -> &str {
		self.search_input.text()
	}

	/// Names currently listed in the dropdown, in catalog order.
	#[must_use]
	pub fn result_names(&self) -> Vec<&str> {
		self.results
			.iter()
			.filter_map(|&index| self.catalog.get(index))
			.collect()
	}

	/// `true` while a search is waiting on the worker.
	#[must_use]
	pub fn is_loading(&self) -> bool {
		self.search.is_in_flight()
	}

	#[must_use]
	pub fn focus_index(&self) -> usize {
		self.focus.index()
	}

	/// The name under keyboard focus, if any result is listed. Results of the
	/// previous query are hidden behind the loading row and never count.
	#[must_use]
	pub fn focused_name(&self) -> Option<&str> {
		if self.is_loading() {
			return None;
		}
		let position = self.focus.focused(self.results.len())?;
		self.catalog.get(self.results[position])
	}

	/// Whether the dropdown is drawn: while loading, or when a non-empty
	/// query has matches.
	#[must_use]
	pub fn dropdown_visible(&self) -> bool {
		self.is_loading() || (!self.search_input.is_empty() && !self.results.is_empty())
	}

	/// Name shown by the open selection dialog.
	#[must_use]
	pub fn alert(&self) -> Option<&str> {
		self.alert.as_deref()
	}

	/// Every name chosen so far, oldest first.
	#[must_use]
	pub fn selections(&self) -> &[String] {
		&self.selections
	}

	/// Empty the query along with its results and focus.
	pub(crate) fn clear_query(&mut self) {
		if self.search_input.clear() {
			self.query_changed();
		}
	}

	/// Choose the focused result. Does nothing while no result is listed.
	pub(crate) fn select_focused(&mut self) -> Option<SearchOutcome> {
		let name = self.focused_name()?.to_string();
		self.select(name)
	}

	/// Run the selection action for `name` and reset the input.
	pub(crate) fn select(&mut self, name: String) -> Option<SearchOutcome> {
		let query = self.search_input.text().to_string();
		log::debug!("selected {name:?}");
		self.selections.push(name.clone());
		self.clear_query();

		match self.on_select {
			SelectAction::Alert => {
				self.alert = Some(name);
				None
			}
			SelectAction::Exit => Some(SearchOutcome::accepted(query, self.selections.clone())),
		}
	}

	/// Outcome reported when the user leaves without exiting on a result.
	pub(crate) fn cancelled_outcome(&self) -> SearchOutcome {
		SearchOutcome::cancelled(self.search_input.text(), self.selections.clone())
	}

	pub(crate) fn dismiss_alert(&mut self) {
		self.alert = None;
	}

	fn apply_input_style(&mut self) {
		self.search_input.set_style(self.theme.text);
		self.search_input
			.set_placeholder(self.ui.placeholder.clone(), self.theme.placeholder);
	}
}

#[cfg(test)]
mod tests;
