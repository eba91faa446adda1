use std::fmt;

use serde::{Deserialize, Serialize};

/// Default placeholder shown in the empty input.
pub const DEFAULT_PLACEHOLDER: &str = "Search something";
/// Default text of the dropdown row shown while a search is in flight.
pub const DEFAULT_LOADING_LABEL: &str = "loading";
/// Default width of the search box, in columns.
pub const DEFAULT_WIDTH: u16 = 44;

/// Human-readable text rendered around the search box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	/// Placeholder displayed while the input is empty.
	pub placeholder: String,
	/// Label of the dropdown row shown while results are loading.
	pub loading_label: String,
	/// Title of the dialog raised for a selection.
	pub alert_title: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			placeholder: DEFAULT_PLACEHOLDER.to_string(),
			loading_label: DEFAULT_LOADING_LABEL.to_string(),
			alert_title: "Selected".to_string(),
		}
	}
}

/// What happens when a result is chosen with Enter or a click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectAction {
	/// Raise a dialog naming the selection, then keep searching.
	#[default]
	Alert,
	/// Finish the session and report the selection.
	Exit,
}

impl SelectAction {
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Alert => "alert",
			Self::Exit => "exit",
		}
	}
}

impl fmt::Display for SelectAction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
