use serde::Serialize;

/// Captures the outcome of a search session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
	/// `true` when the session ended because a result was chosen.
	pub accepted: bool,
	/// Every name chosen during the session, oldest first.
	pub selections: Vec<String>,
	/// Query text at the moment the session ended.
	pub query: String,
}

impl SearchOutcome {
	/// Outcome for a session the user left without choosing to exit on a result.
	#[must_use]
	pub fn cancelled(query: impl Into<String>, selections: Vec<String>) -> Self {
		Self {
			accepted: false,
			selections,
			query: query.into(),
		}
	}

	/// Outcome for a session that ended on a chosen result.
	#[must_use]
	pub fn accepted(query: impl Into<String>, selections: Vec<String>) -> Self {
		Self {
			accepted: true,
			selections,
			query: query.into(),
		}
	}

	/// Return the most recent selection, if any.
	#[must_use]
	pub fn last_selection(&self) -> Option<&str> {
		self.selections.last().map(String::as_str)
	}
}
