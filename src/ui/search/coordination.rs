use std::sync::mpsc::TryRecvError;

use crate::search::SearchResult;
use crate::ui::App;

impl<'a> App<'a> {
	/// React to an edit of the query text.
	///
	/// A non-empty query is sent to the worker and the dropdown switches to
	/// its loading row. Emptying the query drops the results, resets focus and
	/// abandons whatever search was still pending.
	pub(crate) fn query_changed(&mut self) {
		if self.search_input.is_empty() {
			self.search.cancel();
			self.results.clear();
			self.focus.reset();
			log::debug!("query cleared");
			return;
		}

		let query = self.search_input.text().to_string();
		let id = self.search.issue_search(query.clone());
		log::debug!("issued query #{id} ({query:?})");
	}

	/// Drain any search results waiting on the receiver channel.
	pub(crate) fn pump_search_results(&mut self) {
		loop {
			match self.search.try_recv() {
				Ok(result) => self.handle_search_result(result),
				Err(TryRecvError::Empty) => break,
				Err(TryRecvError::Disconnected) => break,
			}
		}
	}

	/// Apply a search result if it corresponds to the most recent query.
	fn handle_search_result(&mut self, result: SearchResult) {
		if !self.search.matches_latest(result.id) {
			log::debug!("ignoring stale result for query #{}", result.id);
			return;
		}

		self.results = result.matches;
		self.focus.clamp(self.results.len());
		self.search.record_result_completion();
		log::debug!(
			"applied {} result(s) for {:?}",
			self.results.len(),
			result.query
		);
	}
}
