use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::time::Duration;

use crate::catalog::Catalog;
use crate::search::{self, SearchCommand, SearchResult};

/// UI-side handle of the background search worker.
pub(crate) struct SearchRuntime {
	tx: Sender<SearchCommand>,
	rx: Receiver<SearchResult>,
	latest_query_id: Arc<AtomicU64>,
	next_query_id: u64,
	current_query_id: Option<u64>,
	in_flight: bool,
}

impl SearchRuntime {
	/// Spawn a worker over `catalog` answering after `latency`.
	pub(crate) fn spawn(catalog: Catalog, latency: Duration) -> Self {
		let (tx, rx, latest_query_id) = search::spawn(catalog, latency);
		Self::new(tx, rx, latest_query_id)
	}

	pub(crate) fn new(
		tx: Sender<SearchCommand>,
		rx: Receiver<SearchResult>,
		latest_query_id: Arc<AtomicU64>,
	) -> Self {
		Self {
			tx,
			rx,
			latest_query_id,
			next_query_id: 0,
			current_query_id: None,
			in_flight: false,
		}
	}

	pub(crate) fn shutdown(&self) {
		let _ = self.tx.send(SearchCommand::Shutdown);
	}

	/// Send `query` to the worker, superseding any request still in flight.
	pub(crate) fn issue_search(&mut self, query: String) -> u64 {
		let id = self.advance_query_id();
		self.current_query_id = Some(id);
		self.in_flight = true;
		let _ = self.tx.send(SearchCommand::Query { id, query });
		id
	}

	/// Abandon the request in flight so its result is never applied.
	pub(crate) fn cancel(&mut self) {
		if self.current_query_id.take().is_some() {
			self.advance_query_id();
		}
		self.in_flight = false;
	}

	pub(crate) fn matches_latest(&self, result_id: u64) -> bool {
		Some(result_id) == self.current_query_id
	}

	pub(crate) fn record_result_completion(&mut self) {
		self.in_flight = false;
	}

	pub(crate) fn is_in_flight(&self) -> bool {
		self.in_flight
	}

	pub(crate) fn try_recv(&mut self) -> Result<SearchResult, TryRecvError> {
		self.rx.try_recv()
	}

	fn advance_query_id(&mut self) -> u64 {
		self.next_query_id = self.next_query_id.saturating_add(1);
		self.latest_query_id
			.store(self.next_query_id, AtomicOrdering::Release);
		self.next_query_id
	}
}
