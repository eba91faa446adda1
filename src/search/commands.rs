/// Commands understood by the background search worker.
#[derive(Debug)]
pub enum SearchCommand {
	/// Filter the catalog for the provided query once the simulated latency
	/// has elapsed.
	Query {
		/// Identifier that allows the UI to correlate responses with the originating query.
		id: u64,
		/// User supplied query string.
		query: String,
	},
	/// Stop the background worker thread.
	Shutdown,
}

/// Filter results emitted back to the UI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
	/// Identifier matching the [`SearchCommand::Query`] that produced the result.
	pub id: u64,
	/// The query text that was filtered.
	pub query: String,
	/// Offsets into the catalog that matched, in catalog order.
	pub matches: Vec<usize>,
}
