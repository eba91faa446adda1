use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use super::commands::{SearchCommand, SearchResult};
use crate::catalog::Catalog;

/// A query waiting for its simulated latency to elapse.
#[derive(Debug)]
struct PendingQuery {
	id: u64,
	query: String,
	due: Instant,
}

/// Launches the background search worker thread and returns communication channels.
///
/// Every query is answered `latency` after it was received, independently of
/// any queries still waiting. A query is dropped instead of answered if a newer
/// id has been published through the returned counter by the time it falls due.
pub fn spawn(
	catalog: Catalog,
	latency: Duration,
) -> (
	Sender<SearchCommand>,
	Receiver<SearchResult>,
	Arc<AtomicU64>,
) {
	let (command_tx, command_rx) = mpsc::channel();
	let (result_tx, result_rx) = mpsc::channel();
	let latest_query_id = Arc::new(AtomicU64::new(0));
	let thread_latest = Arc::clone(&latest_query_id);

	thread::spawn(move || worker_loop(&catalog, latency, command_rx, result_tx, thread_latest));

	(command_tx, result_rx, latest_query_id)
}

fn worker_loop(
	catalog: &Catalog,
	latency: Duration,
	command_rx: Receiver<SearchCommand>,
	result_tx: Sender<SearchResult>,
	latest_query_id: Arc<AtomicU64>,
) {
	let mut pending = VecDeque::new();

	loop {
		let command = match pending.front() {
			Some(PendingQuery { due, .. }) => {
				let wait = due.saturating_duration_since(Instant::now());
				match command_rx.recv_timeout(wait) {
					Ok(command) => Some(command),
					Err(RecvTimeoutError::Timeout) => None,
					Err(RecvTimeoutError::Disconnected) => break,
				}
			}
			None => match command_rx.recv() {
				Ok(command) => Some(command),
				Err(_) => break,
			},
		};

		match command {
			Some(SearchCommand::Query { id, query }) => {
				pending.push_back(PendingQuery {
					id,
					query,
					due: Instant::now() + latency,
				});
			}
			Some(SearchCommand::Shutdown) => break,
			None => {}
		}

		if !flush_due(catalog, &mut pending, &result_tx, &latest_query_id) {
			break;
		}
	}
}

/// Answer every pending query whose latency has elapsed.
///
/// Returns `false` once the UI side has hung up.
fn flush_due(
	catalog: &Catalog,
	pending: &mut VecDeque<PendingQuery>,
	result_tx: &Sender<SearchResult>,
	latest_query_id: &AtomicU64,
) -> bool {
	let now = Instant::now();
	while pending.front().is_some_and(|next| next.due <= now) {
		let Some(PendingQuery { id, query, .. }) = pending.pop_front() else {
			break;
		};

		if latest_query_id.load(Ordering::Acquire) != id {
			log::debug!("dropping superseded query #{id} ({query:?})");
			continue;
		}

		let matches = catalog.filter(&query);
		log::debug!("query #{id} ({query:?}) matched {} entries", matches.len());
		if result_tx.send(SearchResult { id, query, matches }).is_err() {
			return false;
		}
	}
	true
}

#[cfg(test)]
mod tests {
	use super::*;

	fn query(tx: &Sender<SearchCommand>, latest: &AtomicU64, id: u64, text: &str) {
		latest.store(id, Ordering::Release);
		tx.send(SearchCommand::Query {
			id,
			query: text.to_string(),
		})
		.unwrap();
	}

	#[test]
	fn shutdown_command_stops_worker() {
		let (tx, rx, latest) = spawn(Catalog::default(), Duration::ZERO);
		assert_eq!(latest.load(Ordering::Relaxed), 0);
		tx.send(SearchCommand::Shutdown).unwrap();
		assert!(rx.recv_timeout(Duration::from_secs(1)).is_err());
	}

	#[test]
	fn zero_latency_answers_immediately() {
		let (tx, rx, latest) = spawn(Catalog::default(), Duration::ZERO);
		query(&tx, &latest, 1, "an");

		let result = rx.recv_timeout(Duration::from_secs(1)).expect("result");
		assert_eq!(result.id, 1);
		assert_eq!(result.query, "an");
		assert_eq!(result.matches, vec![2, 3, 8]);
	}

	#[test]
	fn results_wait_for_latency() {
		let latency = Duration::from_millis(80);
		let (tx, rx, latest) = spawn(Catalog::default(), latency);
		let started = Instant::now();
		query(&tx, &latest, 1, "King");

		let result = rx.recv_timeout(Duration::from_secs(2)).expect("result");
		assert!(started.elapsed() >= latency);
		assert_eq!(result.matches, vec![4]);
	}

	#[test]
	fn superseded_queries_are_dropped() {
		let (tx, rx, latest) = spawn(Catalog::default(), Duration::from_millis(60));
		query(&tx, &latest, 1, "V");
		query(&tx, &latest, 2, "Ve");

		let result = rx.recv_timeout(Duration::from_secs(2)).expect("result");
		assert_eq!(result.id, 2);
		assert_eq!(result.matches, vec![3]);
		assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
	}
}
