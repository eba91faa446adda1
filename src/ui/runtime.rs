//! Terminal session and event loop.

use std::io::stdout;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::crossterm::execute;

use super::App;
use crate::catalog::Catalog;
use crate::logging;
use crate::search::{DEFAULT_LATENCY_MS, SearchOutcome};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Construct an [`App`] over `catalog` with default settings and run it to
/// completion.
pub fn run(catalog: Catalog) -> Result<SearchOutcome> {
	let mut app = App::new(catalog, Duration::from_millis(DEFAULT_LATENCY_MS));
	app.run()
}

/// Alternate screen with mouse capture; both are undone on drop, including
/// when the loop bails out with an error.
struct TerminalSession {
	terminal: DefaultTerminal,
}

impl TerminalSession {
	fn enter() -> Result<Self> {
		let session = Self {
			terminal: ratatui::init(),
		};
		execute!(stdout(), EnableMouseCapture).context("failed to enable mouse capture")?;
		Ok(session)
	}
}

impl Drop for TerminalSession {
	fn drop(&mut self) {
		let _ = execute!(stdout(), DisableMouseCapture);
		ratatui::restore();
	}
}

/// Background thread forwarding terminal events to the UI thread.
struct EventReader {
	running: Arc<AtomicBool>,
	handle: JoinHandle<Result<()>>,
}

impl EventReader {
	fn spawn() -> (Self, Receiver<Event>) {
		let (tx, rx) = mpsc::channel();
		let running = Arc::new(AtomicBool::new(true));
		let flag = Arc::clone(&running);

		let handle = thread::spawn(move || -> Result<()> {
			while flag.load(Ordering::Relaxed) {
				if event::poll(POLL_INTERVAL)? && tx.send(event::read()?).is_err() {
					break;
				}
			}
			Ok(())
		});

		(Self { running, handle }, rx)
	}

	fn stop(self) -> Result<()> {
		self.running.store(false, Ordering::Relaxed);
		match self.handle.join() {
			Ok(result) => result.context("terminal event reader failed"),
			Err(panic) => std::panic::resume_unwind(panic),
		}
	}
}

/// The loop's own error outranks a failure to stop the reader thread.
fn merge_shutdown(
	result: Result<SearchOutcome>,
	stopped: Result<()>,
) -> Result<SearchOutcome> {
	match (result, stopped) {
		(Ok(outcome), Ok(())) => Ok(outcome),
		(Err(err), Ok(())) | (Ok(_), Err(err)) => Err(err),
		(Err(err), Err(reader_err)) => {
			Err(err.context(format!("event reader also failed: {reader_err:#}")))
		}
	}
}

impl App<'_> {
	/// Take over the terminal until the user ends the session.
	pub fn run(&mut self) -> Result<SearchOutcome> {
		let mut session = TerminalSession::enter()?;
		session.terminal.clear()?;
		let (reader, events) = EventReader::spawn();
		log::info!(
			"search box ready with {} candidate(s)",
			self.catalog.len()
		);

		let result = self.event_loop(&mut session.terminal, &events);
		drop(session);
		merge_shutdown(result, reader.stop())
	}

	fn event_loop(
		&mut self,
		terminal: &mut DefaultTerminal,
		events: &Receiver<Event>,
	) -> Result<SearchOutcome> {
		loop {
			loop {
				let event = match events.try_recv() {
					Ok(event) => event,
					Err(TryRecvError::Empty) => break,
					Err(TryRecvError::Disconnected) => {
						return Err(anyhow!("input event channel disconnected"));
					}
				};
				if let Some(outcome) = self.handle_event(event)? {
					return Ok(outcome);
				}
			}

			self.pump_search_results();
			self.throbber_state.calc_next();
			logging::pump();

			terminal.draw(|frame| self.draw(frame))?;
			thread::sleep(FRAME_INTERVAL);
		}
	}

	fn handle_event(&mut self, event: Event) -> Result<Option<SearchOutcome>> {
		match event {
			Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
			Event::Mouse(mouse) => Ok(self.handle_mouse(mouse)),
			_ => Ok(None),
		}
	}
}
