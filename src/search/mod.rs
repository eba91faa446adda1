//! Background filtering with simulated latency.
//!
//! The UI never filters on its own thread. Each keystroke becomes a
//! [`SearchCommand::Query`] answered by the worker after a fixed delay, which
//! is what drives the loading state of the dropdown.

mod commands;
mod outcome;
mod worker;

pub use commands::{SearchCommand, SearchResult};
pub use outcome::SearchOutcome;
pub use worker::spawn;

/// Delay applied before a filter result is delivered, in milliseconds.
pub const DEFAULT_LATENCY_MS: u64 = 400;
