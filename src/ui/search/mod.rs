//! Search coordination between the UI and the background worker.
//!
//! [`SearchRuntime`] owns the channels and query sequencing; `coordination`
//! applies query edits and incoming results to the [`App`](super::App).

mod coordination;
mod runtime;

pub(crate) use runtime::SearchRuntime;
