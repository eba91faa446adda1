//! Core crate exports for building and running the `typeahead` search box.
//!
//! The root module re-exports the catalog, the search outcome and the UI
//! builder so that embedders can run the widget without digging through the
//! module hierarchy.

pub mod app_dirs;
pub mod catalog;
pub mod logging;
pub mod search;
pub mod ui;

pub use catalog::{Catalog, DEFAULT_NAMES};
pub use search::{DEFAULT_LATENCY_MS, SearchOutcome};
pub use ui::style::{Theme, default_theme};
pub use ui::{App, SelectAction, Typeahead, UiLabels, run};
