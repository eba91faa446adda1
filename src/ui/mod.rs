//! Interactive terminal UI for the search box.
//!
//! The [`builder`] module exposes the public-facing [`Typeahead`] builder. The
//! remaining submodules implement the event loop, rendering, state, input
//! handling and the styling definitions of the widget.

mod actions;
mod builder;
pub mod components;
mod config;
pub mod focus;
pub mod input;
mod render;
mod runtime;
mod search;
mod state;
pub mod style;


pub use builder::Typeahead;
pub use config::{
	DEFAULT_LOADING_LABEL, DEFAULT_PLACEHOLDER, DEFAULT_WIDTH, SelectAction, UiLabels,
};
pub use runtime::run;
pub use state::App;
