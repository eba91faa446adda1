//! Visual styling utilities.
//!
//! Themes are the colour schemes applied to the search box. They ship as TOML
//! documents embedded in the binary and are parsed on first use.

pub mod theme;

pub use theme::{
	Theme, ThemeRegistration, by_name, canonical_name, default_theme, default_theme_name, names,
};
