mod builtins;
mod registry;
mod types;

pub use builtins::{default_theme, default_theme_name};
pub use registry::{by_name, canonical_name, names};
pub use types::{Theme, ThemeRegistration};

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}
