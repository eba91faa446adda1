use ratatui::style::{Color, Style};

/// A theme containing styles for the search box and its dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Style for the input and dropdown borders.
	pub border: Style,
	/// Style for typed text and unfocused results.
	pub text: Style,
	/// Style for the placeholder of the empty input.
	pub placeholder: Style,
	/// Style for the focused dropdown row.
	pub focused: Style,
	/// Style for secondary text such as the loading row and key hints.
	pub muted: Style,
	/// Style for the clear affordance.
	pub clear: Style,
	/// Style for the selection dialog.
	pub alert: Style,
}

impl Theme {
	/// Border style with a guaranteed foreground colour.
	#[must_use]
	pub fn border_style(&self) -> Style {
		Style::new().fg(self.border.fg.unwrap_or(Color::Reset))
	}
}

/// Describes a theme instance that can be registered with the UI.
#[derive(Debug, Clone)]
pub struct ThemeRegistration {
	/// The name of the theme.
	pub name: String,
	/// The theme configuration.
	pub theme: Theme,
	/// Alternate names for the theme.
	pub aliases: Vec<String>,
}

impl ThemeRegistration {
	pub fn new(name: impl Into<String>, theme: Theme) -> Self {
		Self {
			name: name.into(),
			theme,
			aliases: Vec::new(),
		}
	}

	/// Adds a single alias to this theme registration.
	pub fn alias(mut self, alias: impl Into<String>) -> Self {
		self.aliases.push(alias.into());
		self
	}
}
