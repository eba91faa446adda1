//! Single-line text input backed by `tui-textarea`.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

/// The query field of the search box.
///
/// Wraps a [`TextArea`] restricted to one line: newline-producing keys are
/// swallowed so Enter stays free for submitting the focused result.
#[derive(Debug, Clone)]
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> QueryInput<'a> {
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![initial.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	/// Current query text.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea.lines().first().map_or("", String::as_str)
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.text().is_empty()
	}

	/// Feed a key press to the editor. Returns `true` if the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if is_line_break(&key) {
			return false;
		}
		let before = self.text().to_string();
		self.textarea.input(key);
		self.text() != before
	}

	/// Replace the whole query. Returns `true` if the text changed.
	pub fn set_text(&mut self, text: impl Into<String>) -> bool {
		let text = text.into();
		if text == self.text() {
			return false;
		}
		self.textarea = rebuild_with(&self.textarea, text);
		true
	}

	/// Empty the query. Returns `true` if there was anything to remove.
	pub fn clear(&mut self) -> bool {
		self.set_text(String::new())
	}

	pub fn set_placeholder(&mut self, placeholder: impl Into<String>, style: Style) {
		self.textarea.set_placeholder_text(placeholder);
		self.textarea.set_placeholder_style(style);
	}

	pub fn set_style(&mut self, style: Style) {
		self.textarea.set_style(style);
	}

	/// Borrow the editor for rendering.
	#[must_use]
	pub fn widget(&self) -> &TextArea<'a> {
		&self.textarea
	}
}

impl Default for QueryInput<'_> {
	fn default() -> Self {
		Self::new(String::new())
	}
}

fn is_line_break(key: &KeyEvent) -> bool {
	match key.code {
		KeyCode::Enter => true,
		KeyCode::Char('m') | KeyCode::Char('j') => key.modifiers.contains(KeyModifiers::CONTROL),
		_ => false,
	}
}

/// Build a fresh editor holding `text` while keeping the visual settings of
/// `previous`.
fn rebuild_with<'a>(previous: &TextArea<'a>, text: String) -> TextArea<'a> {
	let mut textarea = TextArea::new(vec![text]);
	textarea.set_style(previous.style());
	textarea.set_cursor_line_style(previous.cursor_line_style());
	textarea.set_placeholder_text(previous.placeholder_text());
	textarea.set_placeholder_style(previous.placeholder_style().unwrap_or_default());
	textarea.move_cursor(CursorMove::End);
	textarea
}

#[cfg(test)]
mod tests {
	use super::*;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_appends_to_the_query() {
		let mut input = QueryInput::default();
		assert!(input.input(key(KeyCode::Char('V'))));
		assert!(input.input(key(KeyCode::Char('e'))));
		assert_eq!(input.text(), "Ve");
	}

	#[test]
	fn initial_text_places_cursor_at_end() {
		let mut input = QueryInput::new("Hu");
		input.input(key(KeyCode::Char('d')));
		assert_eq!(input.text(), "Hud");
	}

	#[test]
	fn backspace_reports_change_only_when_text_shrinks() {
		let mut input = QueryInput::new("a");
		assert!(input.input(key(KeyCode::Backspace)));
		assert!(input.is_empty());
		assert!(!input.input(key(KeyCode::Backspace)));
	}

	#[test]
	fn enter_never_inserts_a_newline() {
		let mut input = QueryInput::new("Vlad");
		assert!(!input.input(key(KeyCode::Enter)));
		assert!(!input.input(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::CONTROL)));
		assert_eq!(input.text(), "Vlad");
	}

	#[test]
	fn clear_empties_and_keeps_placeholder() {
		let mut input = QueryInput::new("Kitty");
		input.set_placeholder("Search something", Style::default());
		assert!(input.clear());
		assert!(input.is_empty());
		assert_eq!(input.widget().placeholder_text(), "Search something");
		assert!(!input.clear());
	}
}
