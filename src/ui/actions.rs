use anyhow::Result;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::App;
use super::components::point_in_rect;
use crate::search::SearchOutcome;

impl<'a> App<'a> {
	/// Process a keyboard event and return a result if the session ends.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<SearchOutcome>> {
		if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
			return Ok(Some(self.cancelled_outcome()));
		}

		// The dialog is modal: it swallows everything until dismissed.
		if self.alert.is_some() {
			if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
				self.dismiss_alert();
			}
			return Ok(None);
		}

		match key.code {
			KeyCode::Esc => {
				if self.search_input.is_empty() {
					return Ok(Some(self.cancelled_outcome()));
				}
				self.clear_query();
			}
			KeyCode::Enter => return Ok(self.select_focused()),
			KeyCode::Down | KeyCode::Tab => self.move_focus_next(),
			KeyCode::Up | KeyCode::BackTab => self.move_focus_prev(),
			KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				self.show_logs = !self.show_logs;
			}
			_ => {
				if self.search_input.input(key) {
					self.query_changed();
				}
			}
		}
		Ok(None)
	}

	/// Process a mouse event and return a result if the session ends.
	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<SearchOutcome> {
		if self.alert.is_some() {
			if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
				self.dismiss_alert();
			}
			return None;
		}

		match mouse.kind {
			MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
				if let Some(index) = self.row_at(mouse.column, mouse.row) {
					self.focus.set(index, self.results.len());
				}
				None
			}
			MouseEventKind::Down(MouseButton::Left) => {
				if self.clear_contains(mouse.column, mouse.row) {
					self.clear_query();
					return None;
				}
				let index = self.row_at(mouse.column, mouse.row)?;
				self.focus.set(index, self.results.len());
				self.select_focused()
			}
			MouseEventKind::ScrollDown if self.rows_contain(mouse.column, mouse.row) => {
				self.move_focus_next();
				None
			}
			MouseEventKind::ScrollUp if self.rows_contain(mouse.column, mouse.row) => {
				self.move_focus_prev();
				None
			}
			_ => None,
		}
	}

	fn move_focus_next(&mut self) {
		if self.is_loading() {
			return;
		}
		self.focus.next(self.results.len());
		log::debug!("focus -> {}", self.focus.index());
	}

	fn move_focus_prev(&mut self) {
		if self.is_loading() {
			return;
		}
		self.focus.prev(self.results.len());
		log::debug!("focus -> {}", self.focus.index());
	}

	fn clear_contains(&self, column: u16, row: u16) -> bool {
		self.hit_areas
			.clear
			.is_some_and(|area| point_in_rect(column, row, area))
	}

	fn rows_contain(&self, column: u16, row: u16) -> bool {
		self.hit_areas
			.rows
			.is_some_and(|area| point_in_rect(column, row, area))
	}

	/// Map a screen position to the result drawn there.
	fn row_at(&self, column: u16, row: u16) -> Option<usize> {
		if self.is_loading() || !self.rows_contain(column, row) {
			return None;
		}
		let area = self.hit_areas.rows?;
		let index = self.table_state.offset() + usize::from(row - area.y);
		(index < self.results.len()).then_some(index)
	}
}
