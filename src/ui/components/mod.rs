//! UI building blocks shared across rendering and state modules.

/// Modal dialog raised for a selection.
pub mod alert;
/// Suggestion list drawn below the input.
pub mod dropdown;
/// Key hint footer.
pub mod hints;
/// Runtime log pane.
pub mod logs;
/// Input box with the clear affordance.
pub mod prompt;
/// Dropdown row construction and match highlighting.
pub mod rows;

use ratatui::layout::Rect;

pub use alert::render_alert;
pub use dropdown::{DropdownContext, render_dropdown};
pub use hints::render_hints;
pub use logs::render_logs;
pub use prompt::{PromptContext, render_prompt};

/// Return `true` if the cell at `column`/`row` lies inside `area`.
#[must_use]
pub fn point_in_rect(column: u16, row: u16, area: Rect) -> bool {
	if area.width == 0 || area.height == 0 {
		return false;
	}
	let inside_x = column >= area.x && column < area.x.saturating_add(area.width);
	let inside_y = row >= area.y && row < area.y.saturating_add(area.height);
	inside_x && inside_y
}
