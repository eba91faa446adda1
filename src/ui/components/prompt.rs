use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::symbols::border;
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::input::QueryInput;
use crate::ui::style::Theme;

/// Glyph of the clear affordance.
pub const CLEAR_SYMBOL: &str = "✕";

/// Border used while the dropdown hangs off the bottom of the input.
const ATTACHED_BORDER: border::Set = border::Set {
	bottom_left: "├",
	bottom_right: "┤",
	..border::ROUNDED
};

/// Inputs required to render the query field.
pub struct PromptContext<'a, 'b> {
	pub input: &'a QueryInput<'b>,
	pub theme: &'a Theme,
	/// Whether the dropdown is drawn directly below the input.
	pub attached: bool,
}

/// Render the bordered input and, for a non-empty query, the clear
/// affordance. Returns the clickable area of the affordance.
pub fn render_prompt(frame: &mut Frame, area: Rect, ctx: PromptContext<'_, '_>) -> Option<Rect> {
	let border_set = if ctx.attached {
		ATTACHED_BORDER
	} else {
		border::ROUNDED
	};
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(border_set)
		.border_style(ctx.theme.border_style());
	let inner = block.inner(area);
	frame.render_widget(block, area);

	if inner.width == 0 || inner.height == 0 {
		return None;
	}

	if ctx.input.is_empty() || inner.width < 3 {
		frame.render_widget(ctx.input.widget(), inner);
		return None;
	}

	let [text_area, clear_area] =
		Layout::horizontal([Constraint::Fill(1), Constraint::Length(2)]).areas(inner);
	frame.render_widget(ctx.input.widget(), text_area);

	let clear = Paragraph::new(Span::styled(format!(" {CLEAR_SYMBOL}"), ctx.theme.clear));
	frame.render_widget(clear, clear_area);
	Some(clear_area)
}
