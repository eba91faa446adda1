use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::Modifier;
use ratatui::symbols::border;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, HighlightSpacing, Paragraph, Table, TableState};
use throbber_widgets_tui::{Throbber, ThrobberState};

use super::rows::build_name_rows;
use crate::catalog::Catalog;
use crate::ui::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";

/// Everything the dropdown needs to draw one frame.
pub struct DropdownContext<'a> {
	pub catalog: &'a Catalog,
	pub results: &'a [usize],
	pub query: &'a str,
	pub loading: bool,
	pub loading_label: &'a str,
	pub focused: Option<usize>,
	pub theme: &'a Theme,
	pub throbber_state: &'a ThrobberState,
}

impl DropdownContext<'_> {
	/// Number of rows the dropdown wants, excluding its bottom border.
	#[must_use]
	pub fn row_count(&self) -> usize {
		if self.loading { 1 } else { self.results.len() }
	}
}

/// Render the dropdown below the input. Returns the area occupied by result
/// rows so mouse events can be mapped back to them.
pub fn render_dropdown(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	ctx: DropdownContext<'_>,
) -> Option<Rect> {
	let block = Block::default()
		.borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM)
		.border_set(border::ROUNDED)
		.border_style(ctx.theme.border_style());
	let inner = block.inner(area);
	frame.render_widget(block, area);

	if inner.width == 0 || inner.height == 0 {
		return None;
	}

	if ctx.loading {
		render_loading_row(frame, inner, &ctx);
		return None;
	}

	let match_style = ctx.theme.text.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
	let rows = build_name_rows(ctx.results, ctx.catalog, ctx.query, match_style);
	let table = Table::new(rows, [Constraint::Fill(1)])
		.style(ctx.theme.muted)
		.highlight_spacing(HighlightSpacing::Always)
		.row_highlight_style(ctx.theme.focused)
		.highlight_symbol(HIGHLIGHT_SYMBOL);

	table_state.select(ctx.focused);
	frame.render_stateful_widget(table, inner, table_state);
	Some(inner)
}

fn render_loading_row(frame: &mut Frame, area: Rect, ctx: &DropdownContext<'_>) {
	let spinner = Throbber::default()
		.style(ctx.theme.muted)
		.throbber_style(ctx.theme.muted);
	let line = Line::from(vec![
		Span::raw(" ".repeat(HIGHLIGHT_SYMBOL.chars().count())),
		spinner.to_symbol_span(ctx.throbber_state),
		Span::styled(ctx.loading_label.to_string(), ctx.theme.muted),
	]);
	frame.render_widget(Paragraph::new(line), area);
}
