use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::ui::style::Theme;

const DISMISS_HINT: &str = "Enter / Esc to dismiss";

/// Draw the selection dialog centred over `area`.
pub fn render_alert(frame: &mut Frame, area: Rect, title: &str, message: &str, theme: &Theme) {
	let text_width = message.width().max(DISMISS_HINT.width());
	let width = u16::try_from(text_width)
		.unwrap_or(u16::MAX)
		.saturating_add(6)
		.min(area.width);
	let popup = centered(area, width, 5);
	if popup.width == 0 || popup.height == 0 {
		return;
	}

	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.title(Span::styled(format!(" {title} "), theme.alert))
		.style(theme.alert);
	let text = vec![
		Line::from(message.to_string()),
		Line::default(),
		Line::from(Span::styled(DISMISS_HINT, theme.muted)),
	];

	frame.render_widget(Clear, popup);
	frame.render_widget(
		Paragraph::new(text)
			.block(block)
			.alignment(Alignment::Center)
			.wrap(Wrap { trim: true }),
		popup,
	);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
	let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
		.flex(Flex::Center)
		.areas(area);
	let [popup] = Layout::horizontal([Constraint::Length(width)])
		.flex(Flex::Center)
		.areas(row);
	popup
}
