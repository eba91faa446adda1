use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ui::style::Theme;

const HINTS: [(&str, &str); 4] = [
	("↑↓/Tab", "move"),
	("Enter", "select"),
	("Esc", "clear/quit"),
	("Ctrl+L", "logs"),
];

/// Render the one-line key reference at the bottom of the screen.
pub fn render_hints(frame: &mut Frame, area: Rect, theme: &Theme) {
	let mut spans = Vec::with_capacity(HINTS.len() * 3);
	for (position, (keys, action)) in HINTS.iter().enumerate() {
		if position > 0 {
			spans.push(Span::styled("  ·  ", theme.muted));
		}
		spans.push(Span::styled(*keys, theme.text));
		spans.push(Span::styled(format!(" {action}"), theme.muted));
	}
	frame.render_widget(
		Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
		area,
	);
}
