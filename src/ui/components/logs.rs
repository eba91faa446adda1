use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

use crate::ui::style::Theme;

/// Render the captured runtime log.
pub fn render_logs(frame: &mut Frame, area: Rect, theme: &Theme) {
	let block = Block::default()
		.borders(Borders::TOP)
		.border_style(theme.border_style())
		.title(" Log ");
	let widget = TuiLoggerWidget::default()
		.block(block)
		.style(theme.muted)
		.output_level(Some(TuiLoggerLevelOutput::Abbreviated))
		.output_target(false)
		.output_file(false)
		.output_line(false);
	frame.render_widget(widget, area);
}
