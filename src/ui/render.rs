use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Rect};

use super::App;
use super::components::{
	DropdownContext, PromptContext, render_alert, render_dropdown, render_hints, render_logs,
	render_prompt,
};
use super::state::HitAreas;

/// Height of the bordered input box.
const PROMPT_HEIGHT: u16 = 3;

impl App<'_> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let (main_area, log_area) = if self.show_logs {
			let [main, logs] =
				Layout::vertical([Constraint::Fill(2), Constraint::Fill(1)]).areas(area);
			(main, Some(logs))
		} else {
			(area, None)
		};

		let [body, footer] =
			Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(main_area);

		self.hit_areas = self.render_search_box(frame, body);
		render_hints(frame, footer, &self.theme);

		if let Some(log_area) = log_area {
			render_logs(frame, log_area, &self.theme);
		}

		if let Some(message) = self.alert.as_deref() {
			render_alert(frame, area, &self.ui.alert_title, message, &self.theme);
		}
	}

	fn render_search_box(&mut self, frame: &mut Frame, body: Rect) -> HitAreas {
		let (prompt_area, dropdown_space) = search_box_areas(body, self.width);
		if prompt_area.height == 0 {
			return HitAreas::default();
		}

		let show_dropdown = self.dropdown_visible() && dropdown_space.height > 0;
		let clear = render_prompt(
			frame,
			prompt_area,
			PromptContext {
				input: &self.search_input,
				theme: &self.theme,
				attached: show_dropdown,
			},
		);

		if !show_dropdown {
			return HitAreas { clear, rows: None };
		}

		let ctx = DropdownContext {
			catalog: &self.catalog,
			results: &self.results,
			query: self.search_input.text(),
			loading: self.search.is_in_flight(),
			loading_label: &self.ui.loading_label,
			focused: self.focus.focused(self.results.len()),
			theme: &self.theme,
			throbber_state: &self.throbber_state,
		};
		let wanted = u16::try_from(ctx.row_count())
			.unwrap_or(u16::MAX)
			.saturating_add(1);
		let dropdown_area = Rect {
			height: wanted.min(dropdown_space.height),
			..dropdown_space
		};
		let rows = render_dropdown(frame, dropdown_area, &mut self.table_state, ctx);
		HitAreas { clear, rows }
	}
}

/// Place the input box horizontally centred in `body`, a quarter of the way
/// down, and return it together with the space left below it.
pub(crate) fn search_box_areas(body: Rect, width: u16) -> (Rect, Rect) {
	let width = width.min(body.width);
	let [_, column, _] = Layout::horizontal([
		Constraint::Fill(1),
		Constraint::Length(width),
		Constraint::Fill(1),
	])
	.areas(body);

	let top_padding = (column.height / 4).min(column.height.saturating_sub(PROMPT_HEIGHT));
	let prompt = Rect {
		y: column.y + top_padding,
		height: PROMPT_HEIGHT.min(column.height),
		..column
	};
	let below = prompt.y + prompt.height;
	let dropdown = Rect {
		y: below,
		height: column.bottom().saturating_sub(below),
		..column
	};
	(prompt, dropdown)
}
