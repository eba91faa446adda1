use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Row;

use crate::catalog::Catalog;

/// Split `name` around the first occurrence of `query`, styling the match.
#[must_use]
pub fn highlight_match<'a>(name: &'a str, query: &str, match_style: Style) -> Line<'a> {
	if query.is_empty() {
		return Line::from(name);
	}
	let Some(start) = name.find(query) else {
		return Line::from(name);
	};
	let end = start + query.len();
	Line::from(vec![
		Span::raw(&name[..start]),
		Span::styled(&name[start..end], match_style),
		Span::raw(&name[end..]),
	])
}

/// Build one table row per matching catalog entry.
#[must_use]
pub fn build_name_rows<'a>(
	results: &[usize],
	catalog: &'a Catalog,
	query: &str,
	match_style: Style,
) -> Vec<Row<'a>> {
	results
		.iter()
		.filter_map(|&index| catalog.get(index))
		.map(|name| Row::new([highlight_match(name, query, match_style)]))
		.collect()
}

#[cfg(test)]
mod tests {
	use ratatui::style::Modifier;

	use super::*;

	fn span_texts(line: &Line<'_>) -> Vec<String> {
		line.spans.iter().map(|span| span.content.to_string()).collect()
	}

	#[test]
	fn first_occurrence_is_highlighted() {
		let style = Style::new().add_modifier(Modifier::BOLD);
		let line = highlight_match("Brandon-Lee Thompson", "on", style);
		assert_eq!(span_texts(&line), vec!["Brand", "on", "-Lee Thompson"]);
		assert_eq!(line.spans[1].style, style);
	}

	#[test]
	fn missing_match_is_left_plain() {
		let line = highlight_match("Huda King", "x", Style::new());
		assert_eq!(span_texts(&line), vec!["Huda King"]);
	}

	#[test]
	fn rows_follow_result_order() {
		let catalog = Catalog::default();
		let rows = build_name_rows(&[2, 3, 8], &catalog, "an", Style::new());
		assert_eq!(rows.len(), 3);
	}
}
