use anyhow::{Context, Result};
use typeahead::SearchOutcome;

/// Render the outcome as plain text: one chosen name per line.
pub(crate) fn format_plain(outcome: &SearchOutcome) -> String {
	if !outcome.selections.is_empty() {
		return outcome.selections.join("\n");
	}

	if outcome.accepted {
		"No selection".to_string()
	} else {
		format!("Search cancelled (query: '{}')", outcome.query)
	}
}

/// Print a plain-text representation of the search outcome.
pub(crate) fn print_plain(outcome: &SearchOutcome) {
	println!("{}", format_plain(outcome));
}

/// Format the search outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SearchOutcome) -> Result<String> {
	serde_json::to_string_pretty(outcome).context("failed to serialise the search outcome")
}

/// Print the JSON representation of the search outcome.
pub(crate) fn print_json(outcome: &SearchOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn plain_lists_each_selection() {
		let outcome = SearchOutcome::cancelled(
			"",
			vec!["Vlad Reid".to_string(), "Libbie Bennett".to_string()],
		);
		insta::assert_snapshot!(format_plain(&outcome), @r"
		Vlad Reid
		Libbie Bennett
		");
	}

	#[test]
	fn plain_reports_cancelled_query() {
		let outcome = SearchOutcome::cancelled("Hu", Vec::new());
		insta::assert_snapshot!(format_plain(&outcome), @"Search cancelled (query: 'Hu')");
	}

	#[test]
	fn json_carries_query_and_selections() {
		let outcome = SearchOutcome::accepted("King", vec!["Huda King".to_string()]);
		let json = format_outcome_json(&outcome).expect("json");
		insta::assert_snapshot!(json, @r#"
		{
		  "accepted": true,
		  "selections": [
		    "Huda King"
		  ],
		  "query": "King"
		}
		"#);
	}
}
