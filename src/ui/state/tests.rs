use std::time::{Duration, Instant};

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::*;

fn key(code: KeyCode) -> KeyEvent {
	KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(ch: char) -> KeyEvent {
	KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

fn app() -> App<'static> {
	App::new(Catalog::default(), Duration::ZERO)
}

fn press(app: &mut App<'_>, code: KeyCode) -> Option<SearchOutcome> {
	app.handle_key(key(code)).expect("key handling")
}

fn type_text(app: &mut App<'_>, text: &str) {
	for ch in text.chars() {
		assert!(press(app, KeyCode::Char(ch)).is_none());
	}
}

fn wait_for_results(app: &mut App<'_>) {
	let deadline = Instant::now() + Duration::from_secs(2);
	while app.is_loading() && Instant::now() < deadline {
		std::thread::sleep(Duration::from_millis(5));
		app.pump_search_results();
	}
	app.pump_search_results();
}

fn search(app: &mut App<'_>, text: &str) {
	type_text(app, text);
	wait_for_results(app);
}

#[test]
fn typing_shows_loading_until_results_arrive() {
	let mut app = app();
	type_text(&mut app, "an");
	assert!(app.is_loading());
	assert!(app.dropdown_visible());

	wait_for_results(&mut app);
	assert!(!app.is_loading());
	assert_eq!(
		app.result_names(),
		vec!["Rayan Hunt", "Veronica Sullivan", "Brandon-Lee Thompson"]
	);
	assert!(app.dropdown_visible());
}

#[test]
fn matching_is_case_sensitive() {
	let mut app = app();
	search(&mut app, "H");
	assert_eq!(
		app.result_names(),
		vec!["Rayan Hunt", "Huda King", "Humphrey Needham"]
	);

	app.clear_query();
	search(&mut app, "h");
	assert_eq!(
		app.result_names(),
		vec!["Humphrey Needham", "Brandon-Lee Thompson"]
	);
}

#[test]
fn query_without_matches_hides_dropdown() {
	let mut app = app();
	search(&mut app, "zzz");
	assert!(app.result_names().is_empty());
	assert!(!app.dropdown_visible());
}

#[test]
fn clearing_resets_results_and_focus() {
	let mut app = app();
	search(&mut app, "an");
	press(&mut app, KeyCode::Down);
	assert_eq!(app.focus_index(), 1);

	assert!(press(&mut app, KeyCode::Esc).is_none());
	assert_eq!(app.query(), "");
	assert!(app.result_names().is_empty());
	assert_eq!(app.focus_index(), 0);
	assert!(!app.is_loading());
	assert!(!app.dropdown_visible());
}

#[test]
fn deleting_the_last_character_behaves_like_clear() {
	let mut app = app();
	search(&mut app, "K");
	press(&mut app, KeyCode::Backspace);
	assert_eq!(app.query(), "");
	assert!(app.result_names().is_empty());
	assert!(!app.is_loading());
}

#[test]
fn clearing_abandons_the_search_in_flight() {
	let mut app = App::new(Catalog::default(), Duration::from_millis(40));
	type_text(&mut app, "V");
	assert!(app.is_loading());
	app.clear_query();
	assert!(!app.is_loading());

	std::thread::sleep(Duration::from_millis(120));
	app.pump_search_results();
	assert!(app.result_names().is_empty());
}

#[test]
fn only_the_latest_query_is_applied() {
	let mut app = App::new(Catalog::default(), Duration::from_millis(30));
	type_text(&mut app, "V");
	type_text(&mut app, "e");
	wait_for_results(&mut app);
	assert_eq!(app.query(), "Ve");
	assert_eq!(app.result_names(), vec!["Veronica Sullivan"]);
}

#[test]
fn down_and_tab_advance_focus_circularly() {
	let mut app = app();
	search(&mut app, "an");
	assert_eq!(app.focus_index(), 0);

	press(&mut app, KeyCode::Down);
	assert_eq!(app.focus_index(), 1);
	press(&mut app, KeyCode::Tab);
	assert_eq!(app.focus_index(), 2);
	press(&mut app, KeyCode::Down);
	assert_eq!(app.focus_index(), 0);
	assert_eq!(app.query(), "an", "focus keys must not edit the query");
}

#[test]
fn up_and_back_tab_retreat_focus_circularly() {
	let mut app = app();
	search(&mut app, "an");

	press(&mut app, KeyCode::Up);
	assert_eq!(app.focus_index(), 2);
	assert_eq!(app.focused_name(), Some("Brandon-Lee Thompson"));
	press(&mut app, KeyCode::BackTab);
	assert_eq!(app.focus_index(), 1);
}

#[test]
fn narrowing_results_clamps_focus() {
	let mut app = app();
	search(&mut app, "a");
	assert_eq!(app.result_names().len(), 9);
	press(&mut app, KeyCode::Up);
	assert_eq!(app.focus_index(), 8);

	search(&mut app, "n");
	assert_eq!(app.query(), "an");
	assert_eq!(app.focus_index(), 2);
	assert_eq!(app.focused_name(), Some("Brandon-Lee Thompson"));
}

#[test]
fn enter_raises_alert_and_resets_input() {
	let mut app = app();
	search(&mut app, "an");
	press(&mut app, KeyCode::Down);

	assert!(press(&mut app, KeyCode::Enter).is_none());
	assert_eq!(app.alert(), Some("Veronica Sullivan"));
	assert_eq!(app.selections(), ["Veronica Sullivan".to_string()]);
	assert_eq!(app.query(), "");
	assert!(app.result_names().is_empty());
	assert_eq!(app.focus_index(), 0);
	assert!(!app.dropdown_visible());
}

#[test]
fn alert_is_modal_until_dismissed() {
	let mut app = app();
	search(&mut app, "Vlad");
	press(&mut app, KeyCode::Enter);
	assert_eq!(app.alert(), Some("Vlad Reid"));

	press(&mut app, KeyCode::Char('x'));
	assert_eq!(app.query(), "", "typing is blocked while the alert is open");
	assert!(press(&mut app, KeyCode::Esc).is_none());
	assert_eq!(app.alert(), None);

	type_text(&mut app, "x");
	assert_eq!(app.query(), "x");
}

#[test]
fn enter_without_results_does_nothing() {
	let mut app = app();
	assert!(press(&mut app, KeyCode::Enter).is_none());
	assert_eq!(app.alert(), None);

	search(&mut app, "zzz");
	assert!(press(&mut app, KeyCode::Enter).is_none());
	assert_eq!(app.alert(), None);
	assert_eq!(app.query(), "zzz");
}

#[test]
fn enter_while_loading_does_nothing() {
	let mut app = App::new(Catalog::default(), Duration::from_secs(10));
	type_text(&mut app, "an");
	assert!(press(&mut app, KeyCode::Enter).is_none());
	assert_eq!(app.alert(), None);
	assert_eq!(app.query(), "an");
}

#[test]
fn enter_during_a_refined_search_ignores_previous_results() {
	let mut app = App::new(Catalog::default(), Duration::from_millis(150));
	search(&mut app, "an");
	assert_eq!(app.focused_name(), Some("Rayan Hunt"));

	type_text(&mut app, "x");
	assert!(app.is_loading());
	assert_eq!(app.focused_name(), None);

	assert!(press(&mut app, KeyCode::Enter).is_none());
	assert_eq!(app.alert(), None);
	assert!(app.selections().is_empty());
	assert_eq!(app.query(), "anx");
}

#[test]
fn focus_keys_are_ignored_while_loading() {
	let mut app = App::new(Catalog::default(), Duration::from_millis(150));
	search(&mut app, "an");
	type_text(&mut app, "d");
	assert!(app.is_loading());

	press(&mut app, KeyCode::Down);
	press(&mut app, KeyCode::Tab);
	press(&mut app, KeyCode::Up);
	assert_eq!(app.focus_index(), 0);
}

#[test]
fn exit_action_ends_session_with_selection() {
	let mut app = app();
	app.set_select_action(SelectAction::Exit);
	search(&mut app, "King");

	let outcome = press(&mut app, KeyCode::Enter).expect("outcome");
	assert!(outcome.accepted);
	assert_eq!(outcome.selections, vec!["Huda King"]);
	assert_eq!(outcome.last_selection(), Some("Huda King"));
	assert_eq!(outcome.query, "King");
}

#[test]
fn escape_on_empty_query_cancels_session() {
	let mut app = app();
	let outcome = press(&mut app, KeyCode::Esc).expect("outcome");
	assert!(!outcome.accepted);
	assert!(outcome.selections.is_empty());
}

#[test]
fn ctrl_c_cancels_with_previous_selections() {
	let mut app = app();
	search(&mut app, "Neal");
	press(&mut app, KeyCode::Enter);
	assert_eq!(app.alert(), Some("Abbigail Neal"));
	press(&mut app, KeyCode::Enter);
	assert_eq!(app.alert(), None);
	type_text(&mut app, "Li");

	let outcome = app.handle_key(ctrl('c')).unwrap().expect("outcome");
	assert!(!outcome.accepted);
	assert_eq!(outcome.query, "Li");
	assert_eq!(outcome.selections, vec!["Abbigail Neal"]);
}

#[test]
fn ctrl_l_toggles_log_pane() {
	let mut app = app();
	app.handle_key(ctrl('l')).unwrap();
	assert!(app.show_logs);
	app.handle_key(ctrl('l')).unwrap();
	assert!(!app.show_logs);
	assert_eq!(app.query(), "");
}

#[test]
fn set_query_issues_a_search() {
	let mut app = app();
	app.set_query("Kitty");
	assert!(app.is_loading());
	wait_for_results(&mut app);
	assert_eq!(app.result_names(), vec!["Kitty Carty"]);
}
