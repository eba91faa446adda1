use super::builtins;
use super::types::{Theme, ThemeRegistration};

/// Look up a built-in theme by name or alias, ignoring case and `-`/`_`
/// differences.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	find(name).map(|registration| registration.theme)
}

/// Resolve a name or alias to the canonical theme name.
#[must_use]
pub fn canonical_name(name: &str) -> Option<&'static str> {
	find(name).map(|registration| registration.name.as_str())
}

/// Return the canonical names of every built-in theme, sorted.
#[must_use]
pub fn names() -> Vec<String> {
	let mut names: Vec<String> = builtins::registrations()
		.iter()
		.map(|registration| registration.name.clone())
		.collect();
	names.sort_unstable_by_key(|name| name.to_ascii_lowercase());
	names
}

fn find(name: &str) -> Option<&'static ThemeRegistration> {
	let wanted = normalize_name(name);
	let registrations = builtins::registrations();

	registrations
		.iter()
		.find(|registration| normalize_name(&registration.name) == wanted)
		.or_else(|| {
			registrations.iter().find(|registration| {
				registration
					.aliases
					.iter()
					.any(|alias| normalize_name(alias) == wanted)
			})
		})
}

fn normalize_name(name: &str) -> String {
	name.trim()
		.chars()
		.map(|ch| match ch {
			'_' => '-',
			other => other.to_ascii_lowercase(),
		})
		.collect()
}
