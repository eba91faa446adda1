use anyhow::{Context, Result, anyhow, bail, ensure};
use include_dir::{Dir, File};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::ui::style::theme::types::{Theme, ThemeRegistration};

pub(super) struct BuiltinThemes {
	pub(super) registrations: Vec<ThemeRegistration>,
	pub(super) default_theme: Theme,
	pub(super) default_name: String,
}

/// One `themes/*.toml` document.
#[derive(Debug, Deserialize)]
struct ThemeFile {
	name: String,
	#[serde(default)]
	aliases: Vec<String>,
	#[serde(default)]
	default: bool,
	styles: ThemeStyles,
}

#[derive(Debug, Deserialize)]
struct ThemeStyles {
	border: StyleSpec,
	text: StyleSpec,
	placeholder: StyleSpec,
	focused: StyleSpec,
	muted: StyleSpec,
	clear: StyleSpec,
	alert: StyleSpec,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StyleSpec {
	fg: Option<String>,
	bg: Option<String>,
	modifiers: Vec<String>,
}

impl ThemeStyles {
	fn build(&self) -> Result<Theme> {
		let style = |name: &str, spec: &StyleSpec| {
			spec.build().with_context(|| format!("in style `{name}`"))
		};
		Ok(Theme {
			border: style("border", &self.border)?,
			text: style("text", &self.text)?,
			placeholder: style("placeholder", &self.placeholder)?,
			focused: style("focused", &self.focused)?,
			muted: style("muted", &self.muted)?,
			clear: style("clear", &self.clear)?,
			alert: style("alert", &self.alert)?,
		})
	}
}

impl StyleSpec {
	fn build(&self) -> Result<Style> {
		let mut style = Style::new();
		if let Some(fg) = &self.fg {
			style = style.fg(parse_color(fg).with_context(|| format!("bad fg `{fg}`"))?);
		}
		if let Some(bg) = &self.bg {
			style = style.bg(parse_color(bg).with_context(|| format!("bad bg `{bg}`"))?);
		}
		self.modifiers.iter().try_fold(style, |style, name| {
			Ok(style.add_modifier(parse_modifier(name)?))
		})
	}
}

/// Parse every embedded theme. Files are visited in path order so that the
/// fallback default is stable.
pub(super) fn load_builtin_themes(dir: &Dir) -> Result<BuiltinThemes> {
	let mut files: Vec<&File> = dir.files().collect();
	files.sort_by(|a, b| a.path().cmp(b.path()));

	let mut registrations = Vec::with_capacity(files.len());
	let mut default_name: Option<String> = None;

	for file in files {
		let theme_file = parse_theme_file(file)?;
		if theme_file.default {
			if let Some(existing) = &default_name {
				bail!(
					"`{existing}` and `{}` are both marked as the default theme",
					theme_file.name
				);
			}
			default_name = Some(theme_file.name.clone());
		}

		let theme = theme_file
			.styles
			.build()
			.with_context(|| format!("theme `{}`", theme_file.name))?;
		let registration = theme_file
			.aliases
			.iter()
			.map(|alias| alias.trim())
			.filter(|alias| !alias.is_empty())
			.fold(ThemeRegistration::new(theme_file.name, theme), |registration, alias| {
				registration.alias(alias)
			});
		registrations.push(registration);
	}

	let default = match &default_name {
		Some(name) => registrations.iter().find(|registration| &registration.name == name),
		None => registrations.first(),
	}
	.ok_or_else(|| anyhow!("no built-in themes are embedded"))?;

	Ok(BuiltinThemes {
		default_theme: default.theme,
		default_name: default.name.clone(),
		registrations,
	})
}

fn parse_theme_file(file: &File) -> Result<ThemeFile> {
	let path = file.path().display();
	let contents = file
		.contents_utf8()
		.with_context(|| format!("{path} is not UTF-8"))?;
	toml::from_str(contents).with_context(|| format!("failed to parse {path}"))
}

const NAMED_COLOURS: [(&str, Color); 20] = [
	("reset", Color::Reset),
	("default", Color::Reset),
	("black", Color::Black),
	("red", Color::Red),
	("green", Color::Green),
	("yellow", Color::Yellow),
	("blue", Color::Blue),
	("magenta", Color::Magenta),
	("cyan", Color::Cyan),
	("gray", Color::Gray),
	("grey", Color::Gray),
	("dark_gray", Color::DarkGray),
	("dark_grey", Color::DarkGray),
	("light_red", Color::LightRed),
	("light_green", Color::LightGreen),
	("light_yellow", Color::LightYellow),
	("light_blue", Color::LightBlue),
	("light_magenta", Color::LightMagenta),
	("light_cyan", Color::LightCyan),
	("white", Color::White),
];

const MODIFIERS: [(&[&str], Modifier); 9] = [
	(&["bold"], Modifier::BOLD),
	(&["dim"], Modifier::DIM),
	(&["italic"], Modifier::ITALIC),
	(&["underline", "underlined"], Modifier::UNDERLINED),
	(&["slow_blink"], Modifier::SLOW_BLINK),
	(&["rapid_blink", "fast_blink"], Modifier::RAPID_BLINK),
	(&["reversed", "reverse"], Modifier::REVERSED),
	(&["hidden"], Modifier::HIDDEN),
	(&["crossed_out", "strikethrough"], Modifier::CROSSED_OUT),
];

/// Accepts colour names, `#rgb`, `#rrggbb`, `rgb(r, g, b)`, `ansi(n)` and
/// bare palette indices.
fn parse_color(input: &str) -> Result<Color> {
	let value = input.trim();

	if let Some(hex) = value.strip_prefix('#') {
		return parse_hex(hex);
	}
	if let Some(args) = call_args(value, "rgb") {
		let parts: Vec<&str> = args.split(',').map(str::trim).collect();
		let [r, g, b] = parts.as_slice() else {
			bail!("rgb() takes three components, got {}", parts.len());
		};
		return Ok(Color::Rgb(channel(r)?, channel(g)?, channel(b)?));
	}
	if let Some(index) = call_args(value, "ansi") {
		return Ok(Color::Indexed(channel(index.trim())?));
	}
	if let Ok(index) = value.parse::<u8>() {
		return Ok(Color::Indexed(index));
	}

	let key = normalise_key(value);
	NAMED_COLOURS
		.iter()
		.find(|(name, _)| *name == key)
		.map(|(_, color)| *color)
		.ok_or_else(|| anyhow!("unknown colour `{value}`"))
}

fn parse_hex(hex: &str) -> Result<Color> {
	ensure!(
		matches!(hex.len(), 3 | 6) && hex.chars().all(|ch| ch.is_ascii_hexdigit()),
		"`#{hex}` is not a 3 or 6 digit hex colour"
	);
	let packed = u32::from_str_radix(hex, 16)?;
	let [r, g, b] = if hex.len() == 3 {
		// Each nibble doubles: #abc == #aabbcc.
		[(packed >> 8) & 0xf, (packed >> 4) & 0xf, packed & 0xf].map(|nibble| nibble * 0x11)
	} else {
		[(packed >> 16) & 0xff, (packed >> 8) & 0xff, packed & 0xff]
	};
	Ok(Color::Rgb(r as u8, g as u8, b as u8))
}

/// `name(args)` -> `args`.
fn call_args<'a>(value: &'a str, name: &str) -> Option<&'a str> {
	value
		.strip_prefix(name)?
		.strip_prefix('(')?
		.strip_suffix(')')
}

fn channel(value: &str) -> Result<u8> {
	value
		.parse()
		.with_context(|| format!("`{value}` is not in 0..=255"))
}

fn parse_modifier(input: &str) -> Result<Modifier> {
	let key = normalise_key(input);
	MODIFIERS
		.iter()
		.find(|(names, _)| names.contains(&key.as_str()))
		.map(|(_, modifier)| *modifier)
		.ok_or_else(|| anyhow!("unknown modifier `{input}`"))
}

fn normalise_key(value: &str) -> String {
	value
		.trim()
		.to_ascii_lowercase()
		.replace(['-', ' '], "_")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn colours_accept_every_notation() {
		assert_eq!(parse_color("#008080").unwrap(), Color::Rgb(0, 128, 128));
		assert_eq!(parse_color("#999").unwrap(), Color::Rgb(153, 153, 153));
		assert_eq!(
			parse_color("rgb(1, 2, 3)").unwrap(),
			Color::Rgb(1, 2, 3)
		);
		assert_eq!(parse_color("ansi(236)").unwrap(), Color::Indexed(236));
		assert_eq!(parse_color("42").unwrap(), Color::Indexed(42));
		assert_eq!(parse_color("Dark-Grey").unwrap(), Color::DarkGray);
	}

	#[test]
	fn malformed_colours_are_rejected() {
		assert!(parse_color("#12").is_err());
		assert!(parse_color("#12345g").is_err());
		assert!(parse_color("rgb(1, 2)").is_err());
		assert!(parse_color("rgb(1, 2, 300)").is_err());
		assert!(parse_color("chartreuse").is_err());
	}

	#[test]
	fn modifiers_are_normalised() {
		assert_eq!(parse_modifier("Crossed-Out").unwrap(), Modifier::CROSSED_OUT);
		assert_eq!(parse_modifier("underline").unwrap(), Modifier::UNDERLINED);
		assert!(parse_modifier("sparkle").is_err());
	}

	#[test]
	fn embedded_themes_load_with_a_single_default() {
		let themes = super::super::builtin_themes();
		assert_eq!(themes.default_name, "teal");
		assert_eq!(themes.registrations.len(), 3);
	}
}
