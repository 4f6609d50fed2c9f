//! Visual theming for the skill cloud.
//!
//! Skills carry a semantic color token ("blue", "orange", ...) rather than a
//! concrete color; the theme resolves tokens to colors at render time.

use std::str::FromStr;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha in `0.0..=1.0`.
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with alpha `a`.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same color with alpha `a`.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Linear interpolation between two colors
	pub fn lerp(self, other: Color, t: f64) -> Self {
		let t = t.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 * (1.0 - t) + other.r as f64 * t).round() as u8,
			g: (self.g as f64 * (1.0 - t) + other.g as f64 * t).round() as u8,
			b: (self.b as f64 * (1.0 - t) + other.b as f64 * t).round() as u8,
			a: self.a * (1.0 - t) + other.a * t,
		}
	}

	/// CSS `rgba(...)` string.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, self.a)
		}
	}

	/// Parses `#rrggbb`. Anything else yields `None`.
	pub fn from_hex(hex: &str) -> Option<Self> {
		let digits = hex.strip_prefix('#')?;
		if digits.len() != 6 {
			return None;
		}
		let channel = |range: std::ops::Range<usize>| u8::from_str_radix(digits.get(range)?, 16).ok();
		Some(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
	}
}

/// Closed set of semantic color tokens skills may reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorToken {
	/// Also sky and indigo.
	Blue,
	/// Cyan.
	Cyan,
	/// Also emerald.
	Teal,
	/// Also lime.
	Green,
	/// Also amber.
	Yellow,
	/// Orange.
	Orange,
	/// Also rose.
	Red,
	/// Also fuchsia.
	Pink,
	/// Also violet.
	Purple,
	/// Also gray, zinc and neutral.
	Slate,
	/// A literal `#rrggbb` color.
	Hex(String),
	/// Anything unrecognised; rendered with the theme's fallback color.
	Unknown(String),
}

impl FromStr for ColorToken {
	type Err = std::convert::Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let token = s.trim().to_ascii_lowercase();
		let token = token
			.trim_start_matches("text-")
			.split('-')
			.next()
			.unwrap_or_default()
			.to_string();
		Ok(match token.as_str() {
			"blue" | "sky" | "indigo" => ColorToken::Blue,
			"cyan" => ColorToken::Cyan,
			"teal" | "emerald" => ColorToken::Teal,
			"green" | "lime" => ColorToken::Green,
			"yellow" | "amber" => ColorToken::Yellow,
			"orange" => ColorToken::Orange,
			"red" | "rose" => ColorToken::Red,
			"pink" | "fuchsia" => ColorToken::Pink,
			"purple" | "violet" => ColorToken::Purple,
			"slate" | "gray" | "grey" | "zinc" | "neutral" => ColorToken::Slate,
			_ if s.trim().starts_with('#') => ColorToken::Hex(s.trim().to_string()),
			_ => ColorToken::Unknown(s.to_string()),
		})
	}
}

/// Token colors for one theme.
#[derive(Clone, Debug)]
pub struct TokenPalette {
	blue: Color,
	cyan: Color,
	teal: Color,
	green: Color,
	yellow: Color,
	orange: Color,
	red: Color,
	pink: Color,
	purple: Color,
	slate: Color,
	fallback: Color,
}

impl TokenPalette {
	/// Muted tones that read well on a dark background (default)
	pub fn dusk() -> Self {
		Self {
			blue: Color::rgb(96, 165, 250),
			cyan: Color::rgb(103, 232, 249),
			teal: Color::rgb(45, 212, 191),
			green: Color::rgb(134, 239, 172),
			yellow: Color::rgb(253, 224, 71),
			orange: Color::rgb(251, 146, 60),
			red: Color::rgb(248, 113, 113),
			pink: Color::rgb(244, 114, 182),
			purple: Color::rgb(192, 132, 252),
			slate: Color::rgb(148, 163, 184),
			fallback: Color::rgb(203, 213, 225),
		}
	}

	/// Deeper tones for light backgrounds
	pub fn daylight() -> Self {
		Self {
			blue: Color::rgb(37, 99, 235),
			cyan: Color::rgb(8, 145, 178),
			teal: Color::rgb(13, 148, 136),
			green: Color::rgb(22, 163, 74),
			yellow: Color::rgb(202, 138, 4),
			orange: Color::rgb(234, 88, 12),
			red: Color::rgb(220, 38, 38),
			pink: Color::rgb(219, 39, 119),
			purple: Color::rgb(147, 51, 234),
			slate: Color::rgb(71, 85, 105),
			fallback: Color::rgb(51, 65, 85),
		}
	}

	/// Color for `token` in this palette.
	pub fn resolve(&self, token: &ColorToken) -> Color {
		match token {
			ColorToken::Blue => self.blue,
			ColorToken::Cyan => self.cyan,
			ColorToken::Teal => self.teal,
			ColorToken::Green => self.green,
			ColorToken::Yellow => self.yellow,
			ColorToken::Orange => self.orange,
			ColorToken::Red => self.red,
			ColorToken::Pink => self.pink,
			ColorToken::Purple => self.purple,
			ColorToken::Slate => self.slate,
			ColorToken::Hex(hex) => Color::from_hex(hex).unwrap_or(self.fallback),
			ColorToken::Unknown(_) => self.fallback,
		}
	}

	/// Resolves a raw token string.
	pub fn resolve_str(&self, token: &str) -> Color {
		match token.parse::<ColorToken>() {
			Ok(token) => self.resolve(&token),
			Err(never) => match never {},
		}
	}
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	/// Name used for `data-theme`.
	pub name: &'static str,
	/// Canvas fill behind everything.
	pub background: Color,
	/// Color of the loading/empty placeholder text.
	pub placeholder: Color,
	/// Stroke color of category guide lines.
	pub guide: Color,
	/// Word colors by token.
	pub palette: TokenPalette,
}

impl Theme {
	/// Dark theme (default)
	pub fn dusk() -> Self {
		Self {
			name: "dusk",
			background: Color::rgb(15, 23, 42),
			placeholder: Color::rgba(148, 163, 184, 0.8),
			guide: Color::rgb(148, 163, 184),
			palette: TokenPalette::dusk(),
		}
	}

	/// Light theme
	pub fn daylight() -> Self {
		Self {
			name: "daylight",
			background: Color::rgb(248, 250, 252),
			placeholder: Color::rgba(71, 85, 105, 0.8),
			guide: Color::rgb(100, 116, 139),
			palette: TokenPalette::daylight(),
		}
	}

	/// Looks up a theme by name, falling back to the default.
	pub fn named(name: &str) -> Self {
		match name {
			"daylight" | "light" => Self::daylight(),
			_ => Self::dusk(),
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::dusk()
	}
}
