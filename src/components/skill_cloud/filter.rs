//! Category filter styling.
//!
//! Filtering only restyles: inactive words fade and lose pointer
//! interaction, but keep their position.

use super::config::FilterConfig;
use super::theme::Color;
use super::word::CloudWord;

/// How a word should look under the current filter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WordStyle {
	/// Passes the current filter.
	pub active: bool,
	/// Resting opacity after the filter multiplier.
	pub opacity: f64,
	/// How far the word's color is blended toward the background.
	pub color_mix: f64,
	/// Whether hover and click reach this word.
	pub interactive: bool,
}

impl WordStyle {
	/// Final fill color for a word of `base` color.
	pub fn color(&self, base: Color, background: Color) -> Color {
		base.lerp(background, self.color_mix)
	}
}

/// Whether `category` passes `active_category`.
pub fn is_active(category: &str, active_category: Option<&str>) -> bool {
	active_category.is_none_or(|active| active == category)
}

/// Style of `word` with `active_category` selected.
pub fn style_for(word: &CloudWord, active_category: Option<&str>, config: &FilterConfig) -> WordStyle {
	if is_active(&word.category, active_category) {
		WordStyle {
			active: true,
			opacity: word.opacity,
			color_mix: 0.0,
			interactive: true,
		}
	} else {
		WordStyle {
			active: false,
			opacity: word.opacity * config.inactive_opacity,
			color_mix: config.inactive_desaturate,
			interactive: false,
		}
	}
}

/// Updates `is_active` on every word. Positions are untouched.
pub fn apply_filter(words: &mut [CloudWord], active_category: Option<&str>) {
	for word in words {
		word.is_active = is_active(&word.category, active_category);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::skill_cloud::metrics::FontWeight;
	use crate::components::skill_cloud::word::FontFamily;

	fn word(category: &str) -> CloudWord {
		CloudWord {
			id: category.into(),
			text: category.into(),
			category: category.into(),
			color_token: String::new(),
			count: 3,
			size: 20.0,
			weight: FontWeight::Medium,
			opacity: 0.8,
			is_active: true,
			x: 12.0,
			y: -7.0,
			rotate: 0.0,
			font_family: FontFamily::Sans,
			width: 40.0,
			height: 20.0,
			placed: true,
		}
	}

	#[test]
	fn no_filter_keeps_everything_active() {
		let style = style_for(&word("ai"), None, &FilterConfig::default());
		assert!(style.active && style.interactive);
		assert_eq!(style.opacity, 0.8);
	}

	#[test]
	fn other_categories_fade_and_disable() {
		let config = FilterConfig::default();
		let style = style_for(&word("ai"), Some("frontend"), &config);
		assert!(!style.active);
		assert!(!style.interactive);
		assert!((style.opacity - 0.8 * 0.15).abs() < 1e-9);
		let background = Color::rgb(0, 0, 0);
		assert_ne!(style.color(Color::rgb(200, 200, 200), background), Color::rgb(200, 200, 200));
	}

	#[test]
	fn filter_and_clear_preserve_positions() {
		let mut words = vec![word("ai"), word("backend")];
		let before: Vec<(f64, f64)> = words.iter().map(|w| (w.x, w.y)).collect();
		apply_filter(&mut words, Some("ai"));
		assert!(words[0].is_active && !words[1].is_active);
		apply_filter(&mut words, None);
		assert!(words.iter().all(|w| w.is_active));
		let after: Vec<(f64, f64)> = words.iter().map(|w| (w.x, w.y)).collect();
		assert_eq!(before, after);
	}
}
