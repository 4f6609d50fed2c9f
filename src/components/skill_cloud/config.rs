//! Tunable parameters for every stage of the cloud pipeline.
//!
//! All values live in one struct-of-structs so the whole visual behaviour can
//! be tuned in one place. Every section derives `Deserialize` with
//! `#[serde(default)]`, so a host page may override any subset of fields with
//! a JSON blob:
//!
//! ```json
//! { "metrics": { "max_size": 56.0 }, "idle": { "interval": 4.0 } }
//! ```
//!
//! # Units
//!
//! - Lengths are CSS pixels in canvas-centered coordinates.
//! - Durations and delays are seconds.
//! - Opacities and factors are unitless in `[0, 1]` unless noted.

use serde::Deserialize;

/// How related-project counts map to size, weight and opacity.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct MetricsConfig {
	/// Font size of the least-used skill.
	pub min_size: f64,
	/// Font size of the most-used skill.
	pub max_size: f64,
	/// Power applied to the normalized count. Values above 1 exaggerate
	/// the most-used skills.
	pub exponent: f64,
	/// Opacity of the least-used skill.
	pub min_opacity: f64,
	/// Opacity of the most-used skill.
	pub max_opacity: f64,
}

impl Default for MetricsConfig {
	fn default() -> Self {
		Self {
			min_size: 14.0,
			max_size: 62.0,
			exponent: 1.4,
			min_opacity: 0.65,
			max_opacity: 1.0,
		}
	}
}

/// Spiral placement parameters.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SpiralConfig {
	/// Margin added on every side of a word's box for collision tests.
	pub padding: f64,
	/// Angular increment between spiral samples (radians).
	pub angle_step: f64,
	/// Radius gained per radian swept.
	pub growth: f64,
	/// Spiral search stops at `max_radius_factor * hypot(w, h) / 2`.
	pub max_radius_factor: f64,
	/// Side length of a collision grid cell.
	pub cell_size: f64,
	/// Line height as a multiple of font size.
	pub line_height: f64,
}

impl Default for SpiralConfig {
	fn default() -> Self {
		Self {
			padding: 6.0,
			angle_step: 0.1,
			growth: 1.0,
			max_radius_factor: 1.0,
			cell_size: 48.0,
			line_height: 1.0,
		}
	}
}

/// Timing for one entry tier.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct TierTiming {
	/// Words at or above this size belong to the tier.
	pub min_size: f64,
	/// Delay before the first word of the tier starts.
	pub base_delay: f64,
	/// Extra delay per word inside the tier.
	pub stagger: f64,
	/// Length of each word's entry tween in seconds.
	pub duration: f64,
	/// Back-out overshoot amount (0 = no bounce).
	pub overshoot: f64,
}

impl Default for TierTiming {
	fn default() -> Self {
		Self {
			min_size: 0.0,
			base_delay: 0.0,
			stagger: 0.01,
			duration: 0.35,
			overshoot: 1.0,
		}
	}
}

/// Entry animation: four tiers, largest first.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct EntryConfig {
	/// Timing per tier, largest first.
	pub tiers: [TierTiming; 4],
	/// Upper bound on the accumulated stagger inside one tier.
	pub stagger_window: f64,
	/// Scale words start from.
	pub start_scale: f64,
}

impl Default for EntryConfig {
	fn default() -> Self {
		Self {
			tiers: [
				TierTiming {
					min_size: 46.0,
					base_delay: 0.0,
					stagger: 0.04,
					duration: 0.5,
					overshoot: 1.7,
				},
				TierTiming {
					min_size: 32.0,
					base_delay: 0.12,
					stagger: 0.025,
					duration: 0.45,
					overshoot: 1.4,
				},
				TierTiming {
					min_size: 22.0,
					base_delay: 0.24,
					stagger: 0.015,
					duration: 0.4,
					overshoot: 1.2,
				},
				TierTiming {
					min_size: 0.0,
					base_delay: 0.34,
					stagger: 0.01,
					duration: 0.35,
					overshoot: 1.0,
				},
			],
			stagger_window: 0.2,
			start_scale: 0.05,
		}
	}
}

/// Hover repulsion parameters.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct HoverConfig {
	/// Scale of the hovered word.
	pub scale: f64,
	/// Largest displacement, applied to words touching the hovered one.
	pub max_move: f64,
	/// Distance beyond which words no longer move.
	pub max_distance: f64,
	/// Falloff exponent for the displacement curve.
	pub curve_exponent: f64,
	/// Opacity factor kept by words sharing the hovered word's category.
	pub same_category_opacity: f64,
	/// Opacity factor floor for words of other categories.
	pub other_category_floor: f64,
	/// Opacity factor gained by other-category words at `max_distance`.
	pub other_category_range: f64,
	/// Seconds for the hover pose to settle.
	pub enter_duration: f64,
	/// Seconds to return to rest after the pointer leaves.
	pub leave_duration: f64,
	/// Overshoot of the hovered word's enlarge tween.
	pub overshoot: f64,
}

impl Default for HoverConfig {
	fn default() -> Self {
		Self {
			scale: 1.3,
			max_move: 28.0,
			max_distance: 260.0,
			curve_exponent: 1.7,
			same_category_opacity: 0.8,
			other_category_floor: 0.4,
			other_category_range: 0.3,
			enter_duration: 0.35,
			leave_duration: 0.45,
			overshoot: 1.6,
		}
	}
}

/// Idle "breathing" motion.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct IdleConfig {
	/// Seconds between nudge rounds.
	pub interval: f64,
	/// Maximum words nudged per round.
	pub max_words: usize,
	/// Fraction of placed words nudged per round (before `max_words`).
	pub fraction: f64,
	/// Largest offset on each axis.
	pub amplitude: f64,
	/// Duration of one out-and-back nudge.
	pub duration: f64,
}

impl Default for IdleConfig {
	fn default() -> Self {
		Self {
			interval: 3.0,
			max_words: 3,
			fraction: 0.1,
			amplitude: 1.5,
			duration: 1.6,
		}
	}
}

/// Category filter styling.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct FilterConfig {
	/// Opacity multiplier for words outside the active category.
	pub inactive_opacity: f64,
	/// How far inactive words are blended toward the background color.
	pub inactive_desaturate: f64,
	/// Seconds for the fade in or out.
	pub transition: f64,
}

impl Default for FilterConfig {
	fn default() -> Self {
		Self {
			inactive_opacity: 0.15,
			inactive_desaturate: 0.7,
			transition: 0.3,
		}
	}
}

/// Category guide lines drawn between related words.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct GuideConfig {
	/// Draw guide lines at all.
	pub enabled: bool,
	/// Stroke alpha at rest.
	pub base_alpha: f64,
	/// Stroke alpha of a fully highlighted line.
	pub highlight_alpha: f64,
	/// Stroke alpha of a line dimmed by another category's highlight.
	pub dim_alpha: f64,
	/// Stroke width at rest.
	pub line_width: f64,
	/// Stroke width when highlighted.
	pub highlight_width: f64,
}

impl Default for GuideConfig {
	fn default() -> Self {
		Self {
			enabled: true,
			base_alpha: 0.08,
			highlight_alpha: 0.45,
			dim_alpha: 0.03,
			line_width: 1.0,
			highlight_width: 1.8,
		}
	}
}

/// Complete configuration for the skill cloud.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct CloudConfig {
	/// Size, weight and opacity derivation.
	pub metrics: MetricsConfig,
	/// Spiral packing.
	pub spiral: SpiralConfig,
	/// Entry animation.
	pub entry: EntryConfig,
	/// Hover repulsion.
	pub hover: HoverConfig,
	/// Idle motion.
	pub idle: IdleConfig,
	/// Category filter styling.
	pub filter: FilterConfig,
	/// Category guide lines.
	pub guides: GuideConfig,
	/// Quiet period after the last resize before re-layout.
	pub resize_debounce: f64,
	/// Seed for cosmetic randomness (font families, idle picks).
	pub seed: Option<u64>,
}

impl Default for CloudConfig {
	fn default() -> Self {
		Self {
			metrics: MetricsConfig::default(),
			spiral: SpiralConfig::default(),
			entry: EntryConfig::default(),
			hover: HoverConfig::default(),
			idle: IdleConfig::default(),
			filter: FilterConfig::default(),
			guides: GuideConfig::default(),
			resize_debounce: 0.2,
			seed: None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn partial_json_overrides_keep_defaults() {
		let config: CloudConfig =
			serde_json::from_str(r#"{ "metrics": { "max_size": 56.0 }, "idle": { "interval": 4.0 } }"#)
				.unwrap();
		assert_eq!(config.metrics.max_size, 56.0);
		assert_eq!(config.metrics.min_size, 14.0);
		assert_eq!(config.idle.interval, 4.0);
		assert_eq!(config.idle.max_words, 3);
		assert_eq!(config.spiral, SpiralConfig::default());
	}

	#[test]
	fn entry_tiers_finish_within_budget() {
		let entry = EntryConfig::default();
		for tier in &entry.tiers {
			let end = tier.base_delay + entry.stagger_window + tier.duration;
			assert!(end <= 0.9, "tier ends at {end}");
		}
		assert!(entry.tiers.windows(2).all(|w| w[0].min_size > w[1].min_size));
	}
}
