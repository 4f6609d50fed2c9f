//! Hover repulsion targets.
//!
//! When a word is hovered it grows, and every other word is pushed directly
//! away from it. The push decays with distance:
//!
//! ```text
//! move = max_move * (1 - min(d / max_distance, 1)) ^ curve_exponent
//! ```
//!
//! Directions and distances are taken from resting positions, so the targets
//! are the same however far an interrupted animation had progressed.

use super::config::HoverConfig;
use super::tween::Pose;

/// Resting data the repulsion needs for one word.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RestingWord<'a> {
	/// Resting center.
	pub x: f64,
	/// Resting center.
	pub y: f64,
	/// Category, compared against the hovered word.
	pub category: &'a str,
	/// Opacity this word rests at under the current filter.
	pub opacity: f64,
	/// Whether the word passes the current filter.
	pub active: bool,
}

impl RestingWord<'_> {
	/// Pose at rest: in place, unscaled.
	pub fn rest_pose(&self) -> Pose {
		Pose::new(self.x, self.y, 1.0, self.opacity)
	}
}

/// Displacement magnitude for a word `distance` away from the hovered one.
pub fn move_amount(distance: f64, config: &HoverConfig) -> f64 {
	if config.max_distance <= 0.0 {
		return 0.0;
	}
	let t = (distance / config.max_distance).min(1.0);
	config.max_move * (1.0 - t).max(0.0).powf(config.curve_exponent)
}

/// Unit vector from `(fx, fy)` toward `(tx, ty)`.
///
/// Coincident points get a golden-angle direction derived from `index`, so
/// stacked words still part.
fn direction(fx: f64, fy: f64, tx: f64, ty: f64, index: usize) -> (f64, f64) {
	let (dx, dy) = (tx - fx, ty - fy);
	let len = dx.hypot(dy);
	if len > 1e-6 {
		(dx / len, dy / len)
	} else {
		let angle = ((index as f64) * 0.618_034 + 0.37) * std::f64::consts::TAU;
		(angle.cos(), angle.sin())
	}
}

/// Opacity factor applied to a non-hovered word's resting opacity.
pub fn dim_factor(same_category: bool, distance: f64, config: &HoverConfig) -> f64 {
	if same_category {
		return config.same_category_opacity;
	}
	let t = if config.max_distance > 0.0 {
		(distance / config.max_distance).min(1.0)
	} else {
		1.0
	};
	(config.other_category_floor + config.other_category_range * t)
		.clamp(config.other_category_floor, 1.0)
}

/// Target pose of every word while `hovered` is under the pointer.
pub fn hover_targets(words: &[RestingWord<'_>], hovered: usize, config: &HoverConfig) -> Vec<Pose> {
	let Some(center) = words.get(hovered) else {
		return words.iter().map(RestingWord::rest_pose).collect();
	};

	words
		.iter()
		.enumerate()
		.map(|(i, word)| {
			if i == hovered {
				return Pose::new(word.x, word.y, config.scale, 1.0);
			}
			let distance = (word.x - center.x).hypot(word.y - center.y);
			let (ux, uy) = direction(center.x, center.y, word.x, word.y, i);
			let push = move_amount(distance, config);
			let opacity = if word.active {
				word.opacity * dim_factor(word.category == center.category, distance, config)
			} else {
				word.opacity
			};
			Pose::new(word.x + ux * push, word.y + uy * push, 1.0, opacity)
		})
		.collect()
}

/// Target pose of every word once the pointer leaves.
pub fn rest_targets(words: &[RestingWord<'_>]) -> Vec<Pose> {
	words.iter().map(RestingWord::rest_pose).collect()
}
