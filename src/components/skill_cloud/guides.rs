//! Category guide lines and their highlight transitions.
//!
//! Words of the same category are joined by faint lines forming a minimum
//! spanning tree over their resting positions. Hovering a word lights up its
//! category's lines and dims the rest.

use std::collections::{HashMap, HashSet};

/// A line between two words of the same category.
#[derive(Clone, Debug, PartialEq)]
pub struct GuideLink {
	/// Category both words share.
	pub category: String,
	/// Word indices.
	pub a: usize,
	/// Other end of the line.
	pub b: usize,
}

/// Builds one spanning tree per category over the given words.
///
/// `points` pairs a word index with its category and resting position;
/// unplaced words should be left out.
pub fn build_links(points: &[(usize, &str, f64, f64)]) -> Vec<GuideLink> {
	let mut by_category: Vec<(&str, Vec<(usize, f64, f64)>)> = Vec::new();
	for &(word, category, x, y) in points {
		match by_category.iter_mut().find(|(c, _)| *c == category) {
			Some((_, members)) => members.push((word, x, y)),
			None => by_category.push((category, vec![(word, x, y)])),
		}
	}

	let mut links = Vec::new();
	for (category, members) in by_category {
		// Prim's algorithm; categories are small so O(n^2) is fine.
		let n = members.len();
		if n < 2 {
			continue;
		}
		let dist = |i: usize, j: usize| {
			let (_, xi, yi) = members[i];
			let (_, xj, yj) = members[j];
			(xi - xj).hypot(yi - yj)
		};
		let mut in_tree = vec![false; n];
		let mut best: Vec<(f64, usize)> = (0..n).map(|j| (dist(0, j), 0)).collect();
		in_tree[0] = true;
		for _ in 1..n {
			let Some(next) = (0..n)
				.filter(|&j| !in_tree[j])
				.min_by(|&a, &b| best[a].0.total_cmp(&best[b].0).then(a.cmp(&b)))
			else {
				break;
			};
			in_tree[next] = true;
			links.push(GuideLink {
				category: category.to_string(),
				a: members[best[next].1].0,
				b: members[next].0,
			});
			for j in 0..n {
				if !in_tree[j] {
					let d = dist(next, j);
					if d < best[j].0 {
						best[j] = (d, next);
					}
				}
			}
		}
	}
	links
}

/// Minimum time (seconds) a highlight is held before it may fade out, so
/// sweeping the pointer across words doesn't flicker the lines.
const MIN_HOLD_TIME: f64 = 0.12;

/// Smoothed per-category highlight intensity.
///
/// Intensities approach their target with exponential smoothing:
/// `value += (target - value) * (1 - e^(-speed * dt))`.
#[derive(Clone, Debug, Default)]
pub struct GuideHighlight {
	target: Option<String>,
	intensity: HashMap<String, f64>,
	hold_timer: HashMap<String, f64>,
	cached_max: f64,
}

impl GuideHighlight {
	/// Sets the category whose lines should light up.
	pub fn set_target(&mut self, category: Option<&str>) {
		if self.target.as_deref() == category {
			return;
		}
		self.target = category.map(str::to_string);
		if let Some(c) = category {
			self.hold_timer.insert(c.to_string(), MIN_HOLD_TIME);
		}
	}

	/// Advances intensities by `dt` seconds.
	pub fn tick(&mut self, dt: f64) {
		const FADE_IN_SPEED: f64 = 6.0;
		const FADE_OUT_SPEED: f64 = 4.0;

		let fade_in_factor = 1.0 - (-FADE_IN_SPEED * dt).exp();
		let fade_out_decay = (-FADE_OUT_SPEED * dt).exp();

		if let Some(c) = &self.target {
			let value = self.intensity.entry(c.clone()).or_insert(0.0);
			*value += (1.0 - *value) * fade_in_factor;
		}

		let target = self.target.clone();
		self.hold_timer.retain(|c, timer| {
			if target.as_ref() == Some(c) {
				true
			} else {
				*timer -= dt;
				*timer > 0.0
			}
		});

		let mut new_max: f64 = 0.0;
		let holds: HashSet<String> = self.hold_timer.keys().cloned().collect();
		self.intensity.retain(|c, value| {
			if target.as_ref() != Some(c) && !holds.contains(c) {
				*value *= fade_out_decay;
			}
			new_max = new_max.max(*value);
			*value > 0.005
		});
		self.cached_max = new_max;
	}

	/// Current intensity of `category`, 0 when unlit.
	pub fn intensity(&self, category: &str) -> f64 {
		self.intensity.get(category).copied().unwrap_or(0.0)
	}

	/// Strongest intensity of any category; drives dimming of the others.
	pub fn max_intensity(&self) -> f64 {
		self.cached_max
	}

	/// Whether any intensity is still moving.
	pub fn is_settled(&self) -> bool {
		self.target.is_none() && self.intensity.is_empty()
	}
}
