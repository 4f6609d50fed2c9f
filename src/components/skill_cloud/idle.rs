//! Idle "breathing" motion.
//!
//! While nothing else is going on, a handful of words drift by a pixel or so
//! and come back. Each nudge is an out-and-back tween whose end pose is the
//! resting pose itself, so repeated rounds cannot accumulate drift.

use rand::Rng;
use rand::seq::index;

use super::config::IdleConfig;
use super::tween::{Easing, Pose, Tween};

/// Counts down to the next nudge round.
#[derive(Clone, Debug, PartialEq)]
pub struct IdleClock {
	until_next: f64,
}

impl IdleClock {
	/// Clock that first fires after one interval.
	pub fn new(config: &IdleConfig) -> Self {
		Self {
			until_next: config.interval,
		}
	}

	/// Restarts the countdown, e.g. after a hover ends.
	pub fn reset(&mut self, config: &IdleConfig) {
		self.until_next = config.interval;
	}

	/// Advances the clock; `true` when a round is due.
	pub fn tick(&mut self, dt: f64, config: &IdleConfig) -> bool {
		self.until_next -= dt;
		if self.until_next <= 0.0 {
			self.until_next += config.interval.max(0.1);
			if self.until_next <= 0.0 {
				self.until_next = config.interval.max(0.1);
			}
			return true;
		}
		false
	}
}

/// How many words one round nudges out of `total` placed words.
pub fn nudge_count(total: usize, config: &IdleConfig) -> usize {
	if total == 0 {
		return 0;
	}
	let by_fraction = ((total as f64) * config.fraction).round() as usize;
	by_fraction.max(1).min(config.max_words)
}

/// A single nudge: which word and by how much.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Nudge {
	/// Word index.
	pub word: usize,
	/// Horizontal offset at the far end.
	pub dx: f64,
	/// Vertical offset at the far end.
	pub dy: f64,
}

impl Nudge {
	/// Out-and-back tween from `rest`.
	pub fn tween(&self, rest: Pose, config: &IdleConfig) -> Tween {
		let to = Pose {
			x: rest.x + self.dx,
			y: rest.y + self.dy,
			..rest
		};
		Tween::new(rest, to, config.duration, Easing::InOut).yoyo()
	}
}

/// Picks the words for one round among `candidates` (word indices at rest).
///
/// `total` is the number of placed words and sets the round size.
pub fn pick_nudges(
	candidates: &[usize],
	total: usize,
	rng: &mut impl Rng,
	config: &IdleConfig,
) -> Vec<Nudge> {
	let amount = nudge_count(total, config).min(candidates.len());
	if amount == 0 {
		return Vec::new();
	}
	let amplitude = config.amplitude.abs();
	index::sample(rng, candidates.len(), amount)
		.into_iter()
		.map(|i| Nudge {
			word: candidates[i],
			dx: rng.random_range(-amplitude..=amplitude),
			dy: rng.random_range(-amplitude..=amplitude),
		})
		.collect()
}
