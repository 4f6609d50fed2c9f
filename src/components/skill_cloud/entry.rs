//! Staged entry animation.
//!
//! Words fly out from the canvas center in four waves by size. Within a wave
//! each word is offset by a small stagger so the wave doesn't move in
//! lockstep; the bigger the tier, the earlier it starts and the more it
//! overshoots before settling.

use super::config::EntryConfig;
use super::tween::{Easing, Pose, Tween};

/// Size tier, largest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
	/// Headline words.
	Largest,
	/// Second tier.
	Large,
	/// Third tier.
	Medium,
	/// Everything below the medium threshold.
	Small,
}

impl Tier {
	const ORDER: [Tier; 4] = [Tier::Largest, Tier::Large, Tier::Medium, Tier::Small];

	/// Position in [`EntryConfig::tiers`](super::config::EntryConfig::tiers).
	pub fn index(self) -> usize {
		self as usize
	}

	/// First tier whose threshold `size` reaches.
	pub fn for_size(size: f64, config: &EntryConfig) -> Tier {
		Self::ORDER
			.into_iter()
			.find(|tier| size >= config.tiers[tier.index()].min_size)
			.unwrap_or(Tier::Small)
	}
}

/// Entry tween for one word.
#[derive(Clone, Debug, PartialEq)]
pub struct EntryPlan {
	/// Index into the word list.
	pub word: usize,
	/// Size tier the word entered with.
	pub tier: Tier,
	/// Tween from the hidden pose to rest.
	pub tween: Tween,
}

/// Builds entry tweens for the given resting poses.
///
/// `rest` pairs a word index with its size and resting pose; only placed
/// words should be passed. Within a tier words keep the order given.
pub fn schedule_entry(rest: &[(usize, f64, Pose)], config: &EntryConfig) -> Vec<EntryPlan> {
	let mut position_in_tier = [0usize; 4];
	rest.iter()
		.map(|&(word, size, pose)| {
			let tier = Tier::for_size(size, config);
			let timing = &config.tiers[tier.index()];
			let slot = position_in_tier[tier.index()];
			position_in_tier[tier.index()] += 1;

			let stagger = (slot as f64 * timing.stagger).min(config.stagger_window);
			let from = Pose::new(0.0, 0.0, config.start_scale, 0.0);
			let tween = Tween::new(from, pose, timing.duration, Easing::BackOut(timing.overshoot))
				.with_delay(timing.base_delay + stagger);
			EntryPlan { word, tier, tween }
		})
		.collect()
}

/// Time at which the last entry tween settles.
pub fn total_duration(plans: &[EntryPlan]) -> f64 {
	plans
		.iter()
		.map(|p| p.tween.delay + p.tween.duration)
		.fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn rest(sizes: &[f64]) -> Vec<(usize, f64, Pose)> {
		sizes
			.iter()
			.enumerate()
			.map(|(i, &s)| (i, s, Pose::new(i as f64 * 10.0, 0.0, 1.0, 0.9)))
			.collect()
	}

	#[test]
	fn tiers_follow_thresholds() {
		let config = EntryConfig::default();
		assert_eq!(Tier::for_size(62.0, &config), Tier::Largest);
		assert_eq!(Tier::for_size(46.0, &config), Tier::Largest);
		assert_eq!(Tier::for_size(40.0, &config), Tier::Large);
		assert_eq!(Tier::for_size(25.0, &config), Tier::Medium);
		assert_eq!(Tier::for_size(14.0, &config), Tier::Small);
	}

	#[test]
	fn larger_tiers_start_first_and_bounce_more() {
		let config = EntryConfig::default();
		let plans = schedule_entry(&rest(&[14.0, 62.0, 30.0, 40.0]), &config);
		let by_word = |i: usize| plans.iter().find(|p| p.word == i).unwrap();

		assert!(by_word(1).tween.delay < by_word(3).tween.delay);
		assert!(by_word(3).tween.delay < by_word(2).tween.delay);
		assert!(by_word(2).tween.delay < by_word(0).tween.delay);

		let overshoot = |p: &EntryPlan| match p.tween.easing {
			Easing::BackOut(s) => s,
			_ => 0.0,
		};
		assert!(overshoot(by_word(1)) > overshoot(by_word(0)));
	}

	#[test]
	fn words_start_at_center_and_end_at_rest() {
		let config = EntryConfig::default();
		let input = rest(&[50.0, 20.0]);
		let plans = schedule_entry(&input, &config);
		for (plan, (_, _, pose)) in plans.iter().zip(&input) {
			assert_eq!((plan.tween.from.x, plan.tween.from.y), (0.0, 0.0));
			assert_eq!(plan.tween.from.opacity, 0.0);
			assert_eq!(plan.tween.end(), *pose);
		}
	}

	#[test]
	fn stagger_is_capped_and_total_stays_short() {
		let config = EntryConfig::default();
		let sizes: Vec<f64> = (0..200).map(|i| 14.0 + (i % 49) as f64).collect();
		let plans = schedule_entry(&rest(&sizes), &config);
		assert!(total_duration(&plans) <= 0.9);

		let small: Vec<f64> = plans
			.iter()
			.filter(|p| p.tier == Tier::Small)
			.map(|p| p.tween.delay)
			.collect();
		assert!(small.windows(2).all(|w| w[0] <= w[1]));
		assert!(small[1] > small[0]);
	}

	#[test]
	fn empty_input_schedules_nothing() {
		let plans = schedule_entry(&[], &EntryConfig::default());
		assert!(plans.is_empty());
		assert_eq!(total_duration(&plans), 0.0);
	}
}
