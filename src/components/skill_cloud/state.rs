//! Cloud state and pipeline orchestration.
//!
//! `SkillCloudState` owns the words, their animated poses and every timer.
//! It is created once when the component mounts and then driven by the
//! animation loop through [`SkillCloudState::tick`] and by DOM events through
//! the hover/select/resize/filter methods. Nothing here touches the DOM, so
//! the whole pipeline runs in tests with an [`ApproxMeasure`].
//!
//! Pipeline order on every (re)layout: metric derivation (cached per dataset
//! version), word construction, filter flags, spiral packing, guide links,
//! entry animation.
//!
//! [`ApproxMeasure`]: super::layout::ApproxMeasure

use rand::SeedableRng;
use rand::rngs::StdRng;

use log::{debug, info};

use super::config::CloudConfig;
use super::entry::{schedule_entry, total_duration};
use super::filter::{WordStyle, apply_filter, style_for};
use super::guides::{GuideHighlight, GuideLink, build_links};
use super::idle::{IdleClock, pick_nudges};
use super::interaction::{RestingWord, hover_targets, rest_targets};
use super::layout::{CanvasSize, Rect, TextMeasure, pack_words};
use super::metrics::MetricsCache;
use super::tween::{Animated, Easing, Pose, TweenKind};
use super::types::CloudData;
use super::word::{CloudWord, build_words};

const DEFAULT_SEED: u64 = 0x5EED_C10D;

/// Where the cloud is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
	/// No layout yet: waiting for data or for the canvas to scroll into view.
	Loading,
	/// Laid out, but nothing could be placed (no skills, or no room).
	Empty,
	/// Entry animation running.
	Entering,
	/// Steady state; hover and idle motion are live.
	Ready,
}

/// A resize waiting for the debounce period to pass.
#[derive(Clone, Copy, Debug, PartialEq)]
struct PendingResize {
	size: CanvasSize,
	quiet_for: f64,
}

/// Complete cloud state.
pub struct SkillCloudState {
	data: CloudData,
	config: CloudConfig,
	cache: MetricsCache,
	rng: StdRng,
	words: Vec<CloudWord>,
	poses: Vec<Animated>,
	links: Vec<GuideLink>,
	/// Guide line highlight, driven by hover.
	pub guides: GuideHighlight,
	canvas: CanvasSize,
	pending_resize: Option<PendingResize>,
	active_category: Option<String>,
	hovered: Option<usize>,
	phase: Phase,
	visible: bool,
	idle: IdleClock,
	filter_transition: f64,
	layouts: usize,
}

impl SkillCloudState {
	/// Creates a cloud for a `width` by `height` canvas. Nothing is laid out
	/// until [`Self::set_visible`].
	pub fn new(data: CloudData, config: CloudConfig, width: f64, height: f64) -> Self {
		let rng = StdRng::seed_from_u64(config.seed.unwrap_or(DEFAULT_SEED));
		let idle = IdleClock::new(&config.idle);
		Self {
			data,
			config,
			cache: MetricsCache::default(),
			rng,
			words: Vec::new(),
			poses: Vec::new(),
			links: Vec::new(),
			guides: GuideHighlight::default(),
			canvas: CanvasSize::new(width, height),
			pending_resize: None,
			active_category: None,
			hovered: None,
			phase: Phase::Loading,
			visible: false,
			idle,
			filter_transition: 0.0,
			layouts: 0,
		}
	}

	/// Where the cloud is in its lifecycle.
	pub fn phase(&self) -> Phase {
		self.phase
	}

	/// Dataset currently shown.
	pub fn data(&self) -> &CloudData {
		&self.data
	}

	/// All words, placed or not, in skill order.
	pub fn words(&self) -> &[CloudWord] {
		&self.words
	}

	/// Current animated pose of word `index`.
	pub fn pose(&self, index: usize) -> Option<Pose> {
		self.poses.get(index).map(|a| a.current)
	}

	/// Guide lines for the current layout.
	pub fn links(&self) -> &[GuideLink] {
		&self.links
	}

	/// Canvas size the current layout was packed for.
	pub fn canvas(&self) -> CanvasSize {
		self.canvas
	}

	/// Active configuration.
	pub fn config(&self) -> &CloudConfig {
		&self.config
	}

	/// Index of the hovered word.
	pub fn hovered(&self) -> Option<usize> {
		self.hovered
	}

	/// Category currently filtered to, if any.
	pub fn active_category(&self) -> Option<&str> {
		self.active_category.as_deref()
	}

	fn seed(&self) -> u64 {
		self.config.seed.unwrap_or(DEFAULT_SEED)
	}

	/// Number of completed layout passes.
	pub fn layout_count(&self) -> usize {
		self.layouts
	}

	/// Number of metric derivations actually performed.
	pub fn metric_derivations(&self) -> usize {
		self.cache.misses()
	}

	/// How word `index` looks under the current filter.
	pub fn style(&self, index: usize) -> Option<WordStyle> {
		self.words
			.get(index)
			.map(|w| style_for(w, self.active_category.as_deref(), &self.config.filter))
	}

	fn rest_opacity(&self, index: usize) -> f64 {
		self.style(index).map_or(0.0, |s| s.opacity)
	}

	fn resting_words(&self) -> Vec<RestingWord<'_>> {
		self.words
			.iter()
			.enumerate()
			.map(|(i, w)| RestingWord {
				x: w.x,
				y: w.y,
				category: &w.category,
				opacity: self.rest_opacity(i),
				active: w.is_active,
			})
			.collect()
	}

	/// Resting pose of a word under the current filter.
	pub fn rest_pose(&self, index: usize) -> Option<Pose> {
		self.words
			.get(index)
			.map(|w| Pose::new(w.x, w.y, 1.0, self.rest_opacity(index)))
	}

	/// Replaces the dataset and lays out again if a layout was showing.
	pub fn set_data(&mut self, data: CloudData, measure: &impl TextMeasure) {
		self.data = data;
		if self.visible {
			self.relayout(measure);
		}
	}

	/// Marks the canvas as on screen. The first call triggers the layout.
	pub fn set_visible(&mut self, measure: &impl TextMeasure) {
		if self.visible {
			return;
		}
		self.visible = true;
		self.relayout(measure);
	}

	/// Runs the full pipeline for the current data and canvas.
	pub fn relayout(&mut self, measure: &impl TextMeasure) {
		let metrics = self.cache.get_or_derive(&self.data, &self.config.metrics);
		// Fresh per pass so the same data and size always pack the same way.
		let mut layout_rng = StdRng::seed_from_u64(self.seed() ^ self.data.version().0);
		let mut words = build_words(&self.data, &metrics, &mut layout_rng);
		apply_filter(&mut words, self.active_category.as_deref());
		let summary = pack_words(&mut words, self.canvas, measure, &self.config.spiral);
		if !summary.unplaced.is_empty() {
			debug!("skill-cloud: left out {:?}", summary.unplaced);
		}
		self.words = words;
		self.hovered = None;
		self.guides = GuideHighlight::default();
		self.idle.reset(&self.config.idle);
		self.filter_transition = 0.0;
		self.layouts += 1;

		let points: Vec<(usize, &str, f64, f64)> = self
			.words
			.iter()
			.enumerate()
			.filter(|(_, w)| w.placed)
			.map(|(i, w)| (i, w.category.as_str(), w.x, w.y))
			.collect();
		self.links = build_links(&points);

		let hidden = Pose::new(0.0, 0.0, self.config.entry.start_scale, 0.0);
		self.poses = vec![Animated::at(hidden); self.words.len()];
		let rest: Vec<(usize, f64, Pose)> = self
			.words
			.iter()
			.enumerate()
			.filter(|(_, w)| w.placed)
			.filter_map(|(i, w)| Some((i, w.size, self.rest_pose(i)?)))
			.collect();
		let plans = schedule_entry(&rest, &self.config.entry);
		if plans.is_empty() {
			self.phase = Phase::Empty;
			info!("skill-cloud: nothing to show");
			return;
		}
		info!(
			"skill-cloud: entry animation for {} words ({:.2}s)",
			plans.len(),
			total_duration(&plans)
		);
		for plan in plans {
			self.poses[plan.word].start(TweenKind::Entry, plan.tween);
		}
		self.phase = Phase::Entering;
	}

	/// Records a new canvas size. Layout waits until sizes stop changing.
	pub fn request_resize(&mut self, width: f64, height: f64) {
		let size = CanvasSize::new(width, height);
		if self.pending_resize.is_none() && size == self.canvas {
			return;
		}
		self.pending_resize = Some(PendingResize {
			size,
			quiet_for: self.config.resize_debounce,
		});
	}

	/// Advances all timers and animations by `dt` seconds.
	pub fn tick(&mut self, dt: f64, measure: &impl TextMeasure) {
		if let Some(pending) = self.pending_resize.as_mut() {
			pending.quiet_for -= dt;
			if pending.quiet_for <= 0.0 {
				let size = pending.size;
				self.pending_resize = None;
				self.apply_resize(size, measure);
			}
		}

		for pose in &mut self.poses {
			pose.tick(dt);
		}
		self.guides.tick(dt);
		self.filter_transition = (self.filter_transition - dt).max(0.0);

		if self.phase == Phase::Entering
			&& !self.poses.iter().any(|p| p.kind() == Some(TweenKind::Entry))
		{
			debug!("skill-cloud: entry animation finished");
			self.phase = Phase::Ready;
			self.idle.reset(&self.config.idle);
		}

		if self.idle_eligible() && self.idle.tick(dt, &self.config.idle) {
			self.start_idle_round();
		}
	}

	fn apply_resize(&mut self, size: CanvasSize, measure: &impl TextMeasure) {
		if size == self.canvas && self.layouts > 0 {
			return;
		}
		info!("skill-cloud: resized to {}x{}", size.width, size.height);
		self.canvas = size;
		if self.visible {
			self.relayout(measure);
		}
	}

	fn idle_eligible(&self) -> bool {
		self.phase == Phase::Ready
			&& self.hovered.is_none()
			&& self.filter_transition <= 0.0
			&& self
				.poses
				.iter()
				.all(|p| matches!(p.kind(), None | Some(TweenKind::Idle)))
	}

	fn start_idle_round(&mut self) {
		let total = self.words.iter().filter(|w| w.placed).count();
		let candidates: Vec<usize> = self
			.words
			.iter()
			.enumerate()
			.filter(|(i, w)| w.placed && w.is_active && !self.poses[*i].is_animating())
			.map(|(i, _)| i)
			.collect();
		let nudges = pick_nudges(&candidates, total, &mut self.rng, &self.config.idle);
		for nudge in nudges {
			let Some(rest) = self.rest_pose(nudge.word) else {
				continue;
			};
			self.poses[nudge.word].start(TweenKind::Idle, nudge.tween(rest, &self.config.idle));
		}
	}

	/// Whether a word can take pointer interaction right now.
	fn interactive(&self, index: usize) -> bool {
		self.words
			.get(index)
			.is_some_and(|w| w.placed && w.is_active)
	}

	/// Points the hover at `index`, or clears it with `None`.
	///
	/// Hover is only live once the entry animation has finished; inactive and
	/// unplaced words can't be hovered.
	pub fn set_hover(&mut self, index: Option<usize>) {
		if !matches!(self.phase, Phase::Ready) {
			return;
		}
		let index = index.filter(|&i| self.interactive(i));
		if index == self.hovered {
			return;
		}
		self.hovered = index;
		match index {
			Some(i) => self.apply_hover(i),
			None => self.release_hover(),
		}
	}

	fn apply_hover(&mut self, hovered: usize) {
		let hover = self.config.hover.clone();
		let targets = hover_targets(&self.resting_words(), hovered, &hover);
		for (i, target) in targets.into_iter().enumerate() {
			if !self.words[i].placed {
				continue;
			}
			let easing = if i == hovered {
				Easing::BackOut(hover.overshoot)
			} else {
				Easing::CubicOut
			};
			self.poses[i].animate_to(TweenKind::Hover, target, hover.enter_duration, easing);
		}
		let category = self.words[hovered].category.clone();
		self.guides.set_target(Some(&category));
	}

	fn release_hover(&mut self) {
		let duration = self.config.hover.leave_duration;
		let targets = rest_targets(&self.resting_words());
		for (i, target) in targets.into_iter().enumerate() {
			if self.words[i].placed {
				self.poses[i].animate_to(TweenKind::Rest, target, duration, Easing::CubicOut);
			}
		}
		self.guides.set_target(None);
		self.idle.reset(&self.config.idle);
	}

	/// Converts canvas pixel coordinates (top-left origin) to cloud
	/// coordinates (centered).
	pub fn screen_to_cloud(&self, px: f64, py: f64) -> (f64, f64) {
		(px - self.canvas.width / 2.0, py - self.canvas.height / 2.0)
	}

	/// Current on-screen box of a word.
	pub fn current_rect(&self, index: usize) -> Option<Rect> {
		let word = self.words.get(index)?;
		let pose = self.poses.get(index)?.current;
		Some(Rect::centered(
			pose.x,
			pose.y,
			word.width * pose.scale,
			word.height * pose.scale,
		))
	}

	/// Interactive word under canvas pixel `(px, py)`.
	///
	/// The hovered word wins; otherwise the smallest box under the pointer.
	pub fn word_at_position(&self, px: f64, py: f64) -> Option<usize> {
		let (x, y) = self.screen_to_cloud(px, py);
		let hit = |i: usize| {
			self.current_rect(i)
				.filter(|r| self.interactive(i) && r.contains_point(x, y))
		};
		if let Some(h) = self.hovered {
			if hit(h).is_some() {
				return Some(h);
			}
		}
		(0..self.words.len())
			.filter_map(|i| hit(i).map(|r| (i, r.area())))
			.min_by(|a, b| a.1.total_cmp(&b.1))
			.map(|(i, _)| i)
	}

	/// Updates the hover from a pointer position.
	pub fn hover_at(&mut self, px: f64, py: f64) {
		let index = self.word_at_position(px, py);
		self.set_hover(index);
	}

	/// Skill id under the pointer, for click handling.
	pub fn select_at(&self, px: f64, py: f64) -> Option<String> {
		if !matches!(self.phase, Phase::Ready | Phase::Entering) {
			return None;
		}
		self.word_at_position(px, py)
			.map(|i| self.words[i].id.clone())
	}

	/// Applies a category filter. Only opacity changes; positions stay put.
	pub fn set_active_category(&mut self, category: Option<String>) {
		if self.active_category == category {
			return;
		}
		debug!("skill-cloud: filter {:?}", category);
		self.active_category = category;
		apply_filter(&mut self.words, self.active_category.as_deref());
		if self.words.is_empty() {
			return;
		}
		let transition = self.config.filter.transition;
		self.filter_transition = transition;

		if let Some(h) = self.hovered {
			if self.interactive(h) {
				self.apply_hover(h);
				return;
			}
			self.hovered = None;
			self.guides.set_target(None);
		}

		for i in 0..self.words.len() {
			if !self.words[i].placed {
				continue;
			}
			let Some(rest) = self.rest_pose(i) else {
				continue;
			};
			let pose = &mut self.poses[i];
			if pose.kind() == Some(TweenKind::Entry) {
				pose.retarget_opacity(rest.opacity);
			} else {
				pose.animate_to(TweenKind::Filter, rest, transition, Easing::CubicOut);
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::skill_cloud::layout::ApproxMeasure;
	use crate::components::skill_cloud::metrics::FontWeight;
	use crate::components::skill_cloud::word::FontFamily;
	use crate::components::skill_cloud::types::{Project, Skill};

	fn sample_data() -> CloudData {
		let skills = [
			("rust", "backend"),
			("go", "backend"),
			("react", "frontend"),
			("css", "frontend"),
			("pytorch", "ai"),
			("llm", "ai"),
		];
		CloudData {
			skills: skills
				.iter()
				.map(|(id, cat)| Skill {
					id: id.to_string(),
					name: id.to_string(),
					category: cat.to_string(),
					color_token: "blue".into(),
				})
				.collect(),
			projects: vec![
				Project {
					skills: vec!["rust".into(), "react".into(), "llm".into()],
					..Default::default()
				},
				Project {
					skills: vec!["rust".into(), "go".into()],
					..Default::default()
				},
				Project {
					skills: vec!["rust".into(), "pytorch".into()],
					..Default::default()
				},
			],
		}
	}

	fn ready_state() -> SkillCloudState {
		let mut state = SkillCloudState::new(sample_data(), CloudConfig::default(), 800.0, 600.0);
		state.set_visible(&ApproxMeasure::default());
		run(&mut state, 1.0);
		assert_eq!(state.phase(), Phase::Ready);
		state
	}

	fn run(state: &mut SkillCloudState, seconds: f64) {
		let steps = (seconds * 60.0).ceil() as usize;
		for _ in 0..steps {
			state.tick(1.0 / 60.0, &ApproxMeasure::default());
		}
	}

	fn snapshot(state: &SkillCloudState) -> Vec<Pose> {
		(0..state.words().len()).filter_map(|i| state.pose(i)).collect()
	}

	fn screen_point(state: &SkillCloudState, index: usize) -> (f64, f64) {
		let word = &state.words()[index];
		(
			word.x + state.canvas().width / 2.0,
			word.y + state.canvas().height / 2.0,
		)
	}

	#[test]
	fn layout_waits_until_visible() {
		let mut state = SkillCloudState::new(sample_data(), CloudConfig::default(), 800.0, 600.0);
		run(&mut state, 0.5);
		assert_eq!(state.phase(), Phase::Loading);
		assert!(state.words().is_empty());

		state.set_visible(&ApproxMeasure::default());
		assert_eq!(state.phase(), Phase::Entering);
		assert_eq!(state.words().len(), 6);
	}

	#[test]
	fn entry_settles_at_rest() {
		let state = ready_state();
		for i in 0..state.words().len() {
			assert_eq!(state.pose(i), state.rest_pose(i));
		}
	}

	#[test]
	fn empty_dataset_shows_placeholder() {
		let mut state = SkillCloudState::new(CloudData::default(), CloudConfig::default(), 800.0, 600.0);
		state.set_visible(&ApproxMeasure::default());
		assert_eq!(state.phase(), Phase::Empty);
		assert!(state.words().is_empty());
		run(&mut state, 5.0);
		assert_eq!(state.phase(), Phase::Empty);
	}

	#[test]
	fn hover_then_leave_restores_rest() {
		let mut state = ready_state();
		let before = snapshot(&state);
		let (px, py) = screen_point(&state, 0);

		state.hover_at(px, py);
		assert_eq!(state.hovered(), Some(0));
		run(&mut state, 0.1);
		state.hover_at(-100.0, -100.0);
		assert_eq!(state.hovered(), None);
		run(&mut state, 1.0);
		assert_eq!(snapshot(&state), before);
	}

	#[test]
	fn hovered_word_grows_and_neighbours_move() {
		let mut state = ready_state();
		state.set_hover(Some(0));
		run(&mut state, 0.5);
		let hovered = state.pose(0).unwrap();
		assert!((hovered.scale - 1.3).abs() < 1e-9);
		assert_eq!(hovered.opacity, 1.0);
		let moved = (1..state.words().len()).any(|i| state.pose(i) != state.rest_pose(i));
		assert!(moved);
		assert!(state.guides.intensity("backend") > 0.5);
	}

	#[test]
	fn hover_is_ignored_during_entry() {
		let mut state = SkillCloudState::new(sample_data(), CloudConfig::default(), 800.0, 600.0);
		state.set_visible(&ApproxMeasure::default());
		state.set_hover(Some(0));
		assert_eq!(state.hovered(), None);
	}

	#[test]
	fn filter_dims_and_blocks_interaction() {
		let mut state = ready_state();
		let positions: Vec<(f64, f64)> = state.words().iter().map(|w| (w.x, w.y)).collect();

		state.set_active_category(Some("ai".into()));
		run(&mut state, 0.5);
		let rust = state.words().iter().position(|w| w.id == "rust").unwrap();
		assert!(!state.style(rust).unwrap().interactive);
		let (px, py) = screen_point(&state, rust);
		assert_eq!(state.word_at_position(px, py), None);
		state.set_hover(Some(rust));
		assert_eq!(state.hovered(), None);

		state.set_active_category(None);
		run(&mut state, 0.5);
		let after: Vec<(f64, f64)> = state.words().iter().map(|w| (w.x, w.y)).collect();
		assert_eq!(positions, after);
		for i in 0..state.words().len() {
			assert_eq!(state.pose(i), state.rest_pose(i));
		}
	}

	#[test]
	fn filter_hides_hovered_word() {
		let mut state = ready_state();
		let rust = state.words().iter().position(|w| w.id == "rust").unwrap();
		state.set_hover(Some(rust));
		state.set_active_category(Some("frontend".into()));
		assert_eq!(state.hovered(), None);
		run(&mut state, 1.0);
		for i in 0..state.words().len() {
			assert_eq!(state.pose(i), state.rest_pose(i));
		}
	}

	#[test]
	fn idle_rounds_return_to_rest() {
		let mut state = ready_state();
		let rest = snapshot(&state);
		let mut saw_motion = false;
		for _ in 0..(60 * 12) {
			state.tick(1.0 / 60.0, &ApproxMeasure::default());
			saw_motion |= snapshot(&state) != rest;
		}
		assert!(saw_motion);
		let mut busy = state.poses.iter().any(Animated::is_animating);
		while busy {
			state.tick(1.0 / 60.0, &ApproxMeasure::default());
			busy = state.poses.iter().any(Animated::is_animating);
		}
		assert_eq!(snapshot(&state), rest);
	}

	#[test]
	fn resize_is_debounced() {
		let mut state = ready_state();
		assert_eq!(state.layout_count(), 1);
		for w in [700.0, 650.0, 600.0, 500.0] {
			state.request_resize(w, 300.0);
			run(&mut state, 0.05);
		}
		assert_eq!(state.layout_count(), 1);
		run(&mut state, 0.3);
		assert_eq!(state.layout_count(), 2);
		assert_eq!(state.canvas(), CanvasSize::new(500.0, 300.0));
		assert_eq!(state.metric_derivations(), 1);

		let bounds = state.canvas().bounds();
		for (i, word) in state.words().iter().enumerate() {
			if word.placed {
				let rest = Rect::centered(word.x, word.y, word.width, word.height);
				assert!(bounds.contains(&rest), "word {i} out of bounds");
			}
		}
	}

	#[test]
	fn select_returns_skill_id() {
		let state = ready_state();
		let (px, py) = screen_point(&state, 2);
		assert_eq!(state.select_at(px, py), Some("react".to_string()));
	}

	#[test]
	fn hover_takes_over_idle_nudge() {
		let mut state = ready_state();
		let rest = snapshot(&state);
		let mut nudged = None;
		for _ in 0..(60 * 5) {
			state.tick(1.0 / 60.0, &ApproxMeasure::default());
			nudged = state.poses.iter().position(|p| p.kind() == Some(TweenKind::Idle));
			if nudged.is_some() {
				break;
			}
		}
		let nudged = nudged.expect("an idle round within five seconds");
		run(&mut state, 0.3);
		assert_eq!(state.poses[nudged].kind(), Some(TweenKind::Idle));

		state.set_hover(Some(nudged));
		assert_eq!(state.hovered(), Some(nudged));
		for (i, word) in state.words().iter().enumerate() {
			if word.placed {
				assert_eq!(state.poses[i].kind(), Some(TweenKind::Hover));
			}
		}
		run(&mut state, 0.1);
		state.set_hover(None);
		run(&mut state, 1.0);
		assert_eq!(snapshot(&state), rest);
	}

	#[test]
	fn rapid_hover_switching_settles_at_rest() {
		let mut state = ready_state();
		let rest = snapshot(&state);
		for round in 0..3 {
			for i in 0..state.words().len() {
				state.set_hover(Some((i + round) % state.words().len()));
				state.tick(1.0 / 60.0, &ApproxMeasure::default());
			}
		}
		state.set_hover(None);
		run(&mut state, 1.0);
		assert_eq!(snapshot(&state), rest);
		assert_eq!(state.hovered(), None);
	}

	/// Width depends on the font family, like real canvas text.
	struct FamilyMeasure;

	impl TextMeasure for FamilyMeasure {
		fn text_width(&self, text: &str, size: f64, _weight: FontWeight, family: FontFamily) -> f64 {
			let advance = match family {
				FontFamily::Sans => 0.55,
				FontFamily::Display => 0.6,
				FontFamily::Mono => 0.7,
				FontFamily::Serif => 0.5,
			};
			text.chars().count() as f64 * size * advance
		}
	}

	#[test]
	fn resizing_back_restores_layout() {
		let layout = |state: &SkillCloudState| -> Vec<(f64, f64, FontFamily)> {
			state.words().iter().map(|w| (w.x, w.y, w.font_family)).collect()
		};
		let mut state = SkillCloudState::new(sample_data(), CloudConfig::default(), 800.0, 600.0);
		state.set_visible(&FamilyMeasure);
		let first = layout(&state);

		for (w, h) in [(420.0, 360.0), (800.0, 600.0)] {
			state.request_resize(w, h);
			for _ in 0..30 {
				state.tick(1.0 / 60.0, &FamilyMeasure);
			}
		}
		assert_eq!(state.layout_count(), 3);
		assert_eq!(layout(&state), first);
	}

	#[test]
	fn non_finite_canvas_shows_placeholder() {
		let mut state = SkillCloudState::new(sample_data(), CloudConfig::default(), f64::NAN, 600.0);
		state.set_visible(&ApproxMeasure::default());
		assert_eq!(state.phase(), Phase::Empty);

		let mut state = ready_state();
		state.request_resize(800.0, f64::NAN);
		run(&mut state, 0.5);
		assert_eq!(state.phase(), Phase::Empty);
		assert!(state.words().iter().all(|w| !w.placed));
	}
}
