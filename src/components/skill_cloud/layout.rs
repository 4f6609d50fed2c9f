//! Greedy spiral packing of words into a bounded canvas.
//!
//! Words are placed largest first. Each one walks an Archimedean spiral
//! (`r = growth * θ`) outward from the canvas center and settles at the first
//! sample where its box stays inside the canvas and its padded box touches no
//! previously placed word. Words that never find a spot before the spiral
//! leaves the canvas are left unplaced.
//!
//! Coordinates are canvas-centered: `(0, 0)` is the middle of the canvas and
//! the canvas spans `[-w/2, w/2] × [-h/2, h/2]`.

use std::cmp::Ordering;
use std::collections::HashMap;

use log::{debug, info};

use super::config::SpiralConfig;
use super::metrics::FontWeight;
use super::word::{CloudWord, FontFamily};

/// Axis-aligned rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
	/// Left edge.
	pub min_x: f64,
	/// Top edge.
	pub min_y: f64,
	/// Right edge.
	pub max_x: f64,
	/// Bottom edge.
	pub max_y: f64,
}

impl Rect {
	/// Box of `width` by `height` centered on `(x, y)`.
	pub fn centered(x: f64, y: f64, width: f64, height: f64) -> Self {
		Self {
			min_x: x - width / 2.0,
			min_y: y - height / 2.0,
			max_x: x + width / 2.0,
			max_y: y + height / 2.0,
		}
	}

	/// Grows every side by `margin`.
	pub fn expand(self, margin: f64) -> Self {
		Self {
			min_x: self.min_x - margin,
			min_y: self.min_y - margin,
			max_x: self.max_x + margin,
			max_y: self.max_y + margin,
		}
	}

	/// Strict overlap; rectangles sharing only an edge do not intersect.
	pub fn intersects(&self, other: &Rect) -> bool {
		self.min_x < other.max_x
			&& other.min_x < self.max_x
			&& self.min_y < other.max_y
			&& other.min_y < self.max_y
	}

	/// Whether `other` lies fully inside, edges included.
	pub fn contains(&self, other: &Rect) -> bool {
		other.min_x >= self.min_x
			&& other.max_x <= self.max_x
			&& other.min_y >= self.min_y
			&& other.max_y <= self.max_y
	}

	/// Whether `(x, y)` lies inside, edges included.
	pub fn contains_point(&self, x: f64, y: f64) -> bool {
		x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
	}

	/// Width times height.
	pub fn area(&self) -> f64 {
		(self.max_x - self.min_x) * (self.max_y - self.min_y)
	}
}

/// Measures rendered text.
///
/// The browser implementation asks the canvas; tests use [`ApproxMeasure`].
pub trait TextMeasure {
	/// Width in pixels of `text` drawn with the given font.
	fn text_width(&self, text: &str, size: f64, weight: FontWeight, family: FontFamily) -> f64;
}

/// Width estimate from character count, for tests and headless use.
#[derive(Clone, Copy, Debug)]
pub struct ApproxMeasure {
	/// Average advance as a fraction of the font size.
	pub advance: f64,
}

impl Default for ApproxMeasure {
	fn default() -> Self {
		Self { advance: 0.6 }
	}
}

impl TextMeasure for ApproxMeasure {
	fn text_width(&self, text: &str, size: f64, weight: FontWeight, _family: FontFamily) -> f64 {
		let bold = if weight >= FontWeight::SemiBold { 1.05 } else { 1.0 };
		text.chars().count() as f64 * size * self.advance * bold
	}
}

/// Canvas size in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasSize {
	/// Width in pixels.
	pub width: f64,
	/// Height in pixels.
	pub height: f64,
}

impl CanvasSize {
	/// Size of `width` by `height` pixels.
	pub fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	/// Canvas bounds in centered coordinates.
	pub fn bounds(&self) -> Rect {
		Rect::centered(0.0, 0.0, self.width, self.height)
	}

	/// Whether there is no room to place anything. Non-finite sizes count
	/// as empty.
	pub fn is_empty(&self) -> bool {
		!(self.width.is_finite() && self.height.is_finite())
			|| self.width <= 0.0
			|| self.height <= 0.0
	}
}

/// Placed boxes bucketed into a uniform grid.
#[derive(Debug)]
pub struct CollisionIndex {
	cell_size: f64,
	cells: HashMap<(i32, i32), Vec<usize>>,
	rects: Vec<Rect>,
}

impl CollisionIndex {
	/// Empty index with square cells of `cell_size` pixels.
	pub fn new(cell_size: f64) -> Self {
		Self {
			cell_size: cell_size.max(1.0),
			cells: HashMap::new(),
			rects: Vec::new(),
		}
	}

	fn cell_range(&self, rect: &Rect) -> (i32, i32, i32, i32) {
		(
			(rect.min_x / self.cell_size).floor() as i32,
			(rect.max_x / self.cell_size).floor() as i32,
			(rect.min_y / self.cell_size).floor() as i32,
			(rect.max_y / self.cell_size).floor() as i32,
		)
	}

	/// Adds an occupied rectangle.
	pub fn insert(&mut self, rect: Rect) {
		let index = self.rects.len();
		self.rects.push(rect);
		let (min_cx, max_cx, min_cy, max_cy) = self.cell_range(&rect);
		for cx in min_cx..=max_cx {
			for cy in min_cy..=max_cy {
				self.cells.entry((cx, cy)).or_default().push(index);
			}
		}
	}

	/// Whether `rect` overlaps any inserted rectangle.
	pub fn collides(&self, rect: &Rect) -> bool {
		let (min_cx, max_cx, min_cy, max_cy) = self.cell_range(rect);
		for cx in min_cx..=max_cx {
			for cy in min_cy..=max_cy {
				let Some(indices) = self.cells.get(&(cx, cy)) else {
					continue;
				};
				if indices.iter().any(|&i| self.rects[i].intersects(rect)) {
					return true;
				}
			}
		}
		false
	}

	/// Number of inserted rectangles.
	pub fn len(&self) -> usize {
		self.rects.len()
	}

	/// Whether nothing was inserted.
	pub fn is_empty(&self) -> bool {
		self.rects.is_empty()
	}
}

/// Outcome of a packing pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PackSummary {
	/// Number of words placed.
	pub placed: usize,
	/// Ids of the words that did not fit.
	pub unplaced: Vec<String>,
}

/// Placement order: size descending, then count, then id for stability.
fn placement_order(words: &[CloudWord]) -> Vec<usize> {
	let mut order: Vec<usize> = (0..words.len()).collect();
	order.sort_by(|&a, &b| {
		let (wa, wb) = (&words[a], &words[b]);
		wb.size
			.partial_cmp(&wa.size)
			.unwrap_or(Ordering::Equal)
			.then_with(|| wb.count.cmp(&wa.count))
			.then_with(|| wa.id.cmp(&wb.id))
	});
	order
}

/// Walks the spiral for one word. Returns the accepted center.
fn find_position(
	width: f64,
	height: f64,
	canvas: &CanvasSize,
	index: &CollisionIndex,
	config: &SpiralConfig,
) -> Option<(f64, f64)> {
	let bounds = canvas.bounds();
	if width > canvas.width || height > canvas.height {
		return None;
	}

	let ratio = canvas.width / canvas.height;
	let max_radius = 0.5 * canvas.width.hypot(canvas.height) * config.max_radius_factor;
	let step = config.angle_step.max(1e-3);
	let growth = config.growth.max(1e-3);

	let mut theta: f64 = 0.0;
	loop {
		let r = growth * theta;
		if r > max_radius {
			return None;
		}
		let x = r * theta.cos() * ratio.max(1.0);
		let y = r * theta.sin() / ratio.min(1.0);
		let rect = Rect::centered(x, y, width, height);
		if bounds.contains(&rect) && !index.collides(&rect.expand(config.padding)) {
			return Some((x, y));
		}
		theta += step;
	}
}

/// Places as many words as fit, mutating `x`, `y`, `width`, `height` and
/// `placed` in place.
pub fn pack_words(
	words: &mut [CloudWord],
	canvas: CanvasSize,
	measure: &impl TextMeasure,
	config: &SpiralConfig,
) -> PackSummary {
	let mut summary = PackSummary::default();
	for word in words.iter_mut() {
		word.placed = false;
		word.x = 0.0;
		word.y = 0.0;
		word.width = measure.text_width(&word.text, word.size, word.weight, word.font_family);
		word.height = word.size * config.line_height;
	}
	if canvas.is_empty() {
		summary.unplaced = words.iter().map(|w| w.id.clone()).collect();
		return summary;
	}

	let mut index = CollisionIndex::new(config.cell_size);
	for i in placement_order(words) {
		let word = &mut words[i];
		match find_position(word.width, word.height, &canvas, &index, config) {
			Some((x, y)) => {
				word.x = x;
				word.y = y;
				word.placed = true;
				index.insert(Rect::centered(x, y, word.width, word.height).expand(config.padding));
				summary.placed += 1;
			}
			None => {
				debug!(
					"skill-cloud: no room for '{}' ({:.1}px) in {}x{}",
					word.text, word.size, canvas.width, canvas.height
				);
				summary.unplaced.push(word.id.clone());
			}
		}
	}

	info!(
		"skill-cloud: placed {} of {} words in {}x{}",
		summary.placed,
		words.len(),
		canvas.width,
		canvas.height
	);
	summary
}

/// Resting box of a word (unpadded).
pub fn word_rect(word: &CloudWord) -> Rect {
	Rect::centered(word.x, word.y, word.width, word.height)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn word(id: &str, size: f64) -> CloudWord {
		CloudWord {
			id: id.into(),
			text: id.into(),
			category: "c".into(),
			color_token: String::new(),
			count: 0,
			size,
			weight: FontWeight::Regular,
			opacity: 1.0,
			is_active: true,
			x: 0.0,
			y: 0.0,
			rotate: 0.0,
			font_family: FontFamily::Sans,
			width: 0.0,
			height: 0.0,
			placed: false,
		}
	}

	#[test]
	fn rect_edges_touching_do_not_intersect() {
		let a = Rect::centered(0.0, 0.0, 10.0, 10.0);
		let b = Rect::centered(10.0, 0.0, 10.0, 10.0);
		assert!(!a.intersects(&b));
		assert!(a.intersects(&Rect::centered(9.0, 0.0, 10.0, 10.0)));
	}

	#[test]
	fn collision_index_spans_cells() {
		let mut index = CollisionIndex::new(16.0);
		index.insert(Rect::centered(0.0, 0.0, 100.0, 10.0));
		assert_eq!(index.len(), 1);
		assert!(index.collides(&Rect::centered(45.0, 0.0, 4.0, 4.0)));
		assert!(!index.collides(&Rect::centered(45.0, 20.0, 4.0, 4.0)));
		assert!(!index.collides(&Rect::centered(-200.0, -200.0, 4.0, 4.0)));
	}

	#[test]
	fn largest_word_sits_at_center() {
		let mut words = vec![word("small", 14.0), word("big", 60.0), word("mid", 30.0)];
		let summary = pack_words(
			&mut words,
			CanvasSize::new(800.0, 600.0),
			&ApproxMeasure::default(),
			&SpiralConfig::default(),
		);
		assert_eq!(summary.placed, 3);
		assert!(summary.unplaced.is_empty());
		assert_eq!((words[1].x, words[1].y), (0.0, 0.0));
		assert!(words[0].x != 0.0 || words[0].y != 0.0);
	}

	#[test]
	fn placed_words_never_overlap() {
		let config = SpiralConfig::default();
		let mut words: Vec<CloudWord> = (0..40)
			.map(|i| word(&format!("skill{i}"), 14.0 + (i % 7) as f64 * 7.0))
			.collect();
		let canvas = CanvasSize::new(900.0, 500.0);
		pack_words(&mut words, canvas, &ApproxMeasure::default(), &config);

		let placed: Vec<&CloudWord> = words.iter().filter(|w| w.placed).collect();
		assert!(placed.len() > 20);
		for (i, a) in placed.iter().enumerate() {
			assert!(canvas.bounds().contains(&word_rect(a)));
			for b in &placed[i + 1..] {
				let (ra, rb) = (
					word_rect(a).expand(config.padding),
					word_rect(b).expand(config.padding),
				);
				assert!(!ra.intersects(&rb), "{} overlaps {}", a.id, b.id);
			}
		}
	}

	#[test]
	fn oversized_word_is_left_unplaced() {
		let mut words = vec![word("enormous-skill-name", 62.0), word("ok", 14.0)];
		let summary = pack_words(
			&mut words,
			CanvasSize::new(200.0, 100.0),
			&ApproxMeasure::default(),
			&SpiralConfig::default(),
		);
		assert_eq!(summary.unplaced, vec!["enormous-skill-name".to_string()]);
		assert!(!words[0].placed);
		assert!(words[1].placed);
	}

	#[test]
	fn zero_sized_canvas_places_nothing() {
		let mut words = vec![word("a", 20.0)];
		let summary = pack_words(
			&mut words,
			CanvasSize::new(0.0, 300.0),
			&ApproxMeasure::default(),
			&SpiralConfig::default(),
		);
		assert_eq!(summary.placed, 0);
		assert!(!words[0].placed);
	}

	#[test]
	fn packing_is_deterministic() {
		let make = || -> Vec<CloudWord> {
			(0..25)
				.map(|i| word(&format!("w{i}"), 14.0 + (i * 3 % 40) as f64))
				.collect()
		};
		let (mut a, mut b) = (make(), make());
		let canvas = CanvasSize::new(640.0, 480.0);
		pack_words(&mut a, canvas, &ApproxMeasure::default(), &SpiralConfig::default());
		pack_words(&mut b, canvas, &ApproxMeasure::default(), &SpiralConfig::default());
		assert_eq!(a, b);
	}

	#[test]
	fn non_finite_canvas_places_nothing() {
		for canvas in [
			CanvasSize::new(f64::NAN, 300.0),
			CanvasSize::new(400.0, f64::INFINITY),
		] {
			assert!(canvas.is_empty());
			let mut words = vec![word("rust", 30.0), word("go", 20.0)];
			let summary = pack_words(&mut words, canvas, &ApproxMeasure::default(), &SpiralConfig::default());
			assert_eq!(summary.placed, 0);
			assert_eq!(summary.unplaced.len(), 2);
			assert!(words.iter().all(|w| !w.placed));
		}
	}
}
