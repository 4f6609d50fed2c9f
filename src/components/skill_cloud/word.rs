//! The per-skill working unit of the cloud.

use rand::Rng;

use super::metrics::{FontWeight, SkillMetricsTable};
use super::types::CloudData;

/// Font stacks words are drawn with. Purely cosmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontFamily {
	/// Body sans-serif.
	Sans,
	/// Geometric display face.
	Display,
	/// Monospace face.
	Mono,
	/// Serif face.
	Serif,
}

impl FontFamily {
	/// Every family, in pick order.
	pub const ALL: [FontFamily; 4] = [
		FontFamily::Sans,
		FontFamily::Display,
		FontFamily::Mono,
		FontFamily::Serif,
	];

	/// CSS `font-family` value.
	pub fn css(self) -> &'static str {
		match self {
			FontFamily::Sans => "Inter, system-ui, sans-serif",
			FontFamily::Display => "\"Space Grotesk\", Inter, sans-serif",
			FontFamily::Mono => "\"JetBrains Mono\", ui-monospace, monospace",
			FontFamily::Serif => "\"Playfair Display\", Georgia, serif",
		}
	}

	/// Uniformly random family.
	pub fn random(rng: &mut impl Rng) -> Self {
		Self::ALL[rng.random_range(0..Self::ALL.len())]
	}
}

/// One skill laid out in the cloud.
#[derive(Clone, Debug, PartialEq)]
pub struct CloudWord {
	/// Skill id.
	pub id: String,
	/// Label drawn on the canvas.
	pub text: String,
	/// Category the skill belongs to.
	pub category: String,
	/// Color token, resolved through the theme palette.
	pub color_token: String,
	/// Related project count.
	pub count: usize,
	/// Font size in pixels.
	pub size: f64,
	/// Font weight bucket.
	pub weight: FontWeight,
	/// Resting opacity before any filter is applied.
	pub opacity: f64,
	/// Passes the current category filter.
	pub is_active: bool,
	/// Resting center, canvas-centered coordinates.
	pub x: f64,
	/// Resting center, vertical.
	pub y: f64,
	/// Always 0; words are never rotated.
	pub rotate: f64,
	/// Font family picked at build time.
	pub font_family: FontFamily,
	/// Measured text box, set by layout.
	pub width: f64,
	/// Measured text height.
	pub height: f64,
	/// Whether the spiral search found a spot for this word.
	pub placed: bool,
}

impl CloudWord {
	/// Canvas font shorthand at `scale` times the resting size,
	/// e.g. `600 32.0px Inter, sans-serif`.
	pub fn font(&self, scale: f64) -> String {
		font_shorthand(self.weight, self.size * scale, self.font_family)
	}
}

/// Canvas font shorthand for the given weight, size and family.
pub fn font_shorthand(weight: FontWeight, size: f64, family: FontFamily) -> String {
	format!("{} {:.1}px {}", weight.css_value(), size, family.css())
}

/// Builds one unplaced word per skill.
pub fn build_words(data: &CloudData, metrics: &SkillMetricsTable, rng: &mut impl Rng) -> Vec<CloudWord> {
	data.skills
		.iter()
		.map(|skill| {
			let m = metrics.get(&skill.id).copied().unwrap_or_else(|| {
				super::metrics::metrics_for_count(0, 0, &Default::default())
			});
			CloudWord {
				id: skill.id.clone(),
				text: skill.name.clone(),
				category: skill.category.clone(),
				color_token: skill.color_token.clone(),
				count: m.count,
				size: m.size,
				weight: m.weight,
				opacity: m.opacity,
				is_active: true,
				x: 0.0,
				y: 0.0,
				rotate: 0.0,
				font_family: FontFamily::random(rng),
				width: 0.0,
				height: 0.0,
				placed: false,
			}
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;
	use crate::components::skill_cloud::config::MetricsConfig;
	use crate::components::skill_cloud::metrics::derive_skill_metrics;
	use crate::components::skill_cloud::types::{Project, Skill};

	fn data() -> CloudData {
		CloudData {
			skills: ["rust", "go", "ts"]
				.iter()
				.map(|id| Skill {
					id: id.to_string(),
					name: id.to_uppercase(),
					category: "lang".into(),
					color_token: "blue".into(),
				})
				.collect(),
			projects: vec![Project {
				skills: vec!["rust".into()],
				..Default::default()
			}],
		}
	}

	#[test]
	fn one_word_per_skill_with_pinned_fonts() {
		let data = data();
		let table = derive_skill_metrics(&data, &MetricsConfig::default());
		let a = build_words(&data, &table, &mut StdRng::seed_from_u64(7));
		let b = build_words(&data, &table, &mut StdRng::seed_from_u64(7));
		assert_eq!(a.len(), 3);
		assert_eq!(a, b);
		assert!(a.iter().all(|w| !w.placed && w.rotate == 0.0 && w.is_active));
		assert_eq!(a[0].text, "RUST");
		assert_eq!(a[0].size, 62.0);
	}

	#[test]
	fn font_shorthand_format() {
		assert_eq!(
			font_shorthand(FontWeight::SemiBold, 32.0, FontFamily::Sans),
			"600 32.0px Inter, system-ui, sans-serif"
		);
	}
}
