//! Visual weight of each skill, derived from how many projects use it.
//!
//! Size follows a power law of the normalized project count so the most-used
//! skills stand out; font weight is a four-bucket quantization and opacity is
//! linear. All three depend only on the full, unfiltered dataset.

use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use log::debug;

use super::config::MetricsConfig;
use super::types::{CloudData, DatasetVersion, Project, Skill};

/// CSS font-weight bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FontWeight {
	/// 400
	Regular,
	/// 500
	Medium,
	/// 600
	SemiBold,
	/// 700
	Bold,
}

impl FontWeight {
	const BUCKETS: [FontWeight; 4] = [
		FontWeight::Regular,
		FontWeight::Medium,
		FontWeight::SemiBold,
		FontWeight::Bold,
	];

	/// Numeric CSS value (400..=700).
	pub fn css_value(self) -> u16 {
		match self {
			FontWeight::Regular => 400,
			FontWeight::Medium => 500,
			FontWeight::SemiBold => 600,
			FontWeight::Bold => 700,
		}
	}
}

/// Derived visual weight of one skill.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkillMetrics {
	/// Number of projects referencing the skill.
	pub count: usize,
	/// Font size in pixels.
	pub size: f64,
	/// Font weight bucket.
	pub weight: FontWeight,
	/// Resting opacity.
	pub opacity: f64,
}

/// Metrics for every skill of a dataset, keyed by skill id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SkillMetricsTable {
	/// Largest project count in the dataset.
	pub max_count: usize,
	/// Metrics per skill id.
	pub by_id: HashMap<String, SkillMetrics>,
}

impl SkillMetricsTable {
	/// Metrics for the skill `id`.
	pub fn get(&self, id: &str) -> Option<&SkillMetrics> {
		self.by_id.get(id)
	}
}

/// Counts the projects referencing each skill.
///
/// A project listing the same skill twice counts once; ids that match no
/// skill are ignored.
pub fn project_counts(skills: &[Skill], projects: &[Project]) -> HashMap<String, usize> {
	let mut counts: HashMap<String, usize> =
		skills.iter().map(|s| (s.id.clone(), 0)).collect();
	for project in projects {
		let unique: HashSet<&str> = project.skills.iter().map(String::as_str).collect();
		for id in unique {
			if let Some(count) = counts.get_mut(id) {
				*count += 1;
			}
		}
	}
	counts
}

/// Maps one project count onto size, weight and opacity.
pub fn metrics_for_count(count: usize, max_count: usize, config: &MetricsConfig) -> SkillMetrics {
	if max_count == 0 {
		return SkillMetrics {
			count,
			size: config.min_size,
			weight: FontWeight::Regular,
			opacity: config.min_opacity,
		};
	}

	let t = (count as f64 / max_count as f64).clamp(0.0, 1.0);
	let size = config.min_size + (config.max_size - config.min_size) * t.powf(config.exponent);
	let bucket = ((t * 4.0).floor() as usize).min(3);
	let opacity = config.min_opacity + (config.max_opacity - config.min_opacity) * t;

	SkillMetrics {
		count,
		size: size.clamp(config.min_size, config.max_size),
		weight: FontWeight::BUCKETS[bucket],
		opacity,
	}
}

/// Derives metrics for every skill from a single shared `max_count` scan.
pub fn derive_skill_metrics(data: &CloudData, config: &MetricsConfig) -> SkillMetricsTable {
	let counts = project_counts(&data.skills, &data.projects);
	let max_count = counts.values().copied().max().unwrap_or(0);
	let by_id = counts
		.into_iter()
		.map(|(id, count)| (id, metrics_for_count(count, max_count, config)))
		.collect();
	SkillMetricsTable { max_count, by_id }
}

/// Memoizes derived metrics per dataset version.
///
/// Owned by whoever drives the layout; a resize re-reads the cached table
/// instead of re-scanning every project.
#[derive(Debug, Default)]
pub struct MetricsCache {
	key: Option<(DatasetVersion, MetricsConfig)>,
	table: Rc<SkillMetricsTable>,
	misses: usize,
}

impl MetricsCache {
	/// Returns the table for `data`, deriving it only when the dataset
	/// version or the metric configuration changed.
	pub fn get_or_derive(&mut self, data: &CloudData, config: &MetricsConfig) -> Rc<SkillMetricsTable> {
		let version = data.version();
		let hit = matches!(&self.key, Some((v, c)) if *v == version && c == config);
		if !hit {
			self.table = Rc::new(derive_skill_metrics(data, config));
			self.key = Some((version, config.clone()));
			self.misses += 1;
			debug!(
				"skill-cloud: derived metrics for {} skills (max count {})",
				self.table.by_id.len(),
				self.table.max_count
			);
		}
		Rc::clone(&self.table)
	}

	/// Number of times the table had to be recomputed.
	pub fn misses(&self) -> usize {
		self.misses
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn skill(id: &str) -> Skill {
		Skill {
			id: id.into(),
			name: id.to_uppercase(),
			category: "misc".into(),
			color_token: String::new(),
		}
	}

	fn project(skills: &[&str]) -> Project {
		Project {
			skills: skills.iter().map(|s| s.to_string()).collect(),
			..Default::default()
		}
	}

	#[test]
	fn counts_ignore_duplicates_and_unknown_ids() {
		let skills = vec![skill("a"), skill("b")];
		let projects = vec![project(&["a", "a", "zzz"]), project(&["a", "b"])];
		let counts = project_counts(&skills, &projects);
		assert_eq!(counts["a"], 2);
		assert_eq!(counts["b"], 1);
		assert!(!counts.contains_key("zzz"));
	}

	#[test]
	fn single_dominant_skill() {
		let ids = ["x", "a", "b", "c", "d"];
		let data = CloudData {
			skills: ids.iter().map(|id| skill(id)).collect(),
			projects: (0..10)
				.map(|i| match i {
					0 => project(&["x", "a", "b", "c", "d"]),
					_ => project(&["x"]),
				})
				.collect(),
		};
		let config = MetricsConfig::default();
		let table = derive_skill_metrics(&data, &config);

		let x = table.get("x").unwrap();
		assert_eq!(x.count, 10);
		assert_eq!(x.size, 62.0);
		assert_eq!(x.weight, FontWeight::Bold);

		let a = table.get("a").unwrap();
		for id in ["b", "c", "d"] {
			assert_eq!(table.get(id).unwrap(), a);
		}
		assert!(a.size < x.size);
		assert!(a.size - config.min_size < 3.0, "size {} not near min", a.size);
		assert_eq!(a.weight, FontWeight::Regular);
	}

	#[test]
	fn no_projects_falls_back_to_minimums() {
		let data = CloudData {
			skills: vec![skill("a"), skill("b")],
			projects: Vec::new(),
		};
		let config = MetricsConfig::default();
		let table = derive_skill_metrics(&data, &config);
		assert_eq!(table.max_count, 0);
		for m in table.by_id.values() {
			assert_eq!(m.size, config.min_size);
			assert_eq!(m.weight.css_value(), 400);
			assert_eq!(m.opacity, config.min_opacity);
		}
	}

	#[test]
	fn weight_buckets_are_equal_width() {
		let config = MetricsConfig::default();
		let weights: Vec<u16> = (0..=8)
			.map(|c| metrics_for_count(c, 8, &config).weight.css_value())
			.collect();
		assert_eq!(weights, vec![400, 400, 500, 500, 600, 600, 700, 700, 700]);
	}

	#[test]
	fn cache_recomputes_only_on_new_version() {
		let mut data = CloudData {
			skills: vec![skill("a")],
			projects: vec![project(&["a"])],
		};
		let config = MetricsConfig::default();
		let mut cache = MetricsCache::default();

		let first = cache.get_or_derive(&data, &config);
		let second = cache.get_or_derive(&data, &config);
		assert!(Rc::ptr_eq(&first, &second));
		assert_eq!(cache.misses(), 1);

		data.projects.push(project(&["a"]));
		let third = cache.get_or_derive(&data, &config);
		assert_eq!(cache.misses(), 2);
		assert_eq!(third.get("a").unwrap().count, 2);

		let bigger = MetricsConfig {
			max_size: 80.0,
			..config
		};
		cache.get_or_derive(&data, &bigger);
		assert_eq!(cache.misses(), 3);
	}
}
