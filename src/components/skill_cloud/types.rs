//! Input data for the skill cloud component.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use serde::Deserialize;

/// A skill rendered as one word in the cloud.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Skill {
	/// Unique identifier. Projects reference skills by this id.
	pub id: String,
	/// Display label.
	pub name: String,
	/// Grouping tag (e.g., "frontend", "backend", "ai").
	pub category: String,
	/// Semantic color reference, resolved against the theme at render time.
	#[serde(rename = "colorToken", default)]
	pub color_token: String,
}

/// A catalog entry. Only the skill references matter to the cloud.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Project {
	/// Catalog id, unused by the cloud.
	#[serde(default)]
	pub id: Option<String>,
	/// Display title, unused by the cloud.
	#[serde(default)]
	pub title: Option<String>,
	/// Ids of the skills this project uses.
	#[serde(default)]
	pub skills: Vec<String>,
}

/// Identity of a dataset, used to key memoized metrics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DatasetVersion(pub u64);

/// Complete cloud input: skills and the projects that reference them.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct CloudData {
	/// Skills to show, in display order.
	pub skills: Vec<Skill>,
	/// Projects referencing the skills.
	#[serde(default)]
	pub projects: Vec<Project>,
}

impl CloudData {
	/// Hash of everything metric derivation reads.
	///
	/// Names and color tokens are excluded: they don't affect word weight.
	pub fn version(&self) -> DatasetVersion {
		let mut hasher = DefaultHasher::new();
		self.skills.len().hash(&mut hasher);
		for skill in &self.skills {
			skill.id.hash(&mut hasher);
		}
		self.projects.len().hash(&mut hasher);
		for project in &self.projects {
			project.skills.hash(&mut hasher);
		}
		DatasetVersion(hasher.finish())
	}

	/// Distinct categories in first-seen order.
	pub fn categories(&self) -> Vec<String> {
		let mut seen: Vec<String> = Vec::new();
		for skill in &self.skills {
			if !seen.contains(&skill.category) {
				seen.push(skill.category.clone());
			}
		}
		seen
	}
}
