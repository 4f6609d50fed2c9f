//! Skill cloud visualization component.
//!
//! Renders weighted skill labels on an HTML canvas with:
//! - Sizes, weights and opacities derived from how many projects use a skill
//! - Overlap-free Archimedean spiral packing inside the canvas bounds
//! - Tiered entry animation, largest words first
//! - Hover repulsion with category highlighting and guide lines
//! - Gentle idle motion and category filtering
//!
//! Everything except `component` and `render` is DOM-free and runs in native
//! tests.
//!
//! # Example
//!
//! ```ignore
//! use skill_cloud::{CloudData, Project, Skill, SkillCloud};
//!
//! let data = CloudData {
//!     skills: vec![
//!         Skill { id: "rust".into(), name: "Rust".into(), category: "backend".into(), color_token: "orange".into() },
//!         Skill { id: "react".into(), name: "React".into(), category: "frontend".into(), color_token: "blue".into() },
//!     ],
//!     projects: vec![Project { skills: vec!["rust".into()], ..Default::default() }],
//! };
//!
//! view! { <SkillCloud data=data /> }
//! ```

mod component;
pub mod config;
pub mod entry;
pub mod error;
pub mod filter;
pub mod guides;
pub mod idle;
pub mod interaction;
pub mod layout;
pub mod metrics;
mod render;
pub mod state;
pub mod theme;
pub mod tween;
mod types;
pub mod word;

pub use component::SkillCloud;
pub use config::CloudConfig;
pub use error::CloudError;
pub use layout::{ApproxMeasure, CanvasSize, TextMeasure};
pub use state::{Phase, SkillCloudState};
pub use theme::Theme;
pub use types::{CloudData, DatasetVersion, Project, Skill};
