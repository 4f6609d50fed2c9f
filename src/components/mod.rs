//! Leptos components.

pub mod skill_cloud;
