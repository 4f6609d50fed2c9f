//! skill-cloud: interactive weighted skill cloud for a portfolio site.
//!
//! This crate provides a WASM canvas component that sizes skills by how many
//! projects use them, packs them without overlap, animates them in, and
//! responds to hover, filtering and clicks.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

pub mod components;

pub use components::skill_cloud::{
	CloudConfig, CloudData, CloudError, Project, Skill, SkillCloud, Theme,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("skill-cloud: logging initialized");
}

/// Text content of the `<script>` element with the given id.
fn script_text(id: &'static str) -> Result<String, CloudError> {
	let document = web_sys::window()
		.and_then(|w| w.document())
		.ok_or(CloudError::MissingElement("document"))?;
	let script: HtmlScriptElement = document
		.get_element_by_id(id)
		.ok_or(CloudError::MissingElement(id))?
		.dyn_into()
		.map_err(|_| CloudError::MissingElement(id))?;
	script.text().map_err(|_| CloudError::MissingElement(id))
}

/// Load skills and projects from a script element with id="cloud-data".
/// Expected format: JSON with { skills: [...], projects: [...] }
pub fn load_cloud_data() -> Result<CloudData, CloudError> {
	let text = script_text("cloud-data")?;
	let data: CloudData = serde_json::from_str(&text).map_err(CloudError::InvalidData)?;
	info!(
		"skill-cloud: loaded {} skills, {} projects",
		data.skills.len(),
		data.projects.len()
	);
	Ok(data)
}

/// Load tuning overrides from a script element with id="cloud-config".
///
/// The element is optional; a missing one yields the defaults.
pub fn load_config() -> Result<CloudConfig, CloudError> {
	match script_text("cloud-config") {
		Ok(text) => serde_json::from_str(&text).map_err(CloudError::InvalidConfig),
		Err(CloudError::MissingElement(_)) => Ok(CloudConfig::default()),
		Err(err) => Err(err),
	}
}

/// Theme named by the page's `<html data-theme="...">`, default dusk.
fn page_theme() -> Theme {
	web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.document_element())
		.and_then(|e| e.get_attribute("data-theme"))
		.map(|name| Theme::named(&name))
		.unwrap_or_default()
}

/// Main application component.
/// Loads cloud data from the DOM and renders the cloud with a category filter.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let cloud_data = load_cloud_data().unwrap_or_else(|e| {
		warn!("skill-cloud: {e}");
		CloudData::default()
	});
	let config = load_config().unwrap_or_else(|e| {
		warn!("skill-cloud: {e}, using defaults");
		CloudConfig::default()
	});
	let theme = page_theme();
	let theme_name = theme.name;
	let categories = cloud_data.categories();
	let data_signal = Signal::derive(move || cloud_data.clone());

	let (active, set_active) = signal(None::<String>);
	let (selected, set_selected) = signal(None::<String>);
	let on_select = Callback::new(move |id: String| set_selected.set(Some(id)));

	let category_buttons = categories
		.into_iter()
		.map(|category| {
			let (label, value) = (category.clone(), category.clone());
			view! {
				<button
					class:active=move || active.get().as_deref() == Some(category.as_str())
					on:click=move |_| {
						// Clicking the active category again clears the filter.
						set_active.update(|a| {
							*a = if a.as_deref() == Some(value.as_str()) { None } else { Some(value.clone()) };
						});
					}
				>
					{label}
				</button>
			}
		})
		.collect_view();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme=theme_name />
		<Title text="Skills" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<section class="skills">
			<nav class="skill-filter">
				<button class:active=move || active.get().is_none() on:click=move |_| set_active.set(None)>
					"All"
				</button>
				{category_buttons}
			</nav>
			<div class="skill-cloud">
				<SkillCloud data=data_signal active_category=active on_select=on_select config=config theme=theme />
			</div>
			<p class="skill-selected">
				{move || selected.get().map(|id| format!("Selected: {id}")).unwrap_or_default()}
			</p>
		</section>
	}
}
