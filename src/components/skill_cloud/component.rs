//! Leptos component wrapping the skill cloud canvas.
//!
//! The component creates an HTML canvas sized to its parent and wires up
//! pointer handlers for hover and selection. An animation loop runs via
//! `requestAnimationFrame`, advancing the cloud state and rendering each frame.
//! Layout waits until the canvas first scrolls into view.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{
	CanvasRenderingContext2d, HtmlCanvasElement, IntersectionObserver, IntersectionObserverEntry,
	MouseEvent,
};

use super::config::CloudConfig;
use super::error::{CloudError, Result};
use super::render::{self, CanvasMeasure};
use super::state::SkillCloudState;
use super::theme::Theme;
use super::types::CloudData;

const FALLBACK_WIDTH: f64 = 800.0;
const FALLBACK_HEIGHT: f64 = 480.0;
/// Frame deltas are capped so a backgrounded tab doesn't skip animations.
const MAX_FRAME_DT: f64 = 0.1;
const FIRST_FRAME_DT: f64 = 1.0 / 60.0;

/// Cloud state plus everything a frame needs to draw it.
struct CloudContext {
	state: SkillCloudState,
	ctx: CanvasRenderingContext2d,
	theme: Theme,
	last_frame: Option<f64>,
}

type Shared<T> = Rc<RefCell<Option<T>>>;

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d> {
	canvas
		.get_context("2d")?
		.ok_or(CloudError::Canvas("2d context unsupported".into()))?
		.dyn_into()
		.map_err(|_| CloudError::Canvas("unexpected context type".into()))
}

/// Size available to the canvas: the parent's box, or the fallback.
fn container_size(canvas: &HtmlCanvasElement, height: Option<f64>) -> (f64, f64) {
	let parent = canvas.parent_element();
	let width = parent
		.as_ref()
		.map(|p| p.client_width() as f64)
		.filter(|&w| w > 0.0)
		.unwrap_or(FALLBACK_WIDTH);
	let height = height.unwrap_or_else(|| {
		parent
			.as_ref()
			.map(|p| p.client_height() as f64)
			.filter(|&h| h > 0.0)
			.unwrap_or(FALLBACK_HEIGHT)
	});
	(width, height)
}

fn pointer_position(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

fn set_cursor(canvas: &HtmlCanvasElement, pointer: bool) {
	let cursor = if pointer { "pointer" } else { "default" };
	let _ = web_sys::HtmlElement::style(canvas).set_property("cursor", cursor);
}

/// Renders the interactive skill cloud on a canvas element.
///
/// `data` may change at any time; the cloud lays out again when it does.
/// `active_category` restyles words without moving them. `on_select` receives
/// the id of a clicked skill. The canvas fills its parent's width; `height`
/// overrides the parent's height.
#[component]
pub fn SkillCloud(
	#[prop(into)] data: Signal<CloudData>,
	#[prop(into, default = Signal::stored(None))] active_category: Signal<Option<String>>,
	#[prop(optional)] on_select: Option<Callback<String>>,
	#[prop(optional)] config: CloudConfig,
	#[prop(optional)] theme: Theme,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Shared<CloudContext> = Rc::new(RefCell::new(None));
	let animate: Shared<Closure<dyn FnMut()>> = Rc::new(RefCell::new(None));
	let resize_cb: Shared<Closure<dyn FnMut()>> = Rc::new(RefCell::new(None));
	let observe_cb: Shared<Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>> =
		Rc::new(RefCell::new(None));
	let (context_init, animate_init, resize_cb_init) =
		(context.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if context_init.borrow().is_some() {
			return;
		}
		let Some(window) = web_sys::window() else {
			warn!("skill-cloud: {}", CloudError::MissingElement("window"));
			return;
		};

		let (w, h) = container_size(&canvas, height);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx = match context_2d(&canvas) {
			Ok(ctx) => ctx,
			Err(err) => {
				warn!("skill-cloud: {err}");
				return;
			}
		};

		let mut state = SkillCloudState::new(data.get_untracked(), config.clone(), w, h);
		state.set_active_category(active_category.get_untracked());
		*context_init.borrow_mut() = Some(CloudContext {
			state,
			ctx,
			theme: theme.clone(),
			last_frame: None,
		});
		info!("skill-cloud: mounted at {w}x{h}");

		// Lay out on first visibility; without observer support, right away.
		let context_seen = context_init.clone();
		*observe_cb.borrow_mut() = Some(Closure::new(
			move |entries: js_sys::Array, observer: IntersectionObserver| {
				let visible = entries.iter().any(|entry| {
					entry
						.dyn_into::<IntersectionObserverEntry>()
						.is_ok_and(|e| e.is_intersecting())
				});
				if !visible {
					return;
				}
				if let Some(ref mut c) = *context_seen.borrow_mut() {
					c.state.set_visible(&CanvasMeasure::new(&c.ctx));
				}
				observer.disconnect();
			},
		));
		let observer = observe_cb
			.borrow()
			.as_ref()
			.and_then(|cb| IntersectionObserver::new(cb.as_ref().unchecked_ref()).ok());
		match observer {
			Some(observer) => observer.observe(&canvas),
			None => {
				if let Some(ref mut c) = *context_init.borrow_mut() {
					c.state.set_visible(&CanvasMeasure::new(&c.ctx));
				}
			}
		}

		let (context_resize, canvas_resize) = (context_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let (nw, nh) = container_size(&canvas_resize, height);
			if let Some(ref mut c) = *context_resize.borrow_mut() {
				c.state.request_resize(nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (context_anim, animate_inner, canvas_anim) =
			(context_init.clone(), animate_init.clone(), canvas.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				let now = js_sys::Date::now();
				let dt = c
					.last_frame
					.map_or(FIRST_FRAME_DT, |last| ((now - last) / 1000.0).clamp(0.0, MAX_FRAME_DT));
				c.last_frame = Some(now);

				c.state.tick(dt, &CanvasMeasure::new(&c.ctx));

				// The canvas element follows the state once a resize lands.
				let size = c.state.canvas();
				if canvas_anim.width() != size.width as u32 || canvas_anim.height() != size.height as u32 {
					canvas_anim.set_width(size.width as u32);
					canvas_anim.set_height(size.height as u32);
				}
				render::render(&c.state, &c.ctx, &c.theme);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Some(win) = web_sys::window() {
					let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let context_data = context.clone();
	Effect::new(move |_| {
		let data = data.get();
		if let Some(ref mut c) = *context_data.borrow_mut() {
			if c.state.data() != &data {
				info!("skill-cloud: dataset changed ({} skills)", data.skills.len());
				c.state.set_data(data, &CanvasMeasure::new(&c.ctx));
			}
		}
	});

	let context_filter = context.clone();
	Effect::new(move |_| {
		let category = active_category.get();
		if let Some(ref mut c) = *context_filter.borrow_mut() {
			c.state.set_active_category(category);
		}
	});

	let context_mm = context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		let (x, y) = pointer_position(&canvas, &ev);
		if let Some(ref mut c) = *context_mm.borrow_mut() {
			c.state.hover_at(x, y);
			set_cursor(&canvas, c.state.word_at_position(x, y).is_some());
		}
	};

	let context_ml = context.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_ml.borrow_mut() {
			c.state.set_hover(None);
		}
		if let Some(canvas) = canvas_ref.get_untracked() {
			set_cursor(&canvas, false);
		}
	};

	let context_click = context.clone();
	let on_click = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		let (x, y) = pointer_position(&canvas, &ev);
		let selected = context_click
			.borrow()
			.as_ref()
			.and_then(|c| c.state.select_at(x, y));
		if let (Some(id), Some(on_select)) = (selected, on_select) {
			info!("skill-cloud: selected {id}");
			on_select.run(id);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="skill-cloud-canvas"
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
			on:click=on_click
			style="display: block; cursor: default;"
		/>
	}
}
