//! Canvas rendering for the skill cloud.
//!
//! Drawing happens in passes for correct z-ordering:
//! 1. Background (screen space)
//! 2. Category guide lines between current word positions
//! 3. Filtered-out words, then active words, then the hovered word on top
//!
//! When there is nothing to lay out yet (or nothing fit), a placeholder
//! message replaces passes 2 and 3.

use web_sys::CanvasRenderingContext2d;

use super::config::GuideConfig;
use super::layout::{ApproxMeasure, TextMeasure};
use super::metrics::FontWeight;
use super::state::{Phase, SkillCloudState};
use super::theme::Theme;
use super::tween::smooth_step;
use super::word::{FontFamily, font_shorthand};

/// Measures text with the canvas' own font metrics.
pub struct CanvasMeasure<'a> {
	ctx: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasMeasure<'a> {
	/// Measures with the fonts of `ctx`.
	pub fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
		Self { ctx }
	}
}

impl TextMeasure for CanvasMeasure<'_> {
	fn text_width(&self, text: &str, size: f64, weight: FontWeight, family: FontFamily) -> f64 {
		self.ctx.set_font(&font_shorthand(weight, size, family));
		match self.ctx.measure_text(text) {
			Ok(metrics) => metrics.width(),
			Err(_) => ApproxMeasure::default().text_width(text, size, weight, family),
		}
	}
}

/// Renders the complete cloud to the canvas.
pub fn render(state: &SkillCloudState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	draw_background(state, ctx, theme);

	match state.phase() {
		Phase::Loading => draw_placeholder(state, ctx, theme, "Loading skills…"),
		Phase::Empty => draw_placeholder(state, ctx, theme, "No skills to show yet"),
		Phase::Entering | Phase::Ready => {
			ctx.save();
			let canvas = state.canvas();
			let _ = ctx.translate(canvas.width / 2.0, canvas.height / 2.0);
			let guides = &state.config().guides;
			if guides.enabled {
				draw_guides(state, ctx, theme, guides);
			}
			draw_words(state, ctx, theme);
			ctx.restore();
		}
	}
}

fn draw_background(state: &SkillCloudState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let canvas = state.canvas();
	ctx.set_fill_style_str(&theme.background.to_css());
	ctx.fill_rect(0.0, 0.0, canvas.width, canvas.height);
}

fn draw_placeholder(state: &SkillCloudState, ctx: &CanvasRenderingContext2d, theme: &Theme, text: &str) {
	let canvas = state.canvas();
	ctx.set_fill_style_str(&theme.placeholder.to_css());
	ctx.set_font(&font_shorthand(FontWeight::Medium, 16.0, FontFamily::Sans));
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	let _ = ctx.fill_text(text, canvas.width / 2.0, canvas.height / 2.0);
}

fn draw_guides(state: &SkillCloudState, ctx: &CanvasRenderingContext2d, theme: &Theme, config: &GuideConfig) {
	// Settled: every line sits at base alpha and width.
	let settled = state.guides.is_settled();
	let max_t = if settled { 0.0 } else { smooth_step(state.guides.max_intensity()) };

	for link in state.links() {
		let (Some(a), Some(b)) = (state.pose(link.a), state.pose(link.b)) else {
			continue;
		};
		let edge_t = if settled {
			0.0
		} else {
			smooth_step(state.guides.intensity(&link.category))
		};

		let (alpha, width) = if edge_t > 0.01 {
			(
				config.base_alpha + (config.highlight_alpha - config.base_alpha) * edge_t,
				config.line_width + (config.highlight_width - config.line_width) * edge_t,
			)
		} else if max_t > 0.01 {
			(
				config.base_alpha + (config.dim_alpha - config.base_alpha) * max_t,
				config.line_width,
			)
		} else {
			(config.base_alpha, config.line_width)
		};

		// Fade with the words so lines don't appear before their endpoints.
		let alpha = alpha * a.opacity.min(b.opacity).clamp(0.0, 1.0);
		if alpha < 0.005 {
			continue;
		}

		ctx.set_stroke_style_str(&theme.guide.with_alpha(alpha).to_css());
		ctx.set_line_width(width);
		ctx.begin_path();
		ctx.move_to(a.x, a.y);
		ctx.line_to(b.x, b.y);
		ctx.stroke();
	}
}

fn draw_words(state: &SkillCloudState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");

	let words = state.words();
	let hovered = state.hovered();
	let mut order: Vec<usize> = (0..words.len()).filter(|&i| words[i].placed).collect();
	// Inactive below active, hovered last.
	order.sort_by_key(|&i| (Some(i) == hovered, words[i].is_active));

	for i in order {
		let (Some(pose), Some(style)) = (state.pose(i), state.style(i)) else {
			continue;
		};
		if pose.opacity <= 0.001 || pose.scale <= 0.001 {
			continue;
		}
		let word = &words[i];
		let base = theme.palette.resolve_str(&word.color_token);
		let color = style.color(base, theme.background);

		ctx.set_global_alpha(pose.opacity.clamp(0.0, 1.0));
		ctx.set_fill_style_str(&color.to_css());
		ctx.set_font(&word.font(pose.scale));
		let _ = ctx.fill_text(&word.text, pose.x, pose.y);
	}
	ctx.set_global_alpha(1.0);
}
