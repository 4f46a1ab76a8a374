//! Canvas rendering for the schema graph.
//!
//! Drawing happens in passes for correct z-ordering:
//! 1. Background (screen space)
//! 2. Plain edges, then highlighted edges on top (world space)
//! 3. Nodes, highlight rings, then labels

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::scale::{ScaleConfig, ScaledValues};
use super::state::GraphState;
use super::theme::{Color, Theme};

fn smooth_step(t: f64) -> f64 {
	t * t * (3.0 - 2.0 * t)
}

/// Renders the complete graph to the canvas.
pub fn render(state: &GraphState, ctx: &CanvasRenderingContext2d, config: &ScaleConfig, theme: &Theme) {
	let scale = ScaledValues::new(config, state.transform.k);

	ctx.set_fill_style_str(&theme.background.to_css());
	ctx.fill_rect(0.0, 0.0, state.width, state.height);

	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);

	draw_edges(state, ctx, &scale, theme);
	draw_nodes(state, ctx, &scale, theme);

	ctx.restore();
}

fn draw_edges(state: &GraphState, ctx: &CanvasRenderingContext2d, scale: &ScaledValues, theme: &Theme) {
	let base_width = scale.edge_width(theme.edge.width);
	let positions = state.positions();

	// Highlighted edges are drawn in a second pass so they sit on top.
	for highlighted_pass in [false, true] {
		for &(src, tgt) in state.edges() {
			let t = smooth_step(state.highlight.edge_intensity(src, tgt));
			if (t > 0.01) != highlighted_pass {
				continue;
			}
			let (Some(&from), Some(&to)) = (positions.get(&src), positions.get(&tgt)) else {
				continue;
			};
			let line = theme.edge.color.lerp(theme.edge.highlight_color, t);
			let arrow = theme.edge.color.lerp(theme.edge.highlight_arrow_color, t);
			let width = base_width * (1.0 + 0.3 * t);
			if src == tgt {
				draw_loop(ctx, scale, from, line, width);
			} else {
				draw_edge(ctx, scale, from, to, line, arrow, width);
			}
		}
	}
}

/// Self loop: a circle touching the node on its upper right.
fn draw_loop(
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	(x, y): (f64, f64),
	line: Color,
	width: f64,
) {
	let r = scale.node_radius * 0.8;
	let d = scale.node_radius + r * 0.5;
	ctx.set_stroke_style_str(&line.to_css());
	ctx.set_line_width(width);
	ctx.begin_path();
	let _ = ctx.arc(x + d * 0.7, y - d * 0.7, r, 0.0, 2.0 * PI);
	ctx.stroke();
}

fn draw_edge(
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	(x1, y1): (f64, f64),
	(x2, y2): (f64, f64),
	line: Color,
	arrow: Color,
	width: f64,
) {
	let (dx, dy) = (x2 - x1, y2 - y1);
	let dist = (dx * dx + dy * dy).sqrt();
	if dist < scale.node_radius * 2.0 {
		return;
	}
	let (ux, uy) = (dx / dist, dy / dist);

	ctx.set_stroke_style_str(&line.to_css());
	ctx.set_line_width(width);
	ctx.begin_path();
	ctx.move_to(x1 + ux * scale.node_radius, y1 + uy * scale.node_radius);
	ctx.line_to(
		x2 - ux * (scale.node_radius + scale.arrow_size),
		y2 - uy * (scale.node_radius + scale.arrow_size),
	);
	ctx.stroke();

	let (tip_x, tip_y) = (x2 - ux * scale.node_radius, y2 - uy * scale.node_radius);
	let (back_x, back_y) = (tip_x - ux * scale.arrow_size, tip_y - uy * scale.arrow_size);
	let half = (scale.arrow_size * 0.6).max(width * 0.8);
	let (px, py) = (-uy * half, ux * half);

	ctx.set_fill_style_str(&arrow.to_css());
	ctx.begin_path();
	ctx.move_to(tip_x, tip_y);
	ctx.line_to(back_x + px, back_y + py);
	ctx.line_to(back_x - px, back_y - py);
	ctx.close_path();
	ctx.fill();
}

fn draw_nodes(state: &GraphState, ctx: &CanvasRenderingContext2d, scale: &ScaledValues, theme: &Theme) {
	let selected = state.highlight.selected();

	state.graph.visit_nodes(|node| {
		let (x, y) = (node.x() as f64, node.y() as f64);
		let idx = node.index();
		let fill = if selected == Some(idx) {
			theme.node.selected_color
		} else {
			theme.node.color
		};

		ctx.begin_path();
		let _ = ctx.arc(x, y, scale.node_radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&fill.to_css());
		ctx.fill();

		let ring_t = smooth_step(state.highlight.node_intensity(idx));
		if ring_t > 0.01 {
			let ring = theme.node.ring_color;
			ctx.begin_path();
			let _ = ctx.arc(x, y, scale.node_radius + scale.ring_offset, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str(&ring.with_alpha(ring.a * ring_t).to_css());
			ctx.set_line_width(scale.ring_width);
			ctx.stroke();
		}
	});

	// Labels last so edges and rings never cover them.
	ctx.set_font(&scale.label_font);
	ctx.set_text_align("center");
	ctx.set_text_baseline("bottom");
	ctx.set_fill_style_str(&theme.node.label_color.to_css());
	state.graph.visit_nodes(|node| {
		let (x, y) = (node.x() as f64, node.y() as f64);
		let _ = ctx.fill_text(
			node.data.user_data.element.id(),
			x,
			y - scale.node_radius - scale.ring_offset * 2.0,
		);
	});
}
