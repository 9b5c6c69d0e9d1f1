use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::{CanvasState, GRID_GAP, NODE_HEIGHT, NODE_WIDTH};
use crate::model::{Edge, GraphStore, Node};

const BACKGROUND: &str = "#f8f8f8";
const GRID_DOT: &str = "#c8c8c8";
const EDGE_COLOR: &str = "rgba(120, 120, 140, 0.9)";
const EDGE_HIGHLIGHT: &str = "rgba(0, 123, 255, 1)";
const NODE_BORDER: &str = "#1a192b";
const NODE_RADIUS: f64 = 4.0;

pub fn render(state: &CanvasState, store: &GraphStore, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	draw_grid(state, ctx);

	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	for edge in store.edges() {
		draw_edge(state, store, edge, ctx);
	}
	draw_connect_preview(state, store, ctx);
	for node in store.nodes() {
		draw_node(state, node, ctx);
	}
	ctx.restore();
}

/// Dots every `GRID_GAP` graph units, drawn in screen space.
fn draw_grid(state: &CanvasState, ctx: &CanvasRenderingContext2d) {
	let gap = GRID_GAP * state.transform.k;
	if gap < 4.0 {
		return;
	}
	let size = state.transform.k.clamp(0.5, 2.0);
	let (offset_x, offset_y) = (state.transform.x.rem_euclid(gap), state.transform.y.rem_euclid(gap));

	ctx.set_fill_style_str(GRID_DOT);
	let mut x = offset_x;
	while x < state.width {
		let mut y = offset_y;
		while y < state.height {
			ctx.fill_rect(x - size / 2.0, y - size / 2.0, size, size);
			y += gap;
		}
		x += gap;
	}
}

fn bottom_center(node: &Node) -> (f64, f64) {
	(node.position.x + NODE_WIDTH / 2.0, node.position.y + NODE_HEIGHT)
}

fn top_center(node: &Node) -> (f64, f64) {
	(node.position.x + NODE_WIDTH / 2.0, node.position.y)
}

fn draw_edge(state: &CanvasState, store: &GraphStore, edge: &Edge, ctx: &CanvasRenderingContext2d) {
	let (Some(source), Some(target)) = (store.node(&edge.source), store.node(&edge.target)) else {
		return;
	};
	let highlighted = state.is_hovered(&source.id) || state.is_hovered(&target.id);
	let color = if highlighted { EDGE_HIGHLIGHT } else { EDGE_COLOR };
	let (width, k) = (if highlighted { 2.0 } else { 1.2 }, state.transform.k.max(0.5));

	ctx.set_stroke_style_str(color);
	ctx.set_line_width(width / k);
	draw_arrow(ctx, bottom_center(source), top_center(target), color, 8.0 / k);
}

fn draw_connect_preview(state: &CanvasState, store: &GraphStore, ctx: &CanvasRenderingContext2d) {
	let Some(draft) = &state.connect else {
		return;
	};
	let Some(source) = store.node(&draft.source) else {
		return;
	};
	let k = state.transform.k;
	let dash = 6.0 / k;

	ctx.set_stroke_style_str(EDGE_HIGHLIGHT);
	ctx.set_line_width(1.5 / k);
	let _ = ctx.set_line_dash(&js_sys::Array::of2(
		&JsValue::from_f64(dash),
		&JsValue::from_f64(dash / 2.0),
	));
	let (x1, y1) = bottom_center(source);
	ctx.begin_path();
	ctx.move_to(x1, y1);
	ctx.line_to(draft.x, draft.y);
	ctx.stroke();
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_arrow(
	ctx: &CanvasRenderingContext2d,
	(x1, y1): (f64, f64),
	(x2, y2): (f64, f64),
	color: &str,
	arrow_size: f64,
) {
	let (dx, dy) = (x2 - x1, y2 - y1);
	let dist = dx.hypot(dy);
	if dist < 0.001 {
		return;
	}
	let (ux, uy) = (dx / dist, dy / dist);

	ctx.begin_path();
	ctx.move_to(x1, y1);
	ctx.line_to(x2 - ux * arrow_size, y2 - uy * arrow_size);
	ctx.stroke();

	ctx.set_fill_style_str(color);
	let (back_x, back_y) = (x2 - ux * arrow_size, y2 - uy * arrow_size);
	let (px, py) = (-uy * arrow_size * 0.5, ux * arrow_size * 0.5);
	ctx.begin_path();
	ctx.move_to(x2, y2);
	ctx.line_to(back_x + px, back_y + py);
	ctx.line_to(back_x - px, back_y - py);
	ctx.close_path();
	ctx.fill();
}

fn rounded_rect(ctx: &CanvasRenderingContext2d, x: f64, y: f64, w: f64, h: f64, r: f64) {
	ctx.begin_path();
	ctx.move_to(x + r, y);
	ctx.line_to(x + w - r, y);
	let _ = ctx.arc(x + w - r, y + r, r, -PI / 2.0, 0.0);
	ctx.line_to(x + w, y + h - r);
	let _ = ctx.arc(x + w - r, y + h - r, r, 0.0, PI / 2.0);
	ctx.line_to(x + r, y + h);
	let _ = ctx.arc(x + r, y + h - r, r, PI / 2.0, PI);
	ctx.line_to(x, y + r);
	let _ = ctx.arc(x + r, y + r, r, PI, PI * 1.5);
	ctx.close_path();
}

fn draw_node(state: &CanvasState, node: &Node, ctx: &CanvasRenderingContext2d) {
	let (x, y) = (node.position.x, node.position.y);
	let hovered = state.is_hovered(&node.id);

	rounded_rect(ctx, x, y, NODE_WIDTH, NODE_HEIGHT, NODE_RADIUS);
	ctx.set_fill_style_str(node.marker.color());
	ctx.fill();
	ctx.set_stroke_style_str(if hovered { EDGE_HIGHLIGHT } else { NODE_BORDER });
	ctx.set_line_width(if hovered { 2.0 } else { 1.0 });
	ctx.stroke();

	ctx.set_fill_style_str(NODE_BORDER);
	ctx.set_text_align("center");
	let center = x + NODE_WIDTH / 2.0;
	match node.visible_spouse() {
		Some(spouse) => {
			ctx.set_font("12px sans-serif");
			let _ = ctx.fill_text(&node.label, center, y + 18.0);
			ctx.set_font("11px sans-serif");
			let _ = ctx.fill_text(&format!("& {}", spouse), center, y + 34.0);
		}
		None => {
			ctx.set_font("12px sans-serif");
			let _ = ctx.fill_text(&node.label, center, y + NODE_HEIGHT / 2.0 + 4.0);
		}
	}

	ctx.set_font("9px sans-serif");
	ctx.set_text_align("right");
	let _ = ctx.fill_text(node.gender.as_str(), x + NODE_WIDTH - 5.0, y + 11.0);
}
