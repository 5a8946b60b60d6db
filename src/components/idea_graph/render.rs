use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::geometry::{CubicBezier, DEFAULT_CURVATURE, Point, edge_anchor};
use super::state::CanvasState;
use super::store::GraphStore;
use super::types::{IdeaNode, NodeStatus};

fn status_color(status: NodeStatus) -> &'static str {
	match status {
		NodeStatus::Seed => "#8c7b5a",
		NodeStatus::Sprout => "#5fb36b",
		NodeStatus::Flowering => "#d178c0",
		NodeStatus::Fruit => "#e8a33c",
	}
}

fn center(node: &IdeaNode) -> Point {
	Point::new(node.x, node.y)
}

fn trace(ctx: &CanvasRenderingContext2d, curve: &CubicBezier) {
	ctx.begin_path();
	ctx.move_to(curve.start.x, curve.start.y);
	ctx.bezier_curve_to(
		curve.control1.x,
		curve.control1.y,
		curve.control2.x,
		curve.control2.y,
		curve.end.x,
		curve.end.y,
	);
	ctx.stroke();
}

pub fn render(state: &CanvasState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str("#14161f");
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.camera.offset.x, state.camera.offset.y);
	let _ = ctx.scale(state.camera.scale, state.camera.scale);
	draw_edges(state, ctx);
	draw_spawn_preview(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
}

fn draw_edges(state: &CanvasState, ctx: &CanvasRenderingContext2d) {
	let k = state.camera.scale;
	ctx.set_stroke_style_str("rgba(170, 190, 255, 0.55)");
	ctx.set_line_width(1.5 / k);

	for edge in state.store.edges() {
		let (Some(source), Some(target)) =
			(state.store.node(&edge.source), state.store.node(&edge.target))
		else {
			continue;
		};
		let (from, to) = (center(source), center(target));
		if from.distance(to) <= source.radius + target.radius {
			continue;
		}
		let start = edge_anchor(from, source.radius, to);
		let end = edge_anchor(to, target.radius, from);
		trace(ctx, &CubicBezier::connecting(start, end, DEFAULT_CURVATURE));
	}
}

fn draw_spawn_preview(state: &CanvasState, ctx: &CanvasRenderingContext2d) {
	let Some(drag) = state.controller.spawn_preview() else {
		return;
	};
	let Some(source) = state.store.node(&drag.source_id) else {
		return;
	};
	let k = state.camera.scale;
	let start = edge_anchor(center(source), source.radius, drag.current);
	let curve = CubicBezier::connecting(start, drag.current, DEFAULT_CURVATURE);
	let (dash, gap) = (8.0 / k, 5.0 / k);
	let period = dash + gap;
	// Pattern is anchored at the pointer end and flows toward it.
	let offset = (curve.approximate_length() - state.flow_time * 40.0 / k) % period;

	ctx.set_stroke_style_str("rgba(255, 255, 255, 0.8)");
	ctx.set_line_width(1.5 / k);
	let _ = ctx.set_line_dash(&js_sys::Array::of2(
		&JsValue::from_f64(dash),
		&JsValue::from_f64(gap),
	));
	ctx.set_line_dash_offset(offset);
	trace(ctx, &curve);
	let _ = ctx.set_line_dash(&js_sys::Array::new());

	ctx.begin_path();
	let _ = ctx.arc(drag.current.x, drag.current.y, 4.0 / k, 0.0, 2.0 * PI);
	ctx.set_fill_style_str("rgba(255, 255, 255, 0.8)");
	ctx.fill();
}

fn draw_nodes(state: &CanvasState, ctx: &CanvasRenderingContext2d) {
	let k = state.camera.scale;
	let selected = state.controller.selected();

	for node in state.store.nodes() {
		ctx.set_global_alpha(0.55 + 0.45 * node.energy.clamp(0.0, 1.0));
		ctx.begin_path();
		let _ = ctx.arc(node.x, node.y, node.radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(status_color(node.status));
		ctx.fill();
		ctx.set_global_alpha(1.0);

		if selected == Some(node.id.as_str()) {
			ctx.begin_path();
			let _ = ctx.arc(node.x, node.y, node.radius + 3.0 / k, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str("rgba(255, 255, 255, 0.9)");
			ctx.set_line_width(2.0 / k);
			ctx.stroke();
		}
	}
}
