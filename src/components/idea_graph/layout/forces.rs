use std::f64::consts::TAU;

use super::super::geometry::{EPSILON, Point};
use super::{LayoutConfig, PhysicsNode};

/// Deterministic direction for coincident pairs so they still separate.
fn fallback_direction(i: usize, j: usize) -> Point {
	let angle = ((i as f64) * 0.618_034 + (j as f64) * 0.414_214) * TAU;
	Point::new(angle.cos(), angle.sin())
}

fn direction_between(delta: Point, distance: f64, i: usize, j: usize) -> Point {
	if distance > EPSILON && distance.is_finite() {
		delta / distance
	} else {
		fallback_direction(i, j)
	}
}

/// How a correction between two nodes is split. Pinned nodes take none of it.
fn split(a: &PhysicsNode, b: &PhysicsNode) -> (f64, f64) {
	match (a.is_pinned(), b.is_pinned()) {
		(true, true) => (0.0, 0.0),
		(true, false) => (0.0, 1.0),
		(false, true) => (1.0, 0.0),
		(false, false) => {
			let (ra, rb) = (a.radius * a.radius, b.radius * b.radius);
			let total = ra + rb;
			if total > EPSILON {
				(rb / total, ra / total)
			} else {
				(0.5, 0.5)
			}
		}
	}
}

/// Position a node is heading to before this tick's integration.
fn predicted(node: &PhysicsNode) -> Point {
	match node.pin() {
		Some(pin) => pin,
		None => node.position + node.velocity,
	}
}

/// Inverse-distance many-body force. Negative strength repels.
pub(super) fn apply_repulsion(nodes: &mut [PhysicsNode], config: &LayoutConfig, alpha: f64) {
	let strength = config.charge_strength * alpha;
	if strength == 0.0 {
		return;
	}
	let (floor, ceiling) = (
		config.distance_min.max(EPSILON),
		config.distance_max.max(config.distance_min.max(EPSILON)),
	);

	let node_count = nodes.len();
	for i in 0..node_count {
		for j in (i + 1)..node_count {
			let delta = nodes[j].position - nodes[i].position;
			let raw = delta.length();
			let direction = direction_between(delta, raw, i, j);
			let distance = if raw.is_finite() { raw.clamp(floor, ceiling) } else { ceiling };
			let push = direction * (strength / distance);

			nodes[i].velocity += push;
			nodes[j].velocity -= push;
		}
	}
}

/// Springs every resolved link toward `link_distance`.
pub(super) fn apply_links(
	nodes: &mut [PhysicsNode],
	links: &[(usize, usize)],
	config: &LayoutConfig,
	alpha: f64,
) {
	let strength = config.link_strength * alpha;
	if strength == 0.0 {
		return;
	}

	for &(source, target) in links {
		if source == target || source >= nodes.len() || target >= nodes.len() {
			continue;
		}
		let delta = nodes[target].position - nodes[source].position;
		let distance = delta.length();
		let direction = direction_between(delta, distance, source, target);
		let stretch = (distance.max(EPSILON) - config.link_distance) * strength;
		let (w_source, w_target) = split(&nodes[source], &nodes[target]);
		let correction = direction * stretch;

		nodes[source].velocity += correction * w_source;
		nodes[target].velocity -= correction * w_target;
	}
}

/// Iteratively pushes apart pairs closer than their radii plus padding.
pub(super) fn resolve_collisions(nodes: &mut [PhysicsNode], config: &LayoutConfig) {
	if config.collision_strength <= 0.0 {
		return;
	}

	let node_count = nodes.len();
	for _ in 0..config.collision_iterations {
		for i in 0..node_count {
			for j in (i + 1)..node_count {
				let (w_i, w_j) = split(&nodes[i], &nodes[j]);
				if w_i == 0.0 && w_j == 0.0 {
					continue;
				}
				let min_distance = nodes[i].radius + nodes[j].radius + config.collision_padding;
				let delta = predicted(&nodes[j]) - predicted(&nodes[i]);
				let distance = delta.length();
				if distance >= min_distance {
					continue;
				}

				let direction = direction_between(delta, distance, i, j);
				let overlap = (min_distance - distance) * config.collision_strength;
				nodes[i].velocity -= direction * (overlap * w_i);
				nodes[j].velocity += direction * (overlap * w_j);
			}
		}
	}
}

/// Weak pull of every free node toward `center`.
pub(super) fn apply_centering(
	nodes: &mut [PhysicsNode],
	center: Point,
	config: &LayoutConfig,
	alpha: f64,
) {
	let strength = config.center_strength * alpha;
	if strength == 0.0 {
		return;
	}
	for node in nodes.iter_mut().filter(|node| !node.is_pinned()) {
		node.velocity += (center - node.position) * strength;
	}
}
