//! Force-directed layout over a shadow copy of the graph.
//!
//! The engine keeps its own [`PhysicsNode`] per canonical node so velocity
//! survives graph refreshes. Each tick applies, in order: many-body repulsion,
//! link springs, iterative collision, centering, then integration. Pinned
//! nodes (dragged, or `Fruit`) are held exactly at their pin.

mod forces;

use std::collections::HashMap;

use log::{debug, warn};

use super::geometry::Point;
use super::types::{IdeaEdge, IdeaNode, NodeId};

/// Tunables for the simulation. A strength of zero disables its force.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
	/// Alpha after a reheat.
	pub alpha_start: f64,
	/// Alpha floor; reaching it cools the engine.
	pub alpha_min: f64,
	/// Fraction of alpha lost per tick.
	pub alpha_decay: f64,
	/// Fraction of velocity lost per tick.
	pub velocity_decay: f64,
	/// Many-body strength; negative repels.
	pub charge_strength: f64,
	/// Repulsion distance floor.
	pub distance_min: f64,
	/// Repulsion distance ceiling.
	pub distance_max: f64,
	/// Rest length of a link.
	pub link_distance: f64,
	/// Link spring strength.
	pub link_strength: f64,
	/// Extra gap kept between colliding nodes.
	pub collision_padding: f64,
	/// Fraction of an overlap resolved per iteration.
	pub collision_strength: f64,
	/// Collision relaxation passes per tick.
	pub collision_iterations: usize,
	/// Pull toward the layout center.
	pub center_strength: f64,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			alpha_start: 1.0,
			alpha_min: 0.001,
			alpha_decay: 0.0228,
			velocity_decay: 0.4,
			charge_strength: -300.0,
			distance_min: 10.0,
			distance_max: 600.0,
			link_distance: 140.0,
			link_strength: 0.3,
			collision_padding: 8.0,
			collision_strength: 0.7,
			collision_iterations: 3,
			center_strength: 0.02,
		}
	}
}

/// Engine lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutPhase {
	/// No nodes.
	Idle,
	/// Ticking.
	Running,
	/// Alpha reached its floor; waiting for a reheat.
	Cooling,
}

/// Per-node simulation state mirrored from the canonical record.
#[derive(Clone, Debug, PartialEq)]
pub struct PhysicsNode {
	/// Same id as the canonical node.
	pub id: NodeId,
	/// Current simulated position.
	pub position: Point,
	/// Velocity carried between ticks.
	pub velocity: Point,
	/// Collision radius.
	pub radius: f64,
	drag_pin: Option<Point>,
	status_pin: Option<Point>,
}

impl PhysicsNode {
	fn at(id: impl Into<NodeId>, position: Point, radius: f64) -> Self {
		Self {
			id: id.into(),
			position,
			velocity: Point::ZERO,
			radius,
			drag_pin: None,
			status_pin: None,
		}
	}

	/// Where the node is held, if anywhere. A drag wins over a status pin.
	pub fn pin(&self) -> Option<Point> {
		self.drag_pin.or(self.status_pin)
	}

	/// Whether forces are ignored for this node.
	pub fn is_pinned(&self) -> bool {
		self.pin().is_some()
	}
}

/// A position the engine moved a node to during one tick.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionUpdate {
	/// Node id.
	pub id: NodeId,
	/// New world-space x.
	pub x: f64,
	/// New world-space y.
	pub y: f64,
}

/// What the interaction layer needs from a layout engine.
pub trait LayoutControl {
	/// Holds a node at `(x, y)` until [`LayoutControl::unpin`].
	fn pin_position(&mut self, id: &str, x: f64, y: f64);
	/// Releases a drag pin.
	fn unpin(&mut self, id: &str);
	/// Restores full energy so the layout settles again.
	fn reheat(&mut self);
}

pub struct ForceLayout {
	config: LayoutConfig,
	nodes: Vec<PhysicsNode>,
	index_by_id: HashMap<NodeId, usize>,
	edges: Vec<(NodeId, NodeId)>,
	links: Vec<(usize, usize)>,
	center: Point,
	alpha: f64,
	phase: LayoutPhase,
	paused: bool,
}

impl Default for ForceLayout {
	fn default() -> Self {
		Self::new(LayoutConfig::default())
	}
}

impl ForceLayout {
	pub fn new(config: LayoutConfig) -> Self {
		Self {
			alpha: config.alpha_start,
			config,
			nodes: Vec::new(),
			index_by_id: HashMap::new(),
			edges: Vec::new(),
			links: Vec::new(),
			center: Point::ZERO,
			phase: LayoutPhase::Idle,
			paused: false,
		}
	}

	pub fn config(&self) -> &LayoutConfig {
		&self.config
	}

	pub fn alpha(&self) -> f64 {
		self.alpha
	}

	pub fn phase(&self) -> LayoutPhase {
		self.phase
	}

	pub fn is_paused(&self) -> bool {
		self.paused
	}

	/// Whether the driver should schedule another tick.
	pub fn is_running(&self) -> bool {
		self.phase == LayoutPhase::Running && !self.paused
	}

	pub fn nodes(&self) -> &[PhysicsNode] {
		&self.nodes
	}

	pub fn node(&self, id: &str) -> Option<&PhysicsNode> {
		self.index_by_id.get(id).map(|&index| &self.nodes[index])
	}

	/// Links whose endpoints both exist, as `(source, target)` ids.
	pub fn active_links(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
		self.links
			.iter()
			.map(|&(source, target)| (self.nodes[source].id.as_str(), self.nodes[target].id.as_str()))
	}

	/// World point the centering force pulls toward.
	pub fn set_center(&mut self, center: Point) {
		if center.is_finite() {
			self.center = center;
		}
	}

	/// Reconciles shadows with the canonical node list.
	///
	/// Surviving nodes keep position and velocity, new ones start at their
	/// canonical position at rest, missing ones are dropped.
	pub fn set_nodes(&mut self, nodes: &[IdeaNode]) {
		let mut previous: HashMap<NodeId, PhysicsNode> = self
			.nodes
			.drain(..)
			.map(|node| (node.id.clone(), node))
			.collect();
		self.index_by_id.clear();

		let mut added = 0usize;
		for node in nodes {
			if self.index_by_id.contains_key(&node.id) {
				continue;
			}
			let mut shadow = match previous.remove(&node.id) {
				Some(shadow) => shadow,
				None => {
					added += 1;
					let seed = Point::new(node.x, node.y);
					let seed = if seed.is_finite() { seed } else { self.center };
					PhysicsNode::at(node.id.clone(), seed, node.radius)
				}
			};
			shadow.radius = node.radius;
			shadow.status_pin = match (node.status.is_pinned(), shadow.status_pin) {
				(true, Some(held)) => Some(held),
				(true, None) => Some(shadow.position),
				(false, _) => None,
			};
			self.index_by_id.insert(node.id.clone(), self.nodes.len());
			self.nodes.push(shadow);
		}

		if added > 0 || !previous.is_empty() {
			debug!(
				"layout: {} nodes ({} added, {} dropped)",
				self.nodes.len(),
				added,
				previous.len()
			);
		}

		self.resolve_links();
		if self.nodes.is_empty() {
			self.phase = LayoutPhase::Idle;
		} else if self.phase == LayoutPhase::Idle {
			self.alpha = self.config.alpha_start;
			self.phase = LayoutPhase::Running;
		}
	}

	/// Replaces the edge set. Edges with a missing endpoint are ignored.
	pub fn set_edges(&mut self, edges: &[IdeaEdge]) {
		self.edges = edges
			.iter()
			.map(|edge| (edge.source.clone(), edge.target.clone()))
			.collect();
		self.resolve_links();
	}

	fn resolve_links(&mut self) {
		self.links = self
			.edges
			.iter()
			.filter_map(|(source, target)| {
				let source = *self.index_by_id.get(source)?;
				let target = *self.index_by_id.get(target)?;
				(source != target).then_some((source, target))
			})
			.collect();
	}

	pub fn pin_position(&mut self, id: &str, x: f64, y: f64) {
		let pin = Point::new(x, y);
		if !pin.is_finite() {
			warn!("layout: ignoring non-finite pin for {id}");
			return;
		}
		let Some(&index) = self.index_by_id.get(id) else {
			return;
		};
		let node = &mut self.nodes[index];
		node.drag_pin = Some(pin);
		node.position = pin;
		node.velocity = Point::ZERO;
	}

	/// Releases a drag pin. A status-pinned node stays where it was dropped.
	pub fn unpin(&mut self, id: &str) {
		let Some(&index) = self.index_by_id.get(id) else {
			return;
		};
		let node = &mut self.nodes[index];
		if let Some(dropped) = node.drag_pin.take() {
			if node.status_pin.is_some() {
				node.status_pin = Some(dropped);
			}
		}
	}

	pub fn reheat(&mut self) {
		self.alpha = self.config.alpha_start;
		if self.phase == LayoutPhase::Cooling {
			debug!("layout: reheated");
			self.phase = LayoutPhase::Running;
		}
	}

	pub fn pause(&mut self) {
		if !self.paused {
			debug!("layout: paused");
		}
		self.paused = true;
	}

	pub fn resume(&mut self) {
		if self.paused {
			debug!("layout: resumed");
		}
		self.paused = false;
	}

	/// Advances one step and returns the nodes that moved.
	///
	/// Does nothing unless [`ForceLayout::is_running`]. Pinned nodes are never
	/// reported; their position is owned by whoever pinned them.
	pub fn tick(&mut self) -> Vec<PositionUpdate> {
		if !self.is_running() {
			return Vec::new();
		}

		let alpha = self.alpha;
		forces::apply_repulsion(&mut self.nodes, &self.config, alpha);
		forces::apply_links(&mut self.nodes, &self.links, &self.config, alpha);
		forces::resolve_collisions(&mut self.nodes, &self.config);
		forces::apply_centering(&mut self.nodes, self.center, &self.config, alpha);
		let updates = self.integrate();

		self.alpha *= 1.0 - self.config.alpha_decay;
		if self.alpha < self.config.alpha_min {
			self.alpha = self.config.alpha_min;
			self.phase = LayoutPhase::Cooling;
			debug!("layout: cooled");
		}

		updates
	}

	fn integrate(&mut self) -> Vec<PositionUpdate> {
		let retain = 1.0 - self.config.velocity_decay;
		let mut updates = Vec::new();
		for node in &mut self.nodes {
			if let Some(pin) = node.pin() {
				node.position = pin;
				node.velocity = Point::ZERO;
				continue;
			}

			let velocity = node.velocity * retain;
			let next = node.position + velocity;
			if !velocity.is_finite() || !next.is_finite() {
				warn!("layout: dropped non-finite step for {}", node.id);
				node.velocity = Point::ZERO;
				continue;
			}

			node.velocity = velocity;
			if next != node.position {
				node.position = next;
				updates.push(PositionUpdate {
					id: node.id.clone(),
					x: next.x,
					y: next.y,
				});
			}
		}
		updates
	}
}

impl LayoutControl for ForceLayout {
	fn pin_position(&mut self, id: &str, x: f64, y: f64) {
		ForceLayout::pin_position(self, id, x, y);
	}

	fn unpin(&mut self, id: &str) {
		ForceLayout::unpin(self, id);
	}

	fn reheat(&mut self) {
		ForceLayout::reheat(self);
	}
}
