/// Stable identifier shared by canonical records and layout shadows.
pub type NodeId = String;

/// Smallest radius an idea node may have.
pub const MIN_NODE_RADIUS: f64 = 20.0;
/// Largest radius an idea node may have.
pub const MAX_NODE_RADIUS: f64 = 60.0;
/// Radius given to freshly spawned ideas.
pub const DEFAULT_NODE_RADIUS: f64 = 30.0;
/// Energy given to freshly spawned ideas.
pub const DEFAULT_NODE_ENERGY: f64 = 0.5;

/// Growth stage of an idea. `Fruit` holds the node in place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NodeStatus {
	/// A newly planted idea.
	#[default]
	Seed,
	/// An idea that has started to grow.
	Sprout,
	/// An idea that is being worked out.
	Flowering,
	/// A finished idea; pinned by the layout.
	Fruit,
}

impl NodeStatus {
	/// Whether the layout must hold nodes with this status in place.
	pub fn is_pinned(self) -> bool {
		self == NodeStatus::Fruit
	}

	/// The next stage in the growth cycle, wrapping back to `Seed`.
	pub fn next(self) -> Self {
		match self {
			NodeStatus::Seed => NodeStatus::Sprout,
			NodeStatus::Sprout => NodeStatus::Flowering,
			NodeStatus::Flowering => NodeStatus::Fruit,
			NodeStatus::Fruit => NodeStatus::Seed,
		}
	}
}

/// How a connection relates its two ideas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeKind {
	/// The target was derived from the source.
	#[default]
	Derive,
	/// The target implements the source.
	Implement,
}

/// Canonical node record, owned by the graph store.
#[derive(Clone, Debug, PartialEq)]
pub struct IdeaNode {
	/// Immutable identifier.
	pub id: NodeId,
	/// World-space x.
	pub x: f64,
	/// World-space y.
	pub y: f64,
	/// Collision extent and visual scale, within `MIN_NODE_RADIUS..=MAX_NODE_RADIUS`.
	pub radius: f64,
	/// Growth stage.
	pub status: NodeStatus,
	/// Cosmetic energy level in `0..=1`.
	pub energy: f64,
	/// The node this one was spawned from, if any.
	pub parent_id: Option<NodeId>,
}

impl IdeaNode {
	/// A seed with the default radius and energy.
	pub fn new(id: impl Into<NodeId>, x: f64, y: f64) -> Self {
		Self {
			id: id.into(),
			x,
			y,
			radius: DEFAULT_NODE_RADIUS,
			status: NodeStatus::Seed,
			energy: DEFAULT_NODE_ENERGY,
			parent_id: None,
		}
	}

	/// Sets the radius, clamped to the allowed range.
	pub fn with_radius(mut self, radius: f64) -> Self {
		self.radius = clamp_radius(radius);
		self
	}

	/// Sets the status.
	pub fn with_status(mut self, status: NodeStatus) -> Self {
		self.status = status;
		self
	}

	/// Sets the parent back-reference.
	pub fn with_parent(mut self, parent_id: impl Into<NodeId>) -> Self {
		self.parent_id = Some(parent_id.into());
		self
	}
}

pub(super) fn clamp_radius(radius: f64) -> f64 {
	if radius.is_finite() {
		radius.clamp(MIN_NODE_RADIUS, MAX_NODE_RADIUS)
	} else {
		DEFAULT_NODE_RADIUS
	}
}

/// Canonical edge record, owned by the graph store.
#[derive(Clone, Debug, PartialEq)]
pub struct IdeaEdge {
	/// Edge identifier.
	pub id: String,
	/// Id of the source node.
	pub source: NodeId,
	/// Id of the target node.
	pub target: NodeId,
	/// Relation kind.
	pub kind: EdgeKind,
}

impl IdeaEdge {
	/// A `Derive` edge between two ids.
	pub fn new(id: impl Into<String>, source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
		Self {
			id: id.into(),
			source: source.into(),
			target: target.into(),
			kind: EdgeKind::Derive,
		}
	}
}

/// Initial graph handed to the canvas.
#[derive(Clone, Debug, Default)]
pub struct GraphData {
	/// Nodes in draw order.
	pub nodes: Vec<IdeaNode>,
	/// Edges; dangling ones are ignored.
	pub edges: Vec<IdeaEdge>,
}
