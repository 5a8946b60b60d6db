use log::info;

use super::types::{EdgeKind, IdeaEdge, IdeaNode, NodeId, NodeStatus, clamp_radius};

/// Canonical node/edge records the canvas reads from and writes to.
pub trait GraphStore {
	/// Nodes in draw order.
	fn nodes(&self) -> &[IdeaNode];

	/// All edges, including ones whose endpoints may be gone.
	fn edges(&self) -> &[IdeaEdge];

	/// Looks up a node by id.
	fn node(&self, id: &str) -> Option<&IdeaNode> {
		self.nodes().iter().find(|node| node.id == id)
	}

	/// Moves a node. Returns `false` if the id is unknown or the point is not
	/// finite.
	fn update_position(&mut self, id: &str, x: f64, y: f64) -> bool;

	/// Inserts a node built by the caller and returns its id.
	fn add_node(&mut self, node: IdeaNode) -> NodeId;

	/// Connects two existing nodes. Returns `None` if either endpoint is missing.
	fn add_edge(&mut self, source: &str, target: &str, kind: EdgeKind) -> Option<String>;

	/// Removes a node and every edge touching it.
	fn remove_node(&mut self, id: &str) -> bool;

	/// Changes a node's status.
	fn set_status(&mut self, id: &str, status: NodeStatus) -> bool;
}

/// Vec-backed store with generated ids and a topology revision counter.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
	nodes: Vec<IdeaNode>,
	edges: Vec<IdeaEdge>,
	next_id: u64,
	revision: u64,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a store from existing records, dropping duplicate node ids.
	pub fn from_records(nodes: Vec<IdeaNode>, edges: Vec<IdeaEdge>) -> Self {
		let mut store = Self::new();
		for node in nodes {
			if store.node(&node.id).is_none() {
				store.add_node(node);
			}
		}
		store.edges = edges;
		store
	}

	/// Bumped on every add, removal or status change; not on moves.
	pub fn revision(&self) -> u64 {
		self.revision
	}

	fn fresh_id(&mut self, prefix: &str) -> String {
		loop {
			self.next_id += 1;
			let id = format!("{prefix}-{}", self.next_id);
			let taken = self.nodes.iter().any(|node| node.id == id)
				|| self.edges.iter().any(|edge| edge.id == id);
			if !taken {
				return id;
			}
		}
	}

	/// Returns a store-unique node id for a record the caller is about to add.
	pub fn next_node_id(&mut self) -> NodeId {
		self.fresh_id("idea")
	}
}

impl GraphStore for MemoryStore {
	fn nodes(&self) -> &[IdeaNode] {
		&self.nodes
	}

	fn edges(&self) -> &[IdeaEdge] {
		&self.edges
	}

	fn update_position(&mut self, id: &str, x: f64, y: f64) -> bool {
		if !x.is_finite() || !y.is_finite() {
			return false;
		}
		let Some(node) = self.nodes.iter_mut().find(|node| node.id == id) else {
			return false;
		};
		node.x = x;
		node.y = y;
		true
	}

	fn add_node(&mut self, mut node: IdeaNode) -> NodeId {
		if node.id.is_empty() || self.node(&node.id).is_some() {
			node.id = self.next_node_id();
		}
		node.radius = clamp_radius(node.radius);
		let id = node.id.clone();
		self.nodes.push(node);
		self.revision += 1;
		id
	}

	fn add_edge(&mut self, source: &str, target: &str, kind: EdgeKind) -> Option<String> {
		if self.node(source).is_none() || self.node(target).is_none() {
			return None;
		}
		let id = self.fresh_id("edge");
		self.edges.push(IdeaEdge {
			id: id.clone(),
			source: source.to_owned(),
			target: target.to_owned(),
			kind,
		});
		self.revision += 1;
		Some(id)
	}

	fn remove_node(&mut self, id: &str) -> bool {
		let before = self.nodes.len();
		self.nodes.retain(|node| node.id != id);
		if self.nodes.len() == before {
			return false;
		}
		self.edges.retain(|edge| edge.source != id && edge.target != id);
		self.revision += 1;
		info!("removed idea {id}");
		true
	}

	fn set_status(&mut self, id: &str, status: NodeStatus) -> bool {
		let Some(node) = self.nodes.iter_mut().find(|node| node.id == id) else {
			return false;
		};
		if node.status != status {
			node.status = status;
			self.revision += 1;
		}
		true
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn moves_do_not_bump_revision() {
		let mut store = MemoryStore::new();
		let id = store.add_node(IdeaNode::new("root", 0.0, 0.0));
		let revision = store.revision();
		assert!(store.update_position(&id, 4.0, 5.0));
		assert_eq!(store.revision(), revision);
		assert_eq!(store.node(&id).map(|n| (n.x, n.y)), Some((4.0, 5.0)));
	}

	#[test]
	fn rejects_non_finite_positions() {
		let mut store = MemoryStore::new();
		let id = store.add_node(IdeaNode::new("root", 1.0, 1.0));
		assert!(!store.update_position(&id, f64::NAN, 0.0));
		assert_eq!(store.node(&id).map(|n| n.x), Some(1.0));
	}

	#[test]
	fn duplicate_ids_are_reassigned() {
		let mut store = MemoryStore::new();
		store.add_node(IdeaNode::new("a", 0.0, 0.0));
		let second = store.add_node(IdeaNode::new("a", 1.0, 0.0));
		assert_ne!(second, "a");
		assert_eq!(store.nodes().len(), 2);
	}

	#[test]
	fn edges_need_both_endpoints() {
		let mut store = MemoryStore::new();
		store.add_node(IdeaNode::new("a", 0.0, 0.0));
		assert!(store.add_edge("a", "ghost", EdgeKind::Derive).is_none());
		store.add_node(IdeaNode::new("b", 0.0, 0.0));
		assert!(store.add_edge("a", "b", EdgeKind::Implement).is_some());
	}

	#[test]
	fn removal_cascades_to_edges() {
		let mut store = MemoryStore::new();
		store.add_node(IdeaNode::new("a", 0.0, 0.0));
		store.add_node(IdeaNode::new("b", 0.0, 0.0));
		store.add_node(IdeaNode::new("c", 0.0, 0.0));
		store.add_edge("a", "b", EdgeKind::Derive);
		store.add_edge("b", "c", EdgeKind::Derive);
		store.add_edge("a", "c", EdgeKind::Derive);
		assert!(store.remove_node("b"));
		assert_eq!(store.edges().len(), 1);
		assert!(!store.remove_node("b"));
	}

	#[test]
	fn radius_is_clamped_on_insert() {
		let mut store = MemoryStore::new();
		let mut node = IdeaNode::new("big", 0.0, 0.0);
		node.radius = 500.0;
		let id = store.add_node(node);
		assert_eq!(store.node(&id).map(|n| n.radius), Some(60.0));
	}
}
