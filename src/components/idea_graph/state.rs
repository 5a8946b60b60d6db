use log::{debug, info};

use super::camera::Camera;
use super::geometry::Point;
use super::interaction::{
	Action, CURSOR_DEFAULT, HitZone, InteractionController, Modifiers, PointerButton, Scene,
	SpawnRequest, hit_test,
};
use super::layout::{ForceLayout, LayoutConfig};
use super::store::{GraphStore, MemoryStore};
use super::types::{EdgeKind, GraphData, IdeaNode, NodeId};

/// Everything the canvas needs between frames: canonical graph, physics
/// shadow, camera and gesture state.
pub struct CanvasState {
	pub store: MemoryStore,
	pub layout: ForceLayout,
	pub camera: Camera,
	pub controller: InteractionController,
	pub width: f64,
	pub height: f64,
	pub cursor: &'static str,
	pub flow_time: f64,
	pan_key_held: bool,
	synced_revision: Option<u64>,
}

impl CanvasState {
	pub fn new(data: &GraphData, width: f64, height: f64, config: LayoutConfig) -> Self {
		let mut layout = ForceLayout::new(config);
		layout.set_center(Point::new(width / 2.0, height / 2.0));

		let mut state = Self {
			store: MemoryStore::from_records(data.nodes.clone(), data.edges.clone()),
			layout,
			camera: Camera::new(width, height),
			controller: InteractionController::new(),
			width,
			height,
			cursor: CURSOR_DEFAULT,
			flow_time: 0.0,
			pan_key_held: false,
			synced_revision: None,
		};
		state.sync_layout();
		state
	}

	/// Pushes the canonical node/edge sets into the layout when topology or
	/// status changed since the last sync.
	fn sync_layout(&mut self) {
		let revision = self.store.revision();
		if self.synced_revision == Some(revision) {
			return;
		}
		self.layout.set_nodes(self.store.nodes());
		self.layout.set_edges(self.store.edges());
		self.synced_revision = Some(revision);
	}

	fn split(&mut self) -> (&mut InteractionController, Scene<'_, MemoryStore, ForceLayout>) {
		(
			&mut self.controller,
			Scene {
				store: &mut self.store,
				layout: &mut self.layout,
				camera: &mut self.camera,
			},
		)
	}

	/// One animation frame: advance the layout and write moved nodes back.
	pub fn tick(&mut self, dt: f64) {
		self.flow_time += dt;
		self.sync_layout();
		for update in self.layout.tick() {
			self.store.update_position(&update.id, update.x, update.y);
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.camera.set_viewport(width, height);
		// Centering is anchored in world space; camera moves never shift it.
		self.layout.set_center(Point::new(width / 2.0, height / 2.0));
	}

	pub fn pointer_down(&mut self, screen: Point, button: PointerButton) {
		self.sync_layout();
		let modifiers = Modifiers {
			pan: self.pan_key_held,
		};
		let (controller, mut scene) = self.split();
		let actions = controller.pointer_down(&mut scene, screen, button, modifiers);
		self.apply(actions);
	}

	pub fn pointer_move(&mut self, screen: Point) {
		let (controller, mut scene) = self.split();
		let actions = controller.pointer_move(&mut scene, screen);
		self.apply(actions);
	}

	pub fn pointer_up(&mut self, screen: Point) {
		let (controller, mut scene) = self.split();
		let actions = controller.pointer_up(&mut scene, screen);
		self.apply(actions);
	}

	pub fn pointer_leave(&mut self) {
		let (controller, mut scene) = self.split();
		let actions = controller.cancel(&mut scene);
		self.apply(actions);
	}

	pub fn wheel(&mut self, screen: Point, delta_y: f64) {
		let actions = self.controller.wheel(&mut self.camera, screen, delta_y);
		self.apply(actions);
	}

	/// Handles a key press. Returns whether the key was consumed.
	pub fn key_down(&mut self, key: &str) -> bool {
		match key {
			" " => {
				self.pan_key_held = true;
				true
			}
			"Delete" | "Backspace" => self.delete_selected(),
			"r" | "R" => {
				self.camera.reset();
				true
			}
			"p" | "P" => {
				if self.layout.is_paused() {
					self.layout.resume();
				} else {
					self.layout.pause();
				}
				true
			}
			_ => false,
		}
	}

	pub fn key_up(&mut self, key: &str) {
		if key == " " {
			self.pan_key_held = false;
		}
	}

	/// The window lost focus, so a held pan key will never see its keyup.
	pub fn blur(&mut self) {
		self.pan_key_held = false;
	}

	fn apply(&mut self, actions: Vec<Action>) {
		for action in actions {
			match action {
				Action::SetCursor(cursor) => self.cursor = cursor,
				Action::SpawnCompleted(request) => {
					self.complete_spawn(&request);
				}
				Action::SelectionChanged(selected) => debug!("selection: {selected:?}"),
				Action::CameraChanged => {}
			}
		}
	}

	/// Creates the spawned idea and its connection, then reheats the layout.
	pub fn complete_spawn(&mut self, request: &SpawnRequest) -> Option<NodeId> {
		if !request.x.is_finite() || !request.y.is_finite() {
			return None;
		}

		let mut node = IdeaNode::new(self.store.next_node_id(), request.x, request.y);
		if self.store.node(&request.source_id).is_some() {
			node = node.with_parent(request.source_id.clone());
		}
		let id = self.store.add_node(node);
		self.store
			.add_edge(&request.source_id, &id, EdgeKind::Derive);
		info!("spawned {id} from {}", request.source_id);

		self.sync_layout();
		self.layout.reheat();
		Some(id)
	}

	/// Removes the selected idea and its connections.
	pub fn delete_selected(&mut self) -> bool {
		let Some(id) = self.controller.selected().map(str::to_owned) else {
			return false;
		};
		if self.controller.dragged_node() == Some(id.as_str()) {
			self.pointer_leave();
		}
		self.controller.forget(&id);
		if !self.store.remove_node(&id) {
			return false;
		}
		self.sync_layout();
		self.layout.reheat();
		true
	}

	/// Advances the status of the node body under `screen`.
	pub fn cycle_status_at(&mut self, screen: Point) -> bool {
		let world = self.camera.to_world(screen);
		let Some(hit) = hit_test(self.store.nodes(), world) else {
			return false;
		};
		if hit.zone != HitZone::Body {
			return false;
		}
		let Some(status) = self.store.node(&hit.id).map(|node| node.status.next()) else {
			return false;
		};
		self.store.set_status(&hit.id, status);
		debug!("{} is now {status:?}", hit.id);
		self.sync_layout();
		self.layout.reheat();
		true
	}
}
