//! Pointer gesture state machine.
//!
//! A pointer-down picks exactly one gesture: pan (space held, middle button,
//! or a press on empty canvas), drag a node (press inside `BODY_RATIO` of its
//! radius) or spawn a connection (press in the band between `BODY_RATIO` and
//! `EDGE_BAND_RATIO`). The band wins over a body, and panning modifiers win
//! over everything. Spawns are reported back as [`SpawnRequest`]s; the
//! controller never creates graph records itself.

use log::debug;

use super::camera::Camera;
use super::geometry::Point;
use super::layout::LayoutControl;
use super::store::GraphStore;
use super::types::{IdeaNode, NodeId};

/// Inner fraction of a node's radius that drags the node.
pub const BODY_RATIO: f64 = 0.7;
/// Outer fraction of a node's radius that still starts a spawn.
pub const EDGE_BAND_RATIO: f64 = 1.2;
/// Screen pixels a press may wander and still count as a click.
pub const CLICK_SLOP: f64 = 3.0;

pub const CURSOR_DEFAULT: &str = "default";
pub const CURSOR_GRAB: &str = "grab";
pub const CURSOR_GRABBING: &str = "grabbing";
pub const CURSOR_SPAWN: &str = "crosshair";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
	Primary,
	Middle,
	Secondary,
}

impl PointerButton {
	/// Maps a DOM `MouseEvent.button` value.
	pub fn from_dom(button: i16) -> Self {
		match button {
			1 => PointerButton::Middle,
			2 => PointerButton::Secondary,
			_ => PointerButton::Primary,
		}
	}
}

/// Modifier state sampled with each pointer-down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
	/// The pan key (space) is held.
	pub pan: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitZone {
	Body,
	EdgeBand,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Hit {
	pub id: NodeId,
	pub zone: HitZone,
}

/// Finds what a world point lands on. Later nodes are on top.
pub fn hit_test(nodes: &[IdeaNode], world: Point) -> Option<Hit> {
	let ratio = |node: &IdeaNode| world.distance(Point::new(node.x, node.y)) / node.radius;

	if let Some(node) = nodes.iter().rev().find(|node| {
		let r = ratio(node);
		(BODY_RATIO..=EDGE_BAND_RATIO).contains(&r)
	}) {
		return Some(Hit {
			id: node.id.clone(),
			zone: HitZone::EdgeBand,
		});
	}

	nodes
		.iter()
		.rev()
		.find(|node| ratio(node) < BODY_RATIO)
		.map(|node| Hit {
			id: node.id.clone(),
			zone: HitZone::Body,
		})
}

/// Transient state of a spawn gesture, in world space.
#[derive(Clone, Debug, PartialEq)]
pub struct SpawnDrag {
	pub source_id: NodeId,
	pub start: Point,
	pub current: Point,
}

/// A finished spawn gesture: create a node at `(x, y)` connected from the source.
#[derive(Clone, Debug, PartialEq)]
pub struct SpawnRequest {
	pub source_id: NodeId,
	pub x: f64,
	pub y: f64,
}

/// What the host should react to after an event.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
	SelectionChanged(Option<NodeId>),
	SpawnCompleted(SpawnRequest),
	CameraChanged,
	SetCursor(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureKind {
	Idle,
	Panning,
	DraggingNode,
	SpawningEdge,
}

#[derive(Clone, Debug, Default)]
enum Gesture {
	#[default]
	Idle,
	Panning {
		last: Point,
		press: Point,
		from_canvas: bool,
		moved: bool,
	},
	DraggingNode {
		id: NodeId,
		grab_offset: Point,
		press: Point,
		moved: bool,
	},
	SpawningEdge(SpawnDrag),
}

/// Collaborators an event may touch.
pub struct Scene<'a, S, L> {
	pub store: &'a mut S,
	pub layout: &'a mut L,
	pub camera: &'a mut Camera,
}

#[derive(Debug, Default)]
pub struct InteractionController {
	gesture: Gesture,
	selected: Option<NodeId>,
}

impl InteractionController {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn gesture(&self) -> GestureKind {
		match self.gesture {
			Gesture::Idle => GestureKind::Idle,
			Gesture::Panning { .. } => GestureKind::Panning,
			Gesture::DraggingNode { .. } => GestureKind::DraggingNode,
			Gesture::SpawningEdge(_) => GestureKind::SpawningEdge,
		}
	}

	pub fn selected(&self) -> Option<&str> {
		self.selected.as_deref()
	}

	/// Drops the selection if it points at `id`.
	pub fn forget(&mut self, id: &str) -> bool {
		if self.selected.as_deref() == Some(id) {
			self.selected = None;
			return true;
		}
		false
	}

	/// The in-progress spawn, for drawing a preview curve.
	pub fn spawn_preview(&self) -> Option<&SpawnDrag> {
		match &self.gesture {
			Gesture::SpawningEdge(drag) => Some(drag),
			_ => None,
		}
	}

	pub fn dragged_node(&self) -> Option<&str> {
		match &self.gesture {
			Gesture::DraggingNode { id, .. } => Some(id.as_str()),
			_ => None,
		}
	}

	/// Cursor to show while idle over `screen`.
	pub fn cursor_at(&self, nodes: &[IdeaNode], camera: &Camera, screen: Point) -> &'static str {
		match self.gesture {
			Gesture::Panning { .. } | Gesture::DraggingNode { .. } => CURSOR_GRABBING,
			Gesture::SpawningEdge(_) => CURSOR_SPAWN,
			Gesture::Idle => match hit_test(nodes, camera.to_world(screen)) {
				Some(Hit {
					zone: HitZone::EdgeBand,
					..
				}) => CURSOR_SPAWN,
				Some(Hit {
					zone: HitZone::Body,
					..
				}) => CURSOR_GRAB,
				None => CURSOR_DEFAULT,
			},
		}
	}

	pub fn pointer_down<S: GraphStore, L: LayoutControl>(
		&mut self,
		scene: &mut Scene<'_, S, L>,
		screen: Point,
		button: PointerButton,
		modifiers: Modifiers,
	) -> Vec<Action> {
		if !matches!(self.gesture, Gesture::Idle) {
			return Vec::new();
		}

		if modifiers.pan || button == PointerButton::Middle {
			self.gesture = Gesture::Panning {
				last: screen,
				press: screen,
				from_canvas: false,
				moved: false,
			};
			return vec![Action::SetCursor(CURSOR_GRABBING)];
		}
		if button != PointerButton::Primary {
			return Vec::new();
		}

		let world = scene.camera.to_world(screen);
		match hit_test(scene.store.nodes(), world) {
			Some(Hit {
				id,
				zone: HitZone::EdgeBand,
			}) => {
				self.gesture = Gesture::SpawningEdge(SpawnDrag {
					source_id: id,
					start: world,
					current: world,
				});
				vec![Action::SetCursor(CURSOR_SPAWN)]
			}
			Some(Hit {
				id,
				zone: HitZone::Body,
			}) => {
				let Some(node) = scene.store.node(&id) else {
					return Vec::new();
				};
				let grab_offset = Point::new(node.x, node.y) - world;
				self.gesture = Gesture::DraggingNode {
					id,
					grab_offset,
					press: screen,
					moved: false,
				};
				vec![Action::SetCursor(CURSOR_GRABBING)]
			}
			None => {
				self.gesture = Gesture::Panning {
					last: screen,
					press: screen,
					from_canvas: true,
					moved: false,
				};
				Vec::new()
			}
		}
	}

	pub fn pointer_move<S: GraphStore, L: LayoutControl>(
		&mut self,
		scene: &mut Scene<'_, S, L>,
		screen: Point,
	) -> Vec<Action> {
		if matches!(self.gesture, Gesture::Idle) {
			let cursor = self.cursor_at(scene.store.nodes(), &*scene.camera, screen);
			return vec![Action::SetCursor(cursor)];
		}

		match &mut self.gesture {
			Gesture::Idle => Vec::new(),
			Gesture::Panning {
				last,
				press,
				from_canvas,
				moved,
			} => {
				if !*moved {
					if *from_canvas && screen.distance(*press) <= CLICK_SLOP {
						return Vec::new();
					}
					*moved = true;
				}
				let delta = screen - *last;
				*last = screen;
				scene.camera.pan(delta.x, delta.y);
				vec![Action::CameraChanged]
			}
			Gesture::DraggingNode {
				id,
				grab_offset,
				press,
				moved,
			} => {
				// Slop only decides whether the release still counts as a click.
				if screen.distance(*press) > CLICK_SLOP {
					*moved = true;
				}
				let target = scene.camera.to_world(screen) + *grab_offset;
				if !target.is_finite() {
					return Vec::new();
				}
				// Store and layout move together so render and physics agree.
				if scene.store.update_position(id.as_str(), target.x, target.y) {
					scene.layout.pin_position(id.as_str(), target.x, target.y);
				}
				Vec::new()
			}
			Gesture::SpawningEdge(drag) => {
				drag.current = scene.camera.to_world(screen);
				Vec::new()
			}
		}
	}

	pub fn pointer_up<S: GraphStore, L: LayoutControl>(
		&mut self,
		scene: &mut Scene<'_, S, L>,
		screen: Point,
	) -> Vec<Action> {
		match std::mem::take(&mut self.gesture) {
			Gesture::Idle => Vec::new(),
			Gesture::Panning {
				from_canvas, moved, ..
			} => {
				let mut actions = vec![Action::SetCursor(CURSOR_DEFAULT)];
				if from_canvas && !moved && self.selected.take().is_some() {
					actions.push(Action::SelectionChanged(None));
				}
				actions
			}
			Gesture::DraggingNode { id, moved, .. } => {
				scene.layout.unpin(&id);
				scene.layout.reheat();
				let mut actions = vec![Action::SetCursor(CURSOR_GRAB)];
				if moved {
					debug!("dropped {id}");
				} else if self.selected.as_deref() != Some(id.as_str()) {
					self.selected = Some(id.clone());
					actions.push(Action::SelectionChanged(Some(id)));
				}
				actions
			}
			Gesture::SpawningEdge(drag) => {
				let end = scene.camera.to_world(screen);
				let end = if end.is_finite() { end } else { drag.current };
				debug!(
					"spawn from {} released at ({:.1}, {:.1})",
					drag.source_id, end.x, end.y
				);
				vec![
					Action::SetCursor(CURSOR_DEFAULT),
					Action::SpawnCompleted(SpawnRequest {
						source_id: drag.source_id,
						x: end.x,
						y: end.y,
					}),
				]
			}
		}
	}

	/// Ends any gesture without completing it, e.g. when the pointer leaves.
	pub fn cancel<S: GraphStore, L: LayoutControl>(
		&mut self,
		scene: &mut Scene<'_, S, L>,
	) -> Vec<Action> {
		match std::mem::take(&mut self.gesture) {
			Gesture::Idle => Vec::new(),
			Gesture::DraggingNode { id, .. } => {
				scene.layout.unpin(&id);
				scene.layout.reheat();
				vec![Action::SetCursor(CURSOR_DEFAULT)]
			}
			Gesture::Panning { .. } | Gesture::SpawningEdge(_) => {
				vec![Action::SetCursor(CURSOR_DEFAULT)]
			}
		}
	}

	/// Zooms one wheel notch around the cursor.
	pub fn wheel(&mut self, camera: &mut Camera, screen: Point, delta_y: f64) -> Vec<Action> {
		if delta_y == 0.0 || !delta_y.is_finite() {
			return Vec::new();
		}
		camera.wheel(delta_y, screen);
		vec![Action::CameraChanged]
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::idea_graph::store::MemoryStore;

	#[derive(Debug, Default)]
	struct RecordingLayout {
		pins: Vec<(String, f64, f64)>,
		unpins: Vec<String>,
		reheats: usize,
	}

	impl LayoutControl for RecordingLayout {
		fn pin_position(&mut self, id: &str, x: f64, y: f64) {
			self.pins.push((id.to_owned(), x, y));
		}

		fn unpin(&mut self, id: &str) {
			self.unpins.push(id.to_owned());
		}

		fn reheat(&mut self) {
			self.reheats += 1;
		}
	}

	struct Fixture {
		store: MemoryStore,
		layout: RecordingLayout,
		camera: Camera,
		controller: InteractionController,
	}

	impl Fixture {
		fn new(nodes: Vec<IdeaNode>) -> Self {
			Self {
				store: MemoryStore::from_records(nodes, Vec::new()),
				layout: RecordingLayout::default(),
				camera: Camera::new(800.0, 600.0),
				controller: InteractionController::new(),
			}
		}

		fn down(&mut self, x: f64, y: f64) -> Vec<Action> {
			self.down_with(x, y, PointerButton::Primary, Modifiers::default())
		}

		fn down_with(
			&mut self,
			x: f64,
			y: f64,
			button: PointerButton,
			modifiers: Modifiers,
		) -> Vec<Action> {
			let mut scene = Scene {
				store: &mut self.store,
				layout: &mut self.layout,
				camera: &mut self.camera,
			};
			self.controller
				.pointer_down(&mut scene, Point::new(x, y), button, modifiers)
		}

		fn move_to(&mut self, x: f64, y: f64) -> Vec<Action> {
			let mut scene = Scene {
				store: &mut self.store,
				layout: &mut self.layout,
				camera: &mut self.camera,
			};
			self.controller.pointer_move(&mut scene, Point::new(x, y))
		}

		fn up(&mut self, x: f64, y: f64) -> Vec<Action> {
			let mut scene = Scene {
				store: &mut self.store,
				layout: &mut self.layout,
				camera: &mut self.camera,
			};
			self.controller.pointer_up(&mut scene, Point::new(x, y))
		}

		fn position(&self, id: &str) -> (f64, f64) {
			self.store
				.node(id)
				.map(|node| (node.x, node.y))
				.expect("node exists")
		}
	}

	fn spawns(actions: &[Action]) -> Vec<SpawnRequest> {
		actions
			.iter()
			.filter_map(|action| match action {
				Action::SpawnCompleted(request) => Some(request.clone()),
				_ => None,
			})
			.collect()
	}

	fn node_a() -> IdeaNode {
		IdeaNode::new("A", 100.0, 100.0).with_radius(30.0)
	}

	#[test]
	fn hit_zones_follow_radius_ratios() {
		let nodes = [node_a()];
		let at = |dx: f64| hit_test(&nodes, Point::new(100.0 + dx, 100.0)).map(|hit| hit.zone);
		assert_eq!(at(0.0), Some(HitZone::Body));
		assert_eq!(at(20.0), Some(HitZone::Body));
		assert_eq!(at(21.0), Some(HitZone::EdgeBand));
		assert_eq!(at(30.0), Some(HitZone::EdgeBand));
		assert_eq!(at(36.0), Some(HitZone::EdgeBand));
		assert_eq!(at(37.0), None);
	}

	#[test]
	fn edge_band_beats_overlapping_body() {
		let nodes = [
			IdeaNode::new("under", 130.0, 100.0).with_radius(30.0),
			node_a(),
		];
		// Inside "under"'s body, on A's boundary.
		let hit = hit_test(&nodes, Point::new(130.0, 100.0)).expect("hit");
		assert_eq!(hit.zone, HitZone::EdgeBand);
		assert_eq!(hit.id, "A");
	}

	#[test]
	fn spawn_gesture_yields_one_request_and_clears_state() {
		let mut fx = Fixture::new(vec![node_a()]);
		fx.down(130.0, 100.0);
		assert_eq!(fx.controller.gesture(), GestureKind::SpawningEdge);
		fx.move_to(200.0, 180.0);
		fx.move_to(300.0, 250.0);
		let preview = fx.controller.spawn_preview().expect("preview while dragging");
		assert_eq!(preview.current, Point::new(300.0, 250.0));
		assert_eq!(preview.start, Point::new(130.0, 100.0));

		let actions = fx.up(300.0, 250.0);
		assert_eq!(
			spawns(&actions),
			vec![SpawnRequest {
				source_id: "A".into(),
				x: 300.0,
				y: 250.0,
			}]
		);
		assert!(fx.controller.spawn_preview().is_none());
		assert_eq!(fx.controller.gesture(), GestureKind::Idle);
		assert_eq!(fx.store.nodes().len(), 1);
		assert!(fx.layout.pins.is_empty());
	}

	#[test]
	fn zero_distance_spawn_still_completes() {
		let mut fx = Fixture::new(vec![node_a()]);
		fx.down(125.0, 100.0);
		let actions = fx.up(125.0, 100.0);
		assert_eq!(
			spawns(&actions),
			vec![SpawnRequest {
				source_id: "A".into(),
				x: 125.0,
				y: 100.0,
			}]
		);
	}

	#[test]
	fn spawn_respects_camera_transform() {
		let mut fx = Fixture::new(vec![node_a()]);
		fx.camera.scale = 2.0;
		fx.camera.offset = Point::new(10.0, 20.0);
		// A's boundary at world (130, 100) is screen (270, 220).
		fx.down(270.0, 220.0);
		let actions = fx.up(410.0, 420.0);
		assert_eq!(
			spawns(&actions),
			vec![SpawnRequest {
				source_id: "A".into(),
				x: 200.0,
				y: 200.0,
			}]
		);
	}

	#[test]
	fn drag_moves_node_by_pointer_delta_and_reheats_once() {
		let mut fx = Fixture::new(vec![node_a()]);
		fx.down(105.0, 100.0);
		assert_eq!(fx.controller.gesture(), GestureKind::DraggingNode);
		fx.move_to(125.0, 90.0);
		fx.move_to(145.0, 75.0);
		assert_eq!(fx.layout.reheats, 0);
		fx.up(145.0, 75.0);

		assert_eq!(fx.position("A"), (140.0, 75.0));
		assert_eq!(fx.layout.reheats, 1);
		assert_eq!(fx.layout.unpins, vec!["A".to_owned()]);
		assert_eq!(fx.controller.gesture(), GestureKind::Idle);
	}

	#[test]
	fn small_drag_still_moves_node_and_selects() {
		let mut fx = Fixture::new(vec![node_a()]);
		fx.down(100.0, 100.0);
		fx.move_to(102.0, 101.0);
		assert_eq!(fx.layout.pins, vec![("A".to_owned(), 102.0, 101.0)]);
		let actions = fx.up(102.0, 101.0);

		assert_eq!(fx.position("A"), (102.0, 101.0));
		assert_eq!(fx.layout.reheats, 1);
		assert!(actions.contains(&Action::SelectionChanged(Some("A".into()))));
	}

	#[test]
	fn every_drag_move_writes_store_and_pin_together() {
		let mut fx = Fixture::new(vec![node_a()]);
		fx.down(100.0, 100.0);
		let mut written = Vec::new();
		for step in 1..=5 {
			let x = 100.0 + step as f64 * 10.0;
			fx.move_to(x, 100.0);
			let (nx, ny) = fx.position("A");
			written.push(("A".to_owned(), nx, ny));
		}
		assert_eq!(fx.layout.pins, written);
	}

	#[test]
	fn drag_under_zoom_converts_to_world_delta() {
		let mut fx = Fixture::new(vec![node_a()]);
		fx.camera.scale = 2.0;
		// A's center at world (100, 100) is screen (200, 200).
		fx.down(200.0, 200.0);
		fx.move_to(240.0, 180.0);
		fx.up(240.0, 180.0);
		assert_eq!(fx.position("A"), (120.0, 90.0));
	}

	#[test]
	fn click_selects_and_empty_click_deselects() {
		let mut fx = Fixture::new(vec![node_a()]);
		fx.down(100.0, 100.0);
		let actions = fx.up(100.0, 100.0);
		assert!(actions.contains(&Action::SelectionChanged(Some("A".into()))));
		assert_eq!(fx.controller.selected(), Some("A"));
		assert_eq!(fx.position("A"), (100.0, 100.0));
		assert!(fx.layout.pins.is_empty());

		fx.down(500.0, 500.0);
		let actions = fx.up(501.0, 500.0);
		assert!(actions.contains(&Action::SelectionChanged(None)));
		assert_eq!(fx.controller.selected(), None);
	}

	#[test]
	fn background_drag_pans_without_deselecting() {
		let mut fx = Fixture::new(vec![node_a()]);
		fx.down(100.0, 100.0);
		fx.up(100.0, 100.0);

		fx.down(500.0, 500.0);
		fx.move_to(520.0, 530.0);
		fx.move_to(540.0, 510.0);
		let actions = fx.up(540.0, 510.0);
		assert_eq!(fx.camera.offset, Point::new(40.0, 10.0));
		assert!(!actions.iter().any(|a| matches!(a, Action::SelectionChanged(_))));
		assert_eq!(fx.controller.selected(), Some("A"));
	}

	#[test]
	fn pan_modifier_wins_over_node_hit() {
		let mut fx = Fixture::new(vec![node_a()]);
		fx.down_with(100.0, 100.0, PointerButton::Primary, Modifiers { pan: true });
		assert_eq!(fx.controller.gesture(), GestureKind::Panning);
		fx.move_to(110.0, 105.0);
		fx.up(110.0, 105.0);
		assert_eq!(fx.camera.offset, Point::new(10.0, 5.0));
		assert_eq!(fx.position("A"), (100.0, 100.0));
		assert_eq!(fx.layout.reheats, 0);
	}

	#[test]
	fn middle_button_pans_from_edge_band() {
		let mut fx = Fixture::new(vec![node_a()]);
		fx.down_with(130.0, 100.0, PointerButton::Middle, Modifiers::default());
		assert_eq!(fx.controller.gesture(), GestureKind::Panning);
		fx.move_to(131.0, 100.0);
		let actions = fx.up(131.0, 100.0);
		assert!(spawns(&actions).is_empty());
		assert_eq!(fx.camera.offset, Point::new(1.0, 0.0));
	}

	#[test]
	fn secondary_button_is_ignored() {
		let mut fx = Fixture::new(vec![node_a()]);
		let actions = fx.down_with(100.0, 100.0, PointerButton::Secondary, Modifiers::default());
		assert!(actions.is_empty());
		assert_eq!(fx.controller.gesture(), GestureKind::Idle);
	}

	#[test]
	fn stray_pointer_up_is_a_no_op() {
		let mut fx = Fixture::new(vec![node_a()]);
		assert!(fx.up(10.0, 10.0).is_empty());
		assert!(fx.up(10.0, 10.0).is_empty());
		assert_eq!(fx.controller.gesture(), GestureKind::Idle);
		assert_eq!(fx.layout.reheats, 0);
	}

	#[test]
	fn cancel_discards_spawn_and_releases_drag() {
		let mut fx = Fixture::new(vec![node_a()]);
		fx.down(130.0, 100.0);
		fx.move_to(200.0, 200.0);
		let actions = {
			let mut scene = Scene {
				store: &mut fx.store,
				layout: &mut fx.layout,
				camera: &mut fx.camera,
			};
			fx.controller.cancel(&mut scene)
		};
		assert!(spawns(&actions).is_empty());
		assert!(fx.controller.spawn_preview().is_none());

		fx.down(100.0, 100.0);
		fx.move_to(120.0, 100.0);
		{
			let mut scene = Scene {
				store: &mut fx.store,
				layout: &mut fx.layout,
				camera: &mut fx.camera,
			};
			fx.controller.cancel(&mut scene);
		}
		assert_eq!(fx.layout.unpins, vec!["A".to_owned()]);
		assert_eq!(fx.layout.reheats, 1);
	}

	#[test]
	fn cursor_reflects_hover_zone() {
		let fx = Fixture::new(vec![node_a()]);
		let nodes = fx.store.nodes();
		let cursor = |x, y| fx.controller.cursor_at(nodes, &fx.camera, Point::new(x, y));
		assert_eq!(cursor(100.0, 100.0), CURSOR_GRAB);
		assert_eq!(cursor(130.0, 100.0), CURSOR_SPAWN);
		assert_eq!(cursor(400.0, 400.0), CURSOR_DEFAULT);
	}

	#[test]
	fn wheel_zooms_around_cursor() {
		let mut controller = InteractionController::new();
		let mut camera = Camera::new(800.0, 600.0);
		let pivot = Point::new(250.0, 120.0);
		let world = camera.to_world(pivot);
		let actions = controller.wheel(&mut camera, pivot, -1.0);
		assert_eq!(actions, vec![Action::CameraChanged]);
		let back = camera.to_screen(world);
		assert!((back.x - pivot.x).abs() < 1e-9 && (back.y - pivot.y).abs() < 1e-9);
		assert!(controller.wheel(&mut camera, pivot, 0.0).is_empty());
	}
}
