use super::geometry::Point;

/// Smallest allowed zoom.
pub const MIN_SCALE: f64 = 0.1;
/// Largest allowed zoom.
pub const MAX_SCALE: f64 = 5.0;
/// Wheel zoom step.
pub const WHEEL_ZOOM_IN: f64 = 1.1;
/// Wheel zoom step.
pub const WHEEL_ZOOM_OUT: f64 = 0.9;

/// Pan/zoom transform with `screen = world * scale + offset`.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
	/// Zoom factor, within `MIN_SCALE..=MAX_SCALE`.
	pub scale: f64,
	/// Screen-space translation in pixels.
	pub offset: Point,
	/// Viewport size in pixels, used as the default zoom pivot.
	pub viewport: Point,
}

impl Default for Camera {
	fn default() -> Self {
		Self {
			scale: 1.0,
			offset: Point::ZERO,
			viewport: Point::ZERO,
		}
	}
}

impl Camera {
	/// Identity camera over a viewport of the given size.
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			viewport: Point::new(width, height),
			..Self::default()
		}
	}

	/// Updates the viewport size; the transform itself is untouched.
	pub fn set_viewport(&mut self, width: f64, height: f64) {
		self.viewport = Point::new(width, height);
	}

	/// Screen-space center of the viewport.
	pub fn viewport_center(&self) -> Point {
		self.viewport * 0.5
	}

	pub fn to_world(&self, screen: Point) -> Point {
		(screen - self.offset) / self.scale
	}

	pub fn to_screen(&self, world: Point) -> Point {
		world * self.scale + self.offset
	}

	pub fn pan(&mut self, dx: f64, dy: f64) {
		self.offset += Point::new(dx, dy);
	}

	/// Multiplies the scale by `factor` (clamped) while keeping `pivot` fixed on
	/// screen. Without a pivot the viewport center is used.
	pub fn zoom(&mut self, factor: f64, pivot: Option<Point>) {
		let pivot = pivot.unwrap_or_else(|| self.viewport_center());
		let new_scale = (self.scale * factor).clamp(MIN_SCALE, MAX_SCALE);
		let ratio = new_scale / self.scale;
		self.offset = pivot - (pivot - self.offset) * ratio;
		self.scale = new_scale;
	}

	/// One wheel notch around `pivot`; positive `delta_y` zooms out.
	pub fn wheel(&mut self, delta_y: f64, pivot: Point) {
		let factor = if delta_y > 0.0 { WHEEL_ZOOM_OUT } else { WHEEL_ZOOM_IN };
		self.zoom(factor, Some(pivot));
	}

	pub fn reset(&mut self) {
		self.scale = 1.0;
		self.offset = Point::ZERO;
	}
}
