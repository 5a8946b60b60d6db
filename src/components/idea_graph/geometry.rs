//! Pure curve and anchor helpers shared by rendering and hit feedback.

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// Lengths below this are treated as zero.
pub const EPSILON: f64 = 1e-9;
/// Upper bound on how far a control point bows away from the chord.
pub const MAX_CONTROL_OFFSET: f64 = 120.0;
/// Curvature used for connections when the caller has no preference.
pub const DEFAULT_CURVATURE: f64 = 0.25;
/// Relative perpendicular skew between the two control points.
const CONTROL_JITTER: f64 = 0.12;
/// Polyline segments used by [`CubicBezier::approximate_length`].
pub const LENGTH_SEGMENTS: usize = 24;

/// A 2D point or vector.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Horizontal component.
	pub x: f64,
	/// Vertical component.
	pub y: f64,
}

impl Point {
	/// The origin.
	pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

	/// Builds a point.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Euclidean length.
	pub fn length(self) -> f64 {
		self.length_sq().sqrt()
	}

	/// Squared length.
	pub fn length_sq(self) -> f64 {
		self.x * self.x + self.y * self.y
	}

	/// Distance to another point.
	pub fn distance(self, other: Point) -> f64 {
		(self - other).length()
	}

	/// Unit vector, or `fallback` when the vector is degenerate.
	pub fn normalized_or(self, fallback: Point) -> Point {
		let length = self.length();
		if length > EPSILON && length.is_finite() {
			self / length
		} else {
			fallback
		}
	}

	/// Counter-clockwise perpendicular.
	pub fn perp(self) -> Point {
		Point::new(-self.y, self.x)
	}

	/// Whether both components are finite.
	pub fn is_finite(self) -> bool {
		self.x.is_finite() && self.y.is_finite()
	}
}

impl Add for Point {
	type Output = Point;
	fn add(self, rhs: Point) -> Point {
		Point::new(self.x + rhs.x, self.y + rhs.y)
	}
}

impl AddAssign for Point {
	fn add_assign(&mut self, rhs: Point) {
		self.x += rhs.x;
		self.y += rhs.y;
	}
}

impl Sub for Point {
	type Output = Point;
	fn sub(self, rhs: Point) -> Point {
		Point::new(self.x - rhs.x, self.y - rhs.y)
	}
}

impl SubAssign for Point {
	fn sub_assign(&mut self, rhs: Point) {
		self.x -= rhs.x;
		self.y -= rhs.y;
	}
}

impl Mul<f64> for Point {
	type Output = Point;
	fn mul(self, rhs: f64) -> Point {
		Point::new(self.x * rhs, self.y * rhs)
	}
}

impl Div<f64> for Point {
	type Output = Point;
	fn div(self, rhs: f64) -> Point {
		Point::new(self.x / rhs, self.y / rhs)
	}
}

impl Neg for Point {
	type Output = Point;
	fn neg(self) -> Point {
		Point::new(-self.x, -self.y)
	}
}

/// Point on the circle `(center, radius)` facing `toward`.
///
/// When `toward` coincides with the center the anchor falls on the +x side.
pub fn edge_anchor(center: Point, radius: f64, toward: Point) -> Point {
	let direction = (toward - center).normalized_or(Point::new(1.0, 0.0));
	center + direction * radius
}

/// A cubic bezier segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
	/// Curve start.
	pub start: Point,
	/// First control point.
	pub control1: Point,
	/// Second control point.
	pub control2: Point,
	/// Curve end.
	pub end: Point,
}

impl CubicBezier {
	/// A gently bowed connection from `from` to `to`.
	///
	/// Control points sit at the thirds of the chord, pushed sideways by
	/// `distance * curvature` (capped at [`MAX_CONTROL_OFFSET`]); one side gets
	/// slightly more bow than the other so parallel curves do not look mirrored.
	pub fn connecting(from: Point, to: Point, curvature: f64) -> Self {
		let chord = to - from;
		let distance = chord.length();
		if distance <= EPSILON || !distance.is_finite() {
			return Self {
				start: from,
				control1: from,
				control2: to,
				end: to,
			};
		}

		let normal = (chord / distance).perp();
		let bow = (distance * curvature).clamp(-MAX_CONTROL_OFFSET, MAX_CONTROL_OFFSET);
		let control1 = from + chord / 3.0 + normal * (bow * (1.0 + CONTROL_JITTER));
		let control2 = from + chord * (2.0 / 3.0) + normal * (bow * (1.0 - CONTROL_JITTER));

		Self {
			start: from,
			control1,
			control2,
			end: to,
		}
	}

	/// Evaluates the curve at `t`, clamped to `0..=1`.
	pub fn point_at(&self, t: f64) -> Point {
		let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
		let u = 1.0 - t;
		let (b0, b1, b2, b3) = (u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t);
		self.start * b0 + self.control1 * b1 + self.control2 * b2 + self.end * b3
	}

	/// Polyline length over `segments` equal parameter steps.
	pub fn length_with(&self, segments: usize) -> f64 {
		if self.start == self.control1 && self.start == self.control2 && self.start == self.end {
			return 0.0;
		}
		let segments = segments.max(1);
		let mut previous = self.start;
		let mut total = 0.0;
		for step in 1..=segments {
			let current = self.point_at(step as f64 / segments as f64);
			total += previous.distance(current);
			previous = current;
		}
		total
	}

	/// Polyline length at [`LENGTH_SEGMENTS`].
	pub fn approximate_length(&self) -> f64 {
		self.length_with(LENGTH_SEGMENTS)
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	#[test]
	fn anchor_lies_on_circle_towards_target() {
		let anchor = edge_anchor(Point::new(10.0, 10.0), 5.0, Point::new(10.0, 100.0));
		assert!((anchor.x - 10.0).abs() < 1e-12);
		assert!((anchor.y - 15.0).abs() < 1e-12);
	}

	#[test]
	fn anchor_of_coincident_points_is_finite() {
		let anchor = edge_anchor(Point::new(3.0, 4.0), 20.0, Point::new(3.0, 4.0));
		assert_eq!(anchor, Point::new(23.0, 4.0));
	}

	#[test]
	fn curve_hits_its_endpoints() {
		let curve = CubicBezier::connecting(Point::new(0.0, 0.0), Point::new(200.0, 50.0), 0.3);
		assert_eq!(curve.point_at(0.0), curve.start);
		let end = curve.point_at(1.0);
		assert!(end.distance(Point::new(200.0, 50.0)) < 1e-9);
	}

	#[test]
	fn control_offset_is_capped() {
		let from = Point::ZERO;
		let to = Point::new(10_000.0, 0.0);
		let curve = CubicBezier::connecting(from, to, 1.0);
		let max_bow = MAX_CONTROL_OFFSET * (1.0 + CONTROL_JITTER) + 1e-9;
		assert!(curve.control1.y.abs() <= max_bow);
		assert!(curve.control2.y.abs() <= max_bow);
	}

	#[test]
	fn control_points_are_not_mirrored() {
		let curve = CubicBezier::connecting(Point::ZERO, Point::new(300.0, 0.0), 0.2);
		assert!(curve.control1.y != curve.control2.y);
	}

	#[test]
	fn straight_curve_length_matches_chord() {
		let curve = CubicBezier::connecting(Point::ZERO, Point::new(120.0, 0.0), 0.0);
		assert!((curve.approximate_length() - 120.0).abs() < 1e-6);
	}

	#[test]
	fn bowed_curve_is_longer_than_chord() {
		let curve = CubicBezier::connecting(Point::ZERO, Point::new(120.0, 0.0), 0.4);
		assert!(curve.approximate_length() > 120.0);
	}

	#[test]
	fn degenerate_curve_has_zero_length() {
		let p = Point::new(7.0, -2.0);
		let curve = CubicBezier::connecting(p, p, 0.5);
		assert_eq!(curve.approximate_length(), 0.0);
		assert!(curve.point_at(0.5).is_finite());
	}

	proptest! {
		#[test]
		fn connecting_is_deterministic_and_finite(
			ax in -1e4f64..1e4, ay in -1e4f64..1e4,
			bx in -1e4f64..1e4, by in -1e4f64..1e4,
			curvature in -1.0f64..1.0,
		) {
			let a = Point::new(ax, ay);
			let b = Point::new(bx, by);
			let first = CubicBezier::connecting(a, b, curvature);
			let second = CubicBezier::connecting(a, b, curvature);
			prop_assert_eq!(first, second);
			prop_assert!(first.control1.is_finite() && first.control2.is_finite());
			prop_assert!(first.approximate_length().is_finite());
		}

		#[test]
		fn anchor_distance_equals_radius(
			cx in -1e3f64..1e3, cy in -1e3f64..1e3,
			tx in -1e3f64..1e3, ty in -1e3f64..1e3,
			radius in 20.0f64..60.0,
		) {
			let center = Point::new(cx, cy);
			let anchor = edge_anchor(center, radius, Point::new(tx, ty));
			prop_assert!((anchor.distance(center) - radius).abs() < 1e-6);
		}
	}
}
