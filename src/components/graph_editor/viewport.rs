use super::config::{MAX_SCALE, MIN_SCALE, NODE_RADIUS, ZOOM_STEP};
use super::types::{Point, Size};

/// Pan and zoom state: the logical point drawn at the surface's top-left
/// pixel, and how many pixels one logical unit spans.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	pub origin: Point,
	scale: f64,
}

impl Default for Viewport {
	fn default() -> Self {
		Self {
			origin: Point::default(),
			scale: 1.0,
		}
	}
}

impl Viewport {
	pub fn new(origin: Point, scale: f64) -> Self {
		Self {
			origin,
			scale: snap_scale(scale),
		}
	}

	pub fn scale(&self) -> f64 {
		self.scale
	}

	pub fn to_screen(&self, logical: Point) -> Point {
		Point::new(
			(logical.x - self.origin.x) * self.scale,
			(logical.y - self.origin.y) * self.scale,
		)
	}

	pub fn to_logical(&self, screen: Point) -> Point {
		Point::new(
			screen.x / self.scale + self.origin.x,
			screen.y / self.scale + self.origin.y,
		)
	}

	/// Shifts the origin by a screen-space delta, converted at the current scale.
	pub fn pan(&mut self, dx: f64, dy: f64) {
		self.origin.x -= dx / self.scale;
		self.origin.y -= dy / self.scale;
	}

	/// Pivots on the origin, not the cursor.
	pub fn zoom(&mut self, step: f64) {
		self.scale = snap_scale(self.scale + step);
	}

	pub fn zoom_in(&mut self) {
		self.zoom(ZOOM_STEP);
	}

	pub fn zoom_out(&mut self) {
		self.zoom(-ZOOM_STEP);
	}

	/// Logical extent currently covered by a surface of the given pixel size,
	/// as `(top_left, bottom_right)`.
	pub fn visible_bounds(&self, surface: Size) -> (Point, Point) {
		(
			self.origin,
			Point::new(
				self.origin.x + surface.width / self.scale,
				self.origin.y + surface.height / self.scale,
			),
		)
	}

	/// True when a node centred at `position` overlaps the visible extent.
	pub fn is_visible(&self, position: Point, surface: Size) -> bool {
		let (min, max) = self.visible_bounds(surface);
		min.x <= position.x + NODE_RADIUS
			&& position.x - NODE_RADIUS <= max.x
			&& min.y <= position.y + NODE_RADIUS
			&& position.y - NODE_RADIUS <= max.y
	}
}

// Clamps and keeps the scale on the one-decimal grid so repeated steps don't drift.
fn snap_scale(scale: f64) -> f64 {
	if !scale.is_finite() {
		return 1.0;
	}
	let grid = ZOOM_STEP.recip().round();
	(scale.clamp(MIN_SCALE, MAX_SCALE) * grid).round() / grid
}
