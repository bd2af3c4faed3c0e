//! Plain data records shared by the store, the interaction pass and the renderer.

use super::style::Color;

/// Drawable area in canvas pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
}

impl Viewport {
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	pub fn area(&self) -> f64 {
		self.width * self.height
	}

	pub fn min_side(&self) -> f64 {
		self.width.min(self.height)
	}

	/// Both dimensions are finite and strictly positive.
	pub fn is_drawable(&self) -> bool {
		self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
	}

	pub fn contains(&self, x: f64, y: f64) -> bool {
		(0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
	}
}

/// Last known pointer or touch position in canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
	pub x: f64,
	pub y: f64,
}

impl Pointer {
	pub fn distance_to(&self, x: f64, y: f64) -> f64 {
		(self.x - x).hypot(self.y - y)
	}
}

/// A single particle.
///
/// `base_x`/`base_y` and `density` only matter for pointer-reactive fields;
/// drifting fields leave them at their spawn values.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub base_x: f64,
	pub base_y: f64,
	pub vx: f64,
	pub vy: f64,
	pub size: f64,
	pub density: f64,
	pub color: Color,
}

impl Particle {
	/// Distance from the baseline position.
	pub fn offset(&self) -> f64 {
		(self.x - self.base_x).hypot(self.y - self.base_y)
	}
}

/// Line between two particles, recomputed every frame.
///
/// `from` and `to` index into the particle slice the connection was built
/// from and are meaningless once the store is rebuilt.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
	pub from: usize,
	pub to: usize,
	pub distance: f64,
	pub active: bool,
	pub opacity: f64,
}
