//! Visual and behavioural presets for the particle field.
//!
//! A [`FieldStyle`] bundles everything that distinguishes one background from
//! another: how many particles spawn and what they look like, how they move,
//! how connections are drawn, and whether a pointer glow is overlaid.

use super::types::Viewport;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Converts CSS-style HSL (hue in degrees, saturation and lightness in
	/// percent) into RGB channels.
	pub fn hsla(hue: f64, saturation: f64, lightness: f64, a: f64) -> Self {
		let s = (saturation / 100.0).clamp(0.0, 1.0);
		let l = (lightness / 100.0).clamp(0.0, 1.0);
		let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
		let sector = hue.rem_euclid(360.0) / 60.0;
		let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());

		let (r, g, b) = match sector as u32 {
			0 => (chroma, x, 0.0),
			1 => (x, chroma, 0.0),
			2 => (0.0, chroma, x),
			3 => (0.0, x, chroma),
			4 => (x, 0.0, chroma),
			_ => (chroma, 0.0, x),
		};
		let m = l - chroma / 2.0;
		let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;

		Self {
			r: channel(r),
			g: channel(g),
			b: channel(b),
			a,
		}
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// How particle colors are chosen at spawn time.
#[derive(Clone, Debug, PartialEq)]
pub enum Tint {
	/// Every particle shares one color; only the alpha is randomized.
	Fixed(Color),
	/// Hue, saturation and lightness are drawn from `(min, max)` ranges.
	Hsl {
		hue: (f64, f64),
		saturation: (f64, f64),
		lightness: (f64, f64),
	},
}

/// Particle population and per-particle visual parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct SpawnStyle {
	/// Upper bound on the particle count regardless of viewport size
	pub cap_limit: usize,
	/// Viewport area (px²) per particle
	pub area_divisor: f64,
	/// Velocity components are drawn from `(-speed / 2, speed / 2)`
	pub speed: f64,
	pub size_min: f64,
	pub size_max: f64,
	pub opacity_min: f64,
	pub opacity_max: f64,
	/// Pointer responsiveness range; unused by drifting fields
	pub density_min: f64,
	pub density_max: f64,
	pub tint: Tint,
}

/// Per-frame motion rule.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion {
	/// Constant drift, reflecting off the viewport edges.
	Drift,
	/// Pushed away from the pointer inside `radius`; otherwise closes
	/// `1 / relax` of the offset to the baseline each frame.
	Repel { radius: f64, relax: f64 },
}

/// Maximum length of a connection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LinkRange {
	/// Fraction of the viewport's shorter side.
	Relative(f64),
	/// Absolute distance in pixels.
	Fixed(f64),
}

impl LinkRange {
	pub fn max_distance(self, viewport: Viewport) -> f64 {
		match self {
			LinkRange::Relative(fraction) => viewport.min_side() * fraction,
			LinkRange::Fixed(distance) => distance,
		}
	}
}

/// Connection line style.
#[derive(Clone, Debug, PartialEq)]
pub struct LinkStyle {
	pub range: LinkRange,
	/// Opacity of a zero-length connection; falls off linearly to 0 at range
	pub opacity_scale: f64,
	/// Gradient color at the `from` particle
	pub start: Color,
	/// Gradient color at the `to` particle
	pub end: Color,
	/// Multiplier applied to the connection opacity when stroking
	pub alpha_scale: f64,
	pub width: f64,
}

/// Radial glow following the pointer.
#[derive(Clone, Debug, PartialEq)]
pub struct GlowStyle {
	pub enabled: bool,
	pub radius: f64,
	/// Color at the glow center; fades to transparent at `radius`
	pub color: Color,
}

/// Complete particle field configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldStyle {
	pub name: &'static str,
	pub spawn: SpawnStyle,
	pub motion: Motion,
	pub links: LinkStyle,
	pub glow: GlowStyle,
	/// CSS opacity of the canvas element
	pub canvas_opacity: f64,
}

impl FieldStyle {
	/// Hero background: sparse white particles joined by blue-violet lines,
	/// with a soft glow under the pointer.
	pub fn ambient() -> Self {
		Self {
			name: "ambient",
			spawn: SpawnStyle {
				cap_limit: 100,
				area_divisor: 10_000.0,
				speed: 0.3,
				size_min: 0.5,
				size_max: 2.0,
				opacity_min: 0.2,
				opacity_max: 0.7,
				density_min: 0.0,
				density_max: 0.0,
				tint: Tint::Fixed(Color::rgb(255, 255, 255)),
			},
			motion: Motion::Drift,
			links: LinkStyle {
				range: LinkRange::Relative(0.15),
				opacity_scale: 0.5,
				start: Color::rgb(100, 150, 255),
				end: Color::rgb(150, 100, 255),
				alpha_scale: 0.8,
				width: 0.5,
			},
			glow: GlowStyle {
				enabled: true,
				radius: 150.0,
				color: Color::rgba(100, 150, 255, 0.2),
			},
			canvas_opacity: 0.8,
		}
	}

	/// Page background: blue-cyan particles that scatter away from the
	/// pointer and settle back.
	pub fn reactive() -> Self {
		Self {
			name: "reactive",
			spawn: SpawnStyle {
				cap_limit: 150,
				area_divisor: 9_000.0,
				speed: 0.5,
				size_min: 0.8,
				size_max: 2.8,
				opacity_min: 0.3,
				opacity_max: 0.8,
				density_min: 1.0,
				density_max: 31.0,
				tint: Tint::Hsl {
					hue: (180.0, 240.0),
					saturation: (70.0, 100.0),
					lightness: (70.0, 90.0),
				},
			},
			motion: Motion::Repel {
				radius: 150.0,
				relax: 20.0,
			},
			links: LinkStyle {
				range: LinkRange::Fixed(150.0),
				opacity_scale: 1.0,
				start: Color::rgb(255, 255, 255),
				end: Color::rgb(120, 200, 255),
				alpha_scale: 0.2,
				width: 1.0,
			},
			glow: GlowStyle {
				enabled: false,
				radius: 0.0,
				color: Color::rgba(0, 0, 0, 0.0),
			},
			canvas_opacity: 0.7,
		}
	}
}

impl Default for FieldStyle {
	fn default() -> Self {
		Self::ambient()
	}
}
