//! Drawing for the particle field.
//!
//! Each frame is a full redraw in three passes:
//! 1. Particles as filled circles
//! 2. Active connections as gradient lines
//! 3. Pointer glow (when the style enables it and a pointer has been seen)
//!
//! Output goes through the [`Surface`] trait. The browser canvas implements
//! it directly; `Vec<DrawCommand>` records a frame as a display list.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::FieldState;
use super::style::Color;
use super::types::Viewport;

/// Minimal set of 2D primitives the field needs.
pub trait Surface {
	fn clear(&mut self, viewport: Viewport);
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);
	/// Strokes a line whose color fades linearly from `start` to `end`.
	fn stroke_gradient_line(
		&mut self,
		from: (f64, f64),
		to: (f64, f64),
		start: Color,
		end: Color,
		width: f64,
	);
	/// Fills the viewport with a radial gradient from `color` at `center`
	/// to transparent at `radius`.
	fn fill_radial_glow(&mut self, center: (f64, f64), radius: f64, color: Color, viewport: Viewport);
}

/// One recorded drawing call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
	Clear(Viewport),
	Circle {
		x: f64,
		y: f64,
		radius: f64,
		color: Color,
	},
	Line {
		from: (f64, f64),
		to: (f64, f64),
		start: Color,
		end: Color,
		width: f64,
	},
	Glow {
		center: (f64, f64),
		radius: f64,
		color: Color,
	},
}

impl Surface for Vec<DrawCommand> {
	fn clear(&mut self, viewport: Viewport) {
		self.push(DrawCommand::Clear(viewport));
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.push(DrawCommand::Circle {
			x,
			y,
			radius,
			color,
		});
	}

	fn stroke_gradient_line(
		&mut self,
		from: (f64, f64),
		to: (f64, f64),
		start: Color,
		end: Color,
		width: f64,
	) {
		self.push(DrawCommand::Line {
			from,
			to,
			start,
			end,
			width,
		});
	}

	fn fill_radial_glow(&mut self, center: (f64, f64), radius: f64, color: Color, _: Viewport) {
		self.push(DrawCommand::Glow {
			center,
			radius,
			color,
		});
	}
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&mut self, viewport: Viewport) {
		self.clear_rect(0.0, 0.0, viewport.width, viewport.height);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.set_fill_style_str(&color.to_css());
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, PI * 2.0);
		self.fill();
	}

	fn stroke_gradient_line(
		&mut self,
		from: (f64, f64),
		to: (f64, f64),
		start: Color,
		end: Color,
		width: f64,
	) {
		let gradient = self.create_linear_gradient(from.0, from.1, to.0, to.1);
		let _ = gradient.add_color_stop(0.0, &start.to_css());
		let _ = gradient.add_color_stop(1.0, &end.to_css());

		#[allow(deprecated)]
		self.set_stroke_style(&gradient);
		self.set_line_width(width);
		self.begin_path();
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.stroke();
	}

	fn fill_radial_glow(&mut self, center: (f64, f64), radius: f64, color: Color, viewport: Viewport) {
		let Ok(gradient) =
			self.create_radial_gradient(center.0, center.1, 0.0, center.0, center.1, radius)
		else {
			return;
		};
		let _ = gradient.add_color_stop(0.0, &color.to_css());
		let _ = gradient.add_color_stop(1.0, &color.with_alpha(0.0).to_css());

		#[allow(deprecated)]
		self.set_fill_style(&gradient);
		self.fill_rect(0.0, 0.0, viewport.width, viewport.height);
	}
}

/// Clears the surface and draws the current field state.
pub fn render<S: Surface + ?Sized>(state: &FieldState, surface: &mut S) {
	let viewport = state.viewport();
	surface.clear(viewport);

	draw_particles(state, surface);
	draw_connections(state, surface);

	if state.style.glow.enabled {
		draw_glow(state, surface, viewport);
	}
}

fn draw_particles<S: Surface + ?Sized>(state: &FieldState, surface: &mut S) {
	for p in state.store.particles() {
		surface.fill_circle(p.x, p.y, p.size, p.color);
	}
}

fn draw_connections<S: Surface + ?Sized>(state: &FieldState, surface: &mut S) {
	let links = &state.style.links;
	let particles = state.store.particles();

	for c in state.connections.iter().filter(|c| c.active) {
		// Skip indices that no longer exist.
		let (Some(a), Some(b)) = (particles.get(c.from), particles.get(c.to)) else {
			continue;
		};
		let alpha = c.opacity * links.alpha_scale;
		surface.stroke_gradient_line(
			(a.x, a.y),
			(b.x, b.y),
			links.start.with_alpha(alpha),
			links.end.with_alpha(alpha),
			links.width,
		);
	}
}

fn draw_glow<S: Surface + ?Sized>(state: &FieldState, surface: &mut S, viewport: Viewport) {
	let Some(pointer) = state.pointer else {
		return;
	};
	let glow = &state.style.glow;
	surface.fill_radial_glow((pointer.x, pointer.y), glow.radius, glow.color, viewport);
}

#[cfg(test)]
mod tests {
	use super::super::style::FieldStyle;
	use super::*;

	fn frame(state: &FieldState) -> Vec<DrawCommand> {
		let mut commands = Vec::new();
		render(state, &mut commands);
		commands
	}

	#[test]
	fn frame_starts_with_clear_then_particles() {
		let state = FieldState::new(FieldStyle::ambient(), Viewport::new(800.0, 600.0), 1);
		let commands = frame(&state);

		assert_eq!(commands[0], DrawCommand::Clear(Viewport::new(800.0, 600.0)));
		let circles = commands[1..=state.store.len()]
			.iter()
			.filter(|c| matches!(c, DrawCommand::Circle { .. }))
			.count();
		assert_eq!(circles, state.store.len());
	}

	#[test]
	fn only_active_connections_are_stroked() {
		let state = FieldState::new(FieldStyle::ambient(), Viewport::new(800.0, 600.0), 2);
		let lines = frame(&state)
			.into_iter()
			.filter(|c| matches!(c, DrawCommand::Line { .. }))
			.count();
		assert_eq!(lines, state.connections.iter().filter(|c| c.active).count());
	}

	#[test]
	fn line_alpha_scales_connection_opacity() {
		let mut state = FieldState::new(FieldStyle::ambient(), Viewport::new(800.0, 600.0), 2);
		let p = state.store.particles_mut();
		(p[0].x, p[0].y, p[1].x, p[1].y) = (0.0, 0.0, 10.0, 0.0);
		state.tick();

		let commands = frame(&state);
		let line = commands.iter().find_map(|c| match c {
			DrawCommand::Line { start, end, width, .. } => Some((*start, *end, *width)),
			_ => None,
		});
		let Some((start, end, width)) = line else {
			panic!("expected at least one connection line");
		};
		assert_eq!(width, 0.5);
		assert_eq!((start.r, start.g, start.b), (100, 150, 255));
		assert_eq!((end.r, end.g, end.b), (150, 100, 255));
		assert!(start.a > 0.0 && start.a <= 0.4);
	}

	#[test]
	fn glow_needs_a_pointer_and_an_enabled_style() {
		let viewport = Viewport::new(800.0, 600.0);
		let has_glow = |cmds: &[DrawCommand]| cmds.iter().any(|c| matches!(c, DrawCommand::Glow { .. }));

		let mut ambient = FieldState::new(FieldStyle::ambient(), viewport, 4);
		assert!(!has_glow(&frame(&ambient)));
		ambient.set_pointer(120.0, 80.0);
		let commands = frame(&ambient);
		assert_eq!(
			commands.last(),
			Some(&DrawCommand::Glow {
				center: (120.0, 80.0),
				radius: 150.0,
				color: Color::rgba(100, 150, 255, 0.2),
			})
		);

		let mut reactive = FieldState::new(FieldStyle::reactive(), viewport, 4);
		reactive.set_pointer(120.0, 80.0);
		assert!(!has_glow(&frame(&reactive)));
	}
}
