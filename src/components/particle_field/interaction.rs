//! Per-frame particle motion and pairwise connection pass.
//!
//! Everything here is a free function over particle slices. The pointer is
//! passed in explicitly, so each step is a pure function of the current
//! particles, the viewport and the pointer.

use super::types::{Connection, Particle, Pointer, Viewport};

/// Clamps `pos` into `[0, max]`, turning `vel` back inward on contact.
fn bounce(pos: &mut f64, vel: &mut f64, max: f64) {
	if *pos < 0.0 {
		*pos = 0.0;
		*vel = vel.abs();
	} else if *pos > max {
		*pos = max;
		*vel = -vel.abs();
	}
}

/// Moves every particle by its velocity, reflecting off the viewport edges.
pub fn drift(particles: &mut [Particle], viewport: Viewport) {
	for p in particles {
		p.x += p.vx;
		p.y += p.vy;
		bounce(&mut p.x, &mut p.vx, viewport.width);
		bounce(&mut p.y, &mut p.vy, viewport.height);
	}
}

/// Displacement applied to a particle at `(x, y)` by the pointer.
///
/// Points straight away from the pointer with magnitude
/// `(radius - d) / radius * density`. Zero outside the radius and when the
/// pointer sits exactly on the particle.
pub fn repulsion(x: f64, y: f64, pointer: Pointer, radius: f64, density: f64) -> (f64, f64) {
	let (dx, dy) = (pointer.x - x, pointer.y - y);
	let distance = dx.hypot(dy);
	if distance == 0.0 || !(distance < radius) {
		return (0.0, 0.0);
	}

	let force = (radius - distance) / radius * density;
	(-dx / distance * force, -dy / distance * force)
}

/// Advances a pointer-reactive field by one frame.
///
/// Particles within `radius` of the pointer are pushed away. All others close
/// `1 / relax` of their offset from the baseline while the baseline itself
/// drifts and bounces, so an unperturbed particle never moves further from its
/// baseline than it already is.
pub fn repel(
	particles: &mut [Particle],
	viewport: Viewport,
	pointer: Option<Pointer>,
	radius: f64,
	relax: f64,
) {
	let keep = if relax > 1.0 { 1.0 - 1.0 / relax } else { 0.0 };

	for p in particles {
		let near = pointer.filter(|ptr| ptr.distance_to(p.x, p.y) < radius);

		if let Some(ptr) = near {
			let (dx, dy) = repulsion(p.x, p.y, ptr, radius, p.density);
			p.x += dx;
			p.y += dy;
		} else {
			let (off_x, off_y) = ((p.x - p.base_x) * keep, (p.y - p.base_y) * keep);

			p.base_x += p.vx;
			p.base_y += p.vy;
			bounce(&mut p.base_x, &mut p.vx, viewport.width);
			bounce(&mut p.base_y, &mut p.vy, viewport.height);

			p.x = p.base_x + off_x;
			p.y = p.base_y + off_y;
		}

		p.x = p.x.clamp(0.0, viewport.width.max(0.0));
		p.y = p.y.clamp(0.0, viewport.height.max(0.0));
	}
}

/// Evaluates a single pair against `max_distance`.
pub fn link(
	particles: &[Particle],
	from: usize,
	to: usize,
	max_distance: f64,
	opacity_scale: f64,
) -> Connection {
	let (a, b) = (&particles[from], &particles[to]);
	let distance = (a.x - b.x).hypot(a.y - b.y);
	let active = distance < max_distance;
	let opacity = if active {
		(1.0 - distance / max_distance) * opacity_scale
	} else {
		0.0
	};

	Connection {
		from,
		to,
		distance,
		active,
		opacity,
	}
}

/// Recomputes every unordered pair into `out`, reusing its allocation.
///
/// Quadratic in the particle count; the spawn caps keep this to a few
/// thousand pairs per frame.
pub fn connect(
	particles: &[Particle],
	max_distance: f64,
	opacity_scale: f64,
	out: &mut Vec<Connection>,
) {
	out.clear();
	let n = particles.len();
	out.reserve(n * n.saturating_sub(1) / 2);

	for from in 0..n {
		for to in from + 1..n {
			out.push(link(particles, from, to, max_distance, opacity_scale));
		}
	}
}
