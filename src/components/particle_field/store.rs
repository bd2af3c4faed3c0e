//! Particle population sized to the viewport.

use log::debug;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::style::{Color, SpawnStyle, Tint};
use super::types::{Particle, Viewport};

/// Number of particles for a viewport: `min(cap_limit, floor(area / area_divisor))`.
///
/// Degenerate viewports and divisors yield an empty field.
pub fn particle_count(style: &SpawnStyle, viewport: Viewport) -> usize {
	if !viewport.is_drawable() || !(style.area_divisor > 0.0) {
		return 0;
	}
	let by_area = (viewport.area() / style.area_divisor).floor();
	// Float-to-int casts saturate, so huge viewports still hit the cap.
	(by_area as usize).min(style.cap_limit)
}

/// Uniform sample in `[min, max)`; a reversed or empty range collapses to `min`.
fn sample<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
	min + rng.random::<f64>() * (max - min).max(0.0)
}

fn spawn_one<R: Rng + ?Sized>(style: &SpawnStyle, viewport: Viewport, rng: &mut R) -> Particle {
	let x = rng.random::<f64>() * viewport.width;
	let y = rng.random::<f64>() * viewport.height;
	let size = sample(rng, style.size_min, style.size_max);
	let density = sample(rng, style.density_min, style.density_max);
	let vx = (rng.random::<f64>() - 0.5) * style.speed;
	let vy = (rng.random::<f64>() - 0.5) * style.speed;
	let alpha = sample(rng, style.opacity_min, style.opacity_max);

	let color = match &style.tint {
		Tint::Fixed(color) => color.with_alpha(alpha),
		Tint::Hsl {
			hue,
			saturation,
			lightness,
		} => Color::hsla(
			sample(rng, hue.0, hue.1),
			sample(rng, saturation.0, saturation.1),
			sample(rng, lightness.0, lightness.1),
			alpha,
		),
	};

	Particle {
		x,
		y,
		base_x: x,
		base_y: y,
		vx,
		vy,
		size,
		density,
		color,
	}
}

/// Spawns a fresh population for `viewport`.
pub fn spawn_particles<R: Rng + ?Sized>(
	style: &SpawnStyle,
	viewport: Viewport,
	rng: &mut R,
) -> Vec<Particle> {
	(0..particle_count(style, viewport))
		.map(|_| spawn_one(style, viewport, rng))
		.collect()
}

/// Owns the particles of one field and regenerates them on resize.
pub struct ParticleStore {
	particles: Vec<Particle>,
	viewport: Viewport,
	style: SpawnStyle,
	rng: SmallRng,
}

impl ParticleStore {
	pub fn new(style: &SpawnStyle, viewport: Viewport, seed: u64) -> Self {
		let mut rng = SmallRng::seed_from_u64(seed);
		let particles = spawn_particles(style, viewport, &mut rng);
		debug!(
			"particle-field: spawned {} particles for {}x{}",
			particles.len(),
			viewport.width,
			viewport.height
		);

		Self {
			particles,
			viewport,
			style: style.clone(),
			rng,
		}
	}

	/// Discards every particle and spawns a new population for `viewport`.
	pub fn rebuild(&mut self, viewport: Viewport) {
		self.viewport = viewport;
		self.particles = spawn_particles(&self.style, viewport, &mut self.rng);
		debug!(
			"particle-field: rebuilt {} particles for {}x{}",
			self.particles.len(),
			viewport.width,
			viewport.height
		);
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub fn particles_mut(&mut self) -> &mut [Particle] {
		&mut self.particles
	}

	pub fn viewport(&self) -> Viewport {
		self.viewport
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}
}
