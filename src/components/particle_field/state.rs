//! Field state advanced once per animation frame.
//!
//! Couples a [`ParticleStore`] with the connection buffer and the tracked
//! pointer. `tick` runs the interaction pass for the configured motion; the
//! renderer only ever reads the result.

use super::interaction;
use super::store::ParticleStore;
use super::style::{FieldStyle, Motion};
use super::types::{Connection, Pointer, Viewport};

pub struct FieldState {
	pub style: FieldStyle,
	pub store: ParticleStore,
	pub connections: Vec<Connection>,
	/// `None` until the first pointer or touch move is observed.
	pub pointer: Option<Pointer>,
	/// Frames advanced since the store was last built.
	pub frame: u64,
}

impl FieldState {
	pub fn new(style: FieldStyle, viewport: Viewport, seed: u64) -> Self {
		let store = ParticleStore::new(&style.spawn, viewport, seed);
		let mut state = Self {
			style,
			store,
			connections: Vec::new(),
			pointer: None,
			frame: 0,
		};
		state.relink();
		state
	}

	pub fn viewport(&self) -> Viewport {
		self.store.viewport()
	}

	fn relink(&mut self) {
		let max_distance = self.style.links.range.max_distance(self.viewport());
		interaction::connect(
			self.store.particles(),
			max_distance,
			self.style.links.opacity_scale,
			&mut self.connections,
		);
	}

	/// Moves every particle one frame, then recomputes the connections.
	pub fn tick(&mut self) {
		let viewport = self.viewport();
		match self.style.motion {
			Motion::Drift => interaction::drift(self.store.particles_mut(), viewport),
			Motion::Repel { radius, relax } => interaction::repel(
				self.store.particles_mut(),
				viewport,
				self.pointer,
				radius,
				relax,
			),
		}
		self.relink();
		self.frame += 1;
	}

	/// Throws the current population away and spawns one for `viewport`.
	pub fn resize(&mut self, viewport: Viewport) {
		self.store.rebuild(viewport);
		self.frame = 0;
		self.relink();
	}

	pub fn set_pointer(&mut self, x: f64, y: f64) {
		self.pointer = Some(Pointer { x, y });
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn new_state_links_every_pair() {
		let state = FieldState::new(FieldStyle::ambient(), Viewport::new(800.0, 600.0), 3);
		assert_eq!(state.store.len(), 48);
		assert_eq!(state.connections.len(), 48 * 47 / 2);
		assert!(state.pointer.is_none());
	}

	#[test]
	fn connections_track_moving_particles() {
		let mut state = FieldState::new(FieldStyle::ambient(), Viewport::new(800.0, 600.0), 5);
		for _ in 0..30 {
			state.tick();
		}
		let particles = state.store.particles();
		for c in &state.connections {
			let (a, b) = (&particles[c.from], &particles[c.to]);
			let d = (a.x - b.x).hypot(a.y - b.y);
			assert!((c.distance - d).abs() < 1e-9);
			assert_eq!(c.active, d < 90.0);
		}
		assert_eq!(state.frame, 30);
	}

	#[test]
	fn resize_rebuilds_store_and_links() {
		let mut state = FieldState::new(FieldStyle::reactive(), Viewport::new(800.0, 600.0), 9);
		state.set_pointer(10.0, 10.0);
		state.tick();

		state.resize(Viewport::new(300.0, 300.0));
		assert_eq!(state.store.len(), 10);
		assert_eq!(state.connections.len(), 45);
		assert_eq!(state.frame, 0);
		assert_eq!(state.pointer, Some(Pointer { x: 10.0, y: 10.0 }));
	}

	#[test]
	fn pointer_does_not_move_ambient_fields() {
		let viewport = Viewport::new(800.0, 600.0);
		let mut calm = FieldState::new(FieldStyle::ambient(), viewport, 11);
		let mut poked = FieldState::new(FieldStyle::ambient(), viewport, 11);
		poked.set_pointer(400.0, 300.0);
		calm.tick();
		poked.tick();
		assert_eq!(calm.store.particles(), poked.store.particles());
	}
}
