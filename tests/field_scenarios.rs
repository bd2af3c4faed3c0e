//! End-to-end scenarios driving whole fields through their public API.

#![allow(unused_crate_dependencies)]

use particle_field::components::particle_field::interaction;
use particle_field::components::particle_field::store::particle_count;
use particle_field::components::particle_field::{
	DrawCommand, FieldState, FieldStyle, FrameHost, Lifecycle, Phase, Viewport,
};

/// Host that records everything the lifecycle asks of it.
struct ScriptedHost {
	viewport: Viewport,
	listeners: Vec<&'static str>,
	frame_pending: bool,
	frames_requested: usize,
	commands: Vec<DrawCommand>,
}

impl ScriptedHost {
	fn new(width: f64, height: f64) -> Self {
		Self {
			viewport: Viewport::new(width, height),
			listeners: Vec::new(),
			frame_pending: false,
			frames_requested: 0,
			commands: Vec::new(),
		}
	}
}

impl FrameHost for ScriptedHost {
	type Surface = Vec<DrawCommand>;

	fn fit_viewport(&mut self) -> Viewport {
		self.viewport
	}

	fn surface(&mut self) -> &mut Vec<DrawCommand> {
		&mut self.commands
	}

	fn attach_listeners(&mut self) {
		self.listeners = vec!["resize", "mousemove", "touchmove"];
	}

	fn detach_listeners(&mut self) {
		self.listeners.clear();
	}

	fn request_frame(&mut self) {
		self.frame_pending = true;
		self.frames_requested += 1;
	}

	fn cancel_frame(&mut self) {
		self.frame_pending = false;
	}
}

#[test]
fn ambient_800_by_600_spawns_48_particles() {
	let style = FieldStyle::ambient();
	assert_eq!(particle_count(&style.spawn, Viewport::new(800.0, 600.0)), 48);

	let state = FieldState::new(style, Viewport::new(800.0, 600.0), 99);
	assert_eq!(state.store.len(), 48);
}

#[test]
fn close_pair_in_800_by_600_is_connected() {
	let mut state = FieldState::new(FieldStyle::ambient(), Viewport::new(800.0, 600.0), 5);
	let particles = state.store.particles_mut();
	(particles[0].x, particles[0].y) = (0.0, 0.0);
	(particles[1].x, particles[1].y) = (10.0, 0.0);

	let max_distance = state.style.links.range.max_distance(state.viewport());
	assert!((max_distance - 90.0).abs() < 1e-9);

	let c = interaction::link(state.store.particles(), 0, 1, max_distance, 0.5);
	assert!(c.active);
	assert!((c.opacity - (1.0 - 10.0 / 90.0) * 0.5).abs() < 1e-12);
	assert!((c.opacity - 0.444).abs() < 1e-3);
}

#[test]
fn particles_stay_inside_for_many_frames() {
	for (style, seed) in [(FieldStyle::ambient(), 1), (FieldStyle::reactive(), 2)] {
		let viewport = Viewport::new(640.0, 360.0);
		let mut state = FieldState::new(style, viewport, seed);

		for frame in 0..2_000u32 {
			if frame % 50 == 0 {
				// Sweep the pointer across the field to keep perturbing it.
				let t = frame as f64 / 2_000.0;
				state.set_pointer(t * viewport.width, (1.0 - t) * viewport.height);
			}
			state.tick();
			for p in state.store.particles() {
				assert!(
					viewport.contains(p.x, p.y),
					"{} particle escaped to ({}, {}) on frame {frame}",
					state.style.name,
					p.x,
					p.y
				);
			}
		}
	}
}

#[test]
fn reactive_particles_settle_once_the_pointer_leaves() {
	let viewport = Viewport::new(800.0, 600.0);
	let mut state = FieldState::new(FieldStyle::reactive(), viewport, 8);

	state.set_pointer(400.0, 300.0);
	for _ in 0..5 {
		state.tick();
	}
	state.set_pointer(-10_000.0, -10_000.0);

	let mut offsets: Vec<f64> = state.store.particles().iter().map(|p| p.offset()).collect();
	for _ in 0..120 {
		state.tick();
		for (p, last) in state.store.particles().iter().zip(offsets.iter_mut()) {
			let offset = p.offset();
			assert!(offset <= *last + 1e-9, "offset grew from {last} to {offset}");
			*last = offset;
		}
	}
}

#[test]
fn connection_activity_matches_threshold() {
	let viewport = Viewport::new(1280.0, 720.0);
	let mut state = FieldState::new(FieldStyle::ambient(), viewport, 21);
	for _ in 0..10 {
		state.tick();
	}

	let max_distance = viewport.min_side() * 0.15;
	for c in &state.connections {
		assert_eq!(c.active, c.distance < max_distance);
		if !c.active {
			assert_eq!(c.opacity, 0.0);
		} else {
			assert!(c.opacity > 0.0 && c.opacity <= 0.5);
		}
	}
}

#[test]
fn same_seed_same_field() {
	let viewport = Viewport::new(1024.0, 768.0);
	let a = FieldState::new(FieldStyle::reactive(), viewport, 1234);
	let b = FieldState::new(FieldStyle::reactive(), viewport, 1234);
	assert_eq!(a.store.len(), b.store.len());
	assert_eq!(a.store.particles(), b.store.particles());
}

#[test]
fn lifecycle_runs_resizes_and_tears_down() {
	let host = ScriptedHost::new(800.0, 600.0);
	let mut lifecycle = Lifecycle::new(host, FieldStyle::ambient(), 3);
	assert_eq!(lifecycle.phase(), Phase::Uninitialized);
	lifecycle.frame();
	assert_eq!(lifecycle.host().frames_requested, 0);

	lifecycle.mount().expect("mounts once");
	assert_eq!(lifecycle.host().listeners.len(), 3);
	for _ in 0..3 {
		lifecycle.frame();
	}
	assert_eq!(lifecycle.host().frames_requested, 4);
	assert_eq!(lifecycle.field().map(|f| f.frame), Some(3));

	let clears = lifecycle
		.host()
		.commands
		.iter()
		.filter(|c| matches!(c, DrawCommand::Clear(_)))
		.count();
	assert_eq!(clears, 3);

	lifecycle.pointer(200.0, 150.0);
	lifecycle.frame();
	let glow_center = match lifecycle.host().commands.last() {
		Some(DrawCommand::Glow { center, .. }) => Some(*center),
		_ => None,
	};
	assert_eq!(glow_center, Some((200.0, 150.0)));

	lifecycle.host_mut().viewport = Viewport::new(1920.0, 1080.0);
	lifecycle.resize();
	assert_eq!(lifecycle.field().map(|f| f.store.len()), Some(100));
	assert_eq!(lifecycle.field().map(|f| f.frame), Some(0));

	lifecycle.teardown();
	assert!(lifecycle.host().listeners.is_empty());
	assert!(!lifecycle.host().frame_pending);

	let requested = lifecycle.host().frames_requested;
	let drawn = lifecycle.host().commands.len();
	lifecycle.host_mut().viewport = Viewport::new(300.0, 300.0);
	lifecycle.resize();
	lifecycle.pointer(1.0, 1.0);
	lifecycle.frame();
	assert_eq!(lifecycle.phase(), Phase::TornDown);
	assert!(lifecycle.field().is_none());
	assert_eq!(lifecycle.host().frames_requested, requested);
	assert_eq!(lifecycle.host().commands.len(), drawn);
	assert!(!lifecycle.host().frame_pending);
}
