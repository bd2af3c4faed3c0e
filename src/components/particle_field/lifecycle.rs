//! Mount / frame / teardown state machine for a particle field.
//!
//! The controller never talks to the browser directly. Everything
//! host-specific (sizing the surface, registering listeners, scheduling the
//! next frame) goes through [`FrameHost`], so the whole loop can be driven by
//! hand in tests.

use log::{debug, info};
use thiserror::Error;

use super::render::{self, Surface};
use super::state::FieldState;
use super::style::FieldStyle;
use super::types::Viewport;

/// Services the lifecycle controller needs from its environment.
pub trait FrameHost {
	type Surface: Surface + ?Sized;

	/// Sizes the drawing surface to the current viewport and returns it.
	fn fit_viewport(&mut self) -> Viewport;
	fn surface(&mut self) -> &mut Self::Surface;
	/// Starts delivering resize, pointer and touch events to the controller.
	fn attach_listeners(&mut self);
	/// Stops delivering every event registered by `attach_listeners`.
	fn detach_listeners(&mut self);
	/// Arranges for `Lifecycle::frame` to run once on the next display frame.
	fn request_frame(&mut self);
	/// Drops the pending frame request, if any.
	fn cancel_frame(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
	Uninitialized,
	Running,
	TornDown,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LifecycleError {
	#[error("particle field is already running")]
	AlreadyRunning,
	#[error("particle field was torn down and cannot be mounted again")]
	TornDown,
}

/// Owns one field and drives it through its host.
pub struct Lifecycle<H: FrameHost> {
	host: H,
	style: FieldStyle,
	seed: u64,
	field: Option<FieldState>,
	phase: Phase,
}

impl<H: FrameHost> Lifecycle<H> {
	pub fn new(host: H, style: FieldStyle, seed: u64) -> Self {
		Self {
			host,
			style,
			seed,
			field: None,
			phase: Phase::Uninitialized,
		}
	}

	pub fn phase(&self) -> Phase {
		self.phase
	}

	pub fn field(&self) -> Option<&FieldState> {
		self.field.as_ref()
	}

	pub fn host(&self) -> &H {
		&self.host
	}

	pub fn host_mut(&mut self) -> &mut H {
		&mut self.host
	}

	/// Attaches listeners, builds the initial population and schedules the
	/// first frame.
	pub fn mount(&mut self) -> Result<(), LifecycleError> {
		match self.phase {
			Phase::Uninitialized => {}
			Phase::Running => return Err(LifecycleError::AlreadyRunning),
			Phase::TornDown => return Err(LifecycleError::TornDown),
		}

		self.host.attach_listeners();
		let viewport = self.host.fit_viewport();
		let field = FieldState::new(self.style.clone(), viewport, self.seed);
		info!(
			"particle-field: mounted '{}' with {} particles",
			self.style.name,
			field.store.len()
		);
		self.field = Some(field);
		self.phase = Phase::Running;
		self.host.request_frame();
		Ok(())
	}

	/// Advances and redraws the field, then schedules the next frame.
	pub fn frame(&mut self) {
		if self.phase != Phase::Running {
			return;
		}
		let Some(field) = self.field.as_mut() else {
			return;
		};

		field.tick();
		render::render(field, self.host.surface());
		self.host.request_frame();
	}

	/// Re-fits the surface and rebuilds the population before the next frame.
	pub fn resize(&mut self) {
		if self.phase != Phase::Running {
			return;
		}
		let viewport = self.host.fit_viewport();
		if let Some(field) = self.field.as_mut() {
			field.resize(viewport);
			debug!(
				"particle-field: resized to {}x{}",
				viewport.width, viewport.height
			);
		}
	}

	pub fn pointer(&mut self, x: f64, y: f64) {
		if self.phase != Phase::Running {
			return;
		}
		if let Some(field) = self.field.as_mut() {
			field.set_pointer(x, y);
		}
	}

	/// Detaches every listener and cancels the pending frame. Safe to call
	/// more than once; later callbacks are ignored.
	pub fn teardown(&mut self) {
		if self.phase == Phase::Running {
			self.host.detach_listeners();
			self.host.cancel_frame();
			info!("particle-field: tore down '{}'", self.style.name);
		}
		self.field = None;
		self.phase = Phase::TornDown;
	}
}
