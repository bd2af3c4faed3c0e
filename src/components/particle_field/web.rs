//! Browser implementation of [`FrameHost`].
//!
//! Window listeners and the `requestAnimationFrame` callback hold a `Weak`
//! handle to the lifecycle that owns this host, so dropping the lifecycle
//! releases everything without a reference cycle.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::warn;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, TouchEvent, Window};

use super::lifecycle::{FrameHost, Lifecycle, LifecycleError};
use super::style::FieldStyle;
use super::types::Viewport;

/// Shared handle to a lifecycle driven by browser callbacks.
pub type WebLifecycle = Rc<RefCell<Lifecycle<WebHost>>>;

/// Reasons a field cannot start in the current page.
#[derive(Debug, Error)]
pub enum SetupError {
	#[error("no global window")]
	NoWindow,
	#[error("2d drawing context is unavailable")]
	ContextUnavailable,
	#[error("javascript error: {0}")]
	Js(String),
	#[error(transparent)]
	Lifecycle(#[from] LifecycleError),
}

impl From<JsValue> for SetupError {
	fn from(value: JsValue) -> Self {
		SetupError::Js(format!("{value:?}"))
	}
}

/// Window, canvas and 2d context resolved before any callback exists.
pub struct CanvasTarget {
	window: Window,
	canvas: HtmlCanvasElement,
	context: CanvasRenderingContext2d,
}

impl CanvasTarget {
	pub fn acquire(canvas: HtmlCanvasElement) -> Result<Self, SetupError> {
		let window = web_sys::window().ok_or(SetupError::NoWindow)?;
		let context = canvas
			.get_context("2d")?
			.ok_or(SetupError::ContextUnavailable)?
			.dyn_into::<CanvasRenderingContext2d>()
			.map_err(|_| SetupError::ContextUnavailable)?;

		Ok(Self {
			window,
			canvas,
			context,
		})
	}
}

pub struct WebHost {
	target: CanvasTarget,
	on_resize: Closure<dyn FnMut()>,
	on_mousemove: Closure<dyn FnMut(MouseEvent)>,
	on_touchmove: Closure<dyn FnMut(TouchEvent)>,
	on_frame: Closure<dyn FnMut()>,
	frame_id: Option<i32>,
	attached: bool,
}

/// Runs `f` on the lifecycle if it is still alive and not already borrowed.
fn with_lifecycle(
	handle: &Weak<RefCell<Lifecycle<WebHost>>>,
	f: impl FnOnce(&mut Lifecycle<WebHost>),
) {
	if let Some(lifecycle) = handle.upgrade() {
		if let Ok(mut lifecycle) = lifecycle.try_borrow_mut() {
			f(&mut lifecycle);
		}
	}
}

impl WebHost {
	pub fn new(target: CanvasTarget, handle: Weak<RefCell<Lifecycle<WebHost>>>) -> Self {
		let (resize_h, mouse_h, touch_h, frame_h) =
			(handle.clone(), handle.clone(), handle.clone(), handle);

		Self {
			target,
			on_resize: Closure::new(move || with_lifecycle(&resize_h, |l| l.resize())),
			on_mousemove: Closure::new(move |ev: MouseEvent| {
				let (x, y) = (ev.client_x() as f64, ev.client_y() as f64);
				with_lifecycle(&mouse_h, |l| l.pointer(x, y));
			}),
			on_touchmove: Closure::new(move |ev: TouchEvent| {
				if let Some(touch) = ev.touches().get(0) {
					let (x, y) = (touch.client_x() as f64, touch.client_y() as f64);
					with_lifecycle(&touch_h, |l| l.pointer(x, y));
				}
			}),
			on_frame: Closure::new(move || with_lifecycle(&frame_h, |l| l.frame())),
			frame_id: None,
			attached: false,
		}
	}

	fn listeners(&self) -> [(&'static str, &js_sys::Function); 3] {
		[
			("resize", self.on_resize.as_ref().unchecked_ref()),
			("mousemove", self.on_mousemove.as_ref().unchecked_ref()),
			("touchmove", self.on_touchmove.as_ref().unchecked_ref()),
		]
	}
}

impl FrameHost for WebHost {
	type Surface = CanvasRenderingContext2d;

	fn fit_viewport(&mut self) -> Viewport {
		let window = &self.target.window;
		let dimension =
			|v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
		let viewport = Viewport::new(
			dimension(window.inner_width()),
			dimension(window.inner_height()),
		);

		self.target.canvas.set_width(viewport.width as u32);
		self.target.canvas.set_height(viewport.height as u32);
		viewport
	}

	fn surface(&mut self) -> &mut CanvasRenderingContext2d {
		&mut self.target.context
	}

	fn attach_listeners(&mut self) {
		if self.attached {
			return;
		}
		for (event, callback) in self.listeners() {
			if let Err(err) = self
				.target
				.window
				.add_event_listener_with_callback(event, callback)
			{
				warn!("particle-field: failed to listen for {event}: {err:?}");
			}
		}
		self.attached = true;
	}

	fn detach_listeners(&mut self) {
		if !self.attached {
			return;
		}
		for (event, callback) in self.listeners() {
			let _ = self
				.target
				.window
				.remove_event_listener_with_callback(event, callback);
		}
		self.attached = false;
	}

	fn request_frame(&mut self) {
		match self
			.target
			.window
			.request_animation_frame(self.on_frame.as_ref().unchecked_ref())
		{
			Ok(id) => self.frame_id = Some(id),
			Err(err) => warn!("particle-field: requestAnimationFrame failed: {err:?}"),
		}
	}

	fn cancel_frame(&mut self) {
		if let Some(id) = self.frame_id.take() {
			let _ = self.target.window.cancel_animation_frame(id);
		}
	}
}

/// Resolves the canvas, builds the host and mounts a field on it.
pub fn start(
	canvas: HtmlCanvasElement,
	style: FieldStyle,
	seed: u64,
) -> Result<WebLifecycle, SetupError> {
	let target = CanvasTarget::acquire(canvas)?;
	let lifecycle: WebLifecycle = Rc::new_cyclic(|handle| {
		RefCell::new(Lifecycle::new(
			WebHost::new(target, handle.clone()),
			style,
			seed,
		))
	});
	lifecycle.borrow_mut().mount()?;
	Ok(lifecycle)
}
