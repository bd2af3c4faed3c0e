//! Leptos components wrapping the particle field canvas.
//!
//! Each component renders a `<canvas>` covering the viewport. Once the canvas
//! is in the DOM an effect builds a [`WebHost`](super::web::WebHost) and mounts
//! the field; the component's cleanup tears it down again. If the page offers
//! no 2d context the failure is logged and the canvas simply stays empty.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use send_wrapper::SendWrapper;
use web_sys::HtmlCanvasElement;

use super::style::FieldStyle;
use super::web::{self, WebLifecycle};

/// Keyframes for the two blurred orbs drifting under the hero canvas.
const ORB_CSS: &str = r#"
@keyframes particle-field-orb-a {
	0%, 100% { transform: translate(0, 0) scale(1); }
	50% { transform: translate(30px, -30px) scale(1.1); }
}
@keyframes particle-field-orb-b {
	0%, 100% { transform: translate(0, 0) scale(1); }
	50% { transform: translate(-40px, 40px) scale(1.2); }
}
.particle-field-orb {
	position: absolute;
	z-index: 0;
	border-radius: 9999px;
	filter: blur(64px);
	pointer-events: none;
}
.particle-field-orb-a {
	top: 25%;
	left: 25%;
	width: 16rem;
	height: 16rem;
	background: linear-gradient(to right, rgba(168, 85, 247, 0.2), rgba(59, 130, 246, 0.2));
	animation: particle-field-orb-a 15s ease-in-out infinite;
}
.particle-field-orb-b {
	bottom: 25%;
	right: 25%;
	width: 24rem;
	height: 24rem;
	background: linear-gradient(to right, rgba(6, 182, 212, 0.2), rgba(59, 130, 246, 0.2));
	animation: particle-field-orb-b 20s ease-in-out infinite;
}
"#;

/// Seed for a freshly mounted field; every mount looks different.
fn mount_seed() -> u64 {
	(js_sys::Math::random() * u64::MAX as f64) as u64
}

/// Canvas driven by a particle field lifecycle.
#[component]
fn FieldCanvas(config: FieldStyle, #[prop(into)] class_name: String) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let canvas_style = format!(
		"position: absolute; inset: 0; z-index: 0; opacity: {};",
		config.canvas_opacity
	);
	let field: Rc<RefCell<Option<WebLifecycle>>> = Rc::new(RefCell::new(None));
	let field_mount = field.clone();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if field_mount.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();

		match web::start(canvas, config.clone(), mount_seed()) {
			Ok(lifecycle) => *field_mount.borrow_mut() = Some(lifecycle),
			Err(err) => warn!("particle-field: '{}' disabled: {}", config.name, err),
		}
	});

	let field_cleanup = SendWrapper::new(field);
	on_cleanup(move || {
		let lifecycle = field_cleanup.borrow_mut().take();
		if let Some(lifecycle) = lifecycle {
			lifecycle.borrow_mut().teardown();
		}
	});

	view! { <canvas node_ref=canvas_ref class=class_name style=canvas_style /> }
}

/// Hero backdrop: a gradient wash, the connected particle field, and two
/// slowly pulsing blurred orbs.
#[component]
pub fn HeroBackground(#[prop(optional)] config: Option<FieldStyle>) -> impl IntoView {
	let config = config.unwrap_or_else(FieldStyle::ambient);

	view! {
		<style>{ORB_CSS}</style>
		<div
			class="hero-backdrop"
			style="position: absolute; inset: 0; z-index: 0; background: linear-gradient(to bottom right, #581c87, #1e40af, #312e81);"
		/>
		<FieldCanvas config=config class_name="hero-background" />
		<div class="particle-field-orb particle-field-orb-a" />
		<div class="particle-field-orb particle-field-orb-b" />
	}
}

/// Full-page field that scatters away from the pointer.
#[component]
pub fn ParticleBackground(#[prop(optional)] config: Option<FieldStyle>) -> impl IntoView {
	let config = config.unwrap_or_else(FieldStyle::reactive);

	view! { <FieldCanvas config=config class_name="particle-background" /> }
}
