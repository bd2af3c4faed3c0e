//! particle-field: animated canvas backgrounds for a single-page portfolio.
//!
//! This crate provides WASM-based Leptos components that draw a decorative
//! particle field behind the page: a connected, glowing field for the hero
//! section and a pointer-reactive field for the rest of the page.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

pub mod components;

pub use components::particle_field::{FieldStyle, HeroBackground, ParticleBackground};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("particle-field: logging initialized");
}

/// Main application component.
/// Mounts the page-wide reactive field with the hero section on top of it.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="AppVanguard | Portfolio" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />
		<Meta
			name="description"
			content="Flutter, React.js, and .NET Core Development Team Portfolio"
		/>

		<main
			class="page"
			style="position: relative; min-height: 100vh; overflow: hidden; color: white; background: #0b1020;"
		>
			<ParticleBackground />
			<div class="page-content" style="position: relative; z-index: 10;">
				<section
					class="hero"
					style="position: relative; min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; text-align: center;"
				>
					<HeroBackground />
					<h1 style="position: relative; z-index: 10;">"AppVanguard"</h1>
					<h2 style="position: relative; z-index: 10;">
						"Flutter • React.js • .NET Core"
					</h2>
				</section>
			</div>
		</main>
	}
}
