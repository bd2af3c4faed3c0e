//! Decorative particle field backgrounds.
//!
//! Renders drifting particles on an HTML canvas in one of two flavours:
//! - Ambient: particles bounce around the viewport, nearby pairs are joined by
//!   gradient lines, and a soft glow follows the pointer
//! - Reactive: particles scatter away from the pointer or touch point and
//!   settle back to their resting position
//!
//! The simulation and drawing are host-agnostic. [`Lifecycle`] drives a field
//! through any [`FrameHost`]; the browser host lives in the `web` module and is
//! wired up by the [`HeroBackground`] and [`ParticleBackground`] components.
//!
//! # Example
//!
//! ```ignore
//! use particle_field::{HeroBackground, ParticleBackground};
//!
//! view! {
//!     <main>
//!         <ParticleBackground />
//!         <section class="hero"><HeroBackground /></section>
//!     </main>
//! }
//! ```

mod component;
pub mod interaction;
pub mod lifecycle;
pub mod render;
mod state;
pub mod store;
pub mod style;
mod types;
mod web;

pub use component::{HeroBackground, ParticleBackground};
pub use lifecycle::{FrameHost, Lifecycle, LifecycleError, Phase};
pub use render::{DrawCommand, Surface};
pub use state::FieldState;
pub use store::ParticleStore;
pub use style::{Color, FieldStyle};
pub use types::{Connection, Particle, Pointer, Viewport};
pub use web::{SetupError, WebHost};
