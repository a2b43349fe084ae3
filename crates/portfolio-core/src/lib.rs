//! Platform-independent pieces of the portfolio front-end.
//!
//! Nothing in this crate touches browser APIs; the web crate wires these
//! models to the DOM and to a Canvas 2D context.

pub mod constants;
pub mod contact;
pub mod nav;
pub mod particles;
pub mod reveal;
pub mod slider;
pub mod stats;
pub mod surface;
pub mod system;
pub mod theme;

pub use constants::*;
pub use contact::{encode_uri_component, ContactError, ContactForm};
pub use nav::{active_index, is_in_page_link, MobileMenu};
pub use particles::{link_alpha, particle_count, Hue, Link, Particle, ParticleField};
pub use slider::{KeyCommand, Slider, Span};
pub use stats::{FrameStats, FrameSummary};
pub use surface::{BackingSize, Glow, Hsla, Rgba, Stroke, Surface};
pub use system::ParticleSystem;
pub use theme::{Theme, ThemeParseError};
