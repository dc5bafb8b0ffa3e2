//! spritefx - Deterministic growth effects and recolor styles for pixel art
//!
//! This library provides functionality to:
//! - Grow themed structures (spikes, vines, flames, crystals, ...) outward from
//!   the silhouette of an RGBA sprite, reproducibly from an integer seed
//! - Recolor sprites with global per-pixel styles at a chosen intensity
//! - Load, scale and save sprites for the `spritefx` command-line tool
//!
//! ```ignore
//! let sprite = spritefx::input::load_sprite(Path::new("hero.png"))?;
//! let spiky = spritefx::transform(&sprite, "spikes", 42)?;
//! ```

pub mod canvas;
pub mod cli;
pub mod composite;
pub mod config;
pub mod effects;
pub mod error;
pub mod input;
pub mod logging;
pub mod output;
pub mod pixels;
pub mod restyle;
pub mod rng;
pub mod sampler;
pub mod suggest;
pub mod tint;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use effects::{catalog, resolve, transform, EffectKind};
pub use error::TransformError;
pub use pixels::{PixelBuffer, OPACITY_THRESHOLD};
pub use restyle::{restyle, Style};
pub use rng::SeededRng;
