//! Layered fractal noise for planet elevation.
//!
//! A [`NoiseStack`] sums the output of its enabled [`NoiseLayer`]s, each of which
//! accumulates several octaves of an injected [`NoiseSource`].

mod source;
mod layer;
mod stack;

pub use source::{NoiseSource, SimplexNoise};
pub use layer::NoiseLayer;
pub use stack::NoiseStack;
