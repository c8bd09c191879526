//! Procedural cube-sphere planet mesh generator.
//!
//! This crate maps the six faces of a subdivided cube onto the unit sphere,
//! displaces every vertex by a stack of layered fractal noise, and assembles
//! per-face vertex and index buffers ready for a renderer.

pub mod config;
pub mod geometry;
pub mod mesh;
pub mod noise;
pub mod planet;

pub use config::{ConfigError, PlanetConfig};
pub use geometry::{CubeFaceId, FaceAxes};
pub use mesh::{build_face, FaceMesh, MeshError};
pub use noise::{NoiseLayer, NoiseSource, NoiseStack, SimplexNoise};
pub use planet::{GenerateError, MeshHost, MeshSlots, PlanetGenerator, PlanetMesh};
