//! Planet orchestration.
//!
//! [`PlanetGenerator`] builds the six faces of the cube-sphere and hands them to
//! a [`MeshHost`] keyed by their stable slot index.

mod generator;
mod host;

pub use generator::{PlanetGenerator, PlanetMesh, GenerateError};
pub use host::{MeshHost, MeshSlots, HostedMesh};
