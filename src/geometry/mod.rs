//! Cube-sphere geometry module.
//!
//! Provides face identification and the mapping from a face's vertex grid
//! onto the unit sphere.

mod face;
mod cube_sphere;

pub use face::CubeFaceId;
pub use cube_sphere::{FaceAxes, grid_to_cube, grid_to_sphere};
