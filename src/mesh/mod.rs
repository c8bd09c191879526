//! Per-face mesh construction.
//!
//! [`build_face`] turns a cube face, a grid resolution and a noise stack into
//! the vertex and index buffers of one sixth of the planet.

mod builder;
mod face_mesh;

pub use builder::{
    build_face, grid_indices, validate_resolution, vertex_count, index_count,
    MeshError, MAX_RESOLUTION,
};
pub use face_mesh::FaceMesh;
