//! Builds the displaced vertex grid and triangle list of one face.

use log::debug;
use rayon::prelude::*;
use thiserror::Error;

use crate::geometry::{grid_to_sphere, CubeFaceId};
use crate::noise::{NoiseSource, NoiseStack};
use super::face_mesh::FaceMesh;

/// Largest accepted resolution.
///
/// One face at this size is about 4.2M vertices and 25M indices (~150 MiB), so
/// a whole planet stays under 1 GiB. `u32` indices would allow up to 65534, but
/// the buffers would no longer fit in memory.
pub const MAX_RESOLUTION: u32 = 2048;

/// Errors that can occur while building a face.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    #[error("Invalid resolution {0}: must be between 1 and {max}", max = MAX_RESOLUTION)]
    InvalidResolution(u32),
    #[error("Non-finite elevation on face {face} at grid ({x}, {y})")]
    NonFiniteElevation { face: CubeFaceId, x: u32, y: u32 },
}

/// Checks that `resolution` produces a non-empty, `u32`-indexable grid.
pub fn validate_resolution(resolution: u32) -> Result<(), MeshError> {
    if resolution == 0 || resolution > MAX_RESOLUTION {
        return Err(MeshError::InvalidResolution(resolution));
    }
    Ok(())
}

/// Number of vertices in a face of the given resolution.
pub fn vertex_count(resolution: u32) -> usize {
    let row = resolution as usize + 1;
    row * row
}

/// Number of triangle-list indices in a face of the given resolution.
pub fn index_count(resolution: u32) -> usize {
    let r = resolution as usize;
    6 * r * r
}

/// Builds one face of the planet.
///
/// Vertices are laid out row-major (`i = y * (resolution + 1) + x`) and displaced
/// along their sphere direction by `1 + elevation`. Every vertex is evaluated
/// independently, so the grid is filled in parallel; the result is identical to
/// a sequential pass.
///
/// # Arguments
/// * `face` - The cube face to build
/// * `resolution` - Number of grid cells along each edge
/// * `stack` - Elevation layers
/// * `noise` - Noise primitive sampled by the layers
///
/// # Returns
/// The complete face, or an error if the resolution is out of range or the
/// noise produced a non-finite elevation. No partial mesh is ever returned.
pub fn build_face<N>(
    face: CubeFaceId,
    resolution: u32,
    stack: &NoiseStack,
    noise: &N,
) -> Result<FaceMesh, MeshError>
where
    N: NoiseSource + ?Sized,
{
    validate_resolution(resolution)?;

    let axes = face.axes();
    let row = resolution as usize + 1;
    let mut vertices = vec![glam::Vec3::ZERO; vertex_count(resolution)];

    vertices
        .par_iter_mut()
        .enumerate()
        .try_for_each(|(i, vertex)| {
            let x = (i % row) as u32;
            let y = (i / row) as u32;

            let point_on_sphere = grid_to_sphere(&axes, x, y, resolution);
            let elevation = stack.evaluate(point_on_sphere, noise);
            if !elevation.is_finite() {
                return Err(MeshError::NonFiniteElevation { face, x, y });
            }

            *vertex = point_on_sphere * (elevation + 1.0);
            Ok(())
        })?;

    let indices = grid_indices(resolution);

    debug!(
        "Built face {}: {} vertices, {} triangles",
        face,
        vertices.len(),
        indices.len() / 3
    );

    Ok(FaceMesh {
        face,
        resolution,
        vertices,
        indices,
    })
}

/// Triangle-list indices for a `resolution x resolution` cell grid.
///
/// Each cell with top-left vertex `i` yields `i, i+R+2, i+R+1` and
/// `i, i+1, i+R+2`, with `R` the resolution. Cells are emitted row by row.
pub fn grid_indices(resolution: u32) -> Vec<u32> {
    let row = resolution + 1;
    let mut indices = Vec::with_capacity(index_count(resolution));

    for y in 0..resolution {
        for x in 0..resolution {
            let i = y * row + x;
            indices.extend_from_slice(&[
                i,
                i + resolution + 2,
                i + resolution + 1,
                i,
                i + 1,
                i + resolution + 2,
            ]);
        }
    }

    debug_assert_eq!(indices.len(), index_count(resolution));
    indices
}
