//! Vertex and index buffers for one cube-sphere face.

use glam::Vec3;
use crate::geometry::CubeFaceId;

/// The generated buffers of a single face.
///
/// `vertices` holds `(resolution + 1)^2` positions in row-major order and
/// `indices` holds `6 * resolution^2` triangle-list indices into it.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceMesh {
    /// Which face of the cube this represents.
    pub face: CubeFaceId,
    /// Number of grid cells along each edge.
    pub resolution: u32,
    /// Displaced vertex positions.
    pub vertices: Vec<Vec3>,
    /// Triangle list, three indices per triangle.
    pub indices: Vec<u32>,
}

impl FaceMesh {
    /// Number of vertices, `(resolution + 1)^2` for a built face.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles in the index list.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterates triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Computes smooth per-vertex normals.
    ///
    /// Each triangle adds its unnormalized cross product to its three corners,
    /// so larger triangles weigh more. Vertices not referenced by any triangle
    /// get a zero normal.
    pub fn compute_normals(&self) -> Vec<Vec3> {
        let mut normals = vec![Vec3::ZERO; self.vertices.len()];
        self.accumulate_normals(&mut normals);
        normals
    }

    /// Same as [`FaceMesh::compute_normals`], writing into an existing buffer.
    pub fn compute_normals_into(&self, normals: &mut Vec<Vec3>) {
        normals.clear();
        normals.resize(self.vertices.len(), Vec3::ZERO);
        self.accumulate_normals(normals);
    }

    fn accumulate_normals(&self, normals: &mut [Vec3]) {
        for [a, b, c] in self.triangles() {
            let (a, b, c) = (a as usize, b as usize, c as usize);
            let v0 = self.vertices[a];
            let face_normal = (self.vertices[b] - v0).cross(self.vertices[c] - v0);
            normals[a] += face_normal;
            normals[b] += face_normal;
            normals[c] += face_normal;
        }

        for n in normals.iter_mut() {
            *n = n.normalize_or_zero();
        }
    }

    /// Axis-aligned bounding box as `(min, max)`.
    ///
    /// Returns `(Vec3::ZERO, Vec3::ZERO)` for an empty mesh.
    pub fn bounds(&self) -> (Vec3, Vec3) {
        if self.vertices.is_empty() {
            return (Vec3::ZERO, Vec3::ZERO);
        }

        self.vertices.iter().fold(
            (Vec3::splat(f32::MAX), Vec3::splat(f32::MIN)),
            |(min, max), &v| (min.min(v), max.max(v)),
        )
    }

    /// Minimum and maximum elevation above the unit sphere.
    pub fn elevation_range(&self) -> (f32, f32) {
        let mut min = f32::MAX;
        let mut max = f32::MIN;

        for v in &self.vertices {
            let elevation = v.length() - 1.0;
            min = min.min(elevation);
            max = max.max(elevation);
        }

        (min, max)
    }

    /// Vertex positions as raw bytes (tightly packed `[f32; 3]`) for buffer upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Indices as raw bytes (`u32`, native endian) for buffer upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> FaceMesh {
        // Unit quad in the z = 1 plane, wound counter-clockwise seen from +z.
        FaceMesh {
            face: CubeFaceId::PosZ,
            resolution: 1,
            vertices: vec![
                Vec3::new(0.0, 0.0, 1.0),
                Vec3::new(1.0, 0.0, 1.0),
                Vec3::new(0.0, 1.0, 1.0),
                Vec3::new(1.0, 1.0, 1.0),
            ],
            indices: vec![0, 1, 3, 0, 3, 2],
        }
    }

    #[test]
    fn test_counts() {
        let mesh = quad();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.triangles().collect::<Vec<_>>(), vec![[0, 1, 3], [0, 3, 2]]);
    }

    #[test]
    fn test_flat_quad_normals() {
        let normals = quad().compute_normals();
        for n in normals {
            assert!((n - Vec3::Z).length() < 1e-6, "Expected +Z normal, got {:?}", n);
        }
    }

    #[test]
    fn test_normals_into_reuses_buffer() {
        let mesh = quad();
        let mut normals = vec![Vec3::ONE; 32];
        mesh.compute_normals_into(&mut normals);
        assert_eq!(normals.len(), 4);
        assert_eq!(normals, mesh.compute_normals());
    }

    #[test]
    fn test_bounds() {
        let (min, max) = quad().bounds();
        assert_eq!(min, Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(max, Vec3::new(1.0, 1.0, 1.0));

        let empty = FaceMesh { vertices: Vec::new(), indices: Vec::new(), ..quad() };
        assert_eq!(empty.bounds(), (Vec3::ZERO, Vec3::ZERO));
    }

    #[test]
    fn test_byte_views() {
        let mesh = quad();
        assert_eq!(mesh.vertex_bytes().len(), 4 * 3 * 4);
        assert_eq!(mesh.index_bytes().len(), 6 * 4);
        assert_eq!(&mesh.index_bytes()[4..8], &1u32.to_ne_bytes());
    }
}
