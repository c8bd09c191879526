//! Grid-to-sphere mapping for cube faces.

use glam::Vec3;
use super::face::CubeFaceId;

/// The in-plane basis of a cube face.
///
/// `axis_a`, `axis_b` and `normal` are mutually orthogonal with
/// `axis_a.cross(axis_b) == normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceAxes {
    /// Outward face normal.
    pub normal: Vec3,
    /// First in-plane axis, a cyclic permutation of the normal's components.
    pub axis_a: Vec3,
    /// Second in-plane axis, `normal x axis_a`.
    pub axis_b: Vec3,
}

impl FaceAxes {
    /// Derives the basis for a face.
    ///
    /// The component rotation only yields an orthogonal axis for axis-aligned
    /// normals, which is why this takes a `CubeFaceId` rather than a `Vec3`.
    pub fn for_face(face: CubeFaceId) -> Self {
        let normal = face.direction();
        let axis_a = Vec3::new(normal.y, normal.z, normal.x);
        let axis_b = normal.cross(axis_a);
        Self { normal, axis_a, axis_b }
    }
}

impl CubeFaceId {
    /// Returns the in-plane basis for this face.
    pub fn axes(self) -> FaceAxes {
        FaceAxes::for_face(self)
    }
}

/// Maps grid coordinate `(x, y)` with `x, y` in `[0, resolution]` onto the cube face.
///
/// The result lies on the face of the cube with half-extent 1; `(0, 0)` and
/// `(resolution, resolution)` are opposite corners.
///
/// # Arguments
/// * `axes` - Basis of the face
/// * `x` - Column in `[0, resolution]`
/// * `y` - Row in `[0, resolution]`
/// * `resolution` - Number of grid cells along each face edge (non-zero)
pub fn grid_to_cube(axes: &FaceAxes, x: u32, y: u32, resolution: u32) -> Vec3 {
    let res = resolution as f32;
    let percent_x = x as f32 / res;
    let percent_y = y as f32 / res;

    axes.normal + axes.axis_a * (percent_x - 0.5) * 2.0 + axes.axis_b * (percent_y - 0.5) * 2.0
}

/// Maps grid coordinate `(x, y)` onto the unit sphere by normalizing the cube point.
///
/// # Example
/// ```
/// use planetgen::geometry::{grid_to_sphere, CubeFaceId};
///
/// let axes = CubeFaceId::PosX.axes();
/// let p = grid_to_sphere(&axes, 3, 7, 16);
/// assert!((p.length() - 1.0).abs() < 1e-6);
/// ```
pub fn grid_to_sphere(axes: &FaceAxes, x: u32, y: u32, resolution: u32) -> Vec3 {
    grid_to_cube(axes, x, y, resolution).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axes_are_orthonormal_and_right_handed() {
        for face in CubeFaceId::all() {
            let axes = face.axes();
            assert!(axes.normal.dot(axes.axis_a).abs() < 1e-6, "{:?}: normal . a", face);
            assert!(axes.normal.dot(axes.axis_b).abs() < 1e-6, "{:?}: normal . b", face);
            assert!(axes.axis_a.dot(axes.axis_b).abs() < 1e-6, "{:?}: a . b", face);
            assert!((axes.axis_b.length() - 1.0).abs() < 1e-6);
            assert!(
                (axes.axis_a.cross(axes.axis_b) - axes.normal).length() < 1e-6,
                "Face {:?} basis is not right-handed",
                face
            );
        }
    }

    #[test]
    fn test_pos_z_axes() {
        let axes = CubeFaceId::PosZ.axes();
        assert_eq!(axes.axis_a, Vec3::Y);
        assert_eq!(axes.axis_b, Vec3::NEG_X);
    }

    #[test]
    fn test_face_centers() {
        for face in CubeFaceId::all() {
            let axes = face.axes();
            let center = grid_to_sphere(&axes, 8, 8, 16);
            assert!(
                (center - face.direction()).length() < 1e-6,
                "Face {:?} center: expected {:?}, got {:?}",
                face,
                face.direction(),
                center
            );
        }
    }

    #[test]
    fn test_corner_projection() {
        let axes = CubeFaceId::PosZ.axes();
        assert_eq!(grid_to_cube(&axes, 0, 0, 1), Vec3::new(1.0, -1.0, 1.0));
        let p = grid_to_sphere(&axes, 0, 0, 1);
        let expected = Vec3::new(1.0, -1.0, 1.0) / 3.0f32.sqrt();
        assert!((p - expected).length() < 1e-6, "got {:?}", p);
    }

    #[test]
    fn test_points_lie_on_cube_and_unit_sphere() {
        let resolution = 12;
        for face in CubeFaceId::all() {
            let axes = face.axes();
            for y in 0..=resolution {
                for x in 0..=resolution {
                    let cube = grid_to_cube(&axes, x, y, resolution);
                    assert!(
                        (cube.abs().max_element() - 1.0).abs() < 1e-6,
                        "{:?} ({}, {}) not on cube: {:?}",
                        face,
                        x,
                        y,
                        cube
                    );

                    let sphere = grid_to_sphere(&axes, x, y, resolution);
                    assert!(
                        (sphere.length() - 1.0).abs() < 1e-6,
                        "{:?} ({}, {}) length {}",
                        face,
                        x,
                        y,
                        sphere.length()
                    );
                }
            }
        }
    }

    #[test]
    fn test_pos_z_pos_x_seam() {
        // +X column R meets +Z row 0 with the edge running in opposite directions.
        let resolution = 10;
        let pos_z = CubeFaceId::PosZ.axes();
        let pos_x = CubeFaceId::PosX.axes();

        for j in 0..=resolution {
            let on_x = grid_to_sphere(&pos_x, resolution, j, resolution);
            let on_z = grid_to_sphere(&pos_z, resolution - j, 0, resolution);
            assert!(
                (on_x - on_z).length() < 1e-6,
                "Seam mismatch at j={}: {:?} vs {:?}",
                j,
                on_x,
                on_z
            );
        }
    }

    #[test]
    fn test_every_face_edge_meets_a_neighbor() {
        // Each boundary vertex of every face must coincide with a boundary vertex
        // of some other face.
        let resolution = 6;
        let boundary = |face: CubeFaceId| {
            let axes = face.axes();
            let mut points = Vec::new();
            for y in 0..=resolution {
                for x in 0..=resolution {
                    if x == 0 || y == 0 || x == resolution || y == resolution {
                        points.push(grid_to_sphere(&axes, x, y, resolution));
                    }
                }
            }
            points
        };

        for face in CubeFaceId::all() {
            let others: Vec<Vec3> = CubeFaceId::all()
                .into_iter()
                .filter(|&f| f != face)
                .flat_map(|f| boundary(f))
                .collect();

            for p in boundary(face) {
                assert!(
                    others.iter().any(|q| (p - *q).length() < 1e-6),
                    "Boundary point {:?} of {:?} has no partner",
                    p,
                    face
                );
            }
        }
    }
}
