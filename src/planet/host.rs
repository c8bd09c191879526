//! Receivers for generated face meshes.

use glam::Vec3;
use crate::geometry::CubeFaceId;
use crate::mesh::FaceMesh;

/// Consumer of generated faces, keyed by the face's stable slot.
///
/// A host typically uploads the buffers to the GPU and computes whatever
/// derived data (normals, bounds, materials) its renderer needs. Closures
/// `FnMut(CubeFaceId, FaceMesh)` are hosts as well.
pub trait MeshHost {
    /// Receives the finished mesh for `face`. Called once per face per run,
    /// in slot order.
    fn upload(&mut self, face: CubeFaceId, mesh: FaceMesh);
}

impl<F> MeshHost for F
where
    F: FnMut(CubeFaceId, FaceMesh),
{
    fn upload(&mut self, face: CubeFaceId, mesh: FaceMesh) {
        self(face, mesh)
    }
}

/// A face as held by [`MeshSlots`], with its recalculated normals and bounds.
#[derive(Debug, Clone)]
pub struct HostedMesh {
    /// Most recently uploaded face buffers.
    pub mesh: FaceMesh,
    /// Per-vertex normals, recomputed on every upload.
    pub normals: Vec<Vec3>,
    /// Axis-aligned `(min, max)`.
    pub bounds: (Vec3, Vec3),
    /// How many times this slot has been written.
    pub uploads: u64,
}

/// An in-memory host with one persistent slot per face.
///
/// Slots are created on first upload and reused afterwards; the normal buffer
/// of a reused slot keeps its allocation.
#[derive(Debug, Default)]
pub struct MeshSlots {
    slots: [Option<HostedMesh>; 6],
    allocations: usize,
}

impl MeshSlots {
    /// Creates a host with every slot empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the mesh held for `face`, if any run has completed.
    pub fn get(&self, face: CubeFaceId) -> Option<&HostedMesh> {
        self.slots[face.index()].as_ref()
    }

    /// Iterates occupied slots in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &HostedMesh> {
        self.slots.iter().flatten()
    }

    /// Number of slots that have been created.
    pub fn allocations(&self) -> usize {
        self.allocations
    }

    /// Returns true once all six slots hold a mesh.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }
}

impl MeshHost for MeshSlots {
    fn upload(&mut self, face: CubeFaceId, mesh: FaceMesh) {
        let bounds = mesh.bounds();

        match &mut self.slots[face.index()] {
            Some(hosted) => {
                mesh.compute_normals_into(&mut hosted.normals);
                hosted.bounds = bounds;
                hosted.mesh = mesh;
                hosted.uploads += 1;
            }
            empty => {
                *empty = Some(HostedMesh {
                    normals: mesh.compute_normals(),
                    bounds,
                    mesh,
                    uploads: 1,
                });
                self.allocations += 1;
            }
        }
    }
}
