//! Cube face identification and enumeration.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Identifies one of the six faces of the cube-sphere.
///
/// The discriminant doubles as the output slot index hosts key their meshes by,
/// so the order here is stable across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CubeFaceId {
    /// +Z face (forward)
    PosZ = 0,
    /// -Z face (back)
    NegZ = 1,
    /// +Y face (up)
    PosY = 2,
    /// -Y face (down)
    NegY = 3,
    /// +X face (right)
    PosX = 4,
    /// -X face (left)
    NegX = 5,
}

impl CubeFaceId {
    /// Returns all six cube faces in slot order.
    pub const fn all() -> [CubeFaceId; 6] {
        [
            CubeFaceId::PosZ,
            CubeFaceId::NegZ,
            CubeFaceId::PosY,
            CubeFaceId::NegY,
            CubeFaceId::PosX,
            CubeFaceId::NegX,
        ]
    }

    /// Returns the slot index (0-5).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Creates a face from a slot index (0-5).
    pub const fn from_index(index: usize) -> Option<CubeFaceId> {
        match index {
            0 => Some(CubeFaceId::PosZ),
            1 => Some(CubeFaceId::NegZ),
            2 => Some(CubeFaceId::PosY),
            3 => Some(CubeFaceId::NegY),
            4 => Some(CubeFaceId::PosX),
            5 => Some(CubeFaceId::NegX),
            _ => None,
        }
    }

    /// Outward unit normal of the face.
    pub const fn direction(self) -> Vec3 {
        match self {
            CubeFaceId::PosZ => Vec3::Z,
            CubeFaceId::NegZ => Vec3::NEG_Z,
            CubeFaceId::PosY => Vec3::Y,
            CubeFaceId::NegY => Vec3::NEG_Y,
            CubeFaceId::PosX => Vec3::X,
            CubeFaceId::NegX => Vec3::NEG_X,
        }
    }

    /// Returns a short name for the face (e.g., "posz", "negx").
    pub const fn short_name(self) -> &'static str {
        match self {
            CubeFaceId::PosZ => "posz",
            CubeFaceId::NegZ => "negz",
            CubeFaceId::PosY => "posy",
            CubeFaceId::NegY => "negy",
            CubeFaceId::PosX => "posx",
            CubeFaceId::NegX => "negx",
        }
    }
}

impl std::fmt::Display for CubeFaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.short_name())
    }
}
