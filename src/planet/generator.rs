//! Top-level planet generation: six faces, one noise stack.

use log::{debug, info};
use rayon::prelude::*;
use thiserror::Error;

use crate::config::PlanetConfig;
use crate::geometry::CubeFaceId;
use crate::mesh::{build_face, validate_resolution, FaceMesh, MeshError, MAX_RESOLUTION};
use crate::noise::{NoiseSource, NoiseStack, SimplexNoise};
use super::host::MeshHost;

/// Errors that can occur during planet generation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerateError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Face generation failed: {0}")]
    Mesh(#[from] MeshError),
}

/// The six generated faces, in slot order.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetMesh {
    /// Resolution every face was built with.
    pub resolution: u32,
    faces: Vec<FaceMesh>,
}

impl PlanetMesh {
    /// Returns the mesh for a specific face.
    pub fn face(&self, id: CubeFaceId) -> &FaceMesh {
        &self.faces[id.index()]
    }

    /// All faces, indexed by slot.
    pub fn faces(&self) -> &[FaceMesh] {
        &self.faces
    }

    /// Consumes the planet, yielding its faces in slot order.
    pub fn into_faces(self) -> Vec<FaceMesh> {
        self.faces
    }

    /// Vertex count summed over all faces.
    pub fn total_vertices(&self) -> usize {
        self.faces.iter().map(FaceMesh::vertex_count).sum()
    }

    /// Triangle count summed over all faces.
    pub fn total_triangles(&self) -> usize {
        self.faces.iter().map(FaceMesh::triangle_count).sum()
    }

    /// Computes the global min and max elevation across all faces.
    pub fn elevation_range(&self) -> (f32, f32) {
        self.faces
            .iter()
            .map(FaceMesh::elevation_range)
            .fold((f32::MAX, f32::MIN), |(min, max), (lo, hi)| (min.min(lo), max.max(hi)))
    }
}

/// Generates cube-sphere planets from a [`PlanetConfig`] and a noise primitive.
///
/// The configuration may be edited between runs through [`config_mut`]; a run
/// borrows the generator immutably, so a configuration cannot change mid-run.
///
/// [`config_mut`]: PlanetGenerator::config_mut
pub struct PlanetGenerator<N: NoiseSource = SimplexNoise> {
    config: PlanetConfig,
    noise: N,
}

impl PlanetGenerator<SimplexNoise> {
    /// Creates a generator using simplex noise seeded from `config.seed`.
    pub fn from_config(config: PlanetConfig) -> Self {
        let noise = SimplexNoise::new(config.seed);
        Self { config, noise }
    }

    /// Changes the seed of both the configuration and the noise primitive.
    pub fn reseed(&mut self, seed: i32) {
        self.config.seed = seed;
        self.noise = SimplexNoise::new(seed);
    }
}

impl<N: NoiseSource> PlanetGenerator<N> {
    /// Creates a generator with an injected noise primitive.
    ///
    /// `config.seed` is only meaningful to noise sources that read it.
    pub fn new(config: PlanetConfig, noise: N) -> Self {
        Self { config, noise }
    }

    /// The configuration used by the next run.
    pub fn config(&self) -> &PlanetConfig {
        &self.config
    }

    /// Edits the configuration. Changes take effect on the next run.
    pub fn config_mut(&mut self) -> &mut PlanetConfig {
        &mut self.config
    }

    /// The injected noise primitive.
    pub fn noise(&self) -> &N {
        &self.noise
    }

    /// Sets the grid resolution for subsequent runs.
    pub fn set_resolution(&mut self, resolution: u32) {
        self.config.resolution = resolution;
    }

    /// Mutable access to the elevation layers.
    pub fn stack_mut(&mut self) -> &mut NoiseStack {
        &mut self.config.layers
    }

    /// Builds all six faces.
    ///
    /// The configuration is validated before any face is processed. Faces are
    /// built in parallel and returned in slot order `[+z, -z, +y, -y, +x, -x]`.
    ///
    /// # Returns
    /// The complete planet, or the first error encountered. On error no face
    /// buffers are returned.
    pub fn generate(&self) -> Result<PlanetMesh, GenerateError> {
        let resolution = self.config.resolution;
        validate_resolution(resolution).map_err(|_| {
            GenerateError::InvalidConfiguration(format!(
                "resolution must be between 1 and {}, got {}",
                MAX_RESOLUTION, resolution
            ))
        })?;

        debug!(
            "Generating planet: resolution={}, layers={} ({} enabled)",
            resolution,
            self.config.layers.len(),
            self.config.layers.enabled_count()
        );

        let faces = CubeFaceId::all()
            .par_iter()
            .map(|&face| build_face(face, resolution, &self.config.layers, &self.noise))
            .collect::<Result<Vec<FaceMesh>, MeshError>>()?;

        let planet = PlanetMesh { resolution, faces };
        info!(
            "Generated planet: {} vertices, {} triangles",
            planet.total_vertices(),
            planet.total_triangles()
        );
        Ok(planet)
    }

    /// Rebuilds the planet and hands every face to `host`, in slot order.
    ///
    /// Nothing is uploaded unless all six faces were built successfully.
    pub fn regenerate<H: MeshHost + ?Sized>(&self, host: &mut H) -> Result<(), GenerateError> {
        let planet = self.generate()?;
        for mesh in planet.into_faces() {
            host.upload(mesh.face, mesh);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use crate::geometry::grid_to_sphere;
    use crate::noise::NoiseLayer;
    use crate::planet::MeshSlots;

    #[test]
    fn test_generate_six_faces_in_slot_order() {
        let generator = PlanetGenerator::from_config(PlanetConfig {
            resolution: 8,
            ..Default::default()
        });
        let planet = generator.generate().unwrap();

        assert_eq!(planet.faces().len(), 6);
        for (i, face) in CubeFaceId::all().into_iter().enumerate() {
            assert_eq!(planet.faces()[i].face, face);
            assert_eq!(planet.face(face).vertices.len(), 81);
            assert_eq!(planet.face(face).indices.len(), 384);
        }
        assert_eq!(planet.total_vertices(), 6 * 81);
        assert_eq!(planet.total_triangles(), 6 * 128);
    }

    #[test]
    fn test_zero_resolution_is_invalid_configuration() {
        let generator = PlanetGenerator::from_config(PlanetConfig::sphere(0));
        let err = generator.generate().unwrap_err();
        assert!(matches!(err, GenerateError::InvalidConfiguration(_)), "got {:?}", err);
    }

    #[test]
    fn test_invalid_configuration_uploads_nothing() {
        let generator = PlanetGenerator::from_config(PlanetConfig::sphere(0));
        let mut slots = MeshSlots::new();
        assert!(generator.regenerate(&mut slots).is_err());
        assert_eq!(slots.allocations(), 0);
    }

    #[test]
    fn test_empty_stack_is_unit_sphere() {
        let generator = PlanetGenerator::from_config(PlanetConfig::sphere(6));
        let planet = generator.generate().unwrap();
        for face in planet.faces() {
            for v in &face.vertices {
                assert!((v.length() - 1.0).abs() < 1e-6);
            }
        }
        let (min, max) = planet.elevation_range();
        assert!(min.abs() < 1e-6 && max.abs() < 1e-6);
    }

    #[test]
    fn test_earth_like_has_visible_relief() {
        let generator = PlanetGenerator::from_config(PlanetConfig::earth_like(5).with_resolution(16));
        let planet = generator.generate().unwrap();
        let (min, max) = planet.elevation_range();
        assert!(min >= -1e-6, "Elevation must never be negative, got {}", min);
        assert!(
            max - min > 0.02,
            "Earth-like relief is too flat: elevation [{}, {}]",
            min,
            max
        );
    }

    #[test]
    fn test_continents_flood_part_of_the_surface() {
        // Flooded vertices get elevation exactly 0 and sit on the unit sphere unchanged.
        let config = PlanetConfig {
            resolution: 16,
            seed: 5,
            layers: vec![NoiseLayer::continents()].into(),
        };
        let planet = PlanetGenerator::from_config(config).generate().unwrap();

        let mut flooded = 0;
        let mut raised = 0;
        for mesh in planet.faces() {
            let axes = mesh.face.axes();
            let row = mesh.resolution + 1;
            for (i, v) in mesh.vertices.iter().enumerate() {
                let (x, y) = (i as u32 % row, i as u32 / row);
                if *v == grid_to_sphere(&axes, x, y, mesh.resolution) {
                    flooded += 1;
                } else {
                    raised += 1;
                }
            }
        }

        assert!(flooded > 0, "Sea level flooded nothing");
        assert!(raised > 0, "Sea level flooded everything");
    }

    #[test]
    fn test_deterministic_replay() {
        let generator = PlanetGenerator::from_config(PlanetConfig::earth_like(11).with_resolution(10));
        let first = generator.generate().unwrap();
        let second = generator.generate().unwrap();

        for (a, b) in first.faces().iter().zip(second.faces()) {
            assert_eq!(a.indices, b.indices);
            let bits = |m: &FaceMesh| -> Vec<u32> {
                m.vertices.iter().flat_map(|v| v.to_array()).map(f32::to_bits).collect()
            };
            assert_eq!(bits(a), bits(b), "Face {:?} differs between runs", a.face);
        }
    }

    #[test]
    fn test_injected_noise_source() {
        // Noise fixed at 1 raises every vertex by exactly the layer strength.
        let mut config = PlanetConfig::sphere(3);
        config.layers.push(NoiseLayer {
            octave_count: 1,
            strength: 0.5,
            ..Default::default()
        });
        let generator = PlanetGenerator::new(config, |_: Vec3| 1.0f32);

        let planet = generator.generate().unwrap();
        for face in planet.faces() {
            for v in &face.vertices {
                assert!((v.length() - 1.5).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn test_failing_noise_aborts_whole_run() {
        // A single octave samples the unit sphere itself, where x < -0.9 only on -X.
        let mut config = PlanetConfig::sphere(4);
        config.layers.push(NoiseLayer { octave_count: 1, ..Default::default() });
        let generator = PlanetGenerator::new(config, |p: Vec3| {
            if p.x < -0.9 { f32::NAN } else { 0.0 }
        });

        let mut uploads = 0;
        let result = generator.regenerate(&mut |_: CubeFaceId, _: FaceMesh| uploads += 1);
        assert!(matches!(
            result,
            Err(GenerateError::Mesh(MeshError::NonFiniteElevation { face: CubeFaceId::NegX, .. }))
        ));
        assert_eq!(uploads, 0);
    }

    #[test]
    fn test_regenerate_reuses_slots_after_edits() {
        let mut generator = PlanetGenerator::from_config(PlanetConfig::sphere(4));
        let mut slots = MeshSlots::new();

        generator.regenerate(&mut slots).unwrap();
        generator.set_resolution(6);
        generator.stack_mut().push(NoiseLayer::default());
        generator.reseed(77);
        generator.regenerate(&mut slots).unwrap();

        assert_eq!(slots.allocations(), 6);
        for hosted in slots.iter() {
            assert_eq!(hosted.uploads, 2);
            assert_eq!(hosted.mesh.resolution, 6);
            assert_eq!(hosted.mesh.vertices.len(), 49);
            assert_eq!(hosted.normals.len(), 49);
        }
        assert_eq!(generator.config().seed, 77);
        assert_eq!(generator.noise().seed, 77);
    }
}
