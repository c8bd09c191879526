//! The gradient noise primitive sampled by noise layers.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use simdnoise::NoiseBuilder;

/// A deterministic 3D noise function returning values in `[-1, 1]`.
///
/// Layers only ever call [`NoiseSource::noise3`], so any implementation with
/// that contract can be injected. Closures `Fn(Vec3) -> f32` implement this
/// trait as well.
pub trait NoiseSource: Send + Sync {
    /// Samples the noise at `point`.
    fn noise3(&self, point: Vec3) -> f32;
}

impl<F> NoiseSource for F
where
    F: Fn(Vec3) -> f32 + Send + Sync,
{
    fn noise3(&self, point: Vec3) -> f32 {
        self(point)
    }
}

/// Peak magnitude of a single-octave `simdnoise` 4D simplex sample.
///
/// simdnoise does not normalize its fBm output; one octave at frequency 1
/// stays within roughly `±0.03`. Samples are divided by this and then clamped.
const SIMDNOISE_PEAK: f32 = 0.03;

/// Seeded simplex noise backed by `simdnoise`, rescaled to span `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimplexNoise {
    /// Random seed for reproducible generation.
    pub seed: i32,
}

impl SimplexNoise {
    /// Creates a noise source with the given seed.
    pub fn new(seed: i32) -> Self {
        Self { seed }
    }
}

impl Default for SimplexNoise {
    fn default() -> Self {
        Self::new(42)
    }
}

impl NoiseSource for SimplexNoise {
    fn noise3(&self, point: Vec3) -> f32 {
        // Single-octave 4D simplex with w = 0; one sample per call.
        let value = NoiseBuilder::fbm_4d_offset(point.x, 1, point.y, 1, point.z, 1, 0.0, 1)
            .with_seed(self.seed)
            .with_freq(1.0)
            .with_octaves(1)
            .generate()
            .0[0];

        (value / SIMDNOISE_PEAK).clamp(-1.0, 1.0)
    }
}
