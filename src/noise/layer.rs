//! A single multi-octave elevation layer.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::source::NoiseSource;

/// Configuration of one fractal noise layer.
///
/// Each octave samples the noise at `point * roughness + offset`, remaps the
/// result from `[-1, 1]` to `[0, 1]` and scales it by the octave's strength.
/// After all octaves, `sea_level` is subtracted once and the result clamped at 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseLayer {
    /// Disabled layers are skipped by the stack and contribute nothing.
    pub enabled: bool,
    /// Number of noise octaves. Zero yields no elevation.
    pub octave_count: u32,
    /// Sampling frequency of the first octave.
    pub roughness: f32,
    /// Contribution bound of the first octave.
    pub strength: f32,
    /// Frequency multiplier per octave.
    pub lacunarity: f32,
    /// Strength multiplier per octave.
    pub persistence: f32,
    /// Elevation floor subtracted after summing all octaves.
    pub sea_level: f32,
    /// Offset added to the sampling coordinate.
    pub offset: Vec3,
}

impl Default for NoiseLayer {
    fn default() -> Self {
        Self {
            enabled: true,
            octave_count: 4,
            roughness: 1.0,
            strength: 0.1,
            lacunarity: 2.0,
            persistence: 0.5,
            sea_level: 0.0,
            offset: Vec3::ZERO,
        }
    }
}

impl NoiseLayer {
    /// Broad, low-frequency landmasses with a flooded floor.
    pub fn continents() -> Self {
        Self {
            enabled: true,
            octave_count: 5,
            roughness: 0.9,
            strength: 0.12,
            lacunarity: 2.0,
            persistence: 0.5,
            sea_level: 0.11,
            offset: Vec3::ZERO,
        }
    }

    /// Higher-frequency detail for mountain ranges.
    pub fn ridges() -> Self {
        Self {
            enabled: true,
            octave_count: 6,
            roughness: 2.4,
            strength: 0.05,
            lacunarity: 2.2,
            persistence: 0.45,
            sea_level: 0.04,
            offset: Vec3::new(17.3, -4.1, 9.7),
        }
    }

    /// Returns a copy of this layer with `enabled` set.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Evaluates this layer's elevation contribution at `point`.
    ///
    /// The result is always `>= 0`. `enabled` is not consulted here; skipping
    /// disabled layers is the stack's job.
    pub fn evaluate<N: NoiseSource + ?Sized>(&self, point: Vec3, noise: &N) -> f32 {
        let mut value = 0.0f32;
        let mut roughness = self.roughness;
        let mut strength = self.strength;

        for _ in 0..self.octave_count {
            value += (noise.noise3(point * roughness + self.offset) + 1.0) * 0.5 * strength;
            roughness *= self.lacunarity;
            strength *= self.persistence;
        }

        // Not f32::max: a NaN from the noise must survive so the builder can reject it.
        let elevation = value - self.sea_level;
        if elevation > 0.0 || elevation.is_nan() {
            elevation
        } else {
            0.0
        }
    }
}
