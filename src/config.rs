//! Planet configuration: resolution, noise seed and layer stack.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::mesh::{validate_resolution, MAX_RESOLUTION};
use crate::noise::{NoiseLayer, NoiseStack};

/// Errors that can occur while loading or validating a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Everything that persists between generation runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanetConfig {
    /// Grid cells along each face edge.
    pub resolution: u32,
    /// Seed of the default noise primitive.
    pub seed: i32,
    /// Elevation layers, bottom to top.
    pub layers: NoiseStack,
}

impl Default for PlanetConfig {
    fn default() -> Self {
        Self {
            resolution: 64,
            seed: 42,
            layers: vec![NoiseLayer::default()].into(),
        }
    }
}

impl PlanetConfig {
    /// Creates an Earth-like configuration: flooded continents with ridged highlands.
    pub fn earth_like(seed: i32) -> Self {
        Self {
            resolution: 128,
            seed,
            layers: vec![NoiseLayer::continents(), NoiseLayer::ridges()].into(),
        }
    }

    /// A configuration with no layers, producing a perfect unit sphere.
    pub fn sphere(resolution: u32) -> Self {
        Self {
            resolution,
            layers: NoiseStack::new(),
            ..Default::default()
        }
    }

    /// Returns a copy with a different resolution.
    pub fn with_resolution(mut self, resolution: u32) -> Self {
        self.resolution = resolution;
        self
    }

    /// Checks that the configuration can be generated.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_resolution(self.resolution).map_err(|_| {
            ConfigError::Invalid(format!(
                "resolution must be between 1 and {}, got {}",
                MAX_RESOLUTION, self.resolution
            ))
        })
    }

    /// Parses a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: PlanetConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Serializes the configuration as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
