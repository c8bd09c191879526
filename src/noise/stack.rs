//! Ordered collection of noise layers summed into one elevation.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::layer::NoiseLayer;
use super::source::NoiseSource;

/// An ordered stack of [`NoiseLayer`]s.
///
/// Contributions are additive, so order only matters for editing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoiseStack {
    layers: Vec<NoiseLayer>,
}

impl NoiseStack {
    /// Creates an empty stack, which produces a perfect sphere.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a layer to the top of the stack.
    pub fn push(&mut self, layer: NoiseLayer) -> &mut Self {
        self.layers.push(layer);
        self
    }

    /// Layers in evaluation order.
    pub fn layers(&self) -> &[NoiseLayer] {
        &self.layers
    }

    /// Mutable access for reordering, removing or editing layers.
    pub fn layers_mut(&mut self) -> &mut Vec<NoiseLayer> {
        &mut self.layers
    }

    /// Number of layers, including disabled ones.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Returns true if the stack has no layers.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Number of layers that will actually be evaluated.
    pub fn enabled_count(&self) -> usize {
        self.layers.iter().filter(|layer| layer.enabled).count()
    }

    /// Sums the contributions of all enabled layers at `point`.
    pub fn evaluate<N: NoiseSource + ?Sized>(&self, point: Vec3, noise: &N) -> f32 {
        let mut elevation = 0.0f32;
        for layer in self.layers.iter().filter(|layer| layer.enabled) {
            elevation += layer.evaluate(point, noise);
        }
        elevation
    }
}

impl From<Vec<NoiseLayer>> for NoiseStack {
    fn from(layers: Vec<NoiseLayer>) -> Self {
        Self { layers }
    }
}

impl FromIterator<NoiseLayer> for NoiseStack {
    fn from_iter<I: IntoIterator<Item = NoiseLayer>>(iter: I) -> Self {
        Self { layers: iter.into_iter().collect() }
    }
}
