// src/math/algorithms/metaballs/builder.rs

use crate::math::algorithms::metaballs::grid::SampleGrid;
use crate::math::error::MathResult;
use crate::math::types::Bounds2D;
use bevy::math::Vec2;

/// Builder zum komfortablen Erstellen und Konfigurieren von `SampleGrid`-Instanzen.
#[derive(Debug, Clone)]
pub struct SampleGridBuilder {
    domain_min: Vec2,
    domain_size: Vec2,
    resolution: usize,
}

impl Default for SampleGridBuilder {
    fn default() -> Self {
        Self {
            domain_min: Vec2::new(-5.0, -5.0),
            domain_size: Vec2::new(10.0, 10.0),
            resolution: 100,
        }
    }
}

impl SampleGridBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Domäne als linke untere Ecke plus Größe.
    pub fn domain(mut self, min: Vec2, size: Vec2) -> Self {
        self.domain_min = min;
        self.domain_size = size;
        self
    }

    pub fn bounds(mut self, bounds: &Bounds2D) -> Self {
        self.domain_min = bounds.min;
        self.domain_size = bounds.size();
        self
    }

    /// Anzahl der Samples pro Achse (Zeilen = Spalten).
    pub fn resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    /// Validiert die Konfiguration und baut das Gitter.
    pub fn build(self) -> MathResult<SampleGrid> {
        let domain = Bounds2D::from_min_size(self.domain_min, self.domain_size)?;
        SampleGrid::new(domain, self.resolution)
    }
}
