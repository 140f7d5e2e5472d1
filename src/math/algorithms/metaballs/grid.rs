// src/math/algorithms/metaballs/grid.rs

use crate::math::algorithms::metaballs::field::MetaballField;
use crate::math::algorithms::metaballs::influence::{MetaballSource, RectangleObstacle};
use crate::math::error::{MathError, MathResult};
use crate::math::scalar_field::ScalarField2D;
use crate::math::types::Bounds2D;
use bevy::log::info;
use bevy::math::Vec2;

/// Kleinste Auflösung, bei der noch mindestens eine Zelle entsteht.
pub const MIN_RESOLUTION: usize = 2;

/// Position eines Samples im Gitter (`row` entlang y, `col` entlang x).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SampleIndex {
    pub row: usize,
    pub col: usize,
}

impl SampleIndex {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Ein Abtastpunkt des Gitters. Der Wert wird jeden Tick neu berechnet, nicht akkumuliert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub row: usize,
    pub col: usize,
    pub position: Vec2,
    pub value: f32,
}

/// Zeilenweise (row-major) gespeicherte Matrix von Samples über einer rechteckigen Domäne.
///
/// Das Gitter ist quadratisch (`rows == cols == resolution`); der vertikale Abstand entspricht
/// dem horizontalen (`domain.width() / resolution`).
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid {
    samples: Vec<Sample>,
    rows: usize,
    cols: usize,
    cell_size: f32,
    domain: Bounds2D,
}

impl SampleGrid {
    /// Erstellt das Gitter mit allen Werten auf 0.0.
    pub fn new(domain: Bounds2D, resolution: usize) -> MathResult<Self> {
        if resolution < MIN_RESOLUTION {
            return Err(MathError::InsufficientPoints {
                expected: MIN_RESOLUTION,
                actual: resolution,
            });
        }
        if !domain.is_valid() || domain.width() <= 0.0 {
            return Err(MathError::invalid_config(format!(
                "Sample grid domain must have a positive, finite width: {}",
                domain
            )));
        }

        let cell_size = domain.width() / resolution as f32;
        let mut samples = Vec::with_capacity(resolution * resolution);
        for row in 0..resolution {
            for col in 0..resolution {
                samples.push(Sample {
                    row,
                    col,
                    position: domain.min + Vec2::new(col as f32, row as f32) * cell_size,
                    value: 0.0,
                });
            }
        }

        info!(
            "SampleGrid created: {}x{} samples, cell size {:.4}, domain {}",
            resolution, resolution, cell_size, domain
        );

        Ok(Self {
            samples,
            rows: resolution,
            cols: resolution,
            cell_size,
            domain,
        })
    }

    #[inline]
    fn idx(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }

    /// Berechnet jeden Sample-Wert neu. O(rows × cols × sources), keine räumliche Beschleunigung.
    pub fn refresh(&mut self, sources: &[MetaballSource], obstacle: Option<&RectangleObstacle>) {
        let field = MetaballField::new(sources, obstacle);
        for sample in self.samples.iter_mut() {
            sample.value = field.evaluate(sample.position);
        }
    }

    pub fn sample(&self, index: SampleIndex) -> Option<&Sample> {
        self.idx(index.row, index.col)
            .and_then(|i| self.samples.get(i))
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn resolution(&self) -> usize {
        self.rows
    }

    pub fn domain(&self) -> &Bounds2D {
        &self.domain
    }
}

impl ScalarField2D for SampleGrid {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn cell_size(&self) -> f32 {
        self.cell_size
    }

    fn value(&self, row: usize, col: usize) -> f32 {
        match self.idx(row, col) {
            Some(index) => self.samples[index].value,
            None => 0.0,
        }
    }

    fn sample_position(&self, row: usize, col: usize) -> Vec2 {
        match self.idx(row, col) {
            Some(index) => self.samples[index].position,
            None => self.domain.min + Vec2::new(col as f32, row as f32) * self.cell_size,
        }
    }
}
