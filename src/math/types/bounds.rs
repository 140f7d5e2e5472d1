// src/math/types/bounds.rs

use crate::math::{error::*, types::*};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 2D Bounding Box (Axis-Aligned Bounding Box).
/// Wird als Domäne des Sample-Grids und als Bewegungsraum der Metaballs verwendet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds2D {
    pub min: Point2D,
    pub max: Point2D,
}

impl Bounds2D {
    /// Erstellt eine neue Bounding Box
    pub fn new(min: Point2D, max: Point2D) -> MathResult<Self> {
        if min.x > max.x || min.y > max.y {
            return Err(MathError::InvalidConfiguration {
                message: format!("Invalid bounds: min {:?} > max {:?}", min, max),
            });
        }

        Ok(Self { min, max })
    }

    /// Erstellt eine Bounding Box aus linker unterer Ecke und Größe (wie ein `Rect(x, y, w, h)`).
    pub fn from_min_size(min: Point2D, size: Point2D) -> MathResult<Self> {
        Self::new(min, min + size)
    }

    /// Erstellt eine Bounding Box aus Zentrum und Größe
    pub fn from_center_size(center: Point2D, size: Point2D) -> Self {
        let half_size = size.abs() * 0.5;
        Self {
            min: center - half_size,
            max: center + half_size,
        }
    }

    /// Prüft ob die Bounding Box gültig ist
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x
            && self.min.y <= self.max.y
            && self.min.x.is_finite()
            && self.min.y.is_finite()
            && self.max.x.is_finite()
            && self.max.y.is_finite()
    }

    /// Breite der Bounding Box
    pub fn width(&self) -> f32 {
        (self.max.x - self.min.x).max(0.0)
    }

    /// Höhe der Bounding Box
    pub fn height(&self) -> f32 {
        (self.max.y - self.min.y).max(0.0)
    }

    /// Größe der Bounding Box
    pub fn size(&self) -> Point2D {
        Point2D::new(self.width(), self.height())
    }

    /// Zentrum der Bounding Box
    pub fn center(&self) -> Point2D {
        (self.min + self.max) * 0.5
    }

    /// Prüft ob ein Punkt in der Bounding Box liegt (Ränder inklusive)
    pub fn contains_point(&self, point: Point2D) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Skaliert die Bounding Box um einen Faktor (um das Zentrum)
    pub fn scale(&self, factor: f32) -> Self {
        let center = self.center();
        let half_size = self.size() * factor * 0.5;

        Self {
            min: center - half_size,
            max: center + half_size,
        }
    }
}

impl fmt::Display for Bounds2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bounds2D({:?} to {:?})", self.min, self.max)
    }
}
