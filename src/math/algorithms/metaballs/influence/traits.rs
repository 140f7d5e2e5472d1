// src/math/algorithms/metaballs/influence/traits.rs

use crate::math::types::Bounds2D;
use bevy::math::Vec2;

/// Trait für alle Objekte, die das Metaball-Skalarfeld beeinflussen können.
pub trait FieldInfluence: Send + Sync + std::fmt::Debug {
    /// Berechnet den Einfluss an einem gegebenen Punkt.
    /// Muss für jeden Punkt einen endlichen, nicht-negativen Wert liefern.
    fn influence_at(&self, point: Vec2) -> f32;

    /// Optionale Bounding Box (nur für Debug-Ausgaben und Gizmos)
    fn bounding_box(&self) -> Option<Bounds2D> {
        None
    }
}
