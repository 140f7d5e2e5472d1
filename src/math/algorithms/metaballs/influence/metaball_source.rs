// src/math/algorithms/metaballs/influence/metaball_source.rs

use crate::math::algorithms::metaballs::influence::FieldInfluence;
use crate::math::types::Bounds2D;
use crate::math::utils::constants;
use bevy::math::Vec2;
use serde::{Deserialize, Serialize};

/// Repräsentiert einen einzelnen Metaball (Meta-Kreis in 2D) als Einflussquelle.
///
/// Der Einfluss fällt mit dem inversen Abstandsquadrat ab:
/// `f(p) = r² / |p - position|²`. Auf dem Kreis mit Radius `r` ist der Wert genau 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetaballSource {
    pub position: Vec2,
    pub radius: f32,
}

impl MetaballSource {
    pub fn new(position: Vec2, radius: f32) -> Self {
        Self { position, radius }
    }
}

/// `radius² / distance²` mit geklemmtem Nenner und gesättigtem Ergebnis.
///
/// Liegt `point` exakt auf `center`, ergibt sich `MAX_FIELD_VALUE` statt `inf`.
pub fn inverse_square_influence(center: Vec2, radius: f32, point: Vec2) -> f32 {
    let distance_sq = center
        .distance_squared(point)
        .max(constants::MIN_DISTANCE_SQUARED);
    (radius * radius / distance_sq).min(constants::MAX_FIELD_VALUE)
}

impl FieldInfluence for MetaballSource {
    fn influence_at(&self, point: Vec2) -> f32 {
        inverse_square_influence(self.position, self.radius, point)
    }

    fn bounding_box(&self) -> Option<Bounds2D> {
        Some(Bounds2D::from_center_size(
            self.position,
            Vec2::splat(self.radius * 2.0),
        ))
    }
}
