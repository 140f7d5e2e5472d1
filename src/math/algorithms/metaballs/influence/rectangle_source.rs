// src/math/algorithms/metaballs/influence/rectangle_source.rs

use crate::math::algorithms::metaballs::influence::FieldInfluence;
use crate::math::error::{MathError, MathResult};
use crate::math::types::Bounds2D;
use crate::math::utils::constants;
use bevy::math::Vec2;
use serde::{Deserialize, Serialize};

/// Standard-Schärfe des Rechteck-Beitrags.
/// Kleinere Werte vergrößern die Distanz, ab der Metaballs mit dem Rechteck verschmelzen.
pub const DEFAULT_OBSTACLE_SHARPNESS: f32 = 5.0;

/// Achsenparalleles Rechteck als zusätzliche Einflussquelle ("Hindernis").
///
/// Der Beitrag ist `(border_distance / point_distance)^sharpness`, wobei `border_distance` der
/// Abstand vom Zentrum zum Rand entlang des Strahls durch den Punkt ist. Punkte im Rechteck
/// liefern damit Werte > 1 und werden immer gefüllt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectangleObstacle {
    pub center: Vec2,
    /// Volle Kantenlängen des Rechtecks.
    pub size: Vec2,
    pub sharpness: f32,
}

impl RectangleObstacle {
    /// Erstellt ein Rechteck aus Zentrum und voller Größe.
    pub fn new(center: Vec2, size: Vec2) -> MathResult<Self> {
        Self::with_sharpness(center, size, DEFAULT_OBSTACLE_SHARPNESS)
    }

    /// Erstellt ein Rechteck aus Zentrum und halben Kantenlängen.
    pub fn from_half_extents(center: Vec2, half_extents: Vec2) -> MathResult<Self> {
        Self::new(center, half_extents * 2.0)
    }

    pub fn with_sharpness(center: Vec2, size: Vec2, sharpness: f32) -> MathResult<Self> {
        if !(size.x > constants::EPSILON && size.y > constants::EPSILON)
            || !size.is_finite()
            || !center.is_finite()
        {
            return Err(MathError::invalid_config(format!(
                "Obstacle size must be positive and finite, got {:?}",
                size
            )));
        }
        if !(sharpness > 0.0) || !sharpness.is_finite() {
            return Err(MathError::invalid_config(format!(
                "Obstacle sharpness must be positive, got {}",
                sharpness
            )));
        }
        Ok(Self {
            center,
            size,
            sharpness,
        })
    }

    /// Winkel, ab dem der Strahl die obere/untere statt der linken/rechten Kante trifft.
    pub fn threshold_angle(&self) -> f32 {
        self.size.y.abs().atan2(self.size.x.abs())
    }

    /// Abstand vom Zentrum zum Rand entlang des Strahls mit Winkel `angle` in `[0, π/2]`.
    ///
    /// Bei `angle = 0` wird die rechte Kante getroffen (`size.x / 2`), bei `angle = π/2`
    /// die obere (`size.y / 2`).
    pub fn border_distance(&self, angle: f32) -> f32 {
        if angle <= self.threshold_angle() {
            (self.size.x / (2.0 * angle.cos())).abs()
        } else {
            (self.size.y / (2.0 * angle.sin())).abs()
        }
    }
}

/// Winkel des Vektors `offset` zur x-Achse, gespiegelt in den ersten Quadranten.
///
/// `atan2` statt `atan(|y| / |x|)`: für `x = 0` ergibt sich π/2, für den Nullvektor 0.
pub fn quadrant_angle(offset: Vec2) -> f32 {
    offset.y.abs().atan2(offset.x.abs())
}

impl FieldInfluence for RectangleObstacle {
    fn influence_at(&self, point: Vec2) -> f32 {
        let offset = point - self.center;
        let border_distance = self.border_distance(quadrant_angle(offset));
        let point_distance = offset
            .length_squared()
            .max(constants::MIN_DISTANCE_SQUARED)
            .sqrt();

        (border_distance / point_distance)
            .powf(self.sharpness)
            .min(constants::MAX_FIELD_VALUE)
    }

    fn bounding_box(&self) -> Option<Bounds2D> {
        Some(Bounds2D::from_center_size(self.center, self.size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square() -> RectangleObstacle {
        RectangleObstacle::new(Vec2::ZERO, Vec2::splat(2.0)).unwrap()
    }

    #[test]
    fn test_rejects_degenerate_size() {
        assert!(RectangleObstacle::new(Vec2::ZERO, Vec2::new(0.0, 1.0)).is_err());
        assert!(RectangleObstacle::new(Vec2::ZERO, Vec2::new(1.0, -1.0)).is_err());
        assert!(RectangleObstacle::with_sharpness(Vec2::ZERO, Vec2::ONE, 0.0).is_err());
    }

    #[test]
    fn test_half_extents_are_doubled() {
        let obstacle = RectangleObstacle::from_half_extents(Vec2::ZERO, Vec2::new(1.0, 0.5)).unwrap();
        assert_eq!(obstacle.size, Vec2::new(2.0, 1.0));
    }

    #[test]
    fn test_ray_along_x_axis() {
        let obstacle = RectangleObstacle::new(Vec2::ZERO, Vec2::new(2.0, 1.0)).unwrap();
        // angle = 0: border at x = 1
        assert_relative_eq!(obstacle.influence_at(Vec2::new(2.0, 0.0)), 1.0 / 32.0);
        assert_relative_eq!(obstacle.influence_at(Vec2::new(-2.0, 0.0)), 1.0 / 32.0);
    }

    #[test]
    fn test_ray_along_y_axis() {
        let obstacle = RectangleObstacle::new(Vec2::ZERO, Vec2::new(2.0, 1.0)).unwrap();
        assert_relative_eq!(quadrant_angle(Vec2::new(0.0, 2.0)), std::f32::consts::FRAC_PI_2);
        // angle = π/2: border at y = 0.5
        let value = obstacle.influence_at(Vec2::new(0.0, 2.0));
        assert_relative_eq!(value, 0.25_f32.powi(5), max_relative = 1e-4);
    }

    #[test]
    fn test_center_saturates() {
        let obstacle = square();
        let value = obstacle.influence_at(Vec2::ZERO);
        assert!(value.is_finite());
        assert_eq!(value, constants::MAX_FIELD_VALUE);
        assert_eq!(quadrant_angle(Vec2::ZERO), 0.0);
    }

    #[test]
    fn test_inside_is_above_threshold_outside_below() {
        let obstacle = RectangleObstacle::new(Vec2::new(1.0, 1.0), Vec2::new(4.0, 2.0)).unwrap();
        assert!(obstacle.influence_at(Vec2::new(2.5, 1.5)) > 1.0);
        assert!(obstacle.influence_at(Vec2::new(1.0, 1.9)) > 1.0);
        assert!(obstacle.influence_at(Vec2::new(3.5, 1.0)) < 1.0);
        assert!(obstacle.influence_at(Vec2::new(1.0, 2.5)) < 1.0);
        // Auf dem Rand genau 1
        assert_relative_eq!(obstacle.influence_at(Vec2::new(3.0, 1.0)), 1.0, max_relative = 1e-5);
    }

    #[test]
    fn test_square_symmetry() {
        let obstacle = square();
        let points = [
            Vec2::new(1.7, 0.4),
            Vec2::new(0.3, 2.2),
            Vec2::new(3.0, 1.1),
            Vec2::new(0.9, 0.2),
        ];
        for p in points {
            let reference = obstacle.influence_at(p);
            // Spiegelung an der y-Achse, der x-Achse und der Diagonalen
            let mirrored = [
                Vec2::new(-p.x, p.y),
                Vec2::new(p.x, -p.y),
                Vec2::new(-p.x, -p.y),
                Vec2::new(p.y, p.x),
            ];
            for m in mirrored {
                assert_relative_eq!(obstacle.influence_at(m), reference, max_relative = 1e-4);
            }
        }
    }
}
