// src/math/algorithms/metaballs/field.rs

use crate::math::algorithms::metaballs::influence::{
    FieldInfluence, MetaballSource, RectangleObstacle,
};
use bevy::math::Vec2;

/// Das kontinuierliche Metaball-Skalarfeld:
///
/// `f(x, y) = Σ r_i² / ((x − x_i)² + (y − y_i)²)  [+ Rechteck-Beitrag]`
///
/// Hält nur geliehene Referenzen auf die Quellen des aktuellen Ticks.
#[derive(Debug, Clone, Copy)]
pub struct MetaballField<'a> {
    pub sources: &'a [MetaballSource],
    pub obstacle: Option<&'a RectangleObstacle>,
}

impl<'a> MetaballField<'a> {
    pub fn new(sources: &'a [MetaballSource], obstacle: Option<&'a RectangleObstacle>) -> Self {
        Self { sources, obstacle }
    }

    /// Feldwert an `point`.
    pub fn evaluate(&self, point: Vec2) -> f32 {
        evaluate(point, self.sources, self.obstacle)
    }
}

/// Summe aller Ball-Beiträge plus optionalem Rechteck-Beitrag an `point`.
pub fn evaluate(
    point: Vec2,
    sources: &[MetaballSource],
    obstacle: Option<&RectangleObstacle>,
) -> f32 {
    let balls: f32 = sources.iter().map(|ball| ball.influence_at(point)).sum();
    balls + obstacle.map_or(0.0, |rect| rect.influence_at(point))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_superposition() {
        let sources = [
            MetaballSource::new(Vec2::new(-1.0, 0.0), 1.0),
            MetaballSource::new(Vec2::new(1.0, 0.0), 1.0),
        ];
        // Beide Bälle im Abstand 1: 1 + 1
        assert_relative_eq!(evaluate(Vec2::ZERO, &sources, None), 2.0);
        // Abstand 1 und 3: 1 + 1/9
        assert_relative_eq!(evaluate(Vec2::new(2.0, 0.0), &sources, None), 1.0 + 1.0 / 9.0);
    }

    #[test]
    fn test_obstacle_is_added() {
        let sources = [MetaballSource::new(Vec2::new(10.0, 0.0), 1.0)];
        let obstacle = RectangleObstacle::new(Vec2::ZERO, Vec2::new(2.0, 2.0)).unwrap();
        let point = Vec2::new(2.0, 0.0);
        let without = evaluate(point, &sources, None);
        let with = MetaballField::new(&sources, Some(&obstacle)).evaluate(point);
        assert_relative_eq!(with - without, 1.0 / 32.0, max_relative = 1e-4);
    }

    #[test]
    fn test_empty_field_is_zero() {
        assert_eq!(evaluate(Vec2::new(3.0, 4.0), &[], None), 0.0);
    }

    #[test]
    fn test_source_on_point_stays_finite() {
        let sources = [
            MetaballSource::new(Vec2::ZERO, 2.0),
            MetaballSource::new(Vec2::ZERO, 2.0),
        ];
        let value = evaluate(Vec2::ZERO, &sources, None);
        assert!(value.is_finite());
        assert!(value >= 1.0);
    }
}
