// src/physics/sim/metaball.rs

use crate::math::algorithms::metaballs::MetaballSource;
use crate::math::types::Bounds2D;
use crate::math::utils::random::{random_point_in_rect, random_sign, random_spread};
use bevy::math::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Anteil der Domäne, der beim Spawnen als Rand frei bleibt.
pub const SPAWN_MARGIN: f32 = 0.1;

/// Streuung von Geschwindigkeit und Radius um den eingestellten Wert (±50 %).
pub const SPAWN_SPREAD: f32 = 0.5;

/// Ein bewegter Metaball: Feldquelle plus Geschwindigkeit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metaball {
    pub source: MetaballSource,
    pub velocity: Vec2,
}

impl Metaball {
    pub fn new(position: Vec2, radius: f32, velocity: Vec2) -> Self {
        Self {
            source: MetaballSource::new(position, radius),
            velocity,
        }
    }

    /// Zufälliger Ball innerhalb von `bounds` (ohne den Rand von `SPAWN_MARGIN`).
    /// Der Betrag `speed × U(0.5, 1.5)` wird einmal gezogen und gilt für beide Achsen,
    /// jede mit eigenem zufälligem Vorzeichen. Bälle laufen also immer diagonal.
    ///
    /// Der Rand wird um das Zentrum von `bounds` abgezogen, nicht um den Ursprung.
    pub fn random(rng: &mut impl Rng, bounds: &Bounds2D, speed: f32, radius: f32) -> Self {
        let spawn_area = bounds.scale(1.0 - 2.0 * SPAWN_MARGIN);
        let position = random_point_in_rect(spawn_area.min, spawn_area.max, rng);
        let magnitude = random_spread(speed, SPAWN_SPREAD, rng);
        let velocity = Vec2::new(random_sign(rng), random_sign(rng)) * magnitude;
        let radius = random_spread(radius, SPAWN_SPREAD, rng);
        Self::new(position, radius, velocity)
    }

    pub fn position(&self) -> Vec2 {
        self.source.position
    }

    pub fn radius(&self) -> f32 {
        self.source.radius
    }

    /// Bewegt den Ball um `velocity × dt` und lässt ihn an den Rändern von `bounds` abprallen.
    ///
    /// Am Rand wird die Geschwindigkeitskomponente nach innen gerichtet (nicht nur negiert),
    /// damit ein Ball außerhalb der Grenzen nicht hin- und herspringt.
    pub fn advance(&mut self, dt: f32, bounds: &Bounds2D) {
        let mut position = self.source.position + self.velocity * dt;

        if position.x <= bounds.min.x {
            self.velocity.x = self.velocity.x.abs();
        } else if position.x >= bounds.max.x {
            self.velocity.x = -self.velocity.x.abs();
        }
        if position.y <= bounds.min.y {
            self.velocity.y = self.velocity.y.abs();
        } else if position.y >= bounds.max.y {
            self.velocity.y = -self.velocity.y.abs();
        }

        if !position.is_finite() {
            position = bounds.center();
        }
        self.source.position = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn bounds() -> Bounds2D {
        Bounds2D::from_min_size(Vec2::new(-5.0, -5.0), Vec2::new(10.0, 10.0)).unwrap()
    }

    #[test]
    fn test_random_respects_margin_and_spread() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let ball = Metaball::random(&mut rng, &bounds(), 1.0, 0.5);
            assert!(ball.position().x.abs() <= 4.0 + 1e-5);
            assert!(ball.position().y.abs() <= 4.0 + 1e-5);
            assert!((0.25..=0.75).contains(&ball.radius()));
            assert!((0.5..=1.5).contains(&ball.velocity.x.abs()));
            assert_eq!(ball.velocity.x.abs(), ball.velocity.y.abs());
        }
    }

    #[test]
    fn test_spawn_margin_follows_off_center_domain() {
        // Domäne [10, 20] × [0, 4]: Spawnbereich [11, 19] × [0.4, 3.6]
        let domain = Bounds2D::from_min_size(Vec2::new(10.0, 0.0), Vec2::new(10.0, 4.0)).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let position = Metaball::random(&mut rng, &domain, 1.0, 0.5).position();
            assert!((11.0 - 1e-4..=19.0 + 1e-4).contains(&position.x));
            assert!((0.4 - 1e-4..=3.6 + 1e-4).contains(&position.y));
        }
    }

    #[test]
    fn test_same_seed_same_balls() {
        let mut first = StdRng::seed_from_u64(42);
        let mut second = StdRng::seed_from_u64(42);
        for _ in 0..5 {
            assert_eq!(
                Metaball::random(&mut first, &bounds(), 2.0, 1.0),
                Metaball::random(&mut second, &bounds(), 2.0, 1.0)
            );
        }
    }

    #[test]
    fn test_advance_moves_linearly() {
        let mut ball = Metaball::new(Vec2::ZERO, 0.5, Vec2::new(1.0, -2.0));
        ball.advance(0.5, &bounds());
        assert_relative_eq!(ball.position().x, 0.5);
        assert_relative_eq!(ball.position().y, -1.0);
        assert_eq!(ball.velocity, Vec2::new(1.0, -2.0));
    }

    #[test]
    fn test_bounce_points_velocity_inward() {
        let mut ball = Metaball::new(Vec2::new(4.9, 0.0), 0.5, Vec2::new(1.0, 0.0));
        ball.advance(0.2, &bounds());
        assert_eq!(ball.velocity.x, -1.0);

        let mut ball = Metaball::new(Vec2::new(0.0, -4.9), 0.5, Vec2::new(0.0, -3.0));
        ball.advance(0.1, &bounds());
        assert_eq!(ball.velocity.y, 3.0);
    }

    #[test]
    fn test_ball_outside_does_not_oscillate() {
        // Weit außerhalb und schon nach innen unterwegs: Richtung bleibt erhalten
        let mut ball = Metaball::new(Vec2::new(8.0, 0.0), 0.5, Vec2::new(-1.0, 0.0));
        for _ in 0..3 {
            ball.advance(0.1, &bounds());
            assert_eq!(ball.velocity.x, -1.0);
        }
        assert!(ball.position().x < 8.0);
    }
}
