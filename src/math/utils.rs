// src/math/utils.rs

/// Mathematische Konstanten
pub mod constants {
    pub const EPSILON: f32 = 1e-6;

    /// Untergrenze für quadrierte Abstände im Nenner der Feldfunktion.
    /// Ein Sample genau auf einem Ball-Zentrum liefert damit einen endlichen Wert.
    pub const MIN_DISTANCE_SQUARED: f32 = 1e-8;

    /// Obergrenze eines einzelnen Feldbeitrags ("gesättigt" = innen).
    pub const MAX_FIELD_VALUE: f32 = 1e6;
}

/// Vergleichsfunktionen mit Toleranz
pub mod comparison {
    use super::constants::EPSILON;

    /// Prüft ob zwei Floats (nahezu) gleich sind
    pub fn nearly_equal(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    /// Lineare Interpolation
    pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
        a + (b - a) * t
    }

    /// Lineare Interpolation mit auf [0, 1] begrenztem `t`
    pub fn lerp_clamped(a: f32, b: f32, t: f32) -> f32 {
        lerp(a, b, t.clamp(0.0, 1.0))
    }

    /// Inverse lineare Interpolation.
    /// `None`, wenn `a` und `b` (nahezu) gleich sind oder das Ergebnis nicht endlich ist.
    pub fn inverse_lerp(a: f32, b: f32, value: f32) -> Option<f32> {
        if nearly_equal(a, b) {
            return None;
        }
        let t = (value - a) / (b - a);
        t.is_finite().then_some(t)
    }
}

/// Geometrische Hilfsfunktionen (einfach, ohne komplexe Strukturen)
pub mod simple_geometry {
    use bevy::math::Vec2;

    /// Berechnet das Kreuzprodukt zweier 2D-Vektoren (Skalar)
    pub fn cross_product_2d(a: Vec2, b: Vec2) -> f32 {
        a.x * b.y - a.y * b.x
    }

    /// Vorzeichenbehaftete Fläche eines Dreiecks.
    /// Negativ für Punkte im Uhrzeigersinn (y nach oben).
    pub fn signed_triangle_area(p1: Vec2, p2: Vec2, p3: Vec2) -> f32 {
        0.5 * cross_product_2d(p2 - p1, p3 - p1)
    }
}

/// Random utilities (erweitert vorhandene rand-Funktionalität)
pub mod random {
    use bevy::math::Vec2;
    use rand::Rng;

    /// Generiert zufälligen Punkt in einem Rechteck
    pub fn random_point_in_rect(min: Vec2, max: Vec2, rng: &mut impl Rng) -> Vec2 {
        Vec2::new(
            rng.random_range(min.x..=max.x),
            rng.random_range(min.y..=max.y),
        )
    }

    /// +1.0 oder -1.0 mit gleicher Wahrscheinlichkeit
    pub fn random_sign(rng: &mut impl Rng) -> f32 {
        if rng.random_bool(0.5) { 1.0 } else { -1.0 }
    }

    /// Skaliert `base` mit einem Faktor aus `[1 - spread, 1 + spread]`
    pub fn random_spread(base: f32, spread: f32, rng: &mut impl Rng) -> f32 {
        base * rng.random_range((1.0 - spread)..=(1.0 + spread))
    }
}
