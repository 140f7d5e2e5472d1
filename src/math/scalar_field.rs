// src/math/scalar_field.rs

use bevy::math::Vec2;

/// Trait für ein zweidimensionales, gitterförmig abgetastetes Skalarfeld.
/// Ermöglicht es Algorithmen wie Marching Squares, auf verschiedenen
/// Feldimplementierungen zu operieren.
///
/// Indizes sind sample-basiert: `(row, col)` mit `row` entlang y und `col` entlang x.
pub trait ScalarField2D {
    /// Anzahl der Sample-Zeilen.
    fn rows(&self) -> usize;

    /// Anzahl der Sample-Spalten.
    fn cols(&self) -> usize;

    /// Abstand zweier benachbarter Samples in Weltkoordinaten.
    fn cell_size(&self) -> f32;

    /// Skalarwert am Sample `(row, col)`.
    /// Gibt 0.0 zurück, wenn die Koordinaten außerhalb der Grenzen liegen.
    fn value(&self, row: usize, col: usize) -> f32;

    /// Weltposition des Samples `(row, col)`.
    fn sample_position(&self, row: usize, col: usize) -> Vec2;
}
