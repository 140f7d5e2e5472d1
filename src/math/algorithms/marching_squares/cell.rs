// src/math/algorithms/marching_squares/cell.rs

use super::tables::{LocalPoint, to_vec2};
use crate::math::algorithms::metaballs::grid::SampleIndex;
use crate::math::scalar_field::ScalarField2D;
use crate::math::utils::comparison;
use bevy::math::Vec2;

/// Schwellenwert, ab dem ein Sample als "innen" gilt.
pub const ISO_THRESHOLD: f32 = 1.0;

/// Eine Zelle aus vier benachbarten Samples:
///
/// ```text
///    A ·---· B
///      |   |
///    C ·---· D
/// ```
///
/// C ist der Ursprung `(row, col)`, D = `(row, col + 1)`, A = `(row + 1, col)`,
/// B = `(row + 1, col + 1)`. Die Zelle speichert nur Indizes ins Gitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub a: SampleIndex,
    pub b: SampleIndex,
    pub c: SampleIndex,
    pub d: SampleIndex,
}

/// Die vier Kanten einer Zelle, jeweils von links nach rechts bzw. von unten nach oben.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellEdge {
    /// Oben, Punkt (0, 1): x wird zwischen A und B verschoben.
    AB,
    /// Rechts, Punkt (1, 0): y wird zwischen D und B verschoben.
    DB,
    /// Unten, Punkt (0, -1): x wird zwischen C und D verschoben.
    CD,
    /// Links, Punkt (-1, 0): y wird zwischen C und A verschoben.
    CA,
}

impl CellEdge {
    /// Kante, auf deren Mitte `point` liegt. `None` für Ecken.
    pub fn from_local_point(point: LocalPoint) -> Option<Self> {
        match point {
            (0, 1) => Some(Self::AB),
            (1, 0) => Some(Self::DB),
            (0, -1) => Some(Self::CD),
            (-1, 0) => Some(Self::CA),
            _ => None,
        }
    }

    /// Start- und Endsample der Kante. Die Reihenfolge bestimmt die Richtung der Interpolation.
    pub fn endpoints(self, cell: &Cell) -> (SampleIndex, SampleIndex) {
        match self {
            Self::AB => (cell.a, cell.b),
            Self::DB => (cell.d, cell.b),
            Self::CD => (cell.c, cell.d),
            Self::CA => (cell.c, cell.a),
        }
    }
}

/// Position des Schwellenwert-Durchgangs auf einer Kante, im Bereich [-1, 1].
///
/// `t = (threshold - start) / (end - start)` wird auf [0, 1] begrenzt. Bei flacher Kante
/// (`start ≈ end`) oder nicht-endlichem `t` wird die Kantenmitte 0 zurückgegeben.
pub fn edge_coordinate(start_value: f32, end_value: f32, threshold: f32) -> f32 {
    match comparison::inverse_lerp(start_value, end_value, threshold) {
        Some(t) => comparison::lerp_clamped(-1.0, 1.0, t),
        None => 0.0,
    }
}

impl Cell {
    /// Zelle mit Ursprung `origin`. Nachbarindizes werden auf die letzte gültige
    /// Zeile/Spalte begrenzt, damit am Gitterrand nie über das Gitter hinaus gelesen wird.
    pub fn from_origin(origin: SampleIndex, rows: usize, cols: usize) -> Self {
        let next_row = (origin.row + 1).min(rows.saturating_sub(1));
        let next_col = (origin.col + 1).min(cols.saturating_sub(1));

        Self {
            a: SampleIndex::new(next_row, origin.col),
            b: SampleIndex::new(next_row, next_col),
            c: origin,
            d: SampleIndex::new(origin.row, next_col),
        }
    }

    /// Alle Zellen eines Feldes in row-major Reihenfolge.
    /// Es gibt eine Zellzeile/-spalte weniger als Samplezeilen/-spalten.
    pub fn build_all<F: ScalarField2D + ?Sized>(field: &F) -> Vec<Cell> {
        let (rows, cols) = (field.rows(), field.cols());
        let cell_rows = rows.saturating_sub(1);
        let cell_cols = cols.saturating_sub(1);

        let mut cells = Vec::with_capacity(cell_rows * cell_cols);
        for row in 0..cell_rows {
            for col in 0..cell_cols {
                cells.push(Self::from_origin(SampleIndex::new(row, col), rows, cols));
            }
        }
        cells
    }

    /// Linke untere Ecke (C).
    pub fn origin(&self) -> SampleIndex {
        self.c
    }

    /// 4-Bit-Konfiguration: Bit 0 = C, Bit 1 = D, Bit 2 = B, Bit 3 = A,
    /// jeweils gesetzt wenn der Wert >= `ISO_THRESHOLD` ist.
    pub fn classify<F: ScalarField2D + ?Sized>(&self, field: &F) -> u8 {
        let inside = |index: SampleIndex| field.value(index.row, index.col) >= ISO_THRESHOLD;

        let mut configuration = 0;
        if inside(self.c) {
            configuration |= 1;
        }
        if inside(self.d) {
            configuration |= 2;
        }
        if inside(self.b) {
            configuration |= 4;
        }
        if inside(self.a) {
            configuration |= 8;
        }
        configuration
    }

    /// Verschiebt einen Kantenmittelpunkt an die interpolierte Durchgangsstelle.
    /// Ecken werden unverändert zurückgegeben.
    pub fn interpolate<F: ScalarField2D + ?Sized>(&self, field: &F, point: LocalPoint) -> Vec2 {
        let local = to_vec2(point);
        let Some(edge) = CellEdge::from_local_point(point) else {
            return local;
        };

        let (start, end) = edge.endpoints(self);
        let coordinate = edge_coordinate(
            field.value(start.row, start.col),
            field.value(end.row, end.col),
            ISO_THRESHOLD,
        );

        match edge {
            CellEdge::AB | CellEdge::CD => Vec2::new(coordinate, local.y),
            CellEdge::DB | CellEdge::CA => Vec2::new(local.x, coordinate),
        }
    }
}
