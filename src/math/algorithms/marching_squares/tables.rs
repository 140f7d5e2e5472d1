// src/math/algorithms/marching_squares/tables.rs

//! Lookup-Tabellen für die 16 Zellkonfigurationen.
//!
//! Die Punkte einer Konfiguration liegen im normierten Zellraum:
//!
//! ```text
//!      -1   0   1
//!    1  A ---+--- B
//!    0  +       +   Y
//!   -1  C ---+--- D
//!           X
//! ```
//!
//! Punkte mit zwei Koordinaten ≠ 0 sind Zellecken, Punkte mit genau einer 0 liegen auf einer
//! Kantenmitte und werden beim Glätten verschoben. Die Dreiecke referenzieren die Punkte ihrer
//! Konfiguration und sind im Uhrzeigersinn orientiert (Vorderseite).

use bevy::math::Vec2;

/// Punkt im Zellraum, Koordinaten aus {-1, 0, 1}.
pub type LocalPoint = (i8, i8);

/// Drei Indizes in die Punktliste einer Konfiguration.
pub type TriangleIndices = [usize; 3];

/// Geometrie einer einzelnen Konfiguration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellConfiguration {
    pub points: &'static [LocalPoint],
    pub triangles: &'static [TriangleIndices],
}

impl CellConfiguration {
    /// Die drei Punkte des Dreiecks `triangle` in Listenreihenfolge.
    pub fn triangle_points(&self, triangle: &TriangleIndices) -> [LocalPoint; 3] {
        [
            self.points[triangle[0]],
            self.points[triangle[1]],
            self.points[triangle[2]],
        ]
    }
}

/// Anzahl möglicher Konfigurationen (4 Ecken, je ein Bit).
pub const CONFIGURATION_COUNT: usize = 16;

// Reihenfolge 0..=15: Bit 0 = C (unten links), Bit 1 = D (unten rechts),
// Bit 2 = B (oben rechts), Bit 3 = A (oben links).
pub const CONFIGURATIONS: [CellConfiguration; CONFIGURATION_COUNT] = [
    // 0
    CellConfiguration {
        points: &[],
        triangles: &[],
    },
    // 1
    CellConfiguration {
        points: &[(-1, 0), (0, -1), (-1, -1)],
        triangles: &[[0, 1, 2]],
    },
    // 2
    CellConfiguration {
        points: &[(0, -1), (1, 0), (1, -1)],
        triangles: &[[0, 1, 2]],
    },
    // 3
    CellConfiguration {
        points: &[(-1, 0), (1, 0), (-1, -1), (1, -1)],
        triangles: &[[0, 1, 2], [1, 3, 2]],
    },
    // 4
    CellConfiguration {
        points: &[(0, 1), (1, 0), (1, 1)],
        triangles: &[[0, 2, 1]],
    },
    // 5 (Sattel, zwei getrennte Ecken)
    CellConfiguration {
        points: &[(-1, 0), (0, -1), (-1, -1), (0, 1), (1, 0), (1, 1)],
        triangles: &[[0, 1, 2], [5, 4, 3]],
    },
    // 6
    CellConfiguration {
        points: &[(0, 1), (0, -1), (1, 1), (1, -1)],
        triangles: &[[0, 2, 1], [1, 2, 3]],
    },
    // 7
    CellConfiguration {
        points: &[(-1, 0), (0, 1), (1, 1), (1, -1), (-1, -1)],
        triangles: &[[0, 3, 4], [0, 1, 3], [1, 2, 3]],
    },
    // 8
    CellConfiguration {
        points: &[(-1, 0), (0, 1), (-1, 1)],
        triangles: &[[0, 2, 1]],
    },
    // 9
    CellConfiguration {
        points: &[(0, 1), (0, -1), (-1, 1), (-1, -1)],
        triangles: &[[0, 1, 2], [1, 3, 2]],
    },
    // 10 (Sattel, zwei getrennte Ecken)
    CellConfiguration {
        points: &[(0, -1), (1, 0), (1, -1), (-1, 0), (0, 1), (-1, 1)],
        triangles: &[[0, 1, 2], [3, 5, 4]],
    },
    // 11
    CellConfiguration {
        points: &[(0, 1), (1, 0), (-1, 1), (-1, -1), (1, -1)],
        triangles: &[[0, 3, 2], [0, 1, 3], [1, 4, 3]],
    },
    // 12
    CellConfiguration {
        points: &[(-1, 0), (1, 0), (-1, 1), (1, 1)],
        triangles: &[[0, 2, 1], [1, 2, 3]],
    },
    // 13
    CellConfiguration {
        points: &[(0, -1), (1, 0), (-1, 1), (1, 1), (-1, -1)],
        triangles: &[[2, 3, 1], [2, 1, 0], [2, 0, 4]],
    },
    // 14
    CellConfiguration {
        points: &[(-1, 0), (0, -1), (-1, 1), (1, 1), (1, -1)],
        triangles: &[[0, 2, 3], [0, 3, 1], [1, 3, 4]],
    },
    // 15
    CellConfiguration {
        points: &[(-1, 1), (1, 1), (1, -1), (-1, -1)],
        triangles: &[[0, 1, 3], [1, 2, 3]],
    },
];

/// Tabelleneintrag für `code`. Nur die unteren 4 Bits werden verwendet.
#[inline]
pub fn configuration(code: u8) -> &'static CellConfiguration {
    &CONFIGURATIONS[(code & 0x0F) as usize]
}

/// Konvertiert einen Tabellenpunkt in einen `Vec2`.
#[inline]
pub fn to_vec2(point: LocalPoint) -> Vec2 {
    Vec2::new(point.0 as f32, point.1 as f32)
}
