// src/math/algorithms/marching_squares/mesh.rs

use super::cell::Cell;
use super::tables::{self, to_vec2};
use crate::math::scalar_field::ScalarField2D;
use bevy::log::{debug, warn};
use bevy::math::Vec3;

/// Faktor für die Puffergröße: `6 × rows × cols` Einträge.
pub const BUFFER_SLOTS_PER_SAMPLE: usize = 6;

/// Konfiguration, die eine Zelle vollständig füllt und nie geglättet wird.
const FULL_CELL: u8 = 15;

/// Vertex- und Indexpuffer fester Kapazität.
///
/// Nur die ersten `used_vertex_count()` bzw. `used_index_count()` Einträge sind gültig,
/// alle weiteren sind genullt.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshBuffers {
    vertices: Vec<Vec3>,
    indices: Vec<u32>,
    used_vertices: usize,
    used_indices: usize,
}

impl MeshBuffers {
    /// Beide Puffer mit `capacity` genullten Einträgen.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: vec![Vec3::ZERO; capacity],
            indices: vec![0; capacity],
            used_vertices: 0,
            used_indices: 0,
        }
    }

    /// Kapazität für ein Gitter mit `rows × cols` Samples.
    pub fn for_grid(rows: usize, cols: usize) -> Self {
        Self::with_capacity(BUFFER_SLOTS_PER_SAMPLE * rows * cols)
    }

    /// Der komplette Vertexpuffer inklusive genullter Restplätze.
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Der komplette Indexpuffer inklusive genullter Restplätze.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn active_vertices(&self) -> &[Vec3] {
        &self.vertices[..self.used_vertices]
    }

    pub fn active_indices(&self) -> &[u32] {
        &self.indices[..self.used_indices]
    }

    pub fn used_vertex_count(&self) -> usize {
        self.used_vertices
    }

    pub fn used_index_count(&self) -> usize {
        self.used_indices
    }

    pub fn triangle_count(&self) -> usize {
        self.used_indices / 3
    }

    pub fn capacity(&self) -> usize {
        self.vertices.len()
    }

    /// Die Weltpositionen eines Dreiecks aus dem aktiven Bereich.
    pub fn triangle(&self, triangle: usize) -> Option<[Vec3; 3]> {
        let base = triangle.checked_mul(3)?;
        let idx = self.active_indices().get(base..base.checked_add(3)?)?;
        Some([
            *self.vertices.get(idx[0] as usize)?,
            *self.vertices.get(idx[1] as usize)?,
            *self.vertices.get(idx[2] as usize)?,
        ])
    }

    /// Nullt `[new_used, previous_used)`. Alles dahinter ist bereits null.
    fn clear_tail(&mut self, used_vertices: usize, used_indices: usize) {
        if used_vertices < self.used_vertices {
            self.vertices[used_vertices..self.used_vertices].fill(Vec3::ZERO);
        }
        if used_indices < self.used_indices {
            self.indices[used_indices..self.used_indices].fill(0);
        }
        self.used_vertices = used_vertices;
        self.used_indices = used_indices;
    }
}

/// Ergebnis eines `rebuild`-Durchlaufs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MeshStats {
    pub used_vertices: usize,
    pub used_indices: usize,
    pub triangles: usize,
    /// Zellen mit Konfiguration 15.
    pub full_cells: usize,
    /// Zellen mit Konfiguration 1..=14.
    pub boundary_cells: usize,
    /// Dreiecke, die wegen voller Puffer verworfen wurden.
    pub dropped_triangles: usize,
}

/// Baut jeden Tick das Dreiecksnetz der gefüllten Region in wiederverwendete Puffer.
///
/// Jedes Dreieck bekommt drei eigene Vertices; es werden keine Vertices zwischen
/// Dreiecken oder Zellen geteilt.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshBuilder {
    buffers: MeshBuffers,
}

impl MeshBuilder {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            buffers: MeshBuffers::for_grid(rows, cols),
        }
    }

    pub fn for_field<F: ScalarField2D + ?Sized>(field: &F) -> Self {
        Self::new(field.rows(), field.cols())
    }

    /// Builder mit explizit vorgegebener Pufferkapazität.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffers: MeshBuffers::with_capacity(capacity),
        }
    }

    pub fn buffers(&self) -> &MeshBuffers {
        &self.buffers
    }

    /// Klassifiziert alle Zellen in der gegebenen Reihenfolge und schreibt deren Dreiecke
    /// ab Index 0 in die Puffer. Reste des vorherigen Frames werden genullt.
    ///
    /// Mit `smooth` werden Kantenpunkte (außer bei voll gefüllten Zellen) interpoliert.
    pub fn rebuild<F: ScalarField2D + ?Sized>(
        &mut self,
        field: &F,
        cells: &[Cell],
        smooth: bool,
    ) -> MeshStats {
        let half_cell = field.cell_size() * 0.5;
        let capacity_vertices = self.buffers.vertices.len();
        let capacity_indices = self.buffers.indices.len();

        let mut stats = MeshStats::default();
        let mut vertex_index = 0;
        let mut triangle_index = 0;

        for cell in cells {
            let code = cell.classify(field);
            if code == 0 {
                continue;
            }
            if code == FULL_CELL {
                stats.full_cells += 1;
            } else {
                stats.boundary_cells += 1;
            }

            let origin = cell.origin();
            let lower_left = field.sample_position(origin.row, origin.col);
            let configuration = tables::configuration(code);

            for triangle in configuration.triangles {
                if vertex_index + 3 > capacity_vertices || triangle_index + 3 > capacity_indices
                {
                    stats.dropped_triangles += 1;
                    continue;
                }

                let points = configuration.triangle_points(triangle);
                for (k, point) in points.into_iter().enumerate() {
                    let local = if smooth && code != FULL_CELL {
                        cell.interpolate(field, point)
                    } else {
                        to_vec2(point)
                    };
                    let world = lower_left + local * half_cell;
                    self.buffers.vertices[vertex_index + k] = world.extend(0.0);
                    self.buffers.indices[triangle_index + k] = (vertex_index + k) as u32;
                }

                vertex_index += 3;
                triangle_index += 3;
            }
        }

        self.buffers.clear_tail(vertex_index, triangle_index);

        stats.used_vertices = vertex_index;
        stats.used_indices = triangle_index;
        stats.triangles = triangle_index / 3;

        if stats.dropped_triangles > 0 {
            warn!(
                "Mesh buffers full (capacity {}): dropped {} triangles",
                capacity_vertices, stats.dropped_triangles
            );
        }
        debug!(
            "Mesh rebuilt: {} triangles, {} full cells, {} boundary cells",
            stats.triangles, stats.full_cells, stats.boundary_cells
        );

        stats
    }
}
