// src/math/algorithms/mod.rs

// Feldquellen und Abtastgitter
pub mod metaballs;
// Konturextraktion auf dem Gitter
pub mod marching_squares;

pub use self::marching_squares::{Cell, MeshBuffers, MeshBuilder, MeshStats};
pub use self::metaballs::{
    MetaballField, MetaballSource, RectangleObstacle, SampleGrid, SampleGridBuilder,
};
