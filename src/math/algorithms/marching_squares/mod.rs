// src/math/algorithms/marching_squares/mod.rs

//! Marching Squares über einem `ScalarField2D`: Zellklassifikation, Konfigurationstabellen
//! und der Aufbau des Dreiecksnetzes.

pub mod cell;
pub mod mesh;
pub mod tables;

pub use self::cell::{Cell, CellEdge, ISO_THRESHOLD, edge_coordinate};
pub use self::mesh::{MeshBuffers, MeshBuilder, MeshStats};
pub use self::tables::{CellConfiguration, LocalPoint, configuration};
