// ./src/lib.rs
pub mod debug;
pub mod math;
pub mod physics;
pub mod setup; // Kamera und Mesh-Entity
