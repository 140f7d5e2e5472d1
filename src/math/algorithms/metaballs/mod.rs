// src/math/algorithms/metaballs/mod.rs

pub mod builder;
pub mod field;
pub mod grid;
pub mod influence;

pub use self::builder::SampleGridBuilder;
pub use self::field::MetaballField;
pub use self::grid::{Sample, SampleGrid, SampleIndex};
pub use self::influence::{FieldInfluence, MetaballSource, RectangleObstacle};
