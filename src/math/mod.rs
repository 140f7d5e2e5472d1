pub mod algorithms;
pub mod error;
pub mod scalar_field;
pub mod types;
pub mod utils;

// Re-exports für einfache Verwendung
pub use error::{MathError, MathResult};
pub use types::*;

// Öffentliche API
pub mod prelude {
    pub use super::{
        algorithms::{
            marching_squares::{Cell, MeshBuffers, MeshBuilder, MeshStats},
            metaballs::{
                FieldInfluence, MetaballField, MetaballSource, RectangleObstacle, SampleGrid,
                SampleGridBuilder, SampleIndex,
            },
        },
        error::{MathError, MathResult},
        scalar_field::ScalarField2D,
        types::*,
    };
}
