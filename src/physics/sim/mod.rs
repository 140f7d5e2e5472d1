pub mod metaball;
pub mod resources;
pub mod simulation;
pub mod state;
pub mod systems;
