// ./src/setup.rs
use crate::physics::sim::resources::MetaballMeshHandle;
use crate::physics::sim::systems::empty_render_mesh;
use bevy::prelude::*;
use bevy::render::camera::ScalingMode;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};

/// Sichtbare Höhe in Weltkoordinaten (Domäne ist 10 hoch, plus Rand).
const VIEW_HEIGHT: f32 = 12.0;

pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // Kamera
    let mut camera = Camera2dBundle::default();
    camera.projection.scaling_mode = ScalingMode::FixedVertical(VIEW_HEIGHT);
    commands.spawn(camera);

    // Netz der gefüllten Region, wird jeden Frame überschrieben
    let mesh = meshes.add(empty_render_mesh());
    commands.spawn(MaterialMesh2dBundle {
        mesh: Mesh2dHandle(mesh.clone()),
        material: materials.add(ColorMaterial::from(Color::rgb(0.3, 0.55, 0.85))),
        transform: Transform::from_xyz(0.0, 0.0, 0.0),
        ..default()
    });
    commands.insert_resource(MetaballMeshHandle(mesh));
}
