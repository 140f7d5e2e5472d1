// ./src/main.rs
use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use bevy_inspector_egui::quick::ResourceInspectorPlugin;

use metaball_sim::debug::{
    ui::simulation_control_ui_system, visualization::gizmos::draw_simulation_gizmos_system,
};
use metaball_sim::physics::sim::resources::*;
use metaball_sim::physics::sim::state::*;
use metaball_sim::physics::sim::systems::*;
use metaball_sim::setup::setup_scene;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(EguiPlugin)
        .init_resource::<SimulationParameters>()
        .register_type::<SimulationParameters>()
        // Rohansicht aller Parameter, zusätzlich zum Steuerungsfenster
        .add_plugins(ResourceInspectorPlugin::<SimulationParameters>::default())
        .init_resource::<MetaballSimulationResource>()
        .init_resource::<ExecuteSingleStepRequest>()
        .init_resource::<ExportSvgRequest>()
        .init_state::<SimulationState>()
        .add_systems(Startup, setup_scene)
        .add_systems(
            Update,
            (
                // Block 1: UI und Parameter
                simulation_control_ui_system,
                apply_parameters_system,
                // Block 2: Simulationsschritt
                advance_simulation_system.run_if(in_state(SimulationState::Running)),
                single_step_system.run_if(in_state(SimulationState::Paused)),
                // Block 3: Ausgabe
                upload_mesh_system,
                export_svg_system,
            )
                .chain(),
        )
        .add_systems(Update, draw_simulation_gizmos_system)
        .run();
}
