use super::resources::{
    ExecuteSingleStepRequest, ExportSvgRequest, MetaballMeshHandle, MetaballSimulationResource,
    SINGLE_STEP_DT, SimulationParameters,
};
use super::simulation::MetaballSimulation;
use crate::debug::visualization::svg::write_simulation_svg;
use crate::math::algorithms::marching_squares::MeshBuffers;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;

/// Leeres Dreiecksnetz für die 2D-Darstellung.
pub fn empty_render_mesh() -> Mesh {
    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::MAIN_WORLD | RenderAssetUsages::RENDER_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, Vec::<[f32; 3]>::new());
    mesh.insert_indices(Indices::U32(Vec::new()));
    mesh
}

/// Kopiert den aktiven Bereich der Puffer in ein Bevy-Mesh.
pub fn write_render_mesh(mesh: &mut Mesh, buffers: &MeshBuffers) {
    let positions: Vec<[f32; 3]> = buffers
        .active_vertices()
        .iter()
        .map(|v| v.to_array())
        .collect();
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_indices(Indices::U32(buffers.active_indices().to_vec()));
}

/// Baut die Simulation neu oder übernimmt Live-Parameter, sobald sich die Parameter ändern.
pub fn apply_parameters_system(
    params: Res<SimulationParameters>,
    mut sim: ResMut<MetaballSimulationResource>,
) {
    if !params.is_changed() {
        return;
    }

    let rebuild = sim
        .simulation
        .as_ref()
        .map_or(true, |simulation| simulation.needs_rebuild(&params));

    if rebuild {
        match MetaballSimulation::new(&params) {
            Ok(simulation) => {
                sim.last_stats = simulation.stats();
                sim.simulation = Some(simulation);
                sim.last_error = None;
            }
            Err(e) => {
                warn!("Simulation could not be rebuilt: {}", e);
                sim.last_error = Some(e.to_string());
            }
        }
        return;
    }

    let result = match sim.simulation.as_mut() {
        Some(simulation) => simulation.apply_live_parameters(&params).map(|_| {
            // Im pausierten Zustand soll die Änderung trotzdem sichtbar werden
            simulation.refresh_and_rebuild()
        }),
        None => return,
    };
    match result {
        Ok(stats) => {
            sim.last_stats = stats;
            sim.last_error = None;
        }
        Err(e) => {
            warn!("Live parameters rejected: {}", e);
            sim.last_error = Some(e.to_string());
        }
    }
}

/// Läuft nur im Zustand `Running`.
pub fn advance_simulation_system(time: Res<Time>, mut sim: ResMut<MetaballSimulationResource>) {
    let dt = time.delta_seconds();
    if let Some(simulation) = sim.simulation.as_mut() {
        let stats = simulation.tick(dt);
        sim.last_stats = stats;
    }
}

/// Einzelschritt im pausierten Zustand.
pub fn single_step_system(
    mut request: ResMut<ExecuteSingleStepRequest>,
    mut sim: ResMut<MetaballSimulationResource>,
) {
    if !request.0 {
        return;
    }
    request.0 = false;
    let sim = &mut *sim;
    if let Some(simulation) = sim.simulation.as_mut() {
        let stats = simulation.tick(SINGLE_STEP_DT);
        sim.last_stats = stats;
        info!("Single step executed (tick {})", simulation.ticks());
    }
}

pub fn upload_mesh_system(
    sim: Res<MetaballSimulationResource>,
    handle: Res<MetaballMeshHandle>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    if !sim.is_changed() {
        return;
    }
    let Some(simulation) = sim.simulation.as_ref() else {
        return;
    };
    if let Some(mesh) = meshes.get_mut(&handle.0) {
        write_render_mesh(mesh, simulation.mesh());
    }
}

pub fn export_svg_system(
    mut request: ResMut<ExportSvgRequest>,
    params: Res<SimulationParameters>,
    sim: Res<MetaballSimulationResource>,
) {
    if !request.0 {
        return;
    }
    request.0 = false;
    let Some(simulation) = sim.simulation.as_ref() else {
        warn!("No simulation to export.");
        return;
    };
    if let Err(e) = write_simulation_svg(&params.svg_path, simulation, 800.0) {
        error!("SVG export to '{}' failed: {}", params.svg_path, e);
    }
}
