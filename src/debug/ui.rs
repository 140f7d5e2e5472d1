// ./src/debug/ui.rs
use crate::physics::sim::resources::{
    ExecuteSingleStepRequest, ExportSvgRequest, MAX_RESOLUTION, MetaballSimulationResource,
    RADIUS_RANGE, SPEED_RANGE, SimulationParameters,
};
use crate::physics::sim::state::SimulationState;
use bevy::prelude::*;
use bevy_egui::{
    EguiContexts,
    egui::{self, Slider, Window},
};

pub fn simulation_control_ui_system(
    mut contexts: EguiContexts,
    mut sim_params: ResMut<SimulationParameters>,
    sim: Res<MetaballSimulationResource>,
    mut single_step: ResMut<ExecuteSingleStepRequest>,
    mut export_svg: ResMut<ExportSvgRequest>,
    mut next_state: ResMut<NextState<SimulationState>>,
    current_state: Res<State<SimulationState>>,
) {
    // Auf einer Kopie arbeiten, damit die Ressource nur bei echten Änderungen als geändert gilt
    let mut params = sim_params.clone();

    Window::new("Metaballs")
        .default_width(320.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.heading("Steuerung");
            ui.horizontal(|ui| {
                let running = *current_state.get() == SimulationState::Running;
                if ui.button(if running { "⏸ Pause" } else { "▶ Play" }).clicked() {
                    next_state.set(current_state.get().toggled());
                }
                if ui
                    .add_enabled(!running, egui::Button::new("Schritt Vorwärts ▶"))
                    .clicked()
                {
                    single_step.0 = true;
                }
                if ui.button("SVG exportieren").clicked() {
                    export_svg.0 = true;
                }
            });

            ui.collapsing("Bälle", |ui| {
                ui.add(Slider::new(&mut params.ball_count, 1..=32).text("Anzahl"));
                ui.add(Slider::new(&mut params.ball_speed, SPEED_RANGE).text("Geschwindigkeit"));
                ui.add(Slider::new(&mut params.ball_radius, RADIUS_RANGE).text("Radius"));

                let mut fixed_seed = params.seed.is_some();
                ui.horizontal(|ui| {
                    ui.checkbox(&mut fixed_seed, "Fester Seed");
                    let mut seed = params.seed.unwrap_or_default();
                    if fixed_seed {
                        ui.add(egui::DragValue::new(&mut seed));
                    }
                    params.seed = fixed_seed.then_some(seed);
                });
                if ui.button("↺ Neu spawnen").clicked() {
                    // Anderer Seed erzwingt Neuaufbau
                    params.seed = Some(params.seed.map_or(0, |s| s.wrapping_add(1)));
                }
            });

            ui.collapsing("Gitter & Netz", |ui| {
                ui.add(
                    Slider::new(&mut params.resolution, 10..=MAX_RESOLUTION).text("Auflösung"),
                );
                ui.checkbox(&mut params.smooth, "Kanten glätten");
            });

            ui.collapsing("Hindernis", |ui| {
                ui.checkbox(&mut params.obstacle_enabled, "Rechteck aktiv");
                ui.add(Slider::new(&mut params.obstacle_center.x, -5.0..=5.0).text("Zentrum x"));
                ui.add(Slider::new(&mut params.obstacle_center.y, -5.0..=5.0).text("Zentrum y"));
                ui.add(Slider::new(&mut params.obstacle_size.x, 0.1..=8.0).text("Breite"));
                ui.add(Slider::new(&mut params.obstacle_size.y, 0.1..=8.0).text("Höhe"));
                ui.add(Slider::new(&mut params.obstacle_sharpness, 1.0..=10.0).text("Schärfe"));
            });

            ui.collapsing("Visualisierung & Debug", |ui| {
                ui.checkbox(&mut params.show_balls, "Bälle");
                ui.checkbox(&mut params.show_obstacle, "Hindernis");
                ui.checkbox(&mut params.show_domain, "Domäne");
                ui.horizontal(|ui| {
                    ui.label("SVG-Datei:");
                    ui.text_edit_singleline(&mut params.svg_path);
                });

                ui.separator();
                let stats = sim.last_stats;
                ui.label(format!("Dreiecke: {}", stats.triangles));
                ui.label(format!(
                    "Zellen: {} voll, {} Rand",
                    stats.full_cells, stats.boundary_cells
                ));
                if stats.dropped_triangles > 0 {
                    ui.colored_label(
                        egui::Color32::YELLOW,
                        format!("Verworfen: {}", stats.dropped_triangles),
                    );
                }
                if let Some(simulation) = sim.simulation.as_ref() {
                    ui.label(format!("Tick: {}", simulation.ticks()));
                }
            });

            if let Some(error) = sim.last_error.as_ref() {
                ui.colored_label(egui::Color32::RED, error);
            }
        });

    if params != *sim_params {
        *sim_params = params;
    }
}
