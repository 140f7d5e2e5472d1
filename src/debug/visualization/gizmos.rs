// src/debug/visualization/gizmos.rs
use crate::math::algorithms::metaballs::FieldInfluence;
use crate::physics::sim::resources::{MetaballSimulationResource, SimulationParameters};
use bevy::prelude::*;

const BALL_COLOR: Color = Color::RED;
const OBSTACLE_COLOR: Color = Color::GREEN;
const DOMAIN_COLOR: Color = Color::GRAY;

/// Umrisse der Bälle (Radius = Isolinie eines einzelnen Balls), des Hindernisses und der Domäne.
pub fn draw_simulation_gizmos_system(
    params: Res<SimulationParameters>,
    sim: Res<MetaballSimulationResource>,
    mut gizmos: Gizmos,
) {
    let Some(simulation) = sim.simulation.as_ref() else {
        return;
    };

    if params.show_domain {
        let domain = simulation.grid().domain();
        gizmos.rect_2d(domain.center(), 0.0, domain.size(), DOMAIN_COLOR);
    }

    if params.show_obstacle {
        if let Some(outline) = simulation.obstacle().and_then(|o| o.bounding_box()) {
            gizmos.rect_2d(outline.center(), 0.0, outline.size(), OBSTACLE_COLOR);
        }
    }

    if params.show_balls {
        for ball in simulation.balls() {
            gizmos.circle_2d(ball.position(), ball.radius(), BALL_COLOR);
        }
    }
}
