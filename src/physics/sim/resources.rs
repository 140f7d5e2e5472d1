use crate::math::algorithms::marching_squares::MeshStats;
use crate::math::error::{MathError, MathResult};
use crate::math::types::Bounds2D;
use crate::physics::sim::simulation::MetaballSimulation;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Erlaubter Bereich für die Grundgeschwindigkeit der Bälle.
pub const SPEED_RANGE: std::ops::RangeInclusive<f32> = 0.5..=3.0;
/// Erlaubter Bereich für den Grundradius der Bälle.
pub const RADIUS_RANGE: std::ops::RangeInclusive<f32> = 0.2..=2.0;
/// Obergrenze für die Gitterauflösung pro Achse.
pub const MAX_RESOLUTION: usize = 400;

#[derive(Resource, Reflect, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[reflect(Resource)]
#[serde(default)]
pub struct SimulationParameters {
    // --- Bälle ---
    pub ball_count: usize,
    pub ball_speed: f32,
    pub ball_radius: f32,
    /// Fester Seed für reproduzierbares Spawnen. `None` = zufällig.
    pub seed: Option<u64>,

    // --- Gitter ---
    pub resolution: usize,
    pub domain_min: Vec2,
    pub domain_size: Vec2,

    // --- Netz ---
    pub smooth: bool,

    // --- Hindernis ---
    pub obstacle_enabled: bool,
    pub obstacle_center: Vec2,
    /// Volle Ausdehnung (Breite, Höhe).
    pub obstacle_size: Vec2,
    pub obstacle_sharpness: f32,

    // --- Visualisierung & Debug ---
    pub show_balls: bool,
    pub show_obstacle: bool,
    pub show_domain: bool,
    pub svg_path: String,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            ball_count: 6,
            ball_speed: 1.0,
            ball_radius: 0.5,
            seed: None,

            resolution: 100,
            domain_min: Vec2::new(-5.0, -5.0),
            domain_size: Vec2::new(10.0, 10.0),

            smooth: false,

            obstacle_enabled: false,
            obstacle_center: Vec2::ZERO,
            obstacle_size: Vec2::new(2.0, 1.0),
            obstacle_sharpness: 5.0,

            show_balls: true,
            show_obstacle: true,
            show_domain: true,
            svg_path: "metaballs.svg".to_string(),
        }
    }
}

impl SimulationParameters {
    pub fn domain(&self) -> MathResult<Bounds2D> {
        Bounds2D::from_min_size(self.domain_min, self.domain_size)
    }

    /// Prüft alle Werte, bevor daraus eine Simulation gebaut wird.
    pub fn validate(&self) -> MathResult<()> {
        if self.ball_count == 0 {
            return Err(MathError::InsufficientPoints {
                expected: 1,
                actual: 0,
            });
        }
        if !(2..=MAX_RESOLUTION).contains(&self.resolution) {
            return Err(MathError::invalid_config(format!(
                "Resolution {} outside of 2..={}",
                self.resolution, MAX_RESOLUTION
            )));
        }
        if !SPEED_RANGE.contains(&self.ball_speed) {
            return Err(MathError::invalid_config(format!(
                "Ball speed {} outside of {:?}",
                self.ball_speed, SPEED_RANGE
            )));
        }
        if !RADIUS_RANGE.contains(&self.ball_radius) {
            return Err(MathError::invalid_config(format!(
                "Ball radius {} outside of {:?}",
                self.ball_radius, RADIUS_RANGE
            )));
        }
        let domain = self.domain()?;
        if domain.width() <= 0.0 {
            return Err(MathError::invalid_config("Domain width must be positive"));
        }
        if !(self.obstacle_size.cmpgt(Vec2::ZERO).all() && self.obstacle_size.is_finite()) {
            return Err(MathError::invalid_config(format!(
                "Obstacle size must be positive, got {}",
                self.obstacle_size
            )));
        }
        if !(self.obstacle_sharpness > 0.0 && self.obstacle_sharpness.is_finite()) {
            return Err(MathError::invalid_config("Obstacle sharpness must be positive"));
        }
        Ok(())
    }
}

/// Die laufende Simulation. `None`, solange die Parameter ungültig sind.
#[derive(Resource, Debug, Default)]
pub struct MetaballSimulationResource {
    pub simulation: Option<MetaballSimulation>,
    pub last_stats: MeshStats,
    pub last_error: Option<String>,
}

/// Handle auf das Mesh-Asset, in das jeden Frame hochgeladen wird.
#[derive(Resource, Debug, Clone, Default)]
pub struct MetaballMeshHandle(pub Handle<Mesh>);

#[derive(Resource, Default, Debug, Clone, Copy, PartialEq)]
pub struct ExecuteSingleStepRequest(pub bool);

#[derive(Resource, Default, Debug, Clone, Copy, PartialEq)]
pub struct ExportSvgRequest(pub bool);

/// Feste Schrittweite für einen Einzelschritt im pausierten Zustand.
pub const SINGLE_STEP_DT: f32 = 1.0 / 60.0;
