// src/physics/sim/simulation.rs

use super::metaball::Metaball;
use super::resources::SimulationParameters;
use crate::math::algorithms::marching_squares::{Cell, MeshBuffers, MeshBuilder, MeshStats};
use crate::math::algorithms::metaballs::{
    MetaballSource, RectangleObstacle, SampleGrid, SampleGridBuilder,
};
use crate::math::error::{MathError, MathResult};
use crate::math::types::Bounds2D;
use bevy::log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Die Parameter, deren Änderung einen kompletten Neuaufbau erzwingt.
#[derive(Debug, Clone, PartialEq)]
struct SpawnConfig {
    ball_count: usize,
    ball_speed: f32,
    ball_radius: f32,
    seed: Option<u64>,
    resolution: usize,
    domain: Bounds2D,
}

impl SpawnConfig {
    fn from_params(params: &SimulationParameters) -> MathResult<Self> {
        Ok(Self {
            ball_count: params.ball_count,
            ball_speed: params.ball_speed,
            ball_radius: params.ball_radius,
            seed: params.seed,
            resolution: params.resolution,
            domain: params.domain()?,
        })
    }
}

/// Besitzt Gitter, Zellen, Netzpuffer und Bälle einer laufenden Simulation.
///
/// Ein Tick bewegt die Bälle, berechnet das Feld neu und baut das Netz in die
/// bestehenden Puffer. Zwischen zwei Ticks wird nichts neu alloziert.
#[derive(Debug, Clone)]
pub struct MetaballSimulation {
    grid: SampleGrid,
    cells: Vec<Cell>,
    mesh: MeshBuilder,
    balls: Vec<Metaball>,
    sources: Vec<MetaballSource>,
    obstacle: Option<RectangleObstacle>,
    smooth: bool,
    config: Option<SpawnConfig>,
    stats: MeshStats,
    ticks: u64,
}

impl MetaballSimulation {
    /// Baut eine Simulation aus den Parametern und spawnt die Bälle zufällig.
    pub fn new(params: &SimulationParameters) -> MathResult<Self> {
        params.validate()?;
        let config = SpawnConfig::from_params(params)?;

        let mut rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let balls: Vec<Metaball> = (0..params.ball_count)
            .map(|_| {
                Metaball::random(&mut rng, &config.domain, params.ball_speed, params.ball_radius)
            })
            .collect();

        let obstacle = if params.obstacle_enabled {
            Some(obstacle_from_params(params)?)
        } else {
            None
        };

        let mut simulation =
            Self::from_balls(config.domain, params.resolution, balls, obstacle, params.smooth)?;
        simulation.config = Some(config);

        info!(
            "MetaballSimulation created: {} balls, resolution {}, seed {:?}",
            params.ball_count, params.resolution, params.seed
        );
        Ok(simulation)
    }

    /// Baut eine Simulation aus vorgegebenen Bällen.
    pub fn from_balls(
        domain: Bounds2D,
        resolution: usize,
        balls: Vec<Metaball>,
        obstacle: Option<RectangleObstacle>,
        smooth: bool,
    ) -> MathResult<Self> {
        if balls.is_empty() {
            return Err(MathError::InsufficientPoints {
                expected: 1,
                actual: 0,
            });
        }

        let grid = SampleGridBuilder::new()
            .bounds(&domain)
            .resolution(resolution)
            .build()?;
        let cells = Cell::build_all(&grid);
        let mesh = MeshBuilder::for_field(&grid);
        let sources = Vec::with_capacity(balls.len());

        let mut simulation = Self {
            grid,
            cells,
            mesh,
            balls,
            sources,
            obstacle,
            smooth,
            config: None,
            stats: MeshStats::default(),
            ticks: 0,
        };
        simulation.refresh_and_rebuild();
        Ok(simulation)
    }

    /// Ein Simulationsschritt: Bewegung, Feld, Netz.
    pub fn tick(&mut self, dt: f32) -> MeshStats {
        let bounds = *self.grid.domain();
        for ball in self.balls.iter_mut() {
            ball.advance(dt, &bounds);
        }
        self.ticks += 1;
        self.refresh_and_rebuild()
    }

    /// Berechnet Feld und Netz für die aktuellen Ballpositionen neu, ohne zu bewegen.
    pub fn refresh_and_rebuild(&mut self) -> MeshStats {
        self.sources.clear();
        self.sources.extend(self.balls.iter().map(|ball| ball.source));
        self.grid.refresh(&self.sources, self.obstacle.as_ref());
        self.stats = self.mesh.rebuild(&self.grid, &self.cells, self.smooth);
        self.stats
    }

    pub fn set_smooth(&mut self, smooth: bool) {
        self.smooth = smooth;
    }

    pub fn set_obstacle(&mut self, obstacle: Option<RectangleObstacle>) {
        self.obstacle = obstacle;
    }

    /// Übernimmt Glättung und Hindernis aus den Parametern. Beides braucht keinen Neuaufbau.
    pub fn apply_live_parameters(&mut self, params: &SimulationParameters) -> MathResult<()> {
        self.smooth = params.smooth;
        self.obstacle = if params.obstacle_enabled {
            Some(obstacle_from_params(params)?)
        } else {
            None
        };
        Ok(())
    }

    /// `true`, wenn sich Ballanzahl, Geschwindigkeit, Radius, Seed, Auflösung oder Domäne
    /// geändert haben und die Simulation neu gebaut werden muss.
    pub fn needs_rebuild(&self, params: &SimulationParameters) -> bool {
        match (&self.config, SpawnConfig::from_params(params)) {
            (Some(current), Ok(requested)) => *current != requested,
            _ => true,
        }
    }

    pub fn grid(&self) -> &SampleGrid {
        &self.grid
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn mesh(&self) -> &MeshBuffers {
        self.mesh.buffers()
    }

    pub fn balls(&self) -> &[Metaball] {
        &self.balls
    }

    pub fn obstacle(&self) -> Option<&RectangleObstacle> {
        self.obstacle.as_ref()
    }

    pub fn smooth(&self) -> bool {
        self.smooth
    }

    pub fn stats(&self) -> MeshStats {
        self.stats
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

fn obstacle_from_params(params: &SimulationParameters) -> MathResult<RectangleObstacle> {
    RectangleObstacle::with_sharpness(
        params.obstacle_center,
        params.obstacle_size,
        params.obstacle_sharpness,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::scalar_field::ScalarField2D;
    use bevy::math::Vec2;
    use std::collections::HashSet;

    fn domain() -> Bounds2D {
        Bounds2D::from_min_size(Vec2::new(-5.0, -5.0), Vec2::new(10.0, 10.0)).unwrap()
    }

    fn single_ball(radius: f32) -> MetaballSimulation {
        let ball = Metaball::new(Vec2::ZERO, radius, Vec2::ZERO);
        MetaballSimulation::from_balls(domain(), 20, vec![ball], None, false).unwrap()
    }

    fn samples_inside(grid: &SampleGrid) -> usize {
        grid.samples().iter().filter(|s| s.value >= 1.0).count()
    }

    fn seeded_params() -> SimulationParameters {
        SimulationParameters {
            seed: Some(1234),
            resolution: 40,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_ball_list_is_rejected() {
        assert!(matches!(
            MetaballSimulation::from_balls(domain(), 20, Vec::new(), None, false),
            Err(MathError::InsufficientPoints { .. })
        ));
    }

    #[test]
    fn test_single_ball_fills_cells_inside_unit_circle() {
        let simulation = single_ball(1.0);
        let grid = simulation.grid();
        for cell in simulation.cells() {
            let distances: Vec<f32> = [cell.a, cell.b, cell.c, cell.d]
                .iter()
                .map(|i| grid.sample_position(i.row, i.col).length())
                .collect();
            let code = cell.classify(grid);
            if distances.iter().all(|d| *d <= 1.0) {
                assert_eq!(code, 15, "cell {:?}", cell.origin());
            }
            if distances.iter().all(|d| *d > 1.0) {
                assert_eq!(code, 0, "cell {:?}", cell.origin());
            }
        }
        assert!(simulation.stats().full_cells > 0);
    }

    #[test]
    fn test_vertices_stay_near_the_ball() {
        let simulation = single_ball(1.0);
        // Zellgröße 0.5, Geometrie liegt in C ± 0.25
        let reach = 1.0 + 0.5 * 2f32.sqrt() + 0.25 * 2f32.sqrt() + 1e-4;
        for vertex in simulation.mesh().active_vertices() {
            assert!(vertex.truncate().length() <= reach, "{:?}", vertex);
        }
    }

    #[test]
    fn test_doubling_radius_grows_filled_region() {
        let nonzero = |simulation: &MetaballSimulation| -> HashSet<(usize, usize)> {
            simulation
                .cells()
                .iter()
                .filter(|cell| cell.classify(simulation.grid()) != 0)
                .map(|cell| (cell.origin().row, cell.origin().col))
                .collect()
        };
        let small = single_ball(1.0);
        let large = single_ball(2.0);
        let small_cells = nonzero(&small);
        let large_cells = nonzero(&large);
        assert!(small_cells.is_subset(&large_cells));
        assert!(large_cells.len() > small_cells.len());
        assert!(samples_inside(large.grid()) > samples_inside(small.grid()));
    }

    #[test]
    fn test_seeded_construction_is_reproducible() {
        let first = MetaballSimulation::new(&seeded_params()).unwrap();
        let second = MetaballSimulation::new(&seeded_params()).unwrap();
        assert_eq!(first.balls(), second.balls());
        assert_eq!(first.mesh(), second.mesh());
        assert_eq!(first.balls().len(), 6);
    }

    #[test]
    fn test_tick_moves_balls_and_keeps_them_near_domain() {
        let mut simulation = MetaballSimulation::new(&seeded_params()).unwrap();
        let before: Vec<Vec2> = simulation.balls().iter().map(|b| b.position()).collect();
        simulation.tick(0.1);
        let after: Vec<Vec2> = simulation.balls().iter().map(|b| b.position()).collect();
        assert_ne!(before, after);

        for _ in 0..500 {
            simulation.tick(1.0 / 30.0);
        }
        assert_eq!(simulation.ticks(), 501);
        let area = domain().scale(1.2);
        assert!(simulation
            .balls()
            .iter()
            .all(|b| area.contains_point(b.position())));
    }

    #[test]
    fn test_needs_rebuild_only_for_structural_changes() {
        let params = seeded_params();
        let simulation = MetaballSimulation::new(&params).unwrap();
        assert!(!simulation.needs_rebuild(&params));

        let live = SimulationParameters {
            smooth: true,
            obstacle_enabled: true,
            ..params.clone()
        };
        assert!(!simulation.needs_rebuild(&live));

        let more_balls = SimulationParameters {
            ball_count: 7,
            ..params.clone()
        };
        assert!(simulation.needs_rebuild(&more_balls));

        let finer = SimulationParameters {
            resolution: 60,
            ..params.clone()
        };
        assert!(simulation.needs_rebuild(&finer));

        // Ohne gespeicherte Konfiguration wird immer neu gebaut
        assert!(single_ball(1.0).needs_rebuild(&params));
    }

    #[test]
    fn test_obstacle_adds_filled_area() {
        let mut simulation = single_ball(0.5);
        let without = samples_inside(simulation.grid());
        let obstacle = RectangleObstacle::new(Vec2::new(3.0, 3.0), Vec2::new(2.0, 1.0)).unwrap();
        simulation.set_obstacle(Some(obstacle));
        simulation.refresh_and_rebuild();
        assert!(samples_inside(simulation.grid()) > without);
        assert!(simulation.obstacle().is_some());
    }

    #[test]
    fn test_apply_live_parameters() {
        let params = seeded_params();
        let mut simulation = MetaballSimulation::new(&params).unwrap();
        let rough = simulation.mesh().clone();

        let live = SimulationParameters {
            smooth: true,
            ..params
        };
        simulation.apply_live_parameters(&live).unwrap();
        simulation.refresh_and_rebuild();
        assert!(simulation.smooth());
        assert_eq!(simulation.mesh().used_vertex_count(), rough.used_vertex_count());
        assert_ne!(simulation.mesh(), &rough);

        // Ohne Bewegung ergibt sich wieder exakt das ungeglättete Netz
        simulation.set_smooth(false);
        simulation.refresh_and_rebuild();
        assert_eq!(simulation.mesh(), &rough);
    }
}
