// src/debug/visualization/svg.rs
use crate::math::algorithms::marching_squares::MeshBuffers;
use crate::math::algorithms::metaballs::FieldInfluence;
use crate::math::error::MathResult;
use crate::math::types::Bounds2D;
use crate::physics::sim::simulation::MetaballSimulation;
use bevy::log::info;
use bevy::math::Vec2;
use std::io::Write;

// ===================================================================================
// 1. HILFS-STRUCT für die SVG-Erstellung
// ===================================================================================
/// Ein Helfer zum Erstellen einer SVG-Datei.
///
/// Die y-Achse wird gespiegelt, damit die Weltkoordinaten (y nach oben) korrekt erscheinen.
struct SvgBuilder {
    content: String,
}

impl SvgBuilder {
    /// Erstellt ein neues SVG-Grundgerüst mit Header, Stil und Hintergrund.
    fn new(display_bounds: &Bounds2D, svg_pixel_size: f64) -> Self {
        let viewbox_min_x = display_bounds.min.x as f64;
        let viewbox_min_y = -display_bounds.max.y as f64;
        let viewbox_width = display_bounds.width() as f64;
        let viewbox_height = display_bounds.height() as f64;

        let stroke_w_normal = (viewbox_width + viewbox_height) / 2.0 * 0.004;
        let stroke_w_thin = (viewbox_width + viewbox_height) / 2.0 * 0.001;

        let content = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<svg width="{svg_pixel_size}" height="{svg_pixel_size}" viewBox="{viewbox_min_x} {viewbox_min_y} {viewbox_width} {viewbox_height}" xmlns="http://www.w3.org/2000/svg">
  <style>
    .background {{ fill: #f0f0f0; fill-opacity: 1.0; }}
    .domain {{ fill: none; stroke: #cccccc; stroke-width: {stroke_w_normal}; stroke-dasharray: 0.2,0.2; }}
    .triangle {{ fill: rgba(80, 140, 220, 0.8); stroke: #1f4f8f; stroke-width: {stroke_w_thin}; }}
    .ball {{ fill: none; stroke: #cc0000; stroke-width: {stroke_w_normal}; }}
    .obstacle {{ fill: none; stroke: #00aa00; stroke-width: {stroke_w_normal}; }}
  </style>
  <rect x="{viewbox_min_x}" y="{viewbox_min_y}" width="{viewbox_width}" height="{viewbox_height}" class="background" />
  <g transform="scale(1,-1)">
"#,
        );

        Self { content }
    }

    /// Zeichnet ein Polygon.
    fn draw_polygon(&mut self, vertices: &[Vec2], class: &str) {
        if vertices.len() < 3 {
            return;
        }
        let points_str: String = vertices
            .iter()
            .map(|p| format!("{:.3},{:.3}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");
        self.content.push_str(&format!(
            r#"    <polygon points="{}" class="{}" />
"#,
            points_str, class
        ));
    }

    /// Zeichnet einen Kreis.
    fn draw_circle(&mut self, center: &Vec2, radius: f64, class: &str) {
        self.content.push_str(&format!(
            r#"    <circle cx="{:.3}" cy="{:.3}" r="{:.3}" class="{}" />
"#,
            center.x, center.y, radius, class
        ));
    }

    /// Zeichnet ein Rechteck.
    fn draw_rect(&mut self, bounds: &Bounds2D, class: &str) {
        self.content.push_str(&format!(
            r#"    <rect x="{}" y="{}" width="{}" height="{}" class="{}" />
"#,
            bounds.min.x,
            bounds.min.y,
            bounds.width(),
            bounds.height(),
            class
        ));
    }

    fn finish(mut self) -> String {
        self.content.push_str("  </g>\n</svg>\n");
        self.content
    }
}

/// Zeichnet alle aktiven Dreiecke der Puffer.
fn draw_mesh(svg: &mut SvgBuilder, buffers: &MeshBuffers) {
    for t in 0..buffers.triangle_count() {
        if let Some(triangle) = buffers.triangle(t) {
            let points = triangle.map(|v| v.truncate());
            svg.draw_polygon(&points, "triangle");
        }
    }
}

// ===================================================================================
// 2. ÖFFENTLICHE FUNKTIONEN
// ===================================================================================
/// Rendert Domäne, Netz, Hindernis und Bälle einer Simulation als SVG-Text.
pub fn render_simulation_svg(simulation: &MetaballSimulation, svg_pixel_size: f64) -> String {
    let domain = *simulation.grid().domain();
    let mut svg = SvgBuilder::new(&domain, svg_pixel_size);
    svg.draw_rect(&domain, "domain");

    draw_mesh(&mut svg, simulation.mesh());

    if let Some(rect) = simulation.obstacle().and_then(|o| o.bounding_box()) {
        svg.draw_rect(&rect, "obstacle");
    }
    for ball in simulation.balls() {
        svg.draw_circle(&ball.position(), ball.radius() as f64, "ball");
    }

    svg.finish()
}

/// Schreibt `render_simulation_svg` nach `filename`.
pub fn write_simulation_svg(
    filename: &str,
    simulation: &MetaballSimulation,
    svg_pixel_size: f64,
) -> MathResult<()> {
    let content = render_simulation_svg(simulation, svg_pixel_size);
    let mut file = std::fs::File::create(filename)?;
    file.write_all(content.as_bytes())?;
    info!(
        "Debug SVG '{}' wurde erstellt ({} Dreiecke).",
        filename,
        simulation.mesh().triangle_count()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::algorithms::metaballs::RectangleObstacle;
    use crate::math::error::MathError;
    use crate::physics::sim::metaball::Metaball;

    fn simulation(obstacle: Option<RectangleObstacle>) -> MetaballSimulation {
        let domain =
            Bounds2D::from_min_size(Vec2::new(-5.0, -5.0), Vec2::new(10.0, 10.0)).unwrap();
        let balls = vec![
            Metaball::new(Vec2::new(-1.0, 0.0), 1.0, Vec2::ZERO),
            Metaball::new(Vec2::new(2.0, 1.0), 0.7, Vec2::ZERO),
        ];
        MetaballSimulation::from_balls(domain, 20, balls, obstacle, false).unwrap()
    }

    #[test]
    fn test_svg_contains_one_polygon_per_triangle() {
        let simulation = simulation(None);
        let svg = render_simulation_svg(&simulation, 400.0);
        assert!(svg.starts_with("<?xml"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(
            svg.matches("class=\"triangle\"").count(),
            simulation.mesh().triangle_count()
        );
        assert_eq!(svg.matches("class=\"ball\"").count(), 2);
        assert!(!svg.contains("class=\"obstacle\""));
    }

    #[test]
    fn test_svg_draws_obstacle() {
        let obstacle = RectangleObstacle::new(Vec2::new(3.0, -3.0), Vec2::new(2.0, 1.0)).unwrap();
        let svg = render_simulation_svg(&simulation(Some(obstacle)), 400.0);
        assert!(svg.contains(r#"<rect x="2" y="-3.5" width="2" height="1" class="obstacle" />"#));
    }

    #[test]
    fn test_write_to_missing_directory_fails_with_io_error() {
        let result = write_simulation_svg(
            "/nonexistent-directory/metaballs.svg",
            &simulation(None),
            100.0,
        );
        assert!(matches!(result, Err(MathError::Io(_))));
    }
}
