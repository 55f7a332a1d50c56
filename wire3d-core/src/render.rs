/// Wireframe renderer: rotate, project and stroke every scene triangle
use crate::geometry::{Color, BLACK};
use crate::projection::{Projector, ScreenPoint};
use crate::scene::Scene;
use crate::surface::DrawSurface;
use crate::transform::Orientation;

/// A scene triangle after projection, ready to stroke
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenTriangle {
    pub points: [ScreenPoint; 3],
    pub color: Color,
}

/// Renderer configuration. Stateless between calls.
#[derive(Debug, Clone)]
pub struct Renderer {
    pub projector: Projector,
    pub scene: Scene,
    pub background: Color,
}

impl Renderer {
    pub fn new(projector: Projector, scene: Scene) -> Self {
        Self {
            projector,
            scene,
            background: BLACK,
        }
    }

    /// Rotate and project every triangle, in scene order.
    ///
    /// Points are relative to the viewport center.
    pub fn project(&self, orientation: Orientation) -> Vec<ScreenTriangle> {
        let rotation = orientation.rotation();
        self.scene
            .triangles()
            .iter()
            .map(|triangle| ScreenTriangle {
                points: triangle
                    .vertices
                    .map(|v| self.projector.project(&rotation.transform(&v))),
                color: triangle.color,
            })
            .collect()
    }

    /// Stroke the scene centered on `surface`.
    ///
    /// The origin shift is undone afterwards so the surface can be reused.
    pub fn render<S: DrawSurface + ?Sized>(&self, orientation: Orientation, surface: &mut S) {
        let (cx, cy) = (surface.width() / 2.0, surface.height() / 2.0);
        surface.translate(cx, cy);

        for ScreenTriangle { points: [a, b, c], color } in self.project(orientation) {
            surface.begin_path();
            surface.move_to(a.x, a.y);
            surface.line_to(b.x, b.y);
            surface.line_to(c.x, c.y);
            surface.close_path();
            surface.set_color(color);
            surface.stroke();
        }

        surface.translate(-cx, -cy);
    }

    /// Full repaint: clear to the background, then render
    pub fn paint<S: DrawSurface + ?Sized>(&self, orientation: Orientation, surface: &mut S) {
        surface.clear(self.background);
        self.render(orientation, surface);
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Projector::default(), Scene::default())
    }
}

/// Render the default scene with the default projector
pub fn render<S: DrawSurface + ?Sized>(heading: i32, pitch: i32, surface: &mut S) {
    Renderer::default().render(Orientation::new(heading, pitch), surface);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{BLUE, GREEN, RED, WHITE};
    use crate::surface::{DrawCommand, RecordingSurface};

    #[test]
    fn test_identity_orientation_projects_raw_vertices() {
        let renderer = Renderer::default();
        let projected = renderer.project(Orientation::new(0, 0));
        for (screen, triangle) in projected.iter().zip(renderer.scene.triangles()) {
            for (p, v) in screen.points.iter().zip(&triangle.vertices) {
                let expected = renderer.projector.project(v);
                assert!((p.x - expected.x).abs() < 1e-9);
                assert!((p.y - expected.y).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_render_emits_closed_path_per_triangle() {
        let mut surface = RecordingSurface::new(600.0, 600.0);
        render(135, 45, &mut surface);

        let commands = surface.commands();
        assert_eq!(commands.first(), Some(&DrawCommand::Translate(300.0, 300.0)));
        assert_eq!(commands.last(), Some(&DrawCommand::Translate(-300.0, -300.0)));

        let body = &commands[1..commands.len() - 1];
        assert_eq!(body.len(), 4 * 7);
        let mut colors = Vec::new();
        for chunk in body.chunks(7) {
            assert!(matches!(
                chunk,
                [
                    DrawCommand::BeginPath,
                    DrawCommand::MoveTo(..),
                    DrawCommand::LineTo(..),
                    DrawCommand::LineTo(..),
                    DrawCommand::ClosePath,
                    DrawCommand::SetColor(_),
                    DrawCommand::Stroke,
                ]
            ));
            if let DrawCommand::SetColor(c) = chunk[5] {
                colors.push(c);
            }
        }
        assert_eq!(colors, vec![WHITE, RED, GREEN, BLUE]);
    }

    #[test]
    fn test_paint_clears_first() {
        let mut renderer = Renderer::default();
        renderer.background = BLUE;
        let mut surface = RecordingSurface::new(100.0, 80.0);
        renderer.paint(Orientation::default(), &mut surface);
        assert_eq!(surface.commands()[0], DrawCommand::Clear(BLUE));
        assert_eq!(surface.commands()[1], DrawCommand::Translate(50.0, 40.0));
        assert_eq!(surface.stroke_count(), 4);
    }

    #[test]
    fn test_origin_independent_of_perspective_distance() {
        let renderer = Renderer::new(Projector::new(500.0, 1.0), Scene::default());
        let mut surface = RecordingSurface::new(200.0, 100.0);
        renderer.render(Orientation::default(), &mut surface);
        assert_eq!(surface.commands()[0], DrawCommand::Translate(100.0, 50.0));
    }
}
