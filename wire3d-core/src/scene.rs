/// The fixed scene: four colored triangles forming a tetrahedron
use crate::geometry::{Color, Triangle, Vertex, BLUE, GREEN, RED, WHITE};

const A: Vertex = Vertex::new(100.0, 100.0, 100.0);
const B: Vertex = Vertex::new(-100.0, -100.0, 100.0);
const C: Vertex = Vertex::new(-100.0, 100.0, -100.0);
const D: Vertex = Vertex::new(100.0, -100.0, -100.0);

/// Faces in draw order. Later faces overdraw earlier ones.
const TETRAHEDRON: [Triangle; 4] = [
    Triangle::new(A, B, C, WHITE),
    Triangle::new(A, B, D, RED),
    Triangle::new(C, D, A, GREEN),
    Triangle::new(C, D, B, BLUE),
];

/// An immutable, ordered set of triangles
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    triangles: [Triangle; 4],
}

impl Scene {
    pub const fn tetrahedron() -> Self {
        Self {
            triangles: TETRAHEDRON,
        }
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.triangles.iter().map(|t| t.color)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::tetrahedron()
    }
}
