/// Geometry primitives for wireframe rendering
use nalgebra::Vector3;
use rgb::RGB8;

/// Opaque RGB color attached to a triangle
pub type Color = RGB8;

pub const BLACK: Color = Color::new(0, 0, 0);
pub const WHITE: Color = Color::new(255, 255, 255);
pub const RED: Color = Color::new(255, 0, 0);
pub const GREEN: Color = Color::new(0, 255, 0);
pub const BLUE: Color = Color::new(0, 0, 255);

/// A point in model space, or in view space once rotated.
///
/// Vertices are plain values: transforming one yields a new vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vertex {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn to_vector(self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }
}

impl From<Vector3<f64>> for Vertex {
    fn from(v: Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vertex> for Vector3<f64> {
    fn from(v: Vertex) -> Self {
        v.to_vector()
    }
}

/// A colored triangle face defined by three vertices
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [Vertex; 3],
    pub color: Color,
}

impl Triangle {
    pub const fn new(v0: Vertex, v1: Vertex, v2: Vertex, color: Color) -> Self {
        Self {
            vertices: [v0, v1, v2],
            color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_vector_conversion() {
        let v = Vertex::new(1.0, -2.0, 3.5);
        let vector: Vector3<f64> = v.into();
        assert_eq!(vector, Vector3::new(1.0, -2.0, 3.5));
        assert_eq!(Vertex::from(vector), v);
    }

    #[test]
    fn test_triangle_keeps_vertex_order() {
        let a = Vertex::new(1.0, 0.0, 0.0);
        let b = Vertex::new(0.0, 1.0, 0.0);
        let c = Vertex::new(0.0, 0.0, 1.0);
        let t = Triangle::new(a, b, c, RED);
        assert_eq!(t.vertices, [a, b, c]);
        assert_eq!(t.color, RED);
    }
}
