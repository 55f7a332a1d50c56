/// Perspective projection from view space to screen space
use crate::geometry::Vertex;

/// A 2D point in device space, y pointing down
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Perspective projector configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    /// Distance from the eye to the projection plane
    pub distance: f64,
    pub scale: f64,
}

impl Projector {
    pub const DEFAULT_DISTANCE: f64 = 300.0;

    pub fn new(distance: f64, scale: f64) -> Self {
        Self { distance, scale }
    }

    /// Project a view-space vertex to the screen.
    ///
    /// A vertex on the eye plane (`z == -distance`) divides by zero and
    /// yields non-finite coordinates; callers drawing the result must
    /// tolerate them.
    pub fn project(&self, v: &Vertex) -> ScreenPoint {
        let d = self.distance;
        let x = v.x * d / (v.z + d);
        let y = v.y * d / (v.z + d);
        ScreenPoint {
            x: x * self.scale,
            y: -(y * self.scale),
        }
    }
}

impl Default for Projector {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DISTANCE, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_z0_flips_y_only() {
        let v = Vertex::new(37.5, -12.25, 0.0);
        for d in [1.0, 300.0, 12345.0] {
            let p = Projector::new(d, 1.0).project(&v);
            assert_eq!(p, ScreenPoint { x: 37.5, y: 12.25 });
        }
    }

    #[test]
    fn test_depth_shrinks_far_points() {
        let projector = Projector::default();
        let near = projector.project(&Vertex::new(100.0, 100.0, -100.0));
        let far = projector.project(&Vertex::new(100.0, 100.0, 100.0));
        assert!((near.x - 150.0).abs() < 1e-9);
        assert!((near.y + 150.0).abs() < 1e-9);
        assert!((far.x - 75.0).abs() < 1e-9);
        assert!((far.y + 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_scale_multiplies_result() {
        let v = Vertex::new(10.0, 20.0, 0.0);
        let p = Projector::new(300.0, 2.0).project(&v);
        assert_eq!(p, ScreenPoint { x: 20.0, y: -40.0 });
    }

    #[test]
    fn test_eye_plane_is_not_finite() {
        let projector = Projector::default();
        let p = projector.project(&Vertex::new(1.0, 1.0, -300.0));
        assert!(!p.is_finite());
        assert!(p.x.is_infinite());

        let p = projector.project(&Vertex::new(0.0, 0.0, -300.0));
        assert!(p.x.is_nan() && p.y.is_nan());
    }
}
