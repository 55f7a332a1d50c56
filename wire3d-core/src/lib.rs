//! Wire3D Core Library - Wireframe geometry pipeline
//!
//! This library provides the stateless core of the wireframe viewer:
//! rotation matrices built from heading and pitch, perspective projection,
//! the fixed tetrahedron scene, and a renderer that strokes it onto any
//! [`DrawSurface`].

pub mod error;
pub mod geometry;
pub mod projection;
pub mod render;
pub mod scene;
pub mod surface;
pub mod transform;

// Re-export commonly used types
pub use error::OrientationError;
pub use geometry::{Color, Triangle, Vertex, BLACK, BLUE, GREEN, RED, WHITE};
pub use projection::{Projector, ScreenPoint};
pub use render::{render, Renderer, ScreenTriangle};
pub use scene::Scene;
pub use surface::{DrawCommand, DrawSurface, RecordingSurface};
pub use transform::{Matrix, Orientation};
