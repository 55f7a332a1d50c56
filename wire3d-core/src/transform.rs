/// 3x3 transformation matrices and rotation state
use nalgebra::Matrix3;

use crate::error::OrientationError;
use crate::geometry::Vertex;

/// A 3x3 linear transform.
///
/// Vertices are treated as row vectors, so applying `m` to `v` computes
/// `v * m`. Composition with [`Matrix::multiply`] therefore applies the
/// left operand first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix(Matrix3<f64>);

impl Matrix {
    pub fn identity() -> Self {
        Self(Matrix3::identity())
    }

    pub fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        let [r0, r1, r2] = rows;
        Self(Matrix3::new(
            r0[0], r0[1], r0[2], //
            r1[0], r1[1], r1[2], //
            r2[0], r2[1], r2[2],
        ))
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.0[(row, col)]
    }

    /// Standard matrix product `self * other`
    pub fn multiply(&self, other: &Matrix) -> Matrix {
        Matrix(self.0 * other.0)
    }

    /// Apply the transform to a row vector: `v' = v * self`
    pub fn transform(&self, v: &Vertex) -> Vertex {
        Vertex::from(self.0.tr_mul(&v.to_vector()))
    }

    pub fn transpose(&self) -> Matrix {
        Matrix(self.0.transpose())
    }

    /// Element-wise comparison within `epsilon`
    pub fn approx_eq(&self, other: &Matrix, epsilon: f64) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::identity()
    }
}

/// Rotation about the vertical (Y) axis
pub fn heading_matrix(heading: f64) -> Matrix {
    let (sin, cos) = heading.sin_cos();
    Matrix::from_rows([
        [cos, 0.0, -sin], //
        [0.0, 1.0, 0.0],
        [sin, 0.0, cos],
    ])
}

/// Rotation about the horizontal (X) axis
pub fn pitch_matrix(pitch: f64) -> Matrix {
    let (sin, cos) = pitch.sin_cos();
    Matrix::from_rows([
        [1.0, 0.0, 0.0], //
        [0.0, cos, sin],
        [0.0, -sin, cos],
    ])
}

/// Combined rotation: heading first, then pitch. Angles in radians.
pub fn rotation_matrix(heading: f64, pitch: f64) -> Matrix {
    heading_matrix(heading).multiply(&pitch_matrix(pitch))
}

pub const HEADING_RANGE: (i32, i32) = (0, 360);
pub const PITCH_RANGE: (i32, i32) = (-90, 90);

/// Viewing angles in whole degrees
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Orientation {
    pub heading: i32,
    pub pitch: i32,
}

impl Orientation {
    /// Unchecked; out-of-range angles still produce a valid rotation.
    pub const fn new(heading: i32, pitch: i32) -> Self {
        Self { heading, pitch }
    }

    pub fn try_new(heading: i32, pitch: i32) -> Result<Self, OrientationError> {
        if !(HEADING_RANGE.0..=HEADING_RANGE.1).contains(&heading) {
            return Err(OrientationError::HeadingOutOfRange(heading));
        }
        if !(PITCH_RANGE.0..=PITCH_RANGE.1).contains(&pitch) {
            return Err(OrientationError::PitchOutOfRange(pitch));
        }
        Ok(Self { heading, pitch })
    }

    /// Step the heading, clamped to its range like a slider
    pub fn with_heading_step(self, delta: i32) -> Self {
        Self {
            heading: self
                .heading
                .saturating_add(delta)
                .clamp(HEADING_RANGE.0, HEADING_RANGE.1),
            ..self
        }
    }

    /// Step the pitch, clamped to its range like a slider
    pub fn with_pitch_step(self, delta: i32) -> Self {
        Self {
            pitch: self
                .pitch
                .saturating_add(delta)
                .clamp(PITCH_RANGE.0, PITCH_RANGE.1),
            ..self
        }
    }

    pub fn rotation(&self) -> Matrix {
        rotation_matrix(
            f64::from(self.heading).to_radians(),
            f64::from(self.pitch).to_radians(),
        )
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::new(135, 45)
    }
}
