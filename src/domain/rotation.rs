//! Quarter-turn rotations about the principal axes and their matrix form.

use std::{f64::consts::PI, fmt, slice::Iter, str::FromStr};

use nalgebra::Matrix3;
use thiserror::Error;

use super::{Angle, Coordinate};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn iter() -> Iter<'static, Axis> {
        static AXES: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
        AXES.iter()
    }

    /// Numeric tag used when the axis is handed to a shader.
    pub fn tag(self) -> u8 {
        match self {
            Axis::X => 1,
            Axis::Y => 2,
            Axis::Z => 3,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}

impl TryFrom<u8> for Axis {
    type Error = RotationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Axis::X),
            2 => Ok(Axis::Y),
            3 => Ok(Axis::Z),
            _ => Err(RotationError::InvalidAxis(value.to_string())),
        }
    }
}

impl FromStr for Axis {
    type Err = RotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" | "X" => Ok(Axis::X),
            "y" | "Y" => Ok(Axis::Y),
            "z" | "Z" => Ok(Axis::Z),
            _ => Err(RotationError::InvalidAxis(s.to_string())),
        }
    }
}

/// Only principal unit vectors map back to an axis.
impl TryFrom<Coordinate> for Axis {
    type Error = RotationError;

    fn try_from(value: Coordinate) -> Result<Self, Self::Error> {
        Axis::iter()
            .find(|axis| axis_to_vector(**axis) == value)
            .copied()
            .ok_or_else(|| RotationError::InvalidAxis(value.serialize()))
    }
}

/// The choice made before an angle is applied: an axis and a polarity of ±1.
///
/// Polarity is deliberately an integer so that malformed selections can be represented and
/// rejected.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct RotationDirection {
    pub axis: Axis,
    pub polarity: i32,
}

impl RotationDirection {
    pub const fn new(axis: Axis, polarity: i32) -> Self {
        Self { axis, polarity }
    }

    /// Same axis, opposite polarity.
    pub fn inverse(&self) -> Self {
        Self {
            axis: self.axis,
            polarity: -self.polarity,
        }
    }
}

/// A rotation about a principal axis by a signed angle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotation {
    pub axis: Axis,
    pub angle: Angle,
}

impl Rotation {
    pub const fn new(axis: Axis, angle: Angle) -> Self {
        Self { axis, angle }
    }

    pub fn matrix(&self) -> Matrix3<f64> {
        rotation_matrix(self.axis, self.angle)
    }
}

/// A rotation whose axis is given as a vector, decoupled from [`Axis`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpatialRotation {
    pub axis: Coordinate,
    pub angle: Angle,
}

impl SpatialRotation {
    pub const fn new(axis: Coordinate, angle: Angle) -> Self {
        Self { axis, angle }
    }
}

impl From<Rotation> for SpatialRotation {
    fn from(value: Rotation) -> Self {
        Self {
            axis: axis_to_vector(value.axis),
            angle: value.angle,
        }
    }
}

impl TryFrom<SpatialRotation> for Rotation {
    type Error = RotationError;

    fn try_from(value: SpatialRotation) -> Result<Self, Self::Error> {
        Ok(Self {
            axis: value.axis.try_into()?,
            angle: value.angle,
        })
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum RotationError {
    #[error("invalid axis {0}")]
    InvalidAxis(String),
}

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

pub fn axis_to_vector(axis: Axis) -> Coordinate {
    match axis {
        Axis::X => Coordinate::new(1.0, 0.0, 0.0),
        Axis::Y => Coordinate::new(0.0, 1.0, 0.0),
        Axis::Z => Coordinate::new(0.0, 0.0, 1.0),
    }
}

/// Right-handed rotation matrix about `axis`.
#[rustfmt::skip]
pub fn rotation_matrix(axis: Axis, angle: Angle) -> Matrix3<f64> {
    let (sin, cos) = angle.to_rad().sin_cos();
    match axis {
        Axis::X => Matrix3::new(
            1.0, 0.0, 0.0,
            0.0, cos, -sin,
            0.0, sin, cos,
        ),
        Axis::Y => Matrix3::new(
            cos, 0.0, sin,
            0.0, 1.0, 0.0,
            -sin, 0.0, cos,
        ),
        Axis::Z => Matrix3::new(
            cos, -sin, 0.0,
            sin, cos, 0.0,
            0.0, 0.0, 1.0,
        ),
    }
}

/// Row-major flattening, as consumed by shader uniforms.
pub fn flatten_matrix(matrix: &Matrix3<f64>) -> [f32; 9] {
    let mut flat = [0.0; 9];
    for (i, row) in matrix.row_iter().enumerate() {
        for (j, value) in row.iter().enumerate() {
            flat[i * 3 + j] = *value as f32;
        }
    }
    flat
}
