//! Basic building blocks.

use std::{
    f64::consts::PI,
    fmt,
    ops::{Add, Neg},
    slice::Iter,
};

use nalgebra::{Matrix3, Vector3};

const ROUNDING_FACTOR: f64 = 1000.0;

/// Immutable point or direction in 3D space. All operations return new instances.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Coordinate {
    x: f64,
    y: f64,
    z: f64,
}

impl Coordinate {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    pub fn triplet(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Returns `m · self`.
    pub fn multiply_by_matrix(&self, matrix: &Matrix3<f64>) -> Coordinate {
        (matrix * Vector3::from(*self)).into()
    }

    pub fn magnitude(&self) -> f64 {
        (self.x.powi(2) + self.y.powi(2) + self.z.powi(2)).sqrt()
    }

    /// Stretches the vector along its own direction so that its magnitude grows by `delta`.
    ///
    /// The zero vector has no direction and is returned unchanged.
    pub fn scale_to_distance(&self, delta: f64) -> Coordinate {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return *self;
        }

        let factor = (magnitude + delta) / magnitude;
        Coordinate::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Textual array form with every component rounded to three decimals, e.g. `[2,1.001,3]`.
    pub fn serialize(&self) -> String {
        self.to_string()
    }
}

/// Rounds half up (towards positive infinity) to three decimals. Negative zero collapses to zero.
fn round_component(value: f64) -> f64 {
    let scaled = value * ROUNDING_FACTOR;
    let floor = scaled.floor();
    let rounded = if scaled - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    };
    let rounded = rounded / ROUNDING_FACTOR;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{},{},{}]",
            round_component(self.x),
            round_component(self.y),
            round_component(self.z)
        )
    }
}

impl From<Coordinate> for Vector3<f64> {
    fn from(value: Coordinate) -> Self {
        Vector3::new(value.x, value.y, value.z)
    }
}

impl From<Vector3<f64>> for Coordinate {
    fn from(value: Vector3<f64>) -> Self {
        Coordinate::new(value.x, value.y, value.z)
    }
}

impl From<[f64; 3]> for Coordinate {
    fn from(value: [f64; 3]) -> Self {
        Coordinate::new(value[0], value[1], value[2])
    }
}

impl From<Coordinate> for [f32; 3] {
    fn from(value: Coordinate) -> Self {
        [value.x as f32, value.y as f32, value.z as f32]
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

/// Signed angle, stored in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Angle(f64);

impl Angle {
    pub const fn from_deg(degree: f64) -> Self {
        Self(degree)
    }

    pub fn from_rad(radians: f64) -> Self {
        Self(radians * 180.0 / PI)
    }

    pub fn to_deg(self) -> f64 {
        self.0
    }

    pub fn to_rad(self) -> f64 {
        super::degrees_to_radians(self.0)
    }
}

impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Angle(-self.0)
    }
}

/// Polyline of world-space points visited by a pipe. The first point is the start.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trail(Vec<Coordinate>);

impl Trail {
    pub fn new(start: Coordinate) -> Self {
        Self(vec![start])
    }

    pub fn push(&mut self, point: Coordinate) {
        self.0.push(point);
    }

    pub fn points(&self) -> &[Coordinate] {
        &self.0
    }

    pub fn end(&self) -> Option<Coordinate> {
        self.0.last().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Coordinate> {
        self.0.iter()
    }

    /// Differences between consecutive points.
    pub fn steps(&self) -> Vec<Coordinate> {
        self.0
            .windows(2)
            .map(|w| Coordinate::new(w[1].x - w[0].x, w[1].y - w[0].y, w[1].z - w[0].z))
            .collect()
    }
}

impl fmt::Display for Trail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, point) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{point}")?;
        }
        write!(f, "]")
    }
}

impl From<Trail> for Vec<Coordinate> {
    fn from(value: Trail) -> Self {
        value.0
    }
}

impl<'a> IntoIterator for &'a Trail {
    type Item = &'a Coordinate;
    type IntoIter = Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
