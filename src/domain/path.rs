//! Reconstruction of the world-space trail walked by a pipe.
//!
//! A pipe always grows along its own local Y axis. Every rotation turns the pipe's local frame,
//! and the next unit step is the growth direction mapped through the inverse of that frame.
//! Spinning about the local growth axis therefore never displaces the pipe, only turns about
//! the other two axes change the walking direction.

use nalgebra::{Matrix3, Unit, UnitQuaternion, Vector3};
use thiserror::Error;

use super::{Coordinate, SpatialRotation, Trail};

pub const GROWTH_DIRECTION: Coordinate = Coordinate::new(0.0, 1.0, 0.0);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathReconstructor {
    growth_direction: Coordinate,
}

impl PathReconstructor {
    pub fn new() -> Self {
        Self {
            growth_direction: GROWTH_DIRECTION,
        }
    }

    pub fn with_growth_direction(growth_direction: Coordinate) -> Self {
        Self { growth_direction }
    }

    pub fn growth_direction(&self) -> Coordinate {
        self.growth_direction
    }

    /// Walks from `start` through `rotations`, one step per rotation. The returned trail holds
    /// `rotations.len() + 1` points.
    pub fn build_trail(
        &self,
        start: Coordinate,
        rotations: &[SpatialRotation],
    ) -> Result<Trail, PathError> {
        let growth_direction = Vector3::from(self.growth_direction);

        let mut trail = Trail::new(start);
        let mut basis = Matrix3::identity();
        let mut cursor = start;

        for rotation in rotations {
            let axis = Unit::try_new(Vector3::from(rotation.axis), f64::EPSILON)
                .ok_or(PathError::ZeroAxis(rotation.axis))?;
            let quaternion = UnitQuaternion::from_axis_angle(&axis, rotation.angle.to_rad());

            basis = rotate_columns(&basis, &quaternion);
            let inverse_basis = basis.try_inverse().ok_or(PathError::SingularBasis)?;
            let step = Coordinate::from(inverse_basis * growth_direction);

            cursor = cursor + step;
            log::trace!("step {step} to {cursor}");
            trail.push(cursor);
        }

        Ok(trail)
    }
}

impl Default for PathReconstructor {
    fn default() -> Self {
        Self::new()
    }
}

fn rotate_columns(basis: &Matrix3<f64>, quaternion: &UnitQuaternion<f64>) -> Matrix3<f64> {
    let columns = basis
        .column_iter()
        .map(|column| quaternion.transform_vector(&column.into_owned()))
        .collect::<Vec<_>>();
    Matrix3::from_columns(columns.as_slice())
}

#[derive(Error, Debug, PartialEq)]
pub enum PathError {
    #[error("rotation axis {0} has no direction")]
    ZeroAxis(Coordinate),
    #[error("local basis is not invertible")]
    SingularBasis,
}
