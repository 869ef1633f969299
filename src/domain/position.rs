//! Starting positions on a bounded integer grid.

use thiserror::Error;

use super::{Coordinate, PositionSelector};

/// Inclusive integer range applied to every axis of the grid.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GridBounds {
    min: i32,
    max: i32,
}

impl GridBounds {
    pub const DEFAULT: GridBounds = GridBounds::new(-4, 4);

    pub const fn new(min: i32, max: i32) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// Number of points along one axis.
    pub fn span(&self) -> u64 {
        (i64::from(self.max) - i64::from(self.min) + 1) as u64
    }

    /// Number of grid points, or `None` when it does not fit in a `u64`.
    pub fn point_count(&self) -> Option<u64> {
        self.span().checked_pow(3)
    }

    pub fn contains(&self, position: Coordinate) -> bool {
        position.triplet().iter().all(|v| {
            v.fract() == 0.0 && *v >= self.min as f64 && *v <= self.max as f64
        })
    }

    /// Point with the given index, points being ordered by x, then y, then z.
    pub fn point_at(&self, index: u64) -> Option<Coordinate> {
        if index >= self.point_count()? {
            return None;
        }
        let span = self.span();
        let offset = |steps: u64| (i64::from(self.min) + steps as i64) as f64;
        Some(Coordinate::new(
            offset(index / (span * span)),
            offset(index / span % span),
            offset(index % span),
        ))
    }

    /// Inverse of [`GridBounds::point_at`]; `None` for positions off the grid.
    pub fn index_of(&self, position: Coordinate) -> Option<u64> {
        self.point_count()?;
        if !self.contains(position) {
            return None;
        }
        let span = self.span();
        let steps = |v: f64| (v as i64 - i64::from(self.min)) as u64;
        Some(steps(position.x()) * span * span + steps(position.y()) * span + steps(position.z()))
    }
}

impl Default for GridBounds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Clone)]
pub struct PositionGenerator {
    selector: PositionSelector,
}

impl PositionGenerator {
    pub fn new(selector: PositionSelector) -> Self {
        Self { selector }
    }

    pub fn selector(&self) -> &PositionSelector {
        &self.selector
    }

    /// Asks the selector for a position and rejects it if it is forbidden.
    pub fn generate_position(&self, forbidden: &[Coordinate]) -> Result<Coordinate, PositionError> {
        let position = (self.selector)(forbidden).ok_or(PositionError::GridExhausted)?;

        if forbidden.contains(&position) {
            return Err(PositionError::ForbiddenPositionSelected(position));
        }

        log::debug!("generated position {position}");

        Ok(position)
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum PositionError {
    #[error("selected position {0} was in the forbidden list")]
    ForbiddenPositionSelected(Coordinate),
    #[error("no position left to select")]
    GridExhausted,
}
