//! Generation of turn sequences without immediate doublebacks.

use thiserror::Error;

use super::{Angle, Axis, DirectionSelector, Rotation, RotationDirection};

/// Every direction a pipe can turn towards.
pub const DIRECTIONS: [RotationDirection; 6] = [
    RotationDirection::new(Axis::X, 1),
    RotationDirection::new(Axis::Y, 1),
    RotationDirection::new(Axis::Z, 1),
    RotationDirection::new(Axis::X, -1),
    RotationDirection::new(Axis::Y, -1),
    RotationDirection::new(Axis::Z, -1),
];

#[derive(Clone)]
pub struct DirectionSequenceGenerator {
    selector: DirectionSelector,
    last_direction: Option<RotationDirection>,
}

impl DirectionSequenceGenerator {
    pub fn new(selector: DirectionSelector) -> Self {
        Self {
            selector,
            last_direction: None,
        }
    }

    pub fn selector(&self) -> &DirectionSelector {
        &self.selector
    }

    /// Direction chosen by the last step of the most recent sequence.
    pub fn last_direction(&self) -> Option<RotationDirection> {
        self.last_direction
    }

    /// Generates `count` turns of `angle` each, one per selector call.
    ///
    /// The inverse of the previous direction is never offered to the selector, so consecutive
    /// turns cannot cancel out. Every sequence starts unconstrained.
    pub fn generate_sequence(
        &mut self,
        count: usize,
        angle: Angle,
    ) -> Result<Vec<Rotation>, DirectionError> {
        self.last_direction = None;

        let mut rotations = Vec::with_capacity(count);
        for _ in 0..count {
            let candidates = self.candidates();
            let direction = (self.selector)(candidates.as_slice());

            // The full pool catches malformed directions, the candidates catch a withheld inverse.
            if !DIRECTIONS.contains(&direction) || !candidates.contains(&direction) {
                return Err(DirectionError::InvalidSelection(direction));
            }

            self.last_direction = Some(direction);
            rotations.push(Rotation::new(
                direction.axis,
                Angle::from_deg(direction.polarity as f64 * angle.to_deg()),
            ));
        }

        log::debug!(
            "generated {} turns: {}",
            rotations.len(),
            rotations
                .iter()
                .map(|r| format!("{}{:+}", r.axis, r.angle.to_deg()))
                .collect::<Vec<_>>()
                .join(" ")
        );

        Ok(rotations)
    }

    fn candidates(&self) -> Vec<RotationDirection> {
        let forbidden = self.last_direction.map(|d| d.inverse());
        DIRECTIONS
            .iter()
            .filter(|d| Some(**d) != forbidden)
            .copied()
            .collect()
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum DirectionError {
    #[error("invalid direction {0:?} returned from direction selector")]
    InvalidSelection(RotationDirection),
}
