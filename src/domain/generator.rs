//! A pipe generator bundles the direction, position and color generators built from one set of
//! selection strategies.

use super::{
    Angle, ColorGenerator, Coordinate, DirectionError, DirectionSequenceGenerator, PositionError,
    PositionGenerator, Rotation, Selectors,
};

/// Cloning a generator copies its strategy references, so the copy drives the same selectors.
#[derive(Clone)]
pub struct PipeGenerator {
    directions: DirectionSequenceGenerator,
    positions: PositionGenerator,
    colors: ColorGenerator,
}

impl PipeGenerator {
    pub fn new(selectors: Selectors) -> Self {
        Self {
            directions: DirectionSequenceGenerator::new(selectors.direction),
            positions: PositionGenerator::new(selectors.position),
            colors: ColorGenerator::new(selectors.hue),
        }
    }

    pub fn with_saturation_and_lightness(self, saturation: f64, lightness: f64) -> Self {
        Self {
            colors: self
                .colors
                .with_saturation_and_lightness(saturation, lightness),
            ..self
        }
    }

    /// The strategies currently in use.
    pub fn selectors(&self) -> Selectors {
        Selectors {
            direction: self.directions.selector().clone(),
            hue: self.colors.selector().clone(),
            position: self.positions.selector().clone(),
        }
    }

    pub fn generate_pipe_directions(
        &mut self,
        count: usize,
        angle: Angle,
    ) -> Result<Vec<Rotation>, DirectionError> {
        self.directions.generate_sequence(count, angle)
    }

    pub fn generate_position(&self, forbidden: &[Coordinate]) -> Result<Coordinate, PositionError> {
        self.positions.generate_position(forbidden)
    }

    pub fn generate_color(&self) -> Coordinate {
        self.colors.generate_color()
    }
}

impl Default for PipeGenerator {
    fn default() -> Self {
        Self::new(Selectors::default())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::{GridBounds, RotationDirection};

    #[test]
    fn test_copy_preserves_selectors() {
        let direction_calls = Arc::new(AtomicUsize::new(0));
        let hue_calls = Arc::new(AtomicUsize::new(0));
        let position_calls = Arc::new(AtomicUsize::new(0));

        let (d, h, p) = (
            direction_calls.clone(),
            hue_calls.clone(),
            position_calls.clone(),
        );
        let mut generator = PipeGenerator::new(
            Selectors::default()
                .with_direction(move |directions: &[RotationDirection]| {
                    d.fetch_add(1, Ordering::Relaxed);
                    directions[0]
                })
                .with_hue(move || {
                    h.fetch_add(1, Ordering::Relaxed);
                    56.0
                })
                .with_position(move |_: &[Coordinate]| {
                    p.fetch_add(1, Ordering::Relaxed);
                    Some(Coordinate::new(1.0, 2.0, 3.0))
                }),
        );
        let mut copy = generator.clone();

        for g in [&mut generator, &mut copy] {
            g.generate_pipe_directions(1, Angle::from_deg(90.0)).unwrap();
            g.generate_color();
            g.generate_position(&[]).unwrap();
        }

        assert_eq!(direction_calls.load(Ordering::Relaxed), 2);
        assert_eq!(hue_calls.load(Ordering::Relaxed), 2);
        assert_eq!(position_calls.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn test_rebuilt_from_selectors() {
        let generator = PipeGenerator::new(Selectors::default().with_hue(|| 120.0));
        let rebuilt = PipeGenerator::new(generator.selectors());
        assert_eq!(rebuilt.generate_color(), generator.generate_color());
    }

    #[test]
    fn test_seeded_generators_agree() {
        let mut a = PipeGenerator::new(Selectors::seeded(99, GridBounds::DEFAULT));
        let mut b = PipeGenerator::new(Selectors::seeded(99, GridBounds::DEFAULT));
        assert_eq!(
            a.generate_pipe_directions(16, Angle::from_deg(90.0)),
            b.generate_pipe_directions(16, Angle::from_deg(90.0))
        );
        assert_eq!(a.generate_position(&[]), b.generate_position(&[]));
        assert_eq!(a.generate_color(), b.generate_color());
    }

    #[test]
    fn test_saturation_and_lightness_override() {
        let generator = PipeGenerator::new(Selectors::default().with_hue(|| 0.0))
            .with_saturation_and_lightness(0.0, 100.0);
        assert_eq!(generator.generate_color(), Coordinate::new(1.0, 1.0, 1.0));
    }
}
