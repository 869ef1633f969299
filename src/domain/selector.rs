//! Pluggable selection strategies.
//!
//! Every random decision of the generators is delegated to a strategy function. The defaults
//! draw uniformly from either the thread-local generator or an injected, possibly seeded, random
//! source. Custom strategies can be swapped in for tests or deterministic scenes.

use std::sync::{Arc, Mutex, PoisonError};

use rand::{seq::IndexedRandom, Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::{Coordinate, GridBounds, RotationDirection, DIRECTIONS};

/// Picks one direction from the candidates it is handed. The direction generator always hands
/// over at least five candidates.
pub type DirectionSelector = Arc<dyn Fn(&[RotationDirection]) -> RotationDirection + Send + Sync>;

/// Returns a hue in degrees.
pub type HueSelector = Arc<dyn Fn() -> f64 + Send + Sync>;

/// Picks a position that is not in the forbidden list, or `None` if there is none left.
pub type PositionSelector = Arc<dyn Fn(&[Coordinate]) -> Option<Coordinate> + Send + Sync>;

type SharedRng = Arc<Mutex<dyn RngCore + Send>>;

/// The three strategies used by a pipe generator. Cloning copies the strategy references, so a
/// clone keeps calling the very same functions.
#[derive(Clone)]
pub struct Selectors {
    pub direction: DirectionSelector,
    pub hue: HueSelector,
    pub position: PositionSelector,
}

impl Selectors {
    /// Uniform strategies backed by the thread-local random generator.
    pub fn random(bounds: GridBounds) -> Self {
        Self {
            direction: Arc::new(|candidates: &[RotationDirection]| {
                let mut rng = rand::rng();
                pick_direction(&mut rng, candidates)
            }),
            hue: Arc::new(|| rand::rng().random_range(0.0..360.0)),
            position: Arc::new(move |forbidden: &[Coordinate]| {
                let mut rng = rand::rng();
                pick_position(&mut rng, bounds, forbidden)
            }),
        }
    }

    /// Uniform strategies sharing one reproducible random source.
    pub fn seeded(seed: u64, bounds: GridBounds) -> Self {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed), bounds)
    }

    /// Uniform strategies sharing the given random source.
    pub fn from_rng<R: RngCore + Send + 'static>(rng: R, bounds: GridBounds) -> Self {
        let rng: SharedRng = Arc::new(Mutex::new(rng));
        let direction_rng = rng.clone();
        let hue_rng = rng.clone();
        let position_rng = rng;

        Self {
            direction: Arc::new(move |candidates: &[RotationDirection]| {
                with_rng(&direction_rng, |rng| pick_direction(rng, candidates))
            }),
            hue: Arc::new(move || with_rng(&hue_rng, |rng| rng.random_range(0.0..360.0))),
            position: Arc::new(move |forbidden: &[Coordinate]| {
                with_rng(&position_rng, |rng| pick_position(rng, bounds, forbidden))
            }),
        }
    }

    pub fn with_direction<F>(self, selector: F) -> Self
    where
        F: Fn(&[RotationDirection]) -> RotationDirection + Send + Sync + 'static,
    {
        Self {
            direction: Arc::new(selector),
            ..self
        }
    }

    pub fn with_hue<F>(self, selector: F) -> Self
    where
        F: Fn() -> f64 + Send + Sync + 'static,
    {
        Self {
            hue: Arc::new(selector),
            ..self
        }
    }

    pub fn with_position<F>(self, selector: F) -> Self
    where
        F: Fn(&[Coordinate]) -> Option<Coordinate> + Send + Sync + 'static,
    {
        Self {
            position: Arc::new(selector),
            ..self
        }
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self::random(GridBounds::DEFAULT)
    }
}

fn with_rng<T>(rng: &SharedRng, f: impl FnOnce(&mut dyn RngCore) -> T) -> T {
    let mut guard = rng.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut *guard)
}

/// An empty candidate list falls back to the whole direction pool.
fn pick_direction<R: RngCore + ?Sized>(
    rng: &mut R,
    candidates: &[RotationDirection],
) -> RotationDirection {
    let pool = if candidates.is_empty() {
        &DIRECTIONS[..]
    } else {
        candidates
    };
    pool.choose(rng).copied().unwrap_or(DIRECTIONS[0])
}

/// Draws a uniform index among the free grid points and decodes it, without listing the grid.
fn pick_position<R: RngCore + ?Sized>(
    rng: &mut R,
    bounds: GridBounds,
    forbidden: &[Coordinate],
) -> Option<Coordinate> {
    let Some(count) = bounds.point_count() else {
        return Some(pick_sparse_position(rng, bounds, forbidden));
    };

    let mut taken = forbidden
        .iter()
        .filter_map(|p| bounds.index_of(*p))
        .collect::<Vec<_>>();
    taken.sort_unstable();
    taken.dedup();

    let free = count - taken.len() as u64;
    if free == 0 {
        return None;
    }

    // Shift the drawn rank past every taken index at or below it.
    let mut index = rng.random_range(0..free);
    for t in taken {
        if t > index {
            break;
        }
        index += 1;
    }
    bounds.point_at(index)
}

// Grids too large to index dwarf any forbidden list, so redrawing terminates quickly.
fn pick_sparse_position<R: RngCore + ?Sized>(
    rng: &mut R,
    bounds: GridBounds,
    forbidden: &[Coordinate],
) -> Coordinate {
    let range = bounds.min()..=bounds.max();
    loop {
        let position = Coordinate::new(
            rng.random_range(range.clone()) as f64,
            rng.random_range(range.clone()) as f64,
            rng.random_range(range.clone()) as f64,
        );
        if !forbidden.contains(&position) {
            return position;
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::Axis;

    #[test]
    fn test_seeded_selectors_are_reproducible() {
        let a = Selectors::seeded(7, GridBounds::DEFAULT);
        let b = Selectors::seeded(7, GridBounds::DEFAULT);
        for _ in 0..10 {
            assert_eq!((a.hue)(), (b.hue)());
            assert_eq!((a.position)(&[]), (b.position)(&[]));
        }
    }

    #[test]
    fn test_random_direction_is_a_candidate() {
        let selectors = Selectors::default();
        let candidates = [
            RotationDirection::new(Axis::X, 1),
            RotationDirection::new(Axis::Z, -1),
        ];
        for _ in 0..20 {
            assert!(candidates.contains(&(selectors.direction)(&candidates)));
        }
    }

    #[test]
    fn test_random_hue_range() {
        let selectors = Selectors::seeded(3, GridBounds::DEFAULT);
        for _ in 0..100 {
            let hue = (selectors.hue)();
            assert!((0.0..360.0).contains(&hue));
        }
    }

    #[test]
    fn test_random_position_avoids_forbidden() {
        let bounds = GridBounds::new(0, 1);
        let selectors = Selectors::seeded(11, bounds);
        let forbidden = (0..8)
            .filter_map(|i| bounds.point_at(i))
            .filter(|p| *p != Coordinate::new(1.0, 0.0, 1.0))
            .collect::<Vec<_>>();
        assert_eq!(
            (selectors.position)(&forbidden),
            Some(Coordinate::new(1.0, 0.0, 1.0))
        );
    }

    #[test]
    fn test_random_position_exhausted_grid() {
        let bounds = GridBounds::new(0, 0);
        let selectors = Selectors::random(bounds);
        assert_eq!((selectors.position)(&[Coordinate::new(0.0, 0.0, 0.0)]), None);
    }

    #[test]
    fn test_random_direction_without_candidates() {
        let selectors = Selectors::seeded(1, GridBounds::DEFAULT);
        for _ in 0..20 {
            assert!(DIRECTIONS.contains(&(selectors.direction)(&[])));
        }
    }

    #[test]
    fn test_random_position_covers_free_points() {
        let bounds = GridBounds::new(0, 1);
        let selectors = Selectors::seeded(4, bounds);
        let forbidden = [
            Coordinate::new(0.0, 0.0, 0.0),
            Coordinate::new(1.0, 1.0, 1.0),
            Coordinate::new(9.0, 9.0, 9.0),
        ];
        let mut seen = vec![];
        for _ in 0..400 {
            let position = (selectors.position)(&forbidden).unwrap();
            assert!(bounds.contains(position));
            assert!(!forbidden.contains(&position));
            if !seen.contains(&position) {
                seen.push(position);
            }
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_random_position_on_large_grid() {
        let bounds = GridBounds::new(-1_000_000, 1_000_000);
        let selectors = Selectors::seeded(8, bounds);
        let position = (selectors.position)(&[]).unwrap();
        assert!(bounds.contains(position));
    }

    #[test]
    fn test_random_position_on_unindexable_grid() {
        let bounds = GridBounds::new(i32::MIN, i32::MAX);
        assert_eq!(bounds.point_count(), None);
        let selectors = Selectors::seeded(8, bounds);
        let position = (selectors.position)(&[]).unwrap();
        assert!(bounds.contains(position));
    }

    #[test]
    fn test_clone_shares_selectors() {
        let selectors = Selectors::default().with_hue(|| 42.0);
        let copy = selectors.clone();
        assert!(Arc::ptr_eq(&selectors.hue, &copy.hue));
        assert_eq!((copy.hue)(), 42.0);
    }
}
