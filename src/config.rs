//! Numeric configuration of a pipe simulation.

use std::{env, str::FromStr};

use crate::domain::{Angle, GridBounds, COLOR_LIGHTNESS, COLOR_SATURATION};

/// Largest number of points per axis accepted from the environment.
pub const MAX_GRID_SPAN: u64 = 1024;

#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub num_pipes: usize,
    pub num_turns: usize,
    pub rotation_angle: Angle,
    pub grid: GridBounds,
    pub saturation: f64,
    pub lightness: f64,
    /// Seed for reproducible scenes. A fresh thread-local source is used without one.
    pub seed: Option<u64>,
}

impl SimulationConfig {
    pub const DEFAULT: SimulationConfig = SimulationConfig::new(
        4,
        32,
        Angle::from_deg(90.0),
        GridBounds::DEFAULT,
        COLOR_SATURATION,
        COLOR_LIGHTNESS,
        None,
    );

    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        num_pipes: usize,
        num_turns: usize,
        rotation_angle: Angle,
        grid: GridBounds,
        saturation: f64,
        lightness: f64,
        seed: Option<u64>,
    ) -> Self {
        SimulationConfig {
            num_pipes,
            num_turns,
            rotation_angle,
            grid,
            saturation,
            lightness,
            seed,
        }
    }

    /// Defaults overridden by `PIPES_COUNT`, `PIPES_TURNS`, `PIPES_ANGLE`, `PIPES_GRID_MIN`,
    /// `PIPES_GRID_MAX` and `PIPES_SEED`. Values that do not parse are logged and ignored, as are
    /// non-finite angles and grids wider than [`MAX_GRID_SPAN`] points per axis.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::DEFAULT;
        let grid_min = parse_or(&lookup, "PIPES_GRID_MIN", default.grid.min());
        let grid_max = parse_or(&lookup, "PIPES_GRID_MAX", default.grid.max());

        let mut grid = GridBounds::new(grid_min, grid_max);
        if grid.span() > MAX_GRID_SPAN {
            log::warn!(
                "ignoring grid [{grid_min}, {grid_max}]: wider than {MAX_GRID_SPAN} points per axis"
            );
            grid = default.grid;
        }

        let mut angle = parse_or(&lookup, "PIPES_ANGLE", default.rotation_angle.to_deg());
        if !angle.is_finite() {
            log::warn!("ignoring PIPES_ANGLE={angle}: not a finite angle");
            angle = default.rotation_angle.to_deg();
        }

        Self {
            num_pipes: parse_or(&lookup, "PIPES_COUNT", default.num_pipes),
            num_turns: parse_or(&lookup, "PIPES_TURNS", default.num_turns),
            rotation_angle: Angle::from_deg(angle),
            grid,
            seed: lookup("PIPES_SEED").and_then(|value| parse(&value, "PIPES_SEED")),
            ..default
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    lookup(key)
        .and_then(|value| parse(&value, key))
        .unwrap_or(default)
}

fn parse<T: FromStr>(value: &str, key: &str) -> Option<T> {
    match value.trim().parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            log::warn!("ignoring {key}={value:?}: not a valid value");
            None
        }
    }
}
