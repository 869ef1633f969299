//! The domain module encapsulates the procedural generation of pipes: turn sequences, starting
//! positions, colors and the reconstruction of the trail a pipe walks through space.
//!
//! Every random decision is taken by an injected selection strategy, which keeps the generators
//! deterministic under test and independent of any particular random source.

mod basis;
mod color;
mod direction;
mod generator;
mod path;
mod position;
mod rotation;
mod selector;

pub use basis::{Angle, Coordinate, Trail};
pub use color::{hsl_to_rgb, ColorGenerator, COLOR_LIGHTNESS, COLOR_SATURATION};
pub use direction::{DirectionError, DirectionSequenceGenerator, DIRECTIONS};
pub use generator::PipeGenerator;
pub use path::{PathError, PathReconstructor, GROWTH_DIRECTION};
pub use position::{GridBounds, PositionError, PositionGenerator};
pub use rotation::{
    axis_to_vector, degrees_to_radians, flatten_matrix, rotation_matrix, Axis, Rotation,
    RotationDirection, RotationError, SpatialRotation,
};
pub use selector::{DirectionSelector, HueSelector, PositionSelector, Selectors};
