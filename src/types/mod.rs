//! Shared types used throughout the library.

mod direction;
mod rotation;

pub use direction::{Axis, Direction, DirectionSet};
pub use rotation::AxisRotation;
