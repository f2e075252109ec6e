//! Core/common math functions for working with 2D vectors, offset lines, and arc stepping.
mod base_math;
mod vector2;

pub use base_math::*;
pub use vector2::{vec2, Vector2};
