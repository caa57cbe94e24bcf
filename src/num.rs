//! Utilities related to numbers.

use num;
use std::fmt;

/// Floating point marker trait for easier control over trait bounds.
pub trait BFloat:
    Sync + Send + num::Float + num::cast::FromPrimitive + Into<f64> + fmt::Debug
{
}

impl BFloat for f32 {}
impl BFloat for f64 {}

/// Whether all the given values are finite.
pub fn all_finite<F: num::Float>(values: &[F]) -> bool {
    values.iter().all(|value| value.is_finite())
}

/// Whether the given values are strictly ascending.
pub fn is_strictly_ascending<F: num::Float>(values: &[F]) -> bool {
    values.windows(2).all(|pair| pair[0] < pair[1])
}
