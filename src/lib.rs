//! The `gcm_orbit` crate samples circulation model output along satellite trajectories.

pub mod constants;
pub mod error;
pub mod field;
pub mod geometry;
pub mod grid;
pub mod interpolation;
pub mod num;
pub mod sampling;
pub mod trajectory;
pub mod verbosity;

#[cfg(feature = "cli")]
pub mod cli;
