//! Command line interface.

pub mod interpolation;
pub mod sample_orbit;
pub mod utils;
