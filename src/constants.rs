//! Unit conversion factors and empirical grid constants.

/// Floating-point precision to use for constants.
#[allow(non_camel_case_types)]
pub type fcn = f64;

// Unit conversion

/// Centimeters per kilometer. Model node heights are stored in centimeters.
pub const CM_PER_KM: fcn = 1e5;

// Boundary overrides, half a 5 degree grid cell short of the date line and poles.

/// Longitude [deg] at and beyond which the longitude bracket is pinned.
pub const LON_BOUNDARY_THRESHOLD: fcn = 177.5;
/// Latitude [deg] at and beyond which the latitude bracket is pinned.
pub const LAT_BOUNDARY_THRESHOLD: fcn = 87.5;

// Grid validation

/// Maximum relative deviation of a horizontal grid spacing from the reference spacing.
pub const UNIFORM_SPACING_TOLERANCE: fcn = 1e-6;
