//! Pinning of latitude and longitude brackets near the poles and the date line.

use super::fgr;
use crate::constants::{LAT_BOUNDARY_THRESHOLD, LON_BOUNDARY_THRESHOLD};

/// Thresholds beyond which the horizontal bracket indices are overridden
/// instead of taken from the bracket search.
///
/// - `lon >= lon_threshold`: longitude index `n_lon - 2`.
/// - `lon <= -lon_threshold`: longitude index `1`.
/// - `lat >= lat_threshold`: latitude index `n_lat - 2`.
/// - `lat <= -lat_threshold`: latitude index `0`.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundaryOverrides {
    /// Absolute longitude [deg] at which the date line override engages.
    pub lon_threshold: fgr,
    /// Absolute latitude [deg] at which the pole override engages.
    pub lat_threshold: fgr,
}

impl BoundaryOverrides {
    pub const DEFAULT_LON_THRESHOLD: fgr = LON_BOUNDARY_THRESHOLD;
    pub const DEFAULT_LAT_THRESHOLD: fgr = LAT_BOUNDARY_THRESHOLD;

    /// Returns the pinned longitude index for the given longitude, if any.
    pub fn override_lon_idx(&self, lon: fgr, n_lons: usize) -> Option<usize> {
        if lon >= self.lon_threshold {
            Some(n_lons - 2)
        } else if lon <= -self.lon_threshold {
            Some(1)
        } else {
            None
        }
    }

    /// Returns the pinned latitude index for the given latitude, if any.
    pub fn override_lat_idx(&self, lat: fgr, n_lats: usize) -> Option<usize> {
        if lat >= self.lat_threshold {
            Some(n_lats - 2)
        } else if lat <= -self.lat_threshold {
            Some(0)
        } else {
            None
        }
    }
}

impl Default for BoundaryOverrides {
    fn default() -> Self {
        Self {
            lon_threshold: Self::DEFAULT_LON_THRESHOLD,
            lat_threshold: Self::DEFAULT_LAT_THRESHOLD,
        }
    }
}
