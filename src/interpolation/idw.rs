//! Inverse distance weighted interpolation between the corners of the bracketing cell.

use super::{fip, Interpolator};
use crate::{
    error::InterpolationResult,
    field::ScalarField4,
    geometry::{
        Dim3::{Phi, Theta, R},
        N_CELL_CORNERS,
    },
    grid::{altitude::node_altitude, cell::QueryCell},
    num::BFloat,
    trajectory::TrajectoryPoint,
};

/// How corners coinciding with the sample are detected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExactMatchCheck {
    /// Every corner is checked for zero distance.
    AllCorners,
    /// Corner 2 is checked in place of corner 3, so a sample coinciding with
    /// corner 3 falls through to the weighted mean and gives a non-finite result.
    /// Kept for comparison against reference outputs.
    Legacy,
}

impl ExactMatchCheck {
    /// Returns the corners whose distances are checked, in checking order.
    pub fn checked_corners(self) -> [usize; N_CELL_CORNERS] {
        match self {
            Self::AllCorners => [0, 1, 2, 3, 4, 5, 6, 7],
            Self::Legacy => [0, 1, 2, 2, 4, 5, 6, 7],
        }
    }
}

/// Configuration parameters for inverse distance weighted interpolation.
#[derive(Clone, Debug)]
pub struct IdwInterpolatorConfig {
    /// Exponent of the distance in the inverse distance weights.
    pub power: fip,
    /// How corners coinciding with the sample are detected.
    pub exact_match_check: ExactMatchCheck,
}

/// A 3D interpolator weighting the cell corners by the inverse of a power of their
/// distance to the sample in (latitude, longitude, altitude) space.
#[derive(Clone, Debug)]
pub struct IdwInterpolator {
    config: IdwInterpolatorConfig,
}

impl IdwInterpolatorConfig {
    pub const DEFAULT_POWER: fip = 2.0;
    pub const DEFAULT_EXACT_MATCH_CHECK: ExactMatchCheck = ExactMatchCheck::AllCorners;

    /// Panics if any of the configuration parameter values are invalid.
    pub fn validate(&self) {
        assert!(
            self.power.is_finite() && self.power > 0.0,
            "Power must be a positive number."
        );
    }
}

impl Default for IdwInterpolatorConfig {
    fn default() -> Self {
        IdwInterpolatorConfig {
            power: Self::DEFAULT_POWER,
            exact_match_check: Self::DEFAULT_EXACT_MATCH_CHECK,
        }
    }
}

impl IdwInterpolator {
    /// Creates a new inverse distance weighted interpolator with the given configuration.
    pub fn new(config: IdwInterpolatorConfig) -> Self {
        config.validate();
        IdwInterpolator { config }
    }

    /// Returns a reference to the configuration of the interpolator.
    pub fn config(&self) -> &IdwInterpolatorConfig {
        &self.config
    }
}

impl Default for IdwInterpolator {
    fn default() -> Self {
        Self::new(IdwInterpolatorConfig::default())
    }
}

/// Computes the distance between the sample and each corner of the cell, in
/// degrees along latitude and longitude and kilometres along altitude. The
/// altitude of a corner is taken from its own column.
pub fn corner_distances<F: BFloat>(
    field: &ScalarField4<F>,
    point: &TrajectoryPoint,
    cell: &QueryCell,
) -> [fip; N_CELL_CORNERS] {
    let grid = field.grid();
    let mut distances = [0.0; N_CELL_CORNERS];
    for (corner, distance) in distances.iter_mut().enumerate() {
        let node = cell.corner(corner);
        let lat_diff = point.lat - grid.lats()[node[Theta]];
        let lon_diff = point.lon - grid.lons()[node[Phi]];
        let alt_diff =
            point.alt - node_altitude(grid, cell.time_idx, node[R], node[Theta], node[Phi]);
        *distance = fip::sqrt(lat_diff * lat_diff + lon_diff * lon_diff + alt_diff * alt_diff);
    }
    distances
}

impl Interpolator for IdwInterpolator {
    fn interp_known_cell<F>(
        &self,
        field: &ScalarField4<F>,
        point: &TrajectoryPoint,
        cell: &QueryCell,
    ) -> InterpolationResult<fip>
    where
        F: BFloat,
    {
        let distances = corner_distances(field, point, cell);

        if let Some(&corner) = self
            .config
            .exact_match_check
            .checked_corners()
            .iter()
            .find(|&&corner| distances[corner] == 0.0)
        {
            return Ok(field.value(cell.time_idx, &cell.corner(corner)));
        }

        let mut weighted_sum = 0.0;
        let mut total_weight = 0.0;
        for (corner, &distance) in distances.iter().enumerate() {
            let weight = 1.0 / fip::powf(distance, self.config.power);
            weighted_sum += weight * field.value(cell.time_idx, &cell.corner(corner));
            total_weight += weight;
        }
        Ok(weighted_sum / total_weight)
    }
}
