//! Circulation model grids with uniform horizontal spacing and
//! terrain-following levels.

use super::fgr;
use crate::{
    constants::UNIFORM_SPACING_TOLERANCE,
    error::{InterpolationError, InterpolationResult},
    geometry::{Dim3, Idx3},
    num::{all_finite, is_strictly_ascending},
};
use ndarray::prelude::*;

/// A 4D (time, level, latitude, longitude) model grid where every node carries
/// its own geometric height.
///
/// Latitudes and longitudes must be uniformly spaced, since fractional cell
/// coordinates are computed from a single spacing per dimension. Heights are
/// stored in centimeters and only need to increase with level within each column.
#[derive(Clone, Debug)]
pub struct ModelGrid {
    times: Vec<fgr>,
    levels: Vec<fgr>,
    lats: Vec<fgr>,
    lons: Vec<fgr>,
    heights: Array4<fgr>,
    lat_spacing: fgr,
    lon_spacing: fgr,
}

impl ModelGrid {
    /// Creates a new model grid from coordinate arrays and node heights.
    ///
    /// # Parameters
    ///
    /// - `times`: Strictly ascending times.
    /// - `levels`: Level indices or pressure surfaces (only their number is used).
    /// - `lats`: Strictly ascending, uniformly spaced latitudes [deg].
    /// - `lons`: Strictly ascending, uniformly spaced longitudes [deg].
    /// - `heights`: Node heights [cm] with shape (time, level, lat, lon).
    ///
    /// # Returns
    ///
    /// A `InterpolationResult` which is either:
    ///
    /// - `Ok`: Contains the new grid.
    /// - `Err`: The coordinates are inconsistent, degenerate or not uniformly spaced.
    pub fn new(
        times: Vec<fgr>,
        levels: Vec<fgr>,
        lats: Vec<fgr>,
        lons: Vec<fgr>,
        heights: Array4<fgr>,
    ) -> InterpolationResult<Self> {
        for (name, coords) in [
            ("time", &times),
            ("level", &levels),
            ("latitude", &lats),
            ("longitude", &lons),
        ] {
            if coords.is_empty() {
                return Err(InterpolationError::invalid_input(format!(
                    "no {} coordinates",
                    name
                )));
            }
            if !all_finite(coords) {
                return Err(InterpolationError::invalid_input(format!(
                    "non-finite {} coordinate",
                    name
                )));
            }
        }

        let expected_shape = [times.len(), levels.len(), lats.len(), lons.len()];
        if heights.shape() != &expected_shape[..] {
            return Err(InterpolationError::invalid_input(format!(
                "height array has shape {:?}, expected {:?}",
                heights.shape(),
                expected_shape
            )));
        }

        if levels.len() < 2 {
            return Err(InterpolationError::degenerate_grid(
                "at least two levels are required",
            ));
        }
        if lats.len() < 3 || lons.len() < 3 {
            return Err(InterpolationError::degenerate_grid(
                "at least three latitudes and longitudes are required",
            ));
        }

        for (name, coords) in [("time", &times), ("latitude", &lats), ("longitude", &lons)] {
            if !is_strictly_ascending(coords) {
                return Err(InterpolationError::degenerate_grid(format!(
                    "{} coordinates are not strictly ascending",
                    name
                )));
            }
        }

        let lat_spacing = Self::verified_uniform_spacing("latitude", &lats)?;
        let lon_spacing = Self::verified_uniform_spacing("longitude", &lons)?;

        Ok(Self {
            times,
            levels,
            lats,
            lons,
            heights,
            lat_spacing,
            lon_spacing,
        })
    }

    /// Reads the spacing from the second and third coordinates and checks that
    /// every other interval matches it.
    fn verified_uniform_spacing(name: &str, coords: &[fgr]) -> InterpolationResult<fgr> {
        let spacing = fgr::abs(coords[2] - coords[1]);
        let tolerance = spacing * UNIFORM_SPACING_TOLERANCE;
        match coords
            .windows(2)
            .position(|pair| fgr::abs((pair[1] - pair[0]) - spacing) > tolerance)
        {
            Some(idx) => Err(InterpolationError::non_uniform_spacing(format!(
                "{} interval {} has extent {} while the grid spacing is {}",
                name,
                idx,
                coords[idx + 1] - coords[idx],
                spacing
            ))),
            None => Ok(spacing),
        }
    }

    /// Returns the number of nodes along each of the (time, level, lat, lon) dimensions.
    pub fn shape(&self) -> [usize; 4] {
        [
            self.times.len(),
            self.levels.len(),
            self.lats.len(),
            self.lons.len(),
        ]
    }

    /// Returns the number of nodes along the given spatial dimension.
    pub fn size(&self, dim: Dim3) -> usize {
        match dim {
            Dim3::R => self.levels.len(),
            Dim3::Theta => self.lats.len(),
            Dim3::Phi => self.lons.len(),
        }
    }

    pub fn times(&self) -> &[fgr] {
        &self.times
    }

    pub fn levels(&self) -> &[fgr] {
        &self.levels
    }

    pub fn lats(&self) -> &[fgr] {
        &self.lats
    }

    pub fn lons(&self) -> &[fgr] {
        &self.lons
    }

    /// Returns the node heights [cm] with shape (time, level, lat, lon).
    pub fn heights(&self) -> &Array4<fgr> {
        &self.heights
    }

    /// Latitude spacing [deg], `|lats[2] - lats[1]|`.
    pub fn lat_spacing(&self) -> fgr {
        self.lat_spacing
    }

    /// Longitude spacing [deg], `|lons[2] - lons[1]|`.
    pub fn lon_spacing(&self) -> fgr {
        self.lon_spacing
    }

    /// Returns the height [cm] of the given node.
    pub fn height(&self, time_idx: usize, node: &Idx3) -> fgr {
        self.heights[[
            time_idx,
            node[Dim3::R],
            node[Dim3::Theta],
            node[Dim3::Phi],
        ]]
    }
}
