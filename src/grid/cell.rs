//! Location of trajectory samples within the model grid.

use super::{
    altitude::find_altitude_bracket, boundary::BoundaryOverrides, fgr, find_lower_node,
    model::ModelGrid, search_idx_of_coord, BracketQuery,
};
use crate::{
    error::{InterpolationError, InterpolationResult},
    geometry::{Idx3, In3D},
    trajectory::TrajectoryPoint,
};

/// The grid cell containing a trajectory sample, together with the position of
/// the sample within the cell.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryCell {
    /// Index of the grid time used for the sample.
    pub time_idx: usize,
    /// Lower (level, latitude, longitude) node indices of the bracketing cell.
    pub indices: Idx3,
    /// Fractional position (dx, dy, dz) of the sample along the (level, latitude,
    /// longitude) edges of the cell. Not clamped to [0, 1].
    pub fractions: In3D<fgr>,
}

impl QueryCell {
    /// Returns the node index of the given cell corner.
    pub fn corner(&self, corner: usize) -> Idx3 {
        self.indices.corner(corner)
    }
}

/// Finds the cell bracketing the given trajectory sample.
///
/// The time index is the grid time at or before the sample time. Latitude and
/// longitude brackets are pinned near the poles and the date line according to
/// `overrides`, otherwise found by bracket search. The level bracket is found in
/// the altitude column at the resulting time, latitude and longitude indices.
///
/// # Returns
///
/// A `InterpolationResult` which is either:
///
/// - `Ok`: Contains the bracketing cell and fractional coordinates.
/// - `Err`: The sample is non-finite, lies outside the grid, or its column is degenerate.
pub fn locate_query_cell(
    grid: &ModelGrid,
    point: &TrajectoryPoint,
    overrides: &BoundaryOverrides,
) -> InterpolationResult<QueryCell> {
    if !point.is_finite() {
        return Err(InterpolationError::invalid_input(format!(
            "non-finite trajectory sample {:?}",
            point
        )));
    }

    let time_idx = match find_lower_node(grid.times(), point.time) {
        BracketQuery::Inside(idx) => idx,
        _ => {
            return Err(out_of_range_error("time", point.time, grid.times()));
        }
    };

    let lats = grid.lats();
    let lat_idx = match overrides.override_lat_idx(point.lat, lats.len()) {
        Some(idx) => idx,
        None => search_idx_of_coord(lats, point.lat)
            .inside()
            .ok_or_else(|| out_of_range_error("latitude", point.lat, lats))?,
    };

    let lons = grid.lons();
    let lon_idx = match overrides.override_lon_idx(point.lon, lons.len()) {
        Some(idx) => idx,
        None => search_idx_of_coord(lons, point.lon)
            .inside()
            .ok_or_else(|| out_of_range_error("longitude", point.lon, lons))?,
    };

    let (level_idx, column) = find_altitude_bracket(grid, time_idx, lat_idx, lon_idx, point.alt)?;

    let dx = (point.alt - column[level_idx]) / (column[level_idx + 1] - column[level_idx]);
    let dy = (point.lat - lats[lat_idx]) / grid.lat_spacing();
    let dz = fgr::abs((point.lon - lons[lon_idx]) / grid.lon_spacing());

    Ok(QueryCell {
        time_idx,
        indices: Idx3::new(level_idx, lat_idx, lon_idx),
        fractions: In3D::new(dx, dy, dz),
    })
}

fn out_of_range_error(name: &str, coord: fgr, coords: &[fgr]) -> InterpolationError {
    InterpolationError::out_of_range(format!(
        "{} {} outside grid range [{}, {}]",
        name,
        coord,
        coords[0],
        coords[coords.len() - 1]
    ))
}

impl ModelGrid {
    /// Finds the cell bracketing the given trajectory sample.
    /// See `locate_query_cell`.
    pub fn locate(
        &self,
        point: &TrajectoryPoint,
        overrides: &BoundaryOverrides,
    ) -> InterpolationResult<QueryCell> {
        locate_query_cell(self, point, overrides)
    }
}
