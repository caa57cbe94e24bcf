//! Bracketing of altitudes within the terrain-following level columns.

use super::{fgr, model::ModelGrid, search_idx_of_coord, BracketQuery};
use crate::{
    constants::CM_PER_KM,
    error::{InterpolationError, InterpolationResult},
    num::is_strictly_ascending,
};
use ndarray::prelude::*;

/// Returns the node altitudes [km] across all levels of the column at the given
/// time, latitude and longitude indices.
pub fn altitude_column(
    grid: &ModelGrid,
    time_idx: usize,
    lat_idx: usize,
    lon_idx: usize,
) -> Array1<fgr> {
    grid.heights()
        .slice(s![time_idx, .., lat_idx, lon_idx])
        .mapv(|height| height / CM_PER_KM)
}

/// Returns the altitude [km] of the node at the given level in the given column.
pub fn node_altitude(
    grid: &ModelGrid,
    time_idx: usize,
    level_idx: usize,
    lat_idx: usize,
    lon_idx: usize,
) -> fgr {
    grid.heights()[[time_idx, level_idx, lat_idx, lon_idx]] / CM_PER_KM
}

/// Finds the level index `r` such that the column altitudes bracket the given
/// altitude [km] between levels `r` and `r + 1`.
///
/// # Returns
///
/// A `InterpolationResult` which is either:
///
/// - `Ok`: Contains the lower level index and the column altitudes [km].
/// - `Err`: The column is not strictly increasing, or the altitude lies outside it.
pub fn find_altitude_bracket(
    grid: &ModelGrid,
    time_idx: usize,
    lat_idx: usize,
    lon_idx: usize,
    alt: fgr,
) -> InterpolationResult<(usize, Array1<fgr>)> {
    let column = altitude_column(grid, time_idx, lat_idx, lon_idx);
    let column_slice = column
        .as_slice()
        .ok_or_else(|| InterpolationError::invalid_input("altitude column is not contiguous"))?;

    if !is_strictly_ascending(column_slice) {
        return Err(InterpolationError::degenerate_grid(format!(
            "altitudes do not increase with level in column (time {}, lat {}, lon {})",
            time_idx, lat_idx, lon_idx
        )));
    }

    match search_idx_of_coord(column_slice, alt) {
        BracketQuery::Inside(level_idx) => Ok((level_idx, column)),
        _ => Err(InterpolationError::out_of_range(format!(
            "altitude {} km outside [{}, {}] km of column (time {}, lat {}, lon {})",
            alt,
            column_slice[0],
            column_slice[column_slice.len() - 1],
            time_idx,
            lat_idx,
            lon_idx
        ))),
    }
}
