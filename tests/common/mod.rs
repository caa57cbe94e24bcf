#![allow(dead_code)]

use gcm_orbit::{
    constants::CM_PER_KM,
    field::ScalarField4,
    geometry::{
        Dim3::{Phi, Theta, R},
        Idx3,
    },
    grid::{fgr, model::ModelGrid},
    interpolation::fip,
    trajectory::TrajectoryPoint,
};
use ndarray::prelude::*;
use std::sync::Arc;

/// Defines one test for each interpolation method, with the method bound to the
/// given identifier inside the test body.
#[macro_export]
macro_rules! def_test_for_each_method {
    (fn $name:ident($method:ident) $test_body:block) => {
        #[test]
        fn $name() {
            for $method in gcm_orbit::interpolation::InterpolationMethod::slice() {
                $test_body
            }
        }
    };
}

pub const SCENARIO_LATS: [fgr; 4] = [-10.0, 0.0, 10.0, 20.0];
pub const SCENARIO_LONS: [fgr; 4] = [-20.0, -10.0, 0.0, 10.0];
pub const SCENARIO_ALTITUDES: [fgr; 3] = [100.0, 110.0, 120.0];

/// Single time step grid with the same altitude column [km] at every latitude and longitude.
pub fn scenario_grid() -> Arc<ModelGrid> {
    let heights = Array4::from_shape_fn(
        (1, SCENARIO_ALTITUDES.len(), SCENARIO_LATS.len(), SCENARIO_LONS.len()),
        |(_, k, _, _)| SCENARIO_ALTITUDES[k] * CM_PER_KM,
    );
    Arc::new(
        ModelGrid::new(
            vec![0.0],
            vec![0.0, 1.0, 2.0],
            SCENARIO_LATS.to_vec(),
            SCENARIO_LONS.to_vec(),
            heights,
        )
        .unwrap(),
    )
}

/// Field that is 100 at (lat 0, lon 0, 110 km), 200 at (lat 10, lon 0, 110 km)
/// and zero elsewhere.
pub fn scenario_field() -> ScalarField4<fip> {
    let grid = scenario_grid();
    let mut values = Array4::zeros(grid.shape());
    values[[0, 1, 1, 2]] = 100.0;
    values[[0, 1, 2, 2]] = 200.0;
    ScalarField4::new("scenario".to_string(), grid, values).unwrap()
}

/// Grid covering the globe at 2.5 degree resolution, with two time steps and
/// altitudes varying slightly with latitude, longitude and time.
pub fn global_grid() -> Arc<ModelGrid> {
    let lats: Vec<fgr> = (0..72).map(|j| -88.75 + 2.5 * j as fgr).collect();
    let lons: Vec<fgr> = (0..144).map(|i| -180.0 + 2.5 * i as fgr).collect();
    let heights = Array4::from_shape_fn((2, 5, lats.len(), lons.len()), |(t, k, j, i)| {
        (100.0 + 25.0 * k as fgr + 0.05 * j as fgr + 0.02 * i as fgr + 0.5 * t as fgr)
            * CM_PER_KM
    });
    Arc::new(
        ModelGrid::new(
            vec![0.0, 3600.0],
            vec![0.0, 1.0, 2.0, 3.0, 4.0],
            lats,
            lons,
            heights,
        )
        .unwrap(),
    )
}

/// Smooth, non-polynomial field on the global grid.
pub fn global_field() -> ScalarField4<fip> {
    let grid = global_grid();
    let values = Array4::from_shape_fn(grid.shape(), |(t, k, j, i)| {
        let lat = grid.lats()[j].to_radians();
        let lon = grid.lons()[i].to_radians();
        800.0 + 40.0 * k as fip + 30.0 * lat.cos() * lon.sin() + 5.0 * t as fip
    });
    ScalarField4::new("tn".to_string(), grid, values).unwrap()
}

/// Returns the trajectory sample coinciding with the given grid node.
pub fn point_at_node(grid: &ModelGrid, time_idx: usize, node: &Idx3) -> TrajectoryPoint {
    TrajectoryPoint::new(
        grid.times()[time_idx],
        grid.lats()[node[Theta]],
        grid.lons()[node[Phi]],
        grid.heights()[[time_idx, node[R], node[Theta], node[Phi]]] / CM_PER_KM,
    )
}
