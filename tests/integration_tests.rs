mod common;

use approx::assert_abs_diff_eq;
use gcm_orbit::{
    constants::CM_PER_KM,
    error::ErrorKind,
    geometry::{Dim3::Phi, Dim3::Theta, Idx3},
    grid::{boundary::BoundaryOverrides, fgr, model::ModelGrid},
    interpolation::{
        fip, idw::IdwInterpolator, trilinear::TrilinearInterpolator, InterpolationMethod,
        Interpolator, OrbitInterpolator,
    },
    sampling::{sample_field_along_trajectory, SamplingConfig},
    trajectory::{Trajectory, TrajectoryPoint},
    verbosity::Verbosity,
};
use ndarray::prelude::*;

#[test]
fn trilinear_gives_midpoint_between_latitude_nodes() {
    let field = common::scenario_field();
    let value = TrilinearInterpolator
        .interp_point(
            &field,
            &TrajectoryPoint::new(0.0, 5.0, 0.0, 110.0),
            &BoundaryOverrides::default(),
        )
        .unwrap();
    assert_abs_diff_eq!(value, 150.0, epsilon = 1e-12);
}

#[test]
fn idw_at_node_gives_node_value() {
    let field = common::scenario_field();
    let value = IdwInterpolator::default()
        .interp_point(
            &field,
            &TrajectoryPoint::new(0.0, 10.0, 0.0, 110.0),
            &BoundaryOverrides::default(),
        )
        .unwrap();
    assert_eq!(value, 200.0);
}

#[test]
fn longitudes_near_date_line_share_bracket() {
    let grid = common::global_grid();
    let overrides = BoundaryOverrides::default();
    let locate_lon_idx = |lon: fgr| {
        grid.locate(&TrajectoryPoint::new(0.0, 10.0, lon, 150.0), &overrides)
            .unwrap()
            .indices[Phi]
    };
    assert_eq!(locate_lon_idx(179.9), locate_lon_idx(178.0));

    let n_lons = grid.lons().len();
    for step in 0..=30 {
        let offset = 0.1 * step as fgr;
        assert_eq!(locate_lon_idx(177.0 + offset), n_lons - 2);
        assert_eq!(locate_lon_idx(-180.0 + offset), 1);
    }
}

#[test]
fn latitudes_near_poles_are_pinned() {
    let grid = common::global_grid();
    let overrides = BoundaryOverrides::default();
    let locate_lat_idx = |lat: fgr| {
        grid.locate(&TrajectoryPoint::new(0.0, lat, 30.0, 150.0), &overrides)
            .unwrap()
            .indices[Theta]
    };
    let n_lats = grid.lats().len();
    assert_eq!(locate_lat_idx(87.5), n_lats - 2);
    assert_eq!(locate_lat_idx(90.0), n_lats - 2);
    assert_eq!(locate_lat_idx(-87.5), 0);
    assert_eq!(locate_lat_idx(-90.0), 0);
}

def_test_for_each_method!(
    fn all_methods_are_exact_at_nodes(method) {
        let field = common::global_field();
        let interpolator = OrbitInterpolator::from_method(method);
        let overrides = BoundaryOverrides::default();
        for (time_idx, node) in [
            (0, Idx3::new(1, 20, 40)),
            (0, Idx3::new(2, 50, 100)),
            (1, Idx3::new(3, 36, 71)),
        ] {
            let point = common::point_at_node(field.grid(), time_idx, &node);
            let value = interpolator.interp_point(&field, &point, &overrides).unwrap();
            assert_abs_diff_eq!(value, field.value(time_idx, &node), epsilon = 1e-9);
        }
    }
);

#[test]
fn trilinear_and_tricubic_reproduce_multilinear_field() {
    let grid = common::scenario_grid();
    let evaluate = |alt: fip, lat: fip, lon: fip| {
        2.0 * alt + 3.0 * lat - lon + 0.1 * lat * lon - 0.01 * alt * lon
    };
    let values = Array4::from_shape_fn(grid.shape(), |(_, k, j, i)| {
        evaluate(
            common::SCENARIO_ALTITUDES[k],
            common::SCENARIO_LATS[j],
            common::SCENARIO_LONS[i],
        )
    });
    let field = gcm_orbit::field::ScalarField4::new("f".to_string(), grid, values).unwrap();
    let overrides = BoundaryOverrides::default();

    for method in [
        InterpolationMethod::Trilinear,
        InterpolationMethod::TricubicSpline,
    ] {
        let interpolator = OrbitInterpolator::from_method(method);
        for point in [
            TrajectoryPoint::new(0.0, 5.0, -5.0, 105.0),
            TrajectoryPoint::new(0.0, 12.0, 3.0, 117.5),
            TrajectoryPoint::new(0.0, -7.0, -13.0, 101.0),
        ] {
            let value = interpolator.interp_point(&field, &point, &overrides).unwrap();
            assert_abs_diff_eq!(
                value,
                evaluate(point.alt, point.lat, point.lon),
                epsilon = 1e-8
            );
        }
    }
}

def_test_for_each_method!(
    fn batch_sampling_matches_pointwise_interpolation(method) {
        let field = common::global_field();
        let n_samples = 500;
        let trajectory = Trajectory::new(
            (0..n_samples).map(|idx| 7.0 * idx as fgr).collect(),
            (0..n_samples).map(|idx| 80.0 * (0.013 * idx as fgr).sin()).collect(),
            (0..n_samples).map(|idx| -179.0 + 0.7 * idx as fgr).collect(),
            (0..n_samples).map(|idx| 120.0 + 0.15 * idx as fgr).collect(),
        )
        .unwrap();
        let interpolator = OrbitInterpolator::from_method(method);
        let config = SamplingConfig::default();

        let values = sample_field_along_trajectory(
            &field,
            &trajectory,
            &interpolator,
            &config,
            &Verbosity::Quiet,
        )
        .unwrap();

        assert_eq!(values.len(), n_samples);
        for (point, &value) in trajectory.points().zip(values.iter()) {
            let expected = interpolator
                .interp_point(&field, &point, &config.boundary_overrides)
                .unwrap();
            assert_eq!(value, expected);
        }
    }
);

#[test]
fn samples_outside_grid_give_out_of_range_errors() {
    let field = common::scenario_field();
    let overrides = BoundaryOverrides::default();
    for point in [
        TrajectoryPoint::new(-1.0, 5.0, 0.0, 110.0),
        TrajectoryPoint::new(0.0, 30.0, 0.0, 110.0),
        TrajectoryPoint::new(0.0, 5.0, 15.0, 110.0),
        TrajectoryPoint::new(0.0, 5.0, 0.0, 1000.0),
        TrajectoryPoint::new(0.0, 5.0, 0.0, 90.0),
    ] {
        let err = TrilinearInterpolator
            .interp_point(&field, &point, &overrides)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfRange, "{}", err);
    }
}

#[test]
fn non_uniform_latitudes_are_rejected() {
    let heights = Array4::from_shape_fn((1, 2, 3, 3), |(_, k, _, _)| {
        (100.0 + 10.0 * k as fgr) * CM_PER_KM
    });
    let err = ModelGrid::new(
        vec![0.0],
        vec![0.0, 1.0],
        vec![0.0, 1.0, 3.0],
        vec![0.0, 1.0, 2.0],
        heights,
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NonUniformSpacing);
}

#[test]
fn decreasing_altitude_column_gives_degenerate_grid_error() {
    let mut heights = Array4::from_shape_fn((1, 3, 3, 3), |(_, k, _, _)| {
        (100.0 + 10.0 * k as fgr) * CM_PER_KM
    });
    heights[[0, 2, 1, 1]] = 95.0 * CM_PER_KM;
    let grid = ModelGrid::new(
        vec![0.0],
        vec![0.0, 1.0, 2.0],
        vec![0.0, 1.0, 2.0],
        vec![0.0, 1.0, 2.0],
        heights,
    )
    .unwrap();
    let err = grid
        .locate(
            &TrajectoryPoint::new(0.0, 1.5, 1.5, 105.0),
            &BoundaryOverrides::default(),
        )
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DegenerateGrid);
}
