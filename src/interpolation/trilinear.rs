//! Trilinear interpolation within the bracketing grid cell.

use super::{fip, Interpolator};
use crate::{
    error::InterpolationResult,
    field::ScalarField4,
    geometry::{
        Dim3::{Phi, Theta, R},
        In3D, CELL_CORNER_OFFSETS, N_CELL_CORNERS,
    },
    grid::{cell::QueryCell, fgr},
    num::BFloat,
    trajectory::TrajectoryPoint,
};

/// A 3D interpolator weighting the eight cell corners by the volumes of the
/// opposite sub-cells.
#[derive(Clone, Copy, Debug, Default)]
pub struct TrilinearInterpolator;

/// Computes the trilinear weights of the cell corners for the given fractional
/// coordinates, in corner order.
///
/// Each weight is the absolute value of the product of `1 - d` or `d` along each
/// dimension, so weights stay non-negative for fractions slightly outside [0, 1].
/// The weights are not renormalized.
pub fn trilinear_weights(fractions: &In3D<fgr>) -> [fip; N_CELL_CORNERS] {
    let factor = |fraction: fgr, offset: usize| {
        if offset == 0 {
            1.0 - fraction
        } else {
            fraction
        }
    };
    let mut weights = [0.0; N_CELL_CORNERS];
    for (weight, &[dr, dtheta, dphi]) in weights.iter_mut().zip(CELL_CORNER_OFFSETS.iter()) {
        *weight = fip::abs(
            factor(fractions[R], dr) * factor(fractions[Theta], dtheta) * factor(fractions[Phi], dphi),
        );
    }
    weights
}

impl Interpolator for TrilinearInterpolator {
    fn interp_known_cell<F>(
        &self,
        field: &ScalarField4<F>,
        _point: &TrajectoryPoint,
        cell: &QueryCell,
    ) -> InterpolationResult<fip>
    where
        F: BFloat,
    {
        Ok(trilinear_weights(&cell.fractions)
            .iter()
            .enumerate()
            .map(|(corner, weight)| weight * field.value(cell.time_idx, &cell.corner(corner)))
            .sum())
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn weights_sum_to_one_inside_cell() {
        let n = 7;
        for i in 0..=n {
            for j in 0..=n {
                for k in 0..=n {
                    let fractions = In3D::new(
                        i as fgr / n as fgr,
                        j as fgr / n as fgr,
                        k as fgr / n as fgr,
                    );
                    let sum: fip = trilinear_weights(&fractions).iter().sum();
                    assert_abs_diff_eq!(sum, 1.0, epsilon = 1e-12);
                }
            }
        }
    }

    #[test]
    fn weights_select_single_corner_at_corners() {
        for (corner, &[dr, dtheta, dphi]) in CELL_CORNER_OFFSETS.iter().enumerate() {
            let weights =
                trilinear_weights(&In3D::new(dr as fgr, dtheta as fgr, dphi as fgr));
            for (other, &weight) in weights.iter().enumerate() {
                assert_eq!(weight, if other == corner { 1.0 } else { 0.0 });
            }
        }
    }

    #[test]
    fn weights_are_non_negative_outside_cell() {
        let weights = trilinear_weights(&In3D::new(-0.2, 0.5, 1.3));
        assert!(weights.iter().all(|&weight| weight >= 0.0));
    }
}
