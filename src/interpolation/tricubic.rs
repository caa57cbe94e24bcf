//! Interpolation with a tricubic Hermite patch fitted to the corner values and
//! finite difference derivatives of the bracketing grid cell.

use super::{fip, Interpolator};
use crate::{
    error::InterpolationResult,
    field::{derivatives::estimate_node_derivatives, ScalarField4},
    geometry::{
        Dim3::{Phi, Theta, R},
        In3D, N_CELL_CORNERS,
    },
    grid::{altitude::node_altitude, cell::QueryCell, fgr},
    num::BFloat,
    trajectory::TrajectoryPoint,
};
use lazy_static::lazy_static;

/// Number of coefficients of a tricubic polynomial.
pub const N_TRICUBIC_COEFFICIENTS: usize = 64;

/// Coefficients of the cubic Hermite polynomial on [0, 1] in terms of
/// `[f(0), f(1), f'(0), f'(1)]`, one row per power.
const CUBIC_HERMITE_BASIS: [[fip; 4]; 4] = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [-3.0, 3.0, -2.0, -1.0],
    [2.0, -2.0, 1.0, 1.0],
];

lazy_static! {
    /// Tricubic Hermite basis change matrix mapping the vector of corner values and
    /// derivatives to the polynomial coefficients `a[i + 4j + 16k]`.
    pub static ref TRICUBIC_BASIS: [[fip; N_TRICUBIC_COEFFICIENTS]; N_TRICUBIC_COEFFICIENTS] =
        build_tricubic_basis();
}

fn derivative_block_index(differentiated: [bool; 3]) -> usize {
    match differentiated {
        [false, false, false] => 0,
        [true, false, false] => 1,
        [false, true, false] => 2,
        [false, false, true] => 3,
        [true, true, false] => 4,
        [true, false, true] => 5,
        [false, true, true] => 6,
        [true, true, true] => 7,
    }
}

/// Builds the tricubic basis as the tensor product of the cubic Hermite basis
/// along each dimension.
fn build_tricubic_basis() -> [[fip; N_TRICUBIC_COEFFICIENTS]; N_TRICUBIC_COEFFICIENTS] {
    let mut basis = [[0.0; N_TRICUBIC_COEFFICIENTS]; N_TRICUBIC_COEFFICIENTS];
    for k in 0..4 {
        for j in 0..4 {
            for i in 0..4 {
                let row = &mut basis[i + 4 * j + 16 * k];
                for s in 0..4 {
                    for q in 0..4 {
                        for p in 0..4 {
                            let corner = (p % 2) + 2 * (q % 2) + 4 * (s % 2);
                            let block = derivative_block_index([p >= 2, q >= 2, s >= 2]);
                            row[N_CELL_CORNERS * block + corner] = CUBIC_HERMITE_BASIS[i][p]
                                * CUBIC_HERMITE_BASIS[j][q]
                                * CUBIC_HERMITE_BASIS[k][s];
                        }
                    }
                }
            }
        }
    }
    basis
}

/// Computes the tricubic polynomial coefficients from the Hermite vector of corner
/// values and derivatives with respect to the local cell coordinates.
pub fn tricubic_coefficients(
    hermite_vector: &[fip; N_TRICUBIC_COEFFICIENTS],
) -> [fip; N_TRICUBIC_COEFFICIENTS] {
    let mut coefficients = [0.0; N_TRICUBIC_COEFFICIENTS];
    for (coefficient, basis_row) in coefficients.iter_mut().zip(TRICUBIC_BASIS.iter()) {
        *coefficient = basis_row
            .iter()
            .zip(hermite_vector.iter())
            .map(|(basis_value, entry)| basis_value * entry)
            .sum();
    }
    coefficients
}

/// Evaluates `sum a[i + 4j + 16k] dx^i dy^j dz^k` over `i, j, k` in `0..4`.
pub fn evaluate_tricubic(
    coefficients: &[fip; N_TRICUBIC_COEFFICIENTS],
    fractions: &In3D<fgr>,
) -> fip {
    let powers = |x: fgr| [1.0, x, x * x, x * x * x];
    let (x_powers, y_powers, z_powers) = (
        powers(fractions[R]),
        powers(fractions[Theta]),
        powers(fractions[Phi]),
    );
    let mut result = 0.0;
    for (k, z_power) in z_powers.iter().enumerate() {
        for (j, y_power) in y_powers.iter().enumerate() {
            for (i, x_power) in x_powers.iter().enumerate() {
                result += coefficients[i + 4 * j + 16 * k] * x_power * y_power * z_power;
            }
        }
    }
    result
}

/// Assembles the Hermite vector of the bracketing cell: corner values followed by
/// first, second mixed and third mixed derivatives, each block in corner order.
///
/// Derivatives are converted from native grid units to local cell units by
/// multiplying with the cell extent along each differentiated dimension. Along r
/// the extent is the altitude extent of the cell in the corner's own column.
pub fn assemble_hermite_vector<F>(
    field: &ScalarField4<F>,
    cell: &QueryCell,
) -> InterpolationResult<[fip; N_TRICUBIC_COEFFICIENTS]>
where
    F: BFloat,
{
    let grid = field.grid();
    let time_idx = cell.time_idx;
    let lower_level_idx = cell.indices[R];

    let mut hermite_vector = [0.0; N_TRICUBIC_COEFFICIENTS];

    for corner in 0..N_CELL_CORNERS {
        let node = cell.corner(corner);
        let derivatives = estimate_node_derivatives(field, time_idx, &node)?;

        let column_extent =
            node_altitude(grid, time_idx, lower_level_idx + 1, node[Theta], node[Phi])
                - node_altitude(grid, time_idx, lower_level_idx, node[Theta], node[Phi]);
        let (hr, htheta, hphi) = (column_extent, grid.lat_spacing(), grid.lon_spacing());

        let entries = [
            derivatives.value,
            derivatives.first[R] * hr,
            derivatives.first[Theta] * htheta,
            derivatives.first[Phi] * hphi,
            derivatives.second[0] * hr * htheta,
            derivatives.second[1] * hr * hphi,
            derivatives.second[2] * htheta * hphi,
            derivatives.third * hr * htheta * hphi,
        ];
        for (block, entry) in entries.iter().enumerate() {
            hermite_vector[N_CELL_CORNERS * block + corner] = *entry;
        }
    }
    Ok(hermite_vector)
}

/// A 3D interpolator evaluating a tricubic Hermite patch over the bracketing cell.
#[derive(Clone, Copy, Debug, Default)]
pub struct TricubicInterpolator;

impl Interpolator for TricubicInterpolator {
    fn interp_known_cell<F>(
        &self,
        field: &ScalarField4<F>,
        _point: &TrajectoryPoint,
        cell: &QueryCell,
    ) -> InterpolationResult<fip>
    where
        F: BFloat,
    {
        let hermite_vector = assemble_hermite_vector(field, cell)?;
        let coefficients = tricubic_coefficients(&hermite_vector);
        Ok(evaluate_tricubic(&coefficients, &cell.fractions))
    }
}
