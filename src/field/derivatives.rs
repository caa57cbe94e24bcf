//! Finite difference estimates of partial derivatives at grid nodes.

use super::ScalarField4;
use crate::{
    error::{InterpolationError, InterpolationResult},
    geometry::{
        Dim3::{self, Phi, Theta, R},
        Idx3, In3D,
    },
    grid::{altitude::node_altitude, fgr, model::ModelGrid},
    interpolation::fip,
    num::BFloat,
};

/// Dimension pairs of the second order mixed partial derivatives, in the order
/// they are stored in `NodeDerivatives::second`.
pub const MIXED_DIM_PAIRS: [[Dim3; 2]; 3] = [[R, Theta], [R, Phi], [Theta, Phi]];

/// Field value and partial derivatives at a grid node, in native grid units
/// (per km along r, per degree along theta and phi).
#[derive(Clone, Debug, PartialEq)]
pub struct NodeDerivatives {
    pub value: fip,
    /// First order partials along r, theta and phi.
    pub first: In3D<fip>,
    /// Second order mixed partials for each pair in `MIXED_DIM_PAIRS`.
    pub second: [fip; 3],
    /// Third order mixed partial along r, theta and phi.
    pub third: fip,
}

/// Returns the coordinate of the given node along the given dimension.
///
/// Along r this is the altitude [km] of the node in its own column.
pub fn node_coordinate(grid: &ModelGrid, time_idx: usize, node: &Idx3, dim: Dim3) -> fgr {
    match dim {
        R => node_altitude(grid, time_idx, node[R], node[Theta], node[Phi]),
        Theta => grid.lats()[node[Theta]],
        Phi => grid.lons()[node[Phi]],
    }
}

/// Returns the indices of the neighbouring nodes used for differencing around
/// the given index: both neighbours in the interior, the node itself and its
/// single neighbour at the edges.
fn difference_stencil(size: usize, idx: usize, dim: Dim3) -> InterpolationResult<(usize, usize)> {
    if size < 2 {
        return Err(InterpolationError::degenerate_grid(format!(
            "cannot difference along {} with {} node(s)",
            dim, size
        )));
    }
    Ok((idx.saturating_sub(1), usize::min(idx + 1, size - 1)))
}

/// Estimates the mixed partial derivative of the field at the given node with
/// respect to each of the given dimensions in turn.
///
/// The derivative along the first dimension is the difference of the partial
/// with respect to the remaining dimensions between the neighbouring nodes,
/// divided by the difference of their coordinates. An empty list of dimensions
/// gives the field value.
///
/// # Returns
///
/// A `InterpolationResult` which is either:
///
/// - `Ok`: Contains the estimated derivative.
/// - `Err`: Two differenced nodes have the same coordinate.
pub fn partial_derivative<F: BFloat>(
    field: &ScalarField4<F>,
    time_idx: usize,
    node: &Idx3,
    dims: &[Dim3],
) -> InterpolationResult<fip> {
    let (dim, remaining_dims) = match dims.split_first() {
        Some((&dim, remaining_dims)) => (dim, remaining_dims),
        None => return Ok(field.value(time_idx, node)),
    };
    let grid = field.grid();

    let (lower_idx, upper_idx) = difference_stencil(grid.size(dim), node[dim], dim)?;
    let lower_node = node.with_component(dim, lower_idx);
    let upper_node = node.with_component(dim, upper_idx);

    let spacing = node_coordinate(grid, time_idx, &upper_node, dim)
        - node_coordinate(grid, time_idx, &lower_node, dim);
    if spacing == 0.0 {
        return Err(InterpolationError::degenerate_grid(format!(
            "zero {} spacing between nodes {} and {} at time index {}",
            dim, lower_node, upper_node, time_idx
        )));
    }

    let upper_partial = partial_derivative(field, time_idx, &upper_node, remaining_dims)?;
    let lower_partial = partial_derivative(field, time_idx, &lower_node, remaining_dims)?;

    Ok((upper_partial - lower_partial) / spacing)
}

/// Estimates the value, first order partials, second order mixed partials and the
/// third order mixed partial of the field at the given node.
pub fn estimate_node_derivatives<F: BFloat>(
    field: &ScalarField4<F>,
    time_idx: usize,
    node: &Idx3,
) -> InterpolationResult<NodeDerivatives> {
    let value = field.value(time_idx, node);
    let first = In3D::new(
        partial_derivative(field, time_idx, node, &[R])?,
        partial_derivative(field, time_idx, node, &[Theta])?,
        partial_derivative(field, time_idx, node, &[Phi])?,
    );
    let mut second = [0.0; 3];
    for (derivative, dims) in second.iter_mut().zip(MIXED_DIM_PAIRS.iter()) {
        *derivative = partial_derivative(field, time_idx, node, dims)?;
    }
    let third = partial_derivative(field, time_idx, node, &[R, Theta, Phi])?;
    Ok(NodeDerivatives {
        value,
        first,
        second,
        third,
    })
}
