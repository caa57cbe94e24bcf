//! Scalar fields defined on model grids.

pub mod derivatives;

use crate::{
    error::{InterpolationError, InterpolationResult},
    geometry::{Dim3, Idx3},
    grid::model::ModelGrid,
    interpolation::fip,
    num::BFloat,
};
use ndarray::prelude::*;
use std::sync::Arc;

/// A 4D scalar field with values at the nodes of a model grid.
#[derive(Clone, Debug)]
pub struct ScalarField4<F: BFloat> {
    name: String,
    grid: Arc<ModelGrid>,
    values: Array4<F>,
}

impl<F: BFloat> ScalarField4<F> {
    /// Creates a new scalar field from the given values, ordered (time, level, lat, lon).
    ///
    /// Fails with `InvalidInput` if the shape of the values differs from that of the grid.
    pub fn new(
        name: String,
        grid: Arc<ModelGrid>,
        values: Array4<F>,
    ) -> InterpolationResult<Self> {
        if values.shape() != &grid.shape()[..] {
            return Err(InterpolationError::invalid_input(format!(
                "values of field {} have shape {:?}, but grid has shape {:?}",
                name,
                values.shape(),
                grid.shape()
            )));
        }
        Ok(Self { name, grid, values })
    }

    /// Returns the name of the field.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a reference to the grid.
    pub fn grid(&self) -> &ModelGrid {
        self.grid.as_ref()
    }

    /// Returns a new atomic reference counted pointer to the grid.
    pub fn arc_with_grid(&self) -> Arc<ModelGrid> {
        Arc::clone(&self.grid)
    }

    /// Returns a reference to the 4D array of field values.
    pub fn values(&self) -> &Array4<F> {
        &self.values
    }

    /// Returns the field value at the given node, converted to interpolation precision.
    pub fn value(&self, time_idx: usize, node: &Idx3) -> fip {
        self.values[[
            time_idx,
            node[Dim3::R],
            node[Dim3::Theta],
            node[Dim3::Phi],
        ]]
        .into()
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::error::ErrorKind;

    fn small_grid() -> Arc<ModelGrid> {
        Arc::new(
            ModelGrid::new(
                vec![0.0],
                vec![0.0, 1.0],
                vec![0.0, 1.0, 2.0],
                vec![0.0, 1.0, 2.0],
                Array4::from_shape_fn((1, 2, 3, 3), |(_, k, _, _)| 1e7 * (1.0 + k as f64)),
            )
            .unwrap(),
        )
    }

    #[test]
    fn field_values_are_indexed_by_level_lat_lon() {
        let values = Array4::from_shape_fn((1, 2, 3, 3), |(_, k, j, i)| {
            (100 * k + 10 * j + i) as f32
        });
        let field = ScalarField4::new("tn".to_string(), small_grid(), values).unwrap();
        assert_eq!(field.value(0, &Idx3::new(1, 2, 0)), 120.0);
        assert_eq!(field.name(), "tn");
    }

    #[test]
    fn mismatched_field_shape_is_rejected() {
        let values = Array4::<f64>::zeros((1, 3, 3, 3));
        let err = ScalarField4::new("tn".to_string(), small_grid(), values).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}
