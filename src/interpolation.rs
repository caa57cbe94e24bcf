//! Interpolation of scalar fields at trajectory samples.

pub mod idw;
pub mod tricubic;
pub mod trilinear;

use crate::{
    error::{InterpolationError, InterpolationResult},
    field::ScalarField4,
    grid::{boundary::BoundaryOverrides, cell::QueryCell},
    num::BFloat,
    trajectory::TrajectoryPoint,
};
use idw::{IdwInterpolator, IdwInterpolatorConfig};
use std::{fmt, str::FromStr};
use tricubic::TricubicInterpolator;
use trilinear::TrilinearInterpolator;

/// Floating-point precision to use for interpolation.
#[allow(non_camel_case_types)]
pub type fip = f64;

/// Defines the properties of an interpolator evaluating a field at single
/// trajectory samples.
pub trait Interpolator: Clone + Sync + Send {
    /// Computes the interpolated value of a scalar field at the given trajectory
    /// sample known to lie inside the given grid cell.
    ///
    /// # Parameters
    ///
    /// - `field`: Scalar field to interpolate.
    /// - `point`: Trajectory sample where the interpolated value should be computed.
    /// - `cell`: Bracketing cell and fractional coordinates of the sample.
    ///
    /// # Returns
    ///
    /// A `InterpolationResult` which is either:
    ///
    /// - `Ok`: Contains the interpolated field value.
    /// - `Err`: The field could not be evaluated in the given cell.
    ///
    /// # Type parameters
    ///
    /// - `F`: Floating point type of the field data.
    fn interp_known_cell<F>(
        &self,
        field: &ScalarField4<F>,
        point: &TrajectoryPoint,
        cell: &QueryCell,
    ) -> InterpolationResult<fip>
    where
        F: BFloat;

    /// Computes the interpolated value of a scalar field at the given trajectory sample.
    ///
    /// # Parameters
    ///
    /// - `field`: Scalar field to interpolate.
    /// - `point`: Trajectory sample where the interpolated value should be computed.
    /// - `overrides`: Pole and date line overrides for the horizontal brackets.
    ///
    /// # Returns
    ///
    /// A `InterpolationResult` which is either:
    ///
    /// - `Ok`: Contains the interpolated field value.
    /// - `Err`: The sample could not be located in the grid or evaluated.
    ///
    /// # Type parameters
    ///
    /// - `F`: Floating point type of the field data.
    fn interp_point<F>(
        &self,
        field: &ScalarField4<F>,
        point: &TrajectoryPoint,
        overrides: &BoundaryOverrides,
    ) -> InterpolationResult<fip>
    where
        F: BFloat,
    {
        let cell = field.grid().locate(point, overrides)?;
        self.interp_known_cell(field, point, &cell)
    }
}

/// Available interpolation methods.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InterpolationMethod {
    Trilinear,
    TricubicSpline,
    InverseDistanceWeighted,
}

impl InterpolationMethod {
    /// Creates an array for iterating over all methods.
    pub fn slice() -> [Self; 3] {
        [
            Self::Trilinear,
            Self::TricubicSpline,
            Self::InverseDistanceWeighted,
        ]
    }
}

impl fmt::Display for InterpolationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Trilinear => "trilinear",
                Self::TricubicSpline => "tricubic",
                Self::InverseDistanceWeighted => "idw",
            }
        )
    }
}

impl FromStr for InterpolationMethod {
    type Err = InterpolationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trilinear" | "linear" => Ok(Self::Trilinear),
            "tricubic" | "spline" => Ok(Self::TricubicSpline),
            "idw" | "inverse_distance_weighted" => Ok(Self::InverseDistanceWeighted),
            _ => Err(InterpolationError::invalid_input(format!(
                "unknown interpolation method {}",
                s
            ))),
        }
    }
}

/// An interpolator using any of the available interpolation methods.
#[derive(Clone, Debug)]
pub enum OrbitInterpolator {
    Trilinear(TrilinearInterpolator),
    Tricubic(TricubicInterpolator),
    Idw(IdwInterpolator),
}

impl OrbitInterpolator {
    /// Creates an interpolator for the given method with default configuration.
    pub fn from_method(method: InterpolationMethod) -> Self {
        match method {
            InterpolationMethod::Trilinear => Self::Trilinear(TrilinearInterpolator),
            InterpolationMethod::TricubicSpline => Self::Tricubic(TricubicInterpolator),
            InterpolationMethod::InverseDistanceWeighted => {
                Self::Idw(IdwInterpolator::new(IdwInterpolatorConfig::default()))
            }
        }
    }

    /// Returns the interpolation method in use.
    pub fn method(&self) -> InterpolationMethod {
        match self {
            Self::Trilinear(_) => InterpolationMethod::Trilinear,
            Self::Tricubic(_) => InterpolationMethod::TricubicSpline,
            Self::Idw(_) => InterpolationMethod::InverseDistanceWeighted,
        }
    }
}

impl Interpolator for OrbitInterpolator {
    fn interp_known_cell<F>(
        &self,
        field: &ScalarField4<F>,
        point: &TrajectoryPoint,
        cell: &QueryCell,
    ) -> InterpolationResult<fip>
    where
        F: BFloat,
    {
        match self {
            Self::Trilinear(interpolator) => interpolator.interp_known_cell(field, point, cell),
            Self::Tricubic(interpolator) => interpolator.interp_known_cell(field, point, cell),
            Self::Idw(interpolator) => interpolator.interp_known_cell(field, point, cell),
        }
    }
}
