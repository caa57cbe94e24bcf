//! Parallel sampling of scalar fields along trajectories.

use crate::{
    error::{InterpolationError, InterpolationResult},
    field::ScalarField4,
    grid::boundary::BoundaryOverrides,
    interpolation::{fip, Interpolator},
    num::BFloat,
    trajectory::Trajectory,
    verbosity::Verbosity,
};
use atomic_counter::{AtomicCounter, RelaxedCounter};
use indicatif::ParallelProgressIterator;
use ndarray::prelude::*;
use rayon::prelude::*;

/// What to do with trajectory samples that cannot be interpolated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop sampling and return the error.
    Abort,
    /// Write NaN for the failed sample and continue.
    FillNan,
}

/// Configuration parameters for sampling a field along a trajectory.
#[derive(Clone, Debug)]
pub struct SamplingConfig {
    /// Pole and date line overrides for the horizontal brackets.
    pub boundary_overrides: BoundaryOverrides,
    /// What to do with samples that cannot be interpolated.
    pub failure_policy: FailurePolicy,
}

impl SamplingConfig {
    pub const DEFAULT_FAILURE_POLICY: FailurePolicy = FailurePolicy::Abort;
}

impl Default for SamplingConfig {
    fn default() -> Self {
        SamplingConfig {
            boundary_overrides: BoundaryOverrides::default(),
            failure_policy: Self::DEFAULT_FAILURE_POLICY,
        }
    }
}

/// Interpolates the given field at every sample of the given trajectory.
///
/// # Parameters
///
/// - `field`: Scalar field to sample.
/// - `trajectory`: Trajectory to sample the field along.
/// - `interpolator`: Interpolator to use.
/// - `config`: Configuration parameters for the sampling.
/// - `verbosity`: Whether and how to report progress.
///
/// # Returns
///
/// A `InterpolationResult` which is either:
///
/// - `Ok`: Contains one interpolated value per trajectory sample.
/// - `Err`: A sample could not be interpolated and the failure policy is `Abort`.
///
/// # Type parameters
///
/// - `F`: Floating point type of the field data.
/// - `I`: Type of interpolator.
pub fn sample_field_along_trajectory<F, I>(
    field: &ScalarField4<F>,
    trajectory: &Trajectory,
    interpolator: &I,
    config: &SamplingConfig,
    verbosity: &Verbosity,
) -> InterpolationResult<Array1<fip>>
where
    F: BFloat,
    I: Interpolator,
{
    let mut values = vec![fip::NAN; trajectory.len()];
    sample_field_along_trajectory_into(
        field,
        trajectory,
        interpolator,
        config,
        verbosity,
        &mut values,
    )?;
    Ok(Array1::from_vec(values))
}

/// Interpolates the given field at every sample of the given trajectory, writing
/// the results into the given slice.
///
/// Samples are evaluated in parallel, each writing only its own output element.
/// With `FailurePolicy::Abort` the error of a failed sample is returned and the
/// content of `values` is unspecified. Which error is returned when several
/// samples fail is not specified either.
///
/// # Returns
///
/// A `InterpolationResult` which is either:
///
/// - `Ok`: Contains the number of samples that failed and were set to NaN.
/// - `Err`: The length of `values` differs from that of the trajectory, or a sample
///   could not be interpolated and the failure policy is `Abort`.
pub fn sample_field_along_trajectory_into<F, I>(
    field: &ScalarField4<F>,
    trajectory: &Trajectory,
    interpolator: &I,
    config: &SamplingConfig,
    verbosity: &Verbosity,
    values: &mut [fip],
) -> InterpolationResult<usize>
where
    F: BFloat,
    I: Interpolator,
{
    let n_samples = trajectory.len();
    if values.len() != n_samples {
        return Err(InterpolationError::invalid_input(format!(
            "output has length {}, but trajectory has {} samples",
            values.len(),
            n_samples
        )));
    }

    if verbosity.print_messages() {
        println!("Sampling {} at {} trajectory samples", field.name(), n_samples);
    }

    let overrides = &config.boundary_overrides;

    match config.failure_policy {
        FailurePolicy::Abort => {
            values
                .par_iter_mut()
                .enumerate()
                .progress_with(verbosity.create_progress_bar(n_samples))
                .try_for_each(|(idx, value)| -> InterpolationResult<()> {
                    *value = interpolator.interp_point(field, &trajectory.point(idx), overrides)?;
                    Ok(())
                })?;
            Ok(0)
        }
        FailurePolicy::FillNan => {
            let failure_count = RelaxedCounter::new(0);
            values
                .par_iter_mut()
                .enumerate()
                .progress_with(verbosity.create_progress_bar(n_samples))
                .for_each(|(idx, value)| {
                    *value = interpolator
                        .interp_point(field, &trajectory.point(idx), overrides)
                        .unwrap_or_else(|_| {
                            failure_count.inc();
                            fip::NAN
                        });
                });
            let n_failed = failure_count.get();
            if n_failed > 0 && verbosity.print_messages() {
                println!(
                    "{} of {} samples of {} could not be interpolated and were set to NaN",
                    n_failed,
                    n_samples,
                    field.name()
                );
            }
            Ok(n_failed)
        }
    }
}
