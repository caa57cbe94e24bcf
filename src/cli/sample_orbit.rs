//! Command line interface for sampling model fields along a satellite orbit.

use super::{
    interpolation::{
        create_tricubic_interpolator_subcommand, create_trilinear_interpolator_subcommand,
        idw::create_idw_interpolator_subcommand,
    },
    utils as cli_utils,
};
use crate::{
    exit_on_false, exit_with_error,
    grid::{boundary::BoundaryOverrides, fgr},
    sampling::{FailurePolicy, SamplingConfig},
    verbosity::Verbosity,
};
use clap::{Arg, ArgMatches, Command};

/// Builds a representation of the `sample_orbit` command line subcommand.
pub fn create_sample_orbit_subcommand(_parent_command_name: &'static str) -> Command<'static> {
    let command_name = "sample_orbit";

    Command::new(command_name)
        .about("Sample model fields along a satellite orbit")
        .long_about(
            "Sample model fields along a satellite orbit.\n\
             Each trajectory sample is located in the model grid, using the altitude\n\
             column of the bracketing latitude and longitude to find the level, and the\n\
             field is interpolated within the bracketing cell.",
        )
        .after_help(
            "You can use a subcommand to configure the interpolator. If left unspecified,\n\
             trilinear interpolation is used.",
        )
        .arg(
            Arg::new("lon-boundary")
                .long("lon-boundary")
                .require_equals(true)
                .value_name("DEGREES")
                .help(
                    "Absolute longitude beyond which the longitude bracket is pinned\n\
                     next to the date line",
                )
                .takes_value(true)
                .default_value("177.5"),
        )
        .arg(
            Arg::new("lat-boundary")
                .long("lat-boundary")
                .require_equals(true)
                .value_name("DEGREES")
                .help("Absolute latitude beyond which the latitude bracket is pinned at the pole")
                .takes_value(true)
                .default_value("87.5"),
        )
        .arg(
            Arg::new("failure-policy")
                .long("failure-policy")
                .require_equals(true)
                .value_name("POLICY")
                .help("What to do with samples that cannot be interpolated")
                .takes_value(true)
                .possible_values(["abort", "fill_nan"])
                .default_value("abort"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print status messages related to sampling"),
        )
        .arg(
            Arg::new("progress")
                .long("progress")
                .help("Show progress bar for sampling (implies `verbose`)"),
        )
        .subcommand(create_trilinear_interpolator_subcommand(command_name))
        .subcommand(create_tricubic_interpolator_subcommand(command_name))
        .subcommand(create_idw_interpolator_subcommand(command_name))
}

/// Determines sampling parameters based on provided options.
pub fn construct_sampling_config_from_options(arguments: &ArgMatches) -> SamplingConfig {
    let lon_threshold: fgr = cli_utils::get_finite_float_value_from_required_parseable_argument(
        arguments,
        "lon-boundary",
    );
    let lat_threshold: fgr = cli_utils::get_finite_float_value_from_required_parseable_argument(
        arguments,
        "lat-boundary",
    );
    exit_on_false!(
        lon_threshold > 0.0 && lat_threshold > 0.0,
        "Error: Boundaries must be larger than zero"
    );

    let failure_policy = match arguments.value_of("failure-policy") {
        Some("abort") => FailurePolicy::Abort,
        Some("fill_nan") => FailurePolicy::FillNan,
        value => exit_with_error!("Error: Invalid failure policy {:?}", value),
    };

    SamplingConfig {
        boundary_overrides: BoundaryOverrides {
            lon_threshold,
            lat_threshold,
        },
        failure_policy,
    }
}

/// Determines the verbosity of sampling based on provided options.
pub fn construct_verbosity_from_options(arguments: &ArgMatches) -> Verbosity {
    cli_utils::parse_verbosity(arguments, true)
}
