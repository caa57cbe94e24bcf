//! Command line interface for inverse distance weighted interpolation.

use crate::{
    cli::utils as cli_utils,
    exit_on_false,
    interpolation::{
        fip,
        idw::{ExactMatchCheck, IdwInterpolatorConfig},
    },
};
use clap::{Arg, ArgMatches, Command};

/// Creates a subcommand for using the inverse distance weighted interpolator.
pub fn create_idw_interpolator_subcommand(_parent_command_name: &'static str) -> Command<'static> {
    Command::new("idw_interpolator")
        .about("Use the inverse distance weighted interpolator")
        .long_about(
            "Use the inverse distance weighted interpolator.\n\
             An interpolated value is the average of the eight corner values of the\n\
             bracketing grid cell, weighted by the inverse of a power of their distance to\n\
             the sample in (latitude, longitude, altitude) space.",
        )
        .arg(
            Arg::new("power")
                .long("power")
                .require_equals(true)
                .value_name("EXPONENT")
                .help("Exponent of the distance in the inverse distance weights")
                .takes_value(true)
                .default_value("2"),
        )
        .arg(
            Arg::new("legacy-exact-match")
                .long("legacy-exact-match")
                .help("Check corner 2 in place of corner 3 when detecting samples on a corner"),
        )
}

/// Determines inverse distance weighted interpolator parameters based on
/// provided options.
pub fn construct_idw_interpolator_config_from_options(
    arguments: &ArgMatches,
) -> IdwInterpolatorConfig {
    let power: fip =
        cli_utils::get_finite_float_value_from_required_parseable_argument(arguments, "power");
    exit_on_false!(power > 0.0, "Error: power must be larger than zero");

    let exact_match_check = if arguments.is_present("legacy-exact-match") {
        ExactMatchCheck::Legacy
    } else {
        ExactMatchCheck::AllCorners
    };

    IdwInterpolatorConfig {
        power,
        exact_match_check,
    }
}
