//! Command line interface for selecting and configuring interpolators.

pub mod idw;

use crate::interpolation::{
    idw::IdwInterpolator, tricubic::TricubicInterpolator, trilinear::TrilinearInterpolator,
    OrbitInterpolator,
};
use clap::{ArgMatches, Command};
use idw::construct_idw_interpolator_config_from_options;

/// Creates a subcommand for using the trilinear interpolator.
pub fn create_trilinear_interpolator_subcommand(
    _parent_command_name: &'static str,
) -> Command<'static> {
    Command::new("trilinear_interpolator")
        .about("Use the trilinear interpolator")
        .long_about(
            "Use the trilinear interpolator.\n\
             An interpolated value is the average of the eight corner values of the\n\
             bracketing grid cell, weighted by the volumes of the opposite sub-cells.",
        )
}

/// Creates a subcommand for using the tricubic interpolator.
pub fn create_tricubic_interpolator_subcommand(
    _parent_command_name: &'static str,
) -> Command<'static> {
    Command::new("tricubic_interpolator")
        .about("Use the tricubic Hermite interpolator")
        .long_about(
            "Use the tricubic Hermite interpolator.\n\
             An interpolated value is found by evaluating a tricubic polynomial matching the\n\
             corner values and finite difference derivatives of the bracketing grid cell.",
        )
}

/// Determines the interpolator to use based on the given arguments, which may
/// contain one of the interpolator subcommands. Trilinear interpolation is used
/// if none is given.
pub fn construct_interpolator_from_options(arguments: &ArgMatches) -> OrbitInterpolator {
    if arguments.subcommand_matches("tricubic_interpolator").is_some() {
        OrbitInterpolator::Tricubic(TricubicInterpolator)
    } else if let Some(idw_arguments) = arguments.subcommand_matches("idw_interpolator") {
        OrbitInterpolator::Idw(IdwInterpolator::new(
            construct_idw_interpolator_config_from_options(idw_arguments),
        ))
    } else {
        OrbitInterpolator::Trilinear(TrilinearInterpolator)
    }
}
