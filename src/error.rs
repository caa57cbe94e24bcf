//! Error types and error reporting macros.

use std::fmt;
use thiserror::Error;

/// Category of an interpolation failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A query coordinate lies outside the range covered by the grid.
    OutOfRange,
    /// Grid coordinates are degenerate, e.g. repeated or non-ascending.
    DegenerateGrid,
    /// Latitude or longitude spacing is not uniform.
    NonUniformSpacing,
    /// Input arrays are inconsistent or contain invalid values.
    InvalidInput,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::OutOfRange => "query out of range",
                Self::DegenerateGrid => "degenerate grid",
                Self::NonUniformSpacing => "non-uniform grid spacing",
                Self::InvalidInput => "invalid input",
            }
        )
    }
}

/// Error produced while setting up or performing an interpolation.
#[derive(Error, Clone, Debug, PartialEq)]
#[error("{kind}: {message}")]
pub struct InterpolationError {
    kind: ErrorKind,
    message: String,
}

impl InterpolationError {
    /// Creates a new error of the given kind.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::OutOfRange, message)
    }

    pub fn degenerate_grid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DegenerateGrid, message)
    }

    pub fn non_uniform_spacing(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NonUniformSpacing, message)
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidInput, message)
    }

    /// Returns the category of the error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message without the kind prefix.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result type for fallible interpolation operations.
pub type InterpolationResult<T> = Result<T, InterpolationError>;

#[cfg(not(feature = "for-testing"))]
#[macro_export]
macro_rules! exit_with_error {
    ($($print_arg:tt)*) => {{
        eprintln!($($print_arg)*);
        quit::with_code(1);
    }};
}

#[cfg(feature = "for-testing")]
#[macro_export]
macro_rules! exit_with_error {
    ($($print_arg:tt)*) => {{
        panic!($($print_arg)*);
    }};
}

#[macro_export]
macro_rules! exit_on_error {
    ($result:expr, $($print_arg:tt)*) => {
        match $result {
            Ok(value) => value,
            Err(err) => {
                $crate::exit_with_error!($($print_arg)*, err)
            }
        }
    };
}

#[macro_export]
macro_rules! exit_on_false {
    ($logic:expr, $($print_arg:tt)*) => {
        if $logic {
            true
        } else {
            $crate::exit_with_error!($($print_arg)*)
        }
    };
}
