//! Error handling for lattice primitives

use std::borrow::Cow;
use std::collections::TryReserveError;

use lbvrf_api::Error as CoreError;
use thiserror::Error;

/// The error type for lattice primitives
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    #[error("Invalid parameter '{name}': {reason}")]
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    #[error("Invalid length for {context}: expected {expected}, got {actual}")]
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// Seed shorter than the stream minimum
    #[error("Seed too short: expected at least {expected} bytes, got {actual}")]
    SeedLength {
        /// Minimum seed length in bytes
        expected: usize,
        /// Supplied seed length in bytes
        actual: usize,
    },

    /// Storage could not be reserved
    #[error("Allocation failed: {context}")]
    Allocation {
        /// What was being allocated
        context: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<R: Into<Cow<'static, str>>>(name: &'static str, reason: R) -> Self {
        Error::Parameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Result type for lattice primitive operations
pub type Result<T> = core::result::Result<T, Error>;

impl From<TryReserveError> for Error {
    fn from(_: TryReserveError) -> Self {
        Error::Allocation {
            context: "coefficient storage",
        }
    }
}

// Implement conversion to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: name,
                message: reason.into_owned(),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::SeedLength { expected, actual } => {
                CoreError::InvalidSeedLength { expected, actual }
            }
            Error::Allocation { context } => CoreError::AllocationFailure { context },
        }
    }
}

// Include the validation submodule
pub mod validate;
