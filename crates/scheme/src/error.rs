//! Error types for the scheme crate

use lbvrf_algorithms::error::Error as AlgoError;
use thiserror::Error;

/// Errors that can occur during parameter and key generation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Failure reported by a lattice primitive
    #[error(transparent)]
    Algorithm(#[from] AlgoError),

    /// Public parameters do not match the parameter set
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Cancellation was requested before the matrix was complete
    #[error("matrix expansion cancelled")]
    Cancelled,

    /// Declared operation without an implementation
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
}

// Convert to api::Error
impl From<Error> for lbvrf_api::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Algorithm(e) => lbvrf_api::Error::from(e),
            Error::InvalidParameter(message) => lbvrf_api::Error::InvalidParameter {
                context: "lbvrf",
                message,
            },
            Error::Cancelled => lbvrf_api::Error::Cancelled {
                context: "matrix expansion",
            },
            Error::NotImplemented(feature) => lbvrf_api::Error::NotImplemented { feature },
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
