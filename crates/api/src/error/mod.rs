//! Error handling for the lbvrf workspace

pub mod types;

// Re-export the primary error type and result
pub use types::{Error, Result};

impl From<std::collections::TryReserveError> for Error {
    fn from(_: std::collections::TryReserveError) -> Self {
        Self::AllocationFailure {
            context: "buffer reservation",
        }
    }
}
