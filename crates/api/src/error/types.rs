//! Error type definitions shared across the workspace

use thiserror::Error;

/// Primary error type for parameter and key generation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The caller-supplied seed is shorter than the scheme minimum.
    ///
    /// Raised before any stream derivation takes place, so no sampling or
    /// allocation has happened when this is returned.
    #[error("Seed is too short: expected at least {expected} bytes, got {actual}")]
    InvalidSeedLength {
        expected: usize,
        actual: usize,
    },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Internal state could not be allocated
    #[error("Allocation failed: {context}")]
    AllocationFailure {
        context: &'static str,
    },

    /// A cancellable operation was stopped before completion
    #[error("Operation cancelled: {context}")]
    Cancelled {
        context: &'static str,
    },

    /// Not implemented error
    #[error("{feature} is not implemented")]
    NotImplemented {
        feature: &'static str,
    },
}

/// Result type for lbvrf operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create an `InvalidParameter` error
    pub fn parameter(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    /// Returns true for the distinguished "seed too short" failure
    pub fn is_seed_length(&self) -> bool {
        matches!(self, Self::InvalidSeedLength { .. })
    }
}
