//! Extendable Output Functions (XOF)
//!
//! Seed expansion for the scheme. A [`SeedStream`] absorbs a caller seed
//! together with a domain salt, the security level and a stream domain, then
//! yields an unbounded, reproducible byte sequence.

pub mod seed_stream;

// Re-exports
pub use seed_stream::{SeedStream, StreamDomain};

/// Trait for XOF algorithms with compile-time guarantees
pub trait XofAlgorithm {
    /// Security level in bits
    const SECURITY_LEVEL: usize;

    /// Algorithm identifier
    const ALGORITHM_ID: &'static str;

    /// Algorithm name
    fn name() -> &'static str {
        Self::ALGORITHM_ID
    }
}

/// Type-level constants for SHAKE-128
pub enum Shake128Algorithm {}

impl XofAlgorithm for Shake128Algorithm {
    const SECURITY_LEVEL: usize = 128;
    const ALGORITHM_ID: &'static str = "SHAKE-128";
}

/// Type-level constants for SHAKE-256
pub enum Shake256Algorithm {}

impl XofAlgorithm for Shake256Algorithm {
    const SECURITY_LEVEL: usize = 256;
    const ALGORITHM_ID: &'static str = "SHAKE-256";
}
