//! # lbvrf
//!
//! Deterministic parameter and key-material generation for a lattice-based
//! verifiable random function.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! lbvrf = "0.3"
//! ```
//!
//! ```no_run
//! use lbvrf::prelude::*;
//! use lbvrf::scheme::Lbvrf128;
//!
//! let seed = [7u8; 32];
//! let pp = Lbvrf128::paramgen(&seed)?;
//! let (pk, sk) = Lbvrf128::keygen(&[9u8; 32], &pp)?;
//! # let _ = (pk, sk);
//! # Ok::<(), lbvrf::api::Error>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `parallel`: data-parallel public matrix expansion with cancellation
//! - `trace`: operation-boundary events through `tracing`
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`lbvrf-api`]: error type and the `Vrf` trait
//! - [`lbvrf-params`]: parameter-set constants
//! - [`lbvrf-algorithms`]: seed streams, samplers and ring arithmetic
//! - [`lbvrf-scheme`]: public matrix expansion and key generation

pub use lbvrf_algorithms as algorithms;
pub use lbvrf_api as api;
pub use lbvrf_params as params;
pub use lbvrf_scheme as scheme;

/// Common imports for lbvrf users
pub mod prelude {
    pub use crate::api::{Error, Result, Vrf};

    pub use crate::algorithms::poly::{Matrix, PolyVec, Polynomial};
    pub use crate::algorithms::xof::{SeedStream, StreamDomain};

    pub use crate::scheme::{Lbvrf, Lbvrf128, PubParam, PublicKey, SecretKey};
}
