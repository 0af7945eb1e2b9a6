//! Lattice primitives for the lbvrf workspace
//!
//! This crate holds the building blocks that parameter and key generation are
//! assembled from:
//!
//! - [`xof::SeedStream`]: a domain-separated, deterministic byte stream
//!   expanded from a caller seed with SHAKE
//! - [`poly::sampling`]: unbiased rejection sampling below an arbitrary
//!   modulus, and the uniform / bounded ring element samplers built on it
//! - [`poly::Polynomial`], [`poly::PolyVec`], [`poly::Matrix`]: ring elements
//!   over `Z_M[x]/(x^N + 1)` and the containers the scheme works with
//! - [`poly::crt`]: the split of the P ring into eight degree-32 components
//!
//! Every fallible operation returns [`Result`]; nothing here panics on
//! caller input.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Polynomial ring arithmetic and sampling
pub mod poly;
pub use poly::{Matrix, PolyVec, Polynomial};

// Seed expansion
pub mod xof;
pub use xof::{SeedStream, StreamDomain};
