//! Lattice-based VRF: public parameter and key generation
//!
//! This crate derives the public matrix `A` from a seed, samples trinary
//! secret vectors and computes the public vector `t = A·s`, all
//! deterministically from caller seeds. The [`Lbvrf`] type implements the
//! [`lbvrf_api::Vrf`] trait; proving and verifying are declared by that
//! trait but not provided by this crate.
//!
//! With the `trace` feature, operation boundaries are emitted as `tracing`
//! events under the `lbvrf` target. Secret material is never recorded.

#![forbid(unsafe_code)]

#[cfg(feature = "trace")]
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {
        tracing::$level!(target: "lbvrf", $($arg)+)
    };
}

#[cfg(not(feature = "trace"))]
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {};
}

pub mod error;
pub mod lbvrf;

pub use error::{Error, Result};
pub use lbvrf::{Lbvrf, Lbvrf128, Proof, PubParam, PublicKey, SecretKey, VrfOutput};
