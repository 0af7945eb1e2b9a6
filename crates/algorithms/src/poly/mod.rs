//! Polynomial ring engine
//!
//! Ring elements over `Z_M[x]/(x^N + 1)`, length-parameterised vectors and
//! row-major matrices of them, the rejection samplers that produce them, and
//! the CRT split of the P ring.

pub mod crt;
pub mod matrix;
pub mod params;
pub mod polynomial;
pub mod polyvec;
pub mod sampling;
pub mod serialize;

pub use matrix::Matrix;
pub use polynomial::Polynomial;
pub use polyvec::{inner_product, PolyVec};

/// Prelude for easy importing of common polynomial types and traits.
pub mod prelude {
    pub use super::crt::{CrtContext, CrtRingElement};
    pub use super::matrix::Matrix;
    pub use super::params::{LbvrfCrtComponent, LbvrfP, LbvrfQ, Modulus};
    pub use super::polynomial::Polynomial;
    pub use super::polyvec::{inner_product, PolyVec};
    pub use super::sampling::{
        sample_below, sample_bounded_element, sample_uniform_element, BoundedSampler,
        DefaultSamplers, RejectionSampler, UniformSampler,
    };
    pub use super::serialize::{CoefficientPacker, CoefficientUnpacker, DefaultCoefficientSerde};
}
