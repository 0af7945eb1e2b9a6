//! sampling.rs - Rejection sampling into ring elements
//!
//! Candidates are drawn with the minimal number of bytes for the modulus,
//! the top byte masked to the modulus bit length, assembled big-endian and
//! rejected when not below the modulus. Nothing is ever reduced into range,
//! so accepted values are exactly uniform.

use super::params::{bit_length, Modulus};
use super::polynomial::Polynomial;
use crate::error::{Error, Result};
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeLess;

/// Uniform sampler over `[0, modulus)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RejectionSampler {
    modulus: u32,
    nbytes: usize,
    top_mask: u8,
}

impl RejectionSampler {
    /// Sampler for values strictly below `modulus` (`modulus >= 2`)
    pub fn new(modulus: u32) -> Result<Self> {
        if modulus < 2 {
            return Err(Error::param("modulus", "rejection sampling needs a modulus of at least 2"));
        }
        let bits = bit_length(modulus - 1) as usize;
        let nbytes = bits.div_ceil(8);
        let top_bits = bits - 8 * (nbytes - 1);
        let top_mask = ((1u16 << top_bits) - 1) as u8;
        Ok(Self {
            modulus,
            nbytes,
            top_mask,
        })
    }

    /// The exclusive upper bound
    pub fn modulus(&self) -> u32 {
        self.modulus
    }

    /// Bytes consumed per candidate
    pub fn bytes_per_draw(&self) -> usize {
        self.nbytes
    }

    /// Mask applied to the most significant byte of a candidate
    pub fn top_mask(&self) -> u8 {
        self.top_mask
    }

    /// Assemble one masked candidate from raw bytes; `None` if it is rejected
    #[inline]
    pub fn candidate(&self, bytes: &[u8]) -> Option<u32> {
        let mut v = 0u32;
        for (i, &b) in bytes.iter().take(self.nbytes).enumerate() {
            let b = if i == 0 { b & self.top_mask } else { b };
            v = (v << 8) | b as u32;
        }
        bool::from(v.ct_lt(&self.modulus)).then_some(v)
    }

    /// Draw until a candidate is accepted
    pub fn sample<R: RngCore + ?Sized>(&self, rng: &mut R) -> u32 {
        let mut buf = [0u8; 4];
        loop {
            let draw = &mut buf[..self.nbytes];
            rng.fill_bytes(draw);
            if let Some(v) = self.candidate(draw) {
                return v;
            }
        }
    }
}

/// One uniform value in `[0, modulus)`
pub fn sample_below<R: RngCore + ?Sized>(rng: &mut R, modulus: u32) -> Result<u32> {
    Ok(RejectionSampler::new(modulus)?.sample(rng))
}

/// Trait for sampling polynomials uniformly at random
pub trait UniformSampler<M: Modulus> {
    /// Samples a polynomial with coefficients uniformly random in [0, Q-1]
    fn sample_uniform<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> Result<Polynomial<M>>;
}

/// Trait for sampling polynomials with small coefficients
pub trait BoundedSampler<M: Modulus> {
    /// Samples a polynomial with coefficients uniform in `[-eta, eta]`,
    /// stored canonically modulo Q
    fn sample_bounded<R: RngCore + CryptoRng + ?Sized>(
        rng: &mut R,
        eta: u32,
    ) -> Result<Polynomial<M>>;
}

/// Default implementation of the samplers
pub struct DefaultSamplers;

impl<M: Modulus> UniformSampler<M> for DefaultSamplers {
    fn sample_uniform<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> Result<Polynomial<M>> {
        let sampler = RejectionSampler::new(M::Q)?;
        let mut poly = Polynomial::<M>::zero();
        for c in poly.coeffs.iter_mut() {
            *c = sampler.sample(rng);
        }
        Ok(poly)
    }
}

impl<M: Modulus> BoundedSampler<M> for DefaultSamplers {
    fn sample_bounded<R: RngCore + CryptoRng + ?Sized>(
        rng: &mut R,
        eta: u32,
    ) -> Result<Polynomial<M>> {
        if eta as u64 * 2 >= M::Q as u64 {
            return Err(Error::param("eta", format!("bound {} too large for modulus {}", eta, M::Q)));
        }
        let sampler = RejectionSampler::new(2 * eta + 1)?;
        let q = M::Q as u64;
        let mut poly = Polynomial::<M>::zero();
        for c in poly.coeffs.iter_mut() {
            let v = sampler.sample(rng) as u64;
            *c = ((v + q - eta as u64) % q) as u32;
        }
        Ok(poly)
    }
}

/// Fill all N coefficients uniformly below Q from one continuing stream
pub fn sample_uniform_element<M: Modulus, R: RngCore + CryptoRng + ?Sized>(
    rng: &mut R,
) -> Result<Polynomial<M>> {
    <DefaultSamplers as UniformSampler<M>>::sample_uniform(rng)
}

/// Fill all N coefficients uniformly in `[-eta, eta]`
pub fn sample_bounded_element<M: Modulus, R: RngCore + CryptoRng + ?Sized>(
    rng: &mut R,
    eta: u32,
) -> Result<Polynomial<M>> {
    <DefaultSamplers as BoundedSampler<M>>::sample_bounded(rng, eta)
}
