//! params.rs - Polynomial ring parameters

use core::fmt::Debug;

use lbvrf_params::pqc::lbvrf::{LBVRF_CRT_D, LBVRF_D, LBVRF_P, LBVRF_Q};

/// Basic trait defining the modulus and degree for a polynomial ring
///
/// Implementors are zero-sized markers, so the derive bounds are part of the
/// trait to let `Polynomial<M>` derive its own impls.
pub trait Modulus: Copy + Clone + Debug + PartialEq + Eq + Default + Send + Sync + 'static {
    /// The primary modulus Q for coefficient arithmetic
    const Q: u32;

    /// The polynomial degree N (number of coefficients)
    const N: usize;
}

/// `Z_Q[x]/(x^256 + 1)`, the ring of the public matrix and keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LbvrfQ;

impl Modulus for LbvrfQ {
    const Q: u32 = LBVRF_Q;
    const N: usize = LBVRF_D;
}

/// `Z_P[x]/(x^256 + 1)`, the CRT-friendly ring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LbvrfP;

impl Modulus for LbvrfP {
    const Q: u32 = LBVRF_P;
    const N: usize = LBVRF_D;
}

/// Coefficient ring of one CRT component, `Z_P` with 32 coefficients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LbvrfCrtComponent;

impl Modulus for LbvrfCrtComponent {
    const Q: u32 = LBVRF_P;
    const N: usize = LBVRF_CRT_D;
}

/// Helper functions for parameter validation

/// Check if a number is prime (trial division)
pub fn is_prime(q: u32) -> bool {
    if q < 2 {
        return false;
    }
    if q % 2 == 0 {
        return q == 2;
    }
    let q = q as u64;
    let mut i = 3u64;
    while i * i <= q {
        if q % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Check if N is a power of 2
pub fn is_power_of_two(n: usize) -> bool {
    n > 0 && (n & (n - 1)) == 0
}

/// Number of bits needed to represent `x`
pub const fn bit_length(x: u32) -> u32 {
    u32::BITS - x.leading_zeros()
}

/// `base^exp mod m`
pub fn pow_mod(base: u32, mut exp: u64, m: u32) -> u32 {
    let m = m as u64;
    let mut acc = 1u64 % m;
    let mut b = base as u64 % m;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = acc * b % m;
        }
        b = b * b % m;
        exp >>= 1;
    }
    acc as u32
}

/// Inverse of `a` modulo the prime `m` (Fermat)
pub fn inv_mod(a: u32, m: u32) -> u32 {
    pow_mod(a, (m - 2) as u64, m)
}
