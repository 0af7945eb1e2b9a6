//! polynomial.rs - Ring elements and coefficient arithmetic

use core::marker::PhantomData;
use core::ops::{Mul, Neg};

use super::params::Modulus;
use crate::error::{Error, Result};
use zeroize::Zeroize;

/// A polynomial in a ring R_Q = Z_Q[X]/(X^N + 1)
///
/// Coefficients are stored in standard representation. Generated elements are
/// canonical (every coefficient in `[0, Q)`); `add` and `sub` may leave values
/// above `Q` until [`reduce`](Self::reduce) or [`csubq`](Self::csubq) is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial<M: Modulus> {
    /// Coefficients of the polynomial, lowest degree first
    pub coeffs: Vec<u32>,
    _marker: PhantomData<M>,
}

impl<M: Modulus> Zeroize for Polynomial<M> {
    fn zeroize(&mut self) {
        self.coeffs.zeroize();
    }
}

impl<M: Modulus> Default for Polynomial<M> {
    fn default() -> Self {
        Self::zero()
    }
}

/// Signed representative of minimal magnitude for a canonical residue
#[inline(always)]
pub fn centered_coefficient<M: Modulus>(c: u32) -> i64 {
    let c = c % M::Q;
    if c > M::Q / 2 {
        c as i64 - M::Q as i64
    } else {
        c as i64
    }
}

impl<M: Modulus> Polynomial<M> {
    /// Creates a new polynomial with all coefficients set to zero
    pub fn zero() -> Self {
        Self {
            coeffs: vec![0; M::N],
            _marker: PhantomData,
        }
    }

    /// Creates a polynomial from a slice of coefficients
    pub fn from_coeffs(coeffs_slice: &[u32]) -> Result<Self> {
        if coeffs_slice.len() != M::N {
            return Err(Error::Length {
                context: "polynomial coefficients",
                expected: M::N,
                actual: coeffs_slice.len(),
            });
        }
        Ok(Self {
            coeffs: coeffs_slice.to_vec(),
            _marker: PhantomData,
        })
    }

    /// Creates a canonical polynomial from signed coefficients
    pub fn from_signed(coeffs_slice: &[i64]) -> Result<Self> {
        if coeffs_slice.len() != M::N {
            return Err(Error::Length {
                context: "polynomial coefficients",
                expected: M::N,
                actual: coeffs_slice.len(),
            });
        }
        let q = M::Q as i64;
        Ok(Self {
            coeffs: coeffs_slice
                .iter()
                .map(|&c| c.rem_euclid(q) as u32)
                .collect(),
            _marker: PhantomData,
        })
    }

    /// Returns the degree N of the polynomial
    pub fn degree() -> usize {
        M::N
    }

    /// Returns the modulus Q for coefficient arithmetic
    pub fn modulus_q() -> u32 {
        M::Q
    }

    /// Returns a slice view of the coefficients
    pub fn as_coeffs_slice(&self) -> &[u32] {
        &self.coeffs
    }

    /// Returns a mutable slice view of the coefficients
    pub fn as_mut_coeffs_slice(&mut self) -> &mut [u32] {
        &mut self.coeffs
    }

    /// True when every coefficient is in `[0, Q)`
    pub fn is_canonical(&self) -> bool {
        self.coeffs.iter().all(|&c| c < M::Q)
    }

    /// Coefficient-wise sum without reduction.
    ///
    /// Fails if any coefficient sum does not fit in 32 bits.
    pub fn add(&self, other: &Self) -> Result<Self> {
        let mut result = self.clone();
        result.add_assign(other)?;
        Ok(result)
    }

    /// In-place coefficient-wise sum without reduction; `self` is left
    /// unchanged on overflow
    pub fn add_assign(&mut self, other: &Self) -> Result<()> {
        if self
            .coeffs
            .iter()
            .zip(other.coeffs.iter())
            .any(|(&a, &b)| a.checked_add(b).is_none())
        {
            return Err(Error::param("summand", "coefficient sum overflows 32 bits"));
        }
        for (a, &b) in self.coeffs.iter_mut().zip(other.coeffs.iter()) {
            *a += b;
        }
        Ok(())
    }

    /// Coefficient-wise difference, computed as `self + 2Q - other`.
    ///
    /// Every coefficient of `other` must be below `2Q`; the result is not
    /// reduced.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        let two_q = 2 * M::Q;
        let mut result = Self::zero();
        for ((r, &a), &b) in result
            .coeffs
            .iter_mut()
            .zip(self.coeffs.iter())
            .zip(other.coeffs.iter())
        {
            if b >= two_q {
                return Err(Error::param(
                    "subtrahend",
                    "coefficient not below twice the modulus",
                ));
            }
            *r = a
                .checked_add(two_q - b)
                .ok_or_else(|| Error::param("minuend", "coefficient overflows 32 bits"))?;
        }
        Ok(result)
    }

    /// Brings every coefficient into `[0, Q)`
    pub fn reduce(&mut self) {
        for c in self.coeffs.iter_mut() {
            *c %= M::Q;
        }
    }

    /// One branch-free conditional subtraction of Q per coefficient.
    ///
    /// Canonicalises coefficients known to be below `2Q`.
    pub fn csubq(&mut self) {
        for c in self.coeffs.iter_mut() {
            *c = Self::reduce_coefficient(*c);
        }
    }

    /// Branch-free conditional subtraction of a single coefficient
    #[inline(always)]
    fn reduce_coefficient(a: u32) -> u32 {
        let q = M::Q;
        let mask = ((a >= q) as u32).wrapping_neg();
        a.wrapping_sub(q & mask)
    }

    /// Centered (signed, minimal magnitude) coefficients
    pub fn centered(&self) -> Vec<i64> {
        self.coeffs
            .iter()
            .map(|&c| centered_coefficient::<M>(c))
            .collect()
    }

    /// Largest centered coefficient magnitude
    pub fn infinity_norm(&self) -> u32 {
        self.coeffs
            .iter()
            .map(|&c| centered_coefficient::<M>(c).unsigned_abs() as u32)
            .max()
            .unwrap_or(0)
    }

    /// Returns true when the norm bound is violated, i.e. some centered
    /// coefficient has magnitude `>= bound`
    pub fn check_norm(&self, bound: u32) -> bool {
        self.coeffs
            .iter()
            .any(|&c| centered_coefficient::<M>(c).unsigned_abs() >= bound as u64)
    }

    /// Polynomial negation modulo Q
    pub fn neg(&self) -> Self {
        let mut result = Self::zero();
        for (r, &c) in result.coeffs.iter_mut().zip(self.coeffs.iter()) {
            let c = c % M::Q;
            // Mask is 0xFFFF_FFFF when coeff ≠ 0, 0 otherwise
            let mask = ((c != 0) as u32).wrapping_neg();
            *r = (M::Q - c) & mask;
        }
        result
    }

    /// Negacyclic schoolbook multiplication; result is canonical.
    ///
    /// Operands are reduced first, so each product is below `Q^2`; positive
    /// and wrapped terms accumulate separately and are combined at the end.
    pub fn schoolbook_mul(&self, other: &Self) -> Self {
        let n = M::N;
        let q = M::Q as u64;
        let a: Vec<u64> = self.coeffs.iter().map(|&c| (c % M::Q) as u64).collect();
        let b: Vec<u64> = other.coeffs.iter().map(|&c| (c % M::Q) as u64).collect();

        let mut pos = vec![0u64; n];
        let mut neg = vec![0u64; n];
        for (i, &ai) in a.iter().enumerate() {
            if ai == 0 {
                continue;
            }
            for (j, &bj) in b.iter().enumerate() {
                let prod = (ai * bj) % q;
                let k = i + j;
                if k < n {
                    pos[k] += prod;
                } else {
                    // x^N = -1
                    neg[k - n] += prod;
                }
            }
        }

        let mut result = Self::zero();
        for (r, (&p, &m)) in result.coeffs.iter_mut().zip(pos.iter().zip(neg.iter())) {
            *r = ((p % q + q - m % q) % q) as u32;
        }
        result
    }

    /// Reduces coefficients of an element of another ring with the same
    /// degree into this ring (`c mod M::Q` per coefficient)
    pub fn from_other<O: Modulus>(other: &Polynomial<O>) -> Result<Self> {
        if O::N != M::N {
            return Err(Error::Length {
                context: "ring degree",
                expected: M::N,
                actual: O::N,
            });
        }
        Ok(Self {
            coeffs: other.coeffs.iter().map(|&c| c % M::Q).collect(),
            _marker: PhantomData,
        })
    }
}

// Implement standard ops traits for ergonomic usage
impl<M: Modulus> Neg for Polynomial<M> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Polynomial::neg(&self)
    }
}

impl<M: Modulus> Neg for &Polynomial<M> {
    type Output = Polynomial<M>;

    fn neg(self) -> Self::Output {
        Polynomial::neg(self)
    }
}

impl<M: Modulus> Mul for &Polynomial<M> {
    type Output = Polynomial<M>;

    fn mul(self, other: Self) -> Self::Output {
        self.schoolbook_mul(other)
    }
}
