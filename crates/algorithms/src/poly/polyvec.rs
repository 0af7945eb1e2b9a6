//! polyvec.rs - Fixed-length vectors of ring elements
//!
//! One length-parameterised type covers both the A_ROW-long public vector and
//! the A_COL-long secret vector. Binary operations check that both operands
//! have the same length.

use super::params::Modulus;
use super::polynomial::Polynomial;
use crate::error::{validate, Error, Result};
use zeroize::Zeroize;

/// A vector of ring elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolyVec<M: Modulus> {
    /// The elements, in order
    pub polys: Vec<Polynomial<M>>,
}

impl<M: Modulus> Zeroize for PolyVec<M> {
    fn zeroize(&mut self) {
        for poly in self.polys.iter_mut() {
            poly.zeroize();
        }
    }
}

impl<M: Modulus> PolyVec<M> {
    /// Vector of `len` zero polynomials
    pub fn zero(len: usize) -> Result<Self> {
        let mut polys = Vec::new();
        polys.try_reserve_exact(len)?;
        polys.resize_with(len, Polynomial::zero);
        Ok(Self { polys })
    }

    /// Wrap existing polynomials
    pub fn from_polys(polys: Vec<Polynomial<M>>) -> Self {
        Self { polys }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.polys.len()
    }

    /// True for the empty vector
    pub fn is_empty(&self) -> bool {
        self.polys.is_empty()
    }

    /// Slice view of the elements
    pub fn as_slice(&self) -> &[Polynomial<M>] {
        &self.polys
    }

    /// Iterate over the elements
    pub fn iter(&self) -> core::slice::Iter<'_, Polynomial<M>> {
        self.polys.iter()
    }

    /// Bounds-checked element access
    pub fn get(&self, i: usize) -> Result<&Polynomial<M>> {
        validate::index("polynomial vector index", i, self.polys.len())?;
        Ok(&self.polys[i])
    }

    fn check_same_len(&self, other: &Self) -> Result<()> {
        validate::length("polynomial vector", other.len(), self.len())
    }

    /// Element-wise sum, no reduction
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_same_len(other)?;
        let mut polys = Vec::new();
        polys.try_reserve_exact(self.len())?;
        for (a, b) in self.polys.iter().zip(other.polys.iter()) {
            polys.push(a.add(b)?);
        }
        Ok(Self { polys })
    }

    /// Element-wise difference, `self + 2Q - other`.
    ///
    /// Fails if any coefficient of `other` is not below `2Q`.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_same_len(other)?;
        let mut polys = Vec::new();
        polys.try_reserve_exact(self.len())?;
        for (a, b) in self.polys.iter().zip(other.polys.iter()) {
            polys.push(a.sub(b)?);
        }
        Ok(Self { polys })
    }

    /// Bring every coefficient of every element into `[0, Q)`
    pub fn reduce(&mut self) {
        for poly in self.polys.iter_mut() {
            poly.reduce();
        }
    }

    /// One conditional subtraction of Q on every coefficient
    pub fn csubq(&mut self) {
        for poly in self.polys.iter_mut() {
            poly.csubq();
        }
    }

    /// True when every coefficient is canonical
    pub fn is_canonical(&self) -> bool {
        self.polys.iter().all(Polynomial::is_canonical)
    }

    /// Returns true ("violated") if any centered coefficient of any element
    /// has magnitude `>= bound`
    pub fn check_norm(&self, bound: u32) -> bool {
        self.polys.iter().any(|p| p.check_norm(bound))
    }

    /// Largest centered coefficient magnitude over all elements
    pub fn infinity_norm(&self) -> u32 {
        self.polys
            .iter()
            .map(Polynomial::infinity_norm)
            .max()
            .unwrap_or(0)
    }

    /// `Σ self[i] · other[i]`, canonical
    pub fn inner_product(&self, other: &Self) -> Result<Polynomial<M>> {
        inner_product(&self.polys, &other.polys)
    }
}

/// `Σ a[i] · b[i]` over the ring; the result is canonical.
///
/// Each product is canonical, so one conditional subtraction after every
/// addition keeps the accumulator below Q.
pub fn inner_product<M: Modulus>(a: &[Polynomial<M>], b: &[Polynomial<M>]) -> Result<Polynomial<M>> {
    if a.len() != b.len() {
        return Err(Error::Length {
            context: "inner product",
            expected: a.len(),
            actual: b.len(),
        });
    }
    let mut acc = Polynomial::<M>::zero();
    for (x, y) in a.iter().zip(b.iter()) {
        acc.add_assign(&x.schoolbook_mul(y))?;
        acc.csubq();
    }
    Ok(acc)
}
