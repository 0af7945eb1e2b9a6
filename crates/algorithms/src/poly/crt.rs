//! crt.rs - CRT splitting of `Z_P[x]/(x^256 + 1)`
//!
//! With `ζ = P - R` a primitive 16th root of unity mod P,
//!
//! ```text
//! x^256 + 1 = Π_{k=0..7} (x^32 - ζ_k),   ζ_k = ζ^(2k+1)
//! ```
//!
//! Writing `a = Σ_j A_j(x) · x^(32j)`, component `k` is `Σ_j A_j(x) · ζ_k^j`
//! (since `x^32 ≡ ζ_k`), and the inverse is the 8-point transform
//! `A_j = 8^{-1} Σ_k part_k · ζ_k^{-j}`. Component 0 is the reduction
//! modulo `x^32 + R`.

use lbvrf_params::pqc::lbvrf::{LBVRF_CRT_COMPONENTS, LBVRF_CRT_D, LBVRF_P, LBVRF_R};

use super::params::{inv_mod, is_prime, pow_mod, LbvrfCrtComponent, LbvrfP, Modulus};
use super::polynomial::Polynomial;
use crate::error::{validate, Error, Result};

const K: usize = LBVRF_CRT_COMPONENTS;
const D: usize = LBVRF_CRT_D;

/// Element of one component ring `Z_P[x]/(x^32 - ζ_k)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrtRingElement {
    root: u32,
    /// Coefficients, canonical mod P
    pub poly: Polynomial<LbvrfCrtComponent>,
}

impl CrtRingElement {
    /// Element with reduction rule `x^32 = root`
    pub fn new(root: u32, poly: Polynomial<LbvrfCrtComponent>) -> Self {
        Self { root, poly }
    }

    /// Zero element of the component with root `root`
    pub fn zero(root: u32) -> Self {
        Self::new(root, Polynomial::zero())
    }

    /// The component root `ζ_k`
    pub fn root(&self) -> u32 {
        self.root
    }

    fn same_component(&self, other: &Self) -> Result<()> {
        validate::parameter(
            self.root == other.root,
            "crt component",
            "operands belong to different component rings",
        )
    }

    /// Canonical sum
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.same_component(other)?;
        let mut poly = self.poly.add(&other.poly)?;
        poly.reduce();
        Ok(Self::new(self.root, poly))
    }

    /// Product in `Z_P[x]/(x^32 - root)`, schoolbook with `x^32 → root`
    pub fn mul(&self, other: &Self) -> Result<Self> {
        self.same_component(other)?;
        let p = LbvrfCrtComponent::Q as u64;
        let mut wide = [0u64; 2 * D];
        for (i, &a) in self.poly.coeffs.iter().enumerate() {
            if a == 0 {
                continue;
            }
            for (j, &b) in other.poly.coeffs.iter().enumerate() {
                wide[i + j] = (wide[i + j] + a as u64 * b as u64) % p;
            }
        }
        let root = self.root as u64;
        let mut poly = Polynomial::<LbvrfCrtComponent>::zero();
        for (i, c) in poly.coeffs.iter_mut().enumerate() {
            *c = ((wide[i] + root * wide[i + D]) % p) as u32;
        }
        Ok(Self::new(self.root, poly))
    }
}

/// Precomputed roots for splitting and recombining
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrtContext {
    roots: [u32; K],
    // powers[k][j] = ζ_k^j, inv_powers[k][j] = ζ_k^{-j}
    powers: [[u32; K]; K],
    inv_powers: [[u32; K]; K],
    inv_k: u32,
}

impl CrtContext {
    /// Build the context for the scheme constants.
    ///
    /// Fails unless P is prime, `P ≡ 1 (mod 16)` and `R^8 ≡ -1 (mod P)`,
    /// i.e. unless `x^32 + R` really divides `x^256 + 1` mod P.
    pub fn new() -> Result<Self> {
        Self::with_constants(LBVRF_P, LBVRF_R)
    }

    /// Build and validate a context for `(p, r)`
    pub fn with_constants(p: u32, r: u32) -> Result<Self> {
        validate::parameter(p == LbvrfP::Q, "p", "context is bound to the P ring modulus")?;
        validate::parameter(is_prime(p), "p", "modulus is not prime")?;
        validate::parameter(p % (2 * K as u32) == 1, "p", "modulus is not 1 mod 16")?;
        validate::parameter(r > 0 && r < p, "r", "root out of range")?;
        if pow_mod(r, K as u64, p) != p - 1 {
            return Err(Error::param("r", "x^32 + R does not divide x^256 + 1 mod P"));
        }

        let zeta = p - r;
        let mut roots = [0u32; K];
        let mut powers = [[0u32; K]; K];
        let mut inv_powers = [[0u32; K]; K];
        for k in 0..K {
            let root = pow_mod(zeta, (2 * k + 1) as u64, p);
            let inv_root = inv_mod(root, p);
            roots[k] = root;
            for j in 0..K {
                powers[k][j] = pow_mod(root, j as u64, p);
                inv_powers[k][j] = pow_mod(inv_root, j as u64, p);
            }
        }

        Ok(Self {
            roots,
            powers,
            inv_powers,
            inv_k: inv_mod(K as u32, p),
        })
    }

    /// Component roots `ζ_0 .. ζ_7`
    pub fn roots(&self) -> &[u32; K] {
        &self.roots
    }

    /// Image of `a` in component `k`
    pub fn project(&self, a: &Polynomial<LbvrfP>, k: usize) -> Result<CrtRingElement> {
        validate::index("crt component", k, K)?;
        let p = LbvrfP::Q as u64;
        let mut poly = Polynomial::<LbvrfCrtComponent>::zero();
        for (i, c) in poly.coeffs.iter_mut().enumerate() {
            let mut acc = 0u64;
            for j in 0..K {
                let coeff = (a.coeffs[D * j + i] % LbvrfP::Q) as u64;
                acc = (acc + coeff * self.powers[k][j] as u64) % p;
            }
            *c = acc as u32;
        }
        Ok(CrtRingElement::new(self.roots[k], poly))
    }

    /// All eight components of `a`
    pub fn split(&self, a: &Polynomial<LbvrfP>) -> Result<Vec<CrtRingElement>> {
        (0..K).map(|k| self.project(a, k)).collect()
    }

    /// Recombine eight components into a canonical ring element
    pub fn combine(&self, parts: &[CrtRingElement]) -> Result<Polynomial<LbvrfP>> {
        validate::length("crt components", parts.len(), K)?;
        for (part, &root) in parts.iter().zip(self.roots.iter()) {
            validate::parameter(part.root == root, "crt component", "components out of order")?;
        }

        let p = LbvrfP::Q as u64;
        let mut out = Polynomial::<LbvrfP>::zero();
        for j in 0..K {
            for i in 0..D {
                let mut acc = 0u64;
                for (k, part) in parts.iter().enumerate() {
                    acc = (acc + part.poly.coeffs[i] as u64 * self.inv_powers[k][j] as u64) % p;
                }
                out.coeffs[D * j + i] = (acc * self.inv_k as u64 % p) as u32;
            }
        }
        Ok(out)
    }

    /// Ring product through the split: `combine(split(a) ⊙ split(b))`
    pub fn crt_mul(
        &self,
        a: &Polynomial<LbvrfP>,
        b: &Polynomial<LbvrfP>,
    ) -> Result<Polynomial<LbvrfP>> {
        let sa = self.split(a)?;
        let sb = self.split(b)?;
        let prod = sa
            .iter()
            .zip(sb.iter())
            .map(|(x, y)| x.mul(y))
            .collect::<Result<Vec<_>>>()?;
        self.combine(&prod)
    }
}

/// Reduce an element of `Z_P[x]/(x^256 + 1)` modulo `x^32 + R`
pub fn reduce_mod_x32_plus_r(a: &Polynomial<LbvrfP>) -> Result<Polynomial<LbvrfCrtComponent>> {
    Ok(CrtContext::new()?.project(a, 0)?.poly)
}
