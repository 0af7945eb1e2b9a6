//! LB-VRF public parameter and key generation
//!
//! A parameter set fixes a `A_ROW × A_COL` module over `Z_Q[x]/(x^256 + 1)`.
//! Generation runs in two deterministic steps:
//!
//! 1. `paramgen(seed)`: every cell `A[i][j]` is sampled uniformly below `Q`
//!    from its own seed stream, domain separated by `(i, j)`.
//! 2. `keygen(seed, pp)`: a secret vector `s` of `A_COL` elements with
//!    coefficients in `[-ETA, ETA]` is drawn from one continuing stream, and
//!    the public vector is `t = A·s`.
//!
//! Submodules:
//! - `matrix.rs`: sequential and data-parallel expansion of `A`
//! - `keygen.rs`: secret sampling and the public vector
//! - `encoding.rs`: byte formats for public parameters and public keys

use core::fmt;
use core::marker::PhantomData;

use lbvrf_algorithms::poly::params::{LbvrfCrtComponent, LbvrfQ};
use lbvrf_algorithms::poly::{Matrix, PolyVec, Polynomial};
use lbvrf_api::{Result as ApiResult, Vrf};
use lbvrf_params::pqc::lbvrf::{Lbvrf128Params, LbvrfSchemeParams};
use rand::{CryptoRng, RngCore};
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, Result};

mod encoding;
mod keygen;
mod matrix;

pub use encoding::PUBLIC_KEY_PACKED_BITS;
pub use keygen::{keygen, keygen_from_seed};
#[cfg(feature = "parallel")]
pub use matrix::expand_matrix_parallel;
pub use matrix::{expand_cell, expand_matrix};

/// Public parameters: the matrix `A`
pub struct PubParam<P: LbvrfSchemeParams> {
    matrix: Matrix<LbvrfQ>,
    _params: PhantomData<P>,
}

impl<P: LbvrfSchemeParams> PubParam<P> {
    /// Wrap a matrix, checking it has the dimensions of the parameter set
    pub fn from_matrix(matrix: Matrix<LbvrfQ>) -> Result<Self> {
        check_dimensions::<P>(&matrix)?;
        Ok(Self {
            matrix,
            _params: PhantomData,
        })
    }

    /// The public matrix `A`
    pub fn matrix(&self) -> &Matrix<LbvrfQ> {
        &self.matrix
    }

    /// Take ownership of the expanded matrix
    pub fn into_matrix(self) -> Matrix<LbvrfQ> {
        self.matrix
    }
}

// Manual impls avoid requiring the marker type to implement them
impl<P: LbvrfSchemeParams> Clone for PubParam<P> {
    fn clone(&self) -> Self {
        Self {
            matrix: self.matrix.clone(),
            _params: PhantomData,
        }
    }
}

impl<P: LbvrfSchemeParams> PartialEq for PubParam<P> {
    fn eq(&self, other: &Self) -> bool {
        self.matrix == other.matrix
    }
}

impl<P: LbvrfSchemeParams> Eq for PubParam<P> {}

impl<P: LbvrfSchemeParams> fmt::Debug for PubParam<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PubParam")
            .field("scheme", &P::NAME)
            .field("rows", &self.matrix.rows())
            .field("cols", &self.matrix.cols())
            .finish()
    }
}

/// Public key: the vector `t = A·s` of `A_ROW` canonical elements
pub struct PublicKey<P: LbvrfSchemeParams> {
    t: PolyVec<LbvrfQ>,
    _params: PhantomData<P>,
}

impl<P: LbvrfSchemeParams> PublicKey<P> {
    /// Wrap a public vector, checking its length and that it is canonical
    pub fn from_vector(t: PolyVec<LbvrfQ>) -> Result<Self> {
        if t.len() != P::A_ROW {
            return Err(Error::InvalidParameter(format!(
                "{} public vector needs {} elements, got {}",
                P::NAME,
                P::A_ROW,
                t.len()
            )));
        }
        if !t.is_canonical() {
            return Err(Error::InvalidParameter(
                "public vector coefficients must be below Q".into(),
            ));
        }
        Ok(Self {
            t,
            _params: PhantomData,
        })
    }

    /// The public vector
    pub fn vector(&self) -> &PolyVec<LbvrfQ> {
        &self.t
    }
}

impl<P: LbvrfSchemeParams> Clone for PublicKey<P> {
    fn clone(&self) -> Self {
        Self {
            t: self.t.clone(),
            _params: PhantomData,
        }
    }
}

impl<P: LbvrfSchemeParams> PartialEq for PublicKey<P> {
    fn eq(&self, other: &Self) -> bool {
        self.t == other.t
    }
}

impl<P: LbvrfSchemeParams> Eq for PublicKey<P> {}

impl<P: LbvrfSchemeParams> fmt::Debug for PublicKey<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("scheme", &P::NAME)
            .field("t", &self.t)
            .finish()
    }
}

/// Secret key: the short vector `s` of `A_COL` elements.
///
/// Coefficients are stored canonically, so `-1` is held as `Q - 1`. The
/// vector is wiped on drop and never printed.
pub struct SecretKey<P: LbvrfSchemeParams> {
    s: PolyVec<LbvrfQ>,
    _params: PhantomData<P>,
}

impl<P: LbvrfSchemeParams> SecretKey<P> {
    pub(crate) fn new(s: PolyVec<LbvrfQ>) -> Self {
        Self {
            s,
            _params: PhantomData,
        }
    }

    /// The secret vector
    pub fn vector(&self) -> &PolyVec<LbvrfQ> {
        &self.s
    }

    pub(crate) fn vector_mut(&mut self) -> &mut PolyVec<LbvrfQ> {
        &mut self.s
    }

    /// Coefficients in centered form, one row per element
    pub fn centered(&self) -> Vec<Vec<i64>> {
        self.s.iter().map(Polynomial::centered).collect()
    }
}

impl<P: LbvrfSchemeParams> Clone for SecretKey<P> {
    fn clone(&self) -> Self {
        Self::new(self.s.clone())
    }
}

impl<P: LbvrfSchemeParams> Zeroize for SecretKey<P> {
    fn zeroize(&mut self) {
        self.s.zeroize();
    }
}

impl<P: LbvrfSchemeParams> Drop for SecretKey<P> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<P: LbvrfSchemeParams> ZeroizeOnDrop for SecretKey<P> {}

impl<P: LbvrfSchemeParams> ConstantTimeEq for SecretKey<P> {
    fn ct_eq(&self, other: &Self) -> Choice {
        if self.s.len() != other.s.len() {
            return Choice::from(0);
        }
        let mut acc = Choice::from(1);
        for (a, b) in self.s.iter().zip(other.s.iter()) {
            acc &= a.as_coeffs_slice().ct_eq(b.as_coeffs_slice());
        }
        acc
    }
}

impl<P: LbvrfSchemeParams> fmt::Debug for SecretKey<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("scheme", &P::NAME)
            .field("s", &"[REDACTED]")
            .finish()
    }
}

/// VRF output: one element of a degree-32 CRT component ring mod P
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VrfOutput {
    /// Output element, coefficients canonical mod `P`
    pub v: Polynomial<LbvrfCrtComponent>,
}

/// VRF proof `(z, c, v)`
#[derive(Clone, Debug)]
pub struct Proof {
    /// Response vector, `A_COL` elements
    pub z: PolyVec<LbvrfQ>,
    /// Challenge polynomial of weight `KAPPA`
    pub c: Polynomial<LbvrfQ>,
    /// Claimed output
    pub v: VrfOutput,
}

/// Generic LB-VRF instantiation
pub struct Lbvrf<P: LbvrfSchemeParams> {
    _params: PhantomData<P>,
}

/// The reference 4 × 9 parameter set at 128-bit stream security
pub type Lbvrf128 = Lbvrf<Lbvrf128Params>;

impl<P: LbvrfSchemeParams> Lbvrf<P> {
    /// Expand the public matrix on the rayon pool, stopping early once
    /// `cancel` is set.
    ///
    /// The result is identical to [`Vrf::paramgen`]; a cancelled run
    /// returns `Error::Cancelled` and no partial matrix.
    #[cfg(feature = "parallel")]
    pub fn paramgen_parallel(
        seed: &[u8],
        cancel: &core::sync::atomic::AtomicBool,
    ) -> ApiResult<PubParam<P>> {
        let matrix = expand_matrix_parallel::<P>(seed, cancel)?;
        Ok(PubParam::from_matrix(matrix)?)
    }
}

impl<P: LbvrfSchemeParams> Vrf for Lbvrf<P> {
    type PubParam = PubParam<P>;
    type PublicKey = PublicKey<P>;
    type SecretKey = SecretKey<P>;
    type Proof = Proof;
    type Output = VrfOutput;

    fn name() -> &'static str {
        P::NAME
    }

    fn paramgen(seed: &[u8]) -> ApiResult<Self::PubParam> {
        let matrix = expand_matrix::<P>(seed)?;
        Ok(PubParam::from_matrix(matrix)?)
    }

    fn keygen(seed: &[u8], pp: &Self::PubParam) -> ApiResult<(Self::PublicKey, Self::SecretKey)> {
        Ok(keygen_from_seed::<P>(pp.matrix(), seed)?)
    }

    fn keypair<R: CryptoRng + RngCore>(
        rng: &mut R,
        pp: &Self::PubParam,
    ) -> ApiResult<(Self::PublicKey, Self::SecretKey)> {
        Ok(keygen::<P, R>(pp.matrix(), rng)?)
    }

    fn prove(
        _message: &[u8],
        _pp: &Self::PubParam,
        _pk: &Self::PublicKey,
        _sk: &Self::SecretKey,
        _seed: &[u8],
    ) -> ApiResult<Self::Proof> {
        Err(Error::NotImplemented("LB-VRF prove").into())
    }

    fn verify(
        _message: &[u8],
        _pp: &Self::PubParam,
        _pk: &Self::PublicKey,
        _proof: &Self::Proof,
    ) -> ApiResult<Option<Self::Output>> {
        Err(Error::NotImplemented("LB-VRF verify").into())
    }
}

pub(crate) fn check_dimensions<P: LbvrfSchemeParams>(matrix: &Matrix<LbvrfQ>) -> Result<()> {
    if matrix.rows() != P::A_ROW || matrix.cols() != P::A_COL {
        return Err(Error::InvalidParameter(format!(
            "{} expects a {}x{} matrix, got {}x{}",
            P::NAME,
            P::A_ROW,
            P::A_COL,
            matrix.rows(),
            matrix.cols()
        )));
    }
    Ok(())
}
