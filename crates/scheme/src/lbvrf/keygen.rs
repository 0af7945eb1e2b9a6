//! Key generation against a public matrix

use lbvrf_algorithms::poly::params::LbvrfQ;
use lbvrf_algorithms::poly::sampling::sample_bounded_element;
use lbvrf_algorithms::poly::{Matrix, PolyVec};
use lbvrf_algorithms::validate;
use lbvrf_algorithms::xof::{SeedStream, StreamDomain};
use lbvrf_params::pqc::lbvrf::LbvrfSchemeParams;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use super::{check_dimensions, PublicKey, SecretKey};
use crate::error::Result;

/// Deterministic key generation.
///
/// All `A_COL` secret elements come from a single secret-domain stream of
/// `key_seed`, consumed in order, so the same seed and matrix always give
/// the same key pair. The public vector is `t = A·s` with canonical
/// coefficients.
pub fn keygen_from_seed<P: LbvrfSchemeParams>(
    matrix: &Matrix<LbvrfQ>,
    key_seed: &[u8],
) -> Result<(PublicKey<P>, SecretKey<P>)> {
    validate::seed_length(key_seed.len(), P::SEED_BYTES)?;
    check_dimensions::<P>(matrix)?;
    trace_event!(debug, "{}: generating key pair", P::NAME);

    let mut stream = SeedStream::new(
        key_seed,
        P::DOMAIN_SALT,
        P::SECURITY_LEVEL,
        StreamDomain::Secret,
    )?;

    // Sampled in place so a failure part way through still wipes
    let mut sk = SecretKey::<P>::new(PolyVec::zero(P::A_COL)?);
    for poly in sk.vector_mut().polys.iter_mut() {
        *poly = sample_bounded_element::<LbvrfQ, _>(&mut stream, P::ETA)?;
    }

    let t = matrix.mul_vec(sk.vector())?;
    let pk = PublicKey::from_vector(t)?;

    trace_event!(debug, "{}: key pair ready", P::NAME);
    Ok((pk, sk))
}

/// Key generation from fresh randomness.
///
/// Draws a `SEED_BYTES` key seed from `rng` and hands it to
/// [`keygen_from_seed`]; the seed is wiped afterwards.
pub fn keygen<P: LbvrfSchemeParams, R: RngCore + CryptoRng + ?Sized>(
    matrix: &Matrix<LbvrfQ>,
    rng: &mut R,
) -> Result<(PublicKey<P>, SecretKey<P>)> {
    let mut key_seed = Zeroizing::new(vec![0u8; P::SEED_BYTES]);
    rng.fill_bytes(key_seed.as_mut_slice());
    keygen_from_seed::<P>(matrix, &key_seed)
}
