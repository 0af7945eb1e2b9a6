//! Verifiable random function traits
//!
//! A VRF here is split into four steps: public parameter generation from a
//! seed, key generation against those parameters, and the prove / verify
//! pair. Parameter and key generation are fully deterministic given their
//! seeds, which is what makes reproducible test vectors possible.

use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Core trait for verifiable random functions
pub trait Vrf {
    /// Public parameters shared by every key pair of an instantiation
    type PubParam: Clone;

    /// Public key type
    type PublicKey: Clone;

    /// Secret key type - must be zeroizable
    type SecretKey: Zeroize;

    /// Proof produced by `prove`
    type Proof: Clone;

    /// Pseudorandom output recovered by `verify`
    type Output;

    /// Returns the name of this VRF instantiation
    fn name() -> &'static str;

    /// Derive public parameters from a seed.
    ///
    /// Fails with `Error::InvalidSeedLength` before any derivation if the
    /// seed is shorter than the instantiation minimum.
    fn paramgen(seed: &[u8]) -> Result<Self::PubParam>;

    /// Deterministically derive a key pair from a seed
    fn keygen(seed: &[u8], pp: &Self::PubParam) -> Result<(Self::PublicKey, Self::SecretKey)>;

    /// Generate a key pair from fresh randomness
    fn keypair<R: CryptoRng + RngCore>(
        rng: &mut R,
        pp: &Self::PubParam,
    ) -> Result<(Self::PublicKey, Self::SecretKey)>;

    /// Produce a proof for `message`
    fn prove(
        message: &[u8],
        pp: &Self::PubParam,
        pk: &Self::PublicKey,
        sk: &Self::SecretKey,
        seed: &[u8],
    ) -> Result<Self::Proof>;

    /// Check a proof, returning the VRF output when it is valid
    fn verify(
        message: &[u8],
        pp: &Self::PubParam,
        pk: &Self::PublicKey,
        proof: &Self::Proof,
    ) -> Result<Option<Self::Output>>;
}
