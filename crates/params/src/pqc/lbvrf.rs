//! Constants for the lattice-based VRF

/// Degree of the ring Z[x]/(x^D + 1)
pub const LBVRF_D: usize = 256;

/// Modulus for the `A part`: a 27-bit prime (0x6004001)
pub const LBVRF_Q: u32 = 100_679_681;

/// Modulus for the `B part`; P ≡ 1 (mod 16)
pub const LBVRF_P: u32 = 2_097_169;

/// Root s.t. (x^32 + R) divides (x^256 + 1) mod P, i.e. R^8 ≡ -1 (mod P)
pub const LBVRF_R: u32 = 852_368;

/// Degree of one CRT component ring Z_P[x]/(x^32 - ζ)
pub const LBVRF_CRT_D: usize = 32;

/// Number of CRT components of the P ring
pub const LBVRF_CRT_COMPONENTS: usize = LBVRF_D / LBVRF_CRT_D;

/// Minimum seed length in bytes
pub const LBVRF_SEED_BYTES: usize = 32;

/// Domain salt mixed into every seed stream of the scheme
pub const LBVRF_DOMAIN_SALT: &[u8] = b"lattice based cryptography is awesome!!!";

/// Common trait for LB-VRF parameter sets.
///
/// The rings are shared by every set: degree `LBVRF_D`, moduli `LBVRF_Q`
/// and `LBVRF_P`. A set only chooses dimensions, bounds and stream strength.
pub trait LbvrfSchemeParams: Send + Sync + 'static {
    /// Algorithm name
    const NAME: &'static str;

    // Matrix dimensions
    /// Rows of the public matrix A, length of the public vector
    const A_ROW: usize;
    /// Columns of the public matrix A, length of the secret vector
    const A_COL: usize;

    // Norm bounds
    /// Secret coefficients are sampled uniformly in [-ETA, ETA]
    const ETA: u32;
    /// Range of the masking vector
    const BETA: u32;
    /// Rejection bound BETA - KAPPA * ETA
    const THRESHOLD: u32;
    /// Hamming weight of the challenge polynomial
    const KAPPA: usize;

    // Seed stream
    /// Security level handed to the seed stream generator (bits)
    const SECURITY_LEVEL: u16;
    /// Minimum seed length
    const SEED_BYTES: usize = LBVRF_SEED_BYTES;
    /// Domain salt
    const DOMAIN_SALT: &'static [u8] = LBVRF_DOMAIN_SALT;
}

/// Reference parameter set: 4 x 9 module, trinary secrets, 128-bit streams
pub struct Lbvrf128Params;

impl LbvrfSchemeParams for Lbvrf128Params {
    const NAME: &'static str = "LB-VRF-128";
    const A_ROW: usize = 4;
    const A_COL: usize = 9;
    const ETA: u32 = 1;
    const BETA: u32 = 89_856;
    const THRESHOLD: u32 = 89_817;
    const KAPPA: usize = 39;
    const SECURITY_LEVEL: u16 = 128;
}
