//! Deterministic seed stream
//!
//! The stream input is
//!
//! ```text
//! u16_be(len(salt)) || salt || u16_be(level) || tag || u16_be(nonce) || seed
//! ```
//!
//! absorbed into SHAKE128 for level 128 and SHAKE256 for levels 192 and 256.
//! `(tag, nonce)` come from the [`StreamDomain`], which is how matrix cells
//! and secret sampling get independent streams from one seed.

use core::fmt;

use lbvrf_params::pqc::lbvrf::LBVRF_SEED_BYTES;
use rand::{CryptoRng, RngCore};
use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::{Shake128, Shake128Reader, Shake256, Shake256Reader};

use super::{Shake128Algorithm, Shake256Algorithm, XofAlgorithm};
use crate::error::{validate, Error, Result};

/// Minimum seed length accepted by [`SeedStream::new`]
pub const MIN_SEED_BYTES: usize = LBVRF_SEED_BYTES;

/// Domain separation for a seed stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamDomain {
    /// Undifferentiated stream
    Plain,
    /// Stream for one cell of the public matrix
    MatrixCell {
        /// Row index, high byte of the nonce
        row: u8,
        /// Column index, low byte of the nonce
        col: u8,
    },
    /// Stream for secret vector sampling
    Secret,
}

impl StreamDomain {
    /// Domain for matrix cell `(row, col)`.
    ///
    /// Fails if either index does not fit into its nonce byte.
    pub fn matrix_cell(row: usize, col: usize) -> Result<Self> {
        let row = u8::try_from(row)
            .map_err(|_| Error::param("row", "matrix row does not fit the cell nonce"))?;
        let col = u8::try_from(col)
            .map_err(|_| Error::param("col", "matrix column does not fit the cell nonce"))?;
        Ok(StreamDomain::MatrixCell { row, col })
    }

    /// Domain tag byte
    pub fn tag(&self) -> u8 {
        match self {
            StreamDomain::Plain => 0x00,
            StreamDomain::MatrixCell { .. } => 0x01,
            StreamDomain::Secret => 0x02,
        }
    }

    /// 16-bit nonce; `(row << 8) | col` for matrix cells
    pub fn nonce(&self) -> u16 {
        match *self {
            StreamDomain::MatrixCell { row, col } => ((row as u16) << 8) | col as u16,
            _ => 0,
        }
    }
}

enum Reader {
    Shake128(Shake128Reader),
    Shake256(Shake256Reader),
}

/// Deterministic expandable byte stream keyed by seed, salt, level and domain
///
/// The seed itself is not retained; only the XOF reader is.
pub struct SeedStream {
    reader: Reader,
    security_level: u16,
    domain: StreamDomain,
    consumed: u64,
}

fn absorb<H: Update>(
    hasher: &mut H,
    seed: &[u8],
    salt: &[u8],
    salt_len: u16,
    security_level: u16,
    domain: StreamDomain,
) {
    hasher.update(&salt_len.to_be_bytes());
    hasher.update(salt);
    hasher.update(&security_level.to_be_bytes());
    hasher.update(&[domain.tag()]);
    hasher.update(&domain.nonce().to_be_bytes());
    hasher.update(seed);
}

impl SeedStream {
    /// Derive a stream from `(seed, salt, security_level, domain)`.
    ///
    /// The seed length is checked before anything is hashed.
    pub fn new(
        seed: &[u8],
        salt: &[u8],
        security_level: u16,
        domain: StreamDomain,
    ) -> Result<Self> {
        validate::seed_length(seed.len(), MIN_SEED_BYTES)?;
        let salt_len = u16::try_from(salt.len())
            .map_err(|_| Error::param("salt", "domain salt longer than 65535 bytes"))?;

        let reader = match security_level {
            128 => {
                let mut hasher = Shake128::default();
                absorb(&mut hasher, seed, salt, salt_len, security_level, domain);
                Reader::Shake128(hasher.finalize_xof())
            }
            192 | 256 => {
                let mut hasher = Shake256::default();
                absorb(&mut hasher, seed, salt, salt_len, security_level, domain);
                Reader::Shake256(hasher.finalize_xof())
            }
            _ => {
                return Err(Error::param(
                    "security_level",
                    "supported security levels are 128, 192 and 256",
                ))
            }
        };

        Ok(Self {
            reader,
            security_level,
            domain,
            consumed: 0,
        })
    }

    /// Fill `out` with the next unconsumed bytes of the stream
    pub fn fill(&mut self, out: &mut [u8]) {
        match &mut self.reader {
            Reader::Shake128(r) => r.read(out),
            Reader::Shake256(r) => r.read(out),
        }
        self.consumed = self.consumed.wrapping_add(out.len() as u64);
    }

    /// Return the next `n` unconsumed bytes of the stream
    pub fn next_bytes(&mut self, n: usize) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        out.try_reserve_exact(n)?;
        out.resize(n, 0);
        self.fill(&mut out);
        Ok(out)
    }

    /// Security level this stream was derived for
    pub fn security_level(&self) -> u16 {
        self.security_level
    }

    /// Domain this stream was derived for
    pub fn domain(&self) -> StreamDomain {
        self.domain
    }

    /// Name of the underlying XOF
    pub fn algorithm(&self) -> &'static str {
        match self.reader {
            Reader::Shake128(_) => Shake128Algorithm::name(),
            Reader::Shake256(_) => Shake256Algorithm::name(),
        }
    }

    /// Number of bytes handed out so far
    pub fn bytes_consumed(&self) -> u64 {
        self.consumed
    }
}

impl fmt::Debug for SeedStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedStream")
            .field("algorithm", &self.algorithm())
            .field("security_level", &self.security_level)
            .field("domain", &self.domain)
            .field("consumed", &self.consumed)
            .finish_non_exhaustive()
    }
}

impl RngCore for SeedStream {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill(&mut buf);
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill(&mut buf);
        u64::from_le_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.fill(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> core::result::Result<(), rand::Error> {
        self.fill(dest);
        Ok(())
    }
}

impl CryptoRng for SeedStream {}
