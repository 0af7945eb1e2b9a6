//! Byte formats for public data.
//!
//! - `PubParam`: every cell of `A` in row-major order, each coefficient a
//!   little-endian `u32`
//! - `PublicKey`: the `A_ROW` elements of `t` in the same layout, or the
//!   compact form with 27 bits per coefficient

use lbvrf_algorithms::poly::params::{bit_length, LbvrfQ, Modulus};
use lbvrf_algorithms::poly::serialize::{
    decode_le_u32, encode_le_u32, packed_len, CoefficientPacker, CoefficientUnpacker,
    DefaultCoefficientSerde,
};
use lbvrf_algorithms::poly::{Matrix, PolyVec};
use lbvrf_algorithms::validate;
use lbvrf_api::{Result as ApiResult, Serialize};
use lbvrf_params::pqc::lbvrf::LbvrfSchemeParams;

use super::{PubParam, PublicKey};
use crate::error::Result;

/// Bits per coefficient in the compact public key form
pub const PUBLIC_KEY_PACKED_BITS: usize = bit_length(LbvrfQ::Q - 1) as usize;

impl<P: LbvrfSchemeParams> Serialize for PubParam<P> {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        let matrix = Matrix::<LbvrfQ>::from_bytes(P::A_ROW, P::A_COL, bytes)?;
        Ok(Self::from_matrix(matrix)?)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.matrix().to_bytes()
    }
}

impl<P: LbvrfSchemeParams> Serialize for PublicKey<P> {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        let poly_bytes = 4 * LbvrfQ::N;
        validate::length("public key", bytes.len(), P::A_ROW * poly_bytes)?;
        let polys = bytes
            .chunks_exact(poly_bytes)
            .map(decode_le_u32::<LbvrfQ>)
            .collect::<lbvrf_algorithms::Result<Vec<_>>>()?;
        Ok(Self::from_vector(PolyVec::from_polys(polys))?)
    }

    fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(P::A_ROW * LbvrfQ::N * 4);
        for poly in self.vector().iter() {
            encode_le_u32(poly, &mut out);
        }
        out
    }
}

impl<P: LbvrfSchemeParams> PublicKey<P> {
    /// Size of the compact encoding
    pub fn packed_len() -> usize {
        P::A_ROW * packed_len::<LbvrfQ>(PUBLIC_KEY_PACKED_BITS)
    }

    /// Compact encoding, `PUBLIC_KEY_PACKED_BITS` bits per coefficient
    pub fn to_packed_bytes(&self) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(Self::packed_len());
        for poly in self.vector().iter() {
            let packed = <DefaultCoefficientSerde as CoefficientPacker<LbvrfQ>>::pack_coeffs(
                poly,
                PUBLIC_KEY_PACKED_BITS,
            )?;
            out.extend_from_slice(&packed);
        }
        Ok(out)
    }

    /// Inverse of [`to_packed_bytes`](Self::to_packed_bytes)
    pub fn from_packed_bytes(bytes: &[u8]) -> Result<Self> {
        let poly_bytes = packed_len::<LbvrfQ>(PUBLIC_KEY_PACKED_BITS);
        validate::length("packed public key", bytes.len(), P::A_ROW * poly_bytes)?;
        let mut polys = Vec::with_capacity(P::A_ROW);
        for chunk in bytes.chunks_exact(poly_bytes) {
            polys.push(
                <DefaultCoefficientSerde as CoefficientUnpacker<LbvrfQ>>::unpack_coeffs(
                    chunk,
                    PUBLIC_KEY_PACKED_BITS,
                )?,
            );
        }
        Self::from_vector(PolyVec::from_polys(polys))
    }
}
