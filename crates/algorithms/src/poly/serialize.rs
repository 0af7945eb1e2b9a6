//! serialize.rs - Polynomial coefficient encodings
//!
//! Two encodings of public ring elements:
//!
//! - little-endian `u32` per coefficient, the layout of in-memory coefficient
//!   dumps on little-endian hosts
//! - fixed-width bit packing, least significant bit first, e.g. 27 bits per
//!   coefficient for the Q ring

use super::params::Modulus;
use super::polynomial::Polynomial;
use crate::error::{validate, Error, Result};

/// Trait for packing polynomial coefficients into a byte array
pub trait CoefficientPacker<M: Modulus> {
    /// Packs the polynomial's coefficients into a byte vector
    fn pack_coeffs(poly: &Polynomial<M>, bits_per_coeff: usize) -> Result<Vec<u8>>;
}

/// Trait for unpacking polynomial coefficients from a byte array
pub trait CoefficientUnpacker<M: Modulus> {
    /// Unpacks coefficients from a byte slice into a new polynomial
    fn unpack_coeffs(bytes: &[u8], bits_per_coeff: usize) -> Result<Polynomial<M>>;
}

/// Default implementation for coefficient serialization
pub struct DefaultCoefficientSerde;

/// Packed size of one polynomial in bytes
pub fn packed_len<M: Modulus>(bits_per_coeff: usize) -> usize {
    (M::N * bits_per_coeff).div_ceil(8)
}

fn check_width<M: Modulus>(bits_per_coeff: usize) -> Result<()> {
    validate::parameter(
        (1..=32).contains(&bits_per_coeff),
        "bits_per_coeff",
        "must be in range [1, 32]",
    )?;
    // Every canonical coefficient must be representable
    validate::parameter(
        bits_per_coeff >= 32 || (M::Q - 1) >> bits_per_coeff == 0,
        "bits_per_coeff",
        "too narrow for the modulus",
    )
}

impl<M: Modulus> CoefficientPacker<M> for DefaultCoefficientSerde {
    fn pack_coeffs(poly: &Polynomial<M>, bits_per_coeff: usize) -> Result<Vec<u8>> {
        check_width::<M>(bits_per_coeff)?;
        if !poly.is_canonical() {
            return Err(Error::param("poly", "packing requires canonical coefficients"));
        }

        let mut packed = Vec::new();
        packed.try_reserve_exact(packed_len::<M>(bits_per_coeff))?;
        packed.resize(packed_len::<M>(bits_per_coeff), 0);

        let mut bit_pos = 0;
        for &coeff in poly.as_coeffs_slice() {
            for bit in 0..bits_per_coeff {
                if (coeff >> bit) & 1 == 1 {
                    packed[bit_pos / 8] |= 1 << (bit_pos % 8);
                }
                bit_pos += 1;
            }
        }
        Ok(packed)
    }
}

impl<M: Modulus> CoefficientUnpacker<M> for DefaultCoefficientSerde {
    fn unpack_coeffs(bytes: &[u8], bits_per_coeff: usize) -> Result<Polynomial<M>> {
        check_width::<M>(bits_per_coeff)?;
        validate::length("packed polynomial", bytes.len(), packed_len::<M>(bits_per_coeff))?;

        let mut poly = Polynomial::<M>::zero();
        let mut bit_pos = 0;
        for coeff in poly.as_mut_coeffs_slice() {
            let mut value = 0u32;
            for bit in 0..bits_per_coeff {
                let b = (bytes[bit_pos / 8] >> (bit_pos % 8)) & 1;
                value |= (b as u32) << bit;
                bit_pos += 1;
            }
            if value >= M::Q {
                return Err(Error::param("packed polynomial", "coefficient not below the modulus"));
            }
            *coeff = value;
        }
        Ok(poly)
    }
}

/// Append `poly` as little-endian `u32` coefficients
pub fn encode_le_u32<M: Modulus>(poly: &Polynomial<M>, out: &mut Vec<u8>) {
    for &c in poly.as_coeffs_slice() {
        out.extend_from_slice(&c.to_le_bytes());
    }
}

/// Decode one polynomial of exactly `4 * N` little-endian bytes.
///
/// Coefficients must be canonical.
pub fn decode_le_u32<M: Modulus>(bytes: &[u8]) -> Result<Polynomial<M>> {
    validate::length("little-endian polynomial", bytes.len(), 4 * M::N)?;
    let mut poly = Polynomial::<M>::zero();
    for (coeff, chunk) in poly.as_mut_coeffs_slice().iter_mut().zip(bytes.chunks_exact(4)) {
        let value = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        if value >= M::Q {
            return Err(Error::param("encoded polynomial", "coefficient not below the modulus"));
        }
        *coeff = value;
    }
    Ok(poly)
}
