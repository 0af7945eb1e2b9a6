// File: crates/api/src/traits/serialize.rs

//! Byte serialization of public scheme data.
//!
//! Only public material (parameters, public keys) is covered. Secret key
//! persistence is deliberately left to the caller.

use crate::Result;

/// A trait for public types that can be serialized to and from bytes.
pub trait Serialize: Sized {
    /// Creates an object from a byte slice.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;
    /// Converts the object to a byte vector.
    fn to_bytes(&self) -> Vec<u8>;
}
