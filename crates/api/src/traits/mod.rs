//! Public traits implemented by the scheme crates

pub mod serialize;
pub mod vrf;

pub use serialize::Serialize;
pub use vrf::Vrf;
