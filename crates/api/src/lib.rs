//! Public API traits and types for the lbvrf workspace
//!
//! This crate provides the public API surface shared by every other crate in
//! the workspace: the [`Error`] type returned across crate boundaries and the
//! [`Vrf`] trait describing a verifiable random function.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

pub use traits::{Serialize, Vrf};

// Re-export trait modules for direct access
pub use traits::{serialize, vrf};
