//! Test support for the lbvrf workspace
//!
//! - [`vectors`]: checked-in regression vectors and their loader
//! - [`stats`]: goodness-of-fit helpers for sampler output
pub mod stats;
