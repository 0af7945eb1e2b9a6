//! Constants for post-quantum (lattice-based) schemes

pub mod lbvrf;
