//! Constant values and parameter sets for the lbvrf workspace
//!
//! Parameter sets are expressed as types implementing a scheme trait so that
//! the generation code is written once and instantiated per set.

#![no_std]

pub mod pqc;
