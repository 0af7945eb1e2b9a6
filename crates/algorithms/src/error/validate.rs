//! Validation utilities for lattice primitives

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a minimum length
#[inline(always)]
pub fn min_length(context: &'static str, actual: usize, min: usize) -> Result<()> {
    if actual < min {
        return Err(Error::Length {
            context,
            expected: min,
            actual,
        });
    }
    Ok(())
}

/// Validate a seed against the stream minimum
#[inline(always)]
pub fn seed_length(actual: usize, min: usize) -> Result<()> {
    if actual < min {
        return Err(Error::SeedLength {
            expected: min,
            actual,
        });
    }
    Ok(())
}

/// Validate an index against an exclusive bound
#[inline(always)]
pub fn index(name: &'static str, index: usize, bound: usize) -> Result<()> {
    if index >= bound {
        return Err(Error::param(
            name,
            format!("index {} out of range (bound {})", index, bound),
        ));
    }
    Ok(())
}
