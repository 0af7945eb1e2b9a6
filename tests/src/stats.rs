//! Pearson chi-square goodness of fit against a uniform distribution

use statrs::distribution::{ChiSquared, ContinuousCDF};

/// Chi-square statistic of `counts` against equal expected counts
pub fn chi_square_uniform(counts: &[u64]) -> f64 {
    let total: u64 = counts.iter().sum();
    let expected = total as f64 / counts.len() as f64;
    counts
        .iter()
        .map(|&c| {
            let d = c as f64 - expected;
            d * d / expected
        })
        .sum()
}

/// Upper-tail p-value of the uniform fit of `counts`
pub fn uniform_p_value(counts: &[u64]) -> f64 {
    let df = (counts.len() - 1) as f64;
    let dist = ChiSquared::new(df).expect("degrees of freedom must be positive");
    1.0 - dist.cdf(chi_square_uniform(counts))
}

/// Histogram of `values` (all below `modulus`) in `buckets` equal-width bins
pub fn bucket_counts(values: impl IntoIterator<Item = u32>, modulus: u32, buckets: usize) -> Vec<u64> {
    let mut counts = vec![0u64; buckets];
    for v in values {
        let idx = (v as u64 * buckets as u64 / modulus as u64) as usize;
        counts[idx] += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_fit_has_zero_statistic() {
        assert_eq!(chi_square_uniform(&[10, 10, 10, 10]), 0.0);
        assert!((uniform_p_value(&[10, 10, 10, 10]) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn skewed_counts_are_rejected() {
        assert!(uniform_p_value(&[1000, 0, 0]) < 1e-6);
    }

    #[test]
    fn buckets_cover_the_range() {
        let counts = bucket_counts([0, 49, 50, 99], 100, 2);
        assert_eq!(counts, vec![2, 2]);
    }
}
