//! Chi-square checks on sampler output.
//!
//! Seeds are fixed, so each statistic is a constant; the 0.1% threshold
//! flags a biased sampler, not bad luck.

use lbvrf_algorithms::poly::params::{LbvrfQ, Modulus};
use lbvrf_algorithms::poly::sampling::sample_below;
use lbvrf_algorithms::xof::{SeedStream, StreamDomain};
use lbvrf_api::Vrf;
use lbvrf_params::pqc::lbvrf::LBVRF_DOMAIN_SALT;
use lbvrf_scheme::Lbvrf128;
use lbvrf_tests::stats::{bucket_counts, uniform_p_value};
use lbvrf_tests::vectors::LBVRF_VECTORS;

const ALPHA: f64 = 0.001;

#[test]
fn small_modulus_draws_are_uniform() {
    let mut stream =
        SeedStream::new(&[0x5a; 32], LBVRF_DOMAIN_SALT, 128, StreamDomain::Plain).unwrap();
    let mut counts = [0u64; 7];
    for _ in 0..70_000 {
        counts[sample_below(&mut stream, 7).unwrap() as usize] += 1;
    }
    let p = uniform_p_value(&counts);
    assert!(p > ALPHA, "counts {:?}, p = {}", counts, p);
}

#[test]
fn matrix_coefficients_are_uniform_below_q() {
    let pp = Lbvrf128::paramgen(&LBVRF_VECTORS.seed).unwrap();
    let values = pp
        .matrix()
        .cells()
        .iter()
        .flat_map(|c| c.as_coeffs_slice().iter().copied());
    let counts = bucket_counts(values, LbvrfQ::Q, 16);
    let p = uniform_p_value(&counts);
    assert!(p > ALPHA, "counts {:?}, p = {}", counts, p);
}

#[test]
fn secret_coefficients_are_uniform_trinary() {
    let pp = Lbvrf128::paramgen(&LBVRF_VECTORS.seed).unwrap();
    for key_seed in [[0x11u8; 32], [0x22u8; 32]] {
        let (_, sk) = Lbvrf128::keygen(&key_seed, &pp).unwrap();
        let mut counts = [0u64; 3];
        for row in sk.centered() {
            for c in row {
                counts[(c + 1) as usize] += 1;
            }
        }
        let p = uniform_p_value(&counts);
        assert!(p > ALPHA, "counts {:?}, p = {}", counts, p);
    }
}
