//! Full comparison against the checked-in regression vectors

use lbvrf_algorithms::poly::params::{LbvrfQ, Modulus};
use lbvrf_api::{Serialize, Vrf};
use lbvrf_params::pqc::lbvrf::{Lbvrf128Params, LbvrfSchemeParams};
use lbvrf_scheme::{Lbvrf128, PubParam, PublicKey};
use lbvrf_tests::vectors::LBVRF_VECTORS;

#[test]
fn vector_file_matches_parameter_set() {
    let v = &*LBVRF_VECTORS;
    assert_eq!(v.rows, Lbvrf128Params::A_ROW);
    assert_eq!(v.cols, Lbvrf128Params::A_COL);
    assert_eq!(v.degree, LbvrfQ::N);
    assert_eq!(v.modulus, LbvrfQ::Q);
    assert_eq!(v.seed.len(), 60);
    assert_eq!(v.key_seed.len(), 32);
}

#[test]
fn paramgen_reproduces_matrix() {
    let v = &*LBVRF_VECTORS;
    let pp = Lbvrf128::paramgen(&v.seed).unwrap();
    for (idx, expected) in v.matrix.iter().enumerate() {
        let cell = pp.matrix().get(idx / v.cols, idx % v.cols).unwrap();
        assert_eq!(
            cell.as_coeffs_slice(),
            expected.as_slice(),
            "cell ({}, {}) differs",
            idx / v.cols,
            idx % v.cols
        );
    }
}

#[test]
fn keygen_reproduces_secret_and_public() {
    let v = &*LBVRF_VECTORS;
    let pp = Lbvrf128::paramgen(&v.seed).unwrap();
    let (pk, sk) = Lbvrf128::keygen(&v.key_seed, &pp).unwrap();

    assert_eq!(sk.centered(), v.secret);
    for (got, want) in sk.vector().iter().zip(v.secret_canonical()) {
        assert_eq!(got.as_coeffs_slice(), want.as_slice());
    }
    for (i, want) in v.public.iter().enumerate() {
        assert_eq!(
            pk.vector().get(i).unwrap().as_coeffs_slice(),
            want.as_slice(),
            "public element {} differs",
            i
        );
    }
}

#[test]
fn encodings_match_vector_blobs() {
    let v = &*LBVRF_VECTORS;
    let pp = Lbvrf128::paramgen(&v.seed).unwrap();
    let (pk, _) = Lbvrf128::keygen(&v.key_seed, &pp).unwrap();

    let matrix_bytes: Vec<u8> = v
        .matrix
        .iter()
        .flatten()
        .flat_map(|c| c.to_le_bytes())
        .collect();
    assert_eq!(pp.to_bytes(), matrix_bytes);
    assert_eq!(
        PubParam::<Lbvrf128Params>::from_bytes(&matrix_bytes).unwrap(),
        pp
    );

    let public_bytes: Vec<u8> = v
        .public
        .iter()
        .flatten()
        .flat_map(|c| c.to_le_bytes())
        .collect();
    assert_eq!(pk.to_bytes(), public_bytes);
    assert_eq!(
        PublicKey::<Lbvrf128Params>::from_bytes(&public_bytes).unwrap(),
        pk
    );
}

#[test]
fn generation_is_repeatable_across_calls() {
    let v = &*LBVRF_VECTORS;
    let first = Lbvrf128::paramgen(&v.seed).unwrap();
    let second = Lbvrf128::paramgen(&v.seed).unwrap();
    assert_eq!(first, second);

    let (pk1, _) = Lbvrf128::keygen(&v.key_seed, &first).unwrap();
    let (pk2, _) = Lbvrf128::keygen(&v.key_seed, &second).unwrap();
    assert_eq!(pk1, pk2);
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_paramgen_reproduces_matrix() {
    use core::sync::atomic::AtomicBool;

    let v = &*LBVRF_VECTORS;
    let cancel = AtomicBool::new(false);
    let pp = Lbvrf128::paramgen_parallel(&v.seed, &cancel).unwrap();
    assert_eq!(pp, Lbvrf128::paramgen(&v.seed).unwrap());
}

#[test]
fn keypair_consumes_one_seed_from_the_rng() {
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    let v = &*LBVRF_VECTORS;
    let pp = Lbvrf128::paramgen(&v.seed).unwrap();

    let mut rng = ChaCha20Rng::seed_from_u64(2024);
    let (pk, sk) = Lbvrf128::keypair(&mut rng, &pp).unwrap();

    let mut replay = ChaCha20Rng::seed_from_u64(2024);
    let mut key_seed = [0u8; 32];
    replay.fill_bytes(&mut key_seed);
    let (pk2, sk2) = Lbvrf128::keygen(&key_seed, &pp).unwrap();

    assert_eq!(pk, pk2);
    assert_eq!(sk.centered(), sk2.centered());
}
