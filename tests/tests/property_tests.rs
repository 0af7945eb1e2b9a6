//! Property-based tests for parameter and key generation

use lbvrf_algorithms::poly::params::{LbvrfQ, Modulus};
use lbvrf_algorithms::poly::sampling::sample_below;
use lbvrf_algorithms::xof::{SeedStream, StreamDomain};
use lbvrf_api::Vrf;
use lbvrf_params::pqc::lbvrf::{Lbvrf128Params, LbvrfSchemeParams, LBVRF_DOMAIN_SALT};
use lbvrf_scheme::{Lbvrf128, PublicKey};
use proptest::prelude::*;

/// Seeds at or above the minimum length
fn valid_seed() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 32..=80)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn paramgen_is_a_function_of_the_seed(seed in valid_seed()) {
        let a = Lbvrf128::paramgen(&seed).unwrap();
        let b = Lbvrf128::paramgen(&seed).unwrap();
        prop_assert_eq!(&a, &b);
        prop_assert!(a.matrix().cells().iter().all(|c| c.is_canonical()));
    }

    #[test]
    fn one_bit_seed_change_changes_every_cell(seed in valid_seed(), bit in 0usize..256) {
        let mut flipped = seed.clone();
        flipped[bit / 8] ^= 1 << (bit % 8);
        let a = Lbvrf128::paramgen(&seed).unwrap();
        let b = Lbvrf128::paramgen(&flipped).unwrap();
        for (x, y) in a.matrix().cells().iter().zip(b.matrix().cells()) {
            let differing = x
                .as_coeffs_slice()
                .iter()
                .zip(y.as_coeffs_slice())
                .filter(|(p, q)| p != q)
                .count();
            prop_assert!(differing > 200);
        }
    }

    #[test]
    fn short_seeds_are_rejected(len in 0usize..32) {
        let seed = vec![0x42u8; len];
        let err = Lbvrf128::paramgen(&seed).unwrap_err();
        prop_assert_eq!(
            err,
            lbvrf_api::Error::InvalidSeedLength { expected: 32, actual: len }
        );
    }

    #[test]
    fn keygen_yields_short_secret_and_canonical_public(
        seed in valid_seed(),
        key_seed in valid_seed(),
    ) {
        let pp = Lbvrf128::paramgen(&seed).unwrap();
        let (pk, sk) = Lbvrf128::keygen(&key_seed, &pp).unwrap();

        prop_assert_eq!(sk.vector().len(), Lbvrf128Params::A_COL);
        prop_assert!(sk.vector().infinity_norm() <= Lbvrf128Params::ETA);
        prop_assert_eq!(pk.vector().len(), Lbvrf128Params::A_ROW);
        prop_assert!(pk.vector().is_canonical());

        let packed = pk.to_packed_bytes().unwrap();
        prop_assert_eq!(PublicKey::<Lbvrf128Params>::from_packed_bytes(&packed).unwrap(), pk);
    }

    #[test]
    fn sample_below_stays_in_range(seed in valid_seed(), modulus in 2u32..=LbvrfQ::Q) {
        let mut stream =
            SeedStream::new(&seed, LBVRF_DOMAIN_SALT, 128, StreamDomain::Plain).unwrap();
        for _ in 0..64 {
            prop_assert!(sample_below(&mut stream, modulus).unwrap() < modulus);
        }
    }

    #[test]
    fn stream_prefixes_are_consistent(seed in valid_seed(), n in 1usize..200, m in 1usize..200) {
        let mut long = SeedStream::new(&seed, LBVRF_DOMAIN_SALT, 256, StreamDomain::Secret).unwrap();
        let mut short = SeedStream::new(&seed, LBVRF_DOMAIN_SALT, 256, StreamDomain::Secret).unwrap();
        let a = long.next_bytes(n + m).unwrap();
        let b = short.next_bytes(n).unwrap();
        prop_assert_eq!(&a[..n], &b[..]);
    }
}

mod ring {
    use super::*;
    use lbvrf_algorithms::poly::{PolyVec, Polynomial};
    use lbvrf_algorithms::xof::StreamDomain;
    use lbvrf_algorithms::poly::sampling::{sample_bounded_element, sample_uniform_element};

    fn uniform(seed: &[u8]) -> Polynomial<LbvrfQ> {
        let mut s = SeedStream::new(seed, LBVRF_DOMAIN_SALT, 128, StreamDomain::Plain).unwrap();
        sample_uniform_element::<LbvrfQ, _>(&mut s).unwrap()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn add_then_sub_restores_operand(a_seed in valid_seed(), b_seed in valid_seed()) {
            let a = uniform(&a_seed);
            let b = uniform(&b_seed);
            let mut back = a.add(&b).unwrap().sub(&b).unwrap();
            back.reduce();
            prop_assert_eq!(back, a);
        }

        #[test]
        fn vector_add_sub_round_trip(a_seed in valid_seed(), b_seed in valid_seed()) {
            let a = PolyVec::from_polys(vec![uniform(&a_seed), uniform(&b_seed)]);
            let b = PolyVec::from_polys(vec![uniform(&b_seed), uniform(&a_seed)]);
            let mut back = a.add(&b).unwrap().sub(&b).unwrap();
            back.reduce();
            prop_assert_eq!(back, a);
        }

        #[test]
        fn norm_check_boundary(c in -1000i64..=1000) {
            let mut coeffs = vec![0i64; LbvrfQ::N];
            coeffs[17] = c;
            let p = Polynomial::<LbvrfQ>::from_signed(&coeffs).unwrap();
            let mag = c.unsigned_abs() as u32;
            prop_assert_eq!(p.infinity_norm(), mag);
            prop_assert!(!p.check_norm(mag + 1));
            if mag > 0 {
                prop_assert!(p.check_norm(mag));
            }
        }

        #[test]
        fn masking_range_samples_respect_beta(seed in valid_seed()) {
            let mut s = SeedStream::new(&seed, LBVRF_DOMAIN_SALT, 128, StreamDomain::Plain).unwrap();
            let y = sample_bounded_element::<LbvrfQ, _>(&mut s, Lbvrf128Params::BETA).unwrap();
            prop_assert!(y.is_canonical());
            prop_assert!(!y.check_norm(Lbvrf128Params::BETA + 1));
        }
    }
}

mod byte_source {
    use super::*;
    use lbvrf_algorithms::poly::sampling::sample_bounded_element;
    use rand::{CryptoRng, RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    /// Replays arbitrary bytes verbatim, then continues from a ChaCha20
    /// stream so rejection loops always terminate
    struct ByteSourceRng {
        bytes: Vec<u8>,
        pos: usize,
        tail: ChaCha20Rng,
    }

    impl ByteSourceRng {
        fn new(bytes: Vec<u8>) -> Self {
            let tail = ChaCha20Rng::seed_from_u64(bytes.len() as u64);
            Self { bytes, pos: 0, tail }
        }
    }

    impl RngCore for ByteSourceRng {
        fn next_u32(&mut self) -> u32 {
            let mut b = [0u8; 4];
            self.fill_bytes(&mut b);
            u32::from_le_bytes(b)
        }

        fn next_u64(&mut self) -> u64 {
            let mut b = [0u8; 8];
            self.fill_bytes(&mut b);
            u64::from_le_bytes(b)
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            let n = dest.len().min(self.bytes.len() - self.pos);
            dest[..n].copy_from_slice(&self.bytes[self.pos..self.pos + n]);
            self.pos += n;
            self.tail.fill_bytes(&mut dest[n..]);
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    impl CryptoRng for ByteSourceRng {}

    fn byte_source() -> impl Strategy<Value = Vec<u8>> {
        prop::collection::vec(any::<u8>(), 4..4096)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn sample_below_any_source(bytes in byte_source(), modulus in 2u32..=u32::MAX) {
            let mut rng = ByteSourceRng::new(bytes);
            for _ in 0..64 {
                prop_assert!(sample_below(&mut rng, modulus).unwrap() < modulus);
            }
        }

        #[test]
        fn bounded_element_any_source(bytes in byte_source(), eta in 1u32..=(LbvrfQ::Q - 1) / 2) {
            let mut rng = ByteSourceRng::new(bytes);
            let poly = sample_bounded_element::<LbvrfQ, _>(&mut rng, eta).unwrap();
            prop_assert!(poly.is_canonical());
            prop_assert!(poly.infinity_norm() <= eta);
        }
    }
}
