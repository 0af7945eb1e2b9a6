//! Seed stream reference outputs and validation order

use lbvrf_algorithms::poly::sampling::sample_below;
use lbvrf_algorithms::xof::{SeedStream, StreamDomain};
use lbvrf_algorithms::Error;
use lbvrf_params::pqc::lbvrf::{LBVRF_DOMAIN_SALT, LBVRF_Q};
use rand::RngCore;

fn first_bytes(seed: &[u8], level: u16, domain: StreamDomain) -> String {
    let mut stream = SeedStream::new(seed, LBVRF_DOMAIN_SALT, level, domain).unwrap();
    hex::encode(stream.next_bytes(8).unwrap())
}

#[test]
fn reference_prefixes() {
    let zero = [0u8; 32];
    assert_eq!(first_bytes(&zero, 128, StreamDomain::Plain), "675c29efb3f5fafe");
    assert_eq!(first_bytes(&zero, 192, StreamDomain::Plain), "31422a6d94590bb7");
    assert_eq!(first_bytes(&zero, 256, StreamDomain::Plain), "c4c97b592b50fb01");
    assert_eq!(first_bytes(&zero, 128, StreamDomain::Secret), "45ff58f09234cc6a");
    assert_eq!(
        first_bytes(&zero, 128, StreamDomain::matrix_cell(0, 1).unwrap()),
        "db8b818bf7dd297d"
    );
}

#[test]
fn rng_view_continues_the_stream() {
    let mut stream =
        SeedStream::new(&[0u8; 32], LBVRF_DOMAIN_SALT, 128, StreamDomain::Plain).unwrap();
    assert_eq!(stream.next_u32(), 4012465255);
    assert_eq!(stream.bytes_consumed(), 4);
}

#[test]
fn sample_below_reference_draws() {
    let mut stream =
        SeedStream::new(&[0u8; 32], LBVRF_DOMAIN_SALT, 128, StreamDomain::Plain).unwrap();
    let draws: Vec<u32> = (0..4)
        .map(|_| sample_below(&mut stream, LBVRF_Q).unwrap())
        .collect();
    assert_eq!(draws, vec![66452222, 26710670, 16521190, 74343891]);
}

#[test]
fn split_reads_equal_one_read() {
    let seed = [9u8; 40];
    let mut a = SeedStream::new(&seed, LBVRF_DOMAIN_SALT, 128, StreamDomain::Plain).unwrap();
    let mut b = SeedStream::new(&seed, LBVRF_DOMAIN_SALT, 128, StreamDomain::Plain).unwrap();

    let whole = a.next_bytes(100).unwrap();
    let mut parts = b.next_bytes(37).unwrap();
    parts.extend(b.next_bytes(63).unwrap());
    assert_eq!(whole, parts);
}

#[test]
fn domains_and_levels_separate_streams() {
    let seed = [1u8; 32];
    let plain = first_bytes(&seed, 128, StreamDomain::Plain);
    assert_ne!(plain, first_bytes(&seed, 128, StreamDomain::Secret));
    assert_ne!(plain, first_bytes(&seed, 192, StreamDomain::Plain));
    assert_ne!(
        first_bytes(&seed, 128, StreamDomain::matrix_cell(0, 1).unwrap()),
        first_bytes(&seed, 128, StreamDomain::matrix_cell(1, 0).unwrap())
    );
}

#[test]
fn seed_length_checked_before_level() {
    let err = SeedStream::new(&[0u8; 31], LBVRF_DOMAIN_SALT, 100, StreamDomain::Plain)
        .unwrap_err();
    assert_eq!(
        err,
        Error::SeedLength {
            expected: 32,
            actual: 31
        }
    );

    let err = SeedStream::new(&[0u8; 32], LBVRF_DOMAIN_SALT, 100, StreamDomain::Plain)
        .unwrap_err();
    assert!(matches!(err, Error::Parameter { .. }));
}

#[test]
fn debug_output_hides_state() {
    let stream =
        SeedStream::new(&[0xabu8; 32], LBVRF_DOMAIN_SALT, 128, StreamDomain::Plain).unwrap();
    let shown = format!("{:?}", stream);
    assert!(!shown.contains("abab"));
}
