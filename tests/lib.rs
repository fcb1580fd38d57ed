#[macro_use]
extern crate crypto_tests;

use crypto_tests::hash::{main_test, one_million_a, oneshot_test, Test};
use hex_literal::hex;
use md5::{Digest, Md5};

// RFC 1321, appendix A.5
fn rfc1321_tests() -> [Test; 7] {
    new_tests!(
        "rfc1321_1",
        "rfc1321_2",
        "rfc1321_3",
        "rfc1321_4",
        "rfc1321_5",
        "rfc1321_6",
        "rfc1321_7"
    )
}

#[test]
fn md5_main() {
    main_test::<Md5>(&rfc1321_tests());
}

#[test]
fn md5_oneshot() {
    oneshot_test(md5::md5, &rfc1321_tests());
}

#[test]
fn md5_1million_a() {
    let output = include_bytes!("data/one_million_a.output");
    one_million_a::<Md5>(output);
}

#[test]
fn md5_1million_a_oneshot() {
    let message = vec![b'a'; 1_000_000];
    assert_eq!(md5::md5(&message), hex!("7707d6ae4e027c70eea2a935c2296f21"));
}

#[test]
fn streaming_matches_oneshot_at_every_split() {
    let message: Vec<u8> = (0..=255u8).cycle().take(200).collect();
    let expected = md5::md5(&message);

    for split in 0..=message.len() {
        let (head, tail) = message.split_at(split);
        let out = Md5::new().chain_update(head).chain_update(tail).finalize();
        assert_eq!(out[..], expected[..], "split at {}", split);
    }
}

#[test]
fn streaming_in_odd_chunks_matches_oneshot() {
    let message: Vec<u8> = (0..400u32).map(|i| (i * 31 + 7) as u8).collect();

    for len in 0..=message.len() {
        let mut hasher = Md5::new();
        for chunk in message[..len].chunks(13) {
            hasher.update(chunk);
        }
        assert_eq!(hasher.finalize()[..], md5::md5(&message[..len])[..], "len {}", len);
    }
}

#[test]
fn manual_pipeline_matches_md5() {
    let message = b"The quick brown fox jumps over the lazy dog";

    let padded = md5::pad(message);
    let state = md5::blocks(&padded)
        .unwrap()
        .fold(md5::State::INITIAL, |state, block| md5::compress(state, &block));

    assert_eq!(md5::finalize(state), hex!("9e107d9d372bb6826bd81d3542a419d6"));
    assert_eq!(md5::finalize(state), md5::md5(message));
}

#[test]
fn reset_discards_buffered_input() {
    use md5::digest::Reset;

    let mut hasher = Md5::new();
    hasher.update(b"garbage that must not leak");
    Reset::reset(&mut hasher);
    hasher.update(b"abc");
    assert_eq!(hasher.finalize()[..], hex!("900150983cd24fb0d6963f7d28e17f72"));
}

