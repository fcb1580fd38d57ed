use digest::{Digest, FixedOutputReset};

pub struct Test {
    pub name: &'static str,
    pub input: &'static [u8],
    pub output: &'static [u8],
}

/// Load `data/<name>.input` and `data/<name>.output` relative to the
/// invoking file for every listed name.
#[macro_export]
macro_rules! new_tests {
    ( $( $name:expr ),*  ) => {
        [$(
            Test {
                name: $name,
                input: include_bytes!(concat!("data/", $name, ".input")),
                output: include_bytes!(concat!("data/", $name, ".output")),
            },
        )*]
    };
}

pub fn main_test<D: Digest + FixedOutputReset>(tests: &[Test]) {
    // Test that it works when accepting the message all at once
    for t in tests.iter() {
        let mut sh = D::new();
        Digest::update(&mut sh, t.input);

        let out = sh.finalize();

        assert_eq!(out[..], t.output[..], "{}: all at once", t.name);
    }

    // Test that it works when accepting the message in pieces
    for t in tests.iter() {
        let mut sh = D::new();
        let len = t.input.len();
        let mut left = len;
        while left > 0 {
            let take = (left + 1) / 2;
            Digest::update(&mut sh, &t.input[len - left..take + len - left]);
            left -= take;
        }

        let out = sh.finalize();

        assert_eq!(out[..], t.output[..], "{}: in pieces", t.name);
    }

    // And one byte at a time, reusing a single hasher
    let mut sh = D::new();
    for t in tests.iter() {
        for byte in t.input.chunks(1) {
            Digest::update(&mut sh, byte);
        }

        let out = sh.finalize_reset();

        assert_eq!(out[..], t.output[..], "{}: byte by byte", t.name);
    }
}

/// Check a single-shot digest function against the same vectors.
pub fn oneshot_test<F, O>(digest: F, tests: &[Test])
where
    F: Fn(&[u8]) -> O,
    O: AsRef<[u8]>,
{
    for t in tests.iter() {
        assert_eq!(digest(t.input).as_ref(), t.output, "{}: one shot", t.name);
    }
}

pub fn one_million_a<D: Digest>(expected: &[u8]) {
    let mut sh = D::new();
    for _ in 0..50000 {
        sh.update(&[b'a'; 10]);
    }
    sh.update(&[b'a'; 500000][..]);
    let out = sh.finalize();
    assert_eq!(out[..], expected[..]);
}
