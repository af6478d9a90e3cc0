#![no_main]
use std::cell::RefCell;

use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng; // faster than StdRng
use rand::{Rng, SeedableRng};
use strargv::{EmptyHexEscapeMode, Separators, Tokenizer, TokenizerOptions};

thread_local! {
    // One SmallRng per thread, seeded once from the host OS
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

/// Fragments that drive the scanner into its less common states.
static FRAGMENT_TABLE: &[&[u8]] = &[
    b" ",
    b"\t",
    b"\n",
    b"'",
    b"\"",
    b"''",
    b"\\",
    b"\\\\",
    b"\\x",
    b"\\x4",
    b"\\x41",
    b"\\xg",
    b"\\0",
    b"\\07",
    b"\\101",
    b"\\777",
    b"\\n",
    b"\\ ",
    b"\\'",
    b",",
    b":",
    b"a",
    b"\0",
    b"\xFF",
];

/// Helper: borrow the thread-local RNG and run a closure with it.
fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

/// Splices fragments from [`FRAGMENT_TABLE`] into the input instead of
/// mutating bytes blindly on one call in ten.
fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if !seed.is_multiple_of(10) {
        return fuzzer_mutate(data, size, max_size);
    }

    let mut len = size.min(max_size);
    let inserts = with_rng(|rng| rng.random_range(1..=4));
    for _ in 0..inserts {
        let frag = with_rng(|rng| FRAGMENT_TABLE[rng.random_range(0..FRAGMENT_TABLE.len())]);
        if len + frag.len() > max_size {
            break;
        }
        let at = with_rng(|rng| rng.random_range(0..=len));
        data.copy_within(at..len, at + frag.len());
        data[at..at + frag.len()].copy_from_slice(frag);
        len += frag.len();
    }
    len
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

#[derive(Debug, Arbitrary)]
struct Case<'a> {
    emit_nul: bool,
    separators: Option<&'a [u8]>,
    input: &'a [u8],
}

/// Quotes a token so that the default tokenizer reads it back unchanged.
fn quote(token: &[u8]) -> Vec<u8> {
    let mut out = vec![b'"'];
    for &b in token {
        if (b.is_ascii_graphic() && b != b'"' && b != b'\\') || b == b' ' {
            out.push(b);
        } else {
            out.extend_from_slice(format!("\\{b:03o}").as_bytes());
        }
    }
    out.push(b'"');
    out
}

fn tokenize(data: &[u8]) {
    let Ok(case) = Case::arbitrary(&mut Unstructured::new(data)) else {
        return;
    };

    let tokenizer = Tokenizer::new(TokenizerOptions {
        separators: case.separators.map(Separators::from).unwrap_or_default(),
        empty_hex_escape: if case.emit_nul {
            EmptyHexEscapeMode::EmitNul
        } else {
            EmptyHexEscapeMode::Reject
        },
    });
    let Ok(argv) = tokenizer.tokenize(case.input) else {
        return;
    };

    assert_eq!(argv.buffer().len(), case.input.len());
    let decoded: usize = argv.iter().map(|t| t.len()).sum();
    assert!(decoded <= case.input.len());

    // Every token survives a quote-and-reparse round trip.
    let mut requoted = Vec::new();
    for token in &argv {
        requoted.extend_from_slice(&quote(token));
        requoted.push(b' ');
    }
    let again = Tokenizer::default()
        .tokenize(&requoted)
        .expect("quoted tokens always parse");
    assert_eq!(argv, again);
}

fuzz_target!(|data: &[u8]| tokenize(data));
