#![allow(missing_docs)]

use strargv::{
    ArgVec, ErrorKind, Separators, Tokenizer, TokenizerOptions, baud, io::write_ignore_fail,
    release, scan, tokenize,
};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn public_types_are_thread_safe() {
    assert_send_sync::<ArgVec>();
    assert_send_sync::<Tokenizer>();
    assert_send_sync::<TokenizerOptions>();
    assert_send_sync::<strargv::TokenizeError>();
}

#[test]
fn release_frees_results_and_ignores_none() {
    let argv = tokenize("a b c", None).unwrap();
    assert_eq!(argv.len(), 3);
    release(Some(argv));
    release(None);

    let again = tokenize("d", None).unwrap();
    assert_eq!(again.to_strings_lossy(), ["d"]);
}

#[test]
fn error_kinds() {
    assert_eq!(
        tokenize("'abc", None).unwrap_err().kind(),
        ErrorKind::MalformedInput
    );
    assert_eq!(
        tokenize(r"abc\", None).unwrap_err().kind(),
        ErrorKind::MalformedInput
    );
}

/// Parses `serialdev,/dev/ttyS0,115200N81` the way a port configuration
/// reader would: split on commas, then pick the speed out of the last field.
#[test]
fn device_spec_speed() {
    let argv = tokenize("serialdev,/dev/ttyS0,115200N81", Some(&Separators::from(","))).unwrap();
    assert_eq!(argv.len(), 3);

    let field = argv[2].to_string();
    let end = field
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(field.len());
    let rate = scan::scan_uint(&field[..end]).unwrap();
    assert_eq!(rate, 115_200);

    let speed = baud::speed_for_rate(rate).unwrap();
    assert_eq!(baud::speed_name(speed), "115200");
    assert_eq!(baud::rate_to_cisco(rate), Some(14));
}

#[test]
fn key_value_options() {
    let argv = tokenize("timeout=0000 speed=9600 banner='hi there'", None).unwrap();
    let mut timeout = None;
    let mut speed = None;
    for arg in &argv {
        let arg = arg.to_string();
        if let Some(end) = scan::prefix_len(&arg, "timeout=") {
            assert!(scan::is_all_zero(&arg[end..]));
            timeout = scan::scan_uint(&arg[end..]);
        } else if let Some(end) = scan::prefix_len(&arg, "speed=") {
            speed = scan::scan_uint(&arg[end..]);
        }
    }
    assert_eq!(timeout, Some(0));
    assert_eq!(speed, Some(9600));
    assert_eq!(argv[2], "banner=hi there");
}

#[test]
fn writes_tokens_best_effort() {
    let argv = tokenize(r"hello\x2c world", None).unwrap();
    let mut out = Vec::new();
    for arg in &argv {
        write_ignore_fail(&mut out, arg);
        write_ignore_fail(&mut out, b"\n");
    }
    assert_eq!(out, b"hello,\nworld\n");
}

#[test]
fn options_default() {
    let options = TokenizerOptions::default();
    assert_eq!(options.separators, Separators::WHITESPACE);
    assert_eq!(Tokenizer::default().options(), &options);
}
