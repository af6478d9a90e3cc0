use alloc::string::ToString;

use rstest::rstest;

use crate::{AllocTarget, ErrorKind, Quote, Separators, SyntaxError, TokenizeError, tokenize};

#[rstest]
#[case::single_quote("'abc", 0, SyntaxError::UnterminatedQuote(Quote::Single))]
#[case::double_quote("a \"b c", 2, SyntaxError::UnterminatedQuote(Quote::Double))]
#[case::mismatched_quote("'abc\"", 0, SyntaxError::UnterminatedQuote(Quote::Single))]
#[case::trailing_backslash(r"abc\", 3, SyntaxError::UnterminatedEscape)]
#[case::lone_backslash(r"\", 0, SyntaxError::UnterminatedEscape)]
#[case::trailing_hex_prefix(r"a b\x", 3, SyntaxError::UnterminatedEscape)]
#[case::hex_without_digits(r"\xg", 0, SyntaxError::EmptyHexEscape)]
#[case::hex_without_digits_before_space(r"ok \x z", 3, SyntaxError::EmptyHexEscape)]
#[case::backslash_in_open_quote(r"'a\", 2, SyntaxError::UnterminatedEscape)]
#[case::late_error(r"a b c d e f g h i j k l 'm", 24, SyntaxError::UnterminatedQuote(Quote::Single))]
fn rejects(#[case] input: &str, #[case] offset: usize, #[case] source: SyntaxError) {
    let err = tokenize(input, None).unwrap_err();
    assert_eq!(err, TokenizeError::MalformedInput { offset, source });
    assert_eq!(err.kind(), ErrorKind::MalformedInput);
    assert_eq!(err.offset(), Some(offset));
}

#[test]
fn escaped_quote_leaves_quote_open() {
    let err = tokenize(r#""abc\""#, None).unwrap_err();
    assert_eq!(
        err,
        TokenizeError::MalformedInput {
            offset: 0,
            source: SyntaxError::UnterminatedQuote(Quote::Double),
        }
    );
}

#[test]
fn custom_separators_do_not_close_quotes() {
    let err = tokenize("'a,b", Some(&Separators::from(","))).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedInput);
}

#[test]
fn error_messages() {
    let err = tokenize("x 'abc", None).unwrap_err();
    assert_eq!(err.to_string(), "unterminated single quote at byte 2");

    let err = tokenize(r"\xz", None).unwrap_err();
    assert_eq!(err.to_string(), "hex escape without digits at byte 0");

    let err = tokenize(r"abc\", None).unwrap_err();
    assert_eq!(err.to_string(), "unterminated escape sequence at byte 3");
}

#[test]
fn error_source_chain() {
    use core::error::Error;

    let err = tokenize("\"", None).unwrap_err();
    let source = err.source().unwrap();
    assert_eq!(source.to_string(), "unterminated double quote");
}

#[test]
fn allocation_failure() {
    use alloc::vec::Vec;
    use core::error::Error;

    let source = Vec::<u8>::new().try_reserve(usize::MAX).unwrap_err();
    let err = TokenizeError::AllocationFailure {
        target: AllocTarget::InputBuffer,
        source: source.clone(),
    };
    assert_eq!(err.kind(), ErrorKind::AllocationFailure);
    assert_eq!(err.offset(), None);
    assert_eq!(err.to_string(), "failed to allocate input buffer");
    assert_eq!(err.source().unwrap().to_string(), source.to_string());

    let err = TokenizeError::AllocationFailure {
        target: AllocTarget::TokenList,
        source,
    };
    assert_eq!(err.to_string(), "failed to allocate token list");
}
