use alloc::{string::String, vec::Vec};

use crate::{ArgVec, TokenizeError, tokenize};

/// Tokenizes with default separators and collects the arguments as byte
/// vectors.
pub fn args(input: &str) -> Result<Vec<Vec<u8>>, TokenizeError> {
    tokenize(input, None).map(|argv| to_bytes(&argv))
}

pub fn to_bytes(argv: &ArgVec) -> Vec<Vec<u8>> {
    argv.iter().map(|t| t.to_vec()).collect()
}

/// Quotes `token` so that the tokenizer reads it back unchanged, whatever
/// bytes it contains.
///
/// Bytes that are special inside double quotes are written as three-digit
/// octal escapes; the fixed width keeps a following digit out of the escape.
pub fn quote(token: &[u8]) -> String {
    let mut out = String::with_capacity(token.len() + 2);
    out.push('"');
    for &b in token {
        match b {
            b'"' | b'\\' | 0x80..=0xFF | 0..=0x1F | 0x7F => {
                out.push_str(&alloc::format!("\\{b:03o}"));
            }
            _ => out.push(char::from(b)),
        }
    }
    out.push('"');
    out
}
