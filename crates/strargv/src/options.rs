use crate::Separators;

/// Configuration options for the tokenizer.
///
/// # Examples
///
/// ```rust
/// use strargv::{EmptyHexEscapeMode, Separators, Tokenizer, TokenizerOptions};
///
/// let tokenizer = Tokenizer::new(TokenizerOptions {
///     separators: Separators::from(","),
///     empty_hex_escape: EmptyHexEscapeMode::EmitNul,
/// });
/// let argv = tokenizer.tokenize("a b,c").unwrap();
/// assert_eq!(argv.len(), 2);
/// assert_eq!(argv[0], "a b");
/// ```
///
/// # Default
///
/// ASCII whitespace separators, and `\x` without digits is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TokenizerOptions {
    /// Bytes that end a token when they appear outside quotes.
    ///
    /// Escaped separators (`\040`, `\ `) never split a token.
    ///
    /// # Default
    ///
    /// [`Separators::WHITESPACE`]: space, `\t`, `\n`, `\r`, `\x0B`, `\x0C`.
    pub separators: Separators,

    /// What to do with a `\x` escape that is followed by a non-hex byte.
    ///
    /// # Default
    ///
    /// [`EmptyHexEscapeMode::Reject`]
    pub empty_hex_escape: EmptyHexEscapeMode,
}

/// Handling of `\x` immediately followed by something other than a hex digit.
///
/// A `\x` at the very end of the input is always an unterminated escape,
/// whatever the mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EmptyHexEscapeMode {
    /// Fail with [`SyntaxError::EmptyHexEscape`](crate::SyntaxError::EmptyHexEscape).
    #[default]
    Reject,
    /// Emit a `0x00` byte and scan the following byte normally.
    EmitNul,
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn deserializes_from_config() {
        let options: TokenizerOptions =
            serde_json::from_str(r#"{"separators": ",;", "empty_hex_escape": "emit_nul"}"#)
                .unwrap();
        assert_eq!(options.separators, Separators::from(",;"));
        assert_eq!(options.empty_hex_escape, EmptyHexEscapeMode::EmitNul);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let options: TokenizerOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, TokenizerOptions::default());
    }

    #[test]
    fn serializes_argv_as_byte_strings() {
        let argv = crate::tokenize("a 'b c'", None).unwrap();
        assert_eq!(serde_json::to_string(&argv).unwrap(), "[[97],[98,32,99]]");
    }
}
