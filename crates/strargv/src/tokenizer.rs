//! Builds an [`ArgVec`] by running the scanner over an owned copy of the
//! input.
//!
//! ```rust
//! use strargv::{Separators, tokenize};
//!
//! let argv = tokenize("9600N81,LOCAL", Some(&Separators::from(","))).unwrap();
//! assert_eq!(argv.len(), 2);
//! assert_eq!(argv[1], "LOCAL");
//! ```

use alloc::{collections::TryReserveError, vec::Vec};

use crate::{
    AllocTarget, ArgVec, Separators, TokenizeError, TokenizerOptions,
    argv::{push_token, token_list},
    scanner::Scanner,
};

/// Splits strings into arguments with a fixed set of [`TokenizerOptions`].
///
/// A `Tokenizer` holds no state between calls and can be shared freely
/// between threads.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    options: TokenizerOptions,
}

impl Tokenizer {
    /// Creates a tokenizer with the given options.
    #[must_use]
    pub fn new(options: TokenizerOptions) -> Self {
        Self { options }
    }

    /// The options this tokenizer was built with.
    #[must_use]
    pub fn options(&self) -> &TokenizerOptions {
        &self.options
    }

    /// Splits `input` into arguments.
    ///
    /// The input is copied once; every token of the result is decoded in
    /// place inside that copy. Input with no tokens (empty, or separators
    /// only) yields an empty [`ArgVec`].
    ///
    /// # Errors
    ///
    /// - [`TokenizeError::MalformedInput`] if a quote or escape is left open
    ///   at the end of the input, or `\x` has no hex digits (depending on
    ///   [`TokenizerOptions::empty_hex_escape`]).
    /// - [`TokenizeError::AllocationFailure`] if the copy or the token list
    ///   cannot be allocated.
    ///
    /// Nothing is returned on error; partial results are dropped.
    pub fn tokenize(&self, input: impl AsRef<[u8]>) -> Result<ArgVec, TokenizeError> {
        let input = input.as_ref();

        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(input.len())
            .map_err(alloc_failed(AllocTarget::InputBuffer))?;
        buffer.extend_from_slice(input);

        let mut tokens = token_list().map_err(alloc_failed(AllocTarget::TokenList))?;

        let mut scanner = Scanner::new(&mut buffer, &self.options);
        while let Some(range) = scanner.next_token().inspect_err(|e| {
            log::debug!("rejecting {} byte input: {e}", input.len());
        })? {
            log::trace!("token {} at {range:?}", tokens.len());
            push_token(&mut tokens, range).map_err(alloc_failed(AllocTarget::TokenList))?;
        }

        Ok(ArgVec::from_parts(buffer, tokens))
    }
}

/// Splits `input` into arguments.
///
/// `separators` defaults to [`Separators::WHITESPACE`]. See
/// [`Tokenizer::tokenize`] for the rules and errors.
///
/// # Errors
///
/// See [`Tokenizer::tokenize`].
pub fn tokenize(
    input: impl AsRef<[u8]>,
    separators: Option<&Separators>,
) -> Result<ArgVec, TokenizeError> {
    let options = TokenizerOptions {
        separators: separators.copied().unwrap_or_default(),
        ..TokenizerOptions::default()
    };
    Tokenizer::new(options).tokenize(input)
}

fn alloc_failed(target: AllocTarget) -> impl FnOnce(TryReserveError) -> TokenizeError {
    move |source| {
        log::debug!("allocating {target} failed: {source}");
        TokenizeError::AllocationFailure { target, source }
    }
}
