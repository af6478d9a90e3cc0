use alloc::collections::TryReserveError;
use core::fmt;

use thiserror::Error;

/// Error returned by [`tokenize`](crate::tokenize).
///
/// Tokenizing is all-or-nothing: when this is returned no part of the input
/// was turned into arguments, and every allocation made along the way has
/// already been released.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    /// Duplicating the input or growing the token list failed.
    #[error("failed to allocate {target}")]
    AllocationFailure {
        /// Which allocation failed.
        target: AllocTarget,
        /// The allocator's report.
        #[source]
        source: TryReserveError,
    },
    /// A quote or escape sequence was left open at the end of the input.
    #[error("{source} at byte {offset}")]
    MalformedInput {
        /// Byte offset in the input of the opening quote or backslash.
        offset: usize,
        /// What was left open.
        #[source]
        source: SyntaxError,
    },
}

impl TokenizeError {
    /// Returns the coarse error category.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AllocationFailure { .. } => ErrorKind::AllocationFailure,
            Self::MalformedInput { .. } => ErrorKind::MalformedInput,
        }
    }

    /// Byte offset of the offending construct for malformed input.
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::AllocationFailure { .. } => None,
            Self::MalformedInput { offset, .. } => Some(*offset),
        }
    }

    pub(crate) fn malformed(offset: usize, source: SyntaxError) -> Self {
        Self::MalformedInput { offset, source }
    }
}

/// The two ways tokenizing can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Out of memory.
    AllocationFailure,
    /// The input string is invalid as a whole.
    MalformedInput,
}

/// The allocation that failed in [`TokenizeError::AllocationFailure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AllocTarget {
    /// The owned copy of the input string.
    InputBuffer,
    /// The list of token ranges.
    TokenList,
}

impl fmt::Display for AllocTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputBuffer => f.write_str("input buffer"),
            Self::TokenList => f.write_str("token list"),
        }
    }
}

/// Quote character that opened a quoted region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quote {
    /// `'`
    Single,
    /// `"`
    Double,
}

impl Quote {
    pub(crate) fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'\'' => Some(Self::Single),
            b'"' => Some(Self::Double),
            _ => None,
        }
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => f.write_str("single"),
            Self::Double => f.write_str("double"),
        }
    }
}

/// Why the input was rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxError {
    #[error("unterminated {0} quote")]
    /// A quoted region was still open at the end of the input.
    UnterminatedQuote(Quote),
    #[error("unterminated escape sequence")]
    /// The input ended right after a backslash (or after `\x`).
    UnterminatedEscape,
    #[error("hex escape without digits")]
    /// `\x` was followed by a byte that is not a hex digit.
    EmptyHexEscape,
}
