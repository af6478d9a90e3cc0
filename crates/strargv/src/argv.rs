//! The argument vector returned by [`tokenize`](crate::tokenize).

use alloc::{collections::TryReserveError, string::String, vec::Vec};
use core::{fmt, iter::FusedIterator, ops::Range, slice};

use bstr::{BStr, ByteSlice};

/// Token slots reserved before the first token is pushed.
pub(crate) const INITIAL_CAPACITY: usize = 10;

/// Token slots added each time the list is full. Argument lists parsed from
/// configuration strings are short, so growth is linear rather than doubling.
pub(crate) const GROWTH_INCREMENT: usize = 10;

/// An ordered list of arguments backed by a single owned buffer.
///
/// Every token is a view into the same buffer, the decoded copy of the input
/// string. Dropping the `ArgVec` (or passing it to [`release`]) frees the
/// token list and the buffer together; tokens borrowed from it cannot outlive
/// it.
///
/// ```rust
/// let argv = strargv::tokenize(r#"-p "a b" \x41"#, None).unwrap();
/// assert_eq!(argv.to_strings_lossy(), ["-p", "a b", "A"]);
/// assert_eq!(argv[1], "a b");
/// ```
#[derive(Clone, Default)]
pub struct ArgVec {
    buffer: Vec<u8>,
    tokens: Vec<Range<usize>>,
}

/// Allocates an empty token list with room for [`INITIAL_CAPACITY`] tokens.
pub(crate) fn token_list() -> Result<Vec<Range<usize>>, TryReserveError> {
    let mut tokens = Vec::new();
    tokens.try_reserve_exact(INITIAL_CAPACITY)?;
    Ok(tokens)
}

/// Appends a token range, growing the list by [`GROWTH_INCREMENT`] slots when
/// it is full.
pub(crate) fn push_token(
    tokens: &mut Vec<Range<usize>>,
    range: Range<usize>,
) -> Result<(), TryReserveError> {
    if tokens.len() == tokens.capacity() {
        tokens.try_reserve_exact(GROWTH_INCREMENT)?;
        log::debug!("token list grown to {} slots", tokens.capacity());
    }
    tokens.push(range);
    Ok(())
}

impl ArgVec {
    /// Bundles a decoded buffer with the token ranges found in it.
    pub(crate) fn from_parts(buffer: Vec<u8>, tokens: Vec<Range<usize>>) -> Self {
        debug_assert!(tokens.iter().all(|r| r.start <= r.end && r.end <= buffer.len()));
        Self { buffer, tokens }
    }

    /// Number of arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the input held no arguments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns the argument at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&BStr> {
        self.tokens
            .get(index)
            .map(|r| self.buffer[r.clone()].as_bstr())
    }

    /// Iterates over the arguments in input order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            buffer: &self.buffer,
            tokens: self.tokens.iter(),
        }
    }

    /// The backing buffer, holding every token at its decoded position.
    ///
    /// Bytes between tokens are leftovers from decoding and have no meaning.
    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Copies the arguments into owned strings, replacing invalid UTF-8 with
    /// U+FFFD.
    #[must_use]
    pub fn to_strings_lossy(&self) -> Vec<String> {
        self.iter().map(|t| t.to_str_lossy().into_owned()).collect()
    }
}

/// Releases an argument vector and the buffer behind it.
///
/// `None` is accepted and ignored. The vector is taken by value, so it cannot
/// be released twice; this is the same as dropping it.
pub fn release(argv: Option<ArgVec>) {
    if let Some(argv) = argv {
        log::trace!("releasing {} tokens", argv.len());
        drop(argv);
    }
}

impl core::ops::Index<usize> for ArgVec {
    type Output = BStr;

    fn index(&self, index: usize) -> &BStr {
        self.buffer[self.tokens[index].clone()].as_bstr()
    }
}

/// Compares arguments only; leftover bytes between tokens are ignored.
impl PartialEq for ArgVec {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for ArgVec {}

impl fmt::Debug for ArgVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a ArgVec {
    type Item = &'a BStr;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Iterator over the arguments of an [`ArgVec`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    buffer: &'a [u8],
    tokens: slice::Iter<'a, Range<usize>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a BStr;

    fn next(&mut self) -> Option<&'a BStr> {
        self.tokens.next().map(|r| self.buffer[r.clone()].as_bstr())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.tokens.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.tokens.next_back().map(|r| self.buffer[r.clone()].as_bstr())
    }
}

impl ExactSizeIterator for Iter<'_> {}
impl FusedIterator for Iter<'_> {}

#[cfg(feature = "serde")]
impl serde::Serialize for ArgVec {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
