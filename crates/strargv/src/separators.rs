use core::fmt;

use bstr::BString;

/// A set of separator bytes, stored as a 256-bit bitmap.
///
/// `NUL` is never a member: the tokenizer treats it as ordinary data.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Separators {
    bits: [u64; 4],
}

impl Separators {
    /// Space, tab, newline, carriage return, vertical tab and form feed.
    pub const WHITESPACE: Self = Self::from_bytes(b" \x0C\n\r\t\x0B");

    /// The empty set. Every unquoted byte belongs to a token, so the whole
    /// input becomes one argument.
    pub const NONE: Self = Self { bits: [0; 4] };

    /// Builds a set from the given bytes.
    #[must_use]
    pub const fn from_bytes(bytes: &[u8]) -> Self {
        let mut bits = [0u64; 4];
        let mut i = 0;
        while i < bytes.len() {
            let b = bytes[i];
            if b != 0 {
                bits[(b >> 6) as usize] |= 1u64 << (b & 63);
            }
            i += 1;
        }
        Self { bits }
    }

    /// Whether `b` separates tokens.
    #[inline]
    #[must_use]
    pub const fn contains(&self, b: u8) -> bool {
        self.bits[(b >> 6) as usize] & (1u64 << (b & 63)) != 0
    }

    /// Member bytes in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=u8::MAX).filter(|&b| self.contains(b))
    }
}

impl Default for Separators {
    fn default() -> Self {
        Self::WHITESPACE
    }
}

impl From<&[u8]> for Separators {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<&str> for Separators {
    fn from(s: &str) -> Self {
        Self::from_bytes(s.as_bytes())
    }
}

impl FromIterator<u8> for Separators {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let bytes: BString = iter.into_iter().collect();
        Self::from_bytes(&bytes)
    }
}

impl fmt::Debug for Separators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes: BString = self.iter().collect();
        f.debug_tuple("Separators").field(&bytes).finish()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Separators {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let bytes: BString = self.iter().collect();
        serde::Serialize::serialize(&bytes, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Separators {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bytes = <BString as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from_bytes(&bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::Separators;

    #[test]
    fn whitespace_members() {
        let ws = Separators::WHITESPACE;
        for b in *b" \t\n\r\x0B\x0C" {
            assert!(ws.contains(b), "missing {b:#04x}");
        }
        assert!(!ws.contains(b'a'));
        assert!(!ws.contains(0));
        assert_eq!(ws.iter().count(), 6);
    }

    #[test]
    fn nul_is_never_a_member() {
        let s = Separators::from(&b"\0,"[..]);
        assert!(!s.contains(0));
        assert!(s.contains(b','));
    }

    #[test]
    fn high_bytes() {
        let s: Separators = [0xFFu8, 0x80].into_iter().collect();
        assert!(s.contains(0xFF));
        assert!(s.contains(0x80));
        assert!(!s.contains(0x7F));
        assert_eq!(s.iter().collect::<alloc::vec::Vec<_>>(), [0x80, 0xFF]);
    }
}
