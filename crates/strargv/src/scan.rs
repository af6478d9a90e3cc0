//! Small helpers for picking apart option tokens such as `speed=9600` or
//! `timeout=0000`.

/// Returns the length of `prefix` if `s` starts with it.
///
/// The returned length is where the rest of `s` begins:
///
/// ```rust
/// use strargv::scan::prefix_len;
///
/// let opt = "speed=9600";
/// let end = prefix_len(opt, "speed=").unwrap();
/// assert_eq!(&opt[end..], "9600");
/// assert_eq!(prefix_len(opt, "rate="), None);
/// ```
#[must_use]
pub fn prefix_len(s: &str, prefix: &str) -> Option<usize> {
    s.starts_with(prefix).then_some(prefix.len())
}

/// Whether `s` is non-empty and consists only of `'0'`.
///
/// Used to tell an explicit zero apart from a value that failed to parse.
#[must_use]
pub fn is_all_zero(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b == b'0')
}

/// Parses a non-negative decimal integer.
///
/// Only ASCII digits are accepted: no sign, no whitespace, no empty string.
/// Values that do not fit in a `u32` are rejected as well.
#[must_use]
pub fn scan_uint(s: &str) -> Option<u32> {
    if s.is_empty() {
        return None;
    }
    s.bytes().try_fold(0u32, |acc, b| {
        let digit = match b {
            b'0'..=b'9' => u32::from(b - b'0'),
            _ => return None,
        };
        acc.checked_mul(10)?.checked_add(digit)
    })
}
