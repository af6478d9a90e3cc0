//! Decoder for backslash escape sequences.
//!
//! [`EscapeDecoder`] is fed one byte at a time after the scanner has seen a
//! `\`. It recognizes three forms, each decoding to exactly one byte:
//!
//! - named escapes: `\a \b \f \n \r \t \v`; any other byte stands for itself
//!   (`\\`, `\'`, `\ `);
//! - octal: `\` followed by one to three octal digits;
//! - hex: `\x` followed by one or two hex digits, either case.
//!
//! Numeric escapes end early at the first byte that is not a digit of their
//! base. That byte is not part of the escape: [`Step::EmitThenRescan`] hands it
//! back to the scanner, which treats it as ordinary input (it can open a
//! quote, end the token, or start another escape).
//!
//! Octal values wrap modulo 256, so `\777` decodes to `0xFF`.
//!
//! # Errors
//!
//! - `\x` followed by a non-hex byte fails with
//!   [`SyntaxError::EmptyHexEscape`] unless
//!   [`EmptyHexEscapeMode::EmitNul`] is selected.
//! - Input ending directly after `\` or `\x` fails with
//!   [`SyntaxError::UnterminatedEscape`] (see [`EscapeDecoder::finish`]).

use crate::{EmptyHexEscapeMode, SyntaxError};

const OCTAL_MAX_DIGITS: u8 = 3;
const HEX_MAX_DIGITS: u8 = 2;

/// Where the decoder is inside one escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum EscapeState {
    /// Not decoding an escape.
    #[default]
    None,
    /// Just consumed the backslash.
    Start,
    Octal { value: u8, digits: u8 },
    Hex { value: u8, digits: u8 },
}

/// Outcome of feeding one byte to the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// The byte was consumed; more are needed.
    Pending,
    /// The byte completed the escape, which decoded to the given byte.
    Emit(u8),
    /// The escape ended before the byte, which decoded to the given byte.
    /// The fed byte was not consumed and must be scanned again.
    EmitThenRescan(u8),
}

#[derive(Debug)]
pub(crate) struct EscapeDecoder {
    state: EscapeState,
    empty_hex: EmptyHexEscapeMode,
}

impl EscapeDecoder {
    pub fn new(empty_hex: EmptyHexEscapeMode) -> Self {
        Self {
            state: EscapeState::None,
            empty_hex,
        }
    }

    /// Whether an escape sequence is in progress.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.state != EscapeState::None
    }

    #[cfg(test)]
    pub fn state(&self) -> EscapeState {
        self.state
    }

    /// Enters the escape after a backslash.
    pub fn begin(&mut self) {
        debug_assert!(!self.is_active(), "escape already in progress");
        self.state = EscapeState::Start;
    }

    /// Feeds the byte following the backslash, or a later digit.
    ///
    /// Must only be called while [`is_active`](Self::is_active).
    pub fn feed(&mut self, b: u8) -> Result<Step, SyntaxError> {
        let step = match self.state {
            EscapeState::None => unreachable!("feed called without an escape in progress"),
            EscapeState::Start => match b {
                b'0'..=b'7' => {
                    self.state = EscapeState::Octal {
                        value: b - b'0',
                        digits: 1,
                    };
                    return Ok(Step::Pending);
                }
                b'x' => {
                    self.state = EscapeState::Hex {
                        value: 0,
                        digits: 0,
                    };
                    return Ok(Step::Pending);
                }
                _ => Step::Emit(named(b)),
            },
            EscapeState::Octal { value, digits } => match b {
                b'0'..=b'7' => {
                    let value = value.wrapping_mul(8).wrapping_add(b - b'0');
                    let digits = digits + 1;
                    if digits < OCTAL_MAX_DIGITS {
                        self.state = EscapeState::Octal { value, digits };
                        return Ok(Step::Pending);
                    }
                    Step::Emit(value)
                }
                _ => Step::EmitThenRescan(value),
            },
            EscapeState::Hex { value, digits } => match hex_digit(b) {
                Some(d) => {
                    let value = (value << 4) | d;
                    let digits = digits + 1;
                    if digits < HEX_MAX_DIGITS {
                        self.state = EscapeState::Hex { value, digits };
                        return Ok(Step::Pending);
                    }
                    Step::Emit(value)
                }
                None if digits == 0 && self.empty_hex == EmptyHexEscapeMode::Reject => {
                    self.state = EscapeState::None;
                    return Err(SyntaxError::EmptyHexEscape);
                }
                None => Step::EmitThenRescan(value),
            },
        };
        self.state = EscapeState::None;
        Ok(step)
    }

    /// Ends the escape at end of input.
    ///
    /// A numeric escape with at least one digit is complete and yields its
    /// byte. A bare `\` or `\x` is unterminated.
    pub fn finish(&mut self) -> Result<Option<u8>, SyntaxError> {
        let out = match self.state {
            EscapeState::None => Ok(None),
            EscapeState::Start | EscapeState::Hex { digits: 0, .. } => {
                Err(SyntaxError::UnterminatedEscape)
            }
            EscapeState::Octal { value, .. } | EscapeState::Hex { value, .. } => Ok(Some(value)),
        };
        self.state = EscapeState::None;
        out
    }
}

fn named(b: u8) -> u8 {
    match b {
        b'a' => 0x07,
        b'b' => 0x08,
        b'f' => 0x0C,
        b'n' => b'\n',
        b'r' => b'\r',
        b't' => b'\t',
        b'v' => 0x0B,
        other => other,
    }
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
