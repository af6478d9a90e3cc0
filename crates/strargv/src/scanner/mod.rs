//! Scanner: finds one token per call and decodes it in place.
//!
//! The scanner walks a mutable byte buffer with two cursors. `read` visits
//! every input byte once; `write` is where the next decoded byte of the
//! current token goes. Quotes are dropped and an escape sequence of two or
//! more bytes decodes to one byte, so `write <= read` holds throughout and a
//! token can be rewritten over its own source text.
//!
//! Rules per byte, in order of precedence:
//! 1. an escape in progress gets the byte first;
//! 2. the byte that opened the current quote closes it;
//! 3. `'` or `"` outside quotes opens a quote;
//! 4. `\` starts an escape (inside quotes too);
//! 5. a separator outside quotes ends the token;
//! 6. anything else is copied.
//!
//! Decoded bytes are written directly, so an escaped quote or separator is
//! plain data.

use core::ops::Range;

use crate::{
    Quote, Separators, SyntaxError, TokenizeError, TokenizerOptions,
    escape::{EscapeDecoder, Step},
};


#[derive(Debug)]
pub(crate) struct Scanner<'buf> {
    buf: &'buf mut [u8],
    pos: usize,
    separators: Separators,
    escape: EscapeDecoder,
}

impl<'buf> Scanner<'buf> {
    pub fn new(buf: &'buf mut [u8], options: &TokenizerOptions) -> Self {
        Self {
            buf,
            pos: 0,
            separators: options.separators,
            escape: EscapeDecoder::new(options.empty_hex_escape),
        }
    }

    /// Offset of the first byte not yet scanned.
    #[cfg(test)]
    pub fn position(&self) -> usize {
        self.pos
    }

    fn skip_separators(&mut self) {
        while self.pos < self.buf.len() && self.separators.contains(self.buf[self.pos]) {
            self.pos += 1;
        }
    }

    /// Scans the next token and returns its decoded range within the buffer.
    ///
    /// Returns `Ok(None)` once only separators remain. After an error the
    /// cursor is at the end of the buffer.
    pub fn next_token(&mut self) -> Result<Option<Range<usize>>, TokenizeError> {
        self.skip_separators();
        if self.pos == self.buf.len() {
            return Ok(None);
        }

        let start = self.pos;
        let mut read = start;
        let mut write = start;
        let mut quote: Option<(Quote, usize)> = None;
        let mut escape_at = start;

        while read < self.buf.len() {
            let b = self.buf[read];

            if self.escape.is_active() {
                let step = self.escape.feed(b).map_err(|e| {
                    self.pos = self.buf.len();
                    TokenizeError::malformed(escape_at, e)
                })?;
                match step {
                    Step::Pending => {
                        read += 1;
                        continue;
                    }
                    Step::Emit(v) => {
                        self.buf[write] = v;
                        write += 1;
                        read += 1;
                        continue;
                    }
                    Step::EmitThenRescan(v) => {
                        self.buf[write] = v;
                        write += 1;
                    }
                }
            }

            match (quote, Quote::from_byte(b)) {
                (Some((open, _)), Some(found)) if open == found => quote = None,
                (None, Some(found)) => quote = Some((found, read)),
                _ if b == b'\\' => {
                    self.escape.begin();
                    escape_at = read;
                }
                (None, _) if self.separators.contains(b) => {
                    self.pos = read + 1;
                    return Ok(Some(start..write));
                }
                _ => {
                    self.buf[write] = b;
                    write += 1;
                }
            }
            read += 1;
        }

        self.pos = self.buf.len();
        match self.escape.finish() {
            Ok(Some(v)) => {
                self.buf[write] = v;
                write += 1;
            }
            Ok(None) => {}
            Err(e) => return Err(TokenizeError::malformed(escape_at, e)),
        }
        if let Some((open, at)) = quote {
            return Err(TokenizeError::malformed(
                at,
                SyntaxError::UnterminatedQuote(open),
            ));
        }
        Ok(Some(start..write))
    }
}
