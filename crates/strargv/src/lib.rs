//! Split a single configuration or command string into an argument vector.
//!
//! The rules follow the POSIX shell closely enough for option strings, but
//! nothing more: tokens are separated by whitespace (or a caller-chosen
//! separator set), `'...'` and `"..."` suppress separators, and backslash
//! introduces a C escape (`\n`, `\101`, `\x41`, ...). There is no variable
//! expansion, globbing or redirection.
//!
//! All tokens live in one owned buffer. Escapes are decoded in place, which is
//! safe because a decoded escape is never longer than its source text.
//!
//! ```rust
//! use strargv::tokenize;
//!
//! let argv = tokenize("lan -U ipmiusr -P 'a secret' localhost,9600", None).unwrap();
//! assert_eq!(argv.len(), 6);
//! assert_eq!(argv[4], "a secret");
//! ```

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod argv;
mod error;
mod escape;
mod options;
mod scanner;
mod separators;
mod tokenizer;

pub mod baud;
#[cfg(feature = "std")]
pub mod io;
pub mod scan;

#[cfg(test)]
mod tests;

pub use argv::{ArgVec, Iter, release};
pub use error::{AllocTarget, ErrorKind, Quote, SyntaxError, TokenizeError};
pub use options::{EmptyHexEscapeMode, TokenizerOptions};
pub use separators::Separators;
pub use tokenizer::{Tokenizer, tokenize};
