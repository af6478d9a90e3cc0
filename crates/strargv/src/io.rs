//! Best-effort output.

use std::io::{ErrorKind, Write};

/// Writes as much of `data` to `sink` as it will take, ignoring failure.
///
/// Stops when everything is written, when the sink accepts zero bytes, or on
/// the first error other than [`ErrorKind::Interrupted`]. Meant for messages
/// to a peer that may already be gone, where there is nothing useful to do
/// with a write error.
pub fn write_ignore_fail<W: Write + ?Sized>(sink: &mut W, mut data: &[u8]) {
    while !data.is_empty() {
        match sink.write(data) {
            Ok(0) => break,
            Ok(n) => data = &data[n..],
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => {
                log::trace!("dropping {} unwritten bytes: {e}", data.len());
                break;
            }
        }
    }
}
