use std::io;
use std::io::Read;

use crate::pattern;

/// Read a single character from `input` and turn it into a 1-based pattern index.
///
/// Only the first byte is looked at. End of input, or anything that is not a valid index, picks
/// pattern `1`.
pub fn read_selection<R: Read>(mut input: R) -> io::Result<usize> {
    let mut buf = [0u8; 1];

    let n = loop {
        match input.read(&mut buf) {
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            res => break res?,
        }
    };

    let text = String::from_utf8_lossy(&buf[..n]);

    Ok(pattern::resolve_selection(&text))
}
