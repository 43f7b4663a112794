use std::io::{self, Read};

/// Fills `buf` from `reader`, stopping early only at end of input.
///
/// Unlike `read_exact`, a short read at EOF is not an error: the number of
/// bytes actually read is returned so the caller can tell a clean end
/// (`0`) from a trailing partial unit.
pub(crate) fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
    }
    Ok(filled)
}
