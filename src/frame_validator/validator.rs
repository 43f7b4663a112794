use crate::crc_engine::{LookupTable, shared_table};
use castagnoli_frame_layout::Frame;
use castagnoli_frame_layout::constants::{FRAME_SIZE, MESSAGE_SIZE};

/// Seals and validates frames against a borrowed lookup table.
///
/// The free functions [`is_valid`](crate::is_valid) and
/// [`encode_frame`](crate::encode_frame) go through the shared table. Use a
/// `FrameValidator` when the caller owns its table, e.g. one built in a
/// `const` or kept alongside a connection.
///
/// # Example:
/// ```
/// use castagnoli_frame::{FrameValidator, LookupTable};
///
/// let table = LookupTable::build();
/// let validator = FrameValidator::new(&table);
///
/// let mut frame = validator.seal(b"hiiamtom");
/// assert!(validator.is_valid(&frame));
///
/// frame[0] ^= 0x0F;
/// assert!(!validator.is_valid(&frame));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FrameValidator<'a> {
    table: &'a LookupTable,
}

impl<'a> FrameValidator<'a> {
    #[inline]
    pub fn new(table: &'a LookupTable) -> Self {
        Self { table }
    }

    #[inline]
    pub fn table(&self) -> &'a LookupTable {
        self.table
    }

    /// Appends the little-endian CRC of `message`, producing a 12-byte frame.
    #[inline]
    pub fn seal(&self, message: &[u8; MESSAGE_SIZE]) -> [u8; FRAME_SIZE] {
        Frame::new(*message, self.table.compute_crc(message)).serialize()
    }

    /// Recomputes the CRC over bytes 0–7 and compares it to the trailer.
    ///
    /// # Returns:
    /// - `true` if the carried CRC matches the message.
    /// - `false` if either the message or the trailer has been corrupted.
    #[inline]
    pub fn is_valid(&self, frame: &[u8; FRAME_SIZE]) -> bool {
        self.check(&Frame::deserialize(frame))
    }

    #[inline]
    pub fn check(&self, frame: &Frame) -> bool {
        self.table.compute_crc(frame.message()) == frame.crc()
    }
}

impl Default for FrameValidator<'static> {
    fn default() -> Self {
        Self::new(shared_table())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_shared_table() {
        let validator = FrameValidator::default();
        assert!(std::ptr::eq(validator.table(), shared_table()));
    }

    #[test]
    fn test_check_on_parsed_frame() {
        let validator = FrameValidator::default();

        assert!(validator.check(&Frame::new(*b"hiiamtom", 0x3C58_999E)));
        assert!(!validator.check(&Frame::new(*b"hiiamtom", 0x3C58_999F)));
    }
}
