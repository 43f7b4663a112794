use crate::constants::*;
use crate::frame_error::{FrameError, LengthKind};

/// A message together with the CRC it is transmitted with.
///
/// ## Frame Layout
///
/// Every frame is exactly **12 bytes**:
///
/// - **Offset `0` → `8`**: **Message** (opaque payload, no internal structure)
/// - **Offset `8` → `12`**: **CRC** (32-bit CRC-32C, little-endian)
///
/// The trailer byte order is fixed to little-endian regardless of the host,
/// so a frame written on one machine validates on any other.
///
/// ## Notes
/// - `Frame` does not check the CRC; it only carries it. Validation lives in
///   the engine crate, which owns the lookup table.
/// - The carried CRC may be wrong. That is the whole point of carrying it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    message: [u8; MESSAGE_SIZE],
    crc: u32,
}

impl Frame {
    #[inline]
    pub fn new(message: [u8; MESSAGE_SIZE], crc: u32) -> Self {
        Self { message, crc }
    }

    #[inline]
    pub fn message(&self) -> &[u8; MESSAGE_SIZE] {
        &self.message
    }

    /// The CRC carried in the trailer, as received.
    #[inline]
    pub fn crc(&self) -> u32 {
        self.crc
    }

    /// Serializes the frame into its 12-byte wire form.
    ///
    /// # Returns:
    /// - The message bytes followed by the little-endian CRC trailer.
    #[inline]
    pub fn serialize(&self) -> [u8; FRAME_SIZE] {
        let mut buf = [0u8; FRAME_SIZE];

        buf[MESSAGE_RANGE].copy_from_slice(&self.message);
        buf[CRC_RANGE].copy_from_slice(&self.crc.to_le_bytes());

        buf
    }

    /// Splits a 12-byte frame into its message and carried CRC.
    #[inline]
    pub fn deserialize(data: &[u8; FRAME_SIZE]) -> Self {
        let mut message = [0u8; MESSAGE_SIZE];
        message.copy_from_slice(&data[MESSAGE_RANGE]);

        let mut crc = [0u8; CRC_SIZE];
        crc.copy_from_slice(&data[CRC_RANGE]);

        Self {
            message,
            crc: u32::from_le_bytes(crc),
        }
    }

    /// Like [`Frame::deserialize`], for input whose length is not known
    /// statically.
    ///
    /// # Errors:
    /// - `FrameError::InvalidLength` if `data` is not exactly 12 bytes.
    pub fn try_from_slice(data: &[u8]) -> Result<Self, FrameError> {
        let frame: &[u8; FRAME_SIZE] = data
            .try_into()
            .map_err(|_| FrameError::invalid_length(LengthKind::Frame, FRAME_SIZE, data.len()))?;

        Ok(Self::deserialize(frame))
    }
}

impl From<&[u8; FRAME_SIZE]> for Frame {
    fn from(data: &[u8; FRAME_SIZE]) -> Self {
        Frame::deserialize(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailer_is_little_endian() {
        let frame = Frame::new(*b"hiiamtom", 0x3C58_999E);
        let bytes = frame.serialize();

        assert_eq!(&bytes[MESSAGE_RANGE], b"hiiamtom");
        assert_eq!(&bytes[CRC_RANGE], &[0x9E, 0x99, 0x58, 0x3C]);
    }

    #[test]
    fn test_deserialize_splits_message_and_crc() {
        let bytes = [1, 2, 3, 4, 5, 6, 7, 8, 0x78, 0x56, 0x34, 0x12];
        let frame = Frame::deserialize(&bytes);

        assert_eq!(frame.message(), &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(frame.crc(), 0x1234_5678);
        assert_eq!(frame.serialize(), bytes);
    }

    #[test]
    fn test_try_from_slice_rejects_wrong_length() {
        for len in [0, 8, 11, 13, 24] {
            let data = vec![0u8; len];
            match Frame::try_from_slice(&data) {
                Err(FrameError::InvalidLength {
                    kind,
                    expected,
                    actual,
                }) => {
                    assert_eq!(kind, LengthKind::Frame);
                    assert_eq!(expected, FRAME_SIZE);
                    assert_eq!(actual, len);
                }
                other => panic!("expected InvalidLength for {len} bytes, got {other:?}"),
            }
        }
    }
}
