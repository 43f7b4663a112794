use super::validator::FrameValidator;
use crate::crc_engine::as_message;
use castagnoli_frame_layout::FrameError;
use castagnoli_frame_layout::constants::{FRAME_SIZE, MESSAGE_SIZE};

/// Builds a 12-byte frame: the message followed by its little-endian CRC-32C.
///
/// # Examples
/// ```
/// use castagnoli_frame::encode_frame;
///
/// let frame = encode_frame(b"hiiamtom");
/// assert_eq!(&frame[..8], b"hiiamtom");
/// assert_eq!(&frame[8..], &0x3C58_999Eu32.to_le_bytes());
/// ```
#[inline]
pub fn encode_frame(message: &[u8; MESSAGE_SIZE]) -> [u8; FRAME_SIZE] {
    FrameValidator::default().seal(message)
}

/// Slice variant of [`encode_frame`].
///
/// # Errors:
/// - `FrameError::InvalidLength` if `message` is not exactly 8 bytes.
pub fn try_encode_frame(message: &[u8]) -> Result<[u8; FRAME_SIZE], FrameError> {
    let message = as_message(message)?;
    Ok(encode_frame(message))
}
