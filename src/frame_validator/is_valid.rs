use super::validator::FrameValidator;
use castagnoli_frame_layout::constants::FRAME_SIZE;
use castagnoli_frame_layout::{Frame, FrameError};

/// Checks the integrity of a 12-byte frame.
///
/// Splits the frame into the message (bytes 0–7) and the carried CRC
/// (bytes 8–11, little-endian), recomputes the CRC over the message and
/// compares. A mismatch is an ordinary `false`, not an error: corruption in
/// transit is expected, not exceptional.
///
/// Every single-bit error is detected. Wider corruptions are detected with
/// overwhelming probability, but no 32-bit check can rule out every
/// multi-bit pattern.
///
/// # Examples
/// ```
/// use castagnoli_frame::{encode_frame, is_valid};
///
/// let mut frame = encode_frame(b"hiiamtom");
/// assert!(is_valid(&frame));
///
/// frame[11] ^= 0x80;
/// assert!(!is_valid(&frame));
/// ```
#[inline]
pub fn is_valid(frame: &[u8; FRAME_SIZE]) -> bool {
    FrameValidator::default().is_valid(frame)
}

/// Slice variant of [`is_valid`].
///
/// # Errors:
/// - `FrameError::InvalidLength` if `frame` is not exactly 12 bytes. Framing
///   is checked before the CRC, so a truncated frame never reports `false`.
pub fn try_is_valid(frame: &[u8]) -> Result<bool, FrameError> {
    let frame = Frame::try_from_slice(frame)?;
    Ok(FrameValidator::default().check(&frame))
}
