use super::lookup_table::shared_table;
use castagnoli_frame_layout::constants::MESSAGE_SIZE;
use castagnoli_frame_layout::{FrameError, LengthKind};

/// Computes the CRC-32C of an 8-byte message using the shared lookup table.
///
/// # Examples
/// ```
/// use castagnoli_frame::compute_crc;
///
/// assert_eq!(compute_crc(b"hiiamtom"), 0x3C58_999E);
/// assert_eq!(compute_crc(&[0u8; 8]), 0);
/// ```
#[inline]
pub fn compute_crc(message: &[u8; MESSAGE_SIZE]) -> u32 {
    shared_table().compute_crc(message)
}

/// Slice variant of [`compute_crc`].
///
/// # Errors:
/// - `FrameError::InvalidLength` if `message` is not exactly 8 bytes.
pub fn try_compute_crc(message: &[u8]) -> Result<u32, FrameError> {
    let message = as_message(message)?;
    Ok(compute_crc(message))
}

#[inline]
pub(crate) fn as_message(data: &[u8]) -> Result<&[u8; MESSAGE_SIZE], FrameError> {
    data.try_into()
        .map_err(|_| FrameError::invalid_length(LengthKind::Message, MESSAGE_SIZE, data.len()))
}
