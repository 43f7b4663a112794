use super::compute_crc::as_message;
use super::shift_register::divide_byte;
use castagnoli_frame_layout::FrameError;
use castagnoli_frame_layout::constants::MESSAGE_SIZE;

/// Computes the CRC-32C of an 8-byte message by bit-serial polynomial division.
///
/// This is the reference algorithm: each byte is XORed into the top of the
/// register and then divided out one bit at a time. It needs no lookup table
/// and is used to check the table-driven path, which must agree with it for
/// every input.
pub fn compute_crc_reference(message: &[u8; MESSAGE_SIZE]) -> u32 {
    message
        .iter()
        .fold(0u32, |crc, &byte| divide_byte(crc ^ ((byte as u32) << 24)))
}

/// Slice variant of [`compute_crc_reference`].
///
/// # Errors:
/// - `FrameError::InvalidLength` if `message` is not exactly 8 bytes.
pub fn try_compute_crc_reference(message: &[u8]) -> Result<u32, FrameError> {
    let message = as_message(message)?;
    Ok(compute_crc_reference(message))
}
