use super::constants::DEFAULT_READ_BUFFER_SIZE;
use super::read_full::read_full;
use crate::frame_validator::FrameValidator;
use castagnoli_frame_layout::constants::MESSAGE_SIZE;
use castagnoli_frame_layout::{FrameError, LengthKind};
use std::io::{BufReader, BufWriter, Read, Write};
use tracing::debug;

/// Reads consecutive 8-byte messages and writes each one out as a sealed
/// 12-byte frame.
///
/// # Parameters:
/// - `reader`: Source of raw messages. Its length must be a multiple of 8.
/// - `writer`: Destination for the frames. It is flushed before returning.
///
/// # Returns:
/// - `Ok(count)`: The number of frames written.
/// - `Err(FrameError::InvalidLength)`: If the input ends in the middle of a
///   message. Every complete message before it has already been written.
/// - `Err(FrameError::Io)`: If reading or writing fails.
pub fn seal_stream<R: Read, W: Write>(reader: R, writer: W) -> Result<u64, FrameError> {
    seal_stream_with_capacity(DEFAULT_READ_BUFFER_SIZE, reader, writer)
}

/// Like [`seal_stream`], with an explicit I/O buffer size.
pub fn seal_stream_with_capacity<R: Read, W: Write>(
    capacity: usize,
    reader: R,
    writer: W,
) -> Result<u64, FrameError> {
    let validator = FrameValidator::default();
    let mut reader = BufReader::with_capacity(capacity, reader);
    let mut writer = BufWriter::with_capacity(capacity, writer);

    let mut message = [0u8; MESSAGE_SIZE];
    let mut count = 0u64;

    let result = loop {
        match read_full(&mut reader, &mut message)? {
            0 => break Ok(count),
            MESSAGE_SIZE => {
                writer.write_all(&validator.seal(&message))?;
                count += 1;
            }
            partial => {
                break Err(FrameError::invalid_length(
                    LengthKind::Message,
                    MESSAGE_SIZE,
                    partial,
                ));
            }
        }
    };

    writer.flush()?;
    debug!(frames = count, "Sealed message stream");

    result
}
