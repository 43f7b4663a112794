use super::constants::DEFAULT_READ_BUFFER_SIZE;
use super::frame_reader::FrameReader;
use super::verify_report::VerifyReport;
use crate::frame_validator::FrameValidator;
use castagnoli_frame_layout::constants::FRAME_SIZE;
use castagnoli_frame_layout::{Frame, FrameError, LengthKind};
use std::io::Read;
use tracing::{debug, warn};

/// Validates every frame from `reader` and reports which ones are corrupted.
///
/// Corrupted frames do not stop verification; they are collected into the
/// report. Only a trailing partial frame or an I/O failure aborts with an
/// error.
pub fn verify_stream<R: Read>(reader: R) -> Result<VerifyReport, FrameError> {
    verify_stream_with_capacity(DEFAULT_READ_BUFFER_SIZE, reader)
}

/// Like [`verify_stream`], with an explicit read buffer size.
pub fn verify_stream_with_capacity<R: Read>(
    capacity: usize,
    reader: R,
) -> Result<VerifyReport, FrameError> {
    let validator = FrameValidator::default();
    let mut report = VerifyReport::default();

    for frame in FrameReader::with_capacity(capacity, reader) {
        let frame = frame?;
        record(&validator, &frame, &mut report);
    }

    debug!(
        total = report.total,
        invalid = report.invalid_count(),
        "Verified frame stream"
    );

    Ok(report)
}

/// Validates a contiguous in-memory buffer of frames.
///
/// # Errors:
/// - `FrameError::InvalidLength` if `data` is not a whole number of frames.
pub fn verify_frames(data: &[u8]) -> Result<VerifyReport, FrameError> {
    check_frame_alignment(data)?;

    let validator = FrameValidator::default();
    let mut report = VerifyReport::default();

    for chunk in data.chunks_exact(FRAME_SIZE) {
        let frame = Frame::try_from_slice(chunk)?;
        record(&validator, &frame, &mut report);
    }

    Ok(report)
}

pub(super) fn check_frame_alignment(data: &[u8]) -> Result<(), FrameError> {
    let remainder = data.len() % FRAME_SIZE;
    if remainder != 0 {
        return Err(FrameError::invalid_length(
            LengthKind::Frame,
            FRAME_SIZE,
            remainder,
        ));
    }
    Ok(())
}

fn record(validator: &FrameValidator<'_>, frame: &Frame, report: &mut VerifyReport) {
    if !validator.check(frame) {
        warn!(
            index = report.total,
            carried = %format_args!("{:#010x}", frame.crc()),
            "Frame failed CRC check"
        );
        report.invalid.push(report.total);
    }
    report.total += 1;
}
