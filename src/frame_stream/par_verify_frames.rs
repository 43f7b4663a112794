use super::verify_report::VerifyReport;
use super::verify_stream::check_frame_alignment;
use crate::frame_validator::FrameValidator;
use castagnoli_frame_layout::constants::FRAME_SIZE;
use castagnoli_frame_layout::{Frame, FrameError};
use rayon::prelude::*;

/// Parallel counterpart of [`verify_frames`](crate::verify_frames).
///
/// Frames are checked across the rayon thread pool against the shared
/// lookup table, which needs no synchronization once built. The report is
/// identical to the sequential one, including the ordering of `invalid`.
pub fn par_verify_frames(data: &[u8]) -> Result<VerifyReport, FrameError> {
    check_frame_alignment(data)?;

    let validator = FrameValidator::default();

    let invalid: Vec<u64> = data
        .par_chunks_exact(FRAME_SIZE)
        .enumerate()
        .filter_map(|(index, chunk)| {
            let frame = Frame::try_from_slice(chunk).ok()?;
            (!validator.check(&frame)).then_some(index as u64)
        })
        .collect();

    Ok(VerifyReport {
        total: (data.len() / FRAME_SIZE) as u64,
        invalid,
    })
}
