mod constants;
pub use constants::*;

mod read_full;

mod frame_reader;
pub use frame_reader::FrameReader;

mod seal_stream;
pub use seal_stream::{seal_stream, seal_stream_with_capacity};

mod verify_report;
pub use verify_report::VerifyReport;

mod verify_stream;
pub use verify_stream::{verify_frames, verify_stream, verify_stream_with_capacity};

#[cfg(feature = "parallel")]
mod par_verify_frames;
#[cfg(feature = "parallel")]
pub use par_verify_frames::par_verify_frames;
