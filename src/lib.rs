//! # Castagnoli Frame
//!
//! CRC-32C (Castagnoli, polynomial `0x1EDC6F41`) for fixed-size 8-byte
//! messages, sealed into 12-byte frames with a 4-byte little-endian trailer.
//!
//! ## Layers
//!
//! - **Lookup table**: [`LookupTable::build`] precomputes the 256 per-byte
//!   partial CRCs. It is a `const fn`, and [`shared_table`] keeps one lazily
//!   built instance for the whole process.
//! - **CRC engine**: [`compute_crc`] advances one byte per step through the
//!   table. [`compute_crc_reference`] does bit-serial polynomial division and
//!   needs no table. The two agree for every input.
//! - **Frame validator**: [`encode_frame`] appends the CRC to a message, and
//!   [`is_valid`] recomputes it and compares against the trailer.
//!
//! The CRC register starts at zero and has no final XOR. Values therefore do
//! **not** match the iSCSI CRC-32C variant. They match the plain MSB-first
//! polynomial remainder.
//!
//! ## Example
//! ```
//! use castagnoli_frame::{compute_crc, encode_frame, is_valid};
//!
//! let message = b"hiiamtom";
//! assert_eq!(compute_crc(message), 0x3C58_999E);
//!
//! let mut frame = encode_frame(message);
//! assert!(is_valid(&frame));
//!
//! // Any single-bit error is detected.
//! frame[4] ^= 0x10;
//! assert!(!is_valid(&frame));
//! ```
//!
//! ## Lengths
//!
//! The core API takes `&[u8; 8]` and `&[u8; 12]`, so a wrong length cannot
//! be expressed. The `try_*` variants accept slices and return
//! [`FrameError::InvalidLength`] instead.

pub mod crc_engine;
pub use crc_engine::*;

pub mod frame_validator;
pub use frame_validator::*;

pub mod frame_stream;
pub use frame_stream::*;

pub mod utils;

pub mod cli;

pub use castagnoli_frame_layout::constants;
pub use castagnoli_frame_layout::{Frame, FrameError, LengthKind};
