use std::ops::Range;

/// Castagnoli generator polynomial (normal, MSB-first form).
pub const POLYNOMIAL: u32 = 0x1EDC_6F41;

/// Number of entries in the byte-wise lookup table.
pub const TABLE_SIZE: usize = 256;

// Frame structure (fixed 12 bytes: message followed by CRC trailer)
pub const MESSAGE_SIZE: usize = 8;
pub const CRC_SIZE: usize = 4;
pub const FRAME_SIZE: usize = MESSAGE_SIZE + CRC_SIZE;

pub const MESSAGE_RANGE: Range<usize> = 0..MESSAGE_SIZE;
pub const CRC_RANGE: Range<usize> = MESSAGE_SIZE..FRAME_SIZE;
