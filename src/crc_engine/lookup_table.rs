use super::shift_register::divide_byte;
use castagnoli_frame_layout::constants::{MESSAGE_SIZE, TABLE_SIZE};
use std::ops::Index;
use std::sync::OnceLock;
use tracing::debug;

/// Byte-wise lookup table for CRC-32C (normal form, polynomial `0x1EDC6F41`).
///
/// `table[j]` is the partial CRC of byte `j` placed in the top byte of an
/// otherwise empty register and run through eight division rounds. Because
/// the CRC is linear over XOR, the table lets the engine advance a whole
/// byte per step instead of one bit.
///
/// The table is immutable once built and can be shared across threads
/// freely. Build it with [`LookupTable::build`] (usable in `const` context),
/// or use the lazily initialized process-wide instance from [`shared_table`].
#[derive(Clone, PartialEq, Eq)]
pub struct LookupTable {
    entries: [u32; TABLE_SIZE],
}

impl LookupTable {
    pub const fn build() -> Self {
        let mut entries = [0u32; TABLE_SIZE];
        let mut j = 0;
        while j < TABLE_SIZE {
            entries[j] = divide_byte((j as u32) << 24);
            j += 1;
        }
        Self { entries }
    }

    #[inline]
    pub fn entries(&self) -> &[u32; TABLE_SIZE] {
        &self.entries
    }

    /// Computes the CRC of an 8-byte message, one byte per step.
    ///
    /// Produces the same value as
    /// [`compute_crc_reference`](crate::compute_crc_reference) for every input.
    #[inline]
    pub fn compute_crc(&self, message: &[u8; MESSAGE_SIZE]) -> u32 {
        self.checksum(message)
    }

    /// Runs the byte-at-a-time update loop over input of any length.
    ///
    /// Register starts at zero with no final XOR, so for 8-byte input this
    /// is identical to [`LookupTable::compute_crc`]. This is a one-shot
    /// computation; there is no incremental state to resume from.
    #[inline]
    pub fn checksum(&self, data: &[u8]) -> u32 {
        data.iter().fold(0u32, |crc, &byte| {
            let index = (byte ^ (crc >> 24) as u8) as usize;
            (crc << 8) ^ self.entries[index]
        })
    }
}

impl Default for LookupTable {
    fn default() -> Self {
        Self::build()
    }
}

impl Index<u8> for LookupTable {
    type Output = u32;

    #[inline]
    fn index(&self, byte: u8) -> &u32 {
        &self.entries[byte as usize]
    }
}

impl std::fmt::Debug for LookupTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupTable")
            .field("len", &self.entries.len())
            .field("entries[1]", &format_args!("{:#010x}", self.entries[1]))
            .finish()
    }
}

/// Builds a fresh lookup table owned by the caller.
#[inline]
pub fn build_table() -> LookupTable {
    LookupTable::build()
}

static SHARED_TABLE: OnceLock<LookupTable> = OnceLock::new();

/// Returns the process-wide lookup table, building it on first use.
///
/// Concurrent first callers race safely: exactly one of them builds the
/// table and every caller observes the same fully initialized value.
pub fn shared_table() -> &'static LookupTable {
    SHARED_TABLE.get_or_init(|| {
        debug!(entries = TABLE_SIZE, "Building shared CRC-32C lookup table");
        LookupTable::build()
    })
}
