pub use castagnoli_frame_layout::constants::POLYNOMIAL;

mod shift_register;
pub use shift_register::divide_byte;

mod lookup_table;
pub use lookup_table::{LookupTable, build_table, shared_table};

mod compute_crc;
pub use compute_crc::{compute_crc, try_compute_crc};
pub(crate) use compute_crc::as_message;

mod compute_crc_reference;
pub use compute_crc_reference::{compute_crc_reference, try_compute_crc_reference};
