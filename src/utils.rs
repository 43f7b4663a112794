mod format_hex;
pub use format_hex::format_hex;

mod parse_buffer_size;
pub use parse_buffer_size::parse_buffer_size;

mod parse_hex;
pub use parse_hex::parse_hex;
