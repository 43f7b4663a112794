/// Default read buffer size for frame streams.
pub const DEFAULT_READ_BUFFER_SIZE: usize = 64 * 1024; // 64 KB
