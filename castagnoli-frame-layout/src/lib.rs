pub mod constants;

pub mod frame;
pub use frame::*;

pub mod frame_error;
pub use frame_error::*;
