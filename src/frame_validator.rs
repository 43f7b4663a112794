mod encode_frame;
pub use encode_frame::{encode_frame, try_encode_frame};

mod is_valid;
pub use is_valid::{is_valid, try_is_valid};

mod validator;
pub use validator::FrameValidator;
