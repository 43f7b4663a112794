use std::fmt;
use std::io;

/// Which fixed-size unit a length check was applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthKind {
    Message,
    Frame,
}

impl fmt::Display for LengthKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LengthKind::Message => f.write_str("message"),
            LengthKind::Frame => f.write_str("frame"),
        }
    }
}

/// Errors produced while handling messages and frames.
///
/// A checksum mismatch is **not** an error: validation reports it as `false`.
/// The only failure conditions are a wrong input length and I/O failures of
/// the underlying reader or writer when processing frame streams.
#[derive(Debug)]
pub enum FrameError {
    /// The input was not exactly `expected` bytes long.
    InvalidLength {
        kind: LengthKind,
        expected: usize,
        actual: usize,
    },

    Io(io::Error),
}

impl FrameError {
    #[inline]
    pub fn invalid_length(kind: LengthKind, expected: usize, actual: usize) -> Self {
        FrameError::InvalidLength {
            kind,
            expected,
            actual,
        }
    }
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::InvalidLength {
                kind,
                expected,
                actual,
            } => write!(
                f,
                "invalid {} length: expected {} bytes, got {}",
                kind, expected, actual
            ),
            FrameError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for FrameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FrameError::Io(err) => Some(err),
            FrameError::InvalidLength { .. } => None,
        }
    }
}

impl From<io::Error> for FrameError {
    fn from(err: io::Error) -> Self {
        FrameError::Io(err)
    }
}
