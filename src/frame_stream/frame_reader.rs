use super::constants::DEFAULT_READ_BUFFER_SIZE;
use super::read_full::read_full;
use castagnoli_frame_layout::constants::FRAME_SIZE;
use castagnoli_frame_layout::{Frame, FrameError, LengthKind};
use std::io::{BufReader, Read};

/// Iterator over consecutive 12-byte frames read from any `Read` source.
///
/// Frames are yielded as received; checking them is up to the caller (see
/// [`verify_stream`](crate::verify_stream)). If the input ends in the middle
/// of a frame, the iterator yields one `FrameError::InvalidLength` carrying
/// the size of the leftover tail, then stops.
pub struct FrameReader<R: Read> {
    reader: BufReader<R>,
    done: bool,
}

impl<R: Read> FrameReader<R> {
    pub fn new(reader: R) -> Self {
        Self::with_capacity(DEFAULT_READ_BUFFER_SIZE, reader)
    }

    pub fn with_capacity(capacity: usize, reader: R) -> Self {
        Self {
            reader: BufReader::with_capacity(capacity, reader),
            done: false,
        }
    }
}

impl<R: Read> Iterator for FrameReader<R> {
    type Item = Result<Frame, FrameError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut buf = [0u8; FRAME_SIZE];
        match read_full(&mut self.reader, &mut buf) {
            Ok(FRAME_SIZE) => Some(Ok(Frame::deserialize(&buf))),
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(partial) => {
                self.done = true;
                Some(Err(FrameError::invalid_length(
                    LengthKind::Frame,
                    FRAME_SIZE,
                    partial,
                )))
            }
            Err(err) => {
                self.done = true;
                Some(Err(err.into()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode_frame;
    use std::io::Cursor;

    #[test]
    fn test_reads_consecutive_frames() {
        let mut data = Vec::new();
        data.extend_from_slice(&encode_frame(b"aaaaaaaa"));
        data.extend_from_slice(&encode_frame(b"bbbbbbbb"));

        let frames: Vec<Frame> = FrameReader::new(Cursor::new(data))
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].message(), b"aaaaaaaa");
        assert_eq!(frames[1].message(), b"bbbbbbbb");
    }

    #[test]
    fn test_trailing_partial_frame_is_an_error() {
        let mut data = encode_frame(b"aaaaaaaa").to_vec();
        data.extend_from_slice(&[0u8; 5]);

        let mut reader = FrameReader::with_capacity(16, Cursor::new(data));

        assert!(reader.next().unwrap().is_ok());
        match reader.next() {
            Some(Err(FrameError::InvalidLength { actual, .. })) => assert_eq!(actual, 5),
            other => panic!("expected InvalidLength, got {other:?}"),
        }
        assert!(reader.next().is_none());
    }
}
