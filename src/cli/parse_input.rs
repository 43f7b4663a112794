use crate::utils::parse_hex;
use castagnoli_frame_layout::constants::{FRAME_SIZE, MESSAGE_SIZE};

/// Parses a message argument into exactly 8 bytes.
///
/// Without `hex`, the argument's raw UTF-8 bytes are used, so it must be
/// exactly 8 bytes long (8 ASCII characters).
pub fn parse_message(input: &str, hex: bool) -> Result<[u8; MESSAGE_SIZE], String> {
    let bytes = if hex {
        parse_hex(input)?
    } else {
        input.as_bytes().to_vec()
    };

    let len = bytes.len();
    bytes.try_into().map_err(|_| {
        format!(
            "Message must be exactly {} bytes, got {}",
            MESSAGE_SIZE, len
        )
    })
}

/// Parses a hex frame argument into exactly 12 bytes.
pub fn parse_frame(input: &str) -> Result<[u8; FRAME_SIZE], String> {
    let bytes = parse_hex(input)?;

    let len = bytes.len();
    bytes
        .try_into()
        .map_err(|_| format!("Frame must be exactly {} bytes, got {}", FRAME_SIZE, len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_message_ascii_and_hex() {
        assert_eq!(parse_message("hiiamtom", false), Ok(*b"hiiamtom"));
        assert_eq!(parse_message("686969616d746f6d", true), Ok(*b"hiiamtom"));
    }

    #[test]
    fn test_parse_message_wrong_length() {
        let err = parse_message("hello", false).unwrap_err();
        assert!(err.contains("exactly 8 bytes, got 5"), "{err}");
    }

    #[test]
    fn test_parse_frame() {
        let frame = parse_frame("686969616d746f6d9e99583c").unwrap();
        assert_eq!(&frame[8..], &[0x9e, 0x99, 0x58, 0x3c]);
        assert!(parse_frame("686969616d746f6d").is_err());
    }
}
