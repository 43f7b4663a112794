use indoc::indoc;

// Help text template with placeholder
pub const HELP_TEMPLATE: &str = indoc! {r#"
    Examples:
      # Computing the CRC of an ASCII message
      %BINARY_NAME% crc hiiamtom

      # Computing the CRC of a hex message with the bit-serial engine
      %BINARY_NAME% --hex crc 686969616d746f6d --reference

      # Sealing a message into a frame
      %BINARY_NAME% seal hiiamtom

      # Validating a frame (exit status 1 if corrupted)
      %BINARY_NAME% validate 686969616d746f6d9e99583c

      # Sealing and verifying files of messages / frames
      %BINARY_NAME% seal-file messages.bin frames.bin
      %BINARY_NAME% verify-file frames.bin

    Environment:
      RUST_LOG               Log filter (default: warn)
      CRC_FRAME_READ_BUFFER  I/O buffer size for file commands, e.g. 64k (default: 64k)
"#};
