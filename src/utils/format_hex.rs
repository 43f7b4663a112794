/// Formats bytes as lowercase hex, two digits per byte, no separators.
///
/// # Examples
/// ```
/// use castagnoli_frame::utils::format_hex;
///
/// assert_eq!(format_hex(&[0x9e, 0x99, 0x58, 0x3c]), "9e99583c");
/// assert_eq!(format_hex(&[]), "");
/// ```
pub fn format_hex(bytes: &[u8]) -> String {
    use std::fmt::Write;

    bytes
        .iter()
        .fold(String::with_capacity(bytes.len() * 2), |mut out, byte| {
            // Writing to a `String` cannot fail.
            let _ = write!(out, "{:02x}", byte);
            out
        })
}
