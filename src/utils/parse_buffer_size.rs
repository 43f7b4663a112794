/// Parses a human-readable buffer size such as `"4096"`, `"64k"` or `"1MB"`.
///
/// Units are binary (`k` = 1024) and case-insensitive. A bare number is bytes.
/// Zero is rejected since a zero-capacity buffer cannot make progress.
pub fn parse_buffer_size(size_str: &str) -> Result<usize, String> {
    let size_str = size_str.trim().to_lowercase();

    let num_end = size_str
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(size_str.len());
    let (num_part, unit_part) = size_str.split_at(num_end);

    let multiplier: usize = match unit_part.trim() {
        "" | "b" => 1,
        "k" | "kb" => 1024,
        "m" | "mb" => 1024 * 1024,
        _ => return Err(format!("Invalid buffer size unit: '{}'", unit_part)),
    };

    let size = num_part
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_mul(multiplier))
        .ok_or_else(|| format!("Failed to parse buffer size: '{}'", size_str))?;

    if size == 0 {
        return Err("Buffer size must be greater than zero".to_string());
    }

    Ok(size)
}
