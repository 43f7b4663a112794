/// Decodes a hex string into bytes.
///
/// Accepts an optional `0x` prefix and ignores ASCII whitespace, so both
/// `"686969616d746f6d"` and `"68 69 69 61 6d 74 6f 6d"` decode the same.
pub fn parse_hex(input: &str) -> Result<Vec<u8>, String> {
    let trimmed = input.trim();
    let trimmed = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    let digits: Vec<u8> = trimmed
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();

    if digits.len() % 2 != 0 {
        return Err(format!(
            "Hex input has an odd number of digits ({})",
            digits.len()
        ));
    }

    digits
        .chunks_exact(2)
        .map(|pair| Ok((hex_value(pair[0])? << 4) | hex_value(pair[1])?))
        .collect()
}

fn hex_value(digit: u8) -> Result<u8, String> {
    match digit {
        b'0'..=b'9' => Ok(digit - b'0'),
        b'a'..=b'f' => Ok(digit - b'a' + 10),
        b'A'..=b'F' => Ok(digit - b'A' + 10),
        _ => Err(format!("Invalid hex digit: '{}'", digit as char)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_variants() {
        let expected = vec![0x68, 0x69, 0x9e, 0x3c];
        assert_eq!(parse_hex("68699e3c"), Ok(expected.clone()));
        assert_eq!(parse_hex("0x68699E3C"), Ok(expected.clone()));
        assert_eq!(parse_hex(" 68 69 9e 3c\n"), Ok(expected));
    }

    #[test]
    fn test_parse_hex_errors() {
        assert!(parse_hex("abc").is_err());
        assert!(parse_hex("zz").is_err());
    }
}
