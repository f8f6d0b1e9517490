use crate::error::ColorFormatError;

/// Parse a 24-bit color in hexadecimal format. If successful, this function
/// returns the three coordinates as unsigned bytes.
///
/// The leading `#` is optional. The remaining string must have exactly six
/// hexadecimal digits, in upper or lower case. Unlike `u8::from_str_radix`,
/// this function rejects signs.
pub(crate) fn parse_hex(s: &str) -> Result<[u8; 3], ColorFormatError> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if digits.len() != 6 {
        return Err(ColorFormatError::UnexpectedLength);
    } else if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorFormatError::MalformedHex);
    }

    fn parse_coordinate(s: &str, index: usize) -> Result<u8, ColorFormatError> {
        let t = s
            .get(2 * index..2 * (index + 1))
            .ok_or(ColorFormatError::MalformedHex)?;
        u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)
    }

    let c1 = parse_coordinate(digits, 0)?;
    let c2 = parse_coordinate(digits, 1)?;
    let c3 = parse_coordinate(digits, 2)?;
    Ok([c1, c2, c3])
}

#[cfg(test)]
mod test {
    use super::parse_hex;
    use crate::error::ColorFormatError;

    #[test]
    fn test_parse_hex() -> Result<(), ColorFormatError> {
        assert_eq!(parse_hex("#ffffff")?, [255, 255, 255], "white with hash");
        assert_eq!(parse_hex("000000")?, [0, 0, 0], "black without hash");
        assert_eq!(parse_hex("#27ae60")?, [39, 174, 96], "status green");
        assert_eq!(parse_hex("#C0392B")?, [192, 57, 43], "uppercase digits");
        Ok(())
    }

    #[test]
    fn test_parse_hex_errors() {
        assert_eq!(
            parse_hex("xyz"),
            Err(ColorFormatError::UnexpectedLength),
            "three letters"
        );
        assert_eq!(
            parse_hex("ff"),
            Err(ColorFormatError::UnexpectedLength),
            "single coordinate"
        );
        assert_eq!(parse_hex(""), Err(ColorFormatError::UnexpectedLength), "empty");
        assert_eq!(
            parse_hex("#"),
            Err(ColorFormatError::UnexpectedLength),
            "hash only"
        );
        assert_eq!(
            parse_hex("#fff"),
            Err(ColorFormatError::UnexpectedLength),
            "no shorthand"
        );
        assert_eq!(
            parse_hex("##ffffff"),
            Err(ColorFormatError::UnexpectedLength),
            "second hash"
        );
        assert_eq!(
            parse_hex("#ffffff00"),
            Err(ColorFormatError::UnexpectedLength),
            "alpha channel"
        );
        assert_eq!(
            parse_hex("#efgefg"),
            Err(ColorFormatError::MalformedHex),
            "non-hex letter"
        );
        assert_eq!(
            parse_hex("+f+f+f"),
            Err(ColorFormatError::MalformedHex),
            "signs"
        );
        assert_eq!(
            parse_hex(" fffff"),
            Err(ColorFormatError::MalformedHex),
            "white space"
        );
        assert_eq!(
            parse_hex("ffé12"),
            Err(ColorFormatError::MalformedHex),
            "non-ASCII"
        );
    }
}
