use super::error::BytesError;

pub const HEX_PREFIX: &str = "0x";

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Byte to lowercase hex pair, computed at compile time.
static BYTE_TO_HEX: [[u8; 2]; 256] = build_byte_to_hex();

const fn build_byte_to_hex() -> [[u8; 2]; 256] {
    let mut table = [[0u8; 2]; 256];
    let mut n = 0;
    while n < 256 {
        table[n] = [HEX_DIGITS[n >> 4], HEX_DIGITS[n & 0x0f]];
        n += 1;
    }
    table
}

/// Render bytes as lowercase hex, two digits per byte, no `0x` prefix.
///
/// # Examples
/// ```
/// use sporedid_core::bytes::hex_encode;
///
/// assert_eq!(hex_encode(&[0x00, 0x0f, 0xab]), "000fab");
/// assert_eq!(hex_encode(&[]), "");
/// ```
pub fn hex_encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &byte in bytes {
        let [high, low] = BYTE_TO_HEX[byte as usize];
        out.push(high as char);
        out.push(low as char);
    }
    out
}

/// Check that `text` matches `0x([0-9a-fA-F]{2})*`.
///
/// When `byte_len` is given the decoded length must match it exactly.
///
/// # Examples
/// ```
/// use sporedid_core::bytes::{BytesError, assert_hex_string};
///
/// assert!(assert_hex_string("0xABcd", Some(2)).is_ok());
/// assert_eq!(
///     assert_hex_string("0x1", None),
///     Err(BytesError::InvalidHexLength { digits: 1 })
/// );
/// ```
pub fn assert_hex_string(text: &str, byte_len: Option<usize>) -> Result<(), BytesError> {
    let digits = strip_prefix(text)?;
    let count = digits.chars().count();
    if count % 2 != 0 {
        return Err(BytesError::InvalidHexLength { digits: count });
    }
    if let Some(expected) = byte_len {
        if count / 2 != expected {
            return Err(BytesError::LengthMismatch {
                expected,
                actual: count / 2,
            });
        }
    }
    check_digits(digits)
}

/// Check that `text` is a hex-encoded number: `0x` followed by one or more
/// digits, any parity.
///
/// `max_bytes` bounds the number of digits to `2 * max_bytes`.
///
/// # Examples
/// ```
/// use sporedid_core::bytes::{BytesError, assert_hex_decimal};
///
/// assert!(assert_hex_decimal("0x1", None).is_ok());
/// assert_eq!(assert_hex_decimal("0x", None), Err(BytesError::EmptyHexDecimal));
/// ```
pub fn assert_hex_decimal(text: &str, max_bytes: Option<usize>) -> Result<(), BytesError> {
    let digits = strip_prefix(text)?;
    if digits.is_empty() {
        return Err(BytesError::EmptyHexDecimal);
    }
    if let Some(max_bytes) = max_bytes {
        let count = digits.chars().count();
        if count > max_bytes.saturating_mul(2) {
            return Err(BytesError::HexDecimalTooLong {
                max_bytes,
                digits: count,
            });
        }
    }
    check_digits(digits)
}

pub(crate) fn decode_hex_string(text: &str) -> Result<Vec<u8>, BytesError> {
    assert_hex_string(text, None)?;
    let digits = &text.as_bytes()[HEX_PREFIX.len()..];
    Ok(digits
        .chunks_exact(2)
        .map(|pair| (nibble(pair[0]) << 4) | nibble(pair[1]))
        .collect())
}

fn strip_prefix(text: &str) -> Result<&str, BytesError> {
    text.strip_prefix(HEX_PREFIX)
        .ok_or(BytesError::InvalidHexPrefix)
}

fn check_digits(digits: &str) -> Result<(), BytesError> {
    for (offset, character) in digits.chars().enumerate() {
        if !character.is_ascii_hexdigit() {
            return Err(BytesError::InvalidHexDigit {
                character,
                position: HEX_PREFIX.len() + offset,
            });
        }
    }
    Ok(())
}

// Input is validated by `check_digits` first.
fn nibble(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => digit - b'A' + 10,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_every_byte() {
        for n in 0..=255u8 {
            assert_eq!(hex_encode(&[n]), format!("{n:02x}"));
        }
    }

    #[test]
    fn decode_mixed_case() {
        assert_eq!(decode_hex_string("0xAbCdEf09").unwrap(), vec![0xab, 0xcd, 0xef, 0x09]);
    }

    #[test]
    fn decode_bare_prefix_is_empty() {
        assert_eq!(decode_hex_string("0x").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn reject_missing_prefix() {
        assert_eq!(decode_hex_string("abcd"), Err(BytesError::InvalidHexPrefix));
        assert_eq!(decode_hex_string("0Xab"), Err(BytesError::InvalidHexPrefix));
        assert_eq!(decode_hex_string(""), Err(BytesError::InvalidHexPrefix));
    }

    #[test]
    fn reject_odd_length() {
        assert_eq!(
            decode_hex_string("0x1"),
            Err(BytesError::InvalidHexLength { digits: 1 })
        );
    }

    #[test]
    fn reject_invalid_digit_with_position() {
        assert_eq!(
            decode_hex_string("0xg1"),
            Err(BytesError::InvalidHexDigit {
                character: 'g',
                position: 2
            })
        );
        assert_eq!(
            decode_hex_string("0x00é1"),
            Err(BytesError::InvalidHexDigit {
                character: 'é',
                position: 4
            })
        );
    }

    #[test]
    fn hex_string_byte_length_mismatch() {
        assert_eq!(
            assert_hex_string("0x0011", Some(3)),
            Err(BytesError::LengthMismatch {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn hex_decimal_accepts_odd_digit_count() {
        assert!(assert_hex_decimal("0xabc", Some(2)).is_ok());
    }

    #[test]
    fn hex_decimal_bounds() {
        assert!(assert_hex_decimal("0xffff", Some(2)).is_ok());
        assert_eq!(
            assert_hex_decimal("0x1ffff", Some(2)),
            Err(BytesError::HexDecimalTooLong {
                max_bytes: 2,
                digits: 5
            })
        );
    }

    #[test]
    fn hex_decimal_checks_prefix_then_digits() {
        assert_eq!(assert_hex_decimal("12", None), Err(BytesError::InvalidHexPrefix));
        assert_eq!(
            assert_hex_decimal("0x1z", None),
            Err(BytesError::InvalidHexDigit {
                character: 'z',
                position: 3
            })
        );
    }
}
