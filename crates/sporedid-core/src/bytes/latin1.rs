use super::canonical::CanonicalBytes;
use super::error::BytesError;

/// Encode text one byte per character.
///
/// Fails with [`BytesError::NonLatin1Character`] on the first character
/// whose code point is above `0xFF`.
///
/// # Examples
/// ```
/// use sporedid_core::bytes::encode_latin1;
///
/// let bytes = encode_latin1("ab\u{ff}")?;
/// assert_eq!(bytes.as_slice(), &[0x61, 0x62, 0xff]);
/// assert!(encode_latin1("\u{100}").is_err());
/// # Ok::<(), sporedid_core::bytes::BytesError>(())
/// ```
pub fn encode_latin1(text: &str) -> Result<CanonicalBytes, BytesError> {
    text.chars()
        .enumerate()
        .map(|(position, character)| {
            u8::try_from(u32::from(character))
                .map_err(|_| BytesError::NonLatin1Character { character, position })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(CanonicalBytes::from_vec)
}

#[cfg(test)]
mod tests {
    use super::encode_latin1;
    use crate::bytes::BytesError;

    #[test]
    fn empty_text_is_empty_bytes() {
        assert!(encode_latin1("").unwrap().is_empty());
    }

    #[test]
    fn reports_first_offending_character() {
        let err = encode_latin1("ok€x").unwrap_err();
        assert_eq!(
            err,
            BytesError::NonLatin1Character {
                character: '€',
                position: 2
            }
        );
    }
}
