use serde_json::Value;
use tracing::trace;

use super::canonical::CanonicalBytes;
use super::error::BytesError;
use super::hex::decode_hex_string;
use super::input::BytesLike;

/// Convert any [`BytesLike`] into validated, owned [`CanonicalBytes`].
///
/// Hex strings decode pairwise, high nibble first; a bare `0x` yields empty
/// bytes. Raw bytes are taken over unchanged. Byte lists are range-checked
/// element by element.
///
/// # Examples
/// ```
/// use sporedid_core::bytes::{BytesError, BytesLike, normalize};
///
/// let bytes = normalize(BytesLike::ByteList(vec![0, 255]))?;
/// assert_eq!(bytes.as_slice(), &[0x00, 0xff]);
///
/// let err = normalize(BytesLike::ByteList(vec![0, 256])).unwrap_err();
/// assert!(matches!(err, BytesError::InvalidByteValue { index: 1, .. }));
/// # Ok::<(), BytesError>(())
/// ```
pub fn normalize(input: BytesLike) -> Result<CanonicalBytes, BytesError> {
    let kind = input.kind();
    let bytes = match input {
        BytesLike::HexString(text) => decode_hex_string(&text)?,
        BytesLike::RawBytes(bytes) => bytes,
        BytesLike::ByteList(values) => byte_list(&values)?,
    };
    trace!(kind, len = bytes.len(), "normalized payload");
    Ok(CanonicalBytes::from_vec(bytes))
}

/// Infer the input variant of a JSON value, then normalize it.
pub fn normalize_json(value: &Value) -> Result<CanonicalBytes, BytesError> {
    normalize(BytesLike::from_json(value)?)
}

fn byte_list(values: &[i64]) -> Result<Vec<u8>, BytesError> {
    values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            u8::try_from(value).map_err(|_| BytesError::InvalidByteValue {
                index,
                value: value.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{normalize, normalize_json};
    use crate::bytes::{BytesError, BytesLike};

    #[test]
    fn raw_bytes_are_copied_verbatim() {
        let source = [9u8, 8, 7];
        let bytes = normalize(BytesLike::from(&source[..])).unwrap();
        assert_eq!(bytes.as_slice(), &source);
    }

    #[test]
    fn caller_mutation_does_not_reach_canonical_bytes() {
        let mut source = vec![1u8, 2, 3];
        let bytes = normalize(BytesLike::from(source.as_slice())).unwrap();
        source[0] = 0xff;
        assert_eq!(bytes.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn hex_string_decodes_high_nibble_first() {
        let bytes = normalize(BytesLike::from("0x1f20")).unwrap();
        assert_eq!(bytes.as_slice(), &[0x1f, 0x20]);
    }

    #[test]
    fn bare_prefix_is_empty() {
        let bytes = normalize(BytesLike::from("0x")).unwrap();
        assert!(bytes.is_empty());
    }

    #[test]
    fn negative_list_value_is_invalid() {
        let err = normalize(BytesLike::ByteList(vec![3, -1])).unwrap_err();
        assert_eq!(
            err,
            BytesError::InvalidByteValue {
                index: 1,
                value: "-1".to_string()
            }
        );
    }

    #[test]
    fn empty_list_is_empty_bytes() {
        let bytes = normalize(BytesLike::ByteList(Vec::new())).unwrap();
        assert!(bytes.is_empty());
    }

    #[test]
    fn json_number_is_unsupported() {
        let err = normalize_json(&json!(12)).unwrap_err();
        assert!(matches!(err, BytesError::UnsupportedInput { .. }));
    }
}
