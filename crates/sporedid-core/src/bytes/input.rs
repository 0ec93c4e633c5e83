use serde_json::Value;

use super::error::BytesError;

/// Supported input representations for a byte payload.
///
/// The set is closed: callers construct a variant explicitly, or infer one
/// once at a JSON boundary with [`BytesLike::from_json`].
///
/// # Examples
/// ```
/// use sporedid_core::bytes::BytesLike;
///
/// let hex = BytesLike::from("0x0102");
/// let raw = BytesLike::from(&[1u8, 2][..]);
/// let list = BytesLike::ByteList(vec![1, 2]);
/// assert_eq!(hex.kind(), "hex string");
/// assert_eq!(raw.kind(), "raw bytes");
/// assert_eq!(list.kind(), "byte list");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BytesLike {
    /// `0x` followed by an even number of hex digits, any case.
    HexString(String),
    /// Contiguous bytes, used as-is.
    RawBytes(Vec<u8>),
    /// Integers that must each lie in `0..=255`.
    ByteList(Vec<i64>),
}

impl BytesLike {
    /// Infer the variant of a JSON value.
    ///
    /// Strings become [`BytesLike::HexString`] and arrays become
    /// [`BytesLike::ByteList`]. Array elements that are not integers in
    /// `0..=255` fail with [`BytesError::InvalidByteValue`]; any other JSON
    /// kind fails with [`BytesError::UnsupportedInput`].
    ///
    /// # Examples
    /// ```
    /// use serde_json::json;
    /// use sporedid_core::bytes::{BytesError, BytesLike};
    ///
    /// let input = BytesLike::from_json(&json!([0, 255]))?;
    /// assert_eq!(input, BytesLike::ByteList(vec![0, 255]));
    ///
    /// let err = BytesLike::from_json(&json!(42)).unwrap_err();
    /// assert_eq!(err, BytesError::UnsupportedInput { kind: "number" });
    /// # Ok::<(), BytesError>(())
    /// ```
    pub fn from_json(value: &Value) -> Result<Self, BytesError> {
        match value {
            Value::String(text) => Ok(Self::HexString(text.clone())),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(index, item)| json_byte(index, item))
                .collect::<Result<Vec<_>, _>>()
                .map(Self::ByteList),
            other => Err(BytesError::UnsupportedInput {
                kind: json_kind(other),
            }),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::HexString(_) => "hex string",
            Self::RawBytes(_) => "raw bytes",
            Self::ByteList(_) => "byte list",
        }
    }
}

impl From<&str> for BytesLike {
    fn from(value: &str) -> Self {
        Self::HexString(value.to_string())
    }
}

impl From<String> for BytesLike {
    fn from(value: String) -> Self {
        Self::HexString(value)
    }
}

impl From<&[u8]> for BytesLike {
    fn from(value: &[u8]) -> Self {
        Self::RawBytes(value.to_vec())
    }
}

impl From<Vec<u8>> for BytesLike {
    fn from(value: Vec<u8>) -> Self {
        Self::RawBytes(value)
    }
}

impl From<Vec<i64>> for BytesLike {
    fn from(value: Vec<i64>) -> Self {
        Self::ByteList(value)
    }
}

fn json_byte(index: usize, item: &Value) -> Result<i64, BytesError> {
    // `as_i64` is `None` for floats such as 1.5 and for integers above i64.
    item.as_i64()
        .filter(|value| (0..=255).contains(value))
        .ok_or_else(|| BytesError::InvalidByteValue {
            index,
            value: item.to_string(),
        })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
