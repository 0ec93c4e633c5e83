use thiserror::Error;

/// Errors returned by byte normalization and the codec helpers.
///
/// Every variant describes malformed input; none of them is transient.
///
/// # Examples
/// ```
/// use sporedid_core::bytes::BytesError;
///
/// let err = BytesError::InvalidHexDigit { character: 'g', position: 2 };
/// assert!(err.to_string().contains("invalid hex character"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BytesError {
    #[error("invalid hex string: expected a 0x prefix")]
    InvalidHexPrefix,
    #[error("invalid hex string length: {digits} digits after 0x, must be even")]
    InvalidHexLength { digits: usize },
    #[error("invalid hex character {character:?} at position {position}")]
    InvalidHexDigit { character: char, position: usize },
    #[error("invalid byte value {value} at index {index}: must be an integer in 0..=255")]
    InvalidByteValue { index: usize, value: String },
    #[error("unsupported input: cannot convert {kind} to bytes")]
    UnsupportedInput { kind: &'static str },
    #[error("non latin-1 character {character:?} at position {position}")]
    NonLatin1Character { character: char, position: usize },
    #[error("invalid buffer length: {actual}, should be {expected}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("payload too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
    #[error("invalid hex decimal: at least one digit is required after 0x (use 0x0)")]
    EmptyHexDecimal,
    #[error("invalid hex decimal length: {digits} digits exceed {max_bytes} bytes")]
    HexDecimalTooLong { max_bytes: usize, digits: usize },
}
