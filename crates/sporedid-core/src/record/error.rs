use thiserror::Error;

use crate::bytes::BytesError;

/// Errors returned by DID record decoding.
///
/// # Examples
/// ```
/// use sporedid_core::record::FormatError;
///
/// let err = FormatError::TruncatedRecord { needed: 30, actual: 29 };
/// assert!(err.to_string().contains("truncated record"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error(transparent)]
    Bytes(#[from] BytesError),
    #[error("truncated record: need at least {needed} bytes, got {actual}")]
    TruncatedRecord { needed: usize, actual: usize },
    #[error("expiry of {seconds}s exceeds the representable range of {max_millis}ms")]
    TimestampOverflow { seconds: u64, max_millis: u64 },
    #[error("account is not valid UTF-8 (invalid sequence at byte offset {offset})")]
    InvalidUtf8 { offset: usize },
}
