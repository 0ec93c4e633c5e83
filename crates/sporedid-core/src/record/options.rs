/// Largest integer a JSON/JavaScript consumer can represent exactly (2^53 - 1).
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// How the account bytes are turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Utf8Policy {
    /// Malformed UTF-8 fails with `FormatError::InvalidUtf8`.
    #[default]
    Strict,
    /// Malformed sequences are replaced with U+FFFD.
    Lossy,
}

/// Range the millisecond expiry must fit in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimestampRange {
    /// Any value that fits in a `u64`.
    #[default]
    Full,
    /// At most [`MAX_SAFE_INTEGER`].
    SafeInteger,
}

impl TimestampRange {
    pub fn max_millis(self) -> u64 {
        match self {
            Self::Full => u64::MAX,
            Self::SafeInteger => MAX_SAFE_INTEGER,
        }
    }
}

/// Decoding policies. The default is strict UTF-8 over the full `u64` range.
///
/// # Examples
/// ```
/// use sporedid_core::record::{DecodeOptions, TimestampRange, Utf8Policy};
///
/// let options = DecodeOptions::default()
///     .with_utf8(Utf8Policy::Lossy)
///     .with_timestamp(TimestampRange::SafeInteger);
/// assert_eq!(options.utf8, Utf8Policy::Lossy);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeOptions {
    pub utf8: Utf8Policy,
    pub timestamp: TimestampRange,
}

impl DecodeOptions {
    pub fn with_utf8(mut self, utf8: Utf8Policy) -> Self {
        self.utf8 = utf8;
        self
    }

    pub fn with_timestamp(mut self, timestamp: TimestampRange) -> Self {
        self.timestamp = timestamp;
        self
    }
}
