use std::fmt;
use std::ops::Deref;

use super::hex::hex_encode;

/// Owned, immutable byte sequence produced by the codec.
///
/// Values are only built inside this crate (by [`normalize`](super::normalize)
/// or [`encode_latin1`](super::encode_latin1)) and always own a fresh copy of
/// the input, so later mutation of the caller's buffer cannot reach them.
///
/// # Examples
/// ```
/// use sporedid_core::bytes::{BytesLike, normalize};
///
/// let bytes = normalize(BytesLike::HexString("0x00ff".to_string()))?;
/// assert_eq!(bytes.as_slice(), &[0x00, 0xff]);
/// assert_eq!(bytes.to_string(), "0x00ff");
/// # Ok::<(), sporedid_core::bytes::BytesError>(())
/// ```
///
/// There is no public constructor:
/// ```compile_fail
/// use sporedid_core::bytes::CanonicalBytes;
///
/// let bytes = CanonicalBytes::default();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalBytes(Box<[u8]>);

impl CanonicalBytes {
    pub(crate) fn from_vec(bytes: Vec<u8>) -> Self {
        Self(bytes.into_boxed_slice())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Lowercase hex rendering without a prefix.
    pub fn to_hex(&self) -> String {
        hex_encode(&self.0)
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0.into_vec()
    }
}

impl Deref for CanonicalBytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for CanonicalBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Renders as `0x`-prefixed lowercase hex, the form accepted back by
/// `BytesLike::HexString`.
impl fmt::Display for CanonicalBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}
