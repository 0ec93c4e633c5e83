//! Decoder for the DID identity records carried by Spore cells.
//!
//! A caller hands over the content bytes of a cell, in any of the supported
//! representations (hex text, raw bytes or a list of byte values). The
//! `bytes` layer normalizes that input into owned, validated
//! [`CanonicalBytes`](bytes::CanonicalBytes); the `record` layer then applies
//! the fixed record layout (layout/reader/parser) and yields a [`DidRecord`].
//! Everything is pure and synchronous: no I/O, no shared mutable state.
//!
//! Invariants:
//! - `witness_hash` is always 40 lowercase hex characters.
//! - `expire_at` is the on-wire seconds value times 1000, never truncated.
//! - `account` is strict UTF-8 unless lossy decoding is requested.
//!
//! # Examples
//! ```
//! use sporedid_core::bytes::BytesLike;
//! use sporedid_core::decode_did_record;
//!
//! let content = "0x0001b33e31e5b6085b23c542081743d36fec5bfc4744\
//!                e46a6868000000006d6f626974782e626974";
//! let record = decode_did_record(BytesLike::from(content))?;
//! assert_eq!(record.account, "mobitx.bit");
//! assert_eq!(record.expire_at, 1_751_673_572_000);
//! # Ok::<(), sporedid_core::record::FormatError>(())
//! ```

use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

pub mod bytes;
pub mod record;

pub use record::{FormatError, decode_did_record, decode_did_record_with};

/// Decoded identity record.
///
/// Serializes with camelCase keys (`account`, `expireAt`, `witnessHash`).
///
/// # Examples
/// ```
/// use sporedid_core::DidRecord;
///
/// let record = DidRecord {
///     account: "alice.bit".to_string(),
///     expire_at: 1_000_000,
///     witness_hash: "ab".repeat(20),
/// };
/// let json = serde_json::to_value(&record)?;
/// assert_eq!(json["expireAt"], 1_000_000);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidRecord {
    /// Account name, e.g. `alice.bit`. Empty for a header-only record.
    pub account: String,
    /// Expiry in milliseconds since the Unix epoch.
    pub expire_at: u64,
    /// Witness hash as 40 lowercase hex characters, no prefix.
    pub witness_hash: String,
}

impl DidRecord {
    /// RFC 3339 rendering of `expire_at`, or `None` when the instant is
    /// outside the range `time` can represent.
    pub fn expire_at_rfc3339(&self) -> Option<String> {
        let nanos = i128::from(self.expire_at) * 1_000_000;
        OffsetDateTime::from_unix_timestamp_nanos(nanos)
            .ok()
            .and_then(|dt| dt.format(&Rfc3339).ok())
    }
}
