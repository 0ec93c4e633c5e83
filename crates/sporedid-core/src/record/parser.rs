use tracing::debug;

use super::error::FormatError;
use super::layout;
use super::options::{DecodeOptions, TimestampRange};
use super::reader::RecordReader;
use crate::DidRecord;
use crate::bytes::{BytesLike, CanonicalBytes, normalize};

/// Normalize `content` and decode it with the default options.
///
/// # Examples
/// ```
/// use sporedid_core::bytes::BytesLike;
/// use sporedid_core::decode_did_record;
///
/// let mut payload = vec![0x00, 0x01];
/// payload.extend_from_slice(&[0xab; 20]);
/// payload.extend_from_slice(&1000u64.to_le_bytes());
/// payload.extend_from_slice(b"alice.bit");
///
/// let record = decode_did_record(BytesLike::RawBytes(payload))?;
/// assert_eq!(record.account, "alice.bit");
/// assert_eq!(record.expire_at, 1_000_000);
/// assert_eq!(record.witness_hash, "ab".repeat(20));
/// # Ok::<(), sporedid_core::record::FormatError>(())
/// ```
pub fn decode_did_record(content: BytesLike) -> Result<DidRecord, FormatError> {
    decode_did_record_with(content, &DecodeOptions::default())
}

pub fn decode_did_record_with(
    content: BytesLike,
    options: &DecodeOptions,
) -> Result<DidRecord, FormatError> {
    let canonical = normalize(content)?;
    decode_canonical(&canonical, options)
}

/// Decode already normalized bytes.
///
/// Prefix and version bytes are read but not validated.
pub fn decode_canonical(
    bytes: &CanonicalBytes,
    options: &DecodeOptions,
) -> Result<DidRecord, FormatError> {
    let reader = RecordReader::new(bytes);
    reader.require_len(layout::HEADER_LEN)?;

    let prefix = reader.read_u8(layout::PREFIX_OFFSET)?;
    let version = reader.read_u8(layout::VERSION_OFFSET)?;
    let witness_hash = reader.read_witness_hash_hex()?;
    let seconds = reader.read_u64_le(layout::EXPIRE_AT_RANGE.clone())?;
    let expire_at = expire_at_millis(seconds, options.timestamp)?;
    let account = reader.read_account(options.utf8)?;

    debug!(
        prefix,
        version,
        len = bytes.len(),
        account_len = account.len(),
        "decoded DID record"
    );

    Ok(DidRecord {
        account,
        expire_at,
        witness_hash,
    })
}

fn expire_at_millis(seconds: u64, range: TimestampRange) -> Result<u64, FormatError> {
    let max_millis = range.max_millis();
    seconds
        .checked_mul(layout::MILLIS_PER_SECOND)
        .filter(|millis| *millis <= max_millis)
        .ok_or(FormatError::TimestampOverflow {
            seconds,
            max_millis,
        })
}
