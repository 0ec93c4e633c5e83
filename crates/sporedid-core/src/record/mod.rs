//! DID record decoding.
//!
//! A record is a fixed 30-byte header followed by the account name:
//! prefix (1), version (1), witness hash (20), expiry seconds as a
//! little-endian `u64` (8), then UTF-8 account bytes up to the end.
//! Prefix and version are carried through unchecked.
//!
//! The decoder follows the usual layering: `layout` holds offsets and
//! ranges, `reader` does bounds-checked access, `parser` builds the
//! [`DidRecord`](crate::DidRecord) without indexing bytes directly.

pub mod error;
pub mod layout;
pub mod options;
pub mod parser;
pub mod reader;

pub use error::FormatError;
pub use options::{DecodeOptions, MAX_SAFE_INTEGER, TimestampRange, Utf8Policy};
pub use parser::{decode_canonical, decode_did_record, decode_did_record_with};
