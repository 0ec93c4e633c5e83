//! Byte normalization (the codec layer).
//!
//! Every payload, whatever its representation, is turned into
//! [`CanonicalBytes`] before any decoding happens. Validation is strict and
//! errors name the offending character, value and position.
//!
//! The module also carries the small helpers the record decoder builds on:
//! length assertions, Latin-1 encoding and lowercase hex rendering through a
//! compile-time lookup table.

mod canonical;
mod error;
mod hex;
mod input;
mod latin1;
mod length;
mod normalize;

pub use canonical::CanonicalBytes;
pub use error::BytesError;
pub use hex::{HEX_PREFIX, assert_hex_decimal, assert_hex_string, hex_encode};
pub use input::BytesLike;
pub use latin1::encode_latin1;
pub use length::{assert_fixed_length, assert_min_length};
pub use normalize::{normalize, normalize_json};
