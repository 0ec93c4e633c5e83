use super::error::FormatError;
use super::layout;
use super::options::Utf8Policy;
use crate::bytes::{assert_fixed_length, assert_min_length, hex_encode};

pub struct RecordReader<'a> {
    payload: &'a [u8],
}

impl<'a> RecordReader<'a> {
    pub fn new(payload: &'a [u8]) -> Self {
        Self { payload }
    }

    pub fn require_len(&self, needed: usize) -> Result<(), FormatError> {
        assert_min_length(self.payload, needed).map_err(|_| FormatError::TruncatedRecord {
            needed,
            actual: self.payload.len(),
        })
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, FormatError> {
        self.payload
            .get(offset)
            .copied()
            .ok_or(FormatError::TruncatedRecord {
                needed: offset + 1,
                actual: self.payload.len(),
            })
    }

    pub fn read_slice(&self, range: std::ops::Range<usize>) -> Result<&'a [u8], FormatError> {
        self.payload
            .get(range.clone())
            .ok_or(FormatError::TruncatedRecord {
                needed: range.end,
                actual: self.payload.len(),
            })
    }

    pub fn read_u64_le(&self, range: std::ops::Range<usize>) -> Result<u64, FormatError> {
        let bytes = self.read_slice(range)?;
        let bytes: [u8; 8] = bytes.try_into().map_err(|_| FormatError::TruncatedRecord {
            needed: layout::EXPIRE_AT_SIZE,
            actual: bytes.len(),
        })?;
        Ok(u64::from_le_bytes(bytes))
    }

    pub fn read_tail(&self, offset: usize) -> Result<&'a [u8], FormatError> {
        self.payload
            .get(offset..)
            .ok_or(FormatError::TruncatedRecord {
                needed: offset,
                actual: self.payload.len(),
            })
    }

    pub fn read_witness_hash_hex(&self) -> Result<String, FormatError> {
        let bytes = self.read_slice(layout::WITNESS_HASH_RANGE.clone())?;
        assert_fixed_length(bytes, layout::WITNESS_HASH_SIZE)?;
        Ok(hex_encode(bytes))
    }

    pub fn read_account(&self, policy: Utf8Policy) -> Result<String, FormatError> {
        let bytes = self.read_tail(layout::ACCOUNT_OFFSET)?;
        match policy {
            Utf8Policy::Strict => std::str::from_utf8(bytes)
                .map(str::to_owned)
                .map_err(|err| FormatError::InvalidUtf8 {
                    offset: layout::ACCOUNT_OFFSET + err.valid_up_to(),
                }),
            Utf8Policy::Lossy => Ok(String::from_utf8_lossy(bytes).into_owned()),
        }
    }
}
