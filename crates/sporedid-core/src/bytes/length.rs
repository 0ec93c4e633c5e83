use super::error::BytesError;

/// Fails with [`BytesError::LengthMismatch`] unless `bytes.len() == expected`.
pub fn assert_fixed_length(bytes: &[u8], expected: usize) -> Result<(), BytesError> {
    if bytes.len() != expected {
        return Err(BytesError::LengthMismatch {
            expected,
            actual: bytes.len(),
        });
    }
    Ok(())
}

/// Fails with [`BytesError::TooShort`] when `bytes.len() < needed`.
pub fn assert_min_length(bytes: &[u8], needed: usize) -> Result<(), BytesError> {
    if bytes.len() < needed {
        return Err(BytesError::TooShort {
            needed,
            actual: bytes.len(),
        });
    }
    Ok(())
}
