pub const PREFIX_OFFSET: usize = 0;
pub const VERSION_OFFSET: usize = 1;

pub const WITNESS_HASH_SIZE: usize = 20;
pub const WITNESS_HASH_RANGE: std::ops::Range<usize> = 2..22;

pub const EXPIRE_AT_SIZE: usize = 8;
pub const EXPIRE_AT_RANGE: std::ops::Range<usize> = 22..30;

pub const ACCOUNT_OFFSET: usize = 30;
pub const HEADER_LEN: usize = ACCOUNT_OFFSET;

pub const MILLIS_PER_SECOND: u64 = 1_000;
