//! Keccak-family hash entry points
//!
//! Two entry points exist: [`multi_hash`] streams several chunks into one
//! legacy Keccak-256 state as if they were concatenated, while
//! [`single_hash`] runs SHA3-256 over one buffer in a single pass.

use sha3::{Digest, Keccak256, Sha3_256};

/// Digest length of both hash entry points
pub const HASH_LENGTH: usize = 32;

/// Calculate the legacy Keccak-256 hash over the concatenation of `chunks`.
///
/// No chunks at all hashes the empty string.
pub fn multi_hash<I, T>(chunks: I) -> [u8; HASH_LENGTH]
where
    I: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    let mut hasher = Keccak256::new();
    for chunk in chunks {
        hasher.update(chunk.as_ref());
    }
    hasher.finalize().into()
}

/// Calculate the SHA3-256 hash of `data`
pub fn single_hash(data: &[u8]) -> [u8; HASH_LENGTH] {
    Sha3_256::digest(data).into()
}
