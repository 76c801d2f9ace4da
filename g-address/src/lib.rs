//! G-Address Core - checksummed account addresses
//!
//! This library derives 36-byte account addresses from NIST P-256 public keys
//! (a SHA3-256 hash of the uncompressed key followed by a 4-byte Keccak-256
//! checksum) and renders them as `"G"` prefixed base-58 strings.

pub mod error;
pub mod crypto;
pub mod account;

// Re-export commonly used types for convenience
pub use account::{bytes_to_address, pubkey_to_address, try_pubkey_to_address, Address};
pub use error::{Error, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
