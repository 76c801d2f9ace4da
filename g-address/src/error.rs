//! Error types for the g-address library

use thiserror::Error;

/// Custom error type for g-address operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),
}

/// Result type for g-address operations
pub type Result<T> = std::result::Result<T, Error>;
