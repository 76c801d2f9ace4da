//! Account addresses
//!
//! An address is 36 bytes: the SHA3-256 hash of the uncompressed public key
//! followed by the first 4 bytes of its Keccak-256 hash. The textual form is
//! `"G"` followed by the base-58 encoding of all 36 bytes.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, trace, warn};

use crate::crypto::hash::{multi_hash, single_hash};
use crate::crypto::keys::{public_key_bytes, PublicKey};
use crate::error::{Error, Result};

/// Prefix of the textual address form
pub const ADDRESS_PREFIX: &str = "G";

/// Total address length in bytes
pub const ADDRESS_LENGTH: usize = 36;

/// Length of the trailing checksum
pub const CHECKSUM_LENGTH: usize = 4;

/// Length of the hashed public key payload
pub const PAYLOAD_LENGTH: usize = ADDRESS_LENGTH - CHECKSUM_LENGTH;

/// A fixed-size account address
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address([u8; ADDRESS_LENGTH]);

impl Address {
    /// The all-zero address
    pub const ZERO: Address = Address([0u8; ADDRESS_LENGTH]);

    /// Create an address from arbitrary bytes.
    ///
    /// No checksum validation happens here, see [`Address::set_bytes`].
    pub fn from_slice(bytes: &[u8]) -> Self {
        let mut address = Self::ZERO;
        address.set_bytes(bytes);
        address
    }

    /// Derive the address of a public key
    pub fn from_public_key(public_key: &PublicKey) -> Self {
        pubkey_to_address(Some(public_key))
    }

    /// Overwrite the address with `input`, right-aligned.
    ///
    /// Longer input keeps only its last 36 bytes; shorter input is zero-padded
    /// on the left.
    pub fn set_bytes(&mut self, input: &[u8]) {
        let input = if input.len() > ADDRESS_LENGTH {
            trace!(len = input.len(), "truncating address input from the left");
            &input[input.len() - ADDRESS_LENGTH..]
        } else {
            input
        };

        let offset = ADDRESS_LENGTH - input.len();
        self.0[..offset].fill(0);
        self.0[offset..].copy_from_slice(input);
    }

    /// Get the raw address bytes
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }

    /// Copy the address bytes into a vector
    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    /// Get the hashed public key payload, excluding the checksum
    pub fn raw(&self) -> &[u8; PAYLOAD_LENGTH] {
        let [payload @ .., _, _, _, _] = &self.0;
        payload
    }

    /// Get the trailing checksum bytes
    pub fn checksum_bytes(&self) -> [u8; CHECKSUM_LENGTH] {
        let [.., c0, c1, c2, c3] = self.0;
        [c0, c1, c2, c3]
    }
}

impl Default for Address {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<[u8; ADDRESS_LENGTH]> for Address {
    fn from(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", ADDRESS_PREFIX, bs58::encode(&self.0).into_string())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self)
    }
}

impl FromStr for Address {
    type Err = Error;

    /// Parse the textual form. The payload must decode to exactly 36 bytes;
    /// the checksum is not verified.
    fn from_str(s: &str) -> Result<Self> {
        let encoded = s.strip_prefix(ADDRESS_PREFIX).ok_or_else(|| {
            Error::InvalidAddress(format!("Missing '{}' prefix: {}", ADDRESS_PREFIX, s))
        })?;

        let bytes = bs58::decode(encoded)
            .into_vec()
            .map_err(|e| Error::InvalidAddress(format!("Invalid base58: {}", e)))?;

        if bytes.len() != ADDRESS_LENGTH {
            return Err(Error::InvalidAddress(format!(
                "Expected {} bytes, got {}",
                ADDRESS_LENGTH,
                bytes.len()
            )));
        }

        Ok(Self::from_slice(&bytes))
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Create an address from arbitrary bytes
pub fn bytes_to_address(bytes: &[u8]) -> Address {
    Address::from_slice(bytes)
}

/// Calculate the checksum of a public key hash: the first 4 bytes of its
/// Keccak-256 hash
pub fn checksum(payload_hash: &[u8]) -> [u8; CHECKSUM_LENGTH] {
    let check_hash = multi_hash([payload_hash]);
    let mut sum = [0u8; CHECKSUM_LENGTH];
    sum.copy_from_slice(&check_hash[..CHECKSUM_LENGTH]);
    sum
}

/// Derive the address of a public key.
///
/// An absent key is not an error: it hashes the empty encoding and yields a
/// well-formed but meaningless address. Use [`try_pubkey_to_address`] to
/// reject it instead.
pub fn pubkey_to_address(public_key: Option<&PublicKey>) -> Address {
    if public_key.is_none() {
        warn!("deriving address from an absent public key");
    }

    let public_key = public_key_bytes(public_key);
    let key_hash = single_hash(&public_key);
    let check = checksum(&key_hash);

    let mut hashed_address = [0u8; ADDRESS_LENGTH];
    hashed_address[..PAYLOAD_LENGTH].copy_from_slice(&key_hash);
    hashed_address[PAYLOAD_LENGTH..].copy_from_slice(&check);

    let address = Address::from_slice(&hashed_address);
    debug!(%address, "derived address");
    address
}

/// Derive the address of a public key, failing if the key is absent
pub fn try_pubkey_to_address(public_key: Option<&PublicKey>) -> Result<Address> {
    match public_key {
        Some(key) => Ok(pubkey_to_address(Some(key))),
        None => Err(Error::InvalidPublicKey("Public key is absent".to_string())),
    }
}
