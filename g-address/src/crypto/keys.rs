//! NIST P-256 key handling
//!
//! Key generation and point arithmetic belong to the `p256` crate; this module
//! only converts between its types and the byte encodings address derivation
//! consumes.

use p256::elliptic_curve::sec1::ToEncodedPoint;
use rand::rngs::OsRng;

pub use p256::{PublicKey, SecretKey};

use crate::error::{Error, Result};

/// Width of one big-endian P-256 coordinate
pub const COORDINATE_LENGTH: usize = 32;

/// Length of the uncompressed SEC1 point encoding: tag byte, X, Y
pub const UNCOMPRESSED_PUBLIC_KEY_LENGTH: usize = 1 + 2 * COORDINATE_LENGTH;

const UNCOMPRESSED_TAG: u8 = 0x04;

/// Generate a new random P-256 secret key from OS entropy
pub fn generate_key() -> SecretKey {
    SecretKey::random(&mut OsRng)
}

/// Serialize a public key to its uncompressed point encoding.
///
/// An absent key yields an empty vector, which callers must treat as "no key".
pub fn public_key_bytes(public_key: Option<&PublicKey>) -> Vec<u8> {
    match public_key {
        Some(key) => key.to_encoded_point(false).as_bytes().to_vec(),
        None => Vec::new(),
    }
}

/// Build a public key from big-endian affine coordinates.
///
/// Coordinates shorter than 32 bytes are left-padded with zeros.
pub fn public_key_from_coordinates(x: &[u8], y: &[u8]) -> Result<PublicKey> {
    if x.len() > COORDINATE_LENGTH || y.len() > COORDINATE_LENGTH {
        return Err(Error::InvalidPublicKey(format!(
            "Coordinate longer than {} bytes",
            COORDINATE_LENGTH
        )));
    }

    let mut encoded = [0u8; UNCOMPRESSED_PUBLIC_KEY_LENGTH];
    encoded[0] = UNCOMPRESSED_TAG;
    encoded[1 + COORDINATE_LENGTH - x.len()..1 + COORDINATE_LENGTH].copy_from_slice(x);
    encoded[UNCOMPRESSED_PUBLIC_KEY_LENGTH - y.len()..].copy_from_slice(y);

    public_key_from_sec1(&encoded)
}

/// Parse a compressed or uncompressed SEC1 encoded public key
pub fn public_key_from_sec1(bytes: &[u8]) -> Result<PublicKey> {
    PublicKey::from_sec1_bytes(bytes)
        .map_err(|e| Error::InvalidPublicKey(format!("Not a P-256 point: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENERATOR_X: &str = "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296";
    const GENERATOR_Y: &str = "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5";

    fn generator() -> PublicKey {
        let mut scalar = [0u8; 32];
        scalar[31] = 1;
        SecretKey::from_slice(&scalar).unwrap().public_key()
    }

    #[test]
    fn test_public_key_bytes_is_uncompressed_encoding() {
        let bytes = public_key_bytes(Some(&generator()));

        assert_eq!(bytes.len(), UNCOMPRESSED_PUBLIC_KEY_LENGTH);
        assert_eq!(bytes[0], 0x04);
        assert_eq!(hex::encode(&bytes[1..33]), GENERATOR_X);
        assert_eq!(hex::encode(&bytes[33..]), GENERATOR_Y);
    }

    #[test]
    fn test_public_key_bytes_of_absent_key_is_empty() {
        assert!(public_key_bytes(None).is_empty());
    }

    #[test]
    fn test_public_key_from_coordinates() {
        let x = hex::decode(GENERATOR_X).unwrap();
        let y = hex::decode(GENERATOR_Y).unwrap();

        let key = public_key_from_coordinates(&x, &y).unwrap();
        assert_eq!(key, generator());
    }

    #[test]
    fn test_public_key_from_coordinates_rejects_bad_points() {
        let x = hex::decode(GENERATOR_X).unwrap();
        let mut y = hex::decode(GENERATOR_Y).unwrap();
        y[31] ^= 1;

        assert!(matches!(
            public_key_from_coordinates(&x, &y),
            Err(Error::InvalidPublicKey(_))
        ));
        assert!(public_key_from_coordinates(&[0u8; 33], &y).is_err());
    }

    #[test]
    fn test_public_key_from_sec1_accepts_compressed() {
        let key = generator();
        let compressed = key.to_encoded_point(true);

        assert_eq!(public_key_from_sec1(compressed.as_bytes()).unwrap(), key);
        assert!(public_key_from_sec1(&[]).is_err());
    }

    #[test]
    fn test_generate_key() {
        let first = generate_key();
        let second = generate_key();

        assert_ne!(first.to_bytes(), second.to_bytes());
        let encoded = public_key_bytes(Some(&first.public_key()));
        assert_eq!(encoded.len(), UNCOMPRESSED_PUBLIC_KEY_LENGTH);
    }
}
