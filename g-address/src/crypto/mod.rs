//! Cryptographic primitives
//!
//! This module provides the hash entry points and the P-256 key handling
//! required for address derivation.

pub mod hash;
pub mod keys;

pub use hash::*;
pub use keys::*;
