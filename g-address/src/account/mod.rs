//! Account address functionality
//!
//! This module provides the fixed-size account address, its derivation from
//! a public key, and its textual representation.

mod address;

pub use address::*;
