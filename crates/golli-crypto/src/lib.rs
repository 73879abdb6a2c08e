//! Content fingerprinting for golli.
//!
//! Entity identities are derived from their content with an unkeyed,
//! deterministic 64-bit fingerprint built on BLAKE3. No custom cryptography:
//! the fingerprint is a truncation of an established hash.

pub mod hasher;

pub use hasher::IdentityHasher;
