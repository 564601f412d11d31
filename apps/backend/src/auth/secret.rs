//! Comparison of a submitted login secret against the stored value.
//!
//! The front end sends `senha` as a SHA-256 hex digest and the `aluno` table
//! stores that same digest, so the server compares the two strings verbatim.
//! No salt or slow hash is applied server-side. Replacing this with a salted
//! KDF only requires another `SecretVerifier` and a data migration; the login
//! flow does not change.

use std::fmt;

use subtle::ConstantTimeEq;

pub trait SecretVerifier: Send + Sync + fmt::Debug {
    /// Returns true when `submitted` matches the `stored` credential.
    fn verify(&self, submitted: &str, stored: &str) -> bool;
}

/// Verbatim equality of client-computed digests, in constant time for
/// inputs of equal length.
#[derive(Debug, Default, Clone, Copy)]
pub struct DigestEquality;

impl SecretVerifier for DigestEquality {
    fn verify(&self, submitted: &str, stored: &str) -> bool {
        submitted.as_bytes().ct_eq(stored.as_bytes()).into()
    }
}
