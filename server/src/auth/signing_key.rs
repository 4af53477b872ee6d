//! Shared signing secret for token issuance and verification.
//!
//! # Pre-conditions
//! - The secret must be non-empty.
//!
//! # Post-conditions
//! - `SigningKey` instances are immutable once created.
//!
//! # Invariants
//! - The encoding and decoding halves are always derived from the same secret.

use jsonwebtoken::{DecodingKey, EncodingKey};
use rand::Rng;

/// Length of secrets produced by [`SigningKey::generate`].
pub const GENERATED_SECRET_LEN: usize = 32;

/// Error returned when a signing key cannot be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SigningKeyError {
    /// The HS256 secret is empty.
    EmptySecret,
}

impl std::fmt::Display for SigningKeyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySecret => write!(f, "HS256 secret must not be empty"),
        }
    }
}

impl std::error::Error for SigningKeyError {}

/// HMAC-SHA256 key material shared by the issuer and the verifier.
#[derive(Clone)]
pub struct SigningKey {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SigningKey {
    /// Create a signing key from a shared secret.
    ///
    /// # Errors
    /// Returns `SigningKeyError::EmptySecret` if the secret is empty.
    pub fn new(secret: &[u8]) -> Result<Self, SigningKeyError> {
        if secret.is_empty() {
            return Err(SigningKeyError::EmptySecret);
        }
        Ok(Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        })
    }

    /// Create a signing key from a freshly generated random secret.
    ///
    /// Tokens signed with a generated key stop verifying once the process
    /// restarts.
    #[must_use]
    pub fn generate() -> Self {
        let mut secret = [0u8; GENERATED_SECRET_LEN];
        rand::rng().fill(&mut secret);
        Self {
            encoding: EncodingKey::from_secret(&secret),
            decoding: DecodingKey::from_secret(&secret),
        }
    }

    pub(crate) const fn encoding_key(&self) -> &EncodingKey {
        &self.encoding
    }

    pub(crate) const fn decoding_key(&self) -> &DecodingKey {
        &self.decoding
    }
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKey").finish_non_exhaustive()
    }
}
