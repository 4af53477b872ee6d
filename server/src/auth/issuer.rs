//! Token issuance and verification services.
//!
//! Both hold shared, read-only state (the credential store and the signing
//! key) and can be cloned cheaply into request handlers.

use std::sync::Arc;

use super::credentials::CredentialStore;
use super::error::AuthError;
use super::jwt::{self, Claims};
use super::signing_key::SigningKey;

/// Exchanges a name/password pair for a signed token.
#[derive(Debug, Clone)]
pub struct TokenIssuer {
    credentials: Arc<CredentialStore>,
    key: Arc<SigningKey>,
}

impl TokenIssuer {
    #[must_use]
    pub const fn new(credentials: Arc<CredentialStore>, key: Arc<SigningKey>) -> Self {
        Self { credentials, key }
    }

    /// Issue a token for `name` if `password` matches the store.
    ///
    /// # Errors
    /// - `AuthError::AuthenticationFailed` for an empty field, an unknown
    ///   name or a wrong password. The three cases are indistinguishable.
    /// - `AuthError::Signing` if the token could not be signed.
    pub fn issue(&self, name: &str, password: &str) -> Result<String, AuthError> {
        if name.is_empty() || password.is_empty() {
            return Err(AuthError::AuthenticationFailed);
        }
        let role = self
            .credentials
            .role_for(name, password)
            .ok_or(AuthError::AuthenticationFailed)?;

        jwt::encode_claims(&Claims::new(name, role), &self.key)
    }
}

/// Validates bearer tokens and recovers their claims.
#[derive(Debug, Clone)]
pub struct TokenVerifier {
    key: Arc<SigningKey>,
}

impl TokenVerifier {
    #[must_use]
    pub const fn new(key: Arc<SigningKey>) -> Self {
        Self { key }
    }

    /// Verify `token` and return the claims it carries.
    ///
    /// # Errors
    /// `AuthError::InvalidSignature` or `AuthError::MalformedToken`.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        jwt::verify_token(token, &self.key)
    }
}
