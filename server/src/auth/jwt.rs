//! JWT encoding and verification.
//!
//! Tokens are HS256 compact JWTs whose payload is exactly the [`Claims`]
//! structure. No registered claims (`exp`, `sub`, `iss`, ...) are written or
//! required.
//!
//! # Invariants
//! - Verification is stateless and does not modify any external state.
//! - Changing any byte of the header, payload or signature makes
//!   verification fail.

use std::collections::HashSet;

use jsonwebtoken::{Algorithm, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use super::error::AuthError;
use super::signing_key::SigningKey;

/// Claims carried by a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Principal the token was issued to.
    pub name: String,
    /// Role looked up for the principal at issuance time.
    pub role: String,
}

impl Claims {
    #[must_use]
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
        }
    }
}

/// Serializes and signs claims into a compact token.
///
/// # Errors
/// Returns `AuthError::Signing` if the claims cannot be serialized or signed.
pub fn encode_claims(claims: &Claims, key: &SigningKey) -> Result<String, AuthError> {
    encode(&Header::new(Algorithm::HS256), claims, key.encoding_key())
        .map_err(|e| AuthError::Signing(e.to_string()))
}

/// Verifies a token's signature and decodes its claims.
///
/// # Errors
/// - `AuthError::InvalidSignature` if the signature does not match.
/// - `AuthError::MalformedToken` if the token cannot be parsed.
pub fn verify_token(token: &str, key: &SigningKey) -> Result<Claims, AuthError> {
    decode::<Claims>(token, key.decoding_key(), &validation())
        .map(|data| data.claims)
        .map_err(map_jwt_error)
}

/// HS256 only, with the default `exp` requirement switched off.
fn validation() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.required_spec_claims = HashSet::new();
    validation.validate_exp = false;
    validation.validate_nbf = false;
    validation.validate_aud = false;
    validation
}

/// Maps jsonwebtoken errors onto the verifier's error variants.
///
/// Decoder messages are not passed through; only a short category is kept.
fn map_jwt_error(error: jsonwebtoken::errors::Error) -> AuthError {
    use jsonwebtoken::errors::ErrorKind;

    match error.kind() {
        ErrorKind::InvalidSignature => AuthError::InvalidSignature,
        ErrorKind::InvalidToken => AuthError::MalformedToken("not a three-part token"),
        ErrorKind::InvalidAlgorithm => AuthError::MalformedToken("unsupported algorithm"),
        ErrorKind::Base64(_) => AuthError::MalformedToken("invalid base64"),
        ErrorKind::Json(_) | ErrorKind::Utf8(_) => AuthError::MalformedToken("invalid JSON"),
        ErrorKind::MissingRequiredClaim(_) => AuthError::MalformedToken("missing claim"),
        _ => AuthError::MalformedToken("unreadable token"),
    }
}
