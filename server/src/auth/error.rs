//! Error taxonomy for authentication and authorization.
//!
//! Every variant is terminal for the request that produced it. Variants
//! caused by the caller map to `401 Unauthorized` with the `Display` text as
//! the body; only `Signing` is a server fault.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Prefix the verifier puts in front of every verification failure.
pub const VERIFY_ERROR_PREFIX: &str = "Error verifying JWT token";

/// Error returned by the issuer, the verifier and the access policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Name/password pair is not in the credential store.
    AuthenticationFailed,
    /// The request carried no `Authorization` header.
    MissingCredentials,
    /// The token's signature does not match its header and payload.
    InvalidSignature,
    /// The token could not be parsed into the expected claims.
    MalformedToken(&'static str),
    /// The token is valid but its claims are not sufficient.
    PolicyDenied(String),
    /// Signing a token failed.
    Signing(String),
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed => write!(f, "Name and password do not match"),
            Self::MissingCredentials => write!(f, "Missing Authorization Header"),
            Self::InvalidSignature => write!(f, "{VERIFY_ERROR_PREFIX}: invalid signature"),
            Self::MalformedToken(reason) => {
                write!(f, "{VERIFY_ERROR_PREFIX}: malformed token ({reason})")
            }
            Self::PolicyDenied(message) => write!(f, "{message}"),
            Self::Signing(reason) => write!(f, "failed to sign token: {reason}"),
        }
    }
}

impl std::error::Error for AuthError {}

impl AuthError {
    /// HTTP status the error is reported with.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Signing(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let Self::Signing(reason) = &self {
            tracing::error!("token signing failed: {reason}");
            return (status, "Failed to issue token").into_response();
        }
        (status, self.to_string()).into_response()
    }
}
