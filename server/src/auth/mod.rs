//! Authentication module.
//!
//! Token issuance, verification and the access policy for the Matrix server.
//!
//! # Pre-conditions
//! - The signing key and the credential store are built once at startup.
//!
//! # Post-conditions
//! - Neither is mutated after startup; all operations here are pure.
//!
//! # Invariants
//! - Issuer and verifier always share the same signing key.

pub mod credentials;
pub mod error;
pub mod issuer;
pub mod jwt;
pub mod policy;
pub mod signing_key;

pub use credentials::CredentialStore;
pub use error::AuthError;
pub use issuer::{TokenIssuer, TokenVerifier};
pub use jwt::Claims;
pub use signing_key::{SigningKey, SigningKeyError};
