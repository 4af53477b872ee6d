//! Access policy gates applied to verified claims.

use super::error::AuthError;
use super::jwt::Claims;

/// Denial for requests whose claims carry no role.
pub const ROLE_REQUIRED_MESSAGE: &str = "A role is required to access this resource";

/// Generic gate: any verified claims with a non-empty role may proceed.
///
/// # Errors
/// - `AuthError::MissingCredentials` if there are no claims.
/// - `AuthError::PolicyDenied` if the role is empty.
pub fn authorize(claims: Option<&Claims>) -> Result<&Claims, AuthError> {
    let claims = claims.ok_or(AuthError::MissingCredentials)?;
    if claims.role.is_empty() {
        return Err(AuthError::PolicyDenied(ROLE_REQUIRED_MESSAGE.to_string()));
    }
    Ok(claims)
}

/// Name-restricted gate: only `required_name` (exact, case-sensitive) passes.
///
/// # Errors
/// `AuthError::PolicyDenied` carrying `denial` for any other principal.
pub fn authorize_named<'a>(
    claims: &'a Claims,
    required_name: &str,
    denial: &str,
) -> Result<&'a Claims, AuthError> {
    if claims.name != required_name {
        return Err(AuthError::PolicyDenied(denial.to_string()));
    }
    Ok(claims)
}
