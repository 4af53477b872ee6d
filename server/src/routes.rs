//! HTTP surface of the Matrix server.
//!
//! Public routes answer with fixed bodies. `/api/*` routes sit behind
//! [`require_claims`], which turns the `Authorization: Bearer <token>` header
//! into verified [`Claims`] before the handler applies its policy gate.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Extension, Form, Router,
    extract::{Path, Request, State, rejection::FormRejection},
    http::{HeaderMap, header::AUTHORIZATION},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};
use serde::Deserialize;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::auth::{AuthError, Claims, CredentialStore, SigningKey, TokenIssuer, TokenVerifier, policy};

/// Principal allowed into `/api/levrai`.
pub const LEVRAI_PRINCIPAL: &str = "neo";
/// Denial returned to everyone else at `/api/levrai`.
pub const LEVRAI_DENIAL: &str = "Only Neo can enter the Merovingian's restaurant!";

const BEARER_SCHEME: &str = "Bearer";

/// Shared, read-only state handed to every request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub issuer: TokenIssuer,
    pub verifier: TokenVerifier,
    /// Directory served under `/static`.
    pub static_directory: PathBuf,
}

impl AppState {
    /// Wire issuer and verifier to the same key.
    #[must_use]
    #[allow(clippy::disallowed_methods)] // Arc::clone is safe and expected for shared state
    pub fn new(credentials: CredentialStore, key: SigningKey, static_directory: PathBuf) -> Self {
        let key = Arc::new(key);
        Self {
            issuer: TokenIssuer::new(Arc::new(credentials), Arc::clone(&key)),
            verifier: TokenVerifier::new(key),
            static_directory,
        }
    }
}

/// Build the full router with every route and middleware.
pub fn build_router(state: AppState) -> Router {
    let protected: Router<AppState> = Router::new()
        .route("/api/megacity", get(megacity))
        .route("/api/levrai", get(levrai))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_claims));

    Router::new()
        .route("/", get(home))
        .route("/metacortex", get(metacortex))
        .route("/agents/{name}", get(agent))
        .route("/authenticate", post(authenticate))
        .merge(protected)
        .nest_service("/static", ServeDir::new(&state.static_directory))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Extract the bearer token from request headers.
///
/// An absent or empty header is missing credentials. A header with any other
/// scheme, or an empty token, is a malformed token. The scheme name is
/// matched case-insensitively.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = match headers.get(AUTHORIZATION) {
        Some(value) if !value.is_empty() => value,
        _ => return Err(AuthError::MissingCredentials),
    };
    let value = value
        .to_str()
        .map_err(|_| AuthError::MalformedToken("authorization header is not valid text"))?;
    let (scheme, token) = value
        .split_once(' ')
        .ok_or(AuthError::MalformedToken("expected a Bearer token"))?;
    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return Err(AuthError::MalformedToken("expected a Bearer token"));
    }
    let token = token.trim();
    if token.is_empty() {
        return Err(AuthError::MalformedToken("empty bearer token"));
    }
    Ok(token)
}

/// Verifies the bearer token and stores its claims in request extensions.
async fn require_claims(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let claims = bearer_token(request.headers())
        .and_then(|token| state.verifier.verify(token))
        .inspect_err(|e| tracing::debug!("rejected request to {}: {e}", request.uri()))?;

    tracing::debug!("verified token for {} ({})", claims.name, claims.role);
    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

async fn home() -> &'static str {
    "Welcome to the Matrix!"
}

async fn metacortex() -> &'static str {
    "Mr Anderson's not so secure workplace!"
}

async fn agent(Path(name): Path<String>) -> String {
    format!("My name is agent {name}")
}

/// Form body of `POST /authenticate`.
///
/// Missing fields default to empty and fail authentication like any other
/// mismatch. So does a body that is not a url-encoded form at all.
#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthenticateForm {
    #[serde(default)]
    program_name: String,
    #[serde(default)]
    program_password: String,
}

async fn authenticate(
    State(state): State<AppState>,
    form: Result<Form<AuthenticateForm>, FormRejection>,
) -> Result<String, AuthError> {
    let form = form.map_or_else(
        |rejection| {
            tracing::debug!("unreadable authentication form: {rejection}");
            AuthenticateForm::default()
        },
        |Form(form)| form,
    );
    match state.issuer.issue(&form.program_name, &form.program_password) {
        Ok(token) => {
            tracing::info!("issued token for {}", form.program_name);
            Ok(format!("Token: {token}"))
        }
        Err(e) => {
            tracing::info!("authentication failed for '{}'", form.program_name);
            Err(e)
        }
    }
}

async fn megacity(Extension(claims): Extension<Claims>) -> Result<&'static str, AuthError> {
    policy::authorize(Some(&claims))?;
    Ok("Welcome to the Megacity!")
}

async fn levrai(Extension(claims): Extension<Claims>) -> Result<&'static str, AuthError> {
    let claims = policy::authorize(Some(&claims))?;
    policy::authorize_named(claims, LEVRAI_PRINCIPAL, LEVRAI_DENIAL)?;
    Ok("Welcome to the LeVrai!")
}
