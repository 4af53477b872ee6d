// Life of a request:
// 1. Request comes in and passes the tracing layer
// 2. Public routes answer directly
// 3. For /api routes:
//     - Extract the bearer token from the Authorization header
//     - Verify the signature and decode the claims
//     - Apply the route's policy gate
//     - Respond
//
// System components:
//  - Credential store and token issuer (POST /authenticate)
//  - Token verifier and access policy (/api/*)
//  - Static file service (/static/*)

pub mod auth;
pub mod config;
pub mod routes;

#[cfg(test)]
mod e2e_tests;

pub use routes::{AppState, build_router};
