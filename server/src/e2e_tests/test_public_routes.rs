//! Unauthenticated routes with fixed or parameterized bodies.

use axum::http::StatusCode;

use crate::e2e_tests::helpers::get;

#[tokio::test]
async fn test_home() {
    let (status, body) = get("/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Welcome to the Matrix!");
}

#[tokio::test]
async fn test_metacortex() {
    let (status, body) = get("/metacortex", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Mr Anderson's not so secure workplace!");
}

#[tokio::test]
async fn test_agent_name() {
    let (status, body) = get("/agents/smith", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "My name is agent smith");
}

#[tokio::test]
async fn test_agent_name_is_substituted_verbatim() {
    let (status, body) = get("/agents/Brown", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "My name is agent Brown");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (status, _) = get("/zion", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
