//! `POST /authenticate` token issuance.

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};

use crate::auth::{Claims, SigningKey, jwt};
use crate::e2e_tests::helpers::{
    TEST_SECRET, authenticate, post_form, send, test_router, token_for,
};

#[tokio::test]
async fn test_authenticate_bad_password() {
    let (status, body) = authenticate("neo", "lawrence").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, "Name and password do not match");
}

#[tokio::test]
async fn test_authenticate_unknown_principal_looks_like_bad_password() {
    let (status, body) = authenticate("smith", "keanu").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, "Name and password do not match");
}

#[tokio::test]
async fn test_authenticate_neo() {
    let token = token_for("neo", "keanu").await;
    let key = SigningKey::new(TEST_SECRET).unwrap();
    assert_eq!(
        jwt::verify_token(&token, &key).unwrap(),
        Claims::new("neo", "redpill")
    );
}

#[tokio::test]
async fn test_authenticate_neo_body_format() {
    let (status, body) = authenticate("neo", "keanu").await;
    assert_eq!(status, StatusCode::OK);
    let key = SigningKey::new(TEST_SECRET).unwrap();
    let expected = jwt::encode_claims(&Claims::new("neo", "redpill"), &key).unwrap();
    assert_eq!(body, format!("Token: {expected}"));
}

#[tokio::test]
async fn test_authenticate_morpheus() {
    let token = token_for("morpheus", "lawrence").await;
    let key = SigningKey::new(TEST_SECRET).unwrap();
    assert_eq!(
        jwt::verify_token(&token, &key).unwrap(),
        Claims::new("morpheus", "redpill")
    );
}

#[tokio::test]
async fn test_authenticate_missing_fields() {
    let (status, body) = post_form("").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, "Name and password do not match");

    let (status, body) = post_form("programName=neo").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, "Name and password do not match");
}

#[tokio::test]
async fn test_authenticate_without_content_type() {
    let request = Request::builder()
        .method("POST")
        .uri("/authenticate")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(test_router(), request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, "Name and password do not match");
}

#[tokio::test]
async fn test_authenticate_credentials_in_query_without_form_body() {
    let request = Request::builder()
        .method("POST")
        .uri("/authenticate?programName=neo&programPassword=keanu")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(test_router(), request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, "Name and password do not match");
}

#[tokio::test]
async fn test_authenticate_json_body_is_not_a_form() {
    let request = Request::builder()
        .method("POST")
        .uri("/authenticate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"programName":"neo","programPassword":"keanu"}"#))
        .unwrap();
    let (status, body) = send(test_router(), request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, "Name and password do not match");
}
