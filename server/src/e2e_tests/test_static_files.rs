//! Static assets under `/static`.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};

use crate::e2e_tests::helpers::{send, test_router_with_static};

fn static_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_static_file_served_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("redpill.txt"), "follow the white rabbit\n").unwrap();

    let router = test_router_with_static(dir.path().to_path_buf());
    let (status, body) = send(router, static_request("/static/redpill.txt")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "follow the white rabbit\n");
}

#[tokio::test]
async fn test_static_nested_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("css")).unwrap();
    std::fs::write(dir.path().join("css").join("site.css"), "body{}").unwrap();

    let router = test_router_with_static(dir.path().to_path_buf());
    let (status, body) = send(router, static_request("/static/css/site.css")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "body{}");
}

#[tokio::test]
async fn test_static_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let router = test_router_with_static(dir.path().to_path_buf());
    let (status, _) = send(router, static_request("/static/bluepill.txt")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
