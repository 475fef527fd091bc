use super::*;
use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

#[tokio::test]
async fn healthz_returns_ok() {
    let request = Request::builder().uri("/healthz").body(Body::empty()).expect("request");
    let response = base_routes().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_base_route_is_not_found() {
    let request = Request::builder().uri("/nope").body(Body::empty()).expect("request");
    let response = base_routes().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
