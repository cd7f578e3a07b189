mod common;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

#[tokio::test]
async fn healthz_works() {
    let app = common::build_test_app().await;

    let response = app
        .router
        .clone()
        .oneshot(Request::builder().uri("/api/v1/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}
