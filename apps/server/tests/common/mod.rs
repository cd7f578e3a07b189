#![allow(dead_code)]

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use jsonwebtoken::{encode, EncodingKey, Header};
use networth_server::{api::app_router, build_state, config::Config};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

pub const SECRET: &[u8] = b"an-hs256-test-secret-of-enough-length";

pub struct TestApp {
    pub router: Router,
    _tmp: TempDir,
}

pub fn test_config(tmp: &TempDir) -> Config {
    Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        db_path: tmp.path().join("test.db").to_string_lossy().to_string(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(30),
        static_dir: "dist".to_string(),
        jwt_secret: SECRET.to_vec(),
        jwt_audience: None,
        auth_redirect: "/auth".to_string(),
    }
}

pub async fn build_test_app() -> TestApp {
    let tmp = tempfile::tempdir().unwrap();
    let config = test_config(&tmp);
    let state = build_state(&config).await.unwrap();
    TestApp {
        router: app_router(state, &config),
        _tmp: tmp,
    }
}

pub fn token_for(user_id: &str) -> String {
    let exp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs()
        + 3600;
    let claims = serde_json::json!({ "sub": user_id, "exp": exp });
    encode(&Header::default(), &claims, &EncodingKey::from_secret(SECRET)).unwrap()
}

impl TestApp {
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        user_id: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Option<Value>) {
        self.send_raw(method, uri, user_id, body.map(|json| json.to_string()))
            .await
    }

    /// Like `send` but with the request body passed through untouched.
    pub async fn send_raw(
        &self,
        method: Method,
        uri: &str,
        user_id: Option<&str>,
        body: Option<String>,
    ) -> (StatusCode, Option<Value>) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(user) = user_id {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token_for(user)));
        }
        let request = match body {
            Some(raw) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(raw))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).ok();
        (status, json)
    }
}
