//! Shared helpers for router-level tests
//!
//! Requests go through the full middleware stack via `tower::ServiceExt::oneshot`;
//! no socket is bound.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use dugout_server::{
    api::{create_router, AppState},
    config::Config,
};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

const BOUNDARY: &str = "dugout-test-boundary";

pub struct TestApp {
    router: Router,
    token: Option<String>,
}

impl TestApp {
    /// Open policy: every caller may write
    pub fn new(pool: PgPool) -> Self {
        Self::with_config(pool, Config::default())
    }

    /// Policy requiring `Authorization: Bearer <admin_token>` on writes
    pub fn with_admin_token(pool: PgPool, admin_token: &str) -> Self {
        let mut config = Config::default();
        config.access.admin_token = Some(admin_token.to_string());
        Self::with_config(pool, config)
    }

    pub fn with_config(pool: PgPool, config: Config) -> Self {
        let state = AppState::new(pool, &config);
        Self {
            router: create_router(state, &config),
            token: None,
        }
    }

    /// Send subsequent requests with this bearer token
    pub fn authorized(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    fn builder(&self, method: Method, uri: &str) -> axum::http::request::Builder {
        let builder = Request::builder().method(method).uri(uri);
        match &self.token {
            Some(token) => builder.header(header::AUTHORIZATION, format!("Bearer {token}")),
            None => builder,
        }
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        (status, body)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = self.builder(Method::GET, uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        let request = self.builder(Method::DELETE, uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.json(Method::POST, uri, body.to_string()).await
    }

    pub async fn put_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.json(Method::PUT, uri, body.to_string()).await
    }

    /// Send a raw (possibly malformed) JSON body
    pub async fn json(&self, method: Method, uri: &str, body: String) -> (StatusCode, Value) {
        let request = self
            .builder(method, uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();
        self.send(request).await
    }

    /// POST a multipart form with a single field
    pub async fn upload(&self, uri: &str, field: &str, csv: &str) -> (StatusCode, Value) {
        let body = format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"{field}\"; filename=\"upload.csv\"\r\n\
             Content-Type: text/csv\r\n\r\n\
             {csv}\r\n\
             --{BOUNDARY}--\r\n"
        );
        let request = self
            .builder(Method::POST, uri)
            .header(header::CONTENT_TYPE, format!("multipart/form-data; boundary={BOUNDARY}"))
            .body(Body::from(body))
            .unwrap();
        self.send(request).await
    }

    /// Create a player through the API and return its id
    pub async fn add_player(&self, name: &str, position: &str) -> i64 {
        let (status, body) = self
            .post_json("/players", serde_json::json!({ "name": name, "position": position }))
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["player"]["id"].as_i64().unwrap()
    }

    /// Create a game through the API and return its id
    pub async fn add_game(&self, date: &str, opponent: &str) -> i64 {
        let (status, body) = self
            .post_json("/games", serde_json::json!({ "date": date, "opponent": opponent }))
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["game"]["id"].as_i64().unwrap()
    }
}
