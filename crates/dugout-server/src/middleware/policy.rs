//! Admin/viewer access policy
//!
//! The server decides who may mutate data. With no admin token configured the
//! policy is open and every caller acts as [`Role::Admin`]. Once a token is
//! configured, callers without `Authorization: Bearer <token>` are viewers and
//! may only read.

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, Method, StatusCode},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::api::response::ErrorResponse;
use crate::config::AccessConfig;

/// Caller role resolved per request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Viewer,
}

/// Server-side access policy
#[derive(Clone, Default)]
pub struct AccessPolicy {
    admin_token: Option<Arc<str>>,
}

impl std::fmt::Debug for AccessPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessPolicy")
            .field("open", &self.is_open())
            .finish()
    }
}

impl AccessPolicy {
    /// Every caller is an admin
    pub fn open() -> Self {
        Self { admin_token: None }
    }

    /// Mutations require the given bearer token
    pub fn with_admin_token(token: impl Into<String>) -> Self {
        Self {
            admin_token: Some(Arc::from(token.into())),
        }
    }

    pub fn from_config(config: &AccessConfig) -> Self {
        match config.admin_token {
            Some(ref token) => Self::with_admin_token(token.clone()),
            None => Self::open(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.admin_token.is_none()
    }

    /// Resolve the caller's role from request headers
    pub fn role_for(&self, headers: &HeaderMap) -> Role {
        let Some(ref expected) = self.admin_token else {
            return Role::Admin;
        };

        let presented = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::trim);

        match presented {
            Some(token) if constant_time_eq(token.as_bytes(), expected.as_bytes()) => Role::Admin,
            _ => Role::Viewer,
        }
    }

    /// Whether `role` may issue a request with `method`
    pub fn permits(role: Role, method: &Method) -> bool {
        match role {
            Role::Admin => true,
            Role::Viewer => matches!(*method, Method::GET | Method::HEAD | Method::OPTIONS),
        }
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// Reject mutating requests from viewers with 401
pub async fn enforce(
    State(policy): State<AccessPolicy>,
    request: Request,
    next: Next,
) -> Response {
    let role = policy.role_for(request.headers());

    if AccessPolicy::permits(role, request.method()) {
        return next.run(request).await;
    }

    tracing::warn!(
        method = %request.method(),
        path = %request.uri().path(),
        "Rejected mutating request without admin token"
    );

    ErrorResponse::new("Admin access required. Provide a valid bearer token.")
        .with_status(StatusCode::UNAUTHORIZED)
}
