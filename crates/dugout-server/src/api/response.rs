//! API response types
//!
//! Every failure leaves the server as `{"error": "<message>"}`. There are no
//! machine-readable codes; clients branch on the HTTP status.

use axum::{
    async_trait,
    extract::{
        rejection::{JsonRejection, PathRejection},
        FromRequest, FromRequestParts, Path, Request,
    },
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Standard error body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }

    /// Render with the given status code
    pub fn with_status(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// Success body for mutations: `{"message": ..., "<key>": <record>}`
///
/// The record key differs per resource (`player`, `game`, `stats`, `stat`),
/// so it is rendered through a one-entry map.
#[derive(Debug, Serialize)]
pub struct MessageResponse<T> {
    pub message: &'static str,
    #[serde(flatten)]
    pub record: Option<std::collections::BTreeMap<&'static str, T>>,
}

impl<T: Serialize> MessageResponse<T> {
    pub fn with_record(message: &'static str, key: &'static str, record: T) -> Self {
        Self {
            message,
            record: Some(std::iter::once((key, record)).collect()),
        }
    }
}

impl MessageResponse<()> {
    pub fn message_only(message: &'static str) -> Self {
        Self {
            message,
            record: None,
        }
    }
}

/// JSON request body whose rejections are rendered as 400 `{"error"}`
///
/// Axum's own [`Json`] answers malformed bodies with 415/422 and a plain-text
/// body; every malformed body here is a client input error.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(json_rejection_response(rejection)),
        }
    }
}

fn json_rejection_response(rejection: JsonRejection) -> Response {
    tracing::debug!(error = %rejection, "Rejected request body");
    ErrorResponse::new(format!("Invalid JSON body: {}", rejection.body_text()))
        .with_status(StatusCode::BAD_REQUEST)
}

/// Path parameters whose rejections are rendered as 400 `{"error"}`
#[derive(Debug, Clone, Copy)]
pub struct PathParams<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for PathParams<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(PathParams(value)),
            Err(rejection) => Err(path_rejection_response(rejection)),
        }
    }
}

fn path_rejection_response(rejection: PathRejection) -> Response {
    tracing::debug!(error = %rejection, "Rejected path parameters");
    ErrorResponse::new(format!("Invalid path parameter: {}", rejection.body_text()))
        .with_status(StatusCode::BAD_REQUEST)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use http_body_util::BodyExt;

    #[derive(Debug, Deserialize)]
    struct Payload {
        name: String,
    }

    #[test]
    fn test_message_response_with_record() {
        let body = MessageResponse::with_record("Player added successfully!", "player", 7);
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            serde_json::json!({ "message": "Player added successfully!", "player": 7 })
        );
    }

    #[test]
    fn test_message_only() {
        let body = MessageResponse::message_only("Stat deleted successfully");
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            serde_json::json!({ "message": "Stat deleted successfully" })
        );
    }

    #[tokio::test]
    async fn test_json_body_accepts_valid_payload() {
        let req = Request::builder()
            .header("content-type", "application/json")
            .body(Body::from(r#"{"name":"Ann"}"#))
            .unwrap();

        let JsonBody(payload) = JsonBody::<Payload>::from_request(req, &()).await.unwrap();
        assert_eq!(payload.name, "Ann");
    }

    #[tokio::test]
    async fn test_json_body_rejects_malformed_payload_with_400() {
        let req = Request::builder()
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = JsonBody::<Payload>::from_request(req, &()).await.unwrap_err();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert!(body.error.starts_with("Invalid JSON body"));
    }

    #[tokio::test]
    async fn test_json_body_rejects_missing_content_type_with_400() {
        let req = Request::builder().body(Body::from(r#"{"name":"Ann"}"#)).unwrap();

        let response = JsonBody::<Payload>::from_request(req, &()).await.unwrap_err();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
