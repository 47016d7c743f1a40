//! CSV upload routes, mounted at the API root
//!
//! - `POST /upload-roster` - multipart field `file` with `name,position` rows
//! - `POST /upload-stats` - multipart field `file` with stat rows

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        DefaultBodyLimit, Multipart, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Serialize;
use sqlx::PgPool;

use super::commands::{
    RosterSummary, StatsSummary, UploadRosterCommand, UploadRosterError, UploadStatsCommand,
    UploadStatsError,
};
use crate::api::response::ErrorResponse;

/// `body_limit` caps the whole multipart request in bytes
pub fn upload_routes(body_limit: usize) -> Router<PgPool> {
    Router::new()
        .route("/upload-roster", post(upload_roster))
        .route("/upload-stats", post(upload_stats))
        .layer(DefaultBodyLimit::max(body_limit))
}

#[derive(Debug, Serialize)]
struct UploadResponse<T> {
    message: &'static str,
    #[serde(flatten)]
    summary: T,
}

/// Pull the bytes of the `file` field, ignoring any other fields
///
/// A request that is not multipart at all is treated like one without a file.
async fn read_file_field(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Vec<u8>, UploadApiError> {
    let mut multipart = multipart.map_err(|_| UploadApiError::NoFile)?;

    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("file") {
            return Ok(field.bytes().await?.to_vec());
        }
    }

    Err(UploadApiError::NoFile)
}

/// # Response
///
/// - `200 OK` - `{message, playersAdded, rowsProcessed}`
/// - `400 Bad Request` - No `file` field, or no usable rows
/// - `500 Internal Server Error` - Insert failed; nothing was written
#[tracing::instrument(skip(pool, multipart))]
async fn upload_roster(
    State(pool): State<PgPool>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, UploadApiError> {
    let content = read_file_field(multipart).await?;
    let summary: RosterSummary =
        super::commands::roster::handle(pool, UploadRosterCommand { content }).await?;

    Ok(Json(UploadResponse {
        message: "Roster uploaded successfully!",
        summary,
    })
    .into_response())
}

/// # Response
///
/// - `200 OK` - `{message, total}`
/// - `400 Bad Request` - No `file` field, no usable rows, or a non-integer cell
/// - `500 Internal Server Error` - Any row failed to insert; nothing was written
#[tracing::instrument(skip(pool, multipart))]
async fn upload_stats(
    State(pool): State<PgPool>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, UploadApiError> {
    let content = read_file_field(multipart).await?;
    let summary: StatsSummary =
        super::commands::stats::handle(pool, UploadStatsCommand { content }).await?;

    Ok(Json(UploadResponse {
        message: "Stats uploaded successfully!",
        summary,
    })
    .into_response())
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
enum UploadApiError {
    NoFile,
    Multipart(MultipartError),
    Roster(UploadRosterError),
    Stats(UploadStatsError),
}

impl From<MultipartError> for UploadApiError {
    fn from(err: MultipartError) -> Self {
        Self::Multipart(err)
    }
}

impl From<UploadRosterError> for UploadApiError {
    fn from(err: UploadRosterError) -> Self {
        Self::Roster(err)
    }
}

impl From<UploadStatsError> for UploadApiError {
    fn from(err: UploadStatsError) -> Self {
        Self::Stats(err)
    }
}

impl IntoResponse for UploadApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            UploadApiError::NoFile => (StatusCode::BAD_REQUEST, "Please upload a CSV file.".to_string()),
            UploadApiError::Multipart(err) => {
                tracing::warn!(error = %err, "Unreadable multipart upload");
                (err.status(), err.body_text())
            },
            UploadApiError::Roster(UploadRosterError::Csv(err))
            | UploadApiError::Stats(UploadStatsError::Csv(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            },
            UploadApiError::Roster(err @ UploadRosterError::Database(_)) => {
                tracing::error!(error = ?err, "Roster upload failed");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            },
            UploadApiError::Stats(err @ UploadStatsError::Database(_)) => {
                tracing::error!(error = ?err, "Stats upload failed");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            },
        };

        ErrorResponse::new(message).with_status(status)
    }
}
