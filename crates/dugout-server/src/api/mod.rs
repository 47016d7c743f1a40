//! HTTP surface: router assembly, the root/health endpoints and the server loop

pub mod response;

use axum::{
    extract::State, http::Uri, middleware::from_fn_with_state, response::IntoResponse,
    routing::get, Json, Router,
};
use serde_json::json;
use sqlx::PgPool;
use std::{net::SocketAddr, time::Duration};
use tokio::signal;
use tower_http::compression::CompressionLayer;

use crate::config::Config;
use crate::db;
use crate::error::{AppError, ServerResult};
use crate::features;
use crate::middleware::{self, AccessPolicy};

/// Application state for the top-level routes
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub policy: AccessPolicy,
}

impl AppState {
    pub fn new(db: PgPool, config: &Config) -> Self {
        Self {
            db,
            policy: AccessPolicy::from_config(&config.access),
        }
    }
}

/// Build the full router with the middleware stack
///
/// Layers, outermost first: CORS, request tracing, compression, access policy.
pub fn create_router(state: AppState, config: &Config) -> Router {
    let feature_routes = features::router(features::FeatureState {
        db: state.db.clone(),
        upload_limit_bytes: config.server.upload_limit_bytes,
    });

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .with_state(state.db.clone())
        .merge(feature_routes)
        .fallback(not_found)
        .layer(from_fn_with_state(state.policy.clone(), middleware::policy::enforce))
        .layer(CompressionLayer::new())
        .layer(middleware::tracing_layer())
        .layer(middleware::cors_layer(&config.cors))
}

/// Bind, serve until Ctrl-C/SIGTERM, then close the pool
pub async fn serve(config: Config, pool: PgPool) -> anyhow::Result<()> {
    let state = AppState::new(pool.clone(), &config);
    if state.policy.is_open() {
        tracing::warn!("DUGOUT_ADMIN_TOKEN is not set; every caller may modify data");
    }

    let app = create_router(state, &config);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(config.server.shutdown_timeout_secs))
        .await?;

    pool.close().await;
    tracing::info!("Server shut down gracefully");

    Ok(())
}

async fn root() -> impl IntoResponse {
    Json(json!({
        "name": "Dugout Server",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running"
    }))
}

async fn health(State(db): State<PgPool>) -> ServerResult<impl IntoResponse> {
    let timestamp = db::health_check(&db).await.map_err(|e| {
        tracing::error!(error = ?e, "Database health check failed");
        AppError::Unavailable("Database connection failed.".to_string())
    })?;

    Ok(Json(json!({
        "status": "healthy",
        "database": "connected",
        "timestamp": timestamp
    })))
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

async fn shutdown_signal(timeout_secs: u64) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("Received terminate signal, starting graceful shutdown");
        },
    }

    tracing::info!("Waiting up to {} seconds for connections to close", timeout_secs);
    tokio::time::sleep(Duration::from_secs(timeout_secs.min(5))).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app(pool: PgPool) -> Router {
        let config = Config::default();
        create_router(AppState::new(pool, &config), &config)
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_root_banner(pool: PgPool) {
        let (status, body) = get_json(app(pool), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Dugout Server");
        assert_eq!(body["status"], "running");
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_health_reports_database(pool: PgPool) {
        let (status, body) = get_json(app(pool), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["database"], "connected");
        assert!(body["timestamp"].is_string());
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_health_unavailable_after_close(pool: PgPool) {
        pool.close().await;
        let (status, body) = get_json(app(pool), "/health").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"], "Database connection failed.");
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_unknown_route_is_json_404(pool: PgPool) {
        let (status, body) = get_json(app(pool), "/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "No route for /nope");
    }
}
