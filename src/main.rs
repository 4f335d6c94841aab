//! HealthAdvisor - Rust/Axum Backend
//!
//! Turns user-entered environmental readings into rule-based health advice,
//! keeps a capped history of submissions and exports it as CSV or reports.

use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod advisor;
mod config;
mod db;
mod error;
mod export;
pub mod history;

use config::Config;
use history::{HistoryRepository, InMemoryHistoryRepository, PgHistoryRepository};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub history: Arc<dyn HistoryRepository>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "healthadvisor_web=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    // History storage: PostgreSQL when configured, otherwise in-process
    let history: Arc<dyn HistoryRepository> = match &config.database_url {
        Some(url) => {
            tracing::info!("Connecting to database...");
            let pool = db::connect(url, config.database_max_connections).await?;
            db::ensure_schema(&pool).await?;
            tracing::info!("Database connected successfully");
            Arc::new(PgHistoryRepository::new(pool, config.history_limit))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, history is kept in memory");
            Arc::new(InMemoryHistoryRepository::new(config.history_limit))
        }
    };

    let app = app(AppState { history })
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new());

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the router with every endpoint.
pub fn app(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Recommendation engine
        .nest("/api/advisor", advisor::router())
        // History and exports
        .merge(history::router())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Health check endpoint
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.history.load().await {
        Ok(entries) => Json(serde_json::json!({
            "status": "healthy",
            "service": "healthadvisor-web",
            "history": state.history.backend(),
            "entries": entries.len(),
        })),
        Err(e) => {
            tracing::error!("History health check failed: {}", e);
            Json(serde_json::json!({
                "status": "unhealthy",
                "history": state.history.backend(),
                "error": e.to_string()
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt; // for oneshot

    #[tokio::test]
    async fn test_health_check() {
        let state = AppState {
            history: Arc::new(InMemoryHistoryRepository::default()),
        };

        let response = app(state)
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["history"], "memory");
        assert_eq!(body["entries"], 0);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let state = AppState {
            history: Arc::new(InMemoryHistoryRepository::default()),
        };

        let response = app(state)
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
