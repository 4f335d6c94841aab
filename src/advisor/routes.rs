//! HTTP route handlers for the health advisory API.

use axum::{
    extract::State,
    response::{Html, Json},
    routing::{get, post},
    Router,
};
use chrono::Utc;

use crate::error::{AppJson, Result};
use crate::export::{self, ReportInput};
use crate::history::MeasurementRecord;
use crate::AppState;

use super::models::{ReadingInput, RecommendRequest, RecommendResponse, ScoreResponse};
use super::{scorer, service, validation};

/// Create the advisor router with all endpoints.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/score", post(score))
        .route("/recommend", post(recommend))
        .route("/report", post(report))
}

/// Health check for the advisory engine.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "health-advisor",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Per-axis risk points and tier for a reading.
async fn score(AppJson(input): AppJson<ReadingInput>) -> Result<Json<ScoreResponse>> {
    let reading = validation::validate_reading(&input)?;
    let points = scorer::breakdown(&reading);
    let total = points.total();

    Ok(Json(ScoreResponse {
        points,
        total,
        risk_level: scorer::tier_for_score(total),
    }))
}

/// Generate a recommendation and, unless `save` is false, record it in history.
///
/// A failed history write is logged and reported as `saved: false`; the
/// recommendation is still returned.
async fn recommend(
    State(state): State<AppState>,
    AppJson(request): AppJson<RecommendRequest>,
) -> Result<Json<RecommendResponse>> {
    let reading = validation::validate_reading(&request.reading)?;
    let location = validation::normalize_location(request.location.as_deref());

    let recommendation = service::generate(&reading, location.as_deref());
    tracing::info!(
        "Generated {} risk recommendation (air: {}, location: {})",
        recommendation.risk_level,
        reading.air_quality.as_str(),
        location.as_deref().unwrap_or("-")
    );

    let entry_id = if request.save {
        let record = MeasurementRecord::new(reading, location, Some(recommendation.clone()));
        let id = record.id;
        match state.history.append(record).await {
            Ok(_) => Some(id),
            Err(e) => {
                tracing::warn!("Failed to save recommendation {} to history: {}", id, e);
                None
            }
        }
    } else {
        None
    };

    Ok(Json(RecommendResponse {
        recommendation,
        saved: entry_id.is_some(),
        entry_id,
    }))
}

/// Render an HTML report for a reading without storing it.
async fn report(AppJson(request): AppJson<RecommendRequest>) -> Result<Html<String>> {
    let reading = validation::validate_reading(&request.reading)?;
    let location = validation::normalize_location(request.location.as_deref());
    let recommendation = service::generate(&reading, location.as_deref());

    let html = export::render_html(ReportInput {
        generated_at: Utc::now(),
        location: location.as_deref(),
        reading: &reading,
        recommendation: &recommendation,
    })?;

    Ok(Html(html))
}
