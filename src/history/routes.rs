//! HTTP route handlers for measurement history.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::export::{self, ReportInput};
use crate::AppState;

use super::models::MeasurementRecord;

/// Create the history router with all endpoints.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/history", get(list).delete(clear))
        .route("/api/history/export.csv", get(export_csv))
        .route("/api/history/:id/report", get(report_html))
        .route("/api/history/:id/report.txt", get(report_text))
}

/// All stored entries, newest first.
async fn list(State(state): State<AppState>) -> Result<Json<Vec<MeasurementRecord>>> {
    Ok(Json(state.history.load().await?))
}

/// Remove every stored entry.
async fn clear(State(state): State<AppState>) -> Result<StatusCode> {
    state.history.clear().await?;
    tracing::info!("History cleared");
    Ok(StatusCode::NO_CONTENT)
}

/// Download history as CSV.
async fn export_csv(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let entries = state.history.load().await?;
    let csv = export::history_to_csv(&entries)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"healthadvisor-history.csv\"",
            ),
        ],
        csv,
    ))
}

async fn report_html(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Html<String>> {
    let entry = find_entry(&state, id).await?;
    let input = report_input(&entry)?;
    Ok(Html(export::render_html(input)?))
}

async fn report_text(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let entry = find_entry(&state, id).await?;
    let text = export::render_text(report_input(&entry)?);
    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], text))
}

async fn find_entry(state: &AppState, id: Uuid) -> Result<MeasurementRecord> {
    state.history.find(id).await?.ok_or(AppError::NotFound(id))
}

fn report_input(entry: &MeasurementRecord) -> Result<ReportInput<'_>> {
    let recommendation = entry
        .recommendation
        .as_ref()
        .ok_or(AppError::MissingRecommendation(entry.id))?;

    Ok(ReportInput {
        generated_at: entry.date,
        location: entry.location.as_deref(),
        reading: &entry.data,
        recommendation,
    })
}
