//! Application error type and its HTTP mapping.

use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;
use uuid::Uuid;

use crate::advisor::ValidationError;
use crate::history::HistoryError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{}", .0.body_text())]
    MalformedBody(#[from] JsonRejection),
    #[error("history entry {0} not found")]
    NotFound(Uuid),
    #[error("history entry {0} has no recommendation")]
    MissingRecommendation(Uuid),
    #[error(transparent)]
    History(#[from] HistoryError),
    #[error("failed to render report: {0}")]
    Template(#[from] askama::Error),
    #[error("failed to write CSV: {0}")]
    Export(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

/// JSON body extractor whose rejections use the API's error body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Field named in a serde "missing field" message, if any.
fn missing_field(message: &str) -> Option<&str> {
    let (_, rest) = message.split_once("missing field `")?;
    rest.split_once('`').map(|(field, _)| field)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) | AppError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) | AppError::MissingRecommendation(_) => StatusCode::NOT_FOUND,
            AppError::History(_) | AppError::Template(_) | AppError::Export(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        let body = match &self {
            AppError::Validation(e) => serde_json::json!({
                "error": e.to_string(),
                "field": e.field(),
            }),
            AppError::MalformedBody(rejection) => {
                let message = rejection.body_text();
                serde_json::json!({
                    "error": message,
                    "field": missing_field(&message),
                })
            }
            _ => serde_json::json!({ "error": self.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_name() {
        assert_eq!(
            missing_field("Failed to deserialize the JSON body into the target type: missing field `humidity` at line 1 column 52"),
            Some("humidity")
        );
        assert_eq!(missing_field("expected value at line 1 column 1"), None);
    }
}
