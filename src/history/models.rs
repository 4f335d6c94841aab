//! Stored measurement history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::advisor::{EnvironmentReading, HealthRecommendation};

/// One saved submission.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementRecord {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub data: EnvironmentReading,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<HealthRecommendation>,
}

impl MeasurementRecord {
    /// Stamp a new record with a fresh id and the current time.
    pub fn new(
        data: EnvironmentReading,
        location: Option<String>,
        recommendation: Option<HealthRecommendation>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: Utc::now(),
            data,
            location,
            recommendation,
        }
    }
}

/// Row shape of the `measurement_history` table.
#[derive(Debug, FromRow)]
pub(crate) struct HistoryRow {
    pub id: Uuid,
    pub recorded_at: DateTime<Utc>,
    pub reading: Json<EnvironmentReading>,
    pub location: Option<String>,
    pub recommendation: Option<Json<HealthRecommendation>>,
}

impl From<HistoryRow> for MeasurementRecord {
    fn from(row: HistoryRow) -> Self {
        Self {
            id: row.id,
            date: row.recorded_at,
            data: row.reading.0,
            location: row.location,
            recommendation: row.recommendation.map(|json| json.0),
        }
    }
}
