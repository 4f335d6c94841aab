//! Data types for environmental readings and health recommendations.

use serde::{Deserialize, Serialize};

/// Air quality category as reported by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AirQuality {
    VeryGood,
    Good,
    Bad,
    VeryBad,
}

impl AirQuality {
    /// Every category, ordered from cleanest to most polluted.
    pub const ALL: [AirQuality; 4] = [Self::VeryGood, Self::Good, Self::Bad, Self::VeryBad];

    /// Wire name, as used in CSV exports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VeryGood => "very_good",
            Self::Good => "good",
            Self::Bad => "bad",
            Self::VeryBad => "very_bad",
        }
    }

    /// Display label shown to users.
    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryGood => "Shumë mirë",
            Self::Good => "Mirë",
            Self::Bad => "Keq",
            Self::VeryBad => "Shumë keq",
        }
    }

    /// Bad or very bad air.
    pub fn is_polluted(&self) -> bool {
        matches!(self, Self::Bad | Self::VeryBad)
    }
}

/// One user-submitted set of environmental measurements.
///
/// Readings reach the engine already range-checked; the engine does not
/// re-validate them.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentReading {
    pub air_quality: AirQuality,
    /// Degrees Celsius, -50..=60
    pub temperature: f64,
    /// Relative humidity in percent, 0..=100
    pub humidity: f64,
    /// Gas sensor level, 0..=999
    pub gas_level: u16,
}

/// Discrete risk classification of a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub const ALL: [RiskTier; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Human-readable label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Rrezik i Ulët",
            Self::Medium => "Rrezik Mesatar",
            Self::High => "Rrezik i Lartë",
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Advice for vulnerable groups.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Precautions {
    pub children: String,
    pub elderly: String,
    pub asthmatic: String,
}

/// Citation attached to every report.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Source {
    pub title: String,
    pub url: String,
    /// ISO date (YYYY-MM-DD)
    pub date: String,
}

/// Complete advisory report for one reading.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthRecommendation {
    pub summary: String,
    pub risk_level: RiskTier,
    pub food: Vec<String>,
    pub drinks: Vec<String>,
    pub exercises: Vec<String>,
    pub walk_schedule: String,
    pub precautions: Precautions,
    pub seek_doctor: String,
    pub sources: Vec<Source>,
}

/// Raw reading as posted by clients, before range checks.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingInput {
    pub air_quality: AirQuality,
    pub temperature: f64,
    pub humidity: f64,
    /// Signed so out-of-range values reach validation instead of failing deserialization
    pub gas_level: i64,
}

/// Request payload for recommendation generation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendRequest {
    #[serde(flatten)]
    pub reading: ReadingInput,
    #[serde(default)]
    pub location: Option<String>,
    /// Store the result in history
    #[serde(default = "default_save")]
    pub save: bool,
}

fn default_save() -> bool {
    true
}

/// Response payload from recommendation generation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendResponse {
    pub recommendation: HealthRecommendation,
    /// Whether the result made it into history
    pub saved: bool,
    /// History entry id, when the result was saved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_id: Option<uuid::Uuid>,
}

/// Per-axis risk points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub air_quality: u8,
    pub temperature: u8,
    pub humidity: u8,
    pub gas_level: u8,
}

/// Response payload from the scoring endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    pub points: ScoreBreakdown,
    pub total: u8,
    pub risk_level: RiskTier,
}
