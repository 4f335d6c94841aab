//! Range checks applied to client input before it reaches the engine.

use thiserror::Error;

use super::models::{EnvironmentReading, ReadingInput};

pub const TEMPERATURE_RANGE: std::ops::RangeInclusive<f64> = -50.0..=60.0;
pub const HUMIDITY_RANGE: std::ops::RangeInclusive<f64> = 0.0..=100.0;
pub const GAS_LEVEL_MAX: i64 = 999;

/// Validation error types.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("temperature must be between -50 and 60 °C, got {0}")]
    Temperature(f64),
    #[error("humidity must be between 0 and 100 %, got {0}")]
    Humidity(f64),
    #[error("gas level must be between 0 and 999, got {0}")]
    GasLevel(i64),
}

impl ValidationError {
    /// Name of the offending request field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Temperature(_) => "temperature",
            Self::Humidity(_) => "humidity",
            Self::GasLevel(_) => "gasLevel",
        }
    }
}

/// Check every measurement against its domain and build a reading.
pub fn validate_reading(input: &ReadingInput) -> Result<EnvironmentReading, ValidationError> {
    // NaN fails `contains`, so non-finite values are rejected here too
    if !TEMPERATURE_RANGE.contains(&input.temperature) {
        return Err(ValidationError::Temperature(input.temperature));
    }
    if !HUMIDITY_RANGE.contains(&input.humidity) {
        return Err(ValidationError::Humidity(input.humidity));
    }
    let gas_level = u16::try_from(input.gas_level)
        .ok()
        .filter(|&level| i64::from(level) <= GAS_LEVEL_MAX)
        .ok_or(ValidationError::GasLevel(input.gas_level))?;

    Ok(EnvironmentReading {
        air_quality: input.air_quality,
        temperature: input.temperature,
        humidity: input.humidity,
        gas_level,
    })
}

/// Trim a location label; blank labels are treated as absent.
pub fn normalize_location(location: Option<&str>) -> Option<String> {
    location
        .map(str::trim)
        .filter(|place| !place.is_empty())
        .map(str::to_string)
}
