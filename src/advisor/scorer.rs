//! Additive multi-factor risk scoring.
//!
//! Each axis contributes points independently. Within an axis only the widest
//! matching band applies, so bands never stack on the same measurement.

use super::models::{AirQuality, EnvironmentReading, RiskTier, ScoreBreakdown};

/// Total at or above which a reading is high risk.
const HIGH_THRESHOLD: u8 = 8;
/// Total at or above which a reading is medium risk.
const MEDIUM_THRESHOLD: u8 = 4;

impl AirQuality {
    /// Fixed point contribution of the air quality category.
    pub fn risk_points(&self) -> u8 {
        match self {
            Self::VeryGood => 0,
            Self::Good => 1,
            Self::Bad => 3,
            Self::VeryBad => 5,
        }
    }
}

// Bands are written as outward comparisons so a NaN matches none of them.
#[allow(clippy::manual_range_contains)]
fn temperature_points(celsius: f64) -> u8 {
    if celsius < 5.0 || celsius > 35.0 {
        3
    } else if celsius < 10.0 || celsius > 30.0 {
        2
    } else if celsius < 15.0 || celsius > 28.0 {
        1
    } else {
        0
    }
}

#[allow(clippy::manual_range_contains)]
fn humidity_points(percent: f64) -> u8 {
    if percent < 20.0 || percent > 80.0 {
        2
    } else if percent < 30.0 || percent > 70.0 {
        1
    } else {
        0
    }
}

fn gas_points(level: u16) -> u8 {
    match level {
        501.. => 4,
        301..=500 => 2,
        151..=300 => 1,
        _ => 0,
    }
}

impl ScoreBreakdown {
    pub fn total(&self) -> u8 {
        self.air_quality + self.temperature + self.humidity + self.gas_level
    }
}

/// Score each axis of a reading.
pub fn breakdown(reading: &EnvironmentReading) -> ScoreBreakdown {
    ScoreBreakdown {
        air_quality: reading.air_quality.risk_points(),
        temperature: temperature_points(reading.temperature),
        humidity: humidity_points(reading.humidity),
        gas_level: gas_points(reading.gas_level),
    }
}

/// Map a total score to its tier.
pub fn tier_for_score(total: u8) -> RiskTier {
    if total >= HIGH_THRESHOLD {
        RiskTier::High
    } else if total >= MEDIUM_THRESHOLD {
        RiskTier::Medium
    } else {
        RiskTier::Low
    }
}

/// Classify a reading into a risk tier.
pub fn score(reading: &EnvironmentReading) -> RiskTier {
    tier_for_score(breakdown(reading).total())
}
