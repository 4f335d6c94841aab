//! Recommendation assembly: scores a reading once and composes every category.

use super::composer;
use super::models::{EnvironmentReading, HealthRecommendation, RiskTier, Source};
use super::scorer;

/// Citations attached to every report: (title, url, date).
const HEALTH_SOURCES: [(&str, &str, &str); 4] = [
    (
        "WHO Air Quality Guidelines",
        "https://www.who.int/news-room/fact-sheets/detail/ambient-(outdoor)-air-quality-and-health",
        "2024-01-15",
    ),
    (
        "CDC - Air Quality and Health",
        "https://www.cdc.gov/air-quality/about/health-effects-of-poor-air-quality.html",
        "2024-02-20",
    ),
    (
        "ECDC - Environmental Health Guidance",
        "https://www.ecdc.europa.eu/en/climate-change",
        "2024-03-10",
    ),
    (
        "PubMed - Effects of Temperature on Health",
        "https://pubmed.ncbi.nlm.nih.gov/temperature-health-effects",
        "2023-12-05",
    ),
];

/// Static citation list.
pub fn sources() -> Vec<Source> {
    HEALTH_SOURCES
        .iter()
        .map(|(title, url, date)| Source {
            title: title.to_string(),
            url: url.to_string(),
            date: date.to_string(),
        })
        .collect()
}

/// Build the one-line summary for a reading.
pub fn summary(reading: &EnvironmentReading, tier: RiskTier, location: Option<&str>) -> String {
    let area = location
        .map(|place| format!(" Në zonën tuaj ({place}),"))
        .unwrap_or_default();
    let air = reading.air_quality.label();

    match tier {
        RiskTier::High => format!(
            "⚠️ Rrezik i lartë!{area} me cilësinë e ajrit \"{air}\", temperaturë {}°C, lagështi {}% dhe nivel gazi {}, rekomandohet të merrni masa mbrojtëse urgjente.",
            reading.temperature, reading.humidity, reading.gas_level
        ),
        RiskTier::Medium => format!(
            "⚡ Rrezik mesatar.{area} kushtet aktuale (ajri: {air}, temp: {}°C) kërkojnë kujdes të veçantë, sidomos për grupet vulnerabël.",
            reading.temperature
        ),
        RiskTier::Low => format!(
            "✅ Kushte të favorshme!{area} me ajër \"{air}\" dhe temperaturë {}°C, mund të shijoni aktivitete normale jashtë.",
            reading.temperature
        ),
    }
}

/// Generate the complete health recommendation for a validated reading.
pub fn generate(reading: &EnvironmentReading, location: Option<&str>) -> HealthRecommendation {
    let risk_level = scorer::score(reading);

    HealthRecommendation {
        summary: summary(reading, risk_level, location),
        risk_level,
        food: composer::food(reading),
        drinks: composer::drinks(reading),
        exercises: composer::exercises(risk_level),
        walk_schedule: composer::walk_schedule(reading, risk_level),
        precautions: composer::precautions(risk_level),
        seek_doctor: composer::seek_doctor(risk_level),
        sources: sources(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::models::AirQuality;
    use proptest::prelude::*;

    fn reading(air_quality: AirQuality, temperature: f64, humidity: f64, gas_level: u16) -> EnvironmentReading {
        EnvironmentReading { air_quality, temperature, humidity, gas_level }
    }

    #[test]
    fn test_scenario_a() {
        let r = reading(AirQuality::VeryBad, 38.0, 85.0, 600);
        let rec = generate(&r, Some("Tiranë"));

        assert_eq!(rec.risk_level, RiskTier::High);
        assert_eq!(
            rec.summary,
            "⚠️ Rrezik i lartë! Në zonën tuaj (Tiranë), me cilësinë e ajrit \"Shumë keq\", temperaturë 38°C, lagështi 85% dhe nivel gazi 600, rekomandohet të merrni masa mbrojtëse urgjente."
        );
        assert_eq!(rec.exercises, composer::exercises(RiskTier::High));
        assert!(rec.walk_schedule.starts_with("⛔"));
    }

    #[test]
    fn test_scenario_b_low_risk_outdoor_set() {
        let rec = generate(&reading(AirQuality::Good, 22.0, 50.0, 50), None);

        assert_eq!(rec.risk_level, RiskTier::Low);
        assert_eq!(rec.exercises, composer::exercises(RiskTier::Low));
        assert_eq!(rec.exercises.len(), 4);
        assert_eq!(
            rec.summary,
            "✅ Kushte të favorshme! me ajër \"Mirë\" dhe temperaturë 22°C, mund të shijoni aktivitete normale jashtë."
        );
    }

    #[test]
    fn test_scenario_c() {
        let rec = generate(&reading(AirQuality::Bad, 31.0, 75.0, 200), None);

        assert_eq!(rec.risk_level, RiskTier::Medium);
        assert!(rec.summary.starts_with("⚡ Rrezik mesatar."));
        assert!(rec.summary.contains("temp: 31°C"));
    }

    #[test]
    fn test_fractional_values_in_summary() {
        let rec = generate(&reading(AirQuality::VeryBad, 36.5, 82.5, 700), None);
        assert!(rec.summary.contains("temperaturë 36.5°C, lagështi 82.5%"));
    }

    #[test]
    fn test_sources_are_static() {
        let a = generate(&reading(AirQuality::Good, 22.0, 50.0, 50), None);
        let b = generate(&reading(AirQuality::VeryBad, 38.0, 85.0, 600), None);

        assert_eq!(a.sources.len(), 4);
        assert_eq!(a.sources, b.sources);
        assert!(a.sources.iter().all(|s| s.url.starts_with("https://")));
    }

    #[test]
    fn test_composition_order_does_not_matter() {
        let r = reading(AirQuality::Bad, 29.0, 25.0, 320);
        let tier = scorer::score(&r);

        let doctor = composer::seek_doctor(tier);
        let precautions = composer::precautions(tier);
        let walk = composer::walk_schedule(&r, tier);
        let exercises = composer::exercises(tier);
        let drinks = composer::drinks(&r);
        let food = composer::food(&r);

        let rec = generate(&r, None);
        assert_eq!(rec.food, food);
        assert_eq!(rec.drinks, drinks);
        assert_eq!(rec.exercises, exercises);
        assert_eq!(rec.walk_schedule, walk);
        assert_eq!(rec.precautions, precautions);
        assert_eq!(rec.seek_doctor, doctor);
    }

    proptest! {
        #[test]
        fn prop_generate_is_deterministic(
            quality in prop::sample::select(AirQuality::ALL.to_vec()),
            temperature in -50.0f64..=60.0,
            humidity in 0.0f64..=100.0,
            gas in 0u16..=999,
        ) {
            let r = reading(quality, temperature, humidity, gas);
            prop_assert_eq!(generate(&r, Some("Durrës")), generate(&r, Some("Durrës")));
        }

        #[test]
        fn prop_report_categories_never_empty(
            quality in prop::sample::select(AirQuality::ALL.to_vec()),
            temperature in -50.0f64..=60.0,
            humidity in 0.0f64..=100.0,
            gas in 0u16..=999,
        ) {
            let rec = generate(&reading(quality, temperature, humidity, gas), None);
            prop_assert!(!rec.food.is_empty());
            prop_assert!(!rec.drinks.is_empty());
            prop_assert!(!rec.exercises.is_empty());
            prop_assert!(!rec.walk_schedule.is_empty());
            prop_assert!(!rec.seek_doctor.is_empty());
        }
    }
}
