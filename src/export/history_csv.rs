//! CSV flattening of measurement history.

use crate::history::MeasurementRecord;

const HEADERS: [&str; 8] = [
    "Data",
    "Ora",
    "Cilësia e Ajrit",
    "Temperatura (°C)",
    "Lagështia (%)",
    "Niveli i Gazit",
    "Lokacioni",
    "Niveli i Rrezikut",
];

/// Render history as CSV, one row per entry in the given order.
///
/// Returns an empty string for an empty history.
pub fn history_to_csv(entries: &[MeasurementRecord]) -> Result<String, csv::Error> {
    if entries.is_empty() {
        return Ok(String::new());
    }

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(HEADERS)?;

    for entry in entries {
        writer.write_record([
            entry.date.format("%d.%m.%Y").to_string(),
            entry.date.format("%H:%M:%S").to_string(),
            entry.data.air_quality.as_str().to_string(),
            entry.data.temperature.to_string(),
            entry.data.humidity.to_string(),
            entry.data.gas_level.to_string(),
            entry.location.clone().unwrap_or_default(),
            entry
                .recommendation
                .as_ref()
                .map(|r| r.risk_level.as_str().to_string())
                .unwrap_or_default(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
