use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use std::io::Read;

use crate::dispatch::domain::{HistoricalServiceRecord, ServiceStatus};

#[derive(Debug, thiserror::Error)]
pub enum HistoryImportError {
    #[error("history csv is malformed: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: unrecognized timestamp '{value}'")]
    InvalidTimestamp { row: usize, value: String },
    #[error("row {row}: unrecognized status '{value}'")]
    InvalidStatus { row: usize, value: String },
}

/// Parse a CSV export of past services from the legacy operations system.
///
/// Timestamps come in several shapes depending on which screen produced the
/// export, so parsing tries RFC 3339 first and falls back to the plain
/// date-time and date-only forms.
pub fn parse_history<R: Read>(reader: R) -> Result<Vec<HistoricalServiceRecord>, HistoryImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for (idx, row) in csv_reader.deserialize::<HistoryRow>().enumerate() {
        let row_number = idx + 1;
        let row = row?;

        let occurred_at =
            parse_timestamp(&row.timestamp).ok_or_else(|| HistoryImportError::InvalidTimestamp {
                row: row_number,
                value: row.timestamp.clone(),
            })?;
        let status =
            parse_status(&row.status).ok_or_else(|| HistoryImportError::InvalidStatus {
                row: row_number,
                value: row.status.clone(),
            })?;
        let distance_km = row
            .distance_km
            .as_deref()
            .and_then(|value| value.parse::<f64>().ok())
            .filter(|value| value.is_finite());

        records.push(HistoricalServiceRecord {
            occurred_at,
            origin_text: row.origin,
            destination_text: row.destination,
            status,
            custodian: row.custodian,
            service_type: row.service_type,
            distance_km,
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct HistoryRow {
    #[serde(rename = "Timestamp")]
    timestamp: String,
    #[serde(rename = "Origin")]
    origin: String,
    #[serde(rename = "Destination")]
    destination: String,
    #[serde(rename = "Status")]
    status: String,
    #[serde(rename = "Custodian")]
    custodian: String,
    #[serde(rename = "Service Type")]
    service_type: String,
    #[serde(
        rename = "Distance Km",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    distance_km: Option<String>,
}

fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.naive_utc());
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%d/%m/%Y %H:%M"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Some(parsed);
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

fn parse_status(value: &str) -> Option<ServiceStatus> {
    match value.trim().to_lowercase().as_str() {
        "completed" | "completado" | "concluido" | "finalizado" => Some(ServiceStatus::Completed),
        "cancelled" | "canceled" | "cancelado" => Some(ServiceStatus::Cancelled),
        "in_progress" | "in progress" | "en curso" | "en ruta" => Some(ServiceStatus::InProgress),
        _ => None,
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|inner| !inner.trim().is_empty()))
}
