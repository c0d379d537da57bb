use std::collections::HashMap;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::dispatch::domain::{
    AgentId, AgentProvenance, AgentRecord, AvailabilityState, CandidateAgent,
    HistoricalServiceRecord, ProspectDetails, RosterDetails, ServiceRequest, ServiceStatus,
    WeeklyAvailability,
};
use crate::dispatch::gazetteer::{Gazetteer, PlaceId};
use crate::dispatch::history::AgentPatterns;
use crate::dispatch::scoring::{CompatibilityEngine, ScoringConfig};
use crate::dispatch::service::{
    AgentDirectory, DirectoryError, HistoryStore, HistoryStoreError,
};

/// Synthetic gazetteer small enough to reason about by hand. Distances that
/// matter: Puebla-Cholula ~11 km, Puebla-Amozoc ~48 km, Puebla-Tehuacán
/// ~107 km, CDMX-Monterrey ~700 km.
pub(super) fn gazetteer() -> Gazetteer {
    Gazetteer::builder()
        .place(
            "tehuacan",
            "Tehuacán",
            18.4617,
            -97.3928,
            "Puebla",
            &["tehuacán"],
        )
        .place("puebla", "Puebla", 19.0414, -98.2063, "Puebla", &[])
        .place("cholula", "Cholula", 19.0633, -98.3064, "Puebla", &[])
        .place("amozoc", "Amozoc", 19.0333, -97.7500, "Puebla", &[])
        .place(
            "veracruz",
            "Veracruz",
            19.1738,
            -96.1342,
            "Veracruz",
            &["puerto de veracruz"],
        )
        .place(
            "cdmx",
            "Ciudad de México",
            19.4326,
            -99.1332,
            "Ciudad de México",
            &["ciudad de mexico"],
        )
        .place(
            "monterrey",
            "Monterrey",
            25.6866,
            -100.3161,
            "Nuevo León",
            &["mty"],
        )
        .zone("oriente", &["tehuacan", "puebla"])
        .zone("golfo", &["veracruz"])
        .build()
        .expect("test gazetteer builds")
}

pub(super) fn engine() -> CompatibilityEngine {
    CompatibilityEngine::new(Arc::new(gazetteer()), ScoringConfig::default())
}

pub(super) fn place(key: &str) -> PlaceId {
    gazetteer().resolve(key).expect("place resolves")
}

/// Free text that resolves to nothing in the test gazetteer.
pub(super) const UNRESOLVED: &str = "sitio sin registro";

/// 2026-03-10 is a Tuesday.
pub(super) fn tuesday_request(origin: &str, destination: &str) -> ServiceRequest {
    ServiceRequest {
        origin_text: origin.to_string(),
        destination_text: destination.to_string(),
        scheduled_date: NaiveDate::from_ymd_opt(2026, 3, 10).expect("valid date"),
        scheduled_start: NaiveTime::from_hms_opt(10, 0, 0).expect("valid time"),
        service_type: "custodia".to_string(),
        requires_armed_guard: false,
        requires_special_equipment: false,
    }
}

/// Timestamp on the request day (2026-03-10) at the given hour and minute.
pub(super) fn on_request_day(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 10)
        .expect("valid date")
        .and_hms_opt(hour, minute, 0)
        .expect("valid time")
}

pub(super) fn bare_agent(name: &str) -> CandidateAgent {
    CandidateAgent {
        record: AgentRecord {
            id: AgentId(format!("cust-{}", name.to_lowercase().replace(' ', "-"))),
            name: name.to_string(),
            availability: AvailabilityState::Available,
            owns_vehicle: false,
            has_security_experience: false,
            certifications: Vec::new(),
            patterns: AgentPatterns::default(),
        },
        provenance: AgentProvenance::HistoryDerived,
    }
}

pub(super) fn roster_agent(
    name: &str,
    rating: Option<f64>,
    completed_services: Option<u32>,
    weekly_availability: Option<WeeklyAvailability>,
) -> CandidateAgent {
    CandidateAgent {
        provenance: AgentProvenance::Roster(RosterDetails {
            rating,
            completed_services,
            weekly_availability,
        }),
        ..bare_agent(name)
    }
}

pub(super) fn prospect_agent(name: &str, preferred_zone: Option<&str>) -> CandidateAgent {
    CandidateAgent {
        provenance: AgentProvenance::Prospect(ProspectDetails {
            preferred_zone: preferred_zone.map(str::to_string),
            ..ProspectDetails::default()
        }),
        ..bare_agent(name)
    }
}

pub(super) fn with_frequent(agent: CandidateAgent, keys: &[&str]) -> CandidateAgent {
    agent.with_patterns(AgentPatterns {
        frequent_places: keys.iter().map(|key| place(key)).collect(),
        frequent_service_types: Vec::new(),
    })
}

pub(super) fn completed_record(
    custodian: &str,
    occurred_at: NaiveDateTime,
) -> HistoricalServiceRecord {
    HistoricalServiceRecord {
        occurred_at,
        origin_text: "tehuacan".to_string(),
        destination_text: "puebla".to_string(),
        status: ServiceStatus::Completed,
        custodian: custodian.to_string(),
        service_type: "custodia".to_string(),
        distance_km: Some(107.0),
    }
}

pub(super) struct FixedDirectory(pub Vec<CandidateAgent>);

impl AgentDirectory for FixedDirectory {
    fn candidates(&self) -> Result<Vec<CandidateAgent>, DirectoryError> {
        Ok(self.0.clone())
    }
}

pub(super) struct FailingDirectory;

impl AgentDirectory for FailingDirectory {
    fn candidates(&self) -> Result<Vec<CandidateAgent>, DirectoryError> {
        Err(DirectoryError::Unavailable("roster offline".to_string()))
    }
}

#[derive(Default)]
pub(super) struct FixedHistory(pub HashMap<String, Vec<HistoricalServiceRecord>>);

impl HistoryStore for FixedHistory {
    fn for_custodian(
        &self,
        name: &str,
    ) -> Result<Vec<HistoricalServiceRecord>, HistoryStoreError> {
        Ok(self.0.get(name).cloned().unwrap_or_default())
    }
}
