use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::history::AgentPatterns;

/// Identifier wrapper for custodians so ids and display names cannot be mixed up.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentId(pub String);

/// One pending transport-security job waiting for a custodian assignment.
///
/// Origin and destination arrive as free text from the scheduling workflow
/// ("TYASA -> TEHUACAN, PUEBLA") and are only resolved against the gazetteer
/// inside the scoring engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRequest {
    pub origin_text: String,
    pub destination_text: String,
    pub scheduled_date: NaiveDate,
    pub scheduled_start: NaiveTime,
    pub service_type: String,
    #[serde(default)]
    pub requires_armed_guard: bool,
    #[serde(default)]
    pub requires_special_equipment: bool,
}

impl ServiceRequest {
    pub fn scheduled_at(&self) -> NaiveDateTime {
        self.scheduled_date.and_time(self.scheduled_start)
    }
}

/// Completion state of a past service as recorded by the history store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceStatus {
    Completed,
    Cancelled,
    InProgress,
}

impl ServiceStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::InProgress => "in_progress",
        }
    }
}

/// One past job outcome supplied in bulk per custodian by the history store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalServiceRecord {
    pub occurred_at: NaiveDateTime,
    pub origin_text: String,
    pub destination_text: String,
    pub status: ServiceStatus,
    pub custodian: String,
    pub service_type: String,
    #[serde(default)]
    pub distance_km: Option<f64>,
}

/// Current duty state of a custodian. Not consulted by scoring; the caller
/// decides which states enter the candidate pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityState {
    Available,
    OnAssignment,
    OffDuty,
}

impl AvailabilityState {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::OnAssignment => "on_assignment",
            Self::OffDuty => "off_duty",
        }
    }
}

/// Structured weekly availability declared by a custodian.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyAvailability {
    pub weekdays: bool,
    pub saturday: bool,
    pub sunday: bool,
}

/// Attributes shared by every custodian regardless of provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentRecord {
    pub id: AgentId,
    pub name: String,
    pub availability: AvailabilityState,
    #[serde(default)]
    pub owns_vehicle: bool,
    #[serde(default)]
    pub has_security_experience: bool,
    #[serde(default)]
    pub certifications: Vec<String>,
    /// Derived from the custodian's history by the pattern analyzer;
    /// recomputed whenever the underlying records change.
    #[serde(default)]
    pub patterns: AgentPatterns,
}

/// Attributes known only for existing roster members.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterDetails {
    pub rating: Option<f64>,
    pub completed_services: Option<u32>,
    pub weekly_availability: Option<WeeklyAvailability>,
}

/// Attributes known only for prospective recruits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProspectDetails {
    pub preferred_zone: Option<String>,
    pub weekly_availability: Option<WeeklyAvailability>,
    pub rating: Option<f64>,
    pub completed_services: Option<u32>,
}

/// Where a candidate came from, with the provenance-specific attributes
/// attached to the variant instead of scattered nullable fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum AgentProvenance {
    Roster(RosterDetails),
    Prospect(ProspectDetails),
    HistoryDerived,
}

impl AgentProvenance {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Roster(_) => "roster",
            Self::Prospect(_) => "prospect",
            Self::HistoryDerived => "history",
        }
    }
}

/// The entity being scored: shared base record plus provenance variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateAgent {
    pub record: AgentRecord,
    pub provenance: AgentProvenance,
}

impl CandidateAgent {
    pub fn id(&self) -> &AgentId {
        &self.record.id
    }

    pub fn name(&self) -> &str {
        &self.record.name
    }

    /// Cumulative rating, if known. Non-finite values are treated as absent.
    pub fn rating(&self) -> Option<f64> {
        let rating = match &self.provenance {
            AgentProvenance::Roster(details) => details.rating,
            AgentProvenance::Prospect(details) => details.rating,
            AgentProvenance::HistoryDerived => None,
        };
        rating.filter(|value| value.is_finite())
    }

    pub fn completed_services(&self) -> Option<u32> {
        match &self.provenance {
            AgentProvenance::Roster(details) => details.completed_services,
            AgentProvenance::Prospect(details) => details.completed_services,
            AgentProvenance::HistoryDerived => None,
        }
    }

    pub fn weekly_availability(&self) -> Option<WeeklyAvailability> {
        match &self.provenance {
            AgentProvenance::Roster(details) => details.weekly_availability,
            AgentProvenance::Prospect(details) => details.weekly_availability,
            AgentProvenance::HistoryDerived => None,
        }
    }

    /// Declared preferred zone; prospects only.
    pub fn preferred_zone(&self) -> Option<&str> {
        match &self.provenance {
            AgentProvenance::Prospect(details) => details.preferred_zone.as_deref(),
            _ => None,
        }
    }

    /// Replace the derived history patterns (callers own the cache policy).
    pub fn with_patterns(mut self, patterns: AgentPatterns) -> Self {
        self.record.patterns = patterns;
        self
    }
}
