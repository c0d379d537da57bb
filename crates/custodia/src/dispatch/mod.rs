//! Custodian dispatch core: place resolution, history mining, compatibility
//! scoring, and ranking.

pub mod domain;
pub mod gazetteer;
pub mod history;
pub mod ranking;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    AgentId, AgentProvenance, AgentRecord, AvailabilityState, CandidateAgent,
    HistoricalServiceRecord, ProspectDetails, RosterDetails, ServiceRequest, ServiceStatus,
    WeeklyAvailability,
};
pub use gazetteer::{Gazetteer, GazetteerBuilder, GazetteerError, Place, PlaceId};
pub use history::{analyze_patterns, parse_history, AgentPatterns, HistoryImportError};
pub use ranking::{rank, RankedCandidate, ScoringInput};
pub use router::dispatch_router;
pub use scoring::{
    explain, CompatibilityEngine, ScoreBreakdown, ScoreDetails, ScoreWeights, ScoringConfig,
    COMPATIBILITY_WEIGHTS,
};
pub use service::{
    AgentDirectory, AgentView, DirectoryError, DispatchService, DispatchServiceError,
    HistoryStore, HistoryStoreError, RankingOutcome,
};
