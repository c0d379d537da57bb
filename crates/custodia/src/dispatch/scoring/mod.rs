//! Compatibility scoring: one (agent, request) pair in, one explained
//! 0-100 breakdown out.
//!
//! Pure computation. Every optional attribute that is absent simply skips
//! its bonus, which is why each sub-score carries a non-zero base floor;
//! a scoring call cannot fail, it can only come back low.

mod config;
mod explanation;
mod geographic;
mod operational;
mod temporal;

pub use config::{
    DistanceBand, GapBand, GeographicRules, OperationalRules, RatingBand, ScoreWeights,
    ScoringConfig, TemporalRules, VolumeBand, COMPATIBILITY_WEIGHTS,
};
pub use explanation::explain;

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::domain::{CandidateAgent, HistoricalServiceRecord, ServiceRequest};
use super::gazetteer::Gazetteer;

/// Facts gathered while scoring, surfaced for explanations and audits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreDetails {
    pub estimated_distance_km: Option<u32>,
    pub same_region_as_frequent: bool,
    pub hours_until_next_service: Option<f64>,
    pub preferred_zone_match: bool,
    pub service_type_experience: bool,
    pub vehicle_advantage: bool,
    pub reasons: Vec<String>,
}

/// Scoring output for one (agent, request) pair. Constructed fresh per call
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Weighted combination of the three sub-scores, clamped to [0,100].
    pub total: u8,
    /// Sub-scores after their own [0,100] clamp, before weighting.
    pub temporal: u8,
    pub geographic: u8,
    pub operational: u8,
    pub details: ScoreDetails,
}

/// Stateless evaluator applying the scoring rubric against the injected
/// read-only gazetteer. Cheap to share; safe for concurrent use.
pub struct CompatibilityEngine {
    gazetteer: Arc<Gazetteer>,
    config: ScoringConfig,
}

impl CompatibilityEngine {
    pub fn new(gazetteer: Arc<Gazetteer>, config: ScoringConfig) -> Self {
        Self { gazetteer, config }
    }

    pub fn gazetteer(&self) -> &Gazetteer {
        &self.gazetteer
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score one candidate for one request. `nearby_history` is the record
    /// subset already filtered to this agent by the caller; it only feeds
    /// the temporal gap bonus.
    pub fn score(
        &self,
        agent: &CandidateAgent,
        request: &ServiceRequest,
        nearby_history: &[HistoricalServiceRecord],
    ) -> ScoreBreakdown {
        let origin = self.gazetteer.resolve(&request.origin_text);
        let destination = self.gazetteer.resolve(&request.destination_text);

        let mut details = ScoreDetails::default();
        let temporal = temporal::score(
            &self.config.temporal,
            agent,
            request,
            nearby_history,
            &mut details,
        );
        let geographic = geographic::score(
            &self.config.geographic,
            &self.gazetteer,
            agent,
            origin,
            destination,
            &mut details,
        );
        let operational = operational::score(&self.config.operational, agent, request, &mut details);

        let weights = &self.config.weights;
        let combined = f64::from(temporal) * weights.temporal
            + f64::from(geographic) * weights.geographic
            + f64::from(operational) * weights.operational;
        let total = combined.round().clamp(0.0, 100.0) as u8;

        let mut breakdown = ScoreBreakdown {
            total,
            temporal,
            geographic,
            operational,
            details,
        };
        breakdown.details.reasons = explanation::explain(&breakdown, agent);
        breakdown
    }
}

fn clamp_subscore(points: i32) -> u8 {
    points.clamp(0, 100) as u8
}
