use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use super::domain::{AgentId, CandidateAgent, HistoricalServiceRecord, ServiceRequest};
use super::scoring::{CompatibilityEngine, ScoreBreakdown};

/// One candidate plus the history subset that belongs to it. Callers filter
/// records by custodian before building inputs.
#[derive(Debug, Clone)]
pub struct ScoringInput {
    pub agent: CandidateAgent,
    pub history: Vec<HistoricalServiceRecord>,
}

/// Ranked entry handed back to callers, highest compatibility first.
#[derive(Debug, Clone, Serialize)]
pub struct RankedCandidate {
    pub agent_id: AgentId,
    pub agent_name: String,
    pub provenance: &'static str,
    pub breakdown: ScoreBreakdown,
}

/// Score every candidate against the request and sort by total descending.
///
/// Each scoring call reads only its own inputs and the shared read-only
/// gazetteer, so candidates are scored in parallel without locking. Equal
/// totals keep the caller-supplied order.
pub fn rank(
    engine: &CompatibilityEngine,
    request: &ServiceRequest,
    inputs: &[ScoringInput],
) -> Vec<RankedCandidate> {
    let mut ranked: Vec<(usize, RankedCandidate)> = inputs
        .par_iter()
        .enumerate()
        .map(|(index, input)| {
            let breakdown = engine.score(&input.agent, request, &input.history);
            let candidate = RankedCandidate {
                agent_id: input.agent.id().clone(),
                agent_name: input.agent.name().to_string(),
                provenance: input.agent.provenance.label(),
                breakdown,
            };
            (index, candidate)
        })
        .collect();

    ranked.sort_by(|(left_index, left), (right_index, right)| {
        right
            .breakdown
            .total
            .cmp(&left.breakdown.total)
            .then(left_index.cmp(right_index))
    });

    debug!(candidates = ranked.len(), "ranked candidates for request");

    ranked.into_iter().map(|(_, candidate)| candidate).collect()
}
