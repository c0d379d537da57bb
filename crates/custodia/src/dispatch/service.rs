use chrono::NaiveDateTime;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use super::domain::{AgentId, CandidateAgent, HistoricalServiceRecord, ServiceRequest};
use super::gazetteer::Gazetteer;
use super::history::analyze_patterns;
use super::ranking::{self, RankedCandidate, ScoringInput};
use super::scoring::{CompatibilityEngine, ScoringConfig};

/// Supplies the candidate pool from the roster/recruiting systems.
pub trait AgentDirectory: Send + Sync {
    fn candidates(&self) -> Result<Vec<CandidateAgent>, DirectoryError>;
}

/// Supplies per-custodian past service records from the history store.
pub trait HistoryStore: Send + Sync {
    fn for_custodian(&self, name: &str)
        -> Result<Vec<HistoricalServiceRecord>, HistoryStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("agent directory unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, thiserror::Error)]
pub enum HistoryStoreError {
    #[error("history store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, thiserror::Error)]
pub enum DispatchServiceError {
    #[error(transparent)]
    Directory(#[from] DirectoryError),
    #[error(transparent)]
    History(#[from] HistoryStoreError),
}

/// Ranking result for one request, ready for presentation by the caller.
#[derive(Debug, Clone, Serialize)]
pub struct RankingOutcome {
    pub service_type: String,
    pub scheduled_at: NaiveDateTime,
    pub origin_resolved: Option<String>,
    pub destination_resolved: Option<String>,
    pub candidates: Vec<RankedCandidate>,
}

/// Pool listing entry for roster views.
#[derive(Debug, Clone, Serialize)]
pub struct AgentView {
    pub agent_id: AgentId,
    pub name: String,
    pub availability: &'static str,
    pub provenance: &'static str,
}

/// Service composing the directory, history store, and scoring engine.
pub struct DispatchService<D, H> {
    directory: Arc<D>,
    history: Arc<H>,
    gazetteer: Arc<Gazetteer>,
    engine: CompatibilityEngine,
}

impl<D, H> DispatchService<D, H>
where
    D: AgentDirectory + 'static,
    H: HistoryStore + 'static,
{
    pub fn new(
        directory: Arc<D>,
        history: Arc<H>,
        gazetteer: Arc<Gazetteer>,
        config: ScoringConfig,
    ) -> Self {
        let engine = CompatibilityEngine::new(gazetteer.clone(), config);
        Self {
            directory,
            history,
            gazetteer,
            engine,
        }
    }

    /// Rank the current candidate pool for one pending request.
    ///
    /// Each agent's frequent-place/type patterns are re-derived from its
    /// current records before scoring; any patterns on the incoming agent
    /// are replaced.
    pub fn rank_request(
        &self,
        request: &ServiceRequest,
    ) -> Result<RankingOutcome, DispatchServiceError> {
        let agents = self.directory.candidates()?;
        debug!(pool = agents.len(), service_type = %request.service_type, "ranking request");

        let mut inputs = Vec::with_capacity(agents.len());
        for agent in agents {
            let records = self.history.for_custodian(agent.name())?;
            let patterns = analyze_patterns(&self.gazetteer, &records);
            inputs.push(ScoringInput {
                agent: agent.with_patterns(patterns),
                history: records,
            });
        }

        let candidates = ranking::rank(&self.engine, request, &inputs);

        let origin_resolved = self
            .gazetteer
            .resolve(&request.origin_text)
            .and_then(|place| self.gazetteer.display_name(place))
            .map(str::to_string);
        let destination_resolved = self
            .gazetteer
            .resolve(&request.destination_text)
            .and_then(|place| self.gazetteer.display_name(place))
            .map(str::to_string);

        Ok(RankingOutcome {
            service_type: request.service_type.clone(),
            scheduled_at: request.scheduled_at(),
            origin_resolved,
            destination_resolved,
            candidates,
        })
    }

    /// Current pool as presentation-ready views.
    pub fn roster(&self) -> Result<Vec<AgentView>, DispatchServiceError> {
        let agents = self.directory.candidates()?;
        Ok(agents
            .iter()
            .map(|agent| AgentView {
                agent_id: agent.id().clone(),
                name: agent.name().to_string(),
                availability: agent.record.availability.label(),
                provenance: agent.provenance.label(),
            })
            .collect())
    }
}
