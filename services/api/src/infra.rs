use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use custodia::dispatch::{
    AgentDirectory, CandidateAgent, DirectoryError, HistoricalServiceRecord, HistoryStore,
    HistoryStoreError, ScoringConfig,
};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn default_scoring_config() -> ScoringConfig {
    ScoringConfig::default()
}

/// Roster kept in process memory; the production deployment swaps this for
/// the staffing system client.
#[derive(Default)]
pub(crate) struct InMemoryAgentDirectory {
    agents: Mutex<Vec<CandidateAgent>>,
}

impl InMemoryAgentDirectory {
    pub(crate) fn seeded(agents: Vec<CandidateAgent>) -> Self {
        Self {
            agents: Mutex::new(agents),
        }
    }
}

impl AgentDirectory for InMemoryAgentDirectory {
    fn candidates(&self) -> Result<Vec<CandidateAgent>, DirectoryError> {
        let agents = self
            .agents
            .lock()
            .map_err(|_| DirectoryError::Unavailable("directory lock poisoned".to_string()))?;
        Ok(agents.clone())
    }
}

/// Past services kept in process memory, filtered per custodian on read.
#[derive(Default)]
pub(crate) struct InMemoryHistoryStore {
    records: Mutex<Vec<HistoricalServiceRecord>>,
}

impl InMemoryHistoryStore {
    pub(crate) fn seeded(records: Vec<HistoricalServiceRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }
}

impl HistoryStore for InMemoryHistoryStore {
    fn for_custodian(
        &self,
        name: &str,
    ) -> Result<Vec<HistoricalServiceRecord>, HistoryStoreError> {
        let records = self
            .records
            .lock()
            .map_err(|_| HistoryStoreError::Unavailable("history lock poisoned".to_string()))?;
        Ok(records
            .iter()
            .filter(|record| record.custodian == name)
            .cloned()
            .collect())
    }
}
