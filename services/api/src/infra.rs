use credlens::config::AiConfig;
use credlens::error::AppError;
use credlens::opinion::{GroqClient, LlmOpinionSource};
use credlens::session::{
    HistoryEntry, LoanEvaluationService, SessionId, SessionStore, SessionStoreError,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

pub(crate) type ApiService = LoanEvaluationService<LlmOpinionSource<GroqClient>, InMemorySessionStore>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Session histories held for the lifetime of the process.
#[derive(Default, Clone)]
pub(crate) struct InMemorySessionStore {
    sessions: Arc<Mutex<HashMap<SessionId, Vec<HistoryEntry>>>>,
}

impl InMemorySessionStore {
    fn lock(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<SessionId, Vec<HistoryEntry>>>, SessionStoreError>
    {
        self.sessions
            .lock()
            .map_err(|_| SessionStoreError::Unavailable("session mutex poisoned".to_string()))
    }
}

impl SessionStore for InMemorySessionStore {
    fn open(&self, id: &SessionId) -> Result<(), SessionStoreError> {
        let mut guard = self.lock()?;
        if guard.contains_key(id) {
            return Err(SessionStoreError::Conflict(id.clone()));
        }
        guard.insert(id.clone(), Vec::new());
        Ok(())
    }

    fn contains(&self, id: &SessionId) -> Result<bool, SessionStoreError> {
        Ok(self.lock()?.contains_key(id))
    }

    fn append(&self, id: &SessionId, entry: HistoryEntry) -> Result<usize, SessionStoreError> {
        let mut guard = self.lock()?;
        let entries = guard
            .get_mut(id)
            .ok_or_else(|| SessionStoreError::NotFound(id.clone()))?;
        entries.push(entry);
        Ok(entries.len())
    }

    fn entries(&self, id: &SessionId) -> Result<Vec<HistoryEntry>, SessionStoreError> {
        let guard = self.lock()?;
        guard
            .get(id)
            .cloned()
            .ok_or_else(|| SessionStoreError::NotFound(id.clone()))
    }
}

pub(crate) fn build_service(config: &AiConfig) -> Result<Arc<ApiService>, AppError> {
    let client = GroqClient::new(config.clone())?;
    let opinions = Arc::new(LlmOpinionSource::new(client));
    let sessions = Arc::new(InMemorySessionStore::default());
    Ok(Arc::new(LoanEvaluationService::new(opinions, sessions)))
}
