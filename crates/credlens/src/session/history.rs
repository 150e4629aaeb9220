use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scoring::{ApplicantProfile, Decision, LoanTerms};

/// Identifier for one interactive session's history.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Snapshot of one completed hybrid evaluation. Never mutated once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub profile: ApplicantProfile,
    pub terms: LoanTerms,
    pub rule_probability: f64,
    pub ai_probability: u8,
    pub combined_probability: f64,
    pub decision: Decision,
    pub recorded_at: DateTime<Utc>,
}

/// Caller-owned, append-only history keyed by session.
pub trait SessionStore: Send + Sync {
    fn open(&self, id: &SessionId) -> Result<(), SessionStoreError>;
    /// Whether the session exists, without reading its entries.
    fn contains(&self, id: &SessionId) -> Result<bool, SessionStoreError>;
    fn append(&self, id: &SessionId, entry: HistoryEntry) -> Result<usize, SessionStoreError>;
    fn entries(&self, id: &SessionId) -> Result<Vec<HistoryEntry>, SessionStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("session {0} not found")]
    NotFound(SessionId),
    #[error("session {0} already exists")]
    Conflict(SessionId),
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}
