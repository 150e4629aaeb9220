//! Per-session evaluation flow: the service that runs one hybrid evaluation end to end,
//! the append-only history it records into, and the HTTP routes exposing both.

pub mod history;
pub mod router;
pub mod service;

pub use history::{HistoryEntry, SessionId, SessionStore, SessionStoreError};
pub use router::evaluation_router;
pub use service::{
    EvaluationReport, EvaluationRequest, EvaluationServiceError, LoanEvaluationService,
};
