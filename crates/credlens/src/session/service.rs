use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::history::{HistoryEntry, SessionId, SessionStore, SessionStoreError};
use crate::opinion::{AiOpinion, OpinionSource};
use crate::scoring::{
    self, decide, monthly_payment, rule_probability, ApplicantProfile, HybridResult,
    InvalidInputError, LoanTerms, RulePreview, RuleResult,
};

/// Service composing the rule engine, the AI opinion, and the session history.
pub struct LoanEvaluationService<O, S> {
    opinions: Arc<O>,
    sessions: Arc<S>,
}

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_session_id() -> SessionId {
    let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SessionId(format!("session-{id:06}"))
}

/// Inputs for one hybrid evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    pub profile: ApplicantProfile,
    #[serde(default)]
    pub terms: LoanTerms,
}

/// Everything the front end displays after a hybrid evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub session_id: SessionId,
    pub rule: RuleResult,
    pub opinion: AiOpinion,
    pub hybrid: HybridResult,
    pub monthly_payment: f64,
    pub history_len: usize,
}

impl<O, S> LoanEvaluationService<O, S>
where
    O: OpinionSource + 'static,
    S: SessionStore + 'static,
{
    pub fn new(opinions: Arc<O>, sessions: Arc<S>) -> Self {
        Self { opinions, sessions }
    }

    /// Open an empty history for a new interactive session.
    pub fn start_session(&self) -> Result<SessionId, EvaluationServiceError> {
        let id = next_session_id();
        self.sessions.open(&id)?;
        info!(session = %id, "session started");
        Ok(id)
    }

    /// Rule-only scoring; never contacts the AI service.
    pub fn preview(&self, profile: &ApplicantProfile) -> Result<RulePreview, InvalidInputError> {
        profile.validate()?;
        Ok(scoring::preview(profile))
    }

    /// Run the full hybrid evaluation and record it in the session history.
    ///
    /// History is appended only once the hybrid result and repayment estimate exist, so a
    /// rejected request leaves the session untouched.
    pub async fn evaluate(
        &self,
        session_id: &SessionId,
        request: EvaluationRequest,
    ) -> Result<EvaluationReport, EvaluationServiceError> {
        let EvaluationRequest { profile, terms } = request;
        profile.validate()?;
        terms.validate()?;
        // Fail on an unknown session before paying for the AI call.
        if !self.sessions.contains(session_id)? {
            return Err(SessionStoreError::NotFound(session_id.clone()).into());
        }

        let rule = rule_probability(&profile);
        let opinion = self.opinions.opinion(&profile).await;
        let hybrid = decide(&rule, &opinion);
        let monthly_payment = monthly_payment(
            profile.loan_amount,
            terms.annual_rate_percent,
            profile.tenure_years,
        );

        let entry = HistoryEntry {
            profile,
            terms,
            rule_probability: rule.probability,
            ai_probability: opinion.probability,
            combined_probability: hybrid.combined_probability,
            decision: hybrid.decision,
            recorded_at: Utc::now(),
        };
        let history_len = self.sessions.append(session_id, entry)?;

        info!(
            session = %session_id,
            rule_probability = rule.probability,
            ai_probability = opinion.probability,
            combined_probability = hybrid.combined_probability,
            decision = %hybrid.decision,
            ai_fallback = opinion.is_fallback(),
            "hybrid evaluation recorded"
        );

        Ok(EvaluationReport {
            session_id: session_id.clone(),
            rule,
            opinion,
            hybrid,
            monthly_payment,
            history_len,
        })
    }

    /// Completed evaluations for a session, oldest first.
    pub fn history(
        &self,
        session_id: &SessionId,
    ) -> Result<Vec<HistoryEntry>, EvaluationServiceError> {
        Ok(self.sessions.entries(session_id)?)
    }
}

/// Error raised by the evaluation service.
#[derive(Debug, thiserror::Error)]
pub enum EvaluationServiceError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
    #[error(transparent)]
    Session(#[from] SessionStoreError),
}
