//! Boundary to the language-model opinion that the hybrid decision blends in.
//!
//! [`OpinionSource`] is infallible by contract: every failure collapses into
//! [`AiOpinion::fallback`], so an evaluation never aborts because the model is slow,
//! unreachable, or chatty.

mod groq;
mod parser;
mod prompt;

pub use groq::GroqClient;
pub use parser::{parse_opinion, OpinionParseError, NEUTRAL_PROBABILITY};
pub use prompt::build_prompt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::scoring::ApplicantProfile;

pub const FALLBACK_REASON: &str = "AI parsing failed";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiOpinion {
    pub probability: u8,
    pub reason: String,
    pub key_factors: Vec<String>,
}

impl AiOpinion {
    pub fn fallback() -> Self {
        Self {
            probability: NEUTRAL_PROBABILITY,
            reason: FALLBACK_REASON.to_string(),
            key_factors: Vec::new(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        *self == Self::fallback()
    }
}

/// Produces one opinion per evaluation request.
#[async_trait]
pub trait OpinionSource: Send + Sync {
    async fn opinion(&self, profile: &ApplicantProfile) -> AiOpinion;
}

/// Single-shot text generation against an external model.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("no API key configured for the completion service")]
    NotConfigured,
    #[error("completion request timed out")]
    Timeout,
    #[error("completion service returned HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("completion request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("completion response contained no message content")]
    EmptyResponse,
}

/// Prompts a [`CompletionClient`] once and applies the fallback on any failure.
pub struct LlmOpinionSource<C> {
    client: C,
}

impl<C> LlmOpinionSource<C>
where
    C: CompletionClient,
{
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }
}

#[async_trait]
impl<C> OpinionSource for LlmOpinionSource<C>
where
    C: CompletionClient,
{
    async fn opinion(&self, profile: &ApplicantProfile) -> AiOpinion {
        let prompt = build_prompt(profile);

        let raw = match self.client.complete(&prompt).await {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(error = %err, "AI opinion unavailable, using neutral fallback");
                return AiOpinion::fallback();
            }
        };

        match parse_opinion(&raw) {
            Ok(opinion) => {
                tracing::debug!(probability = opinion.probability, "AI opinion parsed");
                opinion
            }
            Err(err) => {
                tracing::warn!(error = %err, "AI reply unusable, using neutral fallback");
                AiOpinion::fallback()
            }
        }
    }
}
