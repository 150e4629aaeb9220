use std::fmt;

use serde::{Deserialize, Serialize};

use super::components::Component;
use super::rules::RuleResult;
use super::tier::RiskTier;
use crate::opinion::AiOpinion;

pub const RULE_WEIGHT: f64 = 0.6;
pub const AI_WEIGHT: f64 = 0.4;
/// Shares the Medium tier boundary.
pub const APPROVAL_THRESHOLD: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    Approved,
    Declined,
}

impl Decision {
    pub fn from_probability(combined_probability: f64) -> Self {
        if combined_probability >= APPROVAL_THRESHOLD {
            Decision::Approved
        } else {
            Decision::Declined
        }
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, Decision::Approved)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Approved => f.write_str("Approved"),
            Decision::Declined => f.write_str("Declined"),
        }
    }
}

/// Final outcome after blending the rule score with the AI opinion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HybridResult {
    pub combined_probability: f64,
    pub tier: RiskTier,
    pub decision: Decision,
    pub explanation: String,
    pub weakest_component: Component,
}

pub fn blend(rule_probability: f64, ai_probability: u8) -> f64 {
    (RULE_WEIGHT * rule_probability + AI_WEIGHT * f64::from(ai_probability)).clamp(0.0, 100.0)
}

pub fn decide(rule: &RuleResult, opinion: &AiOpinion) -> HybridResult {
    let combined_probability = blend(rule.probability, opinion.probability);
    let decision = Decision::from_probability(combined_probability);
    let weakest_component = rule.components.weakest();

    HybridResult {
        combined_probability,
        tier: RiskTier::from_probability(combined_probability),
        decision,
        explanation: explain(decision, weakest_component, &opinion.reason),
        weakest_component,
    }
}

fn explain(decision: Decision, weakest: Component, ai_reason: &str) -> String {
    match decision {
        Decision::Declined => format!(
            "Declined due to weak {}, AI noted: {ai_reason}",
            weakest.label().to_lowercase()
        ),
        Decision::Approved => {
            format!("Approved — strong enough rule score and AI agrees: {ai_reason}")
        }
    }
}
