//! Deterministic half of the hybrid engine: component scorers, weighted rule probability,
//! risk tiers, the rule/AI blend, and the repayment estimate.

mod components;
mod domain;
mod hybrid;
mod repayment;
mod rules;
mod tier;

#[cfg(test)]
mod tests;

pub use components::{
    credit_score_component, dti_component, employment_component, income_floor_component,
    loan_to_income_component, BracketRule, Component, ComponentScores, ThresholdTable,
    CREDIT_SCORE_TABLE, DTI_TABLE, INCOME_FLOOR_TABLE, LOAN_TO_INCOME_TABLE,
};
pub use domain::{
    ApplicantProfile, EmploymentStatus, InvalidInputError, LoanTerms, DEFAULT_ANNUAL_RATE_PERCENT,
    MAX_CREDIT_SCORE, MAX_TENURE_YEARS, MIN_CREDIT_SCORE, MIN_TENURE_YEARS,
};
pub use hybrid::{blend, decide, Decision, HybridResult, AI_WEIGHT, APPROVAL_THRESHOLD, RULE_WEIGHT};
pub use repayment::monthly_payment;
pub use rules::{combine, rule_probability, score_components, weight, RuleResult};
pub use tier::{risk_tier, RiskTier};

use serde::{Deserialize, Serialize};

/// Rule-only view shown before the AI opinion is requested.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RulePreview {
    pub rule: RuleResult,
    pub tier: RiskTier,
    pub loan_to_income_ratio: Option<f64>,
}

pub fn preview(profile: &ApplicantProfile) -> RulePreview {
    let rule = rule_probability(profile);
    RulePreview {
        tier: risk_tier(rule.probability),
        loan_to_income_ratio: profile.loan_to_income_ratio(),
        rule,
    }
}
