use crate::opinion::AiOpinion;
use crate::scoring::{ApplicantProfile, ComponentScores, EmploymentStatus, RuleResult};

pub(super) const EPSILON: f64 = 1e-9;

pub(super) fn baseline_profile() -> ApplicantProfile {
    ApplicantProfile {
        income: 80_000.0,
        credit_score: 680,
        loan_amount: 25_000.0,
        debt_to_income_ratio: 42.0,
        tenure_years: 5,
        employment_status: EmploymentStatus::Employed,
        application_reason: "Consolidating two credit card balances".to_string(),
    }
}

pub(super) fn uniform_scores(score: u8) -> ComponentScores {
    ComponentScores {
        credit: score,
        dti: score,
        loan_to_income: score,
        income: score,
        employment: score,
    }
}

pub(super) fn rule_result(probability: f64, components: ComponentScores) -> RuleResult {
    RuleResult {
        probability,
        components,
    }
}

pub(super) fn opinion(probability: u8, reason: &str) -> AiOpinion {
    AiOpinion {
        probability,
        reason: reason.to_string(),
        key_factors: vec!["stable employment".to_string()],
    }
}
