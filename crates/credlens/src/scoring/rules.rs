use serde::{Deserialize, Serialize};

use super::components::{
    credit_score_component, dti_component, employment_component, income_floor_component,
    loan_to_income_component, Component, ComponentScores,
};
use super::domain::ApplicantProfile;

pub const CREDIT_WEIGHT: f64 = 0.30;
pub const DTI_WEIGHT: f64 = 0.25;
pub const LOAN_TO_INCOME_WEIGHT: f64 = 0.20;
pub const INCOME_WEIGHT: f64 = 0.15;
pub const EMPLOYMENT_WEIGHT: f64 = 0.10;

/// Deterministic probability derived from applicant attributes alone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RuleResult {
    pub probability: f64,
    pub components: ComponentScores,
}

pub fn weight(component: Component) -> f64 {
    match component {
        Component::Credit => CREDIT_WEIGHT,
        Component::Dti => DTI_WEIGHT,
        Component::LoanToIncome => LOAN_TO_INCOME_WEIGHT,
        Component::Income => INCOME_WEIGHT,
        Component::Employment => EMPLOYMENT_WEIGHT,
    }
}

pub fn score_components(profile: &ApplicantProfile) -> ComponentScores {
    ComponentScores {
        credit: credit_score_component(profile.credit_score),
        dti: dti_component(profile.debt_to_income_ratio),
        loan_to_income: loan_to_income_component(profile.loan_amount, profile.income),
        income: income_floor_component(profile.income),
        employment: employment_component(&profile.employment_status),
    }
}

pub fn combine(components: ComponentScores) -> RuleResult {
    let weighted: f64 = components
        .iter()
        .map(|(component, score)| weight(component) * f64::from(score))
        .sum();

    RuleResult {
        probability: weighted.clamp(0.0, 100.0),
        components,
    }
}

pub fn rule_probability(profile: &ApplicantProfile) -> RuleResult {
    combine(score_components(profile))
}
