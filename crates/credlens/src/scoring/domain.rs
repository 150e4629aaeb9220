use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const MIN_CREDIT_SCORE: u16 = 300;
pub const MAX_CREDIT_SCORE: u16 = 850;
pub const MIN_TENURE_YEARS: u32 = 1;
pub const MAX_TENURE_YEARS: u32 = 30;
pub const DEFAULT_ANNUAL_RATE_PERCENT: f64 = 6.0;

/// Applicant attributes supplied by the front end for a single evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub income: f64,
    pub credit_score: u16,
    pub loan_amount: f64,
    pub debt_to_income_ratio: f64,
    pub tenure_years: u32,
    pub employment_status: EmploymentStatus,
    #[serde(default)]
    pub application_reason: String,
}

impl ApplicantProfile {
    /// Rejects values outside the domain the scoring tables are defined over.
    ///
    /// Non-positive income is deliberately accepted: the loan-to-income scorer floors it to zero.
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        if !self.income.is_finite() {
            return Err(InvalidInputError::Income(self.income));
        }
        if !(MIN_CREDIT_SCORE..=MAX_CREDIT_SCORE).contains(&self.credit_score) {
            return Err(InvalidInputError::CreditScore(self.credit_score));
        }
        if !self.loan_amount.is_finite() || self.loan_amount <= 0.0 {
            return Err(InvalidInputError::LoanAmount(self.loan_amount));
        }
        if !self.debt_to_income_ratio.is_finite() || self.debt_to_income_ratio < 0.0 {
            return Err(InvalidInputError::DebtToIncome(self.debt_to_income_ratio));
        }
        if !(MIN_TENURE_YEARS..=MAX_TENURE_YEARS).contains(&self.tenure_years) {
            return Err(InvalidInputError::Tenure(self.tenure_years));
        }
        Ok(())
    }

    /// Loan amount divided by annual income, absent when income cannot carry a ratio.
    pub fn loan_to_income_ratio(&self) -> Option<f64> {
        (self.income > 0.0).then(|| self.loan_amount / self.income)
    }
}

/// Borrowing terms that only feed the repayment estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    #[serde(default = "default_rate")]
    pub annual_rate_percent: f64,
}

fn default_rate() -> f64 {
    DEFAULT_ANNUAL_RATE_PERCENT
}

impl Default for LoanTerms {
    fn default() -> Self {
        Self {
            annual_rate_percent: DEFAULT_ANNUAL_RATE_PERCENT,
        }
    }
}

impl LoanTerms {
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        if !self.annual_rate_percent.is_finite() || self.annual_rate_percent < 0.0 {
            return Err(InvalidInputError::InterestRate(self.annual_rate_percent));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmploymentStatus {
    Employed,
    #[serde(rename = "Self-Employed")]
    SelfEmployed,
    Unemployed,
    Student,
    Retired,
    #[serde(other)]
    Other,
}

impl EmploymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            EmploymentStatus::Employed => "Employed",
            EmploymentStatus::SelfEmployed => "Self-Employed",
            EmploymentStatus::Unemployed => "Unemployed",
            EmploymentStatus::Student => "Student",
            EmploymentStatus::Retired => "Retired",
            EmploymentStatus::Other => "Other",
        }
    }
}

impl fmt::Display for EmploymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EmploymentStatus {
    type Err = std::convert::Infallible;

    /// Exact match on the display label; anything else becomes `Other`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Ok(match raw {
            "Employed" => EmploymentStatus::Employed,
            "Self-Employed" => EmploymentStatus::SelfEmployed,
            "Unemployed" => EmploymentStatus::Unemployed,
            "Student" => EmploymentStatus::Student,
            "Retired" => EmploymentStatus::Retired,
            _ => EmploymentStatus::Other,
        })
    }
}

/// Caller contract violation detected before any scoring takes place.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidInputError {
    #[error("income must be a finite amount, got {0}")]
    Income(f64),
    #[error("credit score {0} is outside 300-850")]
    CreditScore(u16),
    #[error("loan amount must be positive, got {0}")]
    LoanAmount(f64),
    #[error("debt-to-income ratio must be a non-negative percentage, got {0}")]
    DebtToIncome(f64),
    #[error("tenure {0} is outside 1-30 years")]
    Tenure(u32),
    #[error("interest rate must be a non-negative percentage, got {0}")]
    InterestRate(f64),
}
