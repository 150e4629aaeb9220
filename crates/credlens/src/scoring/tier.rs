use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordinal risk classification; declared from least to most risky.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl RiskTier {
    pub fn from_probability(probability: f64) -> Self {
        if probability >= 80.0 {
            RiskTier::Low
        } else if probability >= 60.0 {
            RiskTier::Medium
        } else if probability >= 40.0 {
            RiskTier::High
        } else {
            RiskTier::VeryHigh
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
            RiskTier::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn risk_tier(probability: f64) -> RiskTier {
    RiskTier::from_probability(probability)
}
