use std::fmt;

use serde::{Deserialize, Serialize};

use super::domain::EmploymentStatus;

/// Which side of a bracket bound a value must fall on to earn the bracket's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketRule {
    /// Higher values are better: the first bound with `value >= bound` wins.
    AtLeast,
    /// Lower values are better: the first bound with `value <= bound` wins.
    AtMost,
}

/// Ordered `(bound, score)` pairs walked once, best bracket first.
#[derive(Debug, Clone, Copy)]
pub struct ThresholdTable {
    pub rule: BracketRule,
    pub brackets: &'static [(f64, u8)],
    pub fallback: u8,
}

impl ThresholdTable {
    pub fn score(&self, value: f64) -> u8 {
        self.brackets
            .iter()
            .find(|(bound, _)| match self.rule {
                BracketRule::AtLeast => value >= *bound,
                BracketRule::AtMost => value <= *bound,
            })
            .map(|(_, score)| *score)
            .unwrap_or(self.fallback)
    }
}

pub const CREDIT_SCORE_TABLE: ThresholdTable = ThresholdTable {
    rule: BracketRule::AtLeast,
    brackets: &[
        (800.0, 95),
        (740.0, 85),
        (700.0, 75),
        (650.0, 60),
        (600.0, 45),
        (550.0, 30),
    ],
    fallback: 15,
};

pub const DTI_TABLE: ThresholdTable = ThresholdTable {
    rule: BracketRule::AtMost,
    brackets: &[(20.0, 95), (30.0, 80), (40.0, 60), (50.0, 40), (60.0, 25)],
    fallback: 10,
};

pub const LOAN_TO_INCOME_TABLE: ThresholdTable = ThresholdTable {
    rule: BracketRule::AtMost,
    brackets: &[(0.2, 95), (0.4, 80), (0.6, 60), (0.8, 40)],
    fallback: 15,
};

pub const INCOME_FLOOR_TABLE: ThresholdTable = ThresholdTable {
    rule: BracketRule::AtLeast,
    brackets: &[(80_000.0, 90), (50_000.0, 75), (30_000.0, 60), (20_000.0, 45)],
    fallback: 25,
};

const EMPLOYMENT_TABLE: &[(EmploymentStatus, u8)] = &[
    (EmploymentStatus::Employed, 95),
    (EmploymentStatus::SelfEmployed, 75),
    (EmploymentStatus::Student, 50),
    (EmploymentStatus::Retired, 40),
    (EmploymentStatus::Unemployed, 20),
];
const EMPLOYMENT_FALLBACK: u8 = 30;

pub fn credit_score_component(score: u16) -> u8 {
    CREDIT_SCORE_TABLE.score(f64::from(score))
}

pub fn dti_component(dti_percent: f64) -> u8 {
    DTI_TABLE.score(dti_percent)
}

/// Scores loan size relative to annual income. Zero or negative income floors to 0.
pub fn loan_to_income_component(loan_amount: f64, income: f64) -> u8 {
    if income <= 0.0 {
        return 0;
    }
    LOAN_TO_INCOME_TABLE.score(loan_amount / income)
}

pub fn income_floor_component(income: f64) -> u8 {
    INCOME_FLOOR_TABLE.score(income)
}

pub fn employment_component(status: &EmploymentStatus) -> u8 {
    EMPLOYMENT_TABLE
        .iter()
        .find(|(candidate, _)| candidate == status)
        .map(|(_, score)| *score)
        .unwrap_or(EMPLOYMENT_FALLBACK)
}

/// Rule components in the fixed order used for weighting, display, and tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Component {
    Credit,
    Dti,
    LoanToIncome,
    Income,
    Employment,
}

impl Component {
    pub const ALL: [Component; 5] = [
        Component::Credit,
        Component::Dti,
        Component::LoanToIncome,
        Component::Income,
        Component::Employment,
    ];

    /// Human-facing name used in explanations.
    pub fn label(&self) -> &'static str {
        match self {
            Component::Credit => "Credit score",
            Component::Dti => "DTI",
            Component::LoanToIncome => "Loan-to-Income",
            Component::Income => "Income",
            Component::Employment => "Employment Status",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One sub-score per rule component, each in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentScores {
    pub credit: u8,
    pub dti: u8,
    pub loan_to_income: u8,
    pub income: u8,
    pub employment: u8,
}

impl ComponentScores {
    pub fn get(&self, component: Component) -> u8 {
        match component {
            Component::Credit => self.credit,
            Component::Dti => self.dti,
            Component::LoanToIncome => self.loan_to_income,
            Component::Income => self.income,
            Component::Employment => self.employment,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Component, u8)> + '_ {
        Component::ALL
            .into_iter()
            .map(move |component| (component, self.get(component)))
    }

    /// Lowest sub-score; ties resolve to the earliest component in `Component::ALL`.
    pub fn weakest(&self) -> Component {
        let mut weakest = Component::Credit;
        let mut lowest = self.credit;
        for (component, score) in self.iter().skip(1) {
            if score < lowest {
                weakest = component;
                lowest = score;
            }
        }
        weakest
    }
}
