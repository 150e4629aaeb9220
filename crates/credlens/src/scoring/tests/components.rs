use crate::scoring::{
    credit_score_component, dti_component, employment_component, income_floor_component,
    loan_to_income_component, Component, ComponentScores, EmploymentStatus,
};

#[test]
fn credit_score_brackets_route_edges_upward() {
    assert_eq!(credit_score_component(850), 95);
    assert_eq!(credit_score_component(800), 95);
    assert_eq!(credit_score_component(799), 85);
    assert_eq!(credit_score_component(740), 85);
    assert_eq!(credit_score_component(739), 75);
    assert_eq!(credit_score_component(700), 75);
    assert_eq!(credit_score_component(650), 60);
    assert_eq!(credit_score_component(600), 45);
    assert_eq!(credit_score_component(550), 30);
    assert_eq!(credit_score_component(549), 15);
    assert_eq!(credit_score_component(300), 15);
}

#[test]
fn credit_score_component_is_monotonic_over_domain() {
    let mut previous = credit_score_component(300);
    for score in 301..=850 {
        let current = credit_score_component(score);
        assert!(
            current >= previous,
            "score {score} dropped from {previous} to {current}"
        );
        previous = current;
    }
}

#[test]
fn dti_rewards_lower_ratios() {
    assert_eq!(dti_component(0.0), 95);
    assert_eq!(dti_component(20.0), 95);
    assert_eq!(dti_component(20.5), 80);
    assert_eq!(dti_component(30.0), 80);
    assert_eq!(dti_component(40.0), 60);
    assert_eq!(dti_component(42.0), 40);
    assert_eq!(dti_component(60.0), 25);
    assert_eq!(dti_component(60.1), 10);
    assert_eq!(dti_component(140.0), 10);
}

#[test]
fn loan_to_income_floors_non_positive_income() {
    assert_eq!(loan_to_income_component(25_000.0, 0.0), 0);
    assert_eq!(loan_to_income_component(0.0, 0.0), 0);
    assert_eq!(loan_to_income_component(1_000_000.0, -5.0), 0);
}

#[test]
fn loan_to_income_brackets() {
    assert_eq!(loan_to_income_component(10_000.0, 50_000.0), 95);
    assert_eq!(loan_to_income_component(25_000.0, 80_000.0), 80);
    assert_eq!(loan_to_income_component(30_000.0, 50_000.0), 60);
    assert_eq!(loan_to_income_component(40_000.0, 50_000.0), 40);
    assert_eq!(loan_to_income_component(45_000.0, 50_000.0), 15);
}

#[test]
fn income_floor_brackets() {
    assert_eq!(income_floor_component(500_000.0), 90);
    assert_eq!(income_floor_component(80_000.0), 90);
    assert_eq!(income_floor_component(79_999.0), 75);
    assert_eq!(income_floor_component(50_000.0), 75);
    assert_eq!(income_floor_component(30_000.0), 60);
    assert_eq!(income_floor_component(20_000.0), 45);
    assert_eq!(income_floor_component(19_999.0), 25);
}

#[test]
fn employment_table_falls_back_for_unlisted_status() {
    assert_eq!(employment_component(&EmploymentStatus::Employed), 95);
    assert_eq!(employment_component(&EmploymentStatus::SelfEmployed), 75);
    assert_eq!(employment_component(&EmploymentStatus::Student), 50);
    assert_eq!(employment_component(&EmploymentStatus::Retired), 40);
    assert_eq!(employment_component(&EmploymentStatus::Unemployed), 20);
    assert_eq!(employment_component(&EmploymentStatus::Other), 30);
    assert_eq!(
        employment_component(&"Contractor".parse().expect("infallible")),
        30
    );
}

#[test]
fn employment_status_deserializes_unknown_labels_as_other() {
    let parsed: EmploymentStatus =
        serde_json::from_str("\"Self-Employed\"").expect("known label");
    assert_eq!(parsed, EmploymentStatus::SelfEmployed);

    let parsed: EmploymentStatus = serde_json::from_str("\"Freelancer\"").expect("unknown label");
    assert_eq!(parsed, EmploymentStatus::Other);
}

#[test]
fn weakest_prefers_earliest_component_on_ties() {
    let scores = ComponentScores {
        credit: 60,
        dti: 40,
        loan_to_income: 80,
        income: 40,
        employment: 95,
    };
    assert_eq!(scores.weakest(), Component::Dti);

    let scores = ComponentScores {
        credit: 30,
        dti: 40,
        loan_to_income: 30,
        income: 90,
        employment: 30,
    };
    assert_eq!(scores.weakest(), Component::Credit);

    let scores = ComponentScores {
        credit: 95,
        dti: 95,
        loan_to_income: 95,
        income: 90,
        employment: 20,
    };
    assert_eq!(scores.weakest(), Component::Employment);
}

#[test]
fn component_scores_iterate_in_fixed_order() {
    let scores = ComponentScores {
        credit: 1,
        dti: 2,
        loan_to_income: 3,
        income: 4,
        employment: 5,
    };
    let labels: Vec<_> = scores.iter().map(|(component, _)| component.label()).collect();
    assert_eq!(
        labels,
        vec!["Credit score", "DTI", "Loan-to-Income", "Income", "Employment Status"]
    );
    let values: Vec<_> = scores.iter().map(|(_, score)| score).collect();
    assert_eq!(values, vec![1, 2, 3, 4, 5]);
}
