use credlens::scoring::{ApplicantProfile, RulePreview};
use credlens::session::EvaluationReport;
use std::fmt::Write;

pub(crate) fn render_preview(profile: &ApplicantProfile, preview: &RulePreview) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Applicant");
    let _ = writeln!(out, "  Annual income:     {}", format_currency(profile.income));
    let _ = writeln!(out, "  Credit score:      {}", profile.credit_score);
    let _ = writeln!(out, "  Loan amount:       {}", format_currency(profile.loan_amount));
    let _ = writeln!(out, "  DTI:               {:.0}%", profile.debt_to_income_ratio);
    let _ = writeln!(out, "  Tenure:            {} years", profile.tenure_years);
    let _ = writeln!(out, "  Employment status: {}", profile.employment_status);
    let _ = writeln!(out);
    let _ = writeln!(out, "Rule-based assessment");
    let _ = writeln!(
        out,
        "  Rule-based probability: {:.0}%",
        preview.rule.probability
    );
    let _ = writeln!(out, "  Risk tier:              {}", preview.tier);
    match preview.loan_to_income_ratio {
        Some(ratio) => {
            let _ = writeln!(out, "  Loan / income ratio:    {ratio:.2}x");
        }
        None => {
            let _ = writeln!(out, "  Loan / income ratio:    n/a");
        }
    }
    for (component, score) in preview.rule.components.iter() {
        let _ = writeln!(out, "    {:<18} {score:>3}", component.label());
    }
    out
}

pub(crate) fn render_evaluation(report: &EvaluationReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "Final approval result ({})", report.session_id);
    let _ = writeln!(out, "  Decision:          {}", report.hybrid.decision);
    let _ = writeln!(
        out,
        "  Final probability: {:.0}%",
        report.hybrid.combined_probability
    );
    let _ = writeln!(out, "  Risk tier:         {}", report.hybrid.tier);
    let _ = writeln!(out, "  Reason:            {}", report.hybrid.explanation);
    let _ = writeln!(out, "  AI probability:    {}%", report.opinion.probability);

    let _ = writeln!(out);
    let _ = writeln!(out, "AI key factors");
    if report.opinion.key_factors.is_empty() {
        let _ = writeln!(out, "  (none reported)");
    }
    for factor in &report.opinion.key_factors {
        let _ = writeln!(out, "  - {factor}");
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Estimated monthly payment: {}",
        format_currency(report.monthly_payment)
    );
    out
}

/// Formats an amount as `RM 1,234.56`.
pub(crate) fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, digit) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("RM {sign}{grouped}.{:02}", cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use credlens::opinion::AiOpinion;
    use credlens::scoring::{
        decide, preview, rule_probability, ApplicantProfile, EmploymentStatus,
    };
    use credlens::session::SessionId;

    fn profile() -> ApplicantProfile {
        ApplicantProfile {
            income: 80_000.0,
            credit_score: 680,
            loan_amount: 25_000.0,
            debt_to_income_ratio: 42.0,
            tenure_years: 5,
            employment_status: EmploymentStatus::Employed,
            application_reason: "Medical bills".to_string(),
        }
    }

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(483.3196), "RM 483.32");
        assert_eq!(format_currency(1_234.5), "RM 1,234.50");
        assert_eq!(format_currency(200_000.0), "RM 200,000.00");
        assert_eq!(format_currency(0.0), "RM 0.00");
    }

    #[test]
    fn preview_lists_components_and_ratio() {
        let profile = profile();
        let text = render_preview(&profile, &preview(&profile));

        assert!(text.contains("Rule-based probability: 67%"));
        assert!(text.contains("Risk tier:              Medium"));
        assert!(text.contains("Loan / income ratio:    0.31x"));
        assert!(text.contains("Loan-to-Income"));
    }

    #[test]
    fn evaluation_shows_fallback_without_factors() {
        let rule = rule_probability(&profile());
        let opinion = AiOpinion::fallback();
        let report = EvaluationReport {
            session_id: SessionId("session-000001".to_string()),
            hybrid: decide(&rule, &opinion),
            rule,
            opinion,
            monthly_payment: 483.32,
            history_len: 1,
        };

        let text = render_evaluation(&report);

        assert!(text.contains("Decision:          Approved"));
        assert!(text.contains("AI parsing failed"));
        assert!(text.contains("(none reported)"));
        assert!(text.contains("RM 483.32"));
    }
}
