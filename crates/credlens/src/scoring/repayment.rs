/// Monthly instalment for a fully amortised loan.
///
/// `tenure_years` must be at least one; callers validate this through [`ApplicantProfile::validate`].
/// Month count and discount factor are computed in `f64` and stay finite for any `u32` tenure.
///
/// [`ApplicantProfile::validate`]: super::ApplicantProfile::validate
pub fn monthly_payment(loan_amount: f64, annual_rate_percent: f64, tenure_years: u32) -> f64 {
    let monthly_rate = annual_rate_percent / 100.0 / 12.0;
    let months = f64::from(tenure_years) * 12.0;

    if monthly_rate == 0.0 {
        return loan_amount / months;
    }

    let discount = (1.0 + monthly_rate).powf(-months);
    loan_amount * monthly_rate / (1.0 - discount)
}
