use crate::scoring::ApplicantProfile;

/// Renders the credit-officer prompt, ending with the strict JSON reply schema.
pub fn build_prompt(profile: &ApplicantProfile) -> String {
    format!(
        "You are a Malaysian bank credit officer.\n\
         Annual income: RM{income}\n\
         Credit score: {credit}\n\
         Loan amount: RM{loan}\n\
         DTI: {dti}%\n\
         Tenure: {tenure} years\n\
         Employment Status: {employment}\n\
         Applicant reason: \"{reason}\"\n\
         Return JSON only in English:\n\
         {{\n    \
         \"ai_probability\": integer 0-100,\n    \
         \"ai_reason\": \"one short sentence\",\n    \
         \"ai_key_factors\": [\"factor1\", \"factor2\"]\n\
         }}\n",
        income = profile.income,
        credit = profile.credit_score,
        loan = profile.loan_amount,
        dti = profile.debt_to_income_ratio,
        tenure = profile.tenure_years,
        employment = profile.employment_status,
        reason = profile.application_reason.trim(),
    )
}
