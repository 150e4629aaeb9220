use crate::report::{render_evaluation, render_preview};
use crate::server;
use clap::{Args, Parser, Subcommand};
use credlens::config::AppConfig;
use credlens::error::AppError;
use credlens::scoring::{ApplicantProfile, EmploymentStatus, LoanTerms};
use credlens::session::EvaluationRequest;
use credlens::telemetry;

const EMPLOYMENT_CHOICES: [&str; 5] = [
    "Employed",
    "Self-Employed",
    "Unemployed",
    "Student",
    "Retired",
];

#[derive(Parser, Debug)]
#[command(
    name = "CredLens",
    about = "Hybrid AI + rule loan approval from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Show the rule-based probability, risk tier, and loan/income ratio without calling the AI
    Preview(ApplicantArgs),
    /// Run the hybrid AI + rule approval and print the decision with a repayment estimate
    Evaluate(EvaluateArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(Args, Debug, Clone)]
pub(crate) struct ApplicantArgs {
    /// Annual income (RM)
    #[arg(long, default_value_t = 80_000, value_parser = clap::value_parser!(u32).range(20_000..=500_000))]
    pub(crate) income: u32,
    /// Credit score
    #[arg(long, default_value_t = 680, value_parser = clap::value_parser!(u16).range(300..=850))]
    pub(crate) credit_score: u16,
    /// Loan amount (RM)
    #[arg(long, default_value_t = 25_000, value_parser = clap::value_parser!(u32).range(1_000..=200_000))]
    pub(crate) loan_amount: u32,
    /// Debt-to-income ratio (%)
    #[arg(long, default_value_t = 42, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub(crate) dti: u8,
    /// Tenure (years)
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..=30))]
    pub(crate) tenure: u32,
    /// Employment status
    #[arg(long, default_value = "Employed", value_parser = EMPLOYMENT_CHOICES)]
    pub(crate) employment: String,
    /// Application reason passed to the AI reviewer
    #[arg(
        long,
        default_value = "I need money urgently for hospital bills, my daughter is very sick"
    )]
    pub(crate) reason: String,
}

impl ApplicantArgs {
    pub(crate) fn into_profile(self) -> ApplicantProfile {
        let employment_status = self
            .employment
            .parse::<EmploymentStatus>()
            .unwrap_or(EmploymentStatus::Other);

        ApplicantProfile {
            income: f64::from(self.income),
            credit_score: self.credit_score,
            loan_amount: f64::from(self.loan_amount),
            debt_to_income_ratio: f64::from(self.dti),
            tenure_years: self.tenure,
            employment_status,
            application_reason: self.reason,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    #[command(flatten)]
    pub(crate) applicant: ApplicantArgs,
    /// Annual interest rate (%) for the repayment estimate
    #[arg(long, default_value_t = 6.0, value_parser = parse_rate)]
    pub(crate) rate: f64,
    /// Print the full report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn parse_rate(raw: &str) -> Result<f64, String> {
    let rate: f64 = raw
        .trim()
        .parse()
        .map_err(|err| format!("failed to parse '{raw}' as a percentage ({err})"))?;
    if !(0.1..=20.0).contains(&rate) {
        return Err(format!("interest rate {rate} must be between 0.1 and 20.0"));
    }
    Ok(rate)
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Preview(args) => run_preview(args),
        Command::Evaluate(args) => run_evaluate(args).await,
    }
}

fn run_preview(args: ApplicantArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let service = crate::infra::build_service(&config.ai)?;
    let profile = args.into_profile();
    let preview = service
        .preview(&profile)
        .map_err(|err| AppError::Evaluation(err.into()))?;

    print!("{}", render_preview(&profile, &preview));
    Ok(())
}

async fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let service = crate::infra::build_service(&config.ai)?;
    let session = service.start_session()?;
    let request = EvaluationRequest {
        profile: args.applicant.into_profile(),
        terms: LoanTerms {
            annual_rate_percent: args.rate,
        },
    };

    let preview = service
        .preview(&request.profile)
        .map_err(|err| AppError::Evaluation(err.into()))?;
    let report = service.evaluate(&session, request.clone()).await?;

    if args.json {
        let body = serde_json::to_string_pretty(&report)
            .map_err(|err| AppError::Io(std::io::Error::other(err)))?;
        println!("{body}");
    } else {
        print!("{}", render_preview(&request.profile, &preview));
        print!("{}", render_evaluation(&report));
    }

    Ok(())
}
