use crate::infra::{load_application, parse_ruleset};
use clap::Args;
use lendscore::config::AppConfig;
use lendscore::error::AppError;
use lendscore::scoring::{
    ApplicationInput, BorrowerProfile, DecisionRecord, RuleSet, ScoringEngine, PROTOTYPE_WARNING,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON file containing the application payload
    #[arg(long, conflicts_with = "amount")]
    pub(crate) file: Option<PathBuf>,
    /// Loan identifier used for logging only
    #[arg(long, default_value = "cli-loan")]
    pub(crate) loan_id: String,
    /// User identifier used for logging only
    #[arg(long, default_value = "cli-user")]
    pub(crate) user_id: String,
    /// Requested loan amount (required unless --file is given)
    #[arg(long, required_unless_present = "file")]
    pub(crate) amount: Option<f64>,
    /// Requested term in weeks
    #[arg(long, default_value_t = 4)]
    pub(crate) term_weeks: u32,
    /// Borrower level
    #[arg(long, default_value_t = 0)]
    pub(crate) level: u32,
    /// Consecutive on-time payments
    #[arg(long, default_value_t = 0)]
    pub(crate) streak: u32,
    /// Lifetime loan count
    #[arg(long, default_value_t = 0)]
    pub(crate) total_loans: u32,
    /// Count of on-time repayments
    #[arg(long, default_value_t = 0)]
    pub(crate) on_time_paid: u32,
    /// Count of late repayments
    #[arg(long, default_value_t = 0)]
    pub(crate) late_paid: u32,
    /// Treat the borrower profile as KYC-verified
    #[arg(long)]
    pub(crate) kyc_verified: bool,
    /// Rule set to score with (defaults to the configured one)
    #[arg(long, value_parser = parse_ruleset)]
    pub(crate) ruleset: Option<RuleSet>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Rule set to run the walkthrough with (defaults to the configured one)
    #[arg(long, value_parser = parse_ruleset)]
    pub(crate) ruleset: Option<RuleSet>,
}

fn resolve_ruleset(override_value: Option<RuleSet>) -> Result<RuleSet, AppError> {
    match override_value {
        Some(rule_set) => Ok(rule_set),
        None => Ok(AppConfig::load()?.model.rule_set),
    }
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let rule_set = resolve_ruleset(args.ruleset)?;
    let engine = ScoringEngine::new(rule_set);

    let input = match &args.file {
        Some(path) => load_application(path)?,
        None => ApplicationInput {
            loan_id: args.loan_id,
            user_id: args.user_id,
            level: args.level,
            streak: args.streak,
            total_loans: args.total_loans,
            on_time_paid: args.on_time_paid,
            late_paid: args.late_paid,
            amount: args.amount.unwrap_or_default(),
            term_weeks: args.term_weeks,
            profile: BorrowerProfile {
                kyc_level: args.kyc_verified.then(|| "verified".to_string()),
            },
        },
    };

    let record = engine.score(&input)?;
    println!(
        "{}",
        serde_json::to_string_pretty(&record).expect("record serializes")
    );
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let rule_set = resolve_ruleset(args.ruleset)?;
    let engine = ScoringEngine::new(rule_set);

    println!("LendScore decision walkthrough");
    println!("Model version: {}", engine.model_version());
    println!("{PROTOTYPE_WARNING}");

    for (title, input) in demo_applications() {
        let record = engine.score(&input)?;
        render_record(title, &input, &record);
    }

    Ok(())
}

fn render_record(title: &str, input: &ApplicationInput, record: &DecisionRecord) {
    println!("\n== {title}");
    println!(
        "   requested ₱{} over {} weeks (level {})",
        input.amount, input.term_weeks, input.level
    );
    println!(
        "   decision: {} (PD {:.4}, {} risk)",
        record.decision.label(),
        record.pd,
        record.pd_band.label()
    );
    for reason in &record.reasons {
        println!("   - {reason}");
    }
    if let Some(offer) = &record.counter_offer {
        println!(
            "   counter-offer: ₱{} over {} weeks ({})",
            offer.amount, offer.term_weeks, offer.reason
        );
    }
    if let Some(hint) = &record.counterfactual_hint {
        println!("   hint: {hint}");
    }
}

fn demo_applications() -> Vec<(&'static str, ApplicationInput)> {
    vec![
        (
            "First-time borrower, modest ask",
            ApplicationInput {
                loan_id: "DEMO-001".to_string(),
                user_id: "demo-new".to_string(),
                level: 0,
                streak: 0,
                total_loans: 0,
                on_time_paid: 0,
                late_paid: 0,
                amount: 300.0,
                term_weeks: 4,
                profile: BorrowerProfile::default(),
            },
        ),
        (
            "First-time borrower, stretching toward the cap",
            ApplicationInput {
                loan_id: "DEMO-002".to_string(),
                user_id: "demo-new".to_string(),
                level: 0,
                streak: 0,
                total_loans: 0,
                on_time_paid: 0,
                late_paid: 0,
                amount: 480.0,
                term_weeks: 4,
                profile: BorrowerProfile::default(),
            },
        ),
        (
            "Seasoned level-5 borrower with a clean history",
            ApplicationInput {
                loan_id: "DEMO-003".to_string(),
                user_id: "demo-seasoned".to_string(),
                level: 5,
                streak: 6,
                total_loans: 20,
                on_time_paid: 19,
                late_paid: 1,
                amount: 1400.0,
                term_weeks: 4,
                profile: BorrowerProfile {
                    kyc_level: Some("verified".to_string()),
                },
            },
        ),
        (
            "Level-1 borrower asking above the unlocked cap",
            ApplicationInput {
                loan_id: "DEMO-004".to_string(),
                user_id: "demo-overcap".to_string(),
                level: 1,
                streak: 0,
                total_loans: 5,
                on_time_paid: 3,
                late_paid: 2,
                amount: 900.0,
                term_weeks: 4,
                profile: BorrowerProfile::default(),
            },
        ),
        (
            "Struggling borrower on a long term",
            ApplicationInput {
                loan_id: "DEMO-005".to_string(),
                user_id: "demo-risky".to_string(),
                level: 2,
                streak: 0,
                total_loans: 8,
                on_time_paid: 4,
                late_paid: 4,
                amount: 950.0,
                term_weeks: 12,
                profile: BorrowerProfile::default(),
            },
        ),
    ]
}
