use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Loan application payload as submitted by the lending platform.
///
/// Only `loanId`, `userId`, `amount`, and `termWeeks` are mandatory on the
/// wire; every history field defaults to zero so brand-new borrowers can be
/// scored from a minimal envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationInput {
    pub loan_id: String,
    pub user_id: String,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub streak: u32,
    #[serde(default)]
    pub total_loans: u32,
    #[serde(default)]
    pub on_time_paid: u32,
    #[serde(default)]
    pub late_paid: u32,
    pub amount: f64,
    #[serde(default = "default_term_weeks")]
    pub term_weeks: u32,
    #[serde(default)]
    pub profile: BorrowerProfile,
}

fn default_term_weeks() -> u32 {
    4
}

/// Identity-verification slice of the borrower profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorrowerProfile {
    #[serde(default)]
    pub kyc_level: Option<String>,
}

/// Adjudication outcome for a scored application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Approve,
    Counter,
    Decline,
}

impl Decision {
    pub const fn label(self) -> &'static str {
        match self {
            Decision::Approve => "approve",
            Decision::Counter => "counter",
            Decision::Decline => "decline",
        }
    }
}

/// Human-readable risk band derived from the probability of default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PdBand {
    #[serde(rename = "Very Low")]
    VeryLow,
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl PdBand {
    pub fn from_pd(pd: f64) -> Self {
        if pd <= 0.05 {
            PdBand::VeryLow
        } else if pd <= 0.15 {
            PdBand::Low
        } else if pd <= 0.30 {
            PdBand::Medium
        } else if pd <= 0.50 {
            PdBand::High
        } else {
            PdBand::VeryHigh
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            PdBand::VeryLow => "Very Low",
            PdBand::Low => "Low",
            PdBand::Medium => "Medium",
            PdBand::High => "High",
            PdBand::VeryHigh => "Very High",
        }
    }
}

/// Reduced-terms proposal issued alongside a `counter` decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterOffer {
    pub amount: u32,
    pub term_weeks: u32,
    pub reason: String,
}

/// Full scoring result returned to the caller.
///
/// `counter_offer` stays `None` for a `counter` decision when no offer rule
/// matched; that gap is surfaced to the caller rather than papered over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionRecord {
    pub pd: f64,
    pub pd_band: PdBand,
    pub decision: Decision,
    pub reasons: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counter_offer: Option<CounterOffer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counterfactual_hint: Option<String>,
    pub model_version: String,
    pub scored_at: DateTime<Utc>,
}
