use super::domain::ApplicationInput;
use super::ScoreError;

/// Maximum amount unlocked at a borrower level. Unknown levels fall back to
/// the level-0 cap.
pub fn unlocked_cap(level: u32) -> f64 {
    match level {
        0 => 500.0,
        1 => 750.0,
        2 => 1000.0,
        3 => 1250.0,
        4 => 1500.0,
        5 => 2000.0,
        6 => 2500.0,
        7 => 3000.0,
        8 => 3500.0,
        9 => 4000.0,
        10 => 5000.0,
        _ => 500.0,
    }
}

/// Engineered view of an application, immutable once derived.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    pub level: u32,
    pub streak: u32,
    pub total_loans: u32,
    pub on_time_paid: u32,
    /// Carried through from the input for parity; no rule consumes it yet.
    pub late_paid: u32,
    pub amount: f64,
    pub term_weeks: u32,
    pub on_time_rate: f64,
    pub amount_to_cap_ratio: f64,
    pub kyc_verified: bool,
}

impl FeatureVector {
    pub fn from_input(input: &ApplicationInput) -> Self {
        let on_time_rate = f64::from(input.on_time_paid) / f64::from(input.total_loans.max(1));
        let amount_to_cap_ratio = input.amount / unlocked_cap(input.level);
        let kyc_verified = input
            .profile
            .kyc_level
            .as_deref()
            .is_some_and(|kyc| kyc == "verified");

        Self {
            level: input.level,
            streak: input.streak,
            total_loans: input.total_loans,
            on_time_paid: input.on_time_paid,
            late_paid: input.late_paid,
            amount: input.amount,
            term_weeks: input.term_weeks,
            on_time_rate,
            amount_to_cap_ratio,
            kyc_verified,
        }
    }

    /// A borrower with no level and no loan history has no repayment signal.
    pub fn is_new_borrower(&self) -> bool {
        self.level == 0 && self.total_loans == 0
    }

    pub(crate) fn ensure_finite(&self) -> Result<(), ScoreError> {
        for (feature, value) in [
            ("amount", self.amount),
            ("onTimeRate", self.on_time_rate),
            ("amountToCapRatio", self.amount_to_cap_ratio),
        ] {
            if !value.is_finite() {
                return Err(ScoreError::NonFiniteFeature { feature });
            }
        }
        Ok(())
    }
}
