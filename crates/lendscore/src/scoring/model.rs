use super::features::FeatureVector;

/// Rule-set variants the engine can run with. `ChampionV2` is canonical;
/// `ChampionV1` keeps the earlier thresholds for backward A/B comparison and
/// is only reachable through configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleSet {
    ChampionV1,
    ChampionV2,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::ChampionV2
    }
}

impl RuleSet {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "champion-v1" | "v1" => Some(Self::ChampionV1),
            "champion-v2" | "v2" => Some(Self::ChampionV2),
            _ => None,
        }
    }

    pub const fn model_version(self) -> &'static str {
        match self {
            RuleSet::ChampionV1 => "champion-v1.0",
            RuleSet::ChampionV2 => "champion-v2.0",
        }
    }

    /// V2 bypasses the linear model for borrowers with no repayment signal.
    pub(crate) const fn shortcuts_new_borrowers(self) -> bool {
        matches!(self, RuleSet::ChampionV2)
    }

    pub const fn thresholds(self) -> DecisionThresholds {
        match self {
            RuleSet::ChampionV1 => DecisionThresholds {
                approve: 0.20,
                counter: 0.35,
            },
            RuleSet::ChampionV2 => DecisionThresholds {
                approve: 0.25,
                counter: 0.40,
            },
        }
    }
}

/// PD cut-offs applied in order: at or below `approve` approves, at or below
/// `counter` may counter, anything above declines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecisionThresholds {
    pub approve: f64,
    pub counter: f64,
}

/// Feature names in weight-table order, as exposed by the model-info surface.
pub const FEATURE_NAMES: [&str; 7] = [
    "level",
    "streak",
    "amountToCapRatio",
    "totalLoans",
    "onTimeRate",
    "kycLevel",
    "termWeeks",
];

struct Weights {
    level: f64,
    streak: f64,
    amount_to_cap_ratio: f64,
    total_loans: f64,
    on_time_rate: f64,
    kyc_level: f64,
    term_weeks: f64,
}

/// Favorability weights: a higher weighted score means a lower PD.
const WEIGHTS: Weights = Weights {
    level: 0.15,
    streak: 0.20,
    amount_to_cap_ratio: -0.25,
    total_loans: 0.10,
    on_time_rate: 0.30,
    kyc_level: 0.05,
    term_weeks: -0.05,
};

const PD_FLOOR: f64 = 0.01;
const PD_CEILING: f64 = 0.95;

fn weighted_score(features: &FeatureVector) -> f64 {
    let kyc = if features.kyc_verified { 1.0 } else { 0.0 };

    f64::from(features.level) * WEIGHTS.level
        + f64::from(features.streak) * WEIGHTS.streak
        + features.amount_to_cap_ratio * WEIGHTS.amount_to_cap_ratio
        + f64::from(features.total_loans) * WEIGHTS.total_loans
        + features.on_time_rate * WEIGHTS.on_time_rate
        + kyc * WEIGHTS.kyc_level
        + f64::from(features.term_weeks) * WEIGHTS.term_weeks
}

/// Probability of default for the given features under the active rule set.
pub fn probability_of_default(rule_set: RuleSet, features: &FeatureVector) -> f64 {
    if rule_set.shortcuts_new_borrowers() && features.is_new_borrower() {
        // No repayment history to feed the linear model; fall back to a
        // conservative amount-driven step function.
        return if features.amount_to_cap_ratio <= 0.6 {
            0.15
        } else if features.amount_to_cap_ratio <= 0.8 {
            0.25
        } else {
            0.35
        };
    }

    let score = weighted_score(features);
    let pd = 1.0 / (1.0 + (score - 0.5).exp());
    pd.clamp(PD_FLOOR, PD_CEILING)
}

/// Round to the four decimal places the wire contract promises.
pub(crate) fn round_pd(pd: f64) -> f64 {
    (pd * 10_000.0).round() / 10_000.0
}
