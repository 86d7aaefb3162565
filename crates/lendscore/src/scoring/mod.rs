//! Scoring engine: five pure stages run in fixed order over a copied input.
//!
//! Feature extraction, PD calculation, decision, explanation, and
//! counter-offer synthesis share no mutable state, so the engine can be
//! invoked from any number of concurrent requests without synchronization.

pub mod domain;
mod explain;
mod features;
mod model;
mod offer;
mod policy;
pub mod router;

#[cfg(test)]
mod tests;

pub use domain::{
    ApplicationInput, BorrowerProfile, CounterOffer, Decision, DecisionRecord, PdBand,
};
pub use features::{unlocked_cap, FeatureVector};
pub use model::{DecisionThresholds, RuleSet, FEATURE_NAMES};
pub use router::{scoring_router, PROTOTYPE_WARNING};

use chrono::Utc;
use tracing::warn;

/// Error raised when a scoring stage cannot complete. No partial result is
/// ever returned; the whole call aborts.
#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    #[error("derived feature '{feature}' is not finite")]
    NonFiniteFeature { feature: &'static str },
}

/// Stateless scorer applying the configured rule set.
pub struct ScoringEngine {
    rule_set: RuleSet,
}

impl ScoringEngine {
    pub fn new(rule_set: RuleSet) -> Self {
        Self { rule_set }
    }

    pub fn rule_set(&self) -> RuleSet {
        self.rule_set
    }

    pub fn model_version(&self) -> &'static str {
        self.rule_set.model_version()
    }

    pub fn score(&self, input: &ApplicationInput) -> Result<DecisionRecord, ScoreError> {
        let features = FeatureVector::from_input(input);
        features.ensure_finite()?;

        let pd = model::probability_of_default(self.rule_set, &features);
        let decision = policy::decide(self.rule_set, &features, pd);
        let reasons = explain::reasons(&features, pd, decision);
        let counterfactual_hint = explain::counterfactual(self.rule_set, &features, decision);

        let counter_offer = if decision == Decision::Counter {
            let offer = offer::counter_offer(self.rule_set, &features);
            if offer.is_none() {
                warn!(
                    loan_id = %input.loan_id,
                    amount_to_cap_ratio = features.amount_to_cap_ratio,
                    "counter decision produced no concrete offer"
                );
            }
            offer
        } else {
            None
        };

        let pd = model::round_pd(pd);

        Ok(DecisionRecord {
            pd,
            pd_band: PdBand::from_pd(pd),
            decision,
            reasons,
            counter_offer,
            counterfactual_hint,
            model_version: self.rule_set.model_version().to_string(),
            scored_at: Utc::now(),
        })
    }
}
