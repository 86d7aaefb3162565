use super::domain::CounterOffer;
use super::features::{unlocked_cap, FeatureVector};
use super::model::RuleSet;

const NEW_BORROWER_CAP_SHARE: f64 = 0.6;
const NEW_BORROWER_MAX_TERM_WEEKS: u32 = 8;
const NEAR_CAP_SHARE: f64 = 0.7;
const NEAR_CAP_MAX_TERM_WEEKS: u32 = 6;

/// Reduced-terms proposal for a `counter` decision. Returns `None` when no
/// offer rule matches; callers surface that gap instead of asserting on it.
pub(crate) fn counter_offer(rule_set: RuleSet, features: &FeatureVector) -> Option<CounterOffer> {
    let cap = unlocked_cap(features.level);

    if rule_set.shortcuts_new_borrowers() && features.is_new_borrower() {
        return Some(CounterOffer {
            amount: (cap * NEW_BORROWER_CAP_SHARE) as u32,
            term_weeks: features.term_weeks.min(NEW_BORROWER_MAX_TERM_WEEKS),
            reason: "Starter amount for first-time borrowers".to_string(),
        });
    }

    if features.amount_to_cap_ratio > 0.8 {
        return Some(CounterOffer {
            amount: (cap * NEAR_CAP_SHARE) as u32,
            term_weeks: features.term_weeks.min(NEAR_CAP_MAX_TERM_WEEKS),
            reason: "Reduced amount and term for approval".to_string(),
        });
    }

    None
}
