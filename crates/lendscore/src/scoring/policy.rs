use super::domain::Decision;
use super::features::FeatureVector;
use super::model::RuleSet;

/// Ordered decision rules; the first match wins.
pub(crate) fn decide(rule_set: RuleSet, features: &FeatureVector, pd: f64) -> Decision {
    // Hard cap overrides everything else.
    if features.amount_to_cap_ratio > 1.0 {
        return Decision::Decline;
    }

    if rule_set.shortcuts_new_borrowers() && features.is_new_borrower() {
        return if features.amount_to_cap_ratio <= 0.8 {
            Decision::Approve
        } else {
            Decision::Counter
        };
    }

    let thresholds = rule_set.thresholds();
    if pd <= thresholds.approve {
        Decision::Approve
    } else if pd <= thresholds.counter {
        if features.amount_to_cap_ratio > 0.8 {
            Decision::Counter
        } else {
            Decision::Approve
        }
    } else {
        Decision::Decline
    }
}
