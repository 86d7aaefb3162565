use super::domain::Decision;
use super::features::FeatureVector;
use super::model::RuleSet;

/// Reason codes for the decision. Conditions are evaluated independently and
/// every matching string is appended in order; the result is never empty.
pub(crate) fn reasons(features: &FeatureVector, pd: f64, decision: Decision) -> Vec<String> {
    let mut reasons = Vec::new();

    match decision {
        Decision::Approve => {
            if features.level >= 3 {
                reasons.push("Strong borrower level (Level 3+)".to_string());
            }
            if features.on_time_rate >= 0.9 {
                reasons.push("Excellent repayment history (90%+ on-time)".to_string());
            }
            if features.streak >= 3 {
                reasons.push("Consistent payment streak".to_string());
            }
            if features.amount_to_cap_ratio <= 0.7 {
                reasons.push("Conservative amount relative to limit".to_string());
            }
            if pd <= 0.15 {
                reasons.push("Low risk assessment".to_string());
            }
        }
        Decision::Decline => {
            if features.amount_to_cap_ratio > 0.9 {
                reasons.push("Amount too close to current limit".to_string());
            }
            if features.on_time_rate < 0.7 {
                reasons.push("Inconsistent repayment history".to_string());
            }
            if features.is_new_borrower() {
                reasons.push("New borrower - start with smaller amount".to_string());
            }
            if pd > 0.4 {
                reasons.push("High risk assessment".to_string());
            }
        }
        Decision::Counter => {
            if features.amount_to_cap_ratio > 0.8 {
                reasons.push("Reduced amount within comfort zone".to_string());
            }
            if features.term_weeks > 8 {
                reasons.push("Shorter term recommended".to_string());
            }
            reasons.push("Partial approval based on current profile".to_string());
        }
    }

    if reasons.is_empty() {
        reasons.push("Standard policy assessment".to_string());
    }

    reasons
}

/// Single suggestion describing what would change the outcome. Declines take
/// the first matching branch or none; counters carry a fixed hint under the
/// v2 rule set; approvals never get one.
pub(crate) fn counterfactual(
    rule_set: RuleSet,
    features: &FeatureVector,
    decision: Decision,
) -> Option<String> {
    match decision {
        Decision::Decline => {
            if rule_set.shortcuts_new_borrowers() && features.is_new_borrower() {
                let starter_amount = (features.amount * 0.6) as i64;
                return Some(format!(
                    "Start with ₱{starter_amount} to build repayment history before larger amounts"
                ));
            }
            if features.level < 5 {
                let next_level = features.level + 1;
                return Some(format!(
                    "Reach Level {next_level} with {next_level} consecutive on-time payments to unlock higher limits"
                ));
            }
            if features.on_time_rate < 0.8 {
                return Some(
                    "Improve repayment consistency to 80%+ for better approval odds".to_string(),
                );
            }
            if features.amount_to_cap_ratio > 0.9 {
                let safe_amount = (features.amount * 0.7) as i64;
                return Some(format!(
                    "Consider applying for ₱{safe_amount} for higher approval probability"
                ));
            }
            None
        }
        Decision::Counter if rule_set.shortcuts_new_borrowers() => {
            Some("Adjusted terms were offered to fit your current profile".to_string())
        }
        Decision::Counter | Decision::Approve => None,
    }
}
