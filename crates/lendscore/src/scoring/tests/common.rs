use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::scoring::domain::{ApplicationInput, BorrowerProfile};
use crate::scoring::{scoring_router, FeatureVector, RuleSet, ScoringEngine};

/// Minimal envelope for a brand-new borrower: level 0, no history, cap 500.
pub(super) fn new_borrower_application(amount: f64) -> ApplicationInput {
    ApplicationInput {
        loan_id: "LN-1001".to_string(),
        user_id: "USR-77".to_string(),
        level: 0,
        streak: 0,
        total_loans: 0,
        on_time_paid: 0,
        late_paid: 0,
        amount,
        term_weeks: 4,
        profile: BorrowerProfile::default(),
    }
}

/// Level-5 borrower with a long, clean history: cap 2000.
pub(super) fn seasoned_application() -> ApplicationInput {
    ApplicationInput {
        loan_id: "LN-2044".to_string(),
        user_id: "USR-31".to_string(),
        level: 5,
        streak: 0,
        total_loans: 20,
        on_time_paid: 19,
        late_paid: 1,
        amount: 1400.0,
        term_weeks: 4,
        profile: BorrowerProfile {
            kyc_level: Some("verified".to_string()),
        },
    }
}

/// Level-1 borrower asking for more than the unlocked cap of 750.
pub(super) fn over_cap_application() -> ApplicationInput {
    ApplicationInput {
        loan_id: "LN-3090".to_string(),
        user_id: "USR-12".to_string(),
        level: 1,
        streak: 0,
        total_loans: 5,
        on_time_paid: 0,
        late_paid: 5,
        amount: 900.0,
        term_weeks: 4,
        profile: BorrowerProfile::default(),
    }
}

pub(super) fn features_for(input: &ApplicationInput) -> FeatureVector {
    FeatureVector::from_input(input)
}

pub(super) fn engine_v1() -> ScoringEngine {
    ScoringEngine::new(RuleSet::ChampionV1)
}

pub(super) fn engine_v2() -> ScoringEngine {
    ScoringEngine::new(RuleSet::ChampionV2)
}

pub(super) fn router_v2() -> axum::Router {
    scoring_router(Arc::new(engine_v2()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
