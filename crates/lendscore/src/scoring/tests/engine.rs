use super::common::*;
use crate::scoring::{Decision, PdBand, ScoreError};

#[test]
fn modest_new_borrower_is_approved() {
    let record = engine_v2()
        .score(&new_borrower_application(300.0)) // ratio 0.6
        .expect("scores");

    assert_eq!(record.pd, 0.15);
    assert_eq!(record.pd_band, PdBand::Low);
    assert_eq!(record.decision, Decision::Approve);
    assert_eq!(
        record.reasons,
        vec!["Conservative amount relative to limit", "Low risk assessment"]
    );
    assert!(record.counter_offer.is_none());
    assert!(record.counterfactual_hint.is_none());
    assert_eq!(record.model_version, "champion-v2.0");
}

#[test]
fn stretching_new_borrower_gets_a_counter_offer() {
    let record = engine_v2()
        .score(&new_borrower_application(480.0)) // ratio 0.96, below the hard cap
        .expect("scores");

    assert_eq!(record.pd, 0.35);
    assert_eq!(record.decision, Decision::Counter);

    let offer = record.counter_offer.expect("starter offer");
    assert_eq!(offer.amount, 300);
    assert_eq!(offer.term_weeks, 4);

    assert_eq!(
        record.counterfactual_hint.as_deref(),
        Some("Adjusted terms were offered to fit your current profile")
    );
}

#[test]
fn seasoned_borrower_is_approved() {
    let record = engine_v2()
        .score(&seasoned_application())
        .expect("scores");

    assert!(record.pd < 0.25);
    assert_eq!(record.pd_band, PdBand::Low);
    assert_eq!(record.decision, Decision::Approve);
    assert!(record
        .reasons
        .contains(&"Excellent repayment history (90%+ on-time)".to_string()));
}

#[test]
fn over_cap_request_is_declined_unconditionally() {
    let record = engine_v2()
        .score(&over_cap_application()) // ratio 1.2
        .expect("scores");

    assert_eq!(record.decision, Decision::Decline);
    assert!(record
        .reasons
        .contains(&"Amount too close to current limit".to_string()));
    assert_eq!(
        record.counterfactual_hint.as_deref(),
        Some("Reach Level 2 with 2 consecutive on-time payments to unlock higher limits")
    );
    assert!(record.counter_offer.is_none());
}

#[test]
fn v1_declines_the_new_borrower_v2_approves() {
    let input = new_borrower_application(300.0);

    let v2 = engine_v2().score(&input).expect("scores");
    assert_eq!(v2.decision, Decision::Approve);

    let v1 = engine_v1().score(&input).expect("scores");
    assert_eq!(v1.decision, Decision::Decline);
    assert_eq!(v1.pd, 0.7006);
    assert_eq!(v1.model_version, "champion-v1.0");
    assert_eq!(v1.pd_band, PdBand::VeryHigh);
}

#[test]
fn scoring_is_idempotent_modulo_timestamp() {
    let engine = engine_v2();
    let input = new_borrower_application(480.0);

    let first = engine.score(&input).expect("scores");
    let second = engine.score(&input).expect("scores");

    assert_eq!(first.pd, second.pd);
    assert_eq!(first.decision, second.decision);
    assert_eq!(first.reasons, second.reasons);
    assert_eq!(first.counter_offer, second.counter_offer);
    assert_eq!(first.counterfactual_hint, second.counterfactual_hint);
    assert_eq!(first.model_version, second.model_version);
}

#[test]
fn pd_is_always_in_range_and_rounded() {
    let inputs = [
        new_borrower_application(10.0),
        new_borrower_application(499.0),
        seasoned_application(),
        over_cap_application(),
    ];

    for input in &inputs {
        let record = engine_v2().score(input).expect("scores");
        assert!((0.01..=0.95).contains(&record.pd), "pd {}", record.pd);
        let scaled = record.pd * 10_000.0;
        assert!((scaled - scaled.round()).abs() < 1e-9, "pd {}", record.pd);
        assert!(!record.reasons.is_empty());
    }
}

#[test]
fn non_finite_amount_aborts_the_call() {
    let mut input = seasoned_application();
    input.amount = f64::NAN;

    let error = engine_v2().score(&input).expect_err("non-finite rejected");
    assert!(matches!(
        error,
        ScoreError::NonFiniteFeature { feature: "amount" }
    ));
}
