use super::common::*;
use crate::scoring::offer::counter_offer;
use crate::scoring::RuleSet;

#[test]
fn new_borrowers_are_offered_a_starter_amount() {
    let mut input = new_borrower_application(480.0);
    input.term_weeks = 12;
    let features = features_for(&input);

    let offer = counter_offer(RuleSet::ChampionV2, &features).expect("starter offer");
    assert_eq!(offer.amount, 300); // 60% of the level-0 cap
    assert_eq!(offer.term_weeks, 8); // requested 12, capped at 8
    assert_eq!(offer.reason, "Starter amount for first-time borrowers");
}

#[test]
fn near_cap_borrowers_are_offered_a_reduced_amount() {
    let mut input = seasoned_application();
    input.amount = 1700.0; // ratio 0.85
    input.term_weeks = 10;
    let features = features_for(&input);

    let offer = counter_offer(RuleSet::ChampionV2, &features).expect("reduced offer");
    assert_eq!(offer.amount, 1400); // 70% of the level-5 cap
    assert_eq!(offer.term_weeks, 6); // requested 10, capped at 6
    assert_eq!(offer.reason, "Reduced amount and term for approval");
}

#[test]
fn v1_treats_new_borrowers_like_anyone_else() {
    let features = features_for(&new_borrower_application(480.0)); // ratio 0.96

    let offer = counter_offer(RuleSet::ChampionV1, &features).expect("ratio offer");
    assert_eq!(offer.amount, 350); // 70% of cap, not the starter amount
    assert_eq!(offer.term_weeks, 4);
}

#[test]
fn no_offer_when_no_rule_matches() {
    // The policy gap: a counter decision whose features satisfy neither the
    // new-borrower nor the near-cap rule yields no concrete offer.
    let features = features_for(&seasoned_application()); // ratio 0.7
    assert_eq!(counter_offer(RuleSet::ChampionV2, &features), None);
}
