//! End-to-end review scenarios on the built-in catalog.

use desk_configurator::{
    PurchaseGate, Review, ReviewError, SwapOutcome, compute_score, generate_candidates,
    proceed_to_purchase, swap_product,
};
use desk_core::entities::Configuration;
use desk_core::enums::{Purpose, Style};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn config(budget: f64, depth: f64) -> Configuration {
    Configuration {
        space_width: 120.0,
        space_depth: depth,
        budget,
        purpose: Purpose::Balanced,
        style: Style::Modern,
    }
}

#[test]
fn candidate_ids_are_stable() {
    for cfg in [config(0.0, 0.0), config(5000.0, 60.0), config(1e6, 500.0)] {
        let ids: Vec<String> = generate_candidates(&cfg).into_iter().map(|p| p.id).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6"]);
    }
}

#[rstest]
#[case(8000.0, true)]
#[case(7999.0, false)]
fn chair_budget_boundary(#[case] budget: f64, #[case] compatible: bool) {
    let products = generate_candidates(&config(budget, 60.0));
    let chair = &products[1];
    assert_eq!(chair.compatible, compatible);
    assert_eq!(chair.issue.is_some(), !compatible);
}

#[rstest]
#[case(50.0, true)]
#[case(49.0, false)]
fn arm_depth_boundary(#[case] depth: f64, #[case] compatible: bool) {
    let products = generate_candidates(&config(5000.0, depth));
    let arm = &products[3];
    assert_eq!(arm.compatible, compatible);
    assert_eq!(
        arm.issue.as_deref(),
        (!compatible).then_some("Insufficient desk depth, arm may extend beyond desk edge")
    );
}

#[test]
fn default_configuration_scores_83() {
    let products = generate_candidates(&Configuration::default());
    assert!(!products[1].compatible);
    assert!(products[3].compatible);
    assert_eq!(compute_score(&products), 83);
}

#[test]
fn swapping_the_chair_unlocks_purchase() {
    let cfg = Configuration::default();
    let products = swap_product(&generate_candidates(&cfg), "2", &cfg);

    let chair = &products[1];
    assert!(chair.compatible);
    assert!(chair.issue.is_none());
    assert_eq!(chair.price, 1299.0);
    assert_eq!(chair.specs, "Adjustable height, mesh backrest");
    assert_eq!(compute_score(&products), 100);

    let plan = proceed_to_purchase(&products, PurchaseGate::default()).unwrap();
    assert_eq!(plan.lines.len(), 6);
    assert_eq!(plan.total_price, 9194.0);
    assert_eq!(plan.lines[1].links[0].platform, "IKEA Official");
}

#[test]
fn swapping_a_compatible_item_is_idempotent() {
    let cfg = Configuration::default();
    let products = generate_candidates(&cfg);
    assert_eq!(swap_product(&products, "3", &cfg), products);
    assert_eq!(swap_product(&products, "nope", &cfg), products);
}

#[test]
fn score_never_drops_after_swap() {
    let cfg = config(1000.0, 10.0);
    let products = generate_candidates(&cfg);
    let before = compute_score(&products);
    let after_chair = swap_product(&products, "2", &cfg);
    let after_arm = swap_product(&after_chair, "4", &cfg);
    assert!(compute_score(&after_chair) >= before);
    assert!(compute_score(&after_arm) >= compute_score(&after_chair));
    assert_eq!(compute_score(&after_arm), 100);
    assert_eq!(after_arm.len(), 6);
}

#[test]
fn review_reports_outcomes_and_gate() {
    let mut review = Review::new(Configuration::default());
    assert_eq!(review.swap("1"), SwapOutcome::AlreadyCompatible);
    assert!(matches!(review.swap("2"), SwapOutcome::Swapped { ref id, .. } if id == "2"));

    let summary = review.summary(PurchaseGate::default());
    assert_eq!(summary.score, 100);
    assert!(summary.purchase_allowed);
    assert_eq!(summary.incompatible_count, 0);
}

#[test]
fn purchase_blocked_reports_score() {
    let products = generate_candidates(&config(100.0, 20.0));
    let err = proceed_to_purchase(&products, PurchaseGate::default()).unwrap_err();
    assert_eq!(
        err,
        ReviewError::PurchaseBlocked {
            score: 67,
            required: 100
        }
    );
}
