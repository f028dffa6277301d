use chrono::Utc;
use proptest::prelude::*;
use ranked_core::constants::*;
use ranked_core::models::*;
use ranked_core::tier::Tier;
use ranked_scoring::{compute_run_xp_gain, compute_update};

fn arb_tier_label() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Bronze".to_string()),
        Just("Silver".to_string()),
        Just("Gold".to_string()),
        Just("Platinum".to_string()),
        Just("Diamond".to_string()),
        Just("Master".to_string()),
        Just("Grandmaster".to_string()),
        Just("Champion".to_string()),
        Just("Unranked".to_string()),
        Just("NotATier".to_string()),
    ]
}

fn arb_range() -> impl Strategy<Value = TierRange> {
    (0u32..2700, 1u32..400).prop_map(|(min, width)| TierRange::new(Tier::Gold, min, min + width))
}

proptest! {
    #[test]
    fn xp_gain_is_at_least_one(
        now in 0.0f64..=1.0,
        base in 0.0f64..=1.0,
        tier in arb_tier_label(),
    ) {
        let gain = compute_run_xp_gain(
            Percentile::new(now).unwrap(),
            Percentile::new(base).unwrap(),
            &tier,
        );
        prop_assert!(gain >= 1);
        // (4 + 20) * 1.00 is the largest possible gain.
        prop_assert!(gain <= 24);
    }

    #[test]
    fn new_xp_stays_within_bounds(
        xp in 0u32..=OVERFLOW_MAX,
        now in 0.0f64..=1.0,
        history in proptest::collection::vec(0.0f64..=1.0, 0..15),
        tier in arb_tier_label(),
        range in arb_range(),
    ) {
        let obs = RunObservation::from_raw("Flicking", now, &history, &tier, None, 0).unwrap();
        let current = CategoryProgress {
            xp,
            ..CategoryProgress::initialized("Flicking", Utc::now())
        };
        let breakdown = compute_update(&current, &obs, &range);
        prop_assert!(breakdown.new_xp <= OVERFLOW_MAX);
    }

    #[test]
    fn new_points_stay_within_tier_range(
        points in 0u32..5000,
        now in 0.0f64..=1.0,
        skill in proptest::option::of(0.0f64..=1.0),
        range in arb_range(),
    ) {
        let obs = RunObservation::from_raw("Flicking", now, &[now], "Gold", skill, 0).unwrap();
        let current = CategoryProgress {
            progress_points: points,
            ..CategoryProgress::initialized("Flicking", Utc::now())
        };
        let breakdown = compute_update(&current, &obs, &range);
        prop_assert!(range.contains(breakdown.new_progress_points),
            "{} outside {:?}", breakdown.new_progress_points, range);
    }

    #[test]
    fn repeated_max_gains_never_exceed_overflow_max(runs in 1usize..400) {
        let range = TierRange::new(Tier::Bronze, 0, 375);
        let obs = RunObservation::from_raw("Flicking", 1.0, &[1.0, 0.0], "Bronze", Some(1.0), 0).unwrap();
        let mut current = CategoryProgress::initialized("Flicking", Utc::now());
        for _ in 0..runs {
            let b = compute_update(&current, &obs, &range);
            current.xp = b.new_xp;
            current.progress_points = b.new_progress_points;
        }
        prop_assert!(current.xp <= OVERFLOW_MAX);
        prop_assert!(current.progress_points <= range.ceiling());
    }
}
