use chrono::Utc;
use ranked_core::constants::*;
use ranked_core::errors::RankedError;
use ranked_core::models::*;
use ranked_core::tier::{multiplier_for_label, Tier, TIER_TABLE};
use proptest::prelude::*;

#[test]
fn initialized_row_is_all_zero() {
    let row = CategoryProgress::initialized("Flicking", Utc::now());
    assert_eq!(row.category, "Flicking");
    assert_eq!(row.xp, 0);
    assert_eq!(row.progress_points, 0);
    assert_eq!(row.runs_count, 0);
    assert_eq!(row.distinct_tasks_count, 0);
    assert!(row.last_run_at.is_none());
}

#[test]
fn with_write_sets_both_timestamps() {
    let row = CategoryProgress::initialized("Tracking", Utc::now());
    let now = Utc::now();
    let updated = row.with_write(&ProgressWrite {
        xp: 10,
        progress_points: 20,
        runs_count: 1,
        distinct_tasks_count: 3,
        written_at: now,
    });
    assert_eq!(updated.category, "Tracking");
    assert_eq!(updated.last_updated_at, now);
    assert_eq!(updated.last_run_at, Some(now));
    assert_eq!(updated.distinct_tasks_count, 3);
}

#[test]
fn observation_from_raw_validates_every_field() {
    let ok = RunObservation::from_raw("Flicking", 0.5, &[0.5, 0.4], "Gold", Some(0.3), 2).unwrap();
    assert_eq!(ok.recent_percentiles.len(), 2);
    assert_eq!(ok.skill_percentile.map(Percentile::value), Some(0.3));

    let bad_recent = RunObservation::from_raw("Flicking", 0.5, &[0.5, 1.4], "Gold", None, 2);
    assert!(matches!(bad_recent, Err(RankedError::InvalidPercentile { .. })));

    let bad_skill = RunObservation::from_raw("Flicking", 0.5, &[], "Gold", Some(-0.2), 2);
    assert!(matches!(bad_skill, Err(RankedError::InvalidPercentile { .. })));

    let bad_tasks = RunObservation::from_raw("Flicking", 0.5, &[], "Gold", None, -1);
    assert!(matches!(bad_tasks, Err(RankedError::InvalidObservation { .. })));

    let bad_category = RunObservation::from_raw("  ", 0.5, &[], "Gold", None, 0);
    assert!(matches!(bad_category, Err(RankedError::InvalidObservation { .. })));
}

#[test]
fn snapshot_serializes_in_camel_case() {
    let snapshot = ProgressSnapshot::new(1100, 22, 900, "Gold");
    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["xpMax"], 1000);
    assert_eq!(json["overflowMax"], 1200);
    assert_eq!(json["xpGainLastRun"], 22);
    assert_eq!(json["progressTierDisplay"], "Gold");
    assert_eq!(json["isOverflow"], true);
}

#[test]
fn percentile_deserialization_rejects_out_of_range() {
    assert!(serde_json::from_str::<Percentile>("0.25").is_ok());
    assert!(serde_json::from_str::<Percentile>("1.5").is_err());
}

#[test]
fn every_tier_has_a_table_entry() {
    for tier in Tier::ALL {
        assert!(TIER_TABLE.iter().any(|(t, _)| *t == tier), "{tier} missing");
    }
}

proptest! {
    #[test]
    fn multiplier_in_unit_interval(label in prop_oneof![
        Just("Bronze".to_string()),
        Just("Silver".to_string()),
        Just("Gold".to_string()),
        Just("Platinum".to_string()),
        Just("Diamond".to_string()),
        Just("Master".to_string()),
        Just("Grandmaster".to_string()),
        Just("Champion".to_string()),
        Just("Unranked".to_string()),
        "[a-zA-Z]{0,12}",
    ]) {
        let m = multiplier_for_label(&label);
        prop_assert!(m > 0.0 && m <= 1.0, "multiplier {} for {}", m, label);
    }

    #[test]
    fn percentile_accepts_exactly_unit_interval(value in -2.0f64..2.0) {
        let result = Percentile::new(value);
        prop_assert_eq!(result.is_ok(), (0.0..=1.0).contains(&value));
    }

    #[test]
    fn tier_range_clamp_stays_in_bounds(min in 0u32..3000, width in 1u32..1000, raw in -1e6f64..1e6) {
        let range = TierRange::new(Tier::Gold, min, min + width);
        let clamped = range.clamp(raw);
        prop_assert!(clamped >= f64::from(min));
        prop_assert!(clamped <= f64::from(min + width + OVERFLOW_ALLOWANCE));
    }
}
