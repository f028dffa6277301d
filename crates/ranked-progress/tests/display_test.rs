mod common;

use std::sync::Arc;

use common::{observation, sqlite_engine};
use ranked_core::traits::ICategoryProgressStore;
use ranked_progress::ProgressDisplayReader;
use ranked_storage::InMemoryProgressStore;

#[test]
fn missing_row_reads_as_zero_snapshot_without_creating_it() {
    let store = Arc::new(InMemoryProgressStore::new());
    let reader = ProgressDisplayReader::new(store.clone());

    let snapshot = reader.get_progress_display_data("Flicking", "Silver").unwrap();
    assert_eq!(snapshot.xp, 0);
    assert_eq!(snapshot.progress_points, 0);
    assert_eq!(snapshot.xp_gain_last_run, 0);
    assert_eq!(snapshot.xp_max, 1000);
    assert_eq!(snapshot.overflow_max, 1200);
    assert_eq!(snapshot.progress_tier_display, "Silver");
    assert!(!snapshot.is_overflow);

    assert!(store.is_empty());
}

#[tokio::test]
async fn stored_row_reads_with_zero_gain() {
    let (store, engine) = sqlite_engine();
    let updated = engine
        .update_category_progress(&observation("Tracking", 0.8, &[0.8, 0.5], "Gold", Some(0.3), 3))
        .await
        .unwrap();
    assert_eq!(updated.xp_gain_last_run, 22);

    let before = store.get("Tracking").unwrap().unwrap();
    let snapshot = engine
        .display_reader()
        .get_progress_display_data("Tracking", "Gold")
        .unwrap();
    assert_eq!(snapshot.xp, updated.xp);
    assert_eq!(snapshot.progress_points, updated.progress_points);
    assert_eq!(snapshot.xp_gain_last_run, 0);

    // Reading twice changes nothing.
    engine
        .display_reader()
        .get_progress_display_data("Tracking", "Gold")
        .unwrap();
    assert_eq!(store.get("Tracking").unwrap().unwrap(), before);
}

#[tokio::test]
async fn overflow_flag_follows_stored_xp() {
    let (_, engine) = sqlite_engine();
    let obs = observation("Flicking", 1.0, &[1.0, 0.0], "Bronze", Some(0.1), 1);
    for _ in 0..45 {
        engine.update_category_progress(&obs).await.unwrap();
    }
    // 45 * 24 = 1080
    let snapshot = engine
        .display_reader()
        .get_progress_display_data("Flicking", "Bronze")
        .unwrap();
    assert_eq!(snapshot.xp, 1080);
    assert!(snapshot.is_overflow);
}

#[tokio::test]
async fn all_display_data_preserves_request_order() {
    let (_, engine) = sqlite_engine();
    engine
        .update_category_progress(&observation("Tracking", 0.5, &[], "Gold", Some(0.3), 1))
        .await
        .unwrap();

    let snapshots = engine
        .display_reader()
        .get_all_display_data(&[("Flicking", "Bronze"), ("Tracking", "Gold")])
        .unwrap();
    assert_eq!(snapshots.len(), 2);
    assert_eq!(snapshots[0].progress_tier_display, "Bronze");
    assert_eq!(snapshots[0].xp, 0);
    assert_eq!(snapshots[1].progress_tier_display, "Gold");
    assert_eq!(snapshots[1].xp, 4);
}
